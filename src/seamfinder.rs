// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Find the cheapest vertical seam in an energy field
//!
//! The cost table is built bottom-up: every cell holds the least total
//! energy of any seam running from it down to the bottom edge,
//! together with the step (left, straight, right) that continuation
//! takes.  The seam is then read top-down, starting from the cheapest
//! cell in the top row.

use crate::cq;
use crate::energy::{check_dimensions, EnergyField};
use crate::error::Result;
use crate::parallel::fill_cells;
use crate::twodmap::TwoDimensionalMap;
use itertools::Itertools;

/// One column index per row, top to bottom.  Adjacent entries differ
/// by at most one.
pub type Seam = Vec<u32>;

/// The cumulative cost of a cell, plus the column delta (-1, 0 or +1)
/// to the cell below it on the cheapest continuation.
#[derive(Default, Debug, Copy, Clone, PartialEq)]
pub struct CostAndOffset {
    pub cost: f64,
    pub offset: i8,
}

// Candidate steps in order of preference: when two continuations cost
// the same, straight down wins, then left, then right.
const STEPS: [i8; 3] = [0, -1, 1];

/// The fully built dynamic-programming table for one energy field.
#[derive(Debug, Clone)]
pub struct CumulativeCost {
    table: TwoDimensionalMap<CostAndOffset>,
}

// Pick the cheapest of the up-to-three cells below column `x`.  Only
// a strictly smaller cost displaces an earlier candidate.
#[inline]
fn cheapest_below(below: &[CostAndOffset], x: usize) -> CostAndOffset {
    let max_x = below.len() - 1;
    STEPS
        .iter()
        .filter(|step| {
            cq!(**step < 0, x > 0, true) && cq!(**step > 0, x < max_x, true)
        })
        .map(|step| CostAndOffset {
            cost: below[(x as i64 + *step as i64) as usize].cost,
            offset: *step,
        })
        .fold(None, |best: Option<CostAndOffset>, candidate| match best {
            Some(b) if b.cost <= candidate.cost => Some(b),
            _ => Some(candidate),
        })
        .unwrap_or_default()
}

impl CumulativeCost {
    /// Build the table.  Row `height - 1` is the energy itself; every
    /// row above adds its own energy to the cheapest neighbor below.
    /// Rows must be done strictly bottom-up, but the cells within one
    /// row are independent of each other.
    pub fn new(energy: &EnergyField) -> Result<Self> {
        let (width, height) = energy.dimensions();
        check_dimensions(width, height, "energy field")?;

        let mut table: TwoDimensionalMap<CostAndOffset> = TwoDimensionalMap::new(width, height);

        // Populate the bottom row with their native energies.
        let bottom = height - 1;
        for (cell, e) in table.row_mut(bottom).iter_mut().zip(energy.row(bottom)) {
            cell.cost = *e;
        }

        for y in (0..bottom).rev() {
            let energies = energy.row(y);
            let (row, below) = table.row_and_below_mut(y);
            fill_cells(row, |x, cell| {
                let best = cheapest_below(below, x);
                *cell = CostAndOffset {
                    cost: energies[x] + best.cost,
                    offset: best.offset,
                };
            });
        }

        Ok(CumulativeCost { table })
    }

    pub fn width(&self) -> u32 {
        self.table.width()
    }

    pub fn height(&self) -> u32 {
        self.table.height()
    }

    /// The raw table, cost and offset per cell.
    pub fn table(&self) -> &TwoDimensionalMap<CostAndOffset> {
        &self.table
    }

    /// The cumulative cost table as a plain grid of reals, suitable
    /// for handing to a viewer.
    pub fn costs(&self) -> TwoDimensionalMap<f64> {
        self.table.map(|c| c.cost)
    }

    /// The backtrack offsets as a plain grid of -1, 0 and +1.
    pub fn offsets(&self) -> TwoDimensionalMap<i8> {
        self.table.map(|c| c.offset)
    }

    /// The column of the cheapest seam's top cell.  Ties go to the
    /// leftmost column.
    pub fn start_column(&self) -> u32 {
        self.table
            .row(0)
            .iter()
            .position_min_by(|a, b| a.cost.total_cmp(&b.cost))
            .unwrap_or(0) as u32
    }

    /// The total energy of the cheapest seam.
    pub fn seam_energy(&self) -> f64 {
        self.table[(self.start_column(), 0)].cost
    }

    /// Walk the offsets down from the cheapest top cell.
    pub fn seam(&self) -> Seam {
        let mut x = self.start_column();
        (0..self.height())
            .map(|y| {
                let here = x;
                x = (here as i64 + self.table[(here, y)].offset as i64) as u32;
                here
            })
            .collect()
    }
}

/// Build the cumulative cost table for an energy field.
pub fn cumulative_cost(energy: &EnergyField) -> Result<CumulativeCost> {
    CumulativeCost::new(energy)
}

/// Given an energy field, return the list of x-coordinates that, when
/// mapped with the range `0..height`, give the XY coordinates of every
/// pixel in the cheapest vertical seam.
pub fn find_seam(energy: &EnergyField) -> Result<Seam> {
    Ok(CumulativeCost::new(energy)?.seam())
}
