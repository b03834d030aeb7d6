// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The two-dimensional map
//!
//! Every grid the carver touches (the image itself, the brightness
//! and energy fields, the cumulative cost table and its backtrack
//! offsets) is one of these, addressed by `(x, y)` the same way the
//! image crate addresses pixels.

use crate::error::{CarveError, Result};
use std::ops::{Index, IndexMut};

/// An addressable two-dimensional field of values, stored row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct TwoDimensionalMap<P: Copy> {
    width: u32,
    height: u32,
    data: Vec<P>,
}

impl<P: Default + Copy> TwoDimensionalMap<P> {
    /// Define a new map with every cell set to the content type's
    /// default.
    pub fn new(width: u32, height: u32) -> Self {
        TwoDimensionalMap {
            width,
            height,
            data: vec![P::default(); width as usize * height as usize],
        }
    }
}

impl<P: Copy> TwoDimensionalMap<P> {
    /// Wrap an existing row-major buffer.  The buffer must hold exactly
    /// `width * height` values.
    pub fn from_vec(width: u32, height: u32, data: Vec<P>) -> Result<Self> {
        let expected = width as usize * height as usize;
        if data.len() != expected {
            return Err(CarveError::InvalidInput(format!(
                "a {}x{} map needs {} values, got {}",
                width,
                height,
                expected,
                data.len()
            )));
        }
        Ok(TwoDimensionalMap {
            width,
            height,
            data,
        })
    }

    /// Build a map by calling `f(x, y)` for every cell.
    pub fn from_fn<F>(width: u32, height: u32, mut f: F) -> Self
    where
        F: FnMut(u32, u32) -> P,
    {
        let mut data = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                data.push(f(x, y));
            }
        }
        TwoDimensionalMap {
            width,
            height,
            data,
        }
    }

    // Absolutely, the number one name of this game is keep the index
    // math in a singular location and never, ever mess with it.
    fn get_index(&self, x: u32, y: u32) -> usize {
        debug_assert!(x < self.width && y < self.height);
        (y as usize) * (self.width as usize) + (x as usize)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// `(width, height)`, in that order, as `GenericImageView` does.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// True if the map has no cells at all.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get the value at a single cell's address
    pub fn get_pt(&self, x: u32, y: u32) -> P {
        self.data[self.get_index(x, y)]
    }

    /// Get the value at `(x, y)` with both coordinates clamped into the
    /// map, which replicates the border outward.
    pub fn get_clamped(&self, x: i64, y: i64) -> P {
        let cx = x.clamp(0, self.width as i64 - 1) as u32;
        let cy = y.clamp(0, self.height as i64 - 1) as u32;
        self.get_pt(cx, cy)
    }

    /// Set a value at a single cell's address
    pub fn put_pt(&mut self, x: u32, y: u32, e: P) {
        let index = self.get_index(x, y);
        self.data[index] = e;
    }

    /// One row of the map.
    pub fn row(&self, y: u32) -> &[P] {
        let w = self.width as usize;
        let start = y as usize * w;
        &self.data[start..start + w]
    }

    /// Iterate over the rows of the map, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[P]> + '_ {
        (0..self.height).map(move |y| self.row(y))
    }

    /// Row `y` mutably, together with row `y + 1` for reading.  This is
    /// exactly the shape of one step of a bottom-up dynamic program.
    pub(crate) fn row_and_below_mut(&mut self, y: u32) -> (&mut [P], &[P]) {
        let w = self.width as usize;
        let split = (y as usize + 1) * w;
        let (head, tail) = self.data.split_at_mut(split);
        (&mut head[split - w..], &tail[..w])
    }

    pub(crate) fn row_mut(&mut self, y: u32) -> &mut [P] {
        let w = self.width as usize;
        let start = y as usize * w;
        &mut self.data[start..start + w]
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [P] {
        &mut self.data
    }

    /// The raw row-major values.
    pub fn as_slice(&self) -> &[P] {
        &self.data
    }

    /// Apply `f` to every cell, returning a new map of the same
    /// dimensions.
    pub fn map<U, F>(&self, f: F) -> TwoDimensionalMap<U>
    where
        U: Copy,
        F: FnMut(&P) -> U,
    {
        TwoDimensionalMap {
            width: self.width,
            height: self.height,
            data: self.data.iter().map(f).collect(),
        }
    }
}

impl<P: Copy> Index<(u32, u32)> for TwoDimensionalMap<P> {
    type Output = P;

    /// A convenience addressing mode for getting values.
    fn index(&self, (x, y): (u32, u32)) -> &P {
        let index = self.get_index(x, y);
        &self.data[index]
    }
}

impl<P: Copy> IndexMut<(u32, u32)> for TwoDimensionalMap<P> {
    /// A convenience addressing mode for setting values.
    fn index_mut(&mut self, (x, y): (u32, u32)) -> &mut P {
        let index = self.get_index(x, y);
        &mut self.data[index]
    }
}
