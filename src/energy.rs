// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Calculate the energy of an image
//!
//! Given an image, calculate the energy map: the gradient magnitude of
//! the image's brightness, measured with a pair of Sobel filters.
//! Pixels on the border see a replicated border, so the field always
//! has the dimensions of the image.  None of the forward-energy
//! variants described in [Avidan & Shamir (2007)] are implemented.

use crate::error::{CarveError, Result};
use crate::parallel::fill_cells;
use crate::pixel::Image;
use crate::twodmap::TwoDimensionalMap;

/// One non-negative importance value per pixel.
pub type EnergyField = TwoDimensionalMap<f64>;

// Both Sobel kernels are normalized by 1/8, so the response to a unit
// step edge is one half.
const SOBEL_NORM: f64 = 8.0;

pub(crate) fn check_dimensions(width: u32, height: u32, what: &str) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(CarveError::InvalidInput(format!(
            "{} has degenerate dimensions {}x{}",
            what, width, height
        )));
    }
    Ok(())
}

/// The brightness field: the mean of each pixel's three channels.
pub fn brightness(image: &Image) -> TwoDimensionalMap<f64> {
    image.map(|p| p.brightness())
}

// The Sobel kernels are separable: a [1, 2, 1] smoothing across the
// gradient direction, and a [-1, 0, 1] difference along it.  Writing
// them as "weighted far side minus weighted near side" also means a
// flat patch cancels to exactly zero.
#[inline]
fn smooth(a: f64, b: f64, c: f64) -> f64 {
    a + 2.0 * b + c
}

#[inline]
fn gradient_at(field: &TwoDimensionalMap<f64>, x: u32, y: u32) -> (f64, f64) {
    let (x, y) = (x as i64, y as i64);
    let at = |dx: i64, dy: i64| field.get_clamped(x + dx, y + dy);

    let gx = smooth(at(1, -1), at(1, 0), at(1, 1)) - smooth(at(-1, -1), at(-1, 0), at(-1, 1));
    let gy = smooth(at(-1, 1), at(0, 1), at(1, 1)) - smooth(at(-1, -1), at(0, -1), at(1, -1));
    (gx / SOBEL_NORM, gy / SOBEL_NORM)
}

/// Compute the energy of every pixel in an image: `sqrt(gx² + gy²)`
/// over the brightness field.  Fails with `InvalidInput` if the image
/// has no rows or no columns.
pub fn compute_energy(image: &Image) -> Result<EnergyField> {
    let (width, height) = image.dimensions();
    check_dimensions(width, height, "image")?;

    let field = brightness(image);
    let mut energy = EnergyField::new(width, height);
    let w = width as usize;
    fill_cells(energy.as_mut_slice(), |i, e| {
        let (x, y) = ((i % w) as u32, (i / w) as u32);
        let (gx, gy) = gradient_at(&field, x, y);
        *e = (gx * gx + gy * gy).sqrt();
    });
    Ok(energy)
}
