// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Turning real-valued fields into something you can look at
//!
//! The energy field and the cumulative cost table are plain grids of
//! reals.  For a viewer they are scaled so the largest value is white.

use crate::twodmap::TwoDimensionalMap;
use image::{GrayImage, Luma};

/// Render a field as grayscale, normalized by its maximum.  A field
/// that is zero everywhere comes out black.
pub fn field_to_image(field: &TwoDimensionalMap<f64>) -> GrayImage {
    let (width, height) = field.dimensions();
    let factor = field
        .as_slice()
        .iter()
        .cloned()
        .fold(0.0_f64, f64::max);

    GrayImage::from_fn(width, height, |x, y| {
        let v = if factor > 0.0 {
            field[(x, y)] / factor
        } else {
            0.0
        };
        Luma([(v.clamp(0.0, 1.0) * 255.0).round() as u8])
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maximum_maps_to_white() {
        let field = TwoDimensionalMap::from_vec(3, 1, vec![0.0, 2.0, 4.0]).unwrap();
        let out = field_to_image(&field);
        assert_eq!(out.as_raw(), &vec![0, 128, 255]);
    }

    #[test]
    fn flat_field_is_black() {
        let field: TwoDimensionalMap<f64> = TwoDimensionalMap::new(2, 2);
        let out = field_to_image(&field);
        assert!(out.pixels().all(|p| p[0] == 0));
    }
}
