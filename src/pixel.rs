// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use crate::twodmap::TwoDimensionalMap;

/// An RGB pixel with every channel normalized to `[0, 1]`.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Pixel {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Pixel {
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Pixel { r, g, b }
    }

    pub const fn gray(v: f64) -> Self {
        Pixel { r: v, g: v, b: v }
    }

    /// The plain mean of the three channels.  No gamma or luma
    /// weighting; the caller is trusted to have normalized the input.
    pub fn brightness(&self) -> f64 {
        (self.r + self.g + self.b) / 3.0
    }
}

/// The pixel grid the carver works on.
pub type Image = TwoDimensionalMap<Pixel>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brightness_is_channel_mean() {
        assert_eq!(Pixel::new(0.0, 0.5, 1.0).brightness(), 0.5);
        assert_eq!(Pixel::gray(0.25).brightness(), 0.25);
    }
}
