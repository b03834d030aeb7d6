// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Seamcarve - The main driver
//!
//! Energy, seam, removal; repeat until the image is narrow enough.

use crate::energy::{check_dimensions, compute_energy};
use crate::error::{CarveError, Result};
use crate::pixel::Image;
use crate::seamfinder::find_seam;
use crate::seamremover::remove_seam;
use log::{debug, trace};

fn carveonce(image: &Image) -> Result<Image> {
    let energy = compute_energy(image)?;
    let seam = find_seam(&energy)?;
    trace!("seam: {:?}", seam);
    remove_seam(image, &seam)
}

/// A struct for holding the image to be carved.
pub struct SeamCarver<'a> {
    image: &'a Image,
}

impl<'a> SeamCarver<'a> {
    /// Creates a new SeamCarver with an image to be carved.
    pub fn new(image: &'a Image) -> Self {
        Self { image }
    }

    // Everything is checked before the first seam comes out, so a bad
    // request never yields half an answer.
    fn check(&self, name: &'static str, value: u32, removals: u32) -> Result<()> {
        let (width, height) = self.image.dimensions();
        if value > width {
            return Err(CarveError::InvalidParameter { name, value, width });
        }
        if removals > 0 {
            check_dimensions(width, height, "image")?;
        }
        Ok(())
    }

    // This is absurdly inefficient, as the entire energy map and cost
    // table are recalculated every time.  Only the columns near the
    // last seam actually change.

    /// Repeatedly carve seams out of the image until it is
    /// `target_width` pixels wide.  Asking for the current width hands
    /// back an unchanged copy.
    pub fn carve_to_width(&self, target_width: u32) -> Result<Image> {
        let width = self.image.width();
        self.check("target width", target_width, width.saturating_sub(target_width))?;

        let mut scratch = self.image.clone();
        while scratch.width() > target_width {
            scratch = carveonce(&scratch)?;
            debug!("W: {}, {}", scratch.width(), scratch.height());
        }
        Ok(scratch)
    }

    /// Carve exactly `count` seams, keeping the image produced by every
    /// step, in removal order.
    ///
    /// Every intermediate image is retained, so memory grows with
    /// `count × width × height`.  For large counts on large images,
    /// prefer `carve_to_width`.
    pub fn carve_sequence(&self, count: u32) -> Result<Vec<Image>> {
        self.check("removal count", count, count)?;

        let mut steps: Vec<Image> = Vec::with_capacity(count as usize);
        for _ in 0..count {
            let next = carveonce(steps.last().unwrap_or(self.image))?;
            debug!("W: {}, {}", next.width(), next.height());
            steps.push(next);
        }
        Ok(steps)
    }
}

/// Carve `image` down to `target_width` columns.
pub fn carve_to_width(image: &Image, target_width: u32) -> Result<Image> {
    SeamCarver::new(image).carve_to_width(target_width)
}

/// Carve `count` seams from `image`, returning every intermediate
/// image.
pub fn carve_sequence(image: &Image, count: u32) -> Result<Vec<Image>> {
    SeamCarver::new(image).carve_sequence(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pixel::Pixel;

    // A dark bar two pixels wide on a gentle ramp: the carver should
    // eat the ramp before it touches the bar.
    fn test_image() -> Image {
        Image::from_fn(8, 5, |x, y| {
            if x == 4 || x == 5 {
                Pixel::gray(0.0)
            } else {
                Pixel::new(0.8, 0.6 + 0.01 * y as f64, 0.5)
            }
        })
    }

    #[test]
    fn carving_to_the_current_width_changes_nothing() {
        let image = test_image();
        let result = carve_to_width(&image, 8).unwrap();
        assert_eq!(result, image);
    }

    #[test]
    fn every_target_width_is_reached_exactly() {
        let image = test_image();
        for w in 0..=8 {
            let result = carve_to_width(&image, w).unwrap();
            assert_eq!(result.dimensions(), (w, 5));
        }
    }

    #[test]
    fn sequence_matches_carve_to_width() {
        let image = test_image();
        assert!(carve_sequence(&image, 0).unwrap().is_empty());

        let steps = carve_sequence(&image, 4).unwrap();
        assert_eq!(steps.len(), 4);
        for (k, step) in steps.iter().enumerate() {
            assert_eq!(step.dimensions(), (8 - k as u32 - 1, 5));
        }
        assert_eq!(steps[3], carve_to_width(&image, 4).unwrap());
    }

    #[test]
    fn carving_is_deterministic() {
        let image = test_image();
        assert_eq!(
            carve_sequence(&image, 6).unwrap(),
            carve_sequence(&image, 6).unwrap()
        );
    }

    #[test]
    fn the_high_contrast_bar_survives() {
        let image = test_image();
        let result = carve_to_width(&image, 4).unwrap();
        for row in result.rows() {
            assert!(row.iter().any(|p| *p == Pixel::gray(0.0)));
        }
    }

    #[test]
    fn out_of_range_requests_are_rejected() {
        let image = test_image();
        assert!(matches!(
            carve_to_width(&image, 9),
            Err(CarveError::InvalidParameter {
                value: 9,
                width: 8,
                ..
            })
        ));
        assert!(matches!(
            carve_sequence(&image, 9),
            Err(CarveError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn empty_image_with_nothing_to_do_is_fine() {
        let image = Image::new(0, 0);
        assert_eq!(carve_to_width(&image, 0).unwrap(), image);
        assert!(carve_sequence(&image, 0).unwrap().is_empty());

        let image = Image::new(3, 0);
        assert!(matches!(
            carve_to_width(&image, 1),
            Err(CarveError::InvalidInput(_))
        ));
    }
}
