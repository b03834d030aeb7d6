// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Moving pixels between the image crate and the carver
//!
//! The carver only ever sees RGB triples in `[0, 1]`.  Anything the
//! image crate can decode is brought into that range by dividing each
//! channel by its subpixel type's maximum value.

use crate::energy::check_dimensions;
use crate::error::Result;
use crate::pixel::{Image, Pixel};
use image::{GenericImageView, Primitive, Rgb, RgbImage};
use num_traits::NumCast;

#[inline]
fn normalized<S>(c: S) -> f64
where
    S: Primitive + 'static,
{
    let max: f64 = NumCast::from(S::DEFAULT_MAX_VALUE).unwrap_or(1.0);
    let c: f64 = NumCast::from(c).unwrap_or(0.0);
    c / max
}

/// Convert any image the image crate can view into the carver's
/// pixel grid.  An image with no rows or no columns is
/// `InvalidInput`.
pub fn from_image<I, P, S>(image: &I) -> Result<Image>
where
    I: GenericImageView<Pixel = P>,
    P: image::Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let (width, height) = image.dimensions();
    check_dimensions(width, height, "decoded image")?;
    Ok(Image::from_fn(width, height, |x, y| {
        let rgb = image.get_pixel(x, y).to_rgb();
        Pixel::new(normalized(rgb[0]), normalized(rgb[1]), normalized(rgb[2]))
    }))
}

#[inline]
fn to_byte(c: f64) -> u8 {
    (c.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Convert a pixel grid back into an 8-bit RGB image.
pub fn to_rgb_image(image: &Image) -> RgbImage {
    let (width, height) = image.dimensions();
    RgbImage::from_fn(width, height, |x, y| {
        let p = image[(x, y)];
        Rgb([to_byte(p.r), to_byte(p.g), to_byte(p.b)])
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CarveError;
    use image::{GrayImage, ImageBuffer, Luma};

    #[test]
    fn eight_bit_rgb_round_trips() {
        let source = RgbImage::from_fn(3, 2, |x, y| Rgb([(x * 100) as u8, (y * 255) as u8, 51]));
        let image = from_image(&source).unwrap();
        assert_eq!(image.dimensions(), (3, 2));
        assert_eq!(image[(0, 1)].g, 1.0);
        assert_eq!(image[(2, 0)].b, 0.2);
        assert_eq!(to_rgb_image(&image), source);
    }

    #[test]
    fn gray_and_wide_subpixels_are_normalized() {
        let gray: GrayImage = ImageBuffer::from_pixel(2, 2, Luma([255u8]));
        let image = from_image(&gray).unwrap();
        assert!(image.as_slice().iter().all(|p| *p == Pixel::gray(1.0)));

        let wide: ImageBuffer<Rgb<u16>, Vec<u16>> =
            ImageBuffer::from_pixel(1, 1, Rgb([0u16, 65535, 0]));
        assert_eq!(from_image(&wide).unwrap()[(0, 0)], Pixel::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn out_of_range_channels_are_clamped_on_the_way_out() {
        let image = Image::from_vec(2, 1, vec![Pixel::gray(-0.5), Pixel::gray(1.5)]).unwrap();
        let out = to_rgb_image(&image);
        assert_eq!(out.get_pixel(0, 0), &Rgb([0, 0, 0]));
        assert_eq!(out.get_pixel(1, 0), &Rgb([255, 255, 255]));
    }

    #[test]
    fn empty_images_are_rejected() {
        let empty = RgbImage::new(0, 5);
        assert!(matches!(
            from_image(&empty),
            Err(CarveError::InvalidInput(_))
        ));
    }
}
