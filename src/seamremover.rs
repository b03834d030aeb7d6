// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Taking a seam out of an image
//!
//! Both operations here copy; the image handed in is never touched.

use crate::energy::check_dimensions;
use crate::error::{CarveError, Result};
use crate::pixel::{Image, Pixel};

/// A seam must have one entry per row, and every entry must name a
/// column of the image.
fn check_seam(image: &Image, seam: &[u32]) -> Result<()> {
    let (width, height) = image.dimensions();
    check_dimensions(width, height, "image")?;
    if seam.len() != height as usize {
        return Err(CarveError::InvalidInput(format!(
            "seam has {} entries but the image has {} rows",
            seam.len(),
            height
        )));
    }
    if let Some((y, x)) = seam.iter().enumerate().find(|(_, x)| **x >= width) {
        return Err(CarveError::InvalidInput(format!(
            "seam column {} in row {} is outside an image {} pixels wide",
            x, y, width
        )));
    }
    Ok(())
}

/// Return a copy of the image one column narrower, with the pixel at
/// `seam[y]` dropped from every row `y` and everything to its right
/// moved one column left.
pub fn remove_seam(image: &Image, seam: &[u32]) -> Result<Image> {
    check_seam(image, seam)?;
    let (width, height) = image.dimensions();

    let mut data = Vec::with_capacity((width as usize - 1) * height as usize);
    for (row, &cut) in image.rows().zip(seam) {
        let cut = cut as usize;
        data.extend_from_slice(&row[..cut]);
        data.extend_from_slice(&row[cut + 1..]);
    }
    Image::from_vec(width - 1, height, data)
}

/// Return a copy of the image with the seam's pixels painted `color`,
/// for showing which seam goes next.
pub fn mark_seam(image: &Image, seam: &[u32], color: Pixel) -> Result<Image> {
    check_seam(image, seam)?;
    let mut marked = image.clone();
    for (y, &x) in seam.iter().enumerate() {
        marked[(x, y as u32)] = color;
    }
    Ok(marked)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Each pixel's red channel records its original column, its green
    // channel its row.
    fn labelled(width: u32, height: u32) -> Image {
        Image::from_fn(width, height, |x, y| Pixel::new(x as f64, y as f64, 0.0))
    }

    fn columns(image: &Image) -> Vec<Vec<u32>> {
        image
            .rows()
            .map(|row| row.iter().map(|p| p.r as u32).collect())
            .collect()
    }

    #[test]
    fn seam_pixels_are_gone_and_the_rest_shift_left() {
        let image = labelled(4, 3);
        let narrower = remove_seam(&image, &[0, 1, 3]).unwrap();
        assert_eq!(narrower.dimensions(), (3, 3));
        assert_eq!(
            columns(&narrower),
            vec![vec![1, 2, 3], vec![0, 2, 3], vec![0, 1, 2]]
        );
        // Rows never mix.
        for y in 0..3 {
            assert!(narrower.row(y).iter().all(|p| p.g == y as f64));
        }
    }

    #[test]
    fn input_image_is_untouched() {
        let image = labelled(3, 2);
        let before = image.clone();
        let _ = remove_seam(&image, &[1, 2]).unwrap();
        let _ = mark_seam(&image, &[1, 2], Pixel::gray(1.0)).unwrap();
        assert_eq!(image, before);
    }

    #[test]
    fn single_column_image_becomes_empty() {
        let image = labelled(1, 3);
        let narrower = remove_seam(&image, &[0, 0, 0]).unwrap();
        assert_eq!(narrower.dimensions(), (0, 3));
    }

    #[test]
    fn bad_seams_are_rejected() {
        let image = labelled(3, 2);
        assert!(matches!(
            remove_seam(&image, &[0]),
            Err(CarveError::InvalidInput(_))
        ));
        assert!(matches!(
            remove_seam(&image, &[0, 3]),
            Err(CarveError::InvalidInput(_))
        ));
        assert!(mark_seam(&image, &[0, 1, 2], Pixel::gray(0.0)).is_err());
        assert!(remove_seam(&Image::new(0, 0), &[]).is_err());
    }

    #[test]
    fn marking_paints_only_the_seam() {
        let image = Image::from_fn(3, 2, |_, _| Pixel::gray(0.5));
        let red = Pixel::new(1.0, 0.0, 0.0);
        let marked = mark_seam(&image, &[2, 1], red).unwrap();
        assert_eq!(marked[(2, 0)], red);
        assert_eq!(marked[(1, 1)], red);
        assert_eq!(marked[(0, 0)], Pixel::gray(0.5));
        assert_eq!(marked[(1, 0)], Pixel::gray(0.5));
    }
}
