// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Seam carving: content-aware reduction of an image's width.
//!
//! The carver works on an in-memory grid of RGB pixels in `[0, 1]`.
//! Each step computes the image's energy (the gradient magnitude of
//! its brightness), finds the connected top-to-bottom seam of least
//! total energy, and cuts it out.
//!
//! ```
//! use seamcarve::{carve_to_width, Image, Pixel};
//!
//! let image = Image::from_fn(6, 4, |x, _| Pixel::gray(if x < 3 { 0.0 } else { 1.0 }));
//! let narrower = carve_to_width(&image, 4)?;
//! assert_eq!(narrower.dimensions(), (4, 4));
//! # Ok::<(), seamcarve::CarveError>(())
//! ```

mod ternary;

pub mod convert;
pub mod dump;
pub mod energy;
pub mod error;
mod parallel;
pub mod pixel;
pub mod seamcarver;
pub mod seamfinder;
pub mod seamremover;
pub mod twodmap;

pub use energy::{brightness, compute_energy, EnergyField};
pub use error::{CarveError, Result};
pub use pixel::{Image, Pixel};
pub use seamcarver::{carve_sequence, carve_to_width, SeamCarver};
pub use seamfinder::{cumulative_cost, find_seam, CostAndOffset, CumulativeCost, Seam};
pub use seamremover::{mark_seam, remove_seam};
pub use twodmap::TwoDimensionalMap;
