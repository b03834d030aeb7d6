// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::io;
use thiserror::Error;

/// Everything that can go wrong while carving.
#[derive(Error, Debug)]
pub enum CarveError {
    /// Degenerate grid dimensions, or a seam that doesn't fit the
    /// image it is applied to.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A target width or removal count outside `0..=width`.
    #[error("{name} {value} is outside the valid range 0..={width}")]
    InvalidParameter {
        name: &'static str,
        value: u32,
        width: u32,
    },

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, CarveError>;
