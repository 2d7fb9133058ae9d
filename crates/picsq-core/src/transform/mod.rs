//! Reshaping a decoded image into a square: crop around a center, or pad
//! onto a background canvas.

mod crop;
mod pad;

use std::fmt;

use image::{Rgb, RgbImage};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::geometry::{CropCenter, ImageSize};

pub use crop::{crop_to_square, crop_window, CropWindow};
pub use pad::{pad_offset, pad_to_square};

/// How an image is made square.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SquareMode {
    /// Keep the shorter edge, cut a square window around the crop center.
    #[default]
    Crop,
    /// Keep every pixel, extend the shorter edge with background.
    Pad,
}

impl fmt::Display for SquareMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Crop => write!(f, "crop"),
            Self::Pad => write!(f, "pad"),
        }
    }
}

/// Produce a square image using `mode`.
///
/// `center` only matters for [`SquareMode::Crop`]; when absent the image's
/// geometric center is used. Pad mode ignores it entirely, so an out-of-range
/// center can never make it fail.
pub fn square_image(
    image: &RgbImage,
    mode: SquareMode,
    center: Option<CropCenter>,
    background: Rgb<u8>,
) -> Result<RgbImage> {
    match mode {
        SquareMode::Crop => {
            let center = center.unwrap_or_else(|| ImageSize::of(image).default_center());
            crop_to_square(image, center)
        }
        SquareMode::Pad => pad_to_square(image, background),
    }
}
