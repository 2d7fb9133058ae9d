use image::{imageops, RgbImage};

use crate::error::{Result, SquareError};
use crate::geometry::{CropCenter, ImageSize};

/// A square region within the source image.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CropWindow {
    pub x: u32,
    pub y: u32,
    pub side: u32,
}

/// Resolve the square window of side `min(width, height)` centered on
/// `center`, shifted back inside the image when the center is near (or past)
/// an edge.
pub fn crop_window(size: ImageSize, center: CropCenter) -> Result<CropWindow> {
    if size.width == 0 || size.height == 0 {
        return Err(SquareError::InvalidImage {
            width: size.width,
            height: size.height,
        });
    }

    let side = size.shorter_edge();
    let half = (side / 2) as i64;

    let left = (center.x as i64 - half).clamp(0, (size.width - side) as i64);
    let top = (center.y as i64 - half).clamp(0, (size.height - side) as i64);

    Ok(CropWindow {
        x: left as u32,
        y: top as u32,
        side,
    })
}

/// Copy the square crop window out of `image`. No resampling.
pub fn crop_to_square(image: &RgbImage, center: CropCenter) -> Result<RgbImage> {
    let w = crop_window(ImageSize::of(image), center)?;
    Ok(imageops::crop_imm(image, w.x, w.y, w.side, w.side).to_image())
}
