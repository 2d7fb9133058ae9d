use image::{imageops, Rgb, RgbImage};

use crate::consts::MAX_CANVAS_BYTES;
use crate::error::{Result, SquareError};
use crate::geometry::ImageSize;

/// Where the source lands on a `longer_edge` square canvas.
pub fn pad_offset(size: ImageSize) -> (u32, u32) {
    let side = size.longer_edge();
    ((side - size.width) / 2, (side - size.height) / 2)
}

/// Paste `image` unscaled onto a square canvas filled with `background`.
///
/// Fails with [`SquareError::CanvasTooLarge`] instead of allocating a canvas
/// above [`MAX_CANVAS_BYTES`].
pub fn pad_to_square(image: &RgbImage, background: Rgb<u8>) -> Result<RgbImage> {
    let size = ImageSize::of(image);
    if size.width == 0 || size.height == 0 {
        return Err(SquareError::InvalidImage {
            width: size.width,
            height: size.height,
        });
    }

    let side = size.longer_edge();
    let bytes = side as u64 * side as u64 * 3;
    if bytes > MAX_CANVAS_BYTES {
        return Err(SquareError::CanvasTooLarge {
            side,
            bytes,
            limit: MAX_CANVAS_BYTES,
        });
    }
    let (x, y) = pad_offset(size);

    let mut canvas = RgbImage::from_pixel(side, side, background);
    imageops::replace(&mut canvas, image, x as i64, y as i64);
    Ok(canvas)
}
