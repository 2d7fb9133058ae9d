use std::path::Path;

use image::RgbImage;

use crate::error::Result;
use crate::geometry::ImageSize;

/// Decode an image file and convert it to 8-bit RGB.
pub fn load_rgb(path: &Path) -> Result<RgbImage> {
    let img = image::open(path)?;
    Ok(img.to_rgb8())
}

/// Read only the header to get the pixel dimensions.
pub fn read_size(path: &Path) -> Result<ImageSize> {
    let (width, height) = image::image_dimensions(path)?;
    Ok(ImageSize::new(width, height))
}

/// Save an RGB image, choosing the format from the file extension.
pub fn save_rgb(image: &RgbImage, path: &Path) -> Result<()> {
    image.save(path)?;
    Ok(())
}
