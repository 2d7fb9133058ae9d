use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_VIEWPORT_HEIGHT, DEFAULT_VIEWPORT_WIDTH};
use crate::error::{Result, SquareError};

/// Pixel dimensions of a decoded source image.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ImageSize {
    pub width: u32,
    pub height: u32,
}

impl ImageSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Size of anything the `image` crate can view (decoded buffers, sub-images).
    pub fn of<I: image::GenericImageView>(image: &I) -> Self {
        let (width, height) = image.dimensions();
        Self { width, height }
    }

    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(SquareError::InvalidDimension {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }

    pub fn shorter_edge(&self) -> u32 {
        self.width.min(self.height)
    }

    pub fn longer_edge(&self) -> u32 {
        self.width.max(self.height)
    }

    /// Geometric center, used until the user picks another point.
    pub fn default_center(&self) -> CropCenter {
        CropCenter {
            x: (self.width / 2) as i32,
            y: (self.height / 2) as i32,
        }
    }
}

impl fmt::Display for ImageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Fixed on-screen area the preview is fitted into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(SquareError::InvalidDimension {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: DEFAULT_VIEWPORT_WIDTH,
            height: DEFAULT_VIEWPORT_HEIGHT,
        }
    }
}

impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Where a scaled image sits inside its viewport.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DisplayGeometry {
    pub offset_x: u32,
    pub offset_y: u32,
    pub scaled_width: u32,
    pub scaled_height: u32,
}

impl DisplayGeometry {
    /// True when `point` lands on the rendered image (edges inclusive).
    pub fn contains(&self, point: DisplayPoint) -> bool {
        let x0 = self.offset_x as i64;
        let y0 = self.offset_y as i64;
        let (x, y) = (point.x as i64, point.y as i64);
        x >= x0
            && x <= x0 + self.scaled_width as i64
            && y >= y0
            && y <= y0 + self.scaled_height as i64
    }

    /// Display pixels per original pixel along the horizontal axis.
    pub fn scale_for(&self, image: ImageSize) -> f64 {
        self.scaled_width as f64 / image.width.max(1) as f64
    }
}

/// A point in original-image pixel coordinates. May lie outside the image;
/// the crop window clamps it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[i32; 2]", into = "[i32; 2]")]
pub struct CropCenter {
    pub x: i32,
    pub y: i32,
}

impl CropCenter {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<[i32; 2]> for CropCenter {
    fn from([x, y]: [i32; 2]) -> Self {
        Self { x, y }
    }
}

impl From<CropCenter> for [i32; 2] {
    fn from(c: CropCenter) -> Self {
        [c.x, c.y]
    }
}

impl fmt::Display for CropCenter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A point in viewport pixel coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DisplayPoint {
    pub x: i32,
    pub y: i32,
}

impl DisplayPoint {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle in viewport pixel coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DisplayRect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl DisplayRect {
    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }
}
