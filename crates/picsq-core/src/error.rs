use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SquareError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image format error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    #[error("Invalid image: {width}x{height} has no pixels")]
    InvalidImage { width: u32, height: u32 },

    #[error("Canvas {side}x{side} needs {bytes} bytes, above the {limit} byte limit")]
    CanvasTooLarge { side: u32, bytes: u64, limit: u64 },

    #[error("Unknown image: {0}")]
    UnknownImage(String),

    #[error("Refusing to overwrite source file {}", .0.display())]
    WouldOverwriteSource(PathBuf),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, SquareError>;
