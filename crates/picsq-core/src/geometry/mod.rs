//! Mapping between a letterboxed preview ("display space") and the source
//! image's pixel grid ("original space").

mod mapper;
mod types;

pub use mapper::{
    compute_display_geometry, display_to_original, original_to_display,
    original_to_display_rect,
};
pub use types::{CropCenter, DisplayGeometry, DisplayPoint, DisplayRect, ImageSize, Viewport};
