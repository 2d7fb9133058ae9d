//! Caller-owned, per-image selection state.
//!
//! A [`Session`] maps an opaque [`ImageId`] to the crop center and mode the
//! user picked for that image. Nothing in the geometry or transform modules
//! holds state of its own; the session is passed to them explicitly.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::batch::SquareJob;
use crate::error::{Result, SquareError};
use crate::geometry::{
    compute_display_geometry, display_to_original, original_to_display_rect, CropCenter,
    DisplayGeometry, DisplayPoint, DisplayRect, ImageSize, Viewport,
};
use crate::transform::{crop_window, CropWindow, SquareMode};

/// Opaque identity of one image within a session.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ImageId(String);

impl ImageId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&Path> for ImageId {
    fn from(path: &Path) -> Self {
        Self(path.to_string_lossy().into_owned())
    }
}

impl From<&str> for ImageId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl fmt::Display for ImageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// What the session knows about one loaded image.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageState {
    pub size: ImageSize,
    pub geometry: DisplayGeometry,
    pub center: CropCenter,
    /// Per-image override; `None` follows the session default.
    pub mode: Option<SquareMode>,
}

/// Outcome of a pick on the preview.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CenterUpdate {
    Moved(CropCenter),
    /// The point fell on the letterbox margin; the stored center is unchanged.
    Ignored,
}

pub struct Session {
    viewport: Viewport,
    default_mode: SquareMode,
    images: HashMap<ImageId, ImageState>,
}

impl Session {
    pub fn new(viewport: Viewport, default_mode: SquareMode) -> Self {
        Self {
            viewport,
            default_mode,
            images: HashMap::new(),
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn default_mode(&self) -> SquareMode {
        self.default_mode
    }

    pub fn set_default_mode(&mut self, mode: SquareMode) {
        self.default_mode = mode;
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Register (or revisit) an image and return its display geometry.
    ///
    /// The first load seeds the geometric center. Revisiting keeps whatever
    /// center was picked, unless the image's dimensions changed underneath.
    pub fn load(&mut self, id: ImageId, size: ImageSize) -> Result<DisplayGeometry> {
        let geometry = compute_display_geometry(size, self.viewport)?;

        match self.images.entry(id) {
            Entry::Occupied(mut e) => {
                let resized = e.get().size != size;
                if resized {
                    debug!(id = %e.key(), %size, "Image dimensions changed, resetting crop center");
                }
                let state = e.get_mut();
                if resized {
                    state.size = size;
                    state.center = size.default_center();
                }
                state.geometry = geometry;
            }
            Entry::Vacant(e) => {
                debug!(id = %e.key(), %size, "Loaded image into session");
                e.insert(ImageState {
                    size,
                    geometry,
                    center: size.default_center(),
                    mode: None,
                });
            }
        }

        Ok(geometry)
    }

    pub fn state(&self, id: &ImageId) -> Option<&ImageState> {
        self.images.get(id)
    }

    pub fn geometry(&self, id: &ImageId) -> Option<DisplayGeometry> {
        self.images.get(id).map(|s| s.geometry)
    }

    pub fn crop_center(&self, id: &ImageId) -> Option<CropCenter> {
        self.images.get(id).map(|s| s.center)
    }

    /// Effective mode: the per-image choice, else the session default.
    pub fn mode(&self, id: &ImageId) -> SquareMode {
        self.images
            .get(id)
            .and_then(|s| s.mode)
            .unwrap_or(self.default_mode)
    }

    pub fn set_mode(&mut self, id: &ImageId, mode: SquareMode) -> Result<()> {
        self.state_mut(id)?.mode = Some(mode);
        Ok(())
    }

    /// Set a center directly in original coordinates (e.g. from a config file).
    pub fn set_crop_center(&mut self, id: &ImageId, center: CropCenter) -> Result<()> {
        self.state_mut(id)?.center = center;
        Ok(())
    }

    /// Apply a click or drag at `point` on the preview of `id`.
    pub fn update_crop_center(&mut self, id: &ImageId, point: DisplayPoint) -> Result<CenterUpdate> {
        let state = self.state_mut(id)?;

        match display_to_original(point, state.size, &state.geometry) {
            Some(center) => {
                state.center = center;
                debug!(%id, x = point.x, y = point.y, %center, "Crop center moved");
                Ok(CenterUpdate::Moved(center))
            }
            None => {
                debug!(%id, x = point.x, y = point.y, "Pick outside displayed image ignored");
                Ok(CenterUpdate::Ignored)
            }
        }
    }

    /// Overlay rectangle for the current selection of `id`.
    pub fn selection_rect(&self, id: &ImageId) -> Result<DisplayRect> {
        let state = self.state(id).ok_or_else(|| unknown(id))?;
        Ok(original_to_display_rect(state.center, state.size, &state.geometry))
    }

    /// The crop window the current center resolves to.
    pub fn crop_window(&self, id: &ImageId) -> Result<CropWindow> {
        let state = self.state(id).ok_or_else(|| unknown(id))?;
        crop_window(state.size, state.center)
    }

    /// Snapshot the selection of `id` as a batch job writing from `source`.
    pub fn job(&self, id: &ImageId, source: impl Into<PathBuf>) -> Result<SquareJob> {
        let state = self.state(id).ok_or_else(|| unknown(id))?;
        Ok(SquareJob {
            source: source.into(),
            mode: state.mode.unwrap_or(self.default_mode),
            center: Some(state.center),
        })
    }

    fn state_mut(&mut self, id: &ImageId) -> Result<&mut ImageState> {
        self.images.get_mut(id).ok_or_else(|| unknown(id))
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Viewport::default(), SquareMode::default())
    }
}

fn unknown(id: &ImageId) -> SquareError {
    SquareError::UnknownImage(id.to_string())
}
