use std::path::{Path, PathBuf};

use image::Rgb;
use serde::{Deserialize, Serialize};

use crate::batch::BatchOptions;
use crate::consts::DEFAULT_BACKGROUND;
use crate::error::{Result, SquareError};
use crate::geometry::{CropCenter, Viewport};
use crate::transform::SquareMode;

/// Settings for a squaring run, usually read from a TOML file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SquareConfig {
    #[serde(default)]
    pub mode: SquareMode,
    /// Unset: write into `square_output/` next to each source.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_folder: Option<PathBuf>,
    /// Pad-mode canvas color as `[r, g, b]`.
    #[serde(default = "default_background")]
    pub background: [u8; 3],
    #[serde(default)]
    pub viewport: Viewport,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<ImageOverride>,
}

/// Per-image settings that win over the run-wide ones.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImageOverride {
    /// Full source path, or a bare file name matched against any source.
    pub path: PathBuf,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<SquareMode>,
    /// Crop center in original pixels, `[x, y]`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub center: Option<CropCenter>,
}

fn default_background() -> [u8; 3] {
    DEFAULT_BACKGROUND
}

impl Default for SquareConfig {
    fn default() -> Self {
        Self {
            mode: SquareMode::default(),
            output_folder: None,
            background: DEFAULT_BACKGROUND,
            viewport: Viewport::default(),
            images: Vec::new(),
        }
    }
}

impl SquareConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(contents).map_err(|e| SquareError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| SquareError::Config(e.to_string()))
    }

    pub fn validate(&self) -> Result<()> {
        self.viewport.validate()
    }

    pub fn background_rgb(&self) -> Rgb<u8> {
        Rgb(self.background)
    }

    /// The override entry for `source`, if any. Exact paths win over bare
    /// file-name entries.
    pub fn override_for(&self, source: &Path) -> Option<&ImageOverride> {
        self.images
            .iter()
            .find(|o| o.path == source)
            .or_else(|| {
                self.images.iter().find(|o| {
                    is_bare_name(&o.path) && o.path.file_name() == source.file_name()
                })
            })
    }

    pub fn batch_options(&self) -> BatchOptions {
        BatchOptions {
            output_folder: self.output_folder.clone(),
            background: self.background_rgb(),
        }
    }
}

fn is_bare_name(path: &Path) -> bool {
    path.parent().map_or(true, |p| p.as_os_str().is_empty())
}
