use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use picsq_core::geometry::{DisplayPoint, Viewport};
use picsq_core::io::image_io::read_size;
use picsq_core::session::{CenterUpdate, ImageId, Session};
use picsq_core::transform::{pad_offset, SquareMode};

use super::parse;
use crate::summary::{self, GeometryReport};

#[derive(Args)]
pub struct GeometryArgs {
    /// Input image file
    pub file: PathBuf,

    /// Preview size WIDTHxHEIGHT
    #[arg(long, value_parser = parse::viewport)]
    pub viewport: Option<Viewport>,

    /// Preview point X,Y to pick the crop center from; repeat to replay a drag
    #[arg(long, value_parser = parse::point, allow_hyphen_values = true)]
    pub pick: Vec<(i32, i32)>,
}

pub fn run(args: &GeometryArgs) -> Result<()> {
    let size = read_size(&args.file)
        .with_context(|| format!("Failed to read {}", args.file.display()))?;

    let mut session = Session::new(args.viewport.unwrap_or_default(), SquareMode::Crop);
    let id = ImageId::from(args.file.as_path());
    let geometry = session.load(id.clone(), size)?;

    let mut ignored = Vec::new();
    for &(x, y) in &args.pick {
        if session.update_crop_center(&id, DisplayPoint::new(x, y))? == CenterUpdate::Ignored {
            ignored.push((x, y));
        }
    }

    let report = GeometryReport {
        file: &args.file,
        size,
        viewport: session.viewport(),
        geometry,
        center: session.crop_center(&id).unwrap_or_else(|| size.default_center()),
        window: session.crop_window(&id)?,
        overlay: session.selection_rect(&id)?,
        pad_side: size.longer_edge(),
        pad_offset: pad_offset(size),
        ignored_picks: &ignored,
    };
    summary::print_geometry(&report);

    Ok(())
}
