use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Args, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use picsq_core::batch::{process_batch, ProgressReporter, SquareJob};
use picsq_core::config::SquareConfig;
use picsq_core::geometry::{CropCenter, DisplayPoint, Viewport};
use picsq_core::io::image_io::read_size;
use picsq_core::session::{CenterUpdate, ImageId, Session};
use picsq_core::transform::SquareMode;
use tracing::{debug, warn};

use super::parse;
use crate::summary;

#[derive(Clone, Copy, ValueEnum)]
pub enum ModeArg {
    /// Cut a square around the crop center (default)
    Crop,
    /// Extend the shorter edge with background
    Pad,
}

impl From<ModeArg> for SquareMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Crop => SquareMode::Crop,
            ModeArg::Pad => SquareMode::Pad,
        }
    }
}

#[derive(Args)]
pub struct SquareArgs {
    /// Input image files
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Config file (TOML); flags below override its values
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Squaring mode for images without a per-image override
    #[arg(long, value_enum)]
    pub mode: Option<ModeArg>,

    /// Output folder (default: square_output/ next to each source)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Crop center X,Y in original pixels, applied to every input
    #[arg(long, value_parser = parse::point, allow_hyphen_values = true)]
    pub center: Option<(i32, i32)>,

    /// Preview point X,Y to pick the crop center from; repeat to replay a drag
    #[arg(long, value_parser = parse::point, allow_hyphen_values = true)]
    pub pick: Vec<(i32, i32)>,

    /// Preview size WIDTHxHEIGHT that --pick coordinates refer to
    #[arg(long, value_parser = parse::viewport)]
    pub viewport: Option<Viewport>,

    /// Pad background color R,G,B
    #[arg(long, value_parser = parse::rgb)]
    pub background: Option<[u8; 3]>,
}

struct BarReporter {
    pb: ProgressBar,
}

impl ProgressReporter for BarReporter {
    fn begin(&self, total: usize) {
        self.pb.set_length(total as u64);
    }

    fn item_done(&self, source: &Path, _ok: bool) {
        if let Some(name) = source.file_name() {
            self.pb.set_message(name.to_string_lossy().into_owned());
        }
        self.pb.inc(1);
    }

    fn finish(&self) {
        self.pb.finish_with_message("Done");
    }
}

pub fn run(args: &SquareArgs) -> Result<()> {
    let config = resolve_config(args)?;

    let mut session = Session::new(config.viewport, config.mode);
    let jobs: Vec<SquareJob> = args
        .files
        .iter()
        .map(|file| {
            plan_job(&mut session, &config, args, file).unwrap_or_else(|e| {
                // Decoding will fail again in the batch and be reported there.
                debug!(file = %file.display(), error = %e, "Could not plan selection");
                let mode = config
                    .override_for(file)
                    .and_then(|o| o.mode)
                    .unwrap_or(config.mode);
                SquareJob::new(file, mode)
            })
        })
        .collect();

    summary::print_run_summary(&config, &jobs);

    let pb = ProgressBar::new(jobs.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{msg:24} [{bar:40}] {pos}/{len}")?
            .progress_chars("=> "),
    );
    let reporter = BarReporter { pb };

    let report = process_batch(&jobs, &config.batch_options(), &reporter);
    summary::print_report(&report);

    if !report.is_clean() {
        bail!(
            "{} of {} images failed",
            report.failed_count(),
            report.total()
        );
    }
    Ok(())
}

fn resolve_config(args: &SquareArgs) -> Result<SquareConfig> {
    let mut config = match args.config {
        Some(ref path) => SquareConfig::load(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?,
        None => SquareConfig::default(),
    };

    if let Some(mode) = args.mode {
        config.mode = mode.into();
    }
    if let Some(ref dir) = args.output {
        config.output_folder = Some(dir.clone());
    }
    if let Some(viewport) = args.viewport {
        config.viewport = viewport;
    }
    if let Some(bg) = args.background {
        config.background = bg;
    }
    Ok(config)
}

/// Load `file` into the session, apply its selection, and snapshot the
/// result as a job.
fn plan_job(
    session: &mut Session,
    config: &SquareConfig,
    args: &SquareArgs,
    file: &Path,
) -> picsq_core::error::Result<SquareJob> {
    let id = ImageId::from(file);
    let size = read_size(file)?;
    session.load(id.clone(), size)?;
    apply_selection(session, &id, config, file, args.center, &args.pick)?;
    session.job(&id, file)
}

/// Config override first, then `--center`, then picks replayed in order.
fn apply_selection(
    session: &mut Session,
    id: &ImageId,
    config: &SquareConfig,
    file: &Path,
    center: Option<(i32, i32)>,
    picks: &[(i32, i32)],
) -> picsq_core::error::Result<()> {
    if let Some(o) = config.override_for(file) {
        if let Some(mode) = o.mode {
            session.set_mode(id, mode)?;
        }
        if let Some(center) = o.center {
            session.set_crop_center(id, center)?;
        }
    }

    if let Some((x, y)) = center {
        session.set_crop_center(id, CropCenter::new(x, y))?;
    }

    for &(x, y) in picks {
        if session.update_crop_center(id, DisplayPoint::new(x, y))? == CenterUpdate::Ignored {
            warn!(file = %file.display(), x, y, "Pick lies outside the displayed image, ignored");
        }
    }

    Ok(())
}
