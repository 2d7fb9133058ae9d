//! Squaring many images, one independent job each.

use std::path::{Path, PathBuf};

use image::Rgb;
use rayon::prelude::*;
use tracing::{info, warn};

use crate::consts::DEFAULT_BACKGROUND;
use crate::error::{Result, SquareError};
use crate::geometry::CropCenter;
use crate::io::image_io::{load_rgb, save_rgb};
use crate::io::output::prepare_output;
use crate::transform::{square_image, SquareMode};

/// Everything needed to square one source file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SquareJob {
    pub source: PathBuf,
    pub mode: SquareMode,
    /// Crop center in original pixels; `None` means the geometric center.
    pub center: Option<CropCenter>,
}

impl SquareJob {
    pub fn new(source: impl Into<PathBuf>, mode: SquareMode) -> Self {
        Self {
            source: source.into(),
            mode,
            center: None,
        }
    }

    pub fn with_center(mut self, center: CropCenter) -> Self {
        self.center = Some(center);
        self
    }
}

/// Settings shared by every job in a batch.
#[derive(Clone, Debug)]
pub struct BatchOptions {
    pub output_folder: Option<PathBuf>,
    pub background: Rgb<u8>,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            output_folder: None,
            background: Rgb(DEFAULT_BACKGROUND),
        }
    }
}

#[derive(Debug)]
pub struct BatchFailure {
    pub source: PathBuf,
    pub error: SquareError,
}

/// Tally of a finished batch, in job order.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub saved: Vec<PathBuf>,
    pub failed: Vec<BatchFailure>,
}

impl BatchReport {
    pub fn succeeded(&self) -> usize {
        self.saved.len()
    }

    pub fn failed_count(&self) -> usize {
        self.failed.len()
    }

    pub fn total(&self) -> usize {
        self.saved.len() + self.failed.len()
    }

    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Thread-safe progress reporting for a batch.
///
/// Called from worker threads; all methods default to no-ops.
pub trait ProgressReporter: Send + Sync {
    /// The batch is starting with `total` jobs.
    fn begin(&self, _total: usize) {}

    /// One job finished, successfully or not.
    fn item_done(&self, _source: &Path, _ok: bool) {}

    /// Every job has finished.
    fn finish(&self) {}
}

pub struct NoOpReporter;
impl ProgressReporter for NoOpReporter {}

/// Decode, square and write one image. Returns the written path.
pub fn process_image(job: &SquareJob, options: &BatchOptions) -> Result<PathBuf> {
    let image = load_rgb(&job.source)?;
    let squared = square_image(&image, job.mode, job.center, options.background)?;
    let out = prepare_output(&job.source, options.output_folder.as_deref())?;
    save_rgb(&squared, &out)?;

    info!(
        source = %job.source.display(),
        output = %out.display(),
        mode = %job.mode,
        side = squared.width(),
        "Saved square image"
    );
    Ok(out)
}

/// Run every job, in parallel. A failing job is recorded and never stops
/// the others.
pub fn process_batch(
    jobs: &[SquareJob],
    options: &BatchOptions,
    reporter: &dyn ProgressReporter,
) -> BatchReport {
    reporter.begin(jobs.len());

    let outcomes: Vec<Result<PathBuf>> = jobs
        .par_iter()
        .map(|job| {
            let outcome = process_image(job, options);
            if let Err(ref e) = outcome {
                warn!(source = %job.source.display(), error = %e, "Failed to square image");
            }
            reporter.item_done(&job.source, outcome.is_ok());
            outcome
        })
        .collect();

    let mut report = BatchReport::default();
    for (job, outcome) in jobs.iter().zip(outcomes) {
        match outcome {
            Ok(path) => report.saved.push(path),
            Err(error) => report.failed.push(BatchFailure {
                source: job.source.clone(),
                error,
            }),
        }
    }

    reporter.finish();
    info!(
        saved = report.succeeded(),
        failed = report.failed_count(),
        "Batch complete"
    );
    report
}
