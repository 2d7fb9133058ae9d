use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use image::{Rgb, RgbImage};

use picsq_core::batch::{
    process_batch, process_image, BatchOptions, NoOpReporter, ProgressReporter, SquareJob,
};
use picsq_core::error::SquareError;
use picsq_core::geometry::CropCenter;
use picsq_core::transform::SquareMode;

fn write_png(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let img = RgbImage::from_fn(width, height, |x, y| Rgb([x as u8, y as u8, 77]));
    let path = dir.join(name);
    img.save(&path).unwrap();
    path
}

#[derive(Default)]
struct CountingReporter {
    total: AtomicUsize,
    ok: AtomicUsize,
    failed: AtomicUsize,
    finished: AtomicUsize,
}

impl ProgressReporter for CountingReporter {
    fn begin(&self, total: usize) {
        self.total.store(total, Ordering::SeqCst);
    }

    fn item_done(&self, _source: &Path, ok: bool) {
        if ok {
            self.ok.fetch_add(1, Ordering::SeqCst);
        } else {
            self.failed.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn finish(&self) {
        self.finished.fetch_add(1, Ordering::SeqCst);
    }
}

#[test]
fn test_process_image_crop_writes_square() {
    let dir = tempfile::tempdir().unwrap();
    let src = write_png(dir.path(), "wide.png", 40, 20);

    let job = SquareJob::new(&src, SquareMode::Crop).with_center(CropCenter::new(35, 10));
    let out = process_image(&job, &BatchOptions::default()).unwrap();

    assert_eq!(out, dir.path().join("square_output").join("wide.png"));
    let saved = image::open(&out).unwrap().to_rgb8();
    assert_eq!(saved.dimensions(), (20, 20));
    // left = clamp(35 - 10, 0, 20) = 20
    assert_eq!(*saved.get_pixel(0, 0), Rgb([20, 0, 77]));
}

#[test]
fn test_process_image_pad_uses_background() {
    let dir = tempfile::tempdir().unwrap();
    let src = write_png(dir.path(), "tall.png", 10, 30);
    let out_dir = dir.path().join("out");

    let options = BatchOptions {
        output_folder: Some(out_dir.clone()),
        background: Rgb([1, 2, 3]),
    };
    let out = process_image(&SquareJob::new(&src, SquareMode::Pad), &options).unwrap();

    assert_eq!(out, out_dir.join("tall.png"));
    let saved = image::open(&out).unwrap().to_rgb8();
    assert_eq!(saved.dimensions(), (30, 30));
    assert_eq!(*saved.get_pixel(0, 0), Rgb([1, 2, 3]));
    assert_eq!(*saved.get_pixel(10, 0), Rgb([0, 0, 77]));
}

#[test]
fn test_process_image_refuses_to_overwrite_source() {
    let dir = tempfile::tempdir().unwrap();
    let src = write_png(dir.path(), "a.png", 8, 4);
    let before = std::fs::read(&src).unwrap();

    let options = BatchOptions {
        output_folder: Some(dir.path().to_path_buf()),
        ..Default::default()
    };
    let err = process_image(&SquareJob::new(&src, SquareMode::Crop), &options).unwrap_err();

    assert!(matches!(err, SquareError::WouldOverwriteSource(_)));
    assert_eq!(std::fs::read(&src).unwrap(), before);
}

#[test]
fn test_batch_isolates_failures() {
    let dir = tempfile::tempdir().unwrap();
    let good_a = write_png(dir.path(), "a.png", 16, 8);
    let broken = dir.path().join("broken.png");
    std::fs::write(&broken, b"definitely not a png").unwrap();
    let missing = dir.path().join("missing.png");
    let good_b = write_png(dir.path(), "b.png", 8, 16);

    let jobs = vec![
        SquareJob::new(&good_a, SquareMode::Crop),
        SquareJob::new(&broken, SquareMode::Crop),
        SquareJob::new(&missing, SquareMode::Pad),
        SquareJob::new(&good_b, SquareMode::Pad),
    ];
    let reporter = CountingReporter::default();
    let report = process_batch(&jobs, &BatchOptions::default(), &reporter);

    assert_eq!(report.succeeded(), 2);
    assert_eq!(report.failed_count(), 2);
    assert_eq!(report.total(), 4);
    assert!(!report.is_clean());

    let out_dir = dir.path().join("square_output");
    assert_eq!(report.saved, vec![out_dir.join("a.png"), out_dir.join("b.png")]);
    assert_eq!(report.failed[0].source, broken);
    assert_eq!(report.failed[1].source, missing);

    assert_eq!(reporter.total.load(Ordering::SeqCst), 4);
    assert_eq!(reporter.ok.load(Ordering::SeqCst), 2);
    assert_eq!(reporter.failed.load(Ordering::SeqCst), 2);
    assert_eq!(reporter.finished.load(Ordering::SeqCst), 1);
}

#[test]
fn test_oversized_pad_fails_without_stopping_batch() {
    let dir = tempfile::tempdir().unwrap();
    let strip = write_png(dir.path(), "strip.png", 20_000, 1);
    let small = write_png(dir.path(), "small.png", 8, 4);

    let jobs = vec![
        SquareJob::new(&strip, SquareMode::Pad),
        SquareJob::new(&small, SquareMode::Pad),
    ];
    let report = process_batch(&jobs, &BatchOptions::default(), &NoOpReporter);

    assert_eq!(report.failed_count(), 1);
    assert_eq!(report.failed[0].source, strip);
    assert!(matches!(
        report.failed[0].error,
        SquareError::CanvasTooLarge { side: 20_000, .. }
    ));

    let out = dir.path().join("square_output").join("small.png");
    assert_eq!(report.saved, vec![out.clone()]);
    assert_eq!(image::open(&out).unwrap().to_rgb8().dimensions(), (8, 8));
}

#[test]
fn test_empty_batch_is_clean() {
    let report = process_batch(&[], &BatchOptions::default(), &NoOpReporter);
    assert!(report.is_clean());
    assert_eq!(report.total(), 0);
}
