use std::path::Path;

use console::Style;
use picsq_core::batch::{BatchReport, SquareJob};
use picsq_core::config::SquareConfig;
use picsq_core::geometry::{CropCenter, DisplayGeometry, DisplayRect, ImageSize, Viewport};
use picsq_core::transform::{CropWindow, SquareMode};

struct Styles {
    title: Style,
    header: Style,
    label: Style,
    value: Style,
    method: Style,
    disabled: Style,
    path: Style,
    error: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            method: Style::new().green(),
            disabled: Style::new().dim().yellow(),
            path: Style::new().underlined(),
            error: Style::new().red().bold(),
        }
    }
}

fn print_title(s: &Styles, title: &str) {
    println!();
    println!("  {}", s.title.apply_to(title));
    println!(
        "  {}",
        s.title
            .apply_to("\u{2550}".repeat(title.chars().count()))
    );
    println!();
}

pub fn print_run_summary(config: &SquareConfig, jobs: &[SquareJob]) {
    let s = Styles::new();
    print_title(&s, "Square Images");

    println!(
        "  {:<14}{}",
        s.label.apply_to("Images"),
        s.value.apply_to(jobs.len())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Mode"),
        s.method.apply_to(config.mode)
    );
    match config.output_folder {
        Some(ref dir) => println!(
            "  {:<14}{}",
            s.label.apply_to("Output"),
            s.path.apply_to(dir.display())
        ),
        None => println!(
            "  {:<14}{}",
            s.label.apply_to("Output"),
            s.disabled.apply_to("square_output/ beside each source")
        ),
    }
    if jobs.iter().any(|j| j.mode == SquareMode::Pad) {
        let [r, g, b] = config.background;
        println!(
            "  {:<14}{}",
            s.label.apply_to("Background"),
            s.value.apply_to(format!("rgb({r}, {g}, {b})"))
        );
    }
    println!();

    println!("  {}", s.header.apply_to("Jobs"));
    for job in jobs {
        let name = display_name(&job.source);
        match (job.mode, job.center) {
            (SquareMode::Crop, Some(center)) => println!(
                "    {:<24}{} {}",
                s.label.apply_to(name),
                s.method.apply_to(job.mode),
                s.value.apply_to(center)
            ),
            _ => println!(
                "    {:<24}{}",
                s.label.apply_to(name),
                s.method.apply_to(job.mode)
            ),
        }
    }
    println!();
}

pub fn print_report(report: &BatchReport) {
    let s = Styles::new();
    println!();
    println!(
        "  {:<14}{}",
        s.label.apply_to("Saved"),
        s.value.apply_to(format!("{} file(s)", report.succeeded()))
    );
    for path in &report.saved {
        println!("    {}", s.path.apply_to(path.display()));
    }
    if !report.failed.is_empty() {
        println!(
            "  {:<14}{}",
            s.label.apply_to("Failed"),
            s.error.apply_to(format!("{} file(s)", report.failed_count()))
        );
        for failure in &report.failed {
            println!(
                "    {}  {}",
                s.path.apply_to(failure.source.display()),
                s.error.apply_to(&failure.error)
            );
        }
    }
    println!();
}

pub struct GeometryReport<'a> {
    pub file: &'a Path,
    pub size: ImageSize,
    pub viewport: Viewport,
    pub geometry: DisplayGeometry,
    pub center: CropCenter,
    pub window: CropWindow,
    pub overlay: DisplayRect,
    pub pad_side: u32,
    pub pad_offset: (u32, u32),
    pub ignored_picks: &'a [(i32, i32)],
}

pub fn print_geometry(r: &GeometryReport<'_>) {
    let s = Styles::new();
    print_title(&s, "Geometry");

    println!(
        "  {:<14}{}",
        s.label.apply_to("File"),
        s.path.apply_to(r.file.display())
    );
    println!("  {:<14}{}", s.label.apply_to("Size"), s.value.apply_to(r.size));
    println!(
        "  {:<14}{}",
        s.label.apply_to("Viewport"),
        s.value.apply_to(r.viewport)
    );
    println!();

    let g = &r.geometry;
    println!("  {}", s.header.apply_to("Preview"));
    println!(
        "    {:<12}{}",
        s.label.apply_to("Scaled"),
        s.value
            .apply_to(format!("{}x{}", g.scaled_width, g.scaled_height))
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Offset"),
        s.value.apply_to(format!("({}, {})", g.offset_x, g.offset_y))
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Scale"),
        s.value.apply_to(format!("{:.4}", g.scale_for(r.size)))
    );
    println!();

    println!("  {}", s.header.apply_to("Crop"));
    println!(
        "    {:<12}{}",
        s.label.apply_to("Center"),
        s.value.apply_to(r.center)
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Window"),
        s.value.apply_to(format!(
            "{}x{} at ({}, {})",
            r.window.side, r.window.side, r.window.x, r.window.y
        ))
    );
    let o = &r.overlay;
    println!(
        "    {:<12}{}",
        s.label.apply_to("Overlay"),
        s.value.apply_to(format!(
            "({}, {}) - ({}, {})",
            o.left, o.top, o.right, o.bottom
        ))
    );
    for (x, y) in r.ignored_picks {
        println!(
            "    {:<12}{}",
            s.label.apply_to("Ignored"),
            s.disabled.apply_to(format!("({x}, {y}) outside preview"))
        );
    }
    println!();

    println!("  {}", s.header.apply_to("Pad"));
    println!(
        "    {:<12}{}",
        s.label.apply_to("Canvas"),
        s.value.apply_to(format!("{0}x{0}", r.pad_side))
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Offset"),
        s.value
            .apply_to(format!("({}, {})", r.pad_offset.0, r.pad_offset.1))
    );
    println!();
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
