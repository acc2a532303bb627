use std::path::Path;

use cirrus_core::error::CirrusError;
use cirrus_core::pipeline::config::PipelineConfig;
use console::Style;

struct Styles {
    title: Style,
    label: Style,
    value: Style,
    path: Style,
    error: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            path: Style::new().underlined(),
            error: Style::new().red(),
        }
    }
}

pub fn print_job_summary(config: &PipelineConfig, photo_count: usize, percent: bool) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Cloud Cover Index"));
    println!(
        "  {}",
        s.title.apply_to(
            "\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}"
        )
    );
    println!();

    println!(
        "  {:<14}{}",
        s.label.apply_to("Photos"),
        s.value.apply_to(photo_count)
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Mask"),
        s.path.apply_to(config.mask.display())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Downscale"),
        s.value.apply_to(config.downscale)
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Report"),
        s.value.apply_to(if percent { "percentage" } else { "fraction" })
    );
    println!();
}

pub fn print_result(photo: &Path, index: f64, percent: bool) {
    let s = Styles::new();
    let value = if percent {
        format!("{:.2}%", index * 100.0)
    } else {
        format!("{index:.4}")
    };
    println!(
        "  {:<40}{}",
        s.label.apply_to(photo.display()),
        s.value.apply_to(value)
    );
}

pub fn print_failure(photo: &Path, err: &CirrusError) {
    let s = Styles::new();
    println!(
        "  {:<40}{}",
        s.label.apply_to(photo.display()),
        s.error.apply_to(err)
    );
}
