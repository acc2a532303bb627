use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use cirrus_core::pipeline::config::PipelineConfig;
use cirrus_core::pipeline::CloudCover;
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;

use crate::summary;

#[derive(Args)]
pub struct IndexArgs {
    /// Input JPEG sky photos
    #[arg(required = true)]
    pub photos: Vec<PathBuf>,

    /// Single-channel sky mask image
    #[arg(short, long)]
    pub mask: Option<PathBuf>,

    /// Downscale factor for photo and mask (1 = full resolution)
    #[arg(long, default_value = "1")]
    pub downscale: u32,

    /// Job config file (TOML); explicit flags override its values
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Save the denoised greyscale visualization for each photo
    #[arg(short, long)]
    pub save: bool,

    /// Directory for saved visualizations (defaults to each photo's directory)
    #[arg(long)]
    pub out_dir: Option<PathBuf>,

    /// Report the index as a percentage
    #[arg(short, long)]
    pub percent: bool,
}

pub fn run(args: &IndexArgs) -> Result<()> {
    let config = resolve_config(args)?;
    if let Some(ref dir) = args.out_dir {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create output directory {}", dir.display()))?;
    }

    summary::print_job_summary(&config, args.photos.len(), args.percent);

    let pb = ProgressBar::new(args.photos.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{msg:12} [{bar:40}] {pos}/{len}")?
            .progress_chars("=> "),
    );
    pb.set_message("Analyzing");

    // Each photo's pipeline run is independent; analyze them concurrently
    // and report in input order afterwards.
    let results: Vec<cirrus_core::error::Result<f64>> = args
        .photos
        .par_iter()
        .map(|photo| {
            let outcome = analyze_one(photo, &config, args);
            pb.inc(1);
            outcome
        })
        .collect();
    pb.finish_and_clear();

    let mut failed = 0usize;
    for (photo, outcome) in args.photos.iter().zip(&results) {
        match outcome {
            Ok(index) => summary::print_result(photo, *index, args.percent),
            Err(err) => {
                failed += 1;
                summary::print_failure(photo, err);
            }
        }
    }
    println!();

    if failed == args.photos.len() {
        anyhow::bail!("all {failed} photo(s) failed");
    }
    Ok(())
}

fn analyze_one(
    photo: &Path,
    config: &PipelineConfig,
    args: &IndexArgs,
) -> cirrus_core::error::Result<f64> {
    let cover = CloudCover::analyze(photo, config)?;
    if args.save {
        cover.save(&visualization_path(photo, args.out_dir.as_deref()))?;
    }
    cover.index()
}

fn visualization_path(photo: &Path, out_dir: Option<&Path>) -> PathBuf {
    let stem = photo.file_stem().and_then(|s| s.to_str()).unwrap_or("photo");
    let file = format!("{stem}-cover.png");
    match out_dir {
        Some(dir) => dir.join(file),
        None => photo.with_file_name(file),
    }
}

fn resolve_config(args: &IndexArgs) -> Result<PipelineConfig> {
    let mut config = if let Some(ref path) = args.config {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        toml::from_str(&contents).context("Invalid job config")?
    } else {
        let mask = args
            .mask
            .clone()
            .context("--mask is required unless --config provides one")?;
        PipelineConfig::new(mask)
    };

    if let Some(ref mask) = args.mask {
        config.mask = mask.clone();
    }
    if args.downscale != 1 {
        config.downscale = args.downscale;
    }
    Ok(config)
}
