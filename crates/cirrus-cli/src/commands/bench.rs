use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use cirrus_core::pipeline::config::PipelineConfig;
use cirrus_core::pipeline::CloudCover;
use clap::Args;

#[derive(Args)]
pub struct BenchArgs {
    /// Input JPEG sky photos
    #[arg(required = true)]
    pub photos: Vec<PathBuf>,

    /// Single-channel sky mask image
    #[arg(short, long)]
    pub mask: PathBuf,

    /// Comma-separated downscale factors to time
    #[arg(long, default_value = "1,2,4,6,8")]
    pub factors: String,
}

pub fn run(args: &BenchArgs) -> Result<()> {
    let factors: Vec<u32> = args
        .factors
        .split(',')
        .filter_map(|s| s.trim().parse().ok())
        .collect();
    anyhow::ensure!(
        !factors.is_empty(),
        "no valid downscale factors in {:?}",
        args.factors
    );

    // Photos run sequentially so per-factor timings stay comparable.
    for factor in factors {
        println!("Benchmark for downscale factor = {factor}");
        let config = PipelineConfig {
            mask: args.mask.clone(),
            downscale: factor,
        };

        let start = Instant::now();
        for photo in &args.photos {
            let cover = CloudCover::analyze(photo, &config)?;
            println!("  {:<40}  {:.4}", photo.display(), cover.index()?);
        }
        println!("Completed in {:.3} s", start.elapsed().as_secs_f64());
        println!();
    }
    Ok(())
}
