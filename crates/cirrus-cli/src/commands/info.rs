use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use image::ImageReader;

#[derive(Args)]
pub struct InfoArgs {
    /// Input image file
    pub file: PathBuf,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let reader = ImageReader::open(&args.file)?.with_guessed_format()?;
    let format = reader.format();
    let img = reader.decode()?;

    println!("File:        {}", args.file.display());
    if let Some(format) = format {
        println!("Format:      {format:?}");
    }
    println!("Dimensions:  {}x{}", img.width(), img.height());
    println!("Layout:      {:?}", img.color());

    let bytes = std::fs::metadata(&args.file)?.len();
    println!("File size:   {:.1} KB", bytes as f64 / 1024.0);

    Ok(())
}
