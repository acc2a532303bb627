use std::path::Path;
use std::time::Instant;

use image::{DynamicImage, GrayAlphaImage};
use tracing::{debug, info};

use crate::error::Result;
use crate::filters::convolution::convolution_filter;
use crate::filters::mask::mask_filter;
use crate::filters::red_blue::red_blue_filter;
use crate::index::cloud_cover_index;
use crate::io::image_io;

use super::config::PipelineConfig;

/// The result of running the full pipeline on one sky photo.
///
/// Construction is eager: masking, classification and denoising all run
/// before the value exists, and the denoised grey+alpha image is retained.
/// The index is derived on demand; `save` is the only side effect.
pub struct CloudCover {
    image: GrayAlphaImage,
}

impl CloudCover {
    /// Load a photo and the configured mask from disk and run the pipeline.
    pub fn analyze(photo_path: &Path, config: &PipelineConfig) -> Result<Self> {
        let start = Instant::now();
        let photo = image_io::load_photo(photo_path)?;
        let mask = image_io::load_mask(&config.mask)?;
        info!(
            photo = %photo_path.display(),
            width = photo.width(),
            height = photo.height(),
            "Loaded sky photo"
        );

        let cover = Self::from_images(
            &DynamicImage::ImageRgb8(photo),
            &DynamicImage::ImageLuma8(mask),
            config.downscale,
        )?;
        debug!(
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Pipeline complete"
        );
        Ok(cover)
    }

    /// Run the pipeline on already-decoded images.
    pub fn from_images(
        photo: &DynamicImage,
        mask: &DynamicImage,
        downscale: u32,
    ) -> Result<Self> {
        let masked = mask_filter(photo, mask, downscale)?;
        debug!(
            width = masked.width(),
            height = masked.height(),
            downscale,
            "Masked photo"
        );
        let classified = red_blue_filter(&masked);
        let denoised = convolution_filter(&classified);
        Ok(Self { image: denoised })
    }

    /// Fraction of sky pixels classified as cloud, in [0, 1].
    pub fn index(&self) -> Result<f64> {
        cloud_cover_index(&self.image)
    }

    /// The retained denoised grey+alpha image.
    pub fn image(&self) -> &GrayAlphaImage {
        &self.image
    }

    /// Persist the denoised grey+alpha image as lossless PNG.
    pub fn save(&self, path: &Path) -> Result<()> {
        image_io::save_image(&self.image, path)
    }
}
