use std::path::Path;

use image::{DynamicImage, GrayAlphaImage, GrayImage, ImageFormat, ImageReader, RgbImage};

use crate::error::{CirrusError, Result};

/// Load a sky photo. Only JPEG originals are accepted; the format is sniffed
/// from file content, not the extension.
pub fn load_photo(path: &Path) -> Result<RgbImage> {
    let reader = ImageReader::open(path)?.with_guessed_format()?;
    if reader.format() != Some(ImageFormat::Jpeg) {
        return Err(CirrusError::NotJpeg(path.to_path_buf()));
    }
    match reader.decode()? {
        DynamicImage::ImageRgb8(photo) => Ok(photo),
        other => Err(CirrusError::UnsupportedLayout {
            expected: "RGB8",
            found: format!("{:?}", other.color()),
        }),
    }
}

/// Load a sky mask, which must decode to a single 8-bit channel.
pub fn load_mask(path: &Path) -> Result<GrayImage> {
    match image::open(path)? {
        DynamicImage::ImageLuma8(mask) => Ok(mask),
        other => Err(CirrusError::UnsupportedLayout {
            expected: "L8",
            found: format!("{:?}", other.color()),
        }),
    }
}

/// Save a two-channel grey+alpha image as lossless PNG.
pub fn save_image(image: &GrayAlphaImage, path: &Path) -> Result<()> {
    image.save_with_format(path, ImageFormat::Png)?;
    Ok(())
}
