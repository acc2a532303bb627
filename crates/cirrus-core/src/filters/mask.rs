use image::imageops::{self, FilterType};
use image::{DynamicImage, RgbImage, Rgba, RgbaImage};

use crate::error::{CirrusError, Result};

/// Combine an RGB sky photo with a single-channel mask into an RGBA image
/// whose alpha channel is the mask band.
///
/// The photo must be RGB8 and the mask L8, with the mask no larger than the
/// photo in either dimension. A photo larger than the mask is center-cropped
/// to the mask size first, so the optical center of the sky camera is kept.
/// With `downscale > 1` both the cropped photo and the mask are resized to
/// `dim / downscale` using Lanczos3 resampling; the output size always equals
/// the (possibly downscaled) mask size.
pub fn mask_filter(
    photo: &DynamicImage,
    mask: &DynamicImage,
    downscale: u32,
) -> Result<RgbaImage> {
    let photo = photo.as_rgb8().ok_or_else(|| CirrusError::UnsupportedLayout {
        expected: "RGB8",
        found: format!("{:?}", photo.color()),
    })?;
    let mask = mask.as_luma8().ok_or_else(|| CirrusError::UnsupportedLayout {
        expected: "L8",
        found: format!("{:?}", mask.color()),
    })?;

    if mask.width() > photo.width() || mask.height() > photo.height() {
        return Err(CirrusError::MaskExceedsPhoto {
            mask_width: mask.width(),
            mask_height: mask.height(),
            photo_width: photo.width(),
            photo_height: photo.height(),
        });
    }
    if downscale < 1 {
        return Err(CirrusError::InvalidDownscale(downscale));
    }

    let cropped = if photo.dimensions() != mask.dimensions() {
        crop_borders(photo, mask.width(), mask.height())
    } else {
        photo.clone()
    };

    let (photo, mask) = if downscale > 1 {
        let w = mask.width() / downscale;
        let h = mask.height() / downscale;
        (
            imageops::resize(&cropped, w, h, FilterType::Lanczos3),
            imageops::resize(mask, w, h, FilterType::Lanczos3),
        )
    } else {
        (cropped, mask.clone())
    };

    Ok(RgbaImage::from_fn(mask.width(), mask.height(), |x, y| {
        let rgb = photo.get_pixel(x, y).0;
        let alpha = mask.get_pixel(x, y).0[0];
        Rgba([rgb[0], rgb[1], rgb[2], alpha])
    }))
}

/// Cut the centered `new_width` x `new_height` rectangle out of `photo`,
/// discarding border pixels symmetrically.
fn crop_borders(photo: &RgbImage, new_width: u32, new_height: u32) -> RgbImage {
    let x = (photo.width() - new_width) / 2;
    let y = (photo.height() - new_height) / 2;
    imageops::crop_imm(photo, x, y, new_width, new_height).to_image()
}
