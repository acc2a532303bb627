use image::GrayAlphaImage;
use rayon::prelude::*;

use crate::consts::{CLOUD, PARALLEL_PIXEL_THRESHOLD};
use crate::error::{CirrusError, Result};

/// Compute the cloud cover index of a classified, denoised sky image.
///
/// Transparent pixels (alpha 0) lie outside the sky disk and are skipped;
/// among the remainder the fraction of cloud (white) pixels is returned as a
/// value in [0, 1]. Fails with [`CirrusError::EmptySkyRegion`] when every
/// pixel is transparent, since the ratio is undefined.
pub fn cloud_cover_index(image: &GrayAlphaImage) -> Result<f64> {
    let raw = image.as_raw();

    let (cloud, total) = if raw.len() / 2 >= PARALLEL_PIXEL_THRESHOLD {
        raw.par_chunks_exact(2)
            .map(count_pixel)
            .reduce(|| (0u64, 0u64), |a, b| (a.0 + b.0, a.1 + b.1))
    } else {
        raw.chunks_exact(2)
            .map(count_pixel)
            .fold((0u64, 0u64), |a, b| (a.0 + b.0, a.1 + b.1))
    };

    if total == 0 {
        return Err(CirrusError::EmptySkyRegion);
    }
    Ok(cloud as f64 / total as f64)
}

/// Map one LA pixel to (cloud, counted) increments.
#[inline]
fn count_pixel(px: &[u8]) -> (u64, u64) {
    if px[1] == 0 {
        (0, 0)
    } else if px[0] == CLOUD {
        (1, 1)
    } else {
        (0, 1)
    }
}
