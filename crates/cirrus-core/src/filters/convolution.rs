use image::GrayAlphaImage;
use ndarray::Array2;
use rayon::prelude::*;

use crate::consts::{
    CLEAR, CLOUD, DENOISE_KEEP_MAX, DENOISE_KERNEL_RADIUS, DENOISE_SUPPRESS_MAX,
    PARALLEL_PIXEL_THRESHOLD,
};

/// Smooth salt-and-pepper misclassifications out of a binary cloud image.
///
/// For each pixel the 5x5 neighborhood of the L band is summed and divided
/// by 255, giving the white-neighbor count `c` in [0, 25]. Counts at or
/// below [`DENOISE_SUPPRESS_MAX`] suppress the pixel to clear, counts above
/// [`DENOISE_KEEP_MAX`] force it to cloud, and the band in between keeps the
/// original value rather than forcing a decision. The alpha channel passes
/// through untouched.
///
/// The L band is assumed to be binary (0 or 255); behavior on other values
/// is unspecified. Pixels outside the image contribute 0 to the sum, so
/// border pixels lean toward clear.
pub fn convolution_filter(image: &GrayAlphaImage) -> GrayAlphaImage {
    let (width, height) = image.dimensions();
    let (w, h) = (width as usize, height as usize);

    // Split bands. The source band stays read-only for the whole pass: the
    // keep-original rule must see pre-convolution values, so output pixels
    // go to a separate buffer.
    let mut luma = Array2::<u8>::zeros((h, w));
    let mut alpha = vec![0u8; w * h];
    for (x, y, px) in image.enumerate_pixels() {
        luma[[y as usize, x as usize]] = px.0[0];
        alpha[y as usize * w + x as usize] = px.0[1];
    }

    let denoised = denoise_band(&luma);

    let mut dst = vec![0u8; w * h * 2];
    for row in 0..h {
        for col in 0..w {
            let i = row * w + col;
            dst[i * 2] = denoised[[row, col]];
            dst[i * 2 + 1] = alpha[i];
        }
    }
    GrayAlphaImage::from_raw(width, height, dst).expect("buffer size matches dimensions")
}

fn denoise_band(src: &Array2<u8>) -> Array2<u8> {
    let (h, w) = src.dim();
    let mut out = Array2::<u8>::zeros((h, w));

    if h * w >= PARALLEL_PIXEL_THRESHOLD {
        let rows: Vec<Vec<u8>> = (0..h)
            .into_par_iter()
            .map(|row| (0..w).map(|col| denoise_pixel(src, row, col)).collect())
            .collect();
        for (row, row_data) in rows.into_iter().enumerate() {
            for (col, val) in row_data.into_iter().enumerate() {
                out[[row, col]] = val;
            }
        }
    } else {
        for row in 0..h {
            for col in 0..w {
                out[[row, col]] = denoise_pixel(src, row, col);
            }
        }
    }
    out
}

fn denoise_pixel(src: &Array2<u8>, row: usize, col: usize) -> u8 {
    let (h, w) = src.dim();
    let radius = DENOISE_KERNEL_RADIUS as isize;

    let mut sum: u32 = 0;
    for r in row as isize - radius..=row as isize + radius {
        if r < 0 || r >= h as isize {
            continue;
        }
        for c in col as isize - radius..=col as isize + radius {
            if c < 0 || c >= w as isize {
                continue;
            }
            sum += u32::from(src[[r as usize, c as usize]]);
        }
    }

    let count = sum / 255;
    if count <= DENOISE_SUPPRESS_MAX {
        CLEAR
    } else if count <= DENOISE_KEEP_MAX {
        src[[row, col]]
    } else {
        CLOUD
    }
}
