use image::{GrayAlphaImage, RgbaImage};
use rayon::prelude::*;

use crate::consts::{CLEAR, CLOUD, PARALLEL_PIXEL_THRESHOLD, RED_BLUE_THRESHOLD};

/// Classify every pixel of a masked sky photo as cloud or clear sky.
///
/// Cloud pixels become white (255), clear-sky pixels black (0), and the
/// alpha channel is carried through unchanged. Transparent pixels are
/// classified as clear. The output is written to a fresh buffer; the input
/// is never mutated.
pub fn red_blue_filter(image: &RgbaImage) -> GrayAlphaImage {
    let (width, height) = image.dimensions();
    let src = image.as_raw();
    let src_stride = width as usize * 4;
    let dst_stride = width as usize * 2;
    let mut dst = vec![0u8; width as usize * height as usize * 2];

    if width as usize * height as usize >= PARALLEL_PIXEL_THRESHOLD {
        dst.par_chunks_mut(dst_stride)
            .zip(src.par_chunks(src_stride))
            .for_each(|(dst_row, src_row)| classify_row(src_row, dst_row));
    } else {
        for (dst_row, src_row) in dst.chunks_mut(dst_stride).zip(src.chunks(src_stride)) {
            classify_row(src_row, dst_row);
        }
    }

    GrayAlphaImage::from_raw(width, height, dst).expect("buffer size matches dimensions")
}

fn classify_row(src_row: &[u8], dst_row: &mut [u8]) {
    for (px, out) in src_row.chunks_exact(4).zip(dst_row.chunks_exact_mut(2)) {
        out[0] = classify_pixel(px[0], px[2], px[3]);
        out[1] = px[3];
    }
}

#[inline]
fn classify_pixel(red: u8, blue: u8, alpha: u8) -> u8 {
    if alpha == 0 {
        // Masked out: treated as clear.
        CLEAR
    } else if blue == 0 {
        // No blue component at all; the R/B ratio is undefined but the pixel
        // cannot be blue-dominated.
        CLOUD
    } else if f64::from(red) / f64::from(blue) > RED_BLUE_THRESHOLD {
        CLOUD
    } else {
        CLEAR
    }
}
