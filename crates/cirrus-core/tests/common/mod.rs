use image::{DynamicImage, GrayAlphaImage, GrayImage, Luma, LumaA, Rgb, RgbImage, Rgba, RgbaImage};

/// Build a solid-color RGB photo wrapped as a dynamic image.
pub fn solid_photo(width: u32, height: u32, rgb: [u8; 3]) -> DynamicImage {
    DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, Rgb(rgb)))
}

/// Build a solid single-channel mask wrapped as a dynamic image.
pub fn solid_mask(width: u32, height: u32, value: u8) -> DynamicImage {
    DynamicImage::ImageLuma8(GrayImage::from_pixel(width, height, Luma([value])))
}

/// Build a solid RGBA image.
pub fn solid_rgba(width: u32, height: u32, rgba: [u8; 4]) -> RgbaImage {
    RgbaImage::from_pixel(width, height, Rgba(rgba))
}

/// Build a solid two-channel grey+alpha image.
pub fn solid_la(width: u32, height: u32, la: [u8; 2]) -> GrayAlphaImage {
    GrayAlphaImage::from_pixel(width, height, LumaA(la))
}
