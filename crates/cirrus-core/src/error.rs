use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CirrusError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image format error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Unsupported channel layout: expected {expected}, found {found}")]
    UnsupportedLayout { expected: &'static str, found: String },

    #[error(
        "Mask size {mask_width}x{mask_height} exceeds photo size {photo_width}x{photo_height}"
    )]
    MaskExceedsPhoto {
        mask_width: u32,
        mask_height: u32,
        photo_width: u32,
        photo_height: u32,
    },

    #[error("Invalid downscale factor {0}: must be at least 1")]
    InvalidDownscale(u32),

    #[error("Not a JPEG image: {0}")]
    NotJpeg(PathBuf),

    #[error("No opaque pixels under the sky mask; cloud cover index is undefined")]
    EmptySkyRegion,
}

pub type Result<T> = std::result::Result<T, CirrusError>;
