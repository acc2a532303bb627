mod common;

use approx::assert_abs_diff_eq;
use cirrus_core::filters::convolution::convolution_filter;
use cirrus_core::filters::red_blue::red_blue_filter;
use cirrus_core::index::cloud_cover_index;
use cirrus_core::pipeline::config::PipelineConfig;
use cirrus_core::pipeline::CloudCover;
use common::{solid_mask, solid_photo, solid_rgba};
use image::{GrayImage, ImageFormat, Luma, Rgb, RgbImage};

// ---------------------------------------------------------------------------
// Stage chaining
// ---------------------------------------------------------------------------

#[test]
fn test_solid_red_classifies_and_denoises_to_all_white() {
    // 100x100 solid red straight into the classifier: every pixel white with
    // alpha untouched. Denoising a uniform white field changes nothing, at
    // the borders included, since reduced counts stay in the keep band.
    let classified = red_blue_filter(&solid_rgba(100, 100, [255, 0, 0, 255]));
    for px in classified.pixels() {
        assert_eq!(px.0, [255, 255]);
    }

    let denoised = convolution_filter(&classified);
    for px in denoised.pixels() {
        assert_eq!(px.0, [255, 255]);
    }
    assert_abs_diff_eq!(cloud_cover_index(&denoised).unwrap(), 1.0);
}

#[test]
fn test_denoise_twice_matches_denoise_once_on_uniform_fields() {
    let white = convolution_filter(&red_blue_filter(&solid_rgba(32, 32, [255, 0, 0, 255])));
    assert_eq!(convolution_filter(&white).as_raw(), white.as_raw());

    let black = convolution_filter(&red_blue_filter(&solid_rgba(32, 32, [0, 0, 255, 255])));
    assert_eq!(convolution_filter(&black).as_raw(), black.as_raw());
}

// ---------------------------------------------------------------------------
// Orchestrator
// ---------------------------------------------------------------------------

#[test]
fn test_from_images_runs_all_stages() {
    // Blue photo under a full mask: clear sky everywhere, cropped to mask size.
    let photo = solid_photo(20, 20, [10, 20, 200]);
    let mask = solid_mask(16, 16, 255);
    let cover = CloudCover::from_images(&photo, &mask, 1).unwrap();
    assert_eq!(cover.image().dimensions(), (16, 16));
    assert_abs_diff_eq!(cover.index().unwrap(), 0.0);
}

#[test]
fn test_from_images_with_downscale() {
    let photo = solid_photo(16, 16, [255, 0, 0]);
    let mask = solid_mask(16, 16, 255);
    let cover = CloudCover::from_images(&photo, &mask, 2).unwrap();
    assert_eq!(cover.image().dimensions(), (8, 8));
    assert_abs_diff_eq!(cover.index().unwrap(), 1.0);
}

#[test]
fn test_fully_transparent_mask_makes_index_undefined() {
    let photo = solid_photo(8, 8, [255, 0, 0]);
    let mask = solid_mask(8, 8, 0);
    let cover = CloudCover::from_images(&photo, &mask, 1).unwrap();
    assert!(cover.index().is_err());
}

#[test]
fn test_index_is_recomputed_on_demand() {
    let photo = solid_photo(8, 8, [255, 0, 0]);
    let mask = solid_mask(8, 8, 255);
    let cover = CloudCover::from_images(&photo, &mask, 1).unwrap();
    assert_abs_diff_eq!(cover.index().unwrap(), cover.index().unwrap());
}

// ---------------------------------------------------------------------------
// Disk round trip
// ---------------------------------------------------------------------------

#[test]
fn test_analyze_from_disk_and_save() {
    let dir = tempfile::tempdir().unwrap();

    let photo_path = dir.path().join("sky.jpg");
    RgbImage::from_pixel(40, 40, Rgb([240, 10, 10]))
        .save_with_format(&photo_path, ImageFormat::Jpeg)
        .unwrap();

    let mask_path = dir.path().join("mask.png");
    GrayImage::from_pixel(32, 32, Luma([255]))
        .save_with_format(&mask_path, ImageFormat::Png)
        .unwrap();

    let config = PipelineConfig {
        mask: mask_path,
        downscale: 1,
    };
    let cover = CloudCover::analyze(&photo_path, &config).unwrap();
    // Solid red survives JPEG compression strongly red-dominated: all cloud.
    assert_abs_diff_eq!(cover.index().unwrap(), 1.0);

    let out = dir.path().join("sky-cover.png");
    cover.save(&out).unwrap();
    let saved = image::open(&out).unwrap();
    assert_eq!((saved.width(), saved.height()), (32, 32));
}

#[test]
fn test_analyze_rejects_missing_photo() {
    let dir = tempfile::tempdir().unwrap();
    let mask_path = dir.path().join("mask.png");
    GrayImage::from_pixel(4, 4, Luma([255]))
        .save_with_format(&mask_path, ImageFormat::Png)
        .unwrap();

    let config = PipelineConfig::new(mask_path);
    assert!(CloudCover::analyze(&dir.path().join("missing.jpg"), &config).is_err());
}
