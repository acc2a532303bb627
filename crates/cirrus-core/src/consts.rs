/// Minimum pixel count (w*h) to use row-level Rayon parallelism.
pub const PARALLEL_PIXEL_THRESHOLD: usize = 65_536;

/// Greyscale value of a cloud pixel after classification.
pub const CLOUD: u8 = 255;

/// Greyscale value of a clear-sky pixel after classification.
pub const CLEAR: u8 = 0;

/// R/B ratio above which a pixel is classified as cloud. Clouds scatter all
/// wavelengths roughly equally (R close to B) while clear sky is strongly
/// blue-dominated (R well below B).
pub const RED_BLUE_THRESHOLD: f64 = 0.95;

/// Radius of the square denoising window (radius 2 = 5x5 neighborhood).
pub const DENOISE_KERNEL_RADIUS: usize = 2;

/// White-neighbor counts at or below this value are suppressed to clear.
pub const DENOISE_SUPPRESS_MAX: u32 = 7;

/// White-neighbor counts at or below this value (and above
/// [`DENOISE_SUPPRESS_MAX`]) keep the original center pixel.
pub const DENOISE_KEEP_MAX: u32 = 16;
