pub mod convolution;
pub mod mask;
pub mod red_blue;
