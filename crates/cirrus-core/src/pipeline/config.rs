use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_downscale() -> u32 {
    1
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Path to the single-channel sky mask asset.
    pub mask: PathBuf,

    /// Downscale factor applied to both photo and mask (1 = full resolution).
    #[serde(default = "default_downscale")]
    pub downscale: u32,
}

impl PipelineConfig {
    pub fn new(mask: impl Into<PathBuf>) -> Self {
        Self {
            mask: mask.into(),
            downscale: 1,
        }
    }
}
