//! Fixed resize settings.

use std::path::PathBuf;

use image_processor::{Dimensions, EncodeOptions};

/// Target width in pixels.
pub const TARGET_WIDTH: u32 = 2560;

/// Target height in pixels.
pub const TARGET_HEIGHT: u32 = 1600;

/// Quality used when re-encoding JPEG screenshots.
pub const JPEG_QUALITY: u8 = 95;

/// Screenshot directory, resolved at compile time next to this package.
pub const SCREENSHOTS_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/Screenshots");

/// Settings for one batch run.
#[derive(Debug, Clone)]
pub struct ResizerConfig {
    pub target_dir: PathBuf,
    pub target: Dimensions,
    pub encode: EncodeOptions,
}

impl Default for ResizerConfig {
    fn default() -> Self {
        Self {
            target_dir: PathBuf::from(SCREENSHOTS_DIR),
            target: Dimensions::new(TARGET_WIDTH, TARGET_HEIGHT),
            encode: EncodeOptions::with_jpeg_quality(JPEG_QUALITY),
        }
    }
}

impl ResizerConfig {
    /// Default settings pointed at another directory.
    pub fn for_dir(target_dir: impl Into<PathBuf>) -> Self {
        Self {
            target_dir: target_dir.into(),
            ..Self::default()
        }
    }
}
