//! Exact-size resampling for fixed screenshot resolutions.
//!
//! Uses Lanczos3 filtering so both upscaling and downscaling keep detail.

use std::fmt;

use image::DynamicImage;
use image::imageops::FilterType;
use tracing::debug;

use crate::error::{ProcessError, ProcessResult};

/// Filter used for every resize in this crate.
pub const RESAMPLE_FILTER: FilterType = FilterType::Lanczos3;

/// Pixel dimensions of an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn of(img: &DynamicImage) -> Self {
        Self::new(img.width(), img.height())
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}×{}", self.width, self.height)
    }
}

/// Resize an image to exactly `target`, ignoring the source aspect ratio.
///
/// Returns a copy of the original if it already has the target dimensions.
pub fn resize_exact(img: &DynamicImage, target: Dimensions) -> ProcessResult<DynamicImage> {
    if target.width == 0 || target.height == 0 {
        return Err(ProcessError::InvalidDimensions {
            width: target.width,
            height: target.height,
        });
    }

    let (orig_w, orig_h) = (img.width(), img.height());

    if Dimensions::of(img) == target {
        debug!(orig_w, orig_h, "Image already at target size, skipping resample");
        return Ok(img.clone());
    }

    debug!(
        orig_w,
        orig_h,
        new_width = target.width,
        new_height = target.height,
        "Resizing image to target dimensions"
    );

    Ok(img.resize_exact(target.width, target.height, RESAMPLE_FILTER))
}
