//! Image processing utilities for fixed-size screenshot output.
//!
//! Provides format detection from file extensions, exact-size Lanczos3
//! resampling, and format-specific encoding for the batch resizer.

pub mod encode;
pub mod error;
pub mod format;
pub mod load;
pub mod resize;

// Re-exports for convenience
pub use encode::{EncodeOptions, encode, write_image};
pub use error::{ProcessError, ProcessResult};
pub use format::ImageFormat;
pub use load::open_image;
pub use resize::{Dimensions, resize_exact};

/// Default JPEG quality used when re-encoding lossy output.
pub const DEFAULT_JPEG_QUALITY: u8 = 95;
