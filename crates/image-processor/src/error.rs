//! Error type shared by every image operation in this crate.

use image::ImageError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("cannot decode image: {0}")]
    Decode(#[source] ImageError),

    #[error("cannot encode image: {0}")]
    Encode(#[source] ImageError),

    #[error("unsupported image format: {0}")]
    UnsupportedFormat(String),

    #[error("invalid target dimensions {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },
}

pub type ProcessResult<T> = Result<T, ProcessError>;
