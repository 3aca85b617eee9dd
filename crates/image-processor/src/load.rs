//! Image decoding from disk.

use std::path::Path;

use image::{DynamicImage, ImageReader};
use tracing::debug;

use crate::error::{ProcessError, ProcessResult};

/// Open and decode an image file.
///
/// The format is guessed from the file contents first and falls back to the
/// extension, so a mislabelled file still decodes. The file handle is closed
/// before this returns, on success and on error.
pub fn open_image(path: impl AsRef<Path>) -> ProcessResult<DynamicImage> {
    let path = path.as_ref();
    let reader = ImageReader::open(path)?.with_guessed_format()?;

    debug!(path = %path.display(), format = ?reader.format(), "Decoding image");

    reader.decode().map_err(ProcessError::Decode)
}
