//! Supported image formats and extension matching.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::error::ProcessError;

/// Image formats the resizer accepts and writes back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageFormat {
    Png,
    Jpeg,
    Gif,
    Bmp,
}

impl ImageFormat {
    pub const ALL: [ImageFormat; 4] = [Self::Png, Self::Jpeg, Self::Gif, Self::Bmp];

    /// File extensions associated with this format, lower-case.
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            Self::Png => &["png"],
            Self::Jpeg => &["jpg", "jpeg"],
            Self::Gif => &["gif"],
            Self::Bmp => &["bmp"],
        }
    }

    /// Check if the extension matches this format (case-insensitive).
    pub fn matches_extension(&self, ext: &str) -> bool {
        let ext = ext.to_ascii_lowercase();
        self.extensions().contains(&ext.as_str())
    }

    /// Look up the format for an extension, without the leading dot.
    pub fn from_extension(ext: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.matches_extension(ext))
    }

    /// Look up the format implied by a path's extension.
    ///
    /// Returns `None` for paths without an extension, non-UTF-8 extensions,
    /// and extensions outside the supported set.
    pub fn from_path(path: impl AsRef<Path>) -> Option<Self> {
        path.as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_extension)
    }

    /// Whether re-encoding loses information (and therefore takes a quality).
    pub fn is_lossy(&self) -> bool {
        matches!(self, Self::Jpeg)
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Png => "PNG",
            Self::Jpeg => "JPEG",
            Self::Gif => "GIF",
            Self::Bmp => "BMP",
        };
        f.write_str(name)
    }
}

impl FromStr for ImageFormat {
    type Err = ProcessError;

    fn from_str(ext: &str) -> Result<Self, Self::Err> {
        Self::from_extension(ext).ok_or_else(|| ProcessError::UnsupportedFormat(ext.to_string()))
    }
}

impl From<ImageFormat> for image::ImageFormat {
    fn from(format: ImageFormat) -> Self {
        match format {
            ImageFormat::Png => image::ImageFormat::Png,
            ImageFormat::Jpeg => image::ImageFormat::Jpeg,
            ImageFormat::Gif => image::ImageFormat::Gif,
            ImageFormat::Bmp => image::ImageFormat::Bmp,
        }
    }
}
