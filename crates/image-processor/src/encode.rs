//! Format-specific encoding with size optimisation.
//!
//! JPEG is written at a fixed quality. PNG always uses the best compression
//! level with adaptive row filtering. GIF and BMP have no quality knob.

use std::borrow::Cow;
use std::path::Path;

use image::codecs::bmp::BmpEncoder;
use image::codecs::gif::GifEncoder;
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::{CompressionType, FilterType as PngFilterType, PngEncoder};
use image::{DynamicImage, Frame};
use tracing::debug;

use crate::DEFAULT_JPEG_QUALITY;
use crate::error::{ProcessError, ProcessResult};
use crate::format::ImageFormat;

/// GIF palette quantisation speed (1 = best quality, 30 = fastest).
const GIF_SPEED: i32 = 10;

/// Encoder settings applied when writing images back to disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeOptions {
    /// JPEG quality, 1-100. Ignored by lossless formats.
    pub jpeg_quality: u8,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            jpeg_quality: DEFAULT_JPEG_QUALITY,
        }
    }
}

impl EncodeOptions {
    pub fn with_jpeg_quality(quality: u8) -> Self {
        Self {
            jpeg_quality: quality.clamp(1, 100),
        }
    }
}

/// Encode an image into an in-memory buffer in the given format.
pub fn encode(
    img: &DynamicImage,
    format: ImageFormat,
    options: &EncodeOptions,
) -> ProcessResult<Vec<u8>> {
    let mut buf = Vec::new();

    let result = match format {
        ImageFormat::Jpeg => {
            let encoder = JpegEncoder::new_with_quality(&mut buf, options.jpeg_quality);
            jpeg_compatible(img).write_with_encoder(encoder)
        }
        ImageFormat::Png => {
            let encoder = PngEncoder::new_with_quality(
                &mut buf,
                CompressionType::Best,
                PngFilterType::Adaptive,
            );
            img.write_with_encoder(encoder)
        }
        ImageFormat::Gif => {
            // The trailer is written when the encoder drops
            let mut encoder = GifEncoder::new_with_speed(&mut buf, GIF_SPEED);
            encoder.encode_frame(Frame::new(img.to_rgba8()))
        }
        ImageFormat::Bmp => {
            let encoder = BmpEncoder::new(&mut buf);
            bmp_compatible(img).write_with_encoder(encoder)
        }
    };
    result.map_err(ProcessError::Encode)?;

    debug!(
        %format,
        quality = ?format.is_lossy().then_some(options.jpeg_quality),
        width = img.width(),
        height = img.height(),
        bytes = buf.len(),
        "Encoded image"
    );
    Ok(buf)
}

/// Encode an image and overwrite `path` with the result.
///
/// The file is only touched once encoding has fully succeeded, so an encode
/// error leaves the existing file intact.
pub fn write_image(
    img: &DynamicImage,
    path: impl AsRef<Path>,
    format: ImageFormat,
    options: &EncodeOptions,
) -> ProcessResult<()> {
    let bytes = encode(img, format, options)?;
    std::fs::write(path.as_ref(), bytes)?;
    Ok(())
}

/// JPEG has no alpha channel and only 8-bit samples.
fn jpeg_compatible(img: &DynamicImage) -> Cow<'_, DynamicImage> {
    match img {
        DynamicImage::ImageRgb8(_) | DynamicImage::ImageLuma8(_) => Cow::Borrowed(img),
        _ => Cow::Owned(DynamicImage::ImageRgb8(img.to_rgb8())),
    }
}

/// BMP only takes 8-bit samples.
fn bmp_compatible(img: &DynamicImage) -> Cow<'_, DynamicImage> {
    match img {
        DynamicImage::ImageLuma8(_)
        | DynamicImage::ImageLumaA8(_)
        | DynamicImage::ImageRgb8(_)
        | DynamicImage::ImageRgba8(_) => Cow::Borrowed(img),
        _ => Cow::Owned(DynamicImage::ImageRgba8(img.to_rgba8())),
    }
}
