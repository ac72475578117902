//! Encoding pixel buffers back into JPEG, PNG or GIF files.
//!
//! The width and height written are the buffer's own, so a quarter-turn
//! rotation that swapped them is reflected in the output file.

use std::io::Cursor;

use image::codecs::gif::GifEncoder;
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};
use thiserror::Error;

use crate::buffer::PixelBuffer;
use crate::decode::ImageFormat;

/// Errors that can occur during encoding.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Pixel data length doesn't match expected dimensions
    #[error("Invalid pixel data: expected {expected} bytes (width * height * channels), got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// Encoding failed inside the codec
    #[error("{format} encoding failed: {message}")]
    EncodingFailed {
        format: ImageFormat,
        message: String,
    },
}

/// Encode a pixel buffer into the given file format.
///
/// # Arguments
///
/// * `buffer` - Grayscale or RGB pixel buffer
/// * `format` - Output file format
/// * `quality` - JPEG quality (1-100); ignored for PNG and GIF
///
/// # Errors
///
/// Returns `EncodeError::InvalidDimensions` for zero-sized buffers,
/// `EncodeError::InvalidPixelData` when the data length is wrong, and
/// `EncodeError::EncodingFailed` if the codec rejects the image (GIF is
/// limited to 65535 pixels per side).
pub fn encode_image(
    buffer: &PixelBuffer,
    format: ImageFormat,
    quality: u8,
) -> Result<Vec<u8>, EncodeError> {
    let (width, height) = (buffer.width, buffer.height);

    // Validate dimensions
    if width == 0 || height == 0 {
        return Err(EncodeError::InvalidDimensions { width, height });
    }

    // Validate pixel data length
    let expected = buffer.expected_len();
    if expected != Some(buffer.data.len()) {
        return Err(EncodeError::InvalidPixelData {
            expected: expected.unwrap_or(usize::MAX),
            actual: buffer.data.len(),
        });
    }

    let color_type = if buffer.is_color {
        ExtendedColorType::Rgb8
    } else {
        ExtendedColorType::L8
    };

    let mut out = Cursor::new(Vec::new());

    let result = match format {
        ImageFormat::Jpeg => {
            // Clamp quality to valid range (1-100)
            JpegEncoder::new_with_quality(&mut out, quality.clamp(1, 100)).write_image(
                &buffer.data,
                width,
                height,
                color_type,
            )
        }
        ImageFormat::Png => {
            PngEncoder::new(&mut out).write_image(&buffer.data, width, height, color_type)
        }
        ImageFormat::Gif => {
            // The GIF encoder only takes RGB(A); replicate gray into RGB
            let rgb;
            let data = if buffer.is_color {
                &buffer.data
            } else {
                rgb = buffer.data.iter().flat_map(|&v| [v, v, v]).collect::<Vec<u8>>();
                &rgb
            };
            let mut encoder = GifEncoder::new(&mut out);
            encoder.encode(data, width, height, ExtendedColorType::Rgb8)
        }
    };

    result.map_err(|e| EncodeError::EncodingFailed {
        format,
        message: e.to_string(),
    })?;

    log::debug!(
        "encoded {}x{} {} image ({} bytes)",
        width,
        height,
        format,
        out.get_ref().len()
    );

    Ok(out.into_inner())
}


// ============================================================================
// Property-Based Tests
// ============================================================================
