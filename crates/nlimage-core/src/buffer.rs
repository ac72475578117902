//! Pixel buffer data model and validation.
//!
//! A [`PixelBuffer`] is the only image representation the transforms accept.
//! Pixels are stored row-major with channels interleaved, so the byte for
//! channel `ch` of pixel `(x, y)` lives at `channels * (y * width + x) + ch`.
//!
//! Every transform runs [`validate`] before reading pixel data. A buffer with
//! zero width, zero height and no data is always valid and is passed through
//! unchanged.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Channels per pixel for color (RGB) buffers.
pub const COLOR_CHANNELS: usize = 3;

/// Channels per pixel for grayscale buffers.
pub const GRAY_CHANNELS: usize = 1;

/// Errors raised by validation and the transforms.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransformError {
    /// Pixel data length doesn't match `width * height * channels`.
    #[error(
        "Invalid dimensions: {width}x{height} with {channels} channel(s) needs {expected} bytes, got {actual}"
    )]
    InvalidDimensions {
        width: u32,
        height: u32,
        channels: usize,
        expected: usize,
        actual: usize,
    },

    /// Rotation selector outside NONE / NINETY_DEG / ONE_EIGHTY_DEG / TWO_SEVENTY_DEG.
    #[error("Unsupported rotation selector: {0}")]
    UnsupportedRotation(i32),
}

/// An 8-bit image in row-major, channel-interleaved layout.
///
/// Serializes to the wire shape `{ width, height, isColor, data }`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PixelBuffer {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// `true` for 3-channel RGB, `false` for 1-channel grayscale.
    pub is_color: bool,
    /// Pixel bytes. Length should be `width * height * channels`.
    pub data: Vec<u8>,
}

impl PixelBuffer {
    /// Create a buffer without checking the length invariant.
    ///
    /// Use [`validate`] (or any transform) to check it.
    pub fn new(width: u32, height: u32, is_color: bool, data: Vec<u8>) -> Self {
        Self {
            width,
            height,
            is_color,
            data,
        }
    }

    /// Create a grayscale buffer.
    pub fn gray(width: u32, height: u32, data: Vec<u8>) -> Self {
        Self::new(width, height, false, data)
    }

    /// Create an RGB buffer.
    pub fn rgb(width: u32, height: u32, data: Vec<u8>) -> Self {
        Self::new(width, height, true, data)
    }

    /// Number of bytes per pixel (1 or 3).
    #[inline]
    pub fn channels(&self) -> usize {
        if self.is_color {
            COLOR_CHANNELS
        } else {
            GRAY_CHANNELS
        }
    }

    /// Byte length implied by the dimensions, or `None` on overflow.
    pub fn expected_len(&self) -> Option<usize> {
        (self.width as usize)
            .checked_mul(self.height as usize)?
            .checked_mul(self.channels())
    }

    /// Check if the buffer carries no pixel data.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Check for the zero-size degenerate buffer (always valid).
    pub fn is_degenerate(&self) -> bool {
        self.width == 0 && self.height == 0 && self.is_empty()
    }
}

/// Check the length invariant of a pixel buffer.
///
/// # Errors
///
/// Returns `TransformError::InvalidDimensions` when `data.len()` differs from
/// `width * height * channels`, unless the buffer is the zero-size degenerate
/// case.
pub fn validate(buffer: &PixelBuffer) -> Result<(), TransformError> {
    if buffer.is_degenerate() {
        return Ok(());
    }

    let actual = buffer.data.len();
    match buffer.expected_len() {
        Some(expected) if expected == actual => Ok(()),
        expected => Err(TransformError::InvalidDimensions {
            width: buffer.width,
            height: buffer.height,
            channels: buffer.channels(),
            expected: expected.unwrap_or(usize::MAX),
            actual,
        }),
    }
}

impl From<image::GrayImage> for PixelBuffer {
    fn from(img: image::GrayImage) -> Self {
        let (width, height) = img.dimensions();
        Self::gray(width, height, img.into_raw())
    }
}

impl From<image::RgbImage> for PixelBuffer {
    fn from(img: image::RgbImage) -> Self {
        let (width, height) = img.dimensions();
        Self::rgb(width, height, img.into_raw())
    }
}

impl TryFrom<PixelBuffer> for image::DynamicImage {
    type Error = TransformError;

    /// Convert into an `image` crate buffer for encoding.
    fn try_from(buffer: PixelBuffer) -> Result<Self, Self::Error> {
        validate(&buffer)?;

        // from_raw only rejects short buffers, which validate already ruled out
        let err = TransformError::InvalidDimensions {
            width: buffer.width,
            height: buffer.height,
            channels: buffer.channels(),
            expected: buffer.expected_len().unwrap_or(usize::MAX),
            actual: buffer.data.len(),
        };

        let PixelBuffer {
            width,
            height,
            is_color,
            data,
        } = buffer;

        let converted = if is_color {
            image::RgbImage::from_raw(width, height, data).map(image::DynamicImage::ImageRgb8)
        } else {
            image::GrayImage::from_raw(width, height, data).map(image::DynamicImage::ImageLuma8)
        };
        converted.ok_or(err)
    }
}
