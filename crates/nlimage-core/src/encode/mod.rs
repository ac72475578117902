//! Image encoding for NLImage.
//!
//! This module provides functionality for:
//! - Encoding pixel buffers to JPEG (configurable quality), PNG or GIF
//! - Grayscale and RGB buffers alike
//!
//! # Examples
//!
//! ```ignore
//! use nlimage_core::buffer::PixelBuffer;
//! use nlimage_core::decode::ImageFormat;
//! use nlimage_core::encode::encode_image;
//!
//! let buffer = PixelBuffer::rgb(100, 100, vec![128u8; 100 * 100 * 3]);
//! let png = encode_image(&buffer, ImageFormat::Png, 100).unwrap();
//! println!("Encoded {} bytes", png.len());
//! ```

mod file;

pub use file::{encode_image, EncodeError};
