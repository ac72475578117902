//! Image decoding for NLImage.
//!
//! This module turns JPEG, PNG and GIF files into [`PixelBuffer`]s the
//! transforms can consume:
//! - Format detection from file contents
//! - Alpha is dropped and 16-bit channels are reduced to 8 bits
//! - Grayscale sources decode to 1 channel unless a layout is forced
//!
//! # Examples
//!
//! ```ignore
//! use nlimage_core::decode::decode_image;
//!
//! let bytes = std::fs::read("photo.png").unwrap();
//! let decoded = decode_image(&bytes).unwrap();
//! println!("Decoded {}x{} {}", decoded.buffer.width, decoded.buffer.height, decoded.format);
//! ```
//!
//! [`PixelBuffer`]: crate::buffer::PixelBuffer

mod file;
mod types;

pub use file::{decode_image, decode_image_as};
pub use types::{DecodeError, DecodedImage, ImageFormat};
