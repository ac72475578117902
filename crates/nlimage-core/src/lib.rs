//! NLImage Core - pixel buffer transforms
//!
//! This crate provides the transform engine behind the NLImage service:
//! quarter-turn rotation and a 3x3 mean filter over raw 8-bit pixel buffers,
//! plus the decode/encode helpers and the request/response facade that
//! surround them.
//!
//! # Module Structure
//!
//! - `buffer` - The [`PixelBuffer`] data model and its validator
//! - `transform` - Rotation and mean filter
//! - `decode` / `encode` - JPEG, PNG and GIF file conversion
//! - `service` - [`ImageService`], the `RotateImage` / `MeanFilter` entry point

pub mod buffer;
pub mod decode;
pub mod encode;
pub mod service;
pub mod transform;

pub use buffer::{validate, PixelBuffer, TransformError};
pub use service::{ImageService, RotateRequest, ServiceConfig, ServiceError};
pub use transform::{apply_rotation, mean_filter, rotate, Rotation};
