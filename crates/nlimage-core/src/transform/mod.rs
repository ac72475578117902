//! Pixel buffer transforms: quarter-turn rotation and the 3x3 mean filter.
//!
//! Both transforms are pure functions of their input buffer. They validate
//! the buffer first, never run partially on invalid input, and never mutate
//! the buffer they are given; they either hand it back unchanged or build a
//! new one.
//!
//! # Coordinate System
//!
//! - Rotation is counter-clockwise in 90° steps
//! - Origin is the top-left corner, rows run top to bottom
//! - Pixel data is row-major with channels interleaved

mod mean;
mod rotation;

pub use mean::mean_filter;
pub use rotation::{apply_rotation, compute_rotated_bounds, rotate, Rotation};
