//! Quarter-turn rotation of pixel buffers.
//!
//! Rotation is always an exact multiple of 90° counter-clockwise, so every
//! output pixel maps to exactly one input pixel and no interpolation is
//! needed. Channel groups are copied whole.
//!
//! # Algorithm
//!
//! The rotation uses inverse mapping: for each pixel in the output image, we
//! look up the single source pixel it came from. With `W`/`H` the input
//! width/height and `out(r, c)` the output pixel at row `r`, column `c`:
//!
//! ```text
//! steps 1 (90° CCW):  out(r, c) = in(c, W-1-r)
//! steps 2 (180°):     out(r, c) = in(H-1-r, W-1-c)
//! steps 3 (270° CCW): out(r, c) = in(H-1-c, r)
//! ```

use serde::{Deserialize, Serialize};

use crate::buffer::{validate, PixelBuffer, TransformError};

/// Rotation selector, counter-clockwise.
///
/// The discriminants match the wire values `NONE = 0`, `NINETY_DEG = 1`,
/// `ONE_EIGHTY_DEG = 2` and `TWO_SEVENTY_DEG = 3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(i32)]
pub enum Rotation {
    /// No rotation.
    #[default]
    None = 0,
    /// 90 degrees counter-clockwise.
    #[serde(rename = "NINETY_DEG")]
    Ninety = 1,
    /// 180 degrees.
    #[serde(rename = "ONE_EIGHTY_DEG")]
    OneEighty = 2,
    /// 270 degrees counter-clockwise (90 clockwise).
    #[serde(rename = "TWO_SEVENTY_DEG")]
    TwoSeventy = 3,
}

impl Rotation {
    /// Number of 90° counter-clockwise quarter turns.
    #[inline]
    pub fn steps(self) -> u8 {
        self as u8
    }

    /// Rotation angle in degrees.
    pub fn degrees(self) -> u32 {
        u32::from(self.steps()) * 90
    }

    /// Build from a quarter-turn count.
    ///
    /// # Errors
    ///
    /// Returns `TransformError::UnsupportedRotation` for counts above 3.
    pub fn from_steps(steps: u8) -> Result<Self, TransformError> {
        Self::try_from(i32::from(steps))
    }

    /// Returns true if this rotation swaps width and height.
    #[inline]
    pub fn swaps_dimensions(self) -> bool {
        matches!(self, Rotation::Ninety | Rotation::TwoSeventy)
    }
}

impl TryFrom<i32> for Rotation {
    type Error = TransformError;

    /// Out-of-range selectors are rejected rather than treated as `None`.
    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Rotation::None),
            1 => Ok(Rotation::Ninety),
            2 => Ok(Rotation::OneEighty),
            3 => Ok(Rotation::TwoSeventy),
            other => Err(TransformError::UnsupportedRotation(other)),
        }
    }
}

impl From<Rotation> for i32 {
    fn from(rotation: Rotation) -> Self {
        rotation as i32
    }
}

/// Compute the output dimensions of a quarter-turn rotation.
///
/// # Example
///
/// ```
/// use nlimage_core::transform::{compute_rotated_bounds, Rotation};
///
/// // 90-degree rotation swaps dimensions
/// assert_eq!(compute_rotated_bounds(100, 50, Rotation::Ninety), (50, 100));
///
/// // 180-degree rotation preserves dimensions
/// assert_eq!(compute_rotated_bounds(100, 50, Rotation::OneEighty), (100, 50));
/// ```
pub fn compute_rotated_bounds(width: u32, height: u32, rotation: Rotation) -> (u32, u32) {
    if rotation.swaps_dimensions() {
        (height, width)
    } else {
        (width, height)
    }
}

/// Rotate a buffer by a number of 90° counter-clockwise quarter turns.
///
/// `steps == 0` and buffers without data are returned as-is (after
/// validation). Otherwise a new buffer is built; the input is consumed but
/// never modified.
///
/// # Errors
///
/// Returns `TransformError::UnsupportedRotation` if `steps > 3` and
/// `TransformError::InvalidDimensions` if the buffer fails validation. No
/// output is allocated in either case.
pub fn rotate(buffer: PixelBuffer, steps: u8) -> Result<PixelBuffer, TransformError> {
    let rotation = Rotation::from_steps(steps)?;
    apply_rotation(buffer, rotation)
}

/// Rotate a buffer by a typed [`Rotation`].
///
/// See [`rotate`] for the contract.
pub fn apply_rotation(
    buffer: PixelBuffer,
    rotation: Rotation,
) -> Result<PixelBuffer, TransformError> {
    validate(&buffer)?;

    // Fast path: identity or nothing to move
    if rotation == Rotation::None || buffer.is_empty() {
        return Ok(buffer);
    }

    let channels = buffer.channels();
    let (src_w, src_h) = (buffer.width as usize, buffer.height as usize);
    let (dst_w, dst_h) = compute_rotated_bounds(buffer.width, buffer.height, rotation);

    log::trace!(
        "rotating {}x{} ({} channel(s)) by {} degrees",
        src_w,
        src_h,
        channels,
        rotation.degrees()
    );

    let mut output = Vec::with_capacity(buffer.data.len());

    for dst_row in 0..dst_h as usize {
        for dst_col in 0..dst_w as usize {
            let (src_row, src_col) = match rotation {
                Rotation::Ninety => (dst_col, src_w - 1 - dst_row),
                Rotation::OneEighty => (src_h - 1 - dst_row, src_w - 1 - dst_col),
                Rotation::TwoSeventy => (src_h - 1 - dst_col, dst_row),
                Rotation::None => (dst_row, dst_col),
            };

            let src_idx = (src_row * src_w + src_col) * channels;
            output.extend_from_slice(&buffer.data[src_idx..src_idx + channels]);
        }
    }

    Ok(PixelBuffer {
        width: dst_w,
        height: dst_h,
        is_color: buffer.is_color,
        data: output,
    })
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Strategy for generating a valid buffer of either channel layout.
    fn buffer_strategy() -> impl Strategy<Value = PixelBuffer> {
        (1u32..=24, 1u32..=24, any::<bool>()).prop_flat_map(|(width, height, is_color)| {
            let channels = if is_color { 3 } else { 1 };
            let len = (width * height) as usize * channels;
            proptest::collection::vec(any::<u8>(), len)
                .prop_map(move |data| PixelBuffer::new(width, height, is_color, data))
        })
    }

    proptest! {
        /// Property: Quarter turns summing to a full turn restore the input.
        #[test]
        fn prop_round_trip(img in buffer_strategy(), steps in 0u8..4) {
            let back = (4 - steps) % 4;
            let result = rotate(rotate(img.clone(), steps).unwrap(), back).unwrap();
            prop_assert_eq!(result, img);
        }

        /// Property: Odd quarter turns swap dimensions, even ones keep them.
        #[test]
        fn prop_dimension_swap(img in buffer_strategy(), steps in 0u8..4) {
            let result = rotate(img.clone(), steps).unwrap();
            if steps % 2 == 1 {
                prop_assert_eq!((result.width, result.height), (img.height, img.width));
            } else {
                prop_assert_eq!((result.width, result.height), (img.width, img.height));
            }
            prop_assert_eq!(result.data.len(), img.data.len());
        }

        /// Property: Two 90° turns equal one 180° turn.
        #[test]
        fn prop_steps_compose(img in buffer_strategy()) {
            let twice = rotate(rotate(img.clone(), 1).unwrap(), 1).unwrap();
            let once = rotate(img, 2).unwrap();
            prop_assert_eq!(twice, once);
        }

        /// Property: Channel groups are never split across pixels.
        #[test]
        fn prop_channel_groups_atomic(img in buffer_strategy(), steps in 1u8..4) {
            let result = rotate(img.clone(), steps).unwrap();
            let channels = img.channels();
            let mut src_groups: Vec<&[u8]> = img.data.chunks(channels).collect();
            let mut dst_groups: Vec<&[u8]> = result.data.chunks(channels).collect();
            src_groups.sort();
            dst_groups.sort();
            prop_assert_eq!(src_groups, dst_groups);
        }
    }
}
