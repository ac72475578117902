//! 3x3 box-average (mean) filter.
//!
//! Each output channel value is the truncated integer mean of the same
//! channel at the pixel itself and at every neighbor inside the image. Pixels
//! outside the grid are left out of both the sum and the divisor, so corners
//! average 4 values, edges 6 and interior pixels 9. There is no wraparound
//! and no edge replication.
//!
//! The output is written to a fresh buffer while the input is only read, so
//! every neighborhood sees unfiltered values regardless of iteration order.

use crate::buffer::{validate, PixelBuffer, TransformError};

/// Apply the 3x3 mean filter to every channel independently.
///
/// Buffers without data are returned as-is (after validation).
///
/// # Errors
///
/// Returns `TransformError::InvalidDimensions` if the buffer fails
/// validation. No output is allocated in that case.
///
/// # Example
///
/// ```
/// use nlimage_core::buffer::PixelBuffer;
/// use nlimage_core::transform::mean_filter;
///
/// let img = PixelBuffer::gray(3, 3, (0..9).collect());
/// let filtered = mean_filter(img).unwrap();
/// assert_eq!(filtered.data, vec![2, 2, 3, 3, 4, 4, 5, 5, 6]);
/// ```
pub fn mean_filter(buffer: PixelBuffer) -> Result<PixelBuffer, TransformError> {
    validate(&buffer)?;

    if buffer.is_empty() {
        return Ok(buffer);
    }

    let channels = buffer.channels();
    let (width, height) = (buffer.width as usize, buffer.height as usize);

    log::trace!(
        "mean filter over {}x{} ({} channel(s))",
        width,
        height,
        channels
    );

    let src = buffer.data.as_slice();
    let mut output = vec![0u8; src.len()];

    for y in 0..height {
        let (y0, y1) = neighbor_span(y, height);

        for x in 0..width {
            let (x0, x1) = neighbor_span(x, width);
            let count = ((y1 - y0 + 1) * (x1 - x0 + 1)) as u32;
            let dst_idx = (y * width + x) * channels;

            for ch in 0..channels {
                let mut sum = 0u32;
                for ny in y0..=y1 {
                    let row = ny * width;
                    for nx in x0..=x1 {
                        sum += u32::from(src[(row + nx) * channels + ch]);
                    }
                }
                // Mean of u8 values always fits in u8
                output[dst_idx + ch] = (sum / count) as u8;
            }
        }
    }

    Ok(PixelBuffer {
        width: buffer.width,
        height: buffer.height,
        is_color: buffer.is_color,
        data: output,
    })
}

/// Inclusive range of in-bounds coordinates within one step of `pos`.
#[inline]
fn neighbor_span(pos: usize, len: usize) -> (usize, usize) {
    (pos.saturating_sub(1), (pos + 1).min(len - 1))
}
