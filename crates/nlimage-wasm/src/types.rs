//! WASM-compatible wrapper types for pixel buffers.
//!
//! This module provides a JavaScript-friendly type that wraps the core
//! `PixelBuffer`, handling the conversion between Rust and JavaScript data
//! representations.

use nlimage_core::buffer::PixelBuffer;
use wasm_bindgen::prelude::*;

/// A pixel buffer wrapper for JavaScript.
///
/// # Memory Management
///
/// The pixel data is stored in WASM memory. When you call `data()`, a copy is
/// made to JavaScript memory as a `Uint8Array`.
///
/// The `free()` method can be called to explicitly release WASM memory, but
/// this is optional as wasm-bindgen's finalizer will handle cleanup
/// automatically.
#[wasm_bindgen]
pub struct JsPixelBuffer {
    inner: PixelBuffer,
}

#[wasm_bindgen]
impl JsPixelBuffer {
    /// Create a new JsPixelBuffer from dimensions and pixel data.
    ///
    /// # Arguments
    /// * `width` - Image width in pixels
    /// * `height` - Image height in pixels
    /// * `is_color` - `true` for RGB (3 bytes per pixel), `false` for grayscale
    /// * `data` - Row-major, channel-interleaved pixel data
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, is_color: bool, data: Vec<u8>) -> JsPixelBuffer {
        JsPixelBuffer {
            inner: PixelBuffer::new(width, height, is_color, data),
        }
    }

    /// Get the image width in pixels
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Whether the buffer holds RGB (true) or grayscale (false) data
    #[wasm_bindgen(getter, js_name = isColor)]
    pub fn is_color(&self) -> bool {
        self.inner.is_color
    }

    /// Get the number of bytes in the pixel buffer
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.inner.data.len()
    }

    /// Returns pixel data as a Uint8Array (copied out of WASM memory).
    pub fn data(&self) -> js_sys::Uint8Array {
        js_sys::Uint8Array::from(self.inner.data.as_slice())
    }

    /// Explicitly free WASM memory.
    ///
    /// This is optional - wasm-bindgen's finalizer will handle cleanup automatically.
    pub fn free(self) {
        // Dropping self releases the memory
    }
}

impl JsPixelBuffer {
    /// Wrap a core PixelBuffer.
    pub(crate) fn from_core(inner: PixelBuffer) -> Self {
        Self { inner }
    }

    /// Clone out the core PixelBuffer for a transform call.
    pub(crate) fn to_core(&self) -> PixelBuffer {
        self.inner.clone()
    }

    /// Borrow the core PixelBuffer.
    pub(crate) fn as_core(&self) -> &PixelBuffer {
        &self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_js_pixel_buffer_creation() {
        let img = JsPixelBuffer::new(100, 50, true, vec![0u8; 100 * 50 * 3]);
        assert_eq!(img.width(), 100);
        assert_eq!(img.height(), 50);
        assert!(img.is_color());
        assert_eq!(img.byte_length(), 15000);
    }

    #[test]
    fn test_from_core() {
        let core = PixelBuffer::gray(20, 10, vec![0u8; 200]);
        let js_img = JsPixelBuffer::from_core(core);
        assert_eq!(js_img.width(), 20);
        assert!(!js_img.is_color());
        assert_eq!(js_img.byte_length(), 200);
    }

    #[test]
    fn test_to_core() {
        let js_img = JsPixelBuffer::new(5, 5, false, vec![128u8; 25]);
        let core = js_img.to_core();
        assert_eq!(core.width, 5);
        assert_eq!(core.height, 5);
        assert_eq!(core.data.len(), 25);
        assert_eq!(js_img.as_core(), &core);
    }
}
