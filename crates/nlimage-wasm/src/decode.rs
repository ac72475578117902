//! Image decoding WASM bindings.
//!
//! # Example
//!
//! ```typescript
//! import { decode_image } from '@nlimage/wasm';
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const decoded = decode_image(bytes);
//! const image = decoded.take_image();
//! console.log(`${decoded.mime_type}: ${image.width}x${image.height}`);
//! ```

use crate::types::JsPixelBuffer;
use nlimage_core::decode::{self, ImageFormat};
use wasm_bindgen::prelude::*;

/// A decoded file: pixel buffer plus the detected format name.
#[wasm_bindgen]
pub struct JsDecodedImage {
    image: Option<JsPixelBuffer>,
    format: ImageFormat,
}

#[wasm_bindgen]
impl JsDecodedImage {
    /// Detected format: "jpeg", "png" or "gif".
    #[wasm_bindgen(getter)]
    pub fn format(&self) -> String {
        self.format.to_string()
    }

    /// MIME type of the detected format, e.g. for a download `Blob`.
    #[wasm_bindgen(getter)]
    pub fn mime_type(&self) -> String {
        self.format.mime_type().to_string()
    }

    /// Take the decoded pixel buffer. Returns undefined on a second call.
    pub fn take_image(&mut self) -> Option<JsPixelBuffer> {
        self.image.take()
    }
}

/// Decode a JPEG, PNG or GIF file.
///
/// Alpha is dropped, 16-bit channels are reduced to 8 bits, and grayscale
/// files decode to single-channel buffers.
///
/// # Errors
///
/// Returns an error if the format is not supported or the file is corrupted.
#[wasm_bindgen]
pub fn decode_image(bytes: &[u8]) -> Result<JsDecodedImage, JsValue> {
    decode::decode_image(bytes)
        .map(|decoded| JsDecodedImage {
            image: Some(JsPixelBuffer::from_core(decoded.buffer)),
            format: decoded.format,
        })
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Decode a file into a fixed layout (`color = true` always yields RGB).
#[wasm_bindgen]
pub fn decode_image_as(bytes: &[u8], color: bool) -> Result<JsPixelBuffer, JsValue> {
    decode::decode_image_as(bytes, color)
        .map(|decoded| JsPixelBuffer::from_core(decoded.buffer))
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decoded_image_format_names() {
        let mut decoded = JsDecodedImage {
            image: None,
            format: ImageFormat::Jpeg,
        };
        assert_eq!(decoded.format(), "jpeg");
        assert_eq!(decoded.mime_type(), "image/jpeg");
        assert!(decoded.take_image().is_none());
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use nlimage_core::buffer::PixelBuffer;
    use nlimage_core::encode::encode_image;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_decode_png() {
        let src = PixelBuffer::gray(2, 2, vec![1, 2, 3, 4]);
        let png = encode_image(&src, ImageFormat::Png, 0).unwrap();

        let mut decoded = decode_image(&png).unwrap();
        assert_eq!(decoded.format(), "png");
        assert_eq!(decoded.mime_type(), "image/png");
        let image = decoded.take_image().unwrap();
        assert_eq!(image.width(), 2);
        assert!(decoded.take_image().is_none());
    }

    #[wasm_bindgen_test]
    fn test_decode_garbage() {
        assert!(decode_image(&[1, 2, 3]).is_err());
    }
}
