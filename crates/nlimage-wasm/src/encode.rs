//! Image encoding WASM bindings.

use crate::types::JsPixelBuffer;
use nlimage_core::decode::ImageFormat;
use nlimage_core::encode;
use wasm_bindgen::prelude::*;

/// Encode a pixel buffer to a file format.
///
/// # Arguments
///
/// * `image` - Grayscale or RGB pixel buffer
/// * `format` - "jpeg" (or "jpg"), "png" or "gif"
/// * `quality` - JPEG quality (1-100); ignored for PNG and GIF
///
/// # Example
///
/// ```typescript
/// const rotated = rotate_image(image, 2);
/// const png = encode_image(rotated, "png", 100);
/// await writable.write(new Blob([png], { type: 'image/png' }));
/// ```
#[wasm_bindgen]
pub fn encode_image(image: &JsPixelBuffer, format: &str, quality: u8) -> Result<Vec<u8>, JsValue> {
    let format = parse_format(format)?;
    encode::encode_image(image.as_core(), format, quality)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

fn parse_format(name: &str) -> Result<ImageFormat, JsValue> {
    ImageFormat::from_name(name)
        .ok_or_else(|| JsValue::from_str(&format!("Unsupported output format: {name}")))
}

/// Tests for encode bindings.
///
/// Functions returning `Result<T, JsValue>` only work on wasm32 targets, so
/// the native test goes through the core encoder.
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_from_wrapper_creates_valid_jpeg() {
        let img = JsPixelBuffer::new(10, 10, true, vec![128u8; 10 * 10 * 3]);
        let jpeg = encode::encode_image(img.as_core(), ImageFormat::Jpeg, 90).unwrap();
        // Verify JPEG magic bytes
        assert_eq!(&jpeg[0..2], &[0xFF, 0xD8]);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_encode_png() {
        let img = JsPixelBuffer::new(4, 4, false, vec![7u8; 16]);
        let png = encode_image(&img, "png", 100).unwrap();
        assert_eq!(&png[1..4], b"PNG");
    }

    #[wasm_bindgen_test]
    fn test_encode_unknown_format() {
        let img = JsPixelBuffer::new(1, 1, false, vec![0]);
        assert!(encode_image(&img, "bmp", 100).is_err());
    }

    #[wasm_bindgen_test]
    fn test_encode_invalid_pixel_data() {
        let img = JsPixelBuffer::new(10, 10, true, vec![0u8; 10]);
        assert!(encode_image(&img, "jpeg", 90).is_err());
    }
}
