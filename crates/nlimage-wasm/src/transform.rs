//! WASM bindings for the RotateImage and MeanFilter operations.

use crate::service_from;
use crate::types::JsPixelBuffer;
use nlimage_core::service::RotateRequest;
use wasm_bindgen::prelude::*;

/// Rotate an image counter-clockwise by a rotation selector.
///
/// # Arguments
///
/// * `image` - Source image
/// * `rotation` - 0 = NONE, 1 = NINETY_DEG, 2 = ONE_EIGHTY_DEG, 3 = TWO_SEVENTY_DEG
/// * `config` - Optional `{ debug?: boolean }`; debug logs the request
///
/// # Errors
///
/// Returns an error for any other selector, a malformed config, or if the
/// image data length doesn't match its dimensions.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const rotated = rotate_image(image, 1); // 90 degrees CCW
/// console.log(`${rotated.width}x${rotated.height}`); // dimensions swapped
/// rotate_image(image, 2, { debug: true });
/// ```
#[wasm_bindgen]
pub fn rotate_image(
    image: &JsPixelBuffer,
    rotation: i32,
    config: JsValue,
) -> Result<JsPixelBuffer, JsValue> {
    let request = RotateRequest {
        image: image.to_core(),
        rotation,
    };
    service_from(config)?
        .rotate_image(request)
        .map(JsPixelBuffer::from_core)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Apply the 3x3 mean filter to an image.
///
/// `config` takes the same optional object as [`rotate_image`].
///
/// # Example (TypeScript)
///
/// ```typescript
/// const smoothed = mean_filter(image);
/// ```
#[wasm_bindgen]
pub fn mean_filter(image: &JsPixelBuffer, config: JsValue) -> Result<JsPixelBuffer, JsValue> {
    service_from(config)?
        .mean_filter(image.to_core())
        .map(JsPixelBuffer::from_core)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Tests that work on all targets go through the core service directly;
/// functions returning `Result<T, JsValue>` only run on wasm32.
#[cfg(test)]
mod tests {
    use super::*;
    use nlimage_core::service::ImageService;
    use nlimage_core::transform::Rotation;

    fn test_image(width: u32, height: u32) -> JsPixelBuffer {
        let data: Vec<u8> = (0..(width * height * 3) as usize)
            .map(|i| (i % 256) as u8)
            .collect();
        JsPixelBuffer::new(width, height, true, data)
    }

    #[test]
    fn test_rotation_swaps_dimensions() {
        let img = test_image(10, 5);
        let result = ImageService::default()
            .rotate_image(RotateRequest::new(img.to_core(), Rotation::Ninety))
            .unwrap();
        assert_eq!((result.width, result.height), (5, 10));
    }

    #[test]
    fn test_mean_filter_keeps_dimensions() {
        let img = test_image(10, 5);
        let result = ImageService::default()
            .mean_filter(img.to_core())
            .unwrap();
        assert_eq!((result.width, result.height), (10, 5));
    }
}
