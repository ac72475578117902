//! NLImage WASM - WebAssembly bindings for NLImage
//!
//! This crate exposes the nlimage-core service to JavaScript/TypeScript and
//! plays the role of the request/response transport.
//!
//! # Module Structure
//!
//! - `logger` - Console backend for the `log` facade
//! - `types` - WASM-compatible wrapper for pixel buffers
//! - `transform` - `rotate_image` and `mean_filter`
//! - `decode` - File decoding (JPEG, PNG, GIF)
//! - `encode` - File encoding (JPEG, PNG, GIF)
//!
//! # Usage
//!
//! ```typescript
//! import init, { process_file } from '@nlimage/wasm';
//!
//! await init();
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const out = process_file(bytes, 1, true, { debug: true });
//! ```

use nlimage_core::service::{ImageService, ServiceConfig};
use wasm_bindgen::prelude::*;

mod decode;
mod encode;
mod logger;
mod transform;
mod types;

// Re-export public types
pub use decode::{decode_image, decode_image_as, JsDecodedImage};
pub use encode::encode_image;
pub use transform::{mean_filter, rotate_image};
pub use types::JsPixelBuffer;

/// Initialize the WASM module (called automatically on load)
///
/// Installs the console logger so core log records reach devtools.
#[wasm_bindgen(start)]
pub fn init() {
    logger::install();
    log::debug!("nlimage-wasm {} loaded", version());
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Decode a file, optionally mean-filter it, rotate it and re-encode it in
/// its original format.
///
/// # Arguments
///
/// * `bytes` - JPEG, PNG or GIF file bytes
/// * `rotation` - 0 = NONE, 1 = NINETY_DEG, 2 = ONE_EIGHTY_DEG, 3 = TWO_SEVENTY_DEG
/// * `mean` - Apply the 3x3 mean filter before rotating
/// * `config` - Optional `{ debug?: boolean, jpegQuality?: number }`
#[wasm_bindgen]
pub fn process_file(
    bytes: &[u8],
    rotation: i32,
    mean: bool,
    config: JsValue,
) -> Result<Vec<u8>, JsValue> {
    let service = service_from(config)?;

    let result = service.process_file(bytes, rotation, mean);

    if service.config().debug {
        match &result {
            Ok(out) => log::debug!("process_file: wrote {} bytes", out.len()),
            Err(e) => log::debug!("process_file failed: {e}"),
        }
    }

    result.map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Read a service config from a JS object; `undefined`/`null` gives defaults.
fn parse_config(value: JsValue) -> Result<ServiceConfig, JsValue> {
    if value.is_undefined() || value.is_null() {
        return Ok(ServiceConfig::default());
    }
    serde_wasm_bindgen::from_value(value).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Build a service from an optional JS config object.
pub(crate) fn service_from(config: JsValue) -> Result<ImageService, JsValue> {
    parse_config(config).map(ImageService::new)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }
}
