//! Request/response facade over the transforms.
//!
//! [`ImageService`] is the entry point a transport (RPC handler, WASM
//! binding) calls into. It holds configuration only, so one instance can be
//! shared across concurrent requests without locking; each request owns its
//! own buffer.
//!
//! ```ignore
//! use nlimage_core::service::{ImageService, RotateRequest, ServiceConfig};
//!
//! let service = ImageService::new(ServiceConfig::default());
//! let rotated = service.rotate_image(RotateRequest { image, rotation: 1 })?;
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::buffer::{PixelBuffer, TransformError};
use crate::decode::{decode_image, DecodeError, DecodedImage};
use crate::encode::{encode_image, EncodeError};
use crate::transform::{apply_rotation, mean_filter, Rotation};

/// Default JPEG quality used when re-encoding files.
pub const DEFAULT_JPEG_QUALITY: u8 = 100;

/// Service configuration.
///
/// Deserializes from partial input; missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ServiceConfig {
    /// Log each request at debug level.
    pub debug: bool,
    /// JPEG quality (1-100) for [`ImageService::process_file`].
    pub jpeg_quality: u8,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            debug: false,
            jpeg_quality: DEFAULT_JPEG_QUALITY,
        }
    }
}

/// A rotate request as it arrives over the wire.
///
/// `rotation` is the raw selector (`0` = NONE, `1` = NINETY_DEG,
/// `2` = ONE_EIGHTY_DEG, `3` = TWO_SEVENTY_DEG); anything else is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RotateRequest {
    pub image: PixelBuffer,
    pub rotation: i32,
}

impl RotateRequest {
    pub fn new(image: PixelBuffer, rotation: Rotation) -> Self {
        Self {
            image,
            rotation: rotation.into(),
        }
    }
}

/// Errors returned by the service.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Transform(#[from] TransformError),

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Encode(#[from] EncodeError),
}

/// Stateless image service exposing `RotateImage` and `MeanFilter`.
#[derive(Debug, Clone, Default)]
pub struct ImageService {
    config: ServiceConfig,
}

impl ImageService {
    pub fn new(config: ServiceConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Rotate the request's image by its rotation selector.
    ///
    /// # Errors
    ///
    /// `TransformError::UnsupportedRotation` for an unknown selector,
    /// `TransformError::InvalidDimensions` for a malformed image.
    pub fn rotate_image(&self, request: RotateRequest) -> Result<PixelBuffer, ServiceError> {
        let RotateRequest { image, rotation } = request;

        let rotation = Rotation::try_from(rotation).inspect_err(|e| {
            log::warn!("rejected rotate request: {e}");
        })?;

        if self.config.debug {
            log::debug!(
                "received request to rotate an image: {} degrees ({}x{}, color: {})",
                rotation.degrees(),
                image.width,
                image.height,
                image.is_color
            );
        }

        apply_rotation(image, rotation)
            .inspect_err(|e| log::warn!("rotate request failed: {e}"))
            .map_err(ServiceError::from)
    }

    /// Apply the 3x3 mean filter to an image.
    ///
    /// # Errors
    ///
    /// `TransformError::InvalidDimensions` for a malformed image.
    pub fn mean_filter(&self, image: PixelBuffer) -> Result<PixelBuffer, ServiceError> {
        if self.config.debug {
            log::debug!(
                "received request to filter an image ({}x{}, color: {})",
                image.width,
                image.height,
                image.is_color
            );
        }

        mean_filter(image)
            .inspect_err(|e| log::warn!("mean filter request failed: {e}"))
            .map_err(ServiceError::from)
    }

    /// Run a whole file through the service.
    ///
    /// Decodes `bytes`, optionally applies the mean filter, rotates by the
    /// `rotation` selector and re-encodes in the source format. The selector
    /// is checked before any decoding work.
    pub fn process_file(
        &self,
        bytes: &[u8],
        rotation: i32,
        mean: bool,
    ) -> Result<Vec<u8>, ServiceError> {
        let rotation = Rotation::try_from(rotation)?;
        let DecodedImage { buffer, format } = decode_image(bytes)?;

        if self.config.debug {
            log::debug!(
                "processing {} file: {}x{}, mean: {}, rotation: {} degrees",
                format,
                buffer.width,
                buffer.height,
                mean,
                rotation.degrees()
            );
        }

        let buffer = if mean {
            self.mean_filter(buffer)?
        } else {
            buffer
        };
        let buffer = self.rotate_image(RotateRequest::new(buffer, rotation))?;

        Ok(encode_image(&buffer, format, self.config.jpeg_quality)?)
    }
}
