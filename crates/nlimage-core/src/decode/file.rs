//! Decoding of JPEG, PNG and GIF files into pixel buffers.

use std::io::Cursor;

use image::{ColorType, DynamicImage, ImageReader};

use super::{DecodeError, DecodedImage, ImageFormat};
use crate::buffer::PixelBuffer;

/// Decode an image file, keeping grayscale sources grayscale.
///
/// The format is detected from the file contents. Alpha channels are dropped
/// and 16-bit channels are reduced to 8 bits by keeping the high byte.
///
/// # Errors
///
/// Returns `DecodeError::UnsupportedFormat` if the bytes are not JPEG, PNG or
/// GIF, and `DecodeError::CorruptedFile` if decoding fails.
pub fn decode_image(bytes: &[u8]) -> Result<DecodedImage, DecodeError> {
    decode_with_layout(bytes, None)
}

/// Decode an image file into a fixed channel layout.
///
/// `color = true` always yields RGB (grayscale sources are replicated into
/// three channels); `color = false` always yields a single luminance channel.
pub fn decode_image_as(bytes: &[u8], color: bool) -> Result<DecodedImage, DecodeError> {
    decode_with_layout(bytes, Some(color))
}

fn decode_with_layout(bytes: &[u8], color: Option<bool>) -> Result<DecodedImage, DecodeError> {
    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    let format = match reader.format() {
        Some(detected) => ImageFormat::from_image_format(detected)
            .ok_or_else(|| DecodeError::UnsupportedFormat(format!("{detected:?}")))?,
        None => return Err(DecodeError::UnsupportedFormat("unknown".to_string())),
    };

    let img = reader
        .decode()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    let is_color = color.unwrap_or_else(|| !is_grayscale(img.color()));
    log::debug!(
        "decoded {} image: {}x{} {:?} -> {} channel(s)",
        format,
        img.width(),
        img.height(),
        img.color(),
        if is_color { 3 } else { 1 }
    );

    Ok(DecodedImage {
        buffer: to_pixel_buffer(img, is_color),
        format,
    })
}

fn is_grayscale(color: ColorType) -> bool {
    matches!(
        color,
        ColorType::L8 | ColorType::L16 | ColorType::La8 | ColorType::La16
    )
}

/// Flatten to 8-bit gray or RGB, dropping alpha.
fn to_pixel_buffer(img: DynamicImage, is_color: bool) -> PixelBuffer {
    let wide = matches!(
        img,
        DynamicImage::ImageLuma16(_)
            | DynamicImage::ImageLumaA16(_)
            | DynamicImage::ImageRgb16(_)
            | DynamicImage::ImageRgba16(_)
    );

    if !wide {
        return if is_color {
            img.into_rgb8().into()
        } else {
            img.into_luma8().into()
        };
    }

    let (width, height) = (img.width(), img.height());
    let raw = if is_color {
        img.into_rgb16().into_raw()
    } else {
        img.into_luma16().into_raw()
    };
    let data = raw.into_iter().map(|v| (v >> 8) as u8).collect();
    PixelBuffer::new(width, height, is_color, data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, Luma, Rgb, Rgba};

    fn png_bytes(img: DynamicImage) -> Vec<u8> {
        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, image::ImageFormat::Png).unwrap();
        out.into_inner()
    }

    #[test]
    fn test_decode_rgb_png() {
        let src = ImageBuffer::from_fn(3, 2, |x, y| Rgb([x as u8, y as u8, 7]));
        let bytes = png_bytes(DynamicImage::ImageRgb8(src));

        let decoded = decode_image(&bytes).unwrap();
        assert_eq!(decoded.format, ImageFormat::Png);
        assert_eq!(decoded.buffer.width, 3);
        assert_eq!(decoded.buffer.height, 2);
        assert!(decoded.buffer.is_color);
        // Pixel (2, 1)
        assert_eq!(&decoded.buffer.data[15..18], &[2u8, 1, 7]);
    }

    #[test]
    fn test_decode_gray_png_stays_gray() {
        let src = ImageBuffer::from_fn(2, 2, |x, y| Luma([(x + 2 * y) as u8 * 10]));
        let bytes = png_bytes(DynamicImage::ImageLuma8(src));

        let decoded = decode_image(&bytes).unwrap();
        assert!(!decoded.buffer.is_color);
        assert_eq!(decoded.buffer.data, vec![0, 10, 20, 30]);
    }

    #[test]
    fn test_decode_gray_as_color() {
        let src = ImageBuffer::from_fn(1, 1, |_, _| Luma([42u8]));
        let bytes = png_bytes(DynamicImage::ImageLuma8(src));

        let decoded = decode_image_as(&bytes, true).unwrap();
        assert!(decoded.buffer.is_color);
        assert_eq!(decoded.buffer.data, vec![42, 42, 42]);
    }

    #[test]
    fn test_decode_drops_alpha() {
        let src = ImageBuffer::from_fn(2, 1, |_, _| Rgba([10u8, 20, 30, 0]));
        let bytes = png_bytes(DynamicImage::ImageRgba8(src));

        let decoded = decode_image(&bytes).unwrap();
        assert!(decoded.buffer.is_color);
        assert_eq!(decoded.buffer.data, vec![10, 20, 30, 10, 20, 30]);
    }

    #[test]
    fn test_decode_16bit_keeps_high_byte() {
        let src: ImageBuffer<Rgb<u16>, Vec<u16>> =
            ImageBuffer::from_fn(1, 1, |_, _| Rgb([0x12ff, 0xab00, 0x00ff]));
        let bytes = png_bytes(DynamicImage::ImageRgb16(src));

        let decoded = decode_image(&bytes).unwrap();
        assert_eq!(decoded.buffer.data, vec![0x12, 0xab, 0x00]);
    }

    #[test]
    fn test_decode_garbage() {
        let result = decode_image(&[0x00, 0x01, 0x02, 0x03]);
        assert!(matches!(result, Err(DecodeError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_decode_truncated_png() {
        let src = ImageBuffer::from_fn(8, 8, |_, _| Rgb([1u8, 2, 3]));
        let bytes = png_bytes(DynamicImage::ImageRgb8(src));

        let result = decode_image(&bytes[..bytes.len() / 2]);
        assert!(matches!(result, Err(DecodeError::CorruptedFile(_))));
    }

    #[test]
    fn test_decode_empty() {
        assert!(decode_image(&[]).is_err());
    }
}
