//! JPEG image format support
//!
//! Reads JPEG images using the `jpeg-decoder` crate. Grayscale images are
//! taken as-is and RGB images are converted to gray. Writing is not
//! supported; the crate is decode-only.

use crate::{IoError, IoResult, luminance};
use adapteq_core::Image;
use jpeg_decoder::{Decoder, PixelFormat};
use std::io::Read;

/// Read a JPEG image as 8-bit gray.
///
/// # Arguments
/// * `reader` - A reader positioned at the JPEG SOI marker (`FF D8`)
pub fn read_jpeg<R: Read>(reader: R) -> IoResult<Image> {
    let mut decoder = Decoder::new(reader);
    let pixels = decoder
        .decode()
        .map_err(|e| IoError::DecodeError(format!("JPEG decode error: {}", e)))?;
    let info = decoder
        .info()
        .ok_or_else(|| IoError::DecodeError("JPEG header missing".to_string()))?;

    let width = info.width as u32;
    let height = info.height as u32;

    let gray = match info.pixel_format {
        PixelFormat::L8 => pixels,
        // Big-endian samples: keep the high byte
        PixelFormat::L16 => pixels.chunks_exact(2).map(|s| s[0]).collect(),
        PixelFormat::RGB24 => pixels
            .chunks_exact(3)
            .map(|s| luminance(s[0], s[1], s[2]))
            .collect(),
        other => {
            return Err(IoError::UnsupportedFormat(format!(
                "unsupported JPEG pixel format: {:?}",
                other
            )));
        }
    };

    Ok(Image::from_vec(width, height, gray)?)
}
