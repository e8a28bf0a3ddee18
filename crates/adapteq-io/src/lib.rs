//! adapteq-io - Image I/O
//!
//! Reads PNG, PGM/PPM and JPEG files into 8-bit gray [`Image`]s and writes
//! PNG and PGM. Color input is converted to luminance on read.
//!
//! # Features
//!
//! - `png-format` (default): PNG read/write
//! - `pnm` (default): PGM/PPM read, PGM write
//! - `jpeg` (default): JPEG read

mod error;
pub mod format;
#[cfg(feature = "jpeg")]
pub mod jpeg;
#[cfg(feature = "png-format")]
pub mod png;
#[cfg(feature = "pnm")]
pub mod pnm;

pub use error::{IoError, IoResult};
pub use format::{ImageFormat, detect_format, detect_format_from_bytes};

#[cfg(feature = "jpeg")]
pub use jpeg::read_jpeg;
#[cfg(feature = "png-format")]
pub use png::{read_png, write_png};
#[cfg(feature = "pnm")]
pub use pnm::{read_pnm, write_pnm};

use adapteq_core::Image;
use log::debug;
use std::fs::File;
use std::io::{BufWriter, Cursor, Write};
use std::path::Path;

/// Gray level of an RGB color: `(299 R + 587 G + 114 B) / 1000`.
#[inline]
pub fn luminance(r: u8, g: u8, b: u8) -> u8 {
    ((299 * r as u32 + 587 * g as u32 + 114 * b as u32) / 1000) as u8
}

/// Read an image from a file, detecting the format from its content.
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<Image> {
    let path = path.as_ref();
    let data = std::fs::read(path)?;
    let image = read_image_mem(&data)?;
    debug!(
        "read {} ({}x{})",
        path.display(),
        image.width(),
        image.height()
    );
    Ok(image)
}

/// Read an image from memory, detecting the format from its content.
pub fn read_image_mem(data: &[u8]) -> IoResult<Image> {
    match detect_format_from_bytes(data)? {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => read_png(Cursor::new(data)),
        #[cfg(feature = "pnm")]
        ImageFormat::Pnm => read_pnm(Cursor::new(data)),
        #[cfg(feature = "jpeg")]
        ImageFormat::Jpeg => read_jpeg(data),
        #[allow(unreachable_patterns)]
        format => Err(IoError::UnsupportedFormat(format!(
            "{:?} support not enabled",
            format
        ))),
    }
}

/// Write an image to a file in the given format.
pub fn write_image<P: AsRef<Path>>(image: &Image, path: P, format: ImageFormat) -> IoResult<()> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    write_image_to(image, &mut writer, format)?;
    writer.flush()?;
    debug!("wrote {} as {:?}", path.display(), format);
    Ok(())
}

/// Encode an image into memory in the given format.
pub fn write_image_mem(image: &Image, format: ImageFormat) -> IoResult<Vec<u8>> {
    let mut buffer = Vec::new();
    write_image_to(image, &mut buffer, format)?;
    Ok(buffer)
}

fn write_image_to<W: Write>(image: &Image, writer: W, format: ImageFormat) -> IoResult<()> {
    match format {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => write_png(image, writer),
        #[cfg(feature = "pnm")]
        ImageFormat::Pnm => write_pnm(image, writer),
        ImageFormat::Jpeg => Err(IoError::UnsupportedFormat(
            "JPEG writing is not supported".to_string(),
        )),
        #[allow(unreachable_patterns)]
        format => Err(IoError::UnsupportedFormat(format!(
            "{:?} support not enabled",
            format
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_luminance() {
        assert_eq!(luminance(0, 0, 0), 0);
        assert_eq!(luminance(255, 255, 255), 255);
        assert_eq!(luminance(255, 0, 0), 76);
        assert_eq!(luminance(0, 255, 0), 149);
        assert_eq!(luminance(0, 0, 255), 29);
        assert_eq!(luminance(100, 100, 100), 100);
    }

    #[test]
    fn test_memory_roundtrip() {
        let image = Image::from_rows(&[[1u8, 2, 3], [4, 5, 6]]).unwrap();
        for format in [ImageFormat::Png, ImageFormat::Pnm] {
            let data = write_image_mem(&image, format).unwrap();
            assert_eq!(detect_format_from_bytes(&data).unwrap(), format);
            let image2 = read_image_mem(&data).unwrap();
            assert_eq!(image2.data(), image.data());
        }
        assert!(write_image_mem(&image, ImageFormat::Jpeg).is_err());
    }
}
