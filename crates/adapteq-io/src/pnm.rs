//! PNM (Portable Any Map) format support
//!
//! Reads PGM (P2 ASCII, P5 binary) and PPM (P3 ASCII, P6 binary) with any
//! maxval up to 65535. Samples are rescaled to 0..=255 and color is
//! converted to gray. Writing always produces binary P5 with maxval 255.

use crate::{IoError, IoResult, luminance};
use adapteq_core::Image;
use std::io::{BufRead, Read, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Encoding {
    Ascii,
    Binary,
}

/// Read the next whitespace-delimited header token, skipping `#` comments.
///
/// Consumes the single whitespace byte that terminates the token.
fn read_token<R: BufRead>(reader: &mut R) -> IoResult<String> {
    let mut token = String::new();
    let mut in_comment = false;
    loop {
        let mut byte = [0u8; 1];
        if reader.read(&mut byte)? == 0 {
            if token.is_empty() {
                return Err(IoError::InvalidData("unexpected end of PNM data".to_string()));
            }
            return Ok(token);
        }
        let c = byte[0];
        if in_comment {
            in_comment = c != b'\n' && c != b'\r';
            continue;
        }
        if c == b'#' && token.is_empty() {
            in_comment = true;
        } else if c.is_ascii_whitespace() {
            if !token.is_empty() {
                return Ok(token);
            }
        } else {
            token.push(c as char);
        }
    }
}

fn read_number<R: BufRead>(reader: &mut R, what: &str) -> IoResult<u32> {
    let token = read_token(reader)?;
    token
        .parse()
        .map_err(|_| IoError::InvalidData(format!("invalid PNM {}: {:?}", what, token)))
}

/// Map a sample in `0..=maxval` to `0..=255`, rounding to nearest.
fn scale(sample: u32, maxval: u32) -> IoResult<u8> {
    if sample > maxval {
        return Err(IoError::InvalidData(format!(
            "PNM sample {} exceeds maxval {}",
            sample, maxval
        )));
    }
    if maxval == 255 {
        return Ok(sample as u8);
    }
    Ok(((sample * 255 + maxval / 2) / maxval) as u8)
}

/// Read a PNM image (P2/P3/P5/P6) as 8-bit gray.
///
/// # Arguments
/// * `reader` - A buffered reader positioned at the magic number
pub fn read_pnm<R: BufRead>(mut reader: R) -> IoResult<Image> {
    let magic = read_token(&mut reader)?;
    let (encoding, channels) = match magic.as_str() {
        "P2" => (Encoding::Ascii, 1),
        "P3" => (Encoding::Ascii, 3),
        "P5" => (Encoding::Binary, 1),
        "P6" => (Encoding::Binary, 3),
        other => {
            return Err(IoError::UnsupportedFormat(format!(
                "unsupported PNM type: {}",
                other
            )));
        }
    };

    let width = read_number(&mut reader, "width")?;
    let height = read_number(&mut reader, "height")?;
    let maxval = read_number(&mut reader, "maxval")?;
    if maxval == 0 || maxval > 65535 {
        return Err(IoError::InvalidData(format!("invalid PNM maxval: {}", maxval)));
    }

    if width == 0 || height == 0 {
        return Err(adapteq_core::Error::InvalidDimension { width, height }.into());
    }

    // Grows with the decoded rows, not with the header's claimed size
    let mut data = Vec::new();
    let row_samples = width as usize * channels;
    let bytes_per_sample = if maxval > 255 { 2 } else { 1 };
    let mut samples = vec![0u32; row_samples];
    let mut raw = vec![0u8; row_samples * bytes_per_sample];

    for y in 0..height {
        match encoding {
            Encoding::Ascii => {
                for s in samples.iter_mut() {
                    *s = read_number(&mut reader, "sample")?;
                }
            }
            Encoding::Binary => {
                reader.read_exact(&mut raw).map_err(|e| {
                    IoError::InvalidData(format!("truncated PNM raster at row {}: {}", y, e))
                })?;
                if bytes_per_sample == 1 {
                    for (s, &b) in samples.iter_mut().zip(&raw) {
                        *s = b as u32;
                    }
                } else {
                    for (s, b) in samples.iter_mut().zip(raw.chunks_exact(2)) {
                        *s = u16::from_be_bytes([b[0], b[1]]) as u32;
                    }
                }
            }
        }

        if channels == 1 {
            for &s in &samples {
                data.push(scale(s, maxval)?);
            }
        } else {
            for rgb in samples.chunks_exact(3) {
                data.push(luminance(
                    scale(rgb[0], maxval)?,
                    scale(rgb[1], maxval)?,
                    scale(rgb[2], maxval)?,
                ));
            }
        }
    }

    Ok(Image::from_vec(width, height, data)?)
}

/// Write an image as binary PGM (P5, maxval 255).
pub fn write_pnm<W: Write>(image: &Image, mut writer: W) -> IoResult<()> {
    write!(writer, "P5\n{} {}\n255\n", image.width(), image.height())?;
    writer.write_all(image.data())?;
    writer.flush()?;
    Ok(())
}
