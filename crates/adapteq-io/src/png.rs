//! PNG image format support
//!
//! Reading accepts every PNG color type. Palette and sub-byte grayscale
//! images are expanded to 8 bits and 16-bit samples are truncated to
//! their high byte before conversion to gray. Alpha is dropped.
//!
//! Writing always produces 8-bit grayscale.

use crate::{IoError, IoResult, luminance};
use adapteq_core::{Image, ImageMut};
use png::{BitDepth, ColorType, Decoder, Encoder, Transformations};
use std::io::{BufRead, Seek, Write};

/// Read a PNG image as 8-bit gray
pub fn read_png<R: BufRead + Seek>(reader: R) -> IoResult<Image> {
    let mut decoder = Decoder::new(reader);
    decoder.set_transformations(Transformations::EXPAND | Transformations::STRIP_16);
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("PNG decode error: {}", e)))?;

    let (width, height) = {
        let info = reader.info();
        (info.width, info.height)
    };
    let (color_type, bit_depth) = reader.output_color_type();
    if bit_depth != BitDepth::Eight {
        return Err(IoError::UnsupportedFormat(format!(
            "unexpected PNG output depth: {:?}",
            bit_depth
        )));
    }
    let samples = match color_type {
        ColorType::Grayscale => 1,
        ColorType::GrayscaleAlpha => 2,
        ColorType::Rgb => 3,
        ColorType::Rgba => 4,
        ColorType::Indexed => {
            return Err(IoError::UnsupportedFormat(
                "PNG palette was not expanded".to_string(),
            ));
        }
    };

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("failed to get output buffer size".to_string()))?;
    let mut buf = vec![0; buf_size];
    let output_info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::DecodeError(format!("PNG frame error: {}", e)))?;

    let bytes_per_row = output_info.line_size;
    let data = &buf[..output_info.buffer_size()];
    let mut image = ImageMut::new(width, height)?;

    for y in 0..height {
        let row_start = y as usize * bytes_per_row;
        let src = &data[row_start..row_start + width as usize * samples];
        let dst = image.row_mut(y);
        match samples {
            1 => dst.copy_from_slice(src),
            2 => {
                for (d, s) in dst.iter_mut().zip(src.chunks_exact(2)) {
                    *d = s[0];
                }
            }
            _ => {
                for (d, s) in dst.iter_mut().zip(src.chunks_exact(samples)) {
                    *d = luminance(s[0], s[1], s[2]);
                }
            }
        }
    }

    Ok(image.into())
}

/// Write an image as 8-bit grayscale PNG
pub fn write_png<W: Write>(image: &Image, writer: W) -> IoResult<()> {
    let mut encoder = Encoder::new(writer, image.width(), image.height());
    encoder.set_color(ColorType::Grayscale);
    encoder.set_depth(BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(format!("PNG header error: {}", e)))?;

    // Rows are unpadded, so the pixel buffer is already in PNG scanline order
    writer
        .write_image_data(image.data())
        .map_err(|e| IoError::EncodeError(format!("PNG write error: {}", e)))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn encode(width: u32, height: u32, color: ColorType, depth: BitDepth, data: &[u8]) -> Vec<u8> {
        let mut buffer = Vec::new();
        {
            let mut encoder = Encoder::new(&mut buffer, width, height);
            encoder.set_color(color);
            encoder.set_depth(depth);
            if color == ColorType::Indexed {
                encoder.set_palette(vec![0, 0, 0, 255, 0, 0, 0, 0, 255]);
            }
            let mut writer = encoder.write_header().unwrap();
            writer.write_image_data(data).unwrap();
        }
        buffer
    }

    #[test]
    fn test_png_roundtrip_grayscale() {
        let mut image = ImageMut::new(10, 7).unwrap();
        for y in 0..7 {
            for x in 0..10 {
                image.set_pixel(x, y, ((x + y) * 20) as u8).unwrap();
            }
        }
        let image: Image = image.into();

        let mut buffer = Vec::new();
        write_png(&image, &mut buffer).unwrap();
        let image2 = read_png(Cursor::new(buffer)).unwrap();

        assert_eq!(image2.dimensions(), (10, 7));
        assert_eq!(image2.data(), image.data());
    }

    #[test]
    fn test_read_rgb_as_luminance() {
        let data = [255, 0, 0, 0, 255, 0, 0, 0, 255, 255, 255, 255];
        let png = encode(4, 1, ColorType::Rgb, BitDepth::Eight, &data);
        let image = read_png(Cursor::new(png)).unwrap();
        assert_eq!(image.data(), &[76, 149, 29, 255]);
    }

    #[test]
    fn test_read_gray_alpha_drops_alpha() {
        let png = encode(2, 1, ColorType::GrayscaleAlpha, BitDepth::Eight, &[40, 0, 90, 255]);
        let image = read_png(Cursor::new(png)).unwrap();
        assert_eq!(image.data(), &[40, 90]);
    }

    #[test]
    fn test_read_1bpp_expands() {
        // 0b1010_0000: pixels 1, 0, 1
        let png = encode(3, 1, ColorType::Grayscale, BitDepth::One, &[0b1010_0000]);
        let image = read_png(Cursor::new(png)).unwrap();
        assert_eq!(image.data(), &[255, 0, 255]);
    }

    #[test]
    fn test_read_16bit_keeps_high_byte() {
        let png = encode(2, 1, ColorType::Grayscale, BitDepth::Sixteen, &[0x12, 0x34, 0xAB, 0xCD]);
        let image = read_png(Cursor::new(png)).unwrap();
        assert_eq!(image.data(), &[0x12, 0xAB]);
    }

    #[test]
    fn test_read_palette() {
        let png = encode(3, 1, ColorType::Indexed, BitDepth::Eight, &[0, 1, 2]);
        let image = read_png(Cursor::new(png)).unwrap();
        assert_eq!(image.data(), &[0, 76, 29]);
    }

    #[test]
    fn test_read_garbage() {
        assert!(read_png(Cursor::new(b"not a png".to_vec())).is_err());
    }
}
