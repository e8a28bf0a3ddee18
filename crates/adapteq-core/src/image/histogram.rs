//! Histogram generation for images
//!
//! Functions to compute the distribution of intensity values over an
//! image or over a rectangular region of it.

use super::Image;
use crate::Rect;
use crate::error::{Error, Result};
use std::io::Write;

/// 256-bin intensity histogram; entry `v` counts pixels with value `v`.
pub type GrayHistogram = [u64; 256];

impl Image {
    /// Get the intensity histogram of the whole image.
    ///
    /// ```
    /// use adapteq_core::Image;
    ///
    /// let image = Image::from_rows(&[[0u8, 0, 7]]).unwrap();
    /// let hist = image.gray_histogram();
    /// assert_eq!(hist[0], 2);
    /// assert_eq!(hist[7], 1);
    /// ```
    pub fn gray_histogram(&self) -> GrayHistogram {
        let mut hist = [0u64; 256];
        for &val in self.data() {
            hist[val as usize] += 1;
        }
        hist
    }

    /// Get the intensity histogram of the part of `region` inside the image.
    ///
    /// The region is clipped to the image bounds before any pixel is read.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if the region does not overlap
    /// the image.
    pub fn gray_histogram_in_rect(&self, region: &Rect) -> Result<GrayHistogram> {
        let clipped = region
            .clip_to(self.width(), self.height())
            .ok_or_else(|| {
                Error::InvalidParameter(format!(
                    "region {:?} lies outside the {}x{} image",
                    region,
                    self.width(),
                    self.height()
                ))
            })?;

        let mut hist = [0u64; 256];
        for y in clipped.y..clipped.bottom() {
            let row = self.row(y);
            for &val in &row[clipped.x as usize..clipped.right() as usize] {
                hist[val as usize] += 1;
            }
        }
        Ok(hist)
    }

    /// Write the image histogram as a two-column text table.
    ///
    /// Each line holds `value count`, one line per intensity level, after
    /// an optional `# label` header line. The format is meant for external
    /// plotting tools.
    pub fn histogram_report(&self, writer: &mut impl Write, label: Option<&str>) -> Result<()> {
        write_histogram(&self.gray_histogram(), writer, label)
    }
}

/// Write a histogram as a two-column `value count` text table.
pub fn write_histogram(
    hist: &GrayHistogram,
    writer: &mut impl Write,
    label: Option<&str>,
) -> Result<()> {
    if let Some(text) = label {
        writeln!(writer, "# {text}")?;
    }
    for (value, count) in hist.iter().enumerate() {
        writeln!(writer, "{value} {count}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gray_histogram_counts_every_pixel() {
        let image = Image::from_rows(&[[10u8, 10, 200], [50, 10, 255]]).unwrap();
        let hist = image.gray_histogram();
        assert_eq!(hist[10], 3);
        assert_eq!(hist[50], 1);
        assert_eq!(hist[200], 1);
        assert_eq!(hist[255], 1);
        assert_eq!(hist.iter().sum::<u64>(), 6);
    }

    #[test]
    fn test_gray_histogram_in_rect_clips() {
        let image = Image::from_rows(&[[1u8, 2, 3], [4, 5, 6], [7, 8, 9]]).unwrap();
        // Extends past the right and bottom edges
        let hist = image.gray_histogram_in_rect(&Rect::new(1, 1, 5, 5)).unwrap();
        assert_eq!(hist.iter().sum::<u64>(), 4);
        for v in [5, 6, 8, 9] {
            assert_eq!(hist[v], 1, "value {v}");
        }
        assert_eq!(hist[1], 0);
    }

    #[test]
    fn test_gray_histogram_in_rect_outside() {
        let image = Image::new(3, 3).unwrap();
        assert!(image.gray_histogram_in_rect(&Rect::new(3, 0, 2, 2)).is_err());
    }

    #[test]
    fn test_histogram_report_format() {
        let image = Image::from_rows(&[[0u8, 255, 255]]).unwrap();
        let mut out = Vec::new();
        image.histogram_report(&mut out, Some("input")).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 257);
        assert_eq!(lines[0], "# input");
        assert_eq!(lines[1], "0 1");
        assert_eq!(lines[2], "1 0");
        assert_eq!(lines[256], "255 2");
    }
}
