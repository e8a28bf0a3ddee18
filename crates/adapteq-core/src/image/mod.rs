//! Image - The 8-bit grayscale image container
//!
//! `Image` holds a single channel of 8-bit intensities, stored row-major
//! with no padding between rows.
//!
//! # Coordinates
//!
//! `x` is the column index (`0..width`) and `y` is the row index
//! (`0..height`). Every function in the workspace takes coordinates in
//! `(x, y)` order.
//!
//! # Ownership model
//!
//! `Image` uses `Arc` for cheap cloning (shared ownership). To modify
//! pixel data, copy into an `ImageMut` with [`Image::to_mut`] or build
//! one with [`ImageMut::new`], then convert back with `Into<Image>`.

mod access;
mod histogram;

pub use histogram::{GrayHistogram, write_histogram};

use crate::error::{Error, Result};
use std::sync::Arc;

/// Internal image data
#[derive(Debug)]
struct ImageData {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// Pixel values, row-major, `width * height` bytes
    data: Vec<u8>,
}

impl ImageData {
    fn zeroed(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let size = (width as usize) * (height as usize);
        Ok(Self {
            width,
            height,
            data: vec![0u8; size],
        })
    }
}

/// Immutable 8-bit grayscale image
///
/// # Examples
///
/// ```
/// use adapteq_core::Image;
///
/// let image = Image::new(640, 480).unwrap();
/// assert_eq!(image.width(), 640);
/// assert_eq!(image.height(), 480);
/// ```
#[derive(Debug, Clone)]
pub struct Image {
    inner: Arc<ImageData>,
}

impl Image {
    /// Create a new image with the specified dimensions.
    ///
    /// The image data is initialized to zero.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Ok(Image {
            inner: Arc::new(ImageData::zeroed(width, height)?),
        })
    }

    /// Create an image from row-major pixel data.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0, and
    /// [`Error::InvalidParameter`] if `data.len() != width * height`.
    pub fn from_vec(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let expected = (width as usize) * (height as usize);
        if data.len() != expected {
            return Err(Error::InvalidParameter(format!(
                "pixel buffer has {} bytes, expected {} for {}x{}",
                data.len(),
                expected,
                width,
                height
            )));
        }
        Ok(Image {
            inner: Arc::new(ImageData {
                width,
                height,
                data,
            }),
        })
    }

    /// Create an image from a slice of rows.
    ///
    /// All rows must have the same, non-zero length.
    ///
    /// ```
    /// use adapteq_core::Image;
    ///
    /// let image = Image::from_rows(&[[1u8, 2, 3], [4, 5, 6]]).unwrap();
    /// assert_eq!((image.width(), image.height()), (3, 2));
    /// assert_eq!(image.get_pixel(2, 1), Some(6));
    /// ```
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self> {
        let height = rows.len() as u32;
        let width = rows.first().map_or(0, |r| r.as_ref().len()) as u32;
        let mut data = Vec::with_capacity((width as usize) * (height as usize));
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width as usize {
                return Err(Error::InvalidParameter(format!(
                    "row {} has {} pixels, expected {}",
                    y,
                    row.len(),
                    width
                )));
            }
            data.extend_from_slice(row);
        }
        Self::from_vec(width, height, data)
    }

    /// Get the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.inner.width, self.inner.height)
    }

    /// Get raw access to the pixel data.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.inner.data
    }

    /// Get the pixels of row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: u32) -> &[u8] {
        let w = self.inner.width as usize;
        let start = (y as usize) * w;
        &self.inner.data[start..start + w]
    }

    /// Check if two images have the same width and height.
    pub fn sizes_equal(&self, other: &Image) -> bool {
        self.inner.width == other.inner.width && self.inner.height == other.inner.height
    }

    /// Create a mutable copy of this image.
    pub fn to_mut(&self) -> ImageMut {
        ImageMut {
            inner: ImageData {
                width: self.inner.width,
                height: self.inner.height,
                data: self.inner.data.clone(),
            },
        }
    }
}

/// Mutable image
///
/// Allows modification of pixel data. Convert back to an immutable
/// [`Image`] using `Into<Image>`.
#[derive(Debug)]
pub struct ImageMut {
    inner: ImageData,
}

impl ImageMut {
    /// Create a new zeroed mutable image.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Ok(ImageMut {
            inner: ImageData::zeroed(width, height)?,
        })
    }

    /// Get the image width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get raw access to the pixel data.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.inner.data
    }

    /// Get mutable access to the pixel data.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.inner.data
    }

    /// Get mutable access to row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row_mut(&mut self, y: u32) -> &mut [u8] {
        let w = self.inner.width as usize;
        let start = (y as usize) * w;
        &mut self.inner.data[start..start + w]
    }
}

impl From<ImageMut> for Image {
    fn from(image_mut: ImageMut) -> Self {
        Image {
            inner: Arc::new(image_mut.inner),
        }
    }
}
