//! Pixel access functions
//!
//! Checked and unchecked getters and setters for single pixels.

use super::{Image, ImageMut};
use crate::error::{Error, Result};

#[inline]
fn offset(width: u32, x: u32, y: u32) -> usize {
    (y as usize) * (width as usize) + (x as usize)
}

impl Image {
    /// Get a pixel value at (x, y).
    ///
    /// Returns `None` if coordinates are out of bounds.
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        Some(self.get_pixel_unchecked(x, y))
    }

    /// Get a pixel value without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if the computed offset is past the end of the data.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> u8 {
        self.inner.data[offset(self.inner.width, x, y)]
    }
}

impl ImageMut {
    /// Get a pixel value at (x, y).
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        Some(self.get_pixel_unchecked(x, y))
    }

    /// Get a pixel value without bounds checking.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> u8 {
        self.inner.data[offset(self.inner.width, x, y)]
    }

    /// Set a pixel value at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if coordinates are out of bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, val: u8) -> Result<()> {
        if x >= self.width() {
            return Err(Error::IndexOutOfBounds {
                index: x as usize,
                len: self.width() as usize,
            });
        }
        if y >= self.height() {
            return Err(Error::IndexOutOfBounds {
                index: y as usize,
                len: self.height() as usize,
            });
        }
        self.set_pixel_unchecked(x, y, val);
        Ok(())
    }

    /// Set a pixel value without bounds checking.
    #[inline]
    pub fn set_pixel_unchecked(&mut self, x: u32, y: u32, val: u8) {
        let idx = offset(self.inner.width, x, y);
        self.inner.data[idx] = val;
    }
}
