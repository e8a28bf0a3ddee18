//! adapteq Core - Basic data structures for contrast enhancement
//!
//! This crate provides the fundamental data structures used throughout
//! the adapteq workspace:
//!
//! - [`Image`] / [`ImageMut`] - 8-bit grayscale image (immutable / mutable)
//! - [`Rect`] - Rectangle regions
//! - [`GrayHistogram`] - 256-bin intensity histogram

pub mod error;
pub mod image;
pub mod rect;

pub use error::{Error, Result};
pub use image::{GrayHistogram, Image, ImageMut, write_histogram};
pub use rect::Rect;
