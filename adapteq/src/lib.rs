//! adapteq - Adaptive histogram equalization for Rust
//!
//! Enhances the contrast of 8-bit grayscale images by histogram
//! equalization, either over the whole image or per tile with bilinear
//! blending between tile centers.
//!
//! # Example
//!
//! ```
//! use adapteq::Image;
//! use adapteq::filter::{TileEqualizeOptions, equalize_tiled};
//!
//! let image = Image::from_rows(&[[10u8, 10, 200, 200], [50, 50, 100, 100]]).unwrap();
//! let out = equalize_tiled(&image, &TileEqualizeOptions::new(2, 1)).unwrap();
//! assert_eq!(out.dimensions(), image.dimensions());
//! ```

// Re-export core types (primary data structures used everywhere)
pub use adapteq_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use adapteq_filter as filter;
pub use adapteq_io as io;
