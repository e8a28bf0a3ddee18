//! adapteq-filter - Histogram equalization
//!
//! This crate provides:
//!
//! - Equalization tables (TRCs) from a region histogram
//! - Global histogram equalization
//! - Adaptive (tiled) equalization with bilinear blending between tiles
//! - Tiled equalization without blending, for comparison

pub mod compose;
pub mod equalize;
mod error;
pub mod grid;
pub mod region;
pub mod trc;

pub use error::{FilterError, FilterResult};

pub use compose::{PixelRule, classify_pixel, compose, compose_unblended};
pub use equalize::{
    TileEqualizeOptions, equalize_global, equalize_tiled, equalize_tiled_simple,
    equalize_tiles_unblended,
};
pub use grid::{Border, Corner, Tile, TileGrid, Zone};
pub use region::RegionTransforms;
pub use trc::{
    TrcLut, equalization_trc, equalization_trc_from_histogram, identity_trc, trc_map,
};
