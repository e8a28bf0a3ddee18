//! Histogram equalization entry points
//!
//! - Global: one table from the whole image
//! - Tiled: one table per tile, blended between tile centers
//! - Unblended: one table per tile, applied without blending
//!
//! # Example
//!
//! ```
//! use adapteq_core::Image;
//! use adapteq_filter::equalize::{TileEqualizeOptions, equalize_tiled};
//!
//! let image = Image::from_rows(&[[10u8, 10, 200, 200], [10, 10, 200, 200]]).unwrap();
//! let options = TileEqualizeOptions::new(2, 2);
//! let out = equalize_tiled(&image, &options).unwrap();
//! assert_eq!(out.dimensions(), (4, 2));
//! ```

use crate::compose::{compose, compose_unblended};
use crate::grid::TileGrid;
use crate::region::RegionTransforms;
use crate::trc::{equalization_trc, trc_map};
use crate::{FilterError, FilterResult};
use adapteq_core::Image;
use log::debug;

/// Default tile width
pub const DEFAULT_TILE_WIDTH: u32 = 64;

/// Default tile height
pub const DEFAULT_TILE_HEIGHT: u32 = 48;

/// Options for tiled equalization
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileEqualizeOptions {
    /// Tile width in pixels (minimum 1)
    pub tile_width: u32,
    /// Tile height in pixels (minimum 1)
    pub tile_height: u32,
}

impl Default for TileEqualizeOptions {
    fn default() -> Self {
        Self {
            tile_width: DEFAULT_TILE_WIDTH,
            tile_height: DEFAULT_TILE_HEIGHT,
        }
    }
}

impl TileEqualizeOptions {
    /// Create options with the given tile size.
    pub fn new(tile_width: u32, tile_height: u32) -> Self {
        Self {
            tile_width,
            tile_height,
        }
    }

    /// Check the tile size.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidTileSize`] if either dimension is 0.
    pub fn validate(&self) -> FilterResult<()> {
        if self.tile_width == 0 || self.tile_height == 0 {
            return Err(FilterError::InvalidTileSize {
                width: self.tile_width,
                height: self.tile_height,
            });
        }
        Ok(())
    }
}

/// Equalize the histogram of the whole image.
pub fn equalize_global(image: &Image) -> FilterResult<Image> {
    let lut = equalization_trc(image, None)?;
    let mut out = image.to_mut();
    trc_map(&mut out, &lut);
    Ok(out.into())
}

/// Adaptive equalization with default tile size
pub fn equalize_tiled_simple(image: &Image) -> FilterResult<Image> {
    equalize_tiled(image, &TileEqualizeOptions::default())
}

/// Adaptive histogram equalization.
///
/// Builds one equalization table per tile and blends them bilinearly
/// between tile centers, so neighboring tiles join without visible steps.
/// A tile at least as large as the image gives exactly the result of
/// [`equalize_global`].
///
/// # Arguments
/// * `image` - Input image
/// * `options` - Tile size
///
/// # Errors
///
/// Returns [`FilterError::InvalidTileSize`] if a tile dimension is 0.
pub fn equalize_tiled(image: &Image, options: &TileEqualizeOptions) -> FilterResult<Image> {
    let (grid, transforms) = prepare(image, options)?;
    compose(image, &grid, &transforms)
}

/// Tiled equalization without blending.
///
/// Every pixel is mapped by the table of its own tile.
pub fn equalize_tiles_unblended(
    image: &Image,
    options: &TileEqualizeOptions,
) -> FilterResult<Image> {
    let (grid, transforms) = prepare(image, options)?;
    compose_unblended(image, &grid, &transforms)
}

fn prepare(
    image: &Image,
    options: &TileEqualizeOptions,
) -> FilterResult<(TileGrid, RegionTransforms)> {
    options.validate()?;
    let grid = TileGrid::new(
        image.width(),
        image.height(),
        options.tile_width,
        options.tile_height,
    )?;
    debug!(
        "{}x{} image, {}x{} tiles -> {}x{} grid",
        image.width(),
        image.height(),
        options.tile_width,
        options.tile_height,
        grid.nx(),
        grid.ny()
    );
    let transforms = RegionTransforms::build(image, &grid)?;
    Ok((grid, transforms))
}
