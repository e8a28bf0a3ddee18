//! Per-tile equalization tables

use crate::grid::TileGrid;
use crate::trc::{TrcLut, equalization_trc_from_histogram};
use crate::{FilterError, FilterResult};
use adapteq_core::Image;
use log::{debug, trace};
use rayon::prelude::*;

/// One equalization table per tile, in the grid's row-major tile order.
#[derive(Debug, Clone)]
pub struct RegionTransforms {
    nx: u32,
    ny: u32,
    tables: Vec<TrcLut>,
}

impl RegionTransforms {
    /// Build the table of every tile from the histogram of its clipped extent.
    ///
    /// Tiles are processed in parallel.
    ///
    /// # Errors
    ///
    /// Returns an error if the grid was built for a different image size.
    pub fn build(image: &Image, grid: &TileGrid) -> FilterResult<Self> {
        if image.dimensions() != (grid.width(), grid.height()) {
            return Err(FilterError::Core(adapteq_core::Error::DimensionMismatch {
                expected: (grid.width(), grid.height()),
                actual: image.dimensions(),
            }));
        }

        let tables = grid
            .tiles()
            .par_iter()
            .map(|tile| -> FilterResult<TrcLut> {
                let rect = grid.clipped_extent(tile);
                let hist = image.gray_histogram_in_rect(&rect)?;
                trace!(
                    "tile ({}, {}) {:?}: {} pixels",
                    tile.tx,
                    tile.ty,
                    rect,
                    rect.area()
                );
                Ok(equalization_trc_from_histogram(&hist))
            })
            .collect::<FilterResult<Vec<_>>>()?;

        debug!(
            "built {} tile tables ({}x{} grid)",
            tables.len(),
            grid.nx(),
            grid.ny()
        );

        Ok(Self {
            nx: grid.nx(),
            ny: grid.ny(),
            tables,
        })
    }

    /// Table of tile `(tx, ty)`.
    ///
    /// # Panics
    ///
    /// Panics if `(tx, ty)` is outside the grid.
    #[inline]
    pub fn get(&self, tx: u32, ty: u32) -> &TrcLut {
        assert!(tx < self.nx && ty < self.ny, "tile ({tx}, {ty}) outside grid");
        &self.tables[(ty as usize) * (self.nx as usize) + (tx as usize)]
    }

    /// Number of tables.
    #[inline]
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// Always false for a table built from a grid.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}
