//! Output composition
//!
//! Each output pixel is produced by exactly one of the rules in
//! [`PixelRule`], chosen from the pixel position relative to the mesh of
//! tile centers:
//!
//! - Outside the mesh (before the first center or past the last one on
//!   either axis) the containing tile's table is applied directly. These
//!   pixels always sit in a corner or border tile.
//! - A pixel exactly on a tile center uses that tile's table.
//! - Everything else lies in a mesh cell and blends the four values
//!   produced by the tables of the surrounding centers.
//!
//! Centers of partial last tiles may fall outside the image. They stay in
//! the mesh, so the remainder strip of a non-divisible image is blended
//! like any other cell.

use crate::grid::{TileGrid, Zone};
use crate::region::RegionTransforms;
use crate::{FilterError, FilterResult};
use adapteq_core::{Image, ImageMut};
use log::{debug, warn};
use rayon::prelude::*;

/// The rule that produces an output pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PixelRule {
    /// Outside the mesh, in a corner tile
    Corner,
    /// Outside the mesh, in a border tile
    Border,
    /// Exactly on a tile center
    Center,
    /// Blend of the four surrounding centers
    Bilinear,
    /// Containing tile, when the grid has a single tile along an axis
    Nearest,
}

/// Where the value of a pixel comes from.
#[derive(Debug, Clone, Copy)]
enum Source {
    Tile(u32, u32),
    Blend { kx: u32, ky: u32, a: f64, b: f64 },
}

fn resolve(grid: &TileGrid, x: u32, y: u32) -> (PixelRule, Source) {
    let (nx, ny) = (grid.nx(), grid.ny());
    let (tx, ty) = grid.tile_index_at(x, y);
    let first_x = grid.center_x(0);
    let first_y = grid.center_y(0);

    if x < first_x || x > grid.center_x(nx - 1) || y < first_y || y > grid.center_y(ny - 1) {
        let rule = match grid.tile(tx, ty).zone {
            Zone::Corner(_) => PixelRule::Corner,
            Zone::Border(_) | Zone::Interior => PixelRule::Border,
        };
        return (rule, Source::Tile(tx, ty));
    }

    if grid.tile(tx, ty).center == (x, y) {
        return (PixelRule::Center, Source::Tile(tx, ty));
    }

    if !grid.is_interpolable() {
        return (PixelRule::Nearest, Source::Tile(tx, ty));
    }

    let tw = grid.tile_width();
    let th = grid.tile_height();
    let kx = ((x - first_x) / tw).min(nx - 2);
    let ky = ((y - first_y) / th).min(ny - 2);
    let a = (x - grid.center_x(kx)) as f64 / tw as f64;
    let b = (y - grid.center_y(ky)) as f64 / th as f64;
    (PixelRule::Bilinear, Source::Blend { kx, ky, a, b })
}

/// Report which rule produces output pixel `(x, y)`.
pub fn classify_pixel(grid: &TileGrid, x: u32, y: u32) -> PixelRule {
    resolve(grid, x, y).0
}

fn check_sizes(image: &Image, grid: &TileGrid, transforms: &RegionTransforms) -> FilterResult<()> {
    if image.dimensions() != (grid.width(), grid.height()) {
        return Err(FilterError::Core(adapteq_core::Error::DimensionMismatch {
            expected: (grid.width(), grid.height()),
            actual: image.dimensions(),
        }));
    }
    if transforms.len() != grid.tiles().len() {
        return Err(FilterError::InvalidParameters(format!(
            "{} tables for a grid of {} tiles",
            transforms.len(),
            grid.tiles().len()
        )));
    }
    Ok(())
}

/// Compose the adaptively equalized image.
///
/// # Errors
///
/// Returns an error if `grid` or `transforms` were built for a different
/// image size.
pub fn compose(image: &Image, grid: &TileGrid, transforms: &RegionTransforms) -> FilterResult<Image> {
    check_sizes(image, grid, transforms)?;

    if !grid.is_interpolable() {
        warn!(
            "{}x{} tile grid cannot be interpolated; mapping pixels by their own tile",
            grid.nx(),
            grid.ny()
        );
    }

    let width = image.width() as usize;
    let mut out = ImageMut::new(image.width(), image.height())?;
    out.data_mut()
        .par_chunks_mut(width)
        .enumerate()
        .for_each(|(y, row)| {
            let y = y as u32;
            let src = image.row(y);
            for (x, (dst, &p)) in row.iter_mut().zip(src).enumerate() {
                let p = p as usize;
                *dst = match resolve(grid, x as u32, y).1 {
                    Source::Tile(tx, ty) => transforms.get(tx, ty)[p],
                    Source::Blend { kx, ky, a, b } => {
                        let t00 = transforms.get(kx, ky)[p] as f64;
                        let t10 = transforms.get(kx + 1, ky)[p] as f64;
                        let t01 = transforms.get(kx, ky + 1)[p] as f64;
                        let t11 = transforms.get(kx + 1, ky + 1)[p] as f64;
                        let v = (1.0 - a) * (1.0 - b) * t00
                            + a * (1.0 - b) * t10
                            + (1.0 - a) * b * t01
                            + a * b * t11;
                        let lo = t00.min(t10).min(t01).min(t11);
                        let hi = t00.max(t10).max(t01).max(t11);
                        // Truncate toward zero, as a float stored into u8
                        v.clamp(lo, hi) as u8
                    }
                };
            }
        });

    debug!("composed {}x{} output", image.width(), image.height());
    Ok(out.into())
}

/// Map every pixel by the table of the tile that contains it.
///
/// Tile boundaries show as visible steps in the output.
///
/// # Errors
///
/// Returns an error if `grid` or `transforms` were built for a different
/// image size.
pub fn compose_unblended(
    image: &Image,
    grid: &TileGrid,
    transforms: &RegionTransforms,
) -> FilterResult<Image> {
    check_sizes(image, grid, transforms)?;

    let width = image.width() as usize;
    let tw = grid.tile_width() as usize;
    let mut out = ImageMut::new(image.width(), image.height())?;
    out.data_mut()
        .par_chunks_mut(width)
        .enumerate()
        .for_each(|(y, row)| {
            let y = y as u32;
            let ty = grid.tile_index_at(0, y).1;
            let src = image.row(y);
            for ((dst_chunk, src_chunk), tx) in row.chunks_mut(tw).zip(src.chunks(tw)).zip(0..) {
                let lut = transforms.get(tx, ty);
                for (dst, &p) in dst_chunk.iter_mut().zip(src_chunk) {
                    *dst = lut[p as usize];
                }
            }
        });
    Ok(out.into())
}
