//! Tile grid geometry
//!
//! Partitions an image into tiles of a fixed size, starting at the
//! top-left corner. The last tile on each axis keeps its nominal size even
//! when it runs past the image; reads are clipped, centers are not.
//!
//! Each tile is tagged once with its [`Zone`] relative to the grid
//! extremes, and every lookup from pixel to tile is done by integer
//! division rather than by scanning the tiles.

use crate::{FilterError, FilterResult};
use adapteq_core::Rect;

/// Which corner of the grid a corner tile occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Corner {
    /// Minimum x, minimum y
    TopLeft,
    /// Maximum x, minimum y
    TopRight,
    /// Minimum x, maximum y
    BottomLeft,
    /// Maximum x, maximum y
    BottomRight,
}

/// Which edge of the grid a border tile lies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Border {
    /// Minimum x
    Left,
    /// Maximum x
    Right,
    /// Minimum y
    Top,
    /// Maximum y
    Bottom,
}

/// Position of a tile relative to the extremes of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Zone {
    /// Extremal on both axes
    Corner(Corner),
    /// Extremal on exactly one axis
    Border(Border),
    /// Not extremal on either axis
    Interior,
}

impl Zone {
    /// Classify tile `(tx, ty)` in an `nx` by `ny` grid.
    ///
    /// When an axis holds a single tile, that tile is both the minimum and
    /// the maximum of the axis; the left/top variants win such ties, and
    /// a one-tile grid is `Corner(TopLeft)`.
    pub fn classify(tx: u32, ty: u32, nx: u32, ny: u32) -> Zone {
        let left = tx == 0;
        let right = tx + 1 == nx;
        let top = ty == 0;
        let bottom = ty + 1 == ny;

        if (left || right) && (top || bottom) {
            return Zone::Corner(match (left, top) {
                (true, true) => Corner::TopLeft,
                (true, false) => Corner::BottomLeft,
                (false, true) => Corner::TopRight,
                (false, false) => Corner::BottomRight,
            });
        }
        if left {
            Zone::Border(Border::Left)
        } else if right {
            Zone::Border(Border::Right)
        } else if top {
            Zone::Border(Border::Top)
        } else if bottom {
            Zone::Border(Border::Bottom)
        } else {
            Zone::Interior
        }
    }

    /// Check if this is a corner zone.
    pub fn is_corner(self) -> bool {
        matches!(self, Zone::Corner(_))
    }
}

/// A single tile of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    /// Column index in the grid
    pub tx: u32,
    /// Row index in the grid
    pub ty: u32,
    /// Nominal extent; may run past the image
    pub extent: Rect,
    /// Reference point of the tile in the interpolation mesh
    pub center: (u32, u32),
    /// Classification relative to the grid extremes
    pub zone: Zone,
}

impl Tile {
    /// Top-left corner of the tile in image coordinates.
    #[inline]
    pub fn origin(&self) -> (u32, u32) {
        (self.extent.x, self.extent.y)
    }
}

/// Tiling of a `width` by `height` image.
#[derive(Debug, Clone)]
pub struct TileGrid {
    width: u32,
    height: u32,
    tile_width: u32,
    tile_height: u32,
    nx: u32,
    ny: u32,
    /// Row-major: index `ty * nx + tx`
    tiles: Vec<Tile>,
}

impl TileGrid {
    /// Build the grid covering a `width` by `height` image.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidTileSize`] if either tile dimension is
    /// zero, and [`FilterError::InvalidParameters`] if the image is empty.
    pub fn new(width: u32, height: u32, tile_width: u32, tile_height: u32) -> FilterResult<Self> {
        if tile_width == 0 || tile_height == 0 {
            return Err(FilterError::InvalidTileSize {
                width: tile_width,
                height: tile_height,
            });
        }
        if width == 0 || height == 0 {
            return Err(FilterError::InvalidParameters(format!(
                "cannot tile an empty {}x{} image",
                width, height
            )));
        }

        let nx = width.div_ceil(tile_width);
        let ny = height.div_ceil(tile_height);
        let half_w = (tile_width - 1) / 2;
        let half_h = (tile_height - 1) / 2;

        let mut tiles = Vec::with_capacity((nx as usize) * (ny as usize));
        for ty in 0..ny {
            for tx in 0..nx {
                let ox = tx * tile_width;
                let oy = ty * tile_height;
                tiles.push(Tile {
                    tx,
                    ty,
                    extent: Rect::new(ox, oy, tile_width, tile_height),
                    center: (ox.saturating_add(half_w), oy.saturating_add(half_h)),
                    zone: Zone::classify(tx, ty, nx, ny),
                });
            }
        }

        Ok(Self {
            width,
            height,
            tile_width,
            tile_height,
            nx,
            ny,
            tiles,
        })
    }

    /// Image width covered by the grid.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height covered by the grid.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Nominal tile width.
    #[inline]
    pub fn tile_width(&self) -> u32 {
        self.tile_width
    }

    /// Nominal tile height.
    #[inline]
    pub fn tile_height(&self) -> u32 {
        self.tile_height
    }

    /// Number of tile columns.
    #[inline]
    pub fn nx(&self) -> u32 {
        self.nx
    }

    /// Number of tile rows.
    #[inline]
    pub fn ny(&self) -> u32 {
        self.ny
    }

    /// All tiles, row-major.
    #[inline]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Flat index of tile `(tx, ty)`.
    #[inline]
    pub fn index(&self, tx: u32, ty: u32) -> usize {
        (ty as usize) * (self.nx as usize) + (tx as usize)
    }

    /// Get tile `(tx, ty)`.
    ///
    /// # Panics
    ///
    /// Panics if `tx >= nx` or `ty >= ny`.
    #[inline]
    pub fn tile(&self, tx: u32, ty: u32) -> &Tile {
        &self.tiles[self.index(tx, ty)]
    }

    /// Grid coordinates of the tile whose extent contains pixel `(x, y)`.
    #[inline]
    pub fn tile_index_at(&self, x: u32, y: u32) -> (u32, u32) {
        (
            (x / self.tile_width).min(self.nx - 1),
            (y / self.tile_height).min(self.ny - 1),
        )
    }

    /// x coordinate of the centers in tile column `tx`.
    #[inline]
    pub fn center_x(&self, tx: u32) -> u32 {
        self.tile(tx, 0).center.0
    }

    /// y coordinate of the centers in tile row `ty`.
    #[inline]
    pub fn center_y(&self, ty: u32) -> u32 {
        self.tile(0, ty).center.1
    }

    /// Extent of `tile` intersected with the image bounds.
    ///
    /// Never empty: every tile origin lies inside the image.
    pub fn clipped_extent(&self, tile: &Tile) -> Rect {
        let e = tile.extent;
        Rect::new(
            e.x,
            e.y,
            e.right().min(self.width) - e.x,
            e.bottom().min(self.height) - e.y,
        )
    }

    /// Check if the mesh of centers has at least one full cell.
    ///
    /// Bilinear interpolation needs two tiles along each axis.
    #[inline]
    pub fn is_interpolable(&self) -> bool {
        self.nx >= 2 && self.ny >= 2
    }
}
