//! Rect - Rectangle regions
//!
//! Axis-aligned rectangles in image coordinates, used to describe tile
//! extents. A rectangle may extend past the image; [`Rect::clip_to`]
//! intersects it with the image bounds.

/// A rectangle region
///
/// A small `Copy` type with its origin at the top-left corner. The right
/// and bottom edges are exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    /// Left x coordinate
    pub x: u32,
    /// Top y coordinate
    pub y: u32,
    /// Width
    pub w: u32,
    /// Height
    pub h: u32,
}

impl Rect {
    /// Create a new rectangle.
    pub const fn new(x: u32, y: u32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }

    /// Get the right x coordinate (exclusive), saturating at `u32::MAX`
    #[inline]
    pub fn right(&self) -> u32 {
        self.x.saturating_add(self.w)
    }

    /// Get the bottom y coordinate (exclusive), saturating at `u32::MAX`
    #[inline]
    pub fn bottom(&self) -> u32 {
        self.y.saturating_add(self.h)
    }

    /// Get the area
    #[inline]
    pub fn area(&self) -> u64 {
        u64::from(self.w) * u64::from(self.h)
    }

    /// Check if the rectangle is empty (zero area)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.w == 0 || self.h == 0
    }

    /// Check if a point is inside the rectangle
    #[inline]
    pub fn contains_point(&self, x: u32, y: u32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Intersect with the image bounds `[0, width) x [0, height)`.
    ///
    /// Returns `None` if nothing of the rectangle lies inside the image.
    ///
    /// ```
    /// use adapteq_core::Rect;
    ///
    /// let r = Rect::new(4, 2, 4, 4).clip_to(6, 5).unwrap();
    /// assert_eq!(r, Rect::new(4, 2, 2, 3));
    /// assert!(Rect::new(6, 0, 2, 2).clip_to(6, 5).is_none());
    /// ```
    pub fn clip_to(&self, width: u32, height: u32) -> Option<Rect> {
        if self.x >= width || self.y >= height || self.is_empty() {
            return None;
        }
        let right = self.right().min(width);
        let bottom = self.bottom().min(height);
        Some(Rect::new(self.x, self.y, right - self.x, bottom - self.y))
    }
}
