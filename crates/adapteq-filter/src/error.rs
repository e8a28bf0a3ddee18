//! Error types for adapteq-filter
//!
//! Only input validation surfaces as an error. Degenerate tiles and
//! under-determined grids are resolved inside the pipeline.

use thiserror::Error;

/// Errors that can occur during equalization
#[derive(Debug, Error)]
pub enum FilterError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] adapteq_core::Error),

    /// Tile width or height is zero
    #[error("invalid tile size: {width}x{height}")]
    InvalidTileSize {
        /// Requested tile width
        width: u32,
        /// Requested tile height
        height: u32,
    },

    /// Invalid parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
}

/// Result type for filter operations
pub type FilterResult<T> = Result<T, FilterError>;
