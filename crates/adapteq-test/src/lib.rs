//! adapteq-test - Regression test framework for adapteq
//!
//! Supports three modes:
//!
//! - **Generate**: Create golden files for comparison
//! - **Compare**: Compare results with golden files
//! - **Display**: Run tests without comparison (visual inspection)
//!
//! # Usage
//!
//! ```ignore
//! use adapteq_test::RegParams;
//!
//! let mut rp = RegParams::new("tiled");
//! rp.compare_values(255.0, out.get_pixel(0, 0).unwrap() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "generate", "compare", or "display"
//!
//! Test images are synthesized by the functions in [`synth`] rather than
//! loaded from disk.

mod error;
mod params;
pub mod synth;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

use adapteq_core::Image;

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // adapteq-test is at crates/adapteq-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to the golden files directory
pub fn golden_dir() -> String {
    format!("{}/tests/golden", workspace_root())
}

/// Get the path to the regout (regression output) directory
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}

/// Write `image` into the regout directory and read it back.
///
/// Exercises the on-disk round trip of a test result.
pub fn reload_through_disk(image: &Image, name: &str) -> TestResult<Image> {
    std::fs::create_dir_all(regout_dir())?;
    let path = format!("{}/{}", regout_dir(), name);
    let format = std::path::Path::new(name)
        .extension()
        .and_then(|e| e.to_str())
        .and_then(adapteq_io::ImageFormat::from_extension)
        .unwrap_or(adapteq_io::ImageFormat::Png);
    adapteq_io::write_image(image, &path, format).map_err(|e| TestError::ImageWrite {
        path: path.clone(),
        message: e.to_string(),
    })?;
    adapteq_io::read_image(&path).map_err(|e| TestError::ImageLoad {
        path,
        message: e.to_string(),
    })
}
