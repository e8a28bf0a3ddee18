//! Regression test parameters and operations

use crate::error::{TestError, TestResult};
use crate::{golden_dir, regout_dir};
use adapteq_core::Image;
use adapteq_io::ImageFormat;
use std::fs;
use std::path::Path;

/// Regression test mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegTestMode {
    /// Generate golden files
    Generate,
    /// Compare with golden files (default)
    #[default]
    Compare,
    /// Display mode - run without comparison
    Display,
}

impl RegTestMode {
    /// Parse mode from the `REGTEST_MODE` environment variable
    pub fn from_env() -> Self {
        Self::parse(&std::env::var("REGTEST_MODE").unwrap_or_default())
    }

    /// Parse mode from a string; anything unrecognized is `Compare`
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "generate" => Self::Generate,
            "display" => Self::Display,
            _ => Self::Compare,
        }
    }
}

/// Regression test parameters
///
/// Tracks the state of a regression test: the test name, current index,
/// mode, and recorded failures.
pub struct RegParams {
    /// Name of the test (e.g., "tiled")
    pub test_name: String,
    /// Current test index (incremented before each check)
    index: usize,
    /// Test mode (generate, compare, or display)
    pub mode: RegTestMode,
    /// Overall success status
    success: bool,
    /// Recorded failures
    failures: Vec<String>,
}

impl RegParams {
    /// Create new regression test parameters.
    ///
    /// The mode comes from `REGTEST_MODE`.
    pub fn new(test_name: &str) -> Self {
        let mode = RegTestMode::from_env();

        let _ = fs::create_dir_all(golden_dir());
        let _ = fs::create_dir_all(regout_dir());

        eprintln!();
        eprintln!("////////////////////////////////////////////////");
        eprintln!("////////////////   {}_reg   ///////////////", test_name);
        eprintln!("////////////////////////////////////////////////");
        eprintln!("Mode: {:?}", mode);

        Self {
            test_name: test_name.to_string(),
            index: 0,
            mode,
            success: true,
            failures: Vec::new(),
        }
    }

    /// Get the current test index
    pub fn index(&self) -> usize {
        self.index
    }

    /// Check if in display mode
    pub fn display(&self) -> bool {
        self.mode == RegTestMode::Display
    }

    fn fail(&mut self, msg: String) {
        eprintln!("{}", msg);
        self.failures.push(msg);
        self.success = false;
    }

    /// Compare two floating-point values.
    ///
    /// Returns `true` if they differ by at most `delta`.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        let diff = (expected - actual).abs();

        if diff > delta {
            self.fail(format!(
                "Failure in {}_reg: value comparison for index {}\n\
                 difference = {} but allowed delta = {}\n\
                 expected = {}, actual = {}",
                self.test_name, self.index, diff, delta, expected, actual
            ));
            false
        } else {
            true
        }
    }

    /// Compare two images for exact equality.
    pub fn compare_images(&mut self, image1: &Image, image2: &Image) -> bool {
        self.index += 1;

        if !image1.sizes_equal(image2) {
            self.fail(format!(
                "Failure in {}_reg: image comparison for index {} - size mismatch {:?} vs {:?}",
                self.test_name,
                self.index,
                image1.dimensions(),
                image2.dimensions()
            ));
            return false;
        }

        let width = image1.width() as usize;
        if let Some(pos) = image1
            .data()
            .iter()
            .zip(image2.data())
            .position(|(a, b)| a != b)
        {
            self.fail(format!(
                "Failure in {}_reg: image comparison for index {} - pixel mismatch at ({}, {})",
                self.test_name,
                self.index,
                pos % width,
                pos / width
            ));
            return false;
        }

        true
    }

    /// Write an image to the regout directory and check it against the
    /// golden file.
    pub fn write_image_and_check(&mut self, image: &Image, format: ImageFormat) -> TestResult<()> {
        self.index += 1;

        let local_path = format!(
            "{}/{}.{:02}.{}",
            regout_dir(),
            self.test_name,
            self.index,
            format.extension()
        );

        adapteq_io::write_image(image, &local_path, format).map_err(|e| TestError::ImageWrite {
            path: local_path.clone(),
            message: e.to_string(),
        })?;

        self.check_file(&local_path)
    }

    /// Write data to the regout directory and check it against the
    /// golden file.
    pub fn write_data_and_check(&mut self, data: &[u8], ext: &str) -> TestResult<()> {
        self.index += 1;

        let local_path = format!(
            "{}/{}.{:02}.{}",
            regout_dir(),
            self.test_name,
            self.index,
            ext
        );

        fs::write(&local_path, data)?;
        self.check_file(&local_path)
    }

    /// Check a file against its golden counterpart.
    ///
    /// Generate mode copies the file to golden. Compare mode compares
    /// with the golden file when there is one; a missing golden file is
    /// reported but not counted as a failure. Display mode does nothing.
    fn check_file(&mut self, local_path: &str) -> TestResult<()> {
        let ext = Path::new(local_path)
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("");

        let golden_path = format!(
            "{}/{}_golden.{:02}.{}",
            golden_dir(),
            self.test_name,
            self.index,
            ext
        );

        match self.mode {
            RegTestMode::Generate => {
                fs::copy(local_path, &golden_path)?;
                eprintln!("Generated: {}", golden_path);
            }
            RegTestMode::Compare => {
                if !Path::new(&golden_path).exists() {
                    eprintln!(
                        "{}_reg, index {}: no golden file {} (run with REGTEST_MODE=generate)",
                        self.test_name, self.index, golden_path
                    );
                    return Ok(());
                }

                let local_data = fs::read(local_path)?;
                let golden_data = fs::read(&golden_path)?;

                if local_data != golden_data && !same_image_files(local_path, &golden_path) {
                    self.fail(format!(
                        "Failure in {}_reg, index {}: comparing {} with {}",
                        self.test_name, self.index, local_path, golden_path
                    ));
                }
            }
            RegTestMode::Display => {}
        }

        Ok(())
    }

    /// Clean up and report results.
    ///
    /// Returns `true` if all checks passed.
    pub fn cleanup(self) -> bool {
        if self.success {
            eprintln!("SUCCESS: {}_reg", self.test_name);
        } else {
            eprintln!("FAILURE: {}_reg", self.test_name);
            for failure in &self.failures {
                eprintln!("  {}", failure);
            }
        }
        eprintln!();

        self.success
    }

    /// Check if all tests have passed so far
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Get list of failures
    pub fn failures(&self) -> &[String] {
        &self.failures
    }
}

/// Compare two image files pixel by pixel
fn same_image_files(path1: &str, path2: &str) -> bool {
    match (adapteq_io::read_image(path1), adapteq_io::read_image(path2)) {
        (Ok(a), Ok(b)) => a.sizes_equal(&b) && a.data() == b.data(),
        _ => false,
    }
}
