//! Command-line argument definitions

use adapteq::filter::TileEqualizeOptions;
use adapteq::filter::equalize::{DEFAULT_TILE_HEIGHT, DEFAULT_TILE_WIDTH};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "adapteq")]
#[command(version, about = "Global and adaptive histogram equalization of grayscale images", long_about = None)]
pub struct Args {
    /// Input image (PNG, PGM/PPM or JPEG); color is converted to gray
    pub input: PathBuf,

    /// Tile width in pixels
    #[arg(long, default_value_t = DEFAULT_TILE_WIDTH)]
    pub tile_width: u32,

    /// Tile height in pixels
    #[arg(long, default_value_t = DEFAULT_TILE_HEIGHT)]
    pub tile_height: u32,

    /// Directory for the output files [default: the current directory]
    #[arg(short, long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// Also write a histogram report per output and the global equalization table
    #[arg(long)]
    pub histograms: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Tile options from the command line
    pub fn tile_options(&self) -> TileEqualizeOptions {
        TileEqualizeOptions::new(self.tile_width, self.tile_height)
    }

    /// Log level spec for the verbosity count
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
