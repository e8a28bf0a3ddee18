//! adapteq - Histogram equalization CLI
//!
//! Reads an image, converts it to gray, and writes next to each other:
//!
//! - `<stem>_gray.png`: the gray input
//! - `<stem>_global.png`: global histogram equalization
//! - `<stem>_adaptive.png`: tiled equalization with bilinear blending
//! - `<stem>_unblended.png`: tiled equalization without blending
//!
//! With `--histograms`, a `.hist.txt` report for each image and the global
//! equalization table as `<stem>_trc.txt`.

mod args;

use adapteq::Image;
use adapteq::filter::{
    FilterError, equalization_trc, equalize_global, equalize_tiled, equalize_tiles_unblended,
};
use adapteq::io::{ImageFormat, IoError, read_image, write_image};
use args::Args;
use clap::Parser;
use flexi_logger::{FlexiLoggerError, Logger, LoggerHandle};
use log::info;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use thiserror::Error;

#[derive(Debug, Error)]
enum AppError {
    #[error("{0}")]
    Image(#[from] IoError),

    #[error("{0}")]
    Filter(#[from] FilterError),

    #[error("{0}")]
    Core(#[from] adapteq::Error),

    #[error("{path}: {source}")]
    File {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("logger initialization failed: {0}")]
    Logger(#[from] FlexiLoggerError),
}

fn setup_logging(level: &str) -> Result<LoggerHandle, AppError> {
    Ok(Logger::try_with_env_or_str(level)?.log_to_stderr().start()?)
}

fn file_error(path: &Path) -> impl FnOnce(std::io::Error) -> AppError + '_ {
    move |source| AppError::File {
        path: path.to_path_buf(),
        source,
    }
}

fn write_report(path: &Path, image: &Image, label: &str) -> Result<(), AppError> {
    let file = File::create(path).map_err(file_error(path))?;
    let mut writer = BufWriter::new(file);
    image.histogram_report(&mut writer, Some(label))?;
    writer.flush().map_err(file_error(path))?;
    Ok(())
}

fn write_trc(path: &Path, image: &Image) -> Result<(), AppError> {
    let lut = equalization_trc(image, None)?;
    let file = File::create(path).map_err(file_error(path))?;
    let mut writer = BufWriter::new(file);
    writeln!(writer, "# input output").map_err(file_error(path))?;
    for (input, output) in lut.iter().enumerate() {
        writeln!(writer, "{} {}", input, output).map_err(file_error(path))?;
    }
    writer.flush().map_err(file_error(path))?;
    Ok(())
}

fn run(args: &Args) -> Result<(), AppError> {
    let options = args.tile_options();
    options.validate()?;

    let gray = read_image(&args.input)?;
    info!(
        "{}: {}x{}",
        args.input.display(),
        gray.width(),
        gray.height()
    );

    let global = equalize_global(&gray)?;
    let adaptive = equalize_tiled(&gray, &options)?;
    let unblended = equalize_tiles_unblended(&gray, &options)?;

    let out_dir = args.out_dir.clone().unwrap_or_else(|| PathBuf::from("."));
    fs::create_dir_all(&out_dir).map_err(file_error(&out_dir))?;
    let stem = args
        .input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_string());

    let outputs = [
        ("gray", &gray),
        ("global", &global),
        ("adaptive", &adaptive),
        ("unblended", &unblended),
    ];
    for (suffix, image) in outputs {
        let path = out_dir.join(format!("{}_{}.png", stem, suffix));
        write_image(image, &path, ImageFormat::Png)?;
        info!("wrote {}", path.display());

        if args.histograms {
            let path = out_dir.join(format!("{}_{}.hist.txt", stem, suffix));
            write_report(&path, image, &format!("{} {}", stem, suffix))?;
            info!("wrote {}", path.display());
        }
    }

    if args.histograms {
        let path = out_dir.join(format!("{}_trc.txt", stem));
        write_trc(&path, &gray)?;
        info!("wrote {}", path.display());
    }

    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    let _logger = match setup_logging(args.log_level()) {
        Ok(handle) => handle,
        Err(e) => {
            eprintln!("adapteq: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("adapteq: {}", e);
            ExitCode::FAILURE
        }
    }
}
