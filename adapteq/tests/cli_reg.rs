//! Command-line regression test
//!
//! Runs the `adapteq` binary on a synthetic image and checks its outputs
//! against the library results.
//!
//! Run with:
//! ```
//! cargo test -p adapteq --test cli_reg
//! ```

use adapteq::filter::{
    TileEqualizeOptions, equalization_trc, equalize_global, equalize_tiled,
    equalize_tiles_unblended,
};
use adapteq::io::{ImageFormat, read_image, write_image};
use adapteq_test::{RegParams, regout_dir, synth};
use std::fs;
use std::path::PathBuf;
use std::process::Command;

fn bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_adapteq"))
}

#[test]
fn cli_reg() {
    let mut rp = RegParams::new("cli");

    let dir = PathBuf::from(regout_dir()).join("cli");
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();

    let input = synth::uneven_scene(80, 60);
    let input_path = dir.join("scene.pgm");
    write_image(&input, &input_path, ImageFormat::Pnm).unwrap();

    let status = bin()
        .arg(&input_path)
        .args(["--tile-width", "16", "--tile-height", "12", "--histograms"])
        .arg("--out-dir")
        .arg(&dir)
        .status()
        .unwrap();
    rp.compare_values(1.0, status.success() as u8 as f64, 0.0);

    let options = TileEqualizeOptions::new(16, 12);
    let expected = [
        ("gray", input.clone()),
        ("global", equalize_global(&input).unwrap()),
        ("adaptive", equalize_tiled(&input, &options).unwrap()),
        ("unblended", equalize_tiles_unblended(&input, &options).unwrap()),
    ];
    for (suffix, image) in &expected {
        let written = read_image(dir.join(format!("scene_{}.png", suffix))).unwrap();
        rp.compare_images(image, &written);

        let report = fs::read_to_string(dir.join(format!("scene_{}.hist.txt", suffix))).unwrap();
        let mut buf = Vec::new();
        image
            .histogram_report(&mut buf, Some(&format!("scene {}", suffix)))
            .unwrap();
        rp.compare_values(1.0, (report.as_bytes() == buf.as_slice()) as u8 as f64, 0.0);
    }

    let trc = fs::read_to_string(dir.join("scene_trc.txt")).unwrap();
    let lut = equalization_trc(&input, None).unwrap();
    let lines: Vec<&str> = trc.lines().skip(1).collect();
    rp.compare_values(256.0, lines.len() as f64, 0.0);
    rp.compare_values(1.0, (lines[42] == format!("42 {}", lut[42])) as u8 as f64, 0.0);

    assert!(rp.cleanup());
}

#[test]
fn cli_rejects_bad_input() {
    let dir = PathBuf::from(regout_dir()).join("cli_bad");
    fs::create_dir_all(&dir).unwrap();

    let missing = bin().arg(dir.join("missing.png")).arg("--out-dir").arg(&dir).status().unwrap();
    assert!(!missing.success());

    let input_path = dir.join("ramp.png");
    write_image(&synth::ramp(8, 8), &input_path, ImageFormat::Png).unwrap();
    let zero_tile = bin()
        .arg(&input_path)
        .args(["--tile-width", "0"])
        .arg("--out-dir")
        .arg(&dir)
        .status()
        .unwrap();
    assert!(!zero_tile.success());
    assert!(!dir.join("ramp_adaptive.png").exists());
}
