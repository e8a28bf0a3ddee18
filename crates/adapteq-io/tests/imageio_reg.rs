//! Image I/O regression test
//!
//! Lossless write/read through files for every writable format, and
//! format detection on the files produced.
//!
//! Run with:
//! ```
//! cargo test -p adapteq-io --test imageio_reg
//! ```

use adapteq_core::Image;
use adapteq_io::{ImageFormat, detect_format, read_image, write_image};
use adapteq_test::{RegParams, regout_dir, reload_through_disk, synth};
use std::fs;

fn roundtrip(rp: &mut RegParams, image: &Image, name: &str, format: ImageFormat) {
    let path = format!("{}/{}.{}", regout_dir(), name, format.extension());
    write_image(image, &path, format).unwrap();
    rp.compare_values(
        1.0,
        (detect_format(&path).unwrap() == format) as u8 as f64,
        0.0,
    );
    let back = read_image(&path).unwrap();
    rp.compare_images(image, &back);
}

#[test]
fn imageio_reg() {
    let mut rp = RegParams::new("imageio");
    fs::create_dir_all(regout_dir()).unwrap();

    let images = [
        ("ramp", synth::ramp(97, 13)),
        ("noise", synth::noise(31, 45, 0, 255, 4)),
        ("scene", synth::uneven_scene(64, 48)),
        ("pixel", Image::from_rows(&[[77u8]]).unwrap()),
    ];

    for (name, image) in &images {
        eprintln!("Test {}", name);
        roundtrip(&mut rp, image, &format!("imageio_{}", name), ImageFormat::Png);
        roundtrip(&mut rp, image, &format!("imageio_{}", name), ImageFormat::Pnm);
    }

    // Golden copy of one encoded file
    rp.write_image_and_check(&images[2].1, ImageFormat::Pnm).unwrap();

    assert!(rp.cleanup());
}

#[test]
fn imageio_reload_helper() {
    let image = synth::quadrants(6, 6, [0, 60, 120, 240]);
    let back = reload_through_disk(&image, "imageio_reload.png").unwrap();
    assert_eq!(back.data(), image.data());
    let back = reload_through_disk(&image, "imageio_reload.pgm").unwrap();
    assert_eq!(back.data(), image.data());
}

#[test]
fn imageio_errors() {
    let dir = regout_dir();
    fs::create_dir_all(&dir).unwrap();

    assert!(read_image(format!("{}/does_not_exist.png", dir)).is_err());

    let path = format!("{}/imageio_bogus.bin", dir);
    fs::write(&path, b"definitely not an image").unwrap();
    assert!(read_image(&path).is_err());

    let image = synth::ramp(4, 4);
    let path = format!("{}/imageio_out.jpg", dir);
    assert!(write_image(&image, &path, ImageFormat::Jpeg).is_err());
}
