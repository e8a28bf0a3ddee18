//! Histogram regression test
//!
//! Checks whole-image and per-region histograms of synthetic images and
//! records the text report.
//!
//! Run with:
//! ```
//! cargo test -p adapteq-core --test histogram_reg
//! ```

use adapteq_core::{Image, Rect, write_histogram};
use adapteq_test::{RegParams, synth};

#[test]
fn histogram_reg() {
    let mut rp = RegParams::new("histogram");

    // Test 1: a ramp spreads its pixels evenly
    let ramp = synth::ramp(256, 3);
    let hist = ramp.gray_histogram();
    rp.compare_values(768.0, hist.iter().sum::<u64>() as f64, 0.0);
    rp.compare_values(3.0, hist[0] as f64, 0.0);
    rp.compare_values(3.0, hist[128] as f64, 0.0);
    rp.compare_values(3.0, hist[255] as f64, 0.0);

    // Test 2: per-quadrant histograms of a quadrant image
    let image = synth::quadrants(10, 8, [10, 200, 50, 100]);
    for (rect, value) in [
        (Rect::new(0, 0, 5, 4), 10usize),
        (Rect::new(5, 0, 5, 4), 200),
        (Rect::new(0, 4, 5, 4), 50),
        (Rect::new(5, 4, 5, 4), 100),
    ] {
        let hist = image.gray_histogram_in_rect(&rect).unwrap();
        rp.compare_values(20.0, hist[value] as f64, 0.0);
        rp.compare_values(20.0, hist.iter().sum::<u64>() as f64, 0.0);
    }

    // Test 3: regions past the edge are clipped
    let hist = image.gray_histogram_in_rect(&Rect::new(8, 6, 64, 48)).unwrap();
    rp.compare_values(4.0, hist[100] as f64, 0.0);
    rp.compare_values(4.0, hist.iter().sum::<u64>() as f64, 0.0);

    // Test 4: region histograms of a tiling add up to the whole
    let noise = synth::noise(23, 17, 0, 255, 31);
    let mut total = [0u64; 256];
    for ty in 0..17u32.div_ceil(4) {
        for tx in 0..23u32.div_ceil(5) {
            let hist = noise
                .gray_histogram_in_rect(&Rect::new(tx * 5, ty * 4, 5, 4))
                .unwrap();
            for (t, h) in total.iter_mut().zip(hist.iter()) {
                *t += h;
            }
        }
    }
    rp.compare_values(1.0, (total == noise.gray_histogram()) as u8 as f64, 0.0);

    // Test 5: text report
    let mut report = Vec::new();
    image.histogram_report(&mut report, Some("quadrants")).unwrap();
    rp.write_data_and_check(&report, "hist.txt").unwrap();
    let text = String::from_utf8(report).unwrap();
    rp.compare_values(257.0, text.lines().count() as f64, 0.0);
    rp.compare_values(1.0, text.lines().any(|l| l == "200 20") as u8 as f64, 0.0);

    let mut plain = Vec::new();
    write_histogram(&Image::new(2, 2).unwrap().gray_histogram(), &mut plain, None).unwrap();
    rp.compare_values(1.0, plain.starts_with(b"0 4\n1 0\n") as u8 as f64, 0.0);

    assert!(rp.cleanup());
}
