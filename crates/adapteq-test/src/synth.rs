//! Synthetic test images
//!
//! Deterministic generators so regression tests need no binary fixtures.

use adapteq_core::{Image, ImageMut};

/// Horizontal ramp from 0 at the left edge to 255 at the right edge.
pub fn ramp(width: u32, height: u32) -> Image {
    let mut image = ImageMut::new(width, height).expect("non-zero test image size");
    let span = width.saturating_sub(1).max(1);
    for y in 0..height {
        for (x, v) in image.row_mut(y).iter_mut().enumerate() {
            *v = (x as u32 * 255 / span) as u8;
        }
    }
    image.into()
}

/// Image split into four constant quadrants.
///
/// `values` are top-left, top-right, bottom-left, bottom-right.
pub fn quadrants(width: u32, height: u32, values: [u8; 4]) -> Image {
    let mut image = ImageMut::new(width, height).expect("non-zero test image size");
    let (hw, hh) = (width / 2, height / 2);
    for y in 0..height {
        for (x, v) in image.row_mut(y).iter_mut().enumerate() {
            let right = x as u32 >= hw;
            let bottom = y >= hh;
            *v = values[(bottom as usize) * 2 + right as usize];
        }
    }
    image.into()
}

/// Pseudo-random pixels in `lo..=hi` from a linear congruential generator.
pub fn noise(width: u32, height: u32, lo: u8, hi: u8, seed: u32) -> Image {
    let mut image = ImageMut::new(width, height).expect("non-zero test image size");
    let span = (hi - lo) as u32 + 1;
    let mut state = seed;
    for v in image.data_mut() {
        state = state.wrapping_mul(1_103_515_245).wrapping_add(12_345);
        *v = lo + ((state >> 16) % span) as u8;
    }
    image.into()
}

/// Unevenly lit scene: a dim left half and a bright right half, each with
/// faint low-contrast structure.
///
/// Global equalization spends most of the output range on the step between
/// the halves; adaptive equalization brings out the structure on each side.
pub fn uneven_scene(width: u32, height: u32) -> Image {
    let mut image = ImageMut::new(width, height).expect("non-zero test image size");
    for y in 0..height {
        for (x, v) in image.row_mut(y).iter_mut().enumerate() {
            let x = x as u32;
            let base = if x < width / 2 { 30 } else { 200 };
            let stripe = ((x / 4 + y / 4) % 3) as u8 * 6;
            *v = base + stripe;
        }
    }
    image.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ramp() {
        let image = ramp(6, 2);
        assert_eq!(image.row(1), &[0, 51, 102, 153, 204, 255]);
        assert_eq!(ramp(1, 1).data(), &[0]);
    }

    #[test]
    fn test_quadrants() {
        let image = quadrants(4, 4, [10, 200, 50, 100]);
        assert_eq!(image.row(0), &[10, 10, 200, 200]);
        assert_eq!(image.row(3), &[50, 50, 100, 100]);
    }

    #[test]
    fn test_noise_range_and_determinism() {
        let a = noise(16, 16, 40, 60, 7);
        assert!(a.data().iter().all(|&v| (40..=60).contains(&v)));
        assert_eq!(a.data(), noise(16, 16, 40, 60, 7).data());
    }

    #[test]
    fn test_uneven_scene() {
        let image = uneven_scene(16, 8);
        assert!(image.row(0)[..8].iter().all(|&v| (30..=42).contains(&v)));
        assert!(image.row(0)[8..].iter().all(|&v| (200..=212).contains(&v)));
    }
}
