//! Tone reproduction curves
//!
//! A TRC is a 256-entry lookup table that remaps input intensities to
//! output intensities. This module builds the histogram equalization TRC
//! of a region and applies a TRC to an image.

use crate::FilterResult;
use adapteq_core::{GrayHistogram, Image, ImageMut, Rect};

/// A 256-entry lookup table for tone reproduction curve mapping.
///
/// Maps input pixel values [0..255] to output pixel values [0..255].
pub type TrcLut = [u8; 256];

/// The identity TRC.
pub fn identity_trc() -> TrcLut {
    let mut lut = [0u8; 256];
    for (i, entry) in lut.iter_mut().enumerate() {
        *entry = i as u8;
    }
    lut
}

/// Generate the histogram equalization TRC of an image region.
///
/// With `region == None` the whole image is used. A region that runs past
/// the image is clipped to the image bounds first.
///
/// # Errors
///
/// Returns an error if the region does not overlap the image.
pub fn equalization_trc(image: &Image, region: Option<&Rect>) -> FilterResult<TrcLut> {
    let hist = match region {
        Some(r) => image.gray_histogram_in_rect(r)?,
        None => image.gray_histogram(),
    };
    Ok(equalization_trc_from_histogram(&hist))
}

/// Generate the histogram equalization TRC from a 256-bin histogram.
///
/// The cumulative distribution `u` is min-max normalized to `[0, 1]`,
/// shifted so that level 0 maps to 0, and scaled to `[0, 255]` with
/// round-half-to-even.
///
/// When every counted pixel has value 0 the distribution is constant and
/// the normalization would divide by zero. In that case every level maps
/// to that single intensity. An empty histogram yields the identity.
///
/// The result depends only on the counts, not on where the pixels were,
/// and is always nondecreasing.
pub fn equalization_trc_from_histogram(hist: &GrayHistogram) -> TrcLut {
    let total: u64 = hist.iter().sum();
    if total == 0 {
        return identity_trc();
    }

    let mut cdf = [0.0f64; 256];
    let mut cumul = 0u64;
    for (entry, &count) in cdf.iter_mut().zip(hist.iter()) {
        cumul += count;
        *entry = cumul as f64 / total as f64;
    }

    // The cdf is nondecreasing, so its extremes sit at the two ends.
    let umin = cdf[0];
    let umax = cdf[255];
    let range = umax - umin;
    if range <= 0.0 {
        return [lowest_level(hist); 256];
    }

    let v0 = (cdf[0] - umin) / range;
    let denom = 1.0 - v0;
    if denom <= 0.0 {
        return [lowest_level(hist); 256];
    }

    let mut lut = [0u8; 256];
    for (entry, &u) in lut.iter_mut().zip(cdf.iter()) {
        let vk = (u - umin) / range;
        let d = (vk - v0) / denom;
        *entry = (d * 255.0).round_ties_even().clamp(0.0, 255.0) as u8;
    }
    lut
}

/// Smallest intensity with a non-zero count.
fn lowest_level(hist: &GrayHistogram) -> u8 {
    hist.iter().position(|&c| c > 0).unwrap_or(0) as u8
}

/// Apply a TRC lookup table to an image in-place.
pub fn trc_map(image: &mut ImageMut, lut: &TrcLut) {
    for val in image.data_mut() {
        *val = lut[*val as usize];
    }
}
