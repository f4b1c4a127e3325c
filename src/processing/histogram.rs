//! Per-channel color histograms

use image::RgbImage;

use crate::config::{CHANNELS, HIST_BINS};
use crate::core::{Category, ColorSpace, FeatureVector};
use crate::error::Result;

/// Extract the 768-bin feature vector for an image of the given category
///
/// Channel order is B, G, R for [`ColorSpace::Bgr`] and H, S, V for
/// [`ColorSpace::Hsv`]. Bins are counted per channel, concatenated, and then
/// min-max scaled across the whole vector.
pub fn extract(image: &RgbImage, category: Category) -> FeatureVector {
	let counts = match category.color_space() {
		ColorSpace::Bgr => channel_counts(image.pixels().map(|p| [p[2], p[1], p[0]])),
		ColorSpace::Hsv => channel_counts(image.pixels().map(|p| rgb_to_hsv(p[0], p[1], p[2]))),
	};
	FeatureVector::from_counts(&counts)
}

/// Like [`extract`], with the category given as a label
pub fn extract_labeled(image: &RgbImage, label: &str) -> Result<FeatureVector> {
	let category: Category = label.parse()?;
	Ok(extract(image, category))
}

fn channel_counts(pixels: impl Iterator<Item = [u8; 3]>) -> Vec<u32> {
	let mut counts = vec![0u32; HIST_BINS * CHANNELS];
	for px in pixels {
		for (channel, &value) in px.iter().enumerate() {
			counts[channel * HIST_BINS + value as usize] += 1;
		}
	}
	counts
}

/// 8-bit HSV: hue halved into 0..180, saturation and value in 0..=255
pub fn rgb_to_hsv(r: u8, g: u8, b: u8) -> [u8; 3] {
	let (rf, gf, bf) = (r as f32, g as f32, b as f32);
	let max = rf.max(gf).max(bf);
	let min = rf.min(gf).min(bf);
	let diff = max - min;

	let s = if max > 0.0 { diff * 255.0 / max } else { 0.0 };

	let h = if diff == 0.0 {
		0.0
	} else if max == rf {
		60.0 * (gf - bf) / diff
	} else if max == gf {
		120.0 + 60.0 * (bf - rf) / diff
	} else {
		240.0 + 60.0 * (rf - gf) / diff
	};
	let h = if h < 0.0 { h + 360.0 } else { h };

	let hue = (h / 2.0).round() as u16 % 180;
	[hue as u8, s.round() as u8, max as u8]
}
