//! Image loading and size normalization

use image::imageops::FilterType;
use image::{DynamicImage, RgbImage};
use std::path::Path;

use crate::config::IMAGE_SIZE;
use crate::error::Result;

/// Decode an image file and resize it to the working resolution
pub fn load(path: &Path) -> Result<RgbImage> {
	crate::ui::debug(&format!("Decoding image: {}", path.display()));
	let img = image::open(path)?;
	Ok(normalize(&img))
}

/// Resize to IMAGE_SIZE x IMAGE_SIZE (aspect ratio is not kept) as 8-bit RGB
pub fn normalize(img: &DynamicImage) -> RgbImage {
	if img.width() == IMAGE_SIZE && img.height() == IMAGE_SIZE {
		return img.to_rgb8();
	}
	img.resize_exact(IMAGE_SIZE, IMAGE_SIZE, FilterType::Triangle)
		.to_rgb8()
}
