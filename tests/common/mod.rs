// Shared fixtures for integration tests

#![allow(dead_code)]

use image::{Rgb, RgbImage};
use std::fs;
use std::path::{Path, PathBuf};

pub const RED: [u8; 3] = [255, 0, 0];
pub const GREEN: [u8; 3] = [0, 255, 0];
pub const BLUE: [u8; 3] = [0, 0, 255];

pub fn solid(color: [u8; 3]) -> RgbImage {
	RgbImage::from_pixel(256, 256, Rgb(color))
}

/// Horizontal gray ramp: every channel value occurs equally often
pub fn gray_ramp() -> RgbImage {
	RgbImage::from_fn(256, 256, |x, _| Rgb([x as u8, x as u8, x as u8]))
}

/// Smooth two-axis gradient with varied hues
pub fn gradient() -> RgbImage {
	RgbImage::from_fn(256, 256, |x, y| Rgb([x as u8, y as u8, ((x + y) / 2) as u8]))
}

/// Write an image under `root/category/name`, creating directories
pub fn write_image(root: &Path, category: &str, name: &str, img: &RgbImage) -> PathBuf {
	let dir = root.join(category);
	fs::create_dir_all(&dir).unwrap();
	let path = dir.join(name);
	img.save(&path).unwrap();
	path
}
