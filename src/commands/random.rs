//! Random command - query with a random held-out image

use anyhow::{anyhow, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::is_image;
use crate::core::Category;
use crate::ui;

pub fn run(test_dir: &Path, dir: &Path, limit: usize, open_first: bool) -> Result<()> {
	let picked = pick(test_dir)?;
	ui::debug(&format!("Picked {}", picked.display()));
	super::search::run(&picked, dir, None, limit, None, open_first)
}

/// Pick a random category subdirectory, then a random image inside it
pub fn pick(test_dir: &Path) -> Result<PathBuf> {
	let present: Vec<PathBuf> = Category::ALL
		.iter()
		.map(|c| test_dir.join(c.as_str()))
		.filter(|p| p.is_dir())
		.collect();

	if present.is_empty() {
		return Err(anyhow!("No category folders in {}", test_dir.display()));
	}

	let folder = &present[rand::random_range(0..present.len())];

	let mut images: Vec<PathBuf> = fs::read_dir(folder)
		.with_context(|| format!("Failed to read {}", folder.display()))?
		.filter_map(|e| e.ok())
		.map(|e| e.path())
		.filter(|p| p.is_file() && is_image(p))
		.collect();
	images.sort();

	if images.is_empty() {
		return Err(anyhow!("No images in {}", folder.display()));
	}

	Ok(images.swap_remove(rand::random_range(0..images.len())))
}
