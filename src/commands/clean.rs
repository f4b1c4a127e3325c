//! Clean command - invalidate the cached index

use anyhow::{Context, Result};

use crate::config;
use crate::storage::IndexBuilder;
use crate::ui;

pub fn run() -> Result<()> {
	let cache = config::cache_path();
	let builder = IndexBuilder::new(".", &cache);

	let removed = builder
		.invalidate()
		.with_context(|| format!("Failed to remove {}", cache.display()))?;

	if removed {
		ui::success(&format!("Removed {}", cache.display()));
	} else {
		ui::info(&format!("No cache at {}", cache.display()));
	}

	Ok(())
}
