//! Index command - build or load the corpus index

use anyhow::{Context, Result};
use std::path::Path;

use crate::config;
use crate::storage::{CorpusIndex, FailurePolicy, IndexBuilder};
use crate::ui;

pub fn run(dir: &Path, force: bool, strict: bool) -> Result<()> {
	let builder = builder(dir, strict);

	if force && builder.invalidate()? {
		ui::info(&format!("Discarded cache {}", builder.cache_path().display()));
	}

	let index = open(&builder)?;
	ui::success(&format!(
		"Index ready: {} images ({})",
		index.len(),
		builder.cache_path().display()
	));

	Ok(())
}

pub fn builder(dir: &Path, strict: bool) -> IndexBuilder {
	let policy = if strict { FailurePolicy::Abort } else { FailurePolicy::Skip };
	IndexBuilder::new(dir, config::cache_path()).policy(policy)
}

/// Load or build the index, reporting progress
pub fn open(builder: &IndexBuilder) -> Result<CorpusIndex> {
	ui::info(&format!("Corpus: {}", builder.root().display()));

	let (index, report) = builder
		.build_with_report()
		.with_context(|| format!("Failed to build index for {}", builder.root().display()))?;

	if report.from_cache {
		ui::debug(&format!(
			"Cache hit: {} entries in {:.0}ms",
			report.indexed,
			report.duration_secs * 1000.0
		));
	} else {
		ui::summary(report.indexed, report.skipped.len(), report.duration_secs);
	}

	if index.is_empty() {
		ui::warn("Index is empty. Check the corpus directory layout.");
	}

	Ok(index)
}
