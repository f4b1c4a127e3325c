//! Search command - rank the corpus against a query image

use anyhow::{Context, Result};
use colored::*;
use serde::Serialize;
use std::fs;
use std::path::Path;
use std::time::Instant;

use crate::core::{category_of, Category};
use crate::processing::{self, RankedResult};
use crate::ui;

#[derive(Debug, Serialize)]
struct SearchExport<'a> {
	query: String,
	category: Category,
	results: &'a [RankedResult<'a>],
}

pub fn run(
	image: &Path,
	dir: &Path,
	category: Option<Category>,
	limit: usize,
	json: Option<&Path>,
	open_first: bool,
) -> Result<()> {
	let category = match category {
		Some(c) => c,
		None => category_of(image).with_context(|| {
			format!("Cannot derive category for {}, pass --category", image.display())
		})?,
	};

	let index = super::index::open(&super::index::builder(dir, false))?;

	let start = Instant::now();
	ui::info(&format!(
		"Query: {} ({}, {})",
		ui::path_link(image, 50),
		category.to_string().yellow(),
		category.color_space().as_str()
	));

	let results = processing::query_as(image, category, &index, limit)
		.with_context(|| format!("Failed to query with {}", image.display()))?;

	if results.is_empty() {
		ui::warn("No matches found");
		return Ok(());
	}

	print_results(&results);
	ui::success(&format!(
		"Ranked {} images in {:.0}ms",
		index.len(),
		start.elapsed().as_secs_f32() * 1000.0
	));

	if let Some(path) = json {
		let export = SearchExport {
			query: image.to_string_lossy().into_owned(),
			category,
			results: &results,
		};
		let body = serde_json::to_string_pretty(&export)?;
		fs::write(path, body).with_context(|| format!("Failed to write {}", path.display()))?;
		ui::info(&format!("Exported results to {}", path.display()));
	}

	if open_first {
		if let Some(best) = results.first() {
			if let Err(e) = open::that(best.entry.path()) {
				ui::warn(&format!("Failed to open: {}", e));
			}
		}
	}

	Ok(())
}

pub fn print_results(results: &[RankedResult<'_>]) {
	ui::header("Results");

	for (i, r) in results.iter().enumerate() {
		let link = ui::path_link(r.entry.path(), 50);
		println!(
			"{}. {} {} {}",
			format!("{:2}", i + 1).bright_blue().bold(),
			link.bright_white(),
			r.entry.category.to_string().yellow(),
			format!("{:.4}", r.score).dimmed(),
		);
	}

	println!();
}
