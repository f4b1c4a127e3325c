//! Query-by-example against a built corpus index

use std::path::Path;

use super::histogram::extract;
use super::rank::{rank, RankedResult};
use crate::core::{category_of, Category};
use crate::error::Result;
use crate::storage::CorpusIndex;

/// Rank the corpus against an image, deriving its category from its directory
pub fn query<'a>(path: &Path, index: &'a CorpusIndex, k: usize) -> Result<Vec<RankedResult<'a>>> {
	let category = category_of(path)?;
	query_as(path, category, index, k)
}

/// Rank the corpus against an image with an explicit category
pub fn query_as<'a>(
	path: &Path,
	category: Category,
	index: &'a CorpusIndex,
	k: usize,
) -> Result<Vec<RankedResult<'a>>> {
	let image = super::image::load(path)?;
	let vector = extract(&image, category);
	crate::ui::debug(&format!(
		"Query {} as {} ({})",
		path.display(),
		category,
		category.color_space().as_str()
	));
	rank(&vector, index, k)
}
