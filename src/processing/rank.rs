//! Ranking a corpus against a query vector

use serde::Serialize;
use std::cmp::Ordering;

use crate::core::{score, FeatureVector};
use crate::error::Result;
use crate::storage::{CorpusIndex, IndexEntry};

/// One scored corpus entry
#[derive(Debug, Clone, Serialize)]
pub struct RankedResult<'a> {
	pub score: f32,
	pub entry: &'a IndexEntry,
}

/// Score every entry and return the best `k`, highest first
///
/// Ties keep index order. An empty index yields an empty result.
pub fn rank<'a>(query: &FeatureVector, index: &'a CorpusIndex, k: usize) -> Result<Vec<RankedResult<'a>>> {
	let mut results = index
		.entries()
		.iter()
		.map(|entry| -> Result<RankedResult<'a>> {
			Ok(RankedResult {
				score: score(query, &entry.vector)?,
				entry,
			})
		})
		.collect::<Result<Vec<_>>>()?;

	// sort_by is stable
	results.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
	results.truncate(k);

	Ok(results)
}
