//! Normalized color-histogram feature vectors

use serde::{Deserialize, Serialize};

use crate::config::FEATURE_LEN;
use crate::error::{Error, Result};

/// Concatenated per-channel histograms, min-max scaled into [0, 1]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureVector(Vec<f32>);

impl FeatureVector {
	/// Build from raw bin counts, normalizing across the whole vector
	pub fn from_counts(counts: &[u32]) -> Self {
		let Some(&min) = counts.iter().min() else {
			return Self(Vec::new());
		};
		let max = counts.iter().copied().max().unwrap_or(min);

		if max == min {
			return Self(vec![0.0; counts.len()]);
		}

		let range = (max - min) as f32;
		Self(counts.iter().map(|&c| (c - min) as f32 / range).collect())
	}

	/// Wrap already-normalized values (deserialization, tests)
	pub fn raw(data: Vec<f32>) -> Self {
		Self(data)
	}

	pub fn as_slice(&self) -> &[f32] {
		&self.0
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Whether this has the length every extracted vector carries
	pub fn is_well_formed(&self) -> bool {
		self.0.len() == FEATURE_LEN
	}

}

/// Pearson correlation of two equal-length vectors in [-1, 1]
///
/// Returns 0 when either side has zero variance, since no correlation
/// is measurable against a constant.
pub fn score(a: &FeatureVector, b: &FeatureVector) -> Result<f32> {
	if a.len() != b.len() || a.is_empty() {
		return Err(Error::DimensionMismatch {
			left: a.len(),
			right: b.len(),
		});
	}

	let n = a.len() as f64;
	let mean_a = a.0.iter().map(|&x| x as f64).sum::<f64>() / n;
	let mean_b = b.0.iter().map(|&x| x as f64).sum::<f64>() / n;

	let mut cov = 0.0f64;
	let mut var_a = 0.0f64;
	let mut var_b = 0.0f64;
	let mut sq_a = 0.0f64;
	let mut sq_b = 0.0f64;
	for (&x, &y) in a.0.iter().zip(b.0.iter()) {
		let (x, y) = (x as f64, y as f64);
		let dx = x - mean_a;
		let dy = y - mean_b;
		cov += dx * dy;
		var_a += dx * dx;
		var_b += dy * dy;
		sq_a += x * x;
		sq_b += y * y;
	}

	// Variance relative to magnitude: mean rounding leaves a residue on constants
	if var_a <= f64::EPSILON * sq_a || var_b <= f64::EPSILON * sq_b {
		return Ok(0.0);
	}

	let denom = var_a.sqrt() * var_b.sqrt();
	Ok((cov / denom).clamp(-1.0, 1.0) as f32)
}
