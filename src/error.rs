//! Error types shared by the extraction, scoring and indexing layers

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
	/// Label has no entry in the color-space policy table
	#[error("Unknown category: {0:?}")]
	UnknownCategory(String),

	/// Similarity requested between vectors of different lengths
	#[error("Dimension mismatch: {left} vs {right}")]
	DimensionMismatch { left: usize, right: usize },

	/// A corpus image could not be decoded
	#[error("Failed to index {}: {source}", path.display())]
	CorpusBuild {
		path: PathBuf,
		#[source]
		source: image::ImageError,
	},

	/// Corpus file name is not valid UTF-8 and cannot be stored losslessly
	#[error("Path is not valid UTF-8: {}", .0.display())]
	NonUtf8Path(PathBuf),

	/// Cache artifact exists but cannot be used
	#[error("Corrupt cache at {}: {reason}", path.display())]
	CacheCorrupt { path: PathBuf, reason: String },

	#[error("Failed to encode cache: {0}")]
	CacheEncode(#[from] rmp_serde::encode::Error),

	#[error("Failed to read image: {0}")]
	Image(#[from] image::ImageError),

	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),
}
