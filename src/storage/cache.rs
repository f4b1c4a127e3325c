//! Cache artifact format and I/O

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::config::CACHE_FORMAT_VERSION;
use crate::error::{Error, Result};
use crate::storage::IndexEntry;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Serialized form of a corpus index
#[derive(Debug, Serialize, Deserialize)]
pub struct CacheArtifact {
	format: u32,
	version: String,
	created: String,
	root: String,
	entries: Vec<IndexEntry>,
}

impl CacheArtifact {
	pub fn new(root: &Path, entries: Vec<IndexEntry>) -> Self {
		Self {
			format: CACHE_FORMAT_VERSION,
			version: VERSION.to_string(),
			created: chrono::Local::now().to_rfc3339(),
			root: root.to_string_lossy().into_owned(),
			entries,
		}
	}

	pub fn created(&self) -> &str {
		&self.created
	}

	pub fn root(&self) -> &str {
		&self.root
	}

	pub fn version(&self) -> &str {
		&self.version
	}

	pub fn into_entries(self) -> Vec<IndexEntry> {
		self.entries
	}
}

/// Save artifact to disk, replacing any previous one
pub fn save(artifact: &CacheArtifact, path: &Path) -> Result<()> {
	if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
		fs::create_dir_all(parent)?;
	}

	let bytes = rmp_serde::to_vec(artifact)?;

	let mut tmp = path.as_os_str().to_owned();
	tmp.push(".tmp");
	fs::write(&tmp, bytes)?;
	fs::rename(&tmp, path)?;

	Ok(())
}

/// Load artifact from disk
///
/// Undecodable bytes, a foreign format number, or malformed vectors are all
/// reported as [`Error::CacheCorrupt`].
pub fn load(path: &Path) -> Result<CacheArtifact> {
	let bytes = fs::read(path)?;

	let artifact: CacheArtifact = rmp_serde::from_slice(&bytes).map_err(|e| Error::CacheCorrupt {
		path: path.to_path_buf(),
		reason: e.to_string(),
	})?;

	if artifact.format != CACHE_FORMAT_VERSION {
		return Err(Error::CacheCorrupt {
			path: path.to_path_buf(),
			reason: format!(
				"format {} (expected {})",
				artifact.format, CACHE_FORMAT_VERSION
			),
		});
	}

	if let Some(bad) = artifact.entries.iter().find(|e| !e.vector.is_well_formed()) {
		return Err(Error::CacheCorrupt {
			path: path.to_path_buf(),
			reason: format!("{} has {} bins", bad.path, bad.vector.len()),
		});
	}

	Ok(artifact)
}
