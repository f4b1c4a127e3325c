//! Corpus index: building, caching and invalidation

use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Instant;
use walkdir::WalkDir;

use super::cache::{self, CacheArtifact};
use crate::config::is_image;
use crate::core::{category_of, Category, FeatureVector};
use crate::error::{Error, Result};
use crate::processing;
use crate::ui;

/// One indexed reference image
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexEntry {
	pub path: String,
	pub category: Category,
	pub vector: FeatureVector,
}

impl IndexEntry {
	pub fn path(&self) -> &Path {
		Path::new(&self.path)
	}
}

/// Feature vectors of every reference image, in discovery order
///
/// Immutable once built; share it behind an `Arc` for concurrent readers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CorpusIndex {
	entries: Vec<IndexEntry>,
}

impl CorpusIndex {
	pub fn from_entries(entries: Vec<IndexEntry>) -> Self {
		Self { entries }
	}

	pub fn entries(&self) -> &[IndexEntry] {
		&self.entries
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Write this index as a cache artifact
	pub fn save(&self, root: &Path, cache_path: &Path) -> Result<()> {
		let artifact = CacheArtifact::new(root, self.entries.clone());
		cache::save(&artifact, cache_path)
	}

	/// Read an index back from a cache artifact
	pub fn load(cache_path: &Path) -> Result<Self> {
		let artifact = cache::load(cache_path)?;
		ui::debug(&format!(
			"Cache for {} written {} by v{}",
			artifact.root(),
			artifact.created(),
			artifact.version()
		));
		Ok(Self::from_entries(artifact.into_entries()))
	}
}

/// What to do with a corpus file that cannot be indexed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
	/// Log the file and keep going
	#[default]
	Skip,
	/// Fail the whole build
	Abort,
}

/// Outcome of a build
#[derive(Debug, Default)]
pub struct BuildReport {
	pub from_cache: bool,
	pub indexed: usize,
	pub skipped: Vec<PathBuf>,
	pub duration_secs: f32,
}

/// Builds a [`CorpusIndex`] for a corpus directory with a read-through cache
#[derive(Debug, Clone)]
pub struct IndexBuilder {
	root: PathBuf,
	cache: PathBuf,
	policy: FailurePolicy,
}

impl IndexBuilder {
	pub fn new(root: impl Into<PathBuf>, cache: impl Into<PathBuf>) -> Self {
		Self {
			root: root.into(),
			cache: cache.into(),
			policy: FailurePolicy::default(),
		}
	}

	pub fn policy(mut self, policy: FailurePolicy) -> Self {
		self.policy = policy;
		self
	}

	pub fn root(&self) -> &Path {
		&self.root
	}

	pub fn cache_path(&self) -> &Path {
		&self.cache
	}

	/// Load the cached index, or compute and persist it on a miss
	///
	/// The cache is not checked against the corpus; call [`Self::rebuild`]
	/// or [`Self::invalidate`] after the corpus changes.
	pub fn build(&self) -> Result<CorpusIndex> {
		self.build_with_report().map(|(index, _)| index)
	}

	pub fn build_with_report(&self) -> Result<(CorpusIndex, BuildReport)> {
		let start = Instant::now();

		match CorpusIndex::load(&self.cache) {
			Ok(index) => {
				ui::debug(&format!("Loaded {} entries from {}", index.len(), self.cache.display()));
				let report = BuildReport {
					from_cache: true,
					indexed: index.len(),
					skipped: Vec::new(),
					duration_secs: start.elapsed().as_secs_f32(),
				};
				return Ok((index, report));
			}
			Err(Error::Io(e)) if e.kind() == ErrorKind::NotFound => {
				ui::debug(&format!("No cache at {}", self.cache.display()));
			}
			Err(e @ Error::CacheCorrupt { .. }) => {
				ui::warn(&format!("{}, rebuilding", e));
			}
			Err(e) => return Err(e),
		}

		self.rebuild_with_report()
	}

	/// Recompute the index from the corpus and overwrite the cache
	pub fn rebuild(&self) -> Result<CorpusIndex> {
		self.rebuild_with_report().map(|(index, _)| index)
	}

	pub fn rebuild_with_report(&self) -> Result<(CorpusIndex, BuildReport)> {
		let start = Instant::now();
		let (index, skipped) = self.compute()?;

		index.save(&self.root, &self.cache)?;
		ui::debug(&format!("Wrote cache: {}", self.cache.display()));

		let report = BuildReport {
			from_cache: false,
			indexed: index.len(),
			skipped,
			duration_secs: start.elapsed().as_secs_f32(),
		};
		Ok((index, report))
	}

	/// Delete the cache artifact; returns whether one existed
	pub fn invalidate(&self) -> Result<bool> {
		match fs::remove_file(&self.cache) {
			Ok(()) => Ok(true),
			Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
			Err(e) => Err(e.into()),
		}
	}

	fn compute(&self) -> Result<(CorpusIndex, Vec<PathBuf>)> {
		let mut entries = Vec::new();
		let (paths, mut skipped) = self.discover()?;

		for path in paths {
			match self.index_file(&path) {
				Ok(entry) => {
					ui::debug(&format!("Indexed {} ({})", path.display(), entry.category));
					entries.push(entry);
				}
				Err(e) if self.policy == FailurePolicy::Skip => {
					ui::warn(&format!("Skipping {}: {}", path.display(), e));
					skipped.push(path);
				}
				Err(e) => return Err(e),
			}
		}

		Ok((CorpusIndex::from_entries(entries), skipped))
	}

	fn index_file(&self, path: &Path) -> Result<IndexEntry> {
		let name = path
			.to_str()
			.ok_or_else(|| Error::NonUtf8Path(path.to_path_buf()))?;
		let category = self.category_for(path)?;
		let image = processing::image::load(path).map_err(|e| match e {
			Error::Image(source) => Error::CorpusBuild {
				path: path.to_path_buf(),
				source,
			},
			other => other,
		})?;

		Ok(IndexEntry {
			path: name.to_string(),
			category,
			vector: processing::extract(&image, category),
		})
	}

	/// Category of the containing directory, else of the top-level
	/// subdirectory under the corpus root
	fn category_for(&self, path: &Path) -> Result<Category> {
		category_of(path).or_else(|err| {
			path.strip_prefix(&self.root)
				.ok()
				.and_then(|rel| rel.components().next())
				.and_then(|c| c.as_os_str().to_str())
				.and_then(|name| name.parse().ok())
				.ok_or(err)
		})
	}

	/// Every image file under the root sorted by path, plus the entries
	/// that could not be read (symlinks are followed)
	fn discover(&self) -> Result<(Vec<PathBuf>, Vec<PathBuf>)> {
		if !self.root.is_dir() {
			return Err(std::io::Error::new(
				ErrorKind::NotFound,
				format!("corpus directory not found: {}", self.root.display()),
			)
			.into());
		}

		let mut paths = Vec::new();
		let mut unreadable = Vec::new();

		for entry in WalkDir::new(&self.root).follow_links(true).sort_by_file_name() {
			let entry = match entry {
				Ok(entry) => entry,
				Err(e) if self.policy == FailurePolicy::Skip => {
					ui::warn(&format!("Unreadable entry: {}", e));
					if let Some(path) = e.path() {
						unreadable.push(path.to_path_buf());
					}
					continue;
				}
				Err(e) => return Err(std::io::Error::other(e).into()),
			};

			if entry.file_type().is_file() && is_image(entry.path()) {
				paths.push(entry.into_path());
			}
		}

		Ok((paths, unreadable))
	}
}
