//! Application configuration and constants

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

static CUSTOM_CACHE: OnceLock<PathBuf> = OnceLock::new();

// === Feature Parameters ===
pub const IMAGE_SIZE: u32 = 256;
pub const HIST_BINS: usize = 256;
pub const CHANNELS: usize = 3;
pub const FEATURE_LEN: usize = HIST_BINS * CHANNELS;

// === Storage ===
pub const DEFAULT_CACHE_FILE: &str = "corpus_index.msgpack";
pub const CACHE_ENV_VAR: &str = "HUEFIND_CACHE";
pub const CACHE_FORMAT_VERSION: u32 = 1;

// === File Extensions ===
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg"];

// === Search Defaults ===
pub const DEFAULT_LIMIT: usize = 10;

pub fn set_cache_path(path: PathBuf) {
	let _ = CUSTOM_CACHE.set(path);
}

/// Resolve cache artifact location (custom path, HUEFIND_CACHE, or working dir)
pub fn cache_path() -> PathBuf {
	if let Some(custom) = CUSTOM_CACHE.get() {
		crate::ui::debug(&format!("Using custom cache: {}", custom.display()));
		return custom.clone();
	}

	if let Ok(env_path) = std::env::var(CACHE_ENV_VAR) {
		if !env_path.trim().is_empty() {
			crate::ui::debug(&format!("Using {}: {}", CACHE_ENV_VAR, env_path));
			return PathBuf::from(env_path);
		}
	}

	PathBuf::from(DEFAULT_CACHE_FILE)
}

/// Whether a path has one of the indexed image extensions
pub fn is_image(path: &Path) -> bool {
	path.extension()
		.and_then(|e| e.to_str())
		.is_some_and(|ext| IMAGE_EXTENSIONS.iter().any(|e| e.eq_ignore_ascii_case(ext)))
}
