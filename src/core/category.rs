//! Scene categories and their color-space policy

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Scene label, taken from the directory an image lives in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
	Buildings,
	Mountain,
	Street,
	Forest,
	Glacier,
	Sea,
}

/// Source color space the histograms are computed in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSpace {
	/// Blue, green, red channels as stored
	Bgr,
	/// 8-bit hue (0-179), saturation, value
	Hsv,
}

impl ColorSpace {
	pub fn as_str(&self) -> &'static str {
		match self {
			ColorSpace::Bgr => "bgr",
			ColorSpace::Hsv => "hsv",
		}
	}
}

impl Category {
	pub const ALL: [Category; 6] = [
		Category::Buildings,
		Category::Forest,
		Category::Glacier,
		Category::Mountain,
		Category::Sea,
		Category::Street,
	];

	pub fn as_str(&self) -> &'static str {
		match self {
			Category::Buildings => "buildings",
			Category::Mountain => "mountain",
			Category::Street => "street",
			Category::Forest => "forest",
			Category::Glacier => "glacier",
			Category::Sea => "sea",
		}
	}

	/// Color-space policy for this category
	pub fn color_space(&self) -> ColorSpace {
		match self {
			Category::Buildings | Category::Mountain | Category::Street => ColorSpace::Bgr,
			Category::Forest | Category::Glacier | Category::Sea => ColorSpace::Hsv,
		}
	}
}

impl FromStr for Category {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self> {
		Category::ALL
			.into_iter()
			.find(|c| c.as_str().eq_ignore_ascii_case(s))
			.ok_or_else(|| Error::UnknownCategory(s.to_string()))
	}
}

impl fmt::Display for Category {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Derive category from the name of the file's containing directory
pub fn category_of(path: &Path) -> Result<Category> {
	let dir = path
		.parent()
		.and_then(|p| p.file_name())
		.map(|n| n.to_string_lossy().into_owned())
		.unwrap_or_default();
	dir.parse()
}
