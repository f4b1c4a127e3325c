//! Unified logging system

use colored::*;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};

static VERBOSE: AtomicBool = AtomicBool::new(false);

pub struct Log;

impl Log {
	pub fn set_verbose(enabled: bool) {
		VERBOSE.store(enabled, Ordering::Relaxed);
	}

	pub fn is_verbose() -> bool {
		VERBOSE.load(Ordering::Relaxed)
	}
}

pub fn info(msg: &str) {
	println!("{} {}", "ℹ".bright_blue().bold(), msg.bright_white());
}

pub fn success(msg: &str) {
	println!("{} {}", "✓".bright_green().bold(), msg.bright_white());
}

pub fn warn(msg: &str) {
	println!("{} {}", "⚠".bright_yellow().bold(), msg.bright_white());
}

pub fn error(msg: &str) {
	eprintln!("{} {}", "✗".bright_red().bold(), msg.bright_white());
}

pub fn debug(msg: &str) {
	if Log::is_verbose() {
		println!("{} {}", "⚙".bright_black().bold(), msg.dimmed());
	}
}

pub fn header(text: &str) {
	println!("\n{}", format!("─── {} ───", text).bright_blue().bold());
}

/// Prints an index build summary
pub fn summary(indexed: usize, skipped: usize, duration_secs: f32) {
	header("Summary");

	println!("  {} {}", "Indexed:".bright_blue(), indexed);
	if skipped > 0 {
		println!("  {} {}", "Skipped:".yellow(), skipped);
	}

	println!("  {} {:.2}s", "Duration:".bright_blue(), duration_secs);
	if indexed > 0 {
		let avg_ms = (duration_secs * 1000.0) / indexed as f32;
		println!("  {} {:.1}ms/image", "Average:".bright_blue(), avg_ms);
	}
	println!();
}

/// Clickable file path (OSC 8 terminal hyperlink)
pub fn path_link(path: &Path, max_len: usize) -> String {
	let absolute = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());

	let uri = if cfg!(windows) {
		let path_str = absolute.to_string_lossy();
		let cleaned = path_str.strip_prefix(r"\\?\").unwrap_or(&path_str);
		format!("file:///{}", cleaned.replace('\\', "/"))
	} else {
		format!("file://{}", absolute.display())
	};

	let filename = path
		.file_name()
		.map(|n| n.to_string_lossy().into_owned())
		.unwrap_or_else(|| "unknown".to_string());

	format!("\x1b]8;;{}\x1b\\{}\x1b]8;;\x1b\\", uri, truncate_middle(&filename, max_len))
}

/// Shortens long names to `head...tail`, respecting char boundaries
fn truncate_middle(name: &str, max_len: usize) -> String {
	let chars: Vec<char> = name.chars().collect();
	if chars.len() <= max_len || max_len < 8 {
		return name.to_string();
	}

	let head = max_len / 2;
	let tail = max_len - head - 3;
	let start: String = chars[..head].iter().collect();
	let end: String = chars[chars.len() - tail..].iter().collect();
	format!("{}...{}", start, end)
}
