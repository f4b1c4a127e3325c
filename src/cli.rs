use clap::{builder::Styles, Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;

use crate::config::DEFAULT_LIMIT;
use crate::core::Category;

fn parse_category(s: &str) -> Result<Category, String> {
	s.parse().map_err(|_| {
		let known: Vec<&str> = Category::ALL.iter().map(|c| c.as_str()).collect();
		format!("'{}' is not a category (expected one of: {})", s, known.join(", "))
	})
}

fn parse_limit(s: &str) -> Result<usize, String> {
	let val: usize = s.parse().map_err(|_| format!("'{}' is not a valid number", s))?;
	if val == 0 {
		Err("limit must be at least 1".to_string())
	} else {
		Ok(val)
	}
}

fn styles() -> Styles {
	Styles::styled()
		.header(anstyle::Style::new().bold().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Blue))))
		.usage(anstyle::Style::new().bold().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Blue))))
		.literal(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Blue))))
		.placeholder(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))))
		.valid(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Blue))))
		.invalid(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))))
}

#[derive(Parser, Debug)]
#[command(
	name = "huefind",
	author,
	version,
	about = "Color-histogram image similarity search",
	styles = styles(),
	disable_help_subcommand = true,
	after_help = format!(
		"{title}
  {bin} {index}   {index_args}              {index_desc}
  {bin} {search}  {search_args}  {search_desc}
  {bin} {random}  {random_args}  {random_desc}
  {bin} {clean}   {clean_args}        {clean_desc}",
		title = "Examples:".bright_blue().bold(),
		bin = "huefind".bright_blue(),
		index = "index".yellow(),
		index_args = "-d ./seg",
		index_desc = "Build the corpus index".dimmed(),
		search = "search".yellow(),
		search_args = "seg_test/sea/1.jpg -d ./seg",
		search_desc = "Find similar images".dimmed(),
		random = "random".yellow(),
		random_args = "-t ./seg_test -d ./seg ",
		random_desc = "Query with a random test image".dimmed(),
		clean = "clean".yellow(),
		clean_args = "--cache idx.msgpack",
		clean_desc = "Drop the cached index".dimmed(),
	),
)]
pub struct Cli {
	/// Enable verbose debug output
	#[arg(short = 'v', long = "verbose", global = true)]
	pub verbose: bool,

	/// Cache artifact path (default: $HUEFIND_CACHE or ./corpus_index.msgpack)
	#[arg(long = "cache", global = true, value_name = "PATH")]
	pub cache: Option<PathBuf>,

	#[command(subcommand)]
	pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
	/// Build (or load) the histogram index for a corpus
	Index {
		/// Corpus root with one subdirectory per category
		#[arg(short = 'd', long = "dir", default_value = "./seg")]
		directory: PathBuf,

		/// Discard the cache and recompute every histogram
		#[arg(short = 'f', long = "force")]
		force: bool,

		/// Abort on the first unreadable image instead of skipping it
		#[arg(long = "strict")]
		strict: bool,
	},

	/// Find corpus images similar to a query image
	Search {
		/// Query image
		#[arg(value_name = "IMAGE")]
		image: PathBuf,

		/// Corpus root with one subdirectory per category
		#[arg(short = 'd', long = "dir", default_value = "./seg")]
		directory: PathBuf,

		/// Category of the query (default: its parent directory name)
		#[arg(short = 'c', long = "category", value_parser = parse_category)]
		category: Option<Category>,

		/// Number of results
		#[arg(short = 'n', long = "limit", default_value_t = DEFAULT_LIMIT, value_parser = parse_limit)]
		limit: usize,

		/// Export results as JSON
		#[arg(long = "json", value_name = "PATH")]
		json: Option<PathBuf>,

		/// Open best match in default viewer
		#[arg(short = 'o', long = "open")]
		open: bool,
	},

	/// Query with a random image from a held-out test directory
	Random {
		/// Test directory with one subdirectory per category
		#[arg(short = 't', long = "test-dir", default_value = "./seg_test")]
		test_dir: PathBuf,

		/// Corpus root with one subdirectory per category
		#[arg(short = 'd', long = "dir", default_value = "./seg")]
		directory: PathBuf,

		/// Number of results
		#[arg(short = 'n', long = "limit", default_value_t = DEFAULT_LIMIT, value_parser = parse_limit)]
		limit: usize,

		/// Open best match in default viewer
		#[arg(short = 'o', long = "open")]
		open: bool,
	},

	/// Delete the cached index
	Clean,

	/// Show help for a subcommand
	Help {
		/// Subcommand name
		subcommand: Option<String>,
	},
}
