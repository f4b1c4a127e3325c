//! huefind - color-histogram image similarity search
//!
//! Indexes a categorized photo corpus and ranks it against query images.

use anyhow::Result;
use clap::{CommandFactory, Parser};

use huefind::cli::{Cli, Command};
use huefind::{commands, config, ui};

fn main() {
	let cli = Cli::parse();

	ui::Log::set_verbose(cli.verbose);
	if let Some(cache) = cli.cache.clone() {
		config::set_cache_path(cache);
	}

	if let Err(e) = run(cli.command) {
		ui::error(&format!("{:#}", e));
		std::process::exit(1);
	}
}

fn run(command: Command) -> Result<()> {
	match command {
		Command::Index { directory, force, strict } => commands::index::run(&directory, force, strict),
		Command::Search {
			image,
			directory,
			category,
			limit,
			json,
			open,
		} => commands::search::run(&image, &directory, category, limit, json.as_deref(), open),
		Command::Random {
			test_dir,
			directory,
			limit,
			open,
		} => commands::random::run(&test_dir, &directory, limit, open),
		Command::Clean => commands::clean::run(),
		Command::Help { subcommand } => {
			let mut cmd = Cli::command();
			match subcommand.and_then(|sub| cmd.find_subcommand_mut(&sub).cloned()) {
				Some(mut sub_cmd) => sub_cmd.print_help()?,
				None => cmd.print_help()?,
			}
			Ok(())
		}
	}
}
