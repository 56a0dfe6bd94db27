//! CLI schema and parsing helpers for the escape binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use escape_game::CursorPosition;

/// Parses a `ROW:COL` cursor, both 1-indexed.
///
/// Zero and negative values are accepted so unarmed positions can be checked.
pub fn parse_cursor(s: &str) -> Result<CursorPosition, String> {
	let (row, col) = s
		.split_once(':')
		.ok_or_else(|| format!("expected ROW:COL, got '{s}'"))?;
	let row = row
		.trim()
		.parse::<i64>()
		.map_err(|e| format!("invalid row '{row}': {e}"))?;
	let col = col
		.trim()
		.parse::<i64>()
		.map_err(|e| format!("invalid column '{col}': {e}"))?;
	Ok(CursorPosition::new(row, col))
}

#[derive(Parser, Debug)]
#[command(name = "escape")]
#[command(about = "Escape room level tools")]
#[command(version)]
/// Command-line arguments.
pub struct Cli {
	/// Config file (defaults to ./escape.toml, then the user config dir)
	#[arg(long, short = 'c', value_name = "PATH", global = true)]
	pub config: Option<PathBuf>,

	/// Debug logging (overridden by RUST_LOG)
	#[arg(long, short = 'v', global = true)]
	pub verbose: bool,

	/// Subcommand to execute.
	#[command(subcommand)]
	pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
	/// Compile level definitions into maze.txt, spies.vim, and meta.vim
	Build {
		/// Level definition files (level.toml)
		#[arg(required = true, value_name = "LEVEL_TOML")]
		definitions: Vec<PathBuf>,
		/// Skip the maze preview
		#[arg(long)]
		no_preview: bool,
	},
	/// Check built levels for consistency
	Validate {
		/// Level directories (defaults to every level in the levels directory)
		#[arg(value_name = "LEVEL_DIR")]
		levels: Vec<PathBuf>,
	},
	/// Write manifest.vim for the levels directory
	Manifest {
		/// Output path (defaults to manifest.vim in the levels directory)
		#[arg(long, short = 'o', value_name = "PATH")]
		output: Option<PathBuf>,
	},
	/// Load a level's exit and check whether quitting from a cursor escapes
	CheckQuit {
		/// Built level directory
		#[arg(value_name = "LEVEL_DIR")]
		level: PathBuf,
		/// Cursor position as ROW:COL (1-indexed)
		#[arg(long, value_name = "ROW:COL", value_parser = parse_cursor)]
		cursor: CursorPosition,
	},
}

#[cfg(test)]
mod tests;
