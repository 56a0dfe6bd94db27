//! Compiles `level.toml` into the files the editor loads.

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::definition::{LevelDefinition, Lore};
use crate::emit::{SpyIssue, meta_vim, spies_vim};
use crate::error::{LevelError, Result};
use crate::grid::GridPos;
use crate::maze::{EXIT_MARKER, Maze, generate_maze};
use crate::patrol::spawn_position;

/// Marker for the player's starting cell in previews.
pub const START_MARKER: char = 'S';

/// Outcome of building one level.
#[derive(Debug)]
pub struct BuildReport {
	/// Directory the files were written to (the definition's parent).
	pub level_dir: PathBuf,
	pub definition: LevelDefinition,
	pub maze: Maze,
	/// Files written, in write order.
	pub written: Vec<PathBuf>,
	/// Spy route problems. The files are written regardless.
	pub issues: Vec<SpyIssue>,
}

impl BuildReport {
	pub fn is_clean(&self) -> bool {
		self.issues.is_empty()
	}

	/// Short human-readable summary of the build.
	pub fn summary(&self) -> String {
		let def = &self.definition;
		let or_unset = |pos: Option<GridPos>| pos.map_or_else(|| "not set".to_string(), |p| p.to_string());

		let mut out = String::new();
		let _ = writeln!(out, "Dimensions: {} rows x {} cols", def.rows(), def.cols());
		let _ = writeln!(out, "Start: {}", or_unset(def.start));
		let _ = writeln!(out, "Exit: {}", or_unset(def.exit));
		let _ = write!(out, "Spies: {}", def.spies.len());
		out
	}
}

/// Builds the level defined at `definition_path`.
///
/// Reads `lore.json` from the same directory when present, then writes
/// `maze.txt`, `spies.vim` (only when the level has spies) and `meta.vim`
/// next to the definition.
pub fn build_level(definition_path: &Path) -> Result<BuildReport> {
	let definition = LevelDefinition::load(definition_path)?;
	let level_dir = definition_path
		.parent()
		.filter(|p| !p.as_os_str().is_empty())
		.unwrap_or_else(|| Path::new("."))
		.to_path_buf();
	let lore = Lore::load_optional(&level_dir.join("lore.json"))?.unwrap_or_default();

	let maze = generate_maze(&definition)?;
	debug!(rows = maze.rows(), cols = maze.cols(), "generated maze");

	let mut written = Vec::new();
	write_file(&level_dir.join("maze.txt"), &maze.to_string(), &mut written)?;

	let mut issues = Vec::new();
	if definition.spies.is_empty() {
		debug!(dir = %level_dir.display(), "no spies defined, skipping spies.vim");
	} else {
		let (text, found) = spies_vim(&definition.spies, &maze);
		for issue in &found {
			warn!(spy = %issue.spy, error = %issue.error, "bad patrol route");
		}
		issues = found;
		write_file(&level_dir.join("spies.vim"), &text, &mut written)?;
	}

	write_file(&level_dir.join("meta.vim"), &meta_vim(&definition, &lore), &mut written)?;

	Ok(BuildReport {
		level_dir,
		definition,
		maze,
		written,
		issues,
	})
}

fn write_file(path: &Path, contents: &str, written: &mut Vec<PathBuf>) -> Result<()> {
	fs::write(path, contents).map_err(|e| LevelError::io(path, e))?;
	info!(path = %path.display(), "written");
	written.push(path.to_path_buf());
	Ok(())
}

/// The maze with the start, exit, and spy spawns marked.
///
/// Spies are numbered `1`-`9`, then `A` onwards. Later markers overwrite
/// earlier ones on the same cell.
pub fn render_preview(maze: &Maze, def: &LevelDefinition) -> String {
	let mut grid = maze.clone();
	if let Some(start) = def.start {
		grid.set(start, START_MARKER);
	}
	if let Some(exit) = def.exit {
		grid.set(exit, EXIT_MARKER);
	}
	for (i, spy) in def.spies.iter().enumerate() {
		if let Some(spawn) = spawn_position(spy) {
			grid.set(spawn, spy_marker(i));
		}
	}
	grid.to_string()
}

fn spy_marker(index: usize) -> char {
	match index {
		0..=8 => char::from(b'1' + index as u8),
		_ => u8::try_from(index - 9)
			.ok()
			.and_then(|n| b'A'.checked_add(n))
			.map_or('?', char::from),
	}
}
