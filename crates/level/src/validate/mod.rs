//! Consistency checks for built level directories.
//!
//! Works on the generated files only (`meta.vim`, `maze.txt`, `spies.vim`),
//! so hand-edited levels are checked the same way as built ones.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::error::{LevelError, Result};
use crate::grid::GridPos;
use crate::maze::Maze;
use crate::patrol::{Direction, RouteError, RouteVector, walk_route};
use crate::vim::{ParseError, VimValue, parse_literal};

/// One problem with a level.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Issue {
	#[error("directory not found")]
	DirectoryNotFound,
	#[error("{0} not found")]
	MissingFile(&'static str),
	#[error("failed to read {file}: {error}")]
	Unreadable { file: &'static str, error: String },
	#[error("failed to parse {file}: {error}")]
	Unparsable { file: &'static str, error: ParseError },
	#[error("missing {0}")]
	Missing(&'static str),
	#[error("{0} is malformed")]
	Malformed(&'static str),
	#[error("maze.{field} mismatch - meta says {meta}, actual is {actual}")]
	DimensionMismatch {
		field: &'static str,
		meta: i64,
		actual: usize,
	},
	#[error("{field} line {line} out of bounds (1-{max})")]
	LineOutOfBounds {
		field: &'static str,
		line: i64,
		max: usize,
	},
	#[error("{field} col {col} out of bounds (1-{max})")]
	ColOutOfBounds {
		field: &'static str,
		col: i64,
		max: usize,
	},
	#[error("{field} {pos} is on a wall")]
	OnWall { field: &'static str, pos: GridPos },
	#[error("empty route")]
	EmptyRoute,
	#[error("invalid direction '{0}'")]
	InvalidDirection(String),
	#[error(transparent)]
	Route(#[from] RouteError),
}

/// An [`Issue`] located in a level (and optionally a spy).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
	pub level: PathBuf,
	pub spy: Option<String>,
	pub issue: Issue,
}

impl Finding {
	fn level(level: &Path, issue: Issue) -> Self {
		Self {
			level: level.to_path_buf(),
			spy: None,
			issue,
		}
	}
}

impl fmt::Display for Finding {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match &self.spy {
			Some(spy) => write!(f, "{} spy '{spy}': {}", self.level.display(), self.issue),
			None => write!(f, "{}: {}", self.level.display(), self.issue),
		}
	}
}

/// Validates one level directory. An empty result means the level is valid.
pub fn validate_level(dir: &Path) -> Vec<Finding> {
	let mut findings = Vec::new();
	let fail = |issue| vec![Finding::level(dir, issue)];

	let meta = match read_literal(dir, "meta.vim") {
		Ok(Some(meta)) => meta,
		Ok(None) => return fail(Issue::MissingFile("meta.vim")),
		Err(err) => return fail(err),
	};
	let maze = match fs::read_to_string(dir.join("maze.txt")) {
		Ok(text) => Maze::parse(&text),
		Err(e) if e.kind() == std::io::ErrorKind::NotFound => return fail(Issue::MissingFile("maze.txt")),
		Err(e) => {
			return fail(Issue::Unreadable {
				file: "maze.txt",
				error: e.to_string(),
			});
		}
	};

	for problem in check_dimensions(&meta, &maze)
		.into_iter()
		.chain(check_cursor(&meta, &maze, "start_cursor"))
		.chain(check_cursor(&meta, &maze, "exit_cursor"))
	{
		findings.push(Finding::level(dir, problem));
	}

	let mut spies: Vec<VimValue> = meta.get("spies").and_then(VimValue::as_list).map(<[_]>::to_vec).unwrap_or_default();
	match read_literal(dir, "spies.vim") {
		Ok(Some(VimValue::List(items))) => spies.extend(items),
		Ok(Some(_)) => findings.push(Finding::level(dir, Issue::Malformed("spies.vim"))),
		Ok(None) => {}
		Err(err) => findings.push(Finding::level(dir, err)),
	}
	for spy in &spies {
		if let Err(issue) = check_spy(spy, &maze) {
			findings.push(Finding {
				level: dir.to_path_buf(),
				spy: Some(spy.get("id").and_then(VimValue::as_str).unwrap_or("unknown").to_string()),
				issue,
			});
		}
	}

	debug!(level = %dir.display(), findings = findings.len(), spies = spies.len(), "validated level");
	findings
}

/// Reads and parses `dir/file`; `Ok(None)` when the file does not exist.
fn read_literal(dir: &Path, file: &'static str) -> std::result::Result<Option<VimValue>, Issue> {
	let text = match fs::read_to_string(dir.join(file)) {
		Ok(text) => text,
		Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
		Err(e) => {
			return Err(Issue::Unreadable {
				file,
				error: e.to_string(),
			});
		}
	};
	parse_literal(&text)
		.map(Some)
		.map_err(|error| Issue::Unparsable { file, error })
}

fn check_dimensions(meta: &VimValue, maze: &Maze) -> Vec<Issue> {
	let Some(dims) = meta.get("maze") else {
		return vec![Issue::Missing("'maze' in metadata")];
	};
	let mut issues = Vec::new();
	for (field, actual) in [("lines", maze.rows()), ("cols", maze.cols())] {
		let meta = dims.get(field).and_then(VimValue::as_int).unwrap_or(0);
		if usize::try_from(meta).ok() != Some(actual) {
			issues.push(Issue::DimensionMismatch { field, meta, actual });
		}
	}
	issues
}

fn check_cursor(meta: &VimValue, maze: &Maze, field: &'static str) -> Option<Issue> {
	let Some(value) = meta.get(field) else {
		return Some(Issue::Missing(field));
	};
	let Some(pos) = value.as_pos() else {
		return Some(Issue::Malformed(field));
	};
	check_cell(maze, field, pos).err()
}

/// Bounds (line first, then column) and wall check for one cell.
fn check_cell(maze: &Maze, field: &'static str, pos: GridPos) -> std::result::Result<(), Issue> {
	let (rows, cols) = (maze.rows(), maze.cols());
	if pos.row < 1 || pos.row as usize > rows {
		return Err(Issue::LineOutOfBounds {
			field,
			line: pos.row,
			max: rows,
		});
	}
	if pos.col < 1 || pos.col as usize > cols {
		return Err(Issue::ColOutOfBounds {
			field,
			col: pos.col,
			max: cols,
		});
	}
	if maze.is_wall(pos) {
		return Err(Issue::OnWall { field, pos });
	}
	Ok(())
}

fn check_spy(spy: &VimValue, maze: &Maze) -> std::result::Result<(), Issue> {
	let spawn = match spy.get("spawn") {
		None | Some(VimValue::Null) => return Err(Issue::Missing("spawn position")),
		Some(value) => value.as_pos().ok_or(Issue::Malformed("spawn"))?,
	};
	check_cell(maze, "spawn", spawn)?;

	let route = spy
		.get("route")
		.ok_or(Issue::Missing("route"))?
		.as_list()
		.ok_or(Issue::Malformed("route"))?;
	if route.is_empty() {
		return Err(Issue::EmptyRoute);
	}
	let route = route.iter().map(route_vector).collect::<std::result::Result<Vec<_>, _>>()?;

	walk_route(maze, spawn, &route)?;
	Ok(())
}

fn route_vector(value: &VimValue) -> std::result::Result<RouteVector, Issue> {
	let end = value.get("end").and_then(VimValue::as_pos).ok_or(Issue::Malformed("route vector"))?;
	let dir = value.get("dir").and_then(VimValue::as_str).ok_or(Issue::Malformed("route vector"))?;
	let dir = Direction::parse(dir).ok_or_else(|| Issue::InvalidDirection(dir.to_string()))?;
	Ok(RouteVector::new(end, dir))
}

/// Validates every `level*` directory under `levels_dir`, in sorted order.
pub fn validate_all(levels_dir: &Path) -> Result<Vec<Finding>> {
	let read = fs::read_dir(levels_dir).map_err(|e| LevelError::io(levels_dir, e))?;
	let mut dirs = Vec::new();
	for dirent in read {
		let path = dirent.map_err(|e| LevelError::io(levels_dir, e))?.path();
		let is_level = path
			.file_name()
			.and_then(|n| n.to_str())
			.is_some_and(|n| n.starts_with("level"));
		if is_level && path.is_dir() {
			dirs.push(path);
		}
	}
	dirs.sort();
	Ok(dirs.iter().flat_map(|dir| validate_level(dir)).collect())
}

/// Validates the given directories; missing ones are reported as findings.
pub fn validate_paths(dirs: &[PathBuf]) -> Vec<Finding> {
	dirs.iter()
		.flat_map(|dir| {
			if dir.exists() {
				validate_level(dir)
			} else {
				vec![Finding::level(dir, Issue::DirectoryNotFound)]
			}
		})
		.collect()
}
