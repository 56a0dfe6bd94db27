//! Character grids for level rooms.
//!
//! Sizes are counted in characters, not bytes: the wall glyph is three bytes
//! of UTF-8 but occupies a single cursor column.

use std::fmt;
use std::ops::RangeInclusive;

use crate::definition::{LevelDefinition, Opening, Wall};
use crate::error::{LevelError, Result};
use crate::grid::GridPos;

/// Wall glyph.
pub const WALL: char = '█';
/// Walkable floor.
pub const FLOOR: char = ' ';
/// Marks the exit cell.
pub const EXIT_MARKER: char = 'Q';

/// A grid of characters addressed by 1-indexed [`GridPos`].
///
/// Parsed mazes may be ragged; [`Maze::cols`] is the widest row and cells
/// past the end of a shorter row read as `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
	rows: Vec<Vec<char>>,
}

impl Maze {
	/// Creates a `rows` x `cols` maze filled with `fill`.
	pub fn filled(rows: usize, cols: usize, fill: char) -> Self {
		Self {
			rows: vec![vec![fill; cols]; rows],
		}
	}

	/// Reads a maze from text, one row per line.
	pub fn parse(text: &str) -> Self {
		Self {
			rows: text.lines().map(|line| line.chars().collect()).collect(),
		}
	}

	pub fn rows(&self) -> usize {
		self.rows.len()
	}

	pub fn cols(&self) -> usize {
		self.rows.iter().map(Vec::len).max().unwrap_or(0)
	}

	/// Returns true if `pos` is inside the `rows` x `cols` bounding box.
	pub fn contains(&self, pos: GridPos) -> bool {
		pos.row >= 1 && pos.col >= 1 && pos.row as usize <= self.rows() && pos.col as usize <= self.cols()
	}

	fn index(&self, pos: GridPos) -> Option<(usize, usize)> {
		if pos.row < 1 || pos.col < 1 {
			return None;
		}
		let (r, c) = (pos.row as usize - 1, pos.col as usize - 1);
		let row = self.rows.get(r)?;
		(c < row.len()).then_some((r, c))
	}

	/// Character at `pos`, if the cell exists.
	pub fn get(&self, pos: GridPos) -> Option<char> {
		self.index(pos).map(|(r, c)| self.rows[r][c])
	}

	/// Writes `ch` at `pos`. Cells outside the maze are ignored.
	pub fn set(&mut self, pos: GridPos, ch: char) -> bool {
		match self.index(pos) {
			Some((r, c)) => {
				self.rows[r][c] = ch;
				true
			}
			None => false,
		}
	}

	pub fn is_wall(&self, pos: GridPos) -> bool {
		self.get(pos) == Some(WALL)
	}

	/// Iterates rows as strings.
	pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
		self.rows.iter().map(|row| row.iter().collect())
	}

	fn fill_row(&mut self, row: i64, cols: RangeInclusive<i64>, ch: char) {
		let (start, end) = ((*cols.start()).max(1), (*cols.end()).min(self.cols() as i64));
		for col in start..=end {
			self.set(GridPos::new(row, col), ch);
		}
	}

	fn fill_col(&mut self, col: i64, rows: RangeInclusive<i64>, ch: char) {
		let (start, end) = ((*rows.start()).max(1), (*rows.end()).min(self.rows() as i64));
		for row in start..=end {
			self.set(GridPos::new(row, col), ch);
		}
	}
}

impl fmt::Display for Maze {
	/// Rows joined by `\n`, without a trailing newline.
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for (i, line) in self.lines().enumerate() {
			if i > 0 {
				f.write_str("\n")?;
			}
			f.write_str(&line)?;
		}
		Ok(())
	}
}

/// Builds the maze for `def`.
///
/// Order matters: border, walls, openings, then the exit marker. Shapes that
/// run past the edge are clipped.
pub fn generate_maze(def: &LevelDefinition) -> Result<Maze> {
	let (rows, cols) = (def.rows(), def.cols());
	if rows < 1 || cols < 1 {
		return Err(LevelError::InvalidDimensions { rows, cols });
	}

	let mut maze = Maze::filled(rows as usize, cols as usize, FLOOR);
	maze.fill_row(1, 1..=cols, WALL);
	maze.fill_row(rows, 1..=cols, WALL);
	maze.fill_col(1, 1..=rows, WALL);
	maze.fill_col(cols, 1..=rows, WALL);

	for wall in &def.walls {
		match *wall {
			Wall::Rect {
				rect: [top, left, height, width],
			} => {
				let last_row = top.saturating_add(height).saturating_sub(1).min(rows);
				let last_col = left.saturating_add(width).saturating_sub(1);
				for row in top.max(1)..=last_row {
					maze.fill_row(row, left..=last_col, WALL);
				}
			}
			Wall::Hline {
				line: [row, start, end],
			} => maze.fill_row(row, start..=end, WALL),
			Wall::Vline {
				line: [col, start, end],
			} => maze.fill_col(col, start..=end, WALL),
		}
	}

	for opening in &def.openings {
		match *opening {
			Opening::Hline {
				line: [row, start, end],
			} => maze.fill_row(row, start..=end, FLOOR),
			Opening::Vline {
				line: [col, start, end],
			} => maze.fill_col(col, start..=end, FLOOR),
			Opening::Point { pos } => {
				maze.set(pos, FLOOR);
			}
		}
	}

	if let Some(exit) = def.exit {
		maze.set(exit, EXIT_MARKER);
	}

	Ok(maze)
}
