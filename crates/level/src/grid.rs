use std::fmt;

use serde::{Deserialize, Serialize};

/// A 1-indexed `[row, col]` cell.
///
/// Serialized as a two-element array so level files read naturally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[i64; 2]", into = "[i64; 2]")]
pub struct GridPos {
	pub row: i64,
	pub col: i64,
}

impl GridPos {
	pub const fn new(row: i64, col: i64) -> Self {
		Self { row, col }
	}
}

impl From<[i64; 2]> for GridPos {
	fn from([row, col]: [i64; 2]) -> Self {
		Self { row, col }
	}
}

impl From<GridPos> for [i64; 2] {
	fn from(pos: GridPos) -> Self {
		[pos.row, pos.col]
	}
}

impl fmt::Display for GridPos {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "[{}, {}]", self.row, self.col)
	}
}
