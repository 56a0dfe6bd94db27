use std::fmt;

/// Target cell of the current level, 1-indexed.
///
/// `(0, 0)` is the canonical "no level" sentinel. Any pair with a
/// non-positive coordinate is inactive, so older scripts that disarm with
/// negative values behave the same.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ExitPosition {
	pub row: i64,
	pub col: i64,
}

impl ExitPosition {
	/// The disarmed sentinel.
	pub const UNSET: Self = Self { row: 0, col: 0 };

	pub const fn new(row: i64, col: i64) -> Self {
		Self { row, col }
	}

	/// Returns true when both coordinates name a real cell.
	pub const fn is_armed(self) -> bool {
		self.row > 0 && self.col > 0
	}
}

impl fmt::Display for ExitPosition {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "[{}, {}]", self.row, self.col)
	}
}

/// Cursor location with both axes 1-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CursorPosition {
	pub row: i64,
	pub col: i64,
}

impl CursorPosition {
	pub const fn new(row: i64, col: i64) -> Self {
		Self { row, col }
	}

	/// Converts a host cursor (1-indexed line, 0-indexed column).
	pub fn from_host(line: usize, col: usize) -> Self {
		Self {
			row: line as i64,
			col: col as i64 + 1,
		}
	}

	/// Returns true if the cursor sits exactly on `exit`.
	pub fn is_on(self, exit: ExitPosition) -> bool {
		self.row == exit.row && self.col == exit.col
	}
}

impl fmt::Display for CursorPosition {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "[{}, {}]", self.row, self.col)
	}
}
