//! Exit-position store.
//!
//! Replaces process-wide globals with a value the host owns. The level-load
//! script arms it, the level-exit script disarms it, and the quit handler
//! reads it on every quit attempt.

use tracing::debug;

use crate::position::{CursorPosition, ExitPosition};

/// Game state shared between level hooks and the quit handler.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GameState {
	exit: ExitPosition,
}

impl GameState {
	/// Creates a disarmed store.
	pub const fn new() -> Self {
		Self {
			exit: ExitPosition::UNSET,
		}
	}

	/// Overwrites the exit position. No validation is applied.
	pub fn set_exit(&mut self, row: i64, col: i64) {
		self.exit = ExitPosition::new(row, col);
		debug!(row, col, armed = self.exit.is_armed(), "game.set_exit");
	}

	/// Resets the exit position to the sentinel.
	pub fn clear_exit(&mut self) {
		self.set_exit(ExitPosition::UNSET.row, ExitPosition::UNSET.col);
	}

	/// Level-load hook: arms quit interception at `exit`.
	pub fn load_level(&mut self, exit: ExitPosition) {
		debug!(%exit, "game.level_load");
		self.set_exit(exit.row, exit.col);
	}

	/// Level-exit hook: disarms quit interception.
	pub fn leave_level(&mut self) {
		debug!(exit = %self.exit, "game.level_leave");
		self.clear_exit();
	}

	/// Returns the stored exit position.
	pub const fn exit(&self) -> ExitPosition {
		self.exit
	}

	/// Returns true while a level is loaded.
	pub const fn in_level(&self) -> bool {
		self.exit.is_armed()
	}

	/// Returns true when quit commands should be intercepted.
	///
	/// Same predicate as [`GameState::in_level`]; between levels quit
	/// commands reach the editor untouched.
	pub const fn is_active(&self) -> bool {
		self.in_level()
	}

	/// Returns true if quitting from `cursor` is allowed.
	///
	/// Always true outside a level. Inside a level, true only when the cursor
	/// is exactly on the exit.
	pub fn check_quit_allowed(&self, cursor: CursorPosition) -> bool {
		if !self.in_level() {
			return true;
		}
		cursor.is_on(self.exit)
	}
}
