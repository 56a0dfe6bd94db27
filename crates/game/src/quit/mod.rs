//! Quit command interception.
//!
//! The host's ex-command handler hands every command line to [`intercept`]
//! before dispatch. Commands outside the quit family pass through with
//! `None`; quit commands get a [`QuitVerdict`] the host acts on.

use tracing::debug;

use crate::position::{CursorPosition, ExitPosition};
use crate::state::GameState;

/// Host window view of the cursor.
pub trait CursorSource {
	/// Returns the cursor with both axes 1-indexed.
	fn cursor(&self) -> CursorPosition;
}

impl CursorSource for CursorPosition {
	fn cursor(&self) -> CursorPosition {
		*self
	}
}

/// A parsed quit-family ex command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuitCommand {
	/// Canonical command name.
	pub name: &'static str,
	/// Whether `!` was given.
	pub force: bool,
}

/// The quit family as `(full name, shortest abbreviation, canonical name)`,
/// following the editor's `q[uit]` abbreviation rules.
const QUIT_NAMES: &[(&str, usize, &str)] = &[
	("quit", 1, "quit"),
	("qall", 2, "quitall"),
	("quitall", 5, "quitall"),
	("wq", 2, "wq"),
	("wqall", 3, "wqall"),
	("xit", 1, "xit"),
	("xall", 2, "xall"),
	("exit", 3, "exit"),
];

/// `conf[irm]`, the only modifier that may precede a quit command.
const CONFIRM: (&str, usize) = ("confirm", 4);

fn abbreviates(word: &str, full: &str, min: usize) -> bool {
	word.len() >= min && full.starts_with(word)
}

/// Skips a leading count or line range such as `2`, `%` or `.,$`.
fn skip_range(line: &str) -> &str {
	line.trim_start_matches(|c: char| c.is_ascii_digit() || c.is_whitespace() || ".,;$%+-".contains(c))
}

impl QuitCommand {
	/// Parses an ex command line, returning `None` if it is not a quit command.
	///
	/// Accepts an optional leading `:`, a count or range, the `confirm`
	/// modifier, any abbreviation of the command name, and a trailing `!`.
	/// Arguments after the command name (e.g. `:wq file.txt`) are ignored.
	pub fn parse(line: &str) -> Option<Self> {
		let line = line.trim();
		let mut rest = skip_range(line.strip_prefix(':').unwrap_or(line));
		loop {
			let len = rest.find(|c: char| !c.is_ascii_alphabetic()).unwrap_or(rest.len());
			let (word, tail) = rest.split_at(len);
			if word.is_empty() {
				return None;
			}
			if abbreviates(word, CONFIRM.0, CONFIRM.1) {
				rest = skip_range(tail);
				continue;
			}

			let (force, tail) = match tail.strip_prefix('!') {
				Some(tail) => (true, tail),
				None => (false, tail),
			};
			if !(tail.is_empty() || tail.starts_with(char::is_whitespace)) {
				return None;
			}
			return QUIT_NAMES
				.iter()
				.find(|&&(full, min, _)| abbreviates(word, full, min))
				.map(|&(_, _, name)| Self { name, force });
		}
	}
}

/// Outcome of a quit attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuitVerdict {
	/// No level is loaded; the editor quits as usual.
	Unrestricted,
	/// The cursor is on the exit; the level is won.
	Escaped,
	/// The cursor is elsewhere; the quit is refused.
	Blocked {
		exit: ExitPosition,
		cursor: CursorPosition,
	},
}

impl QuitVerdict {
	/// Returns true if the host should let the quit proceed.
	pub const fn permits_quit(self) -> bool {
		!matches!(self, Self::Blocked { .. })
	}
}

/// Decides whether quitting from the host's current cursor is allowed.
pub fn judge_quit(state: &GameState, host: &dyn CursorSource) -> QuitVerdict {
	if !state.is_active() {
		return QuitVerdict::Unrestricted;
	}
	let cursor = host.cursor();
	let verdict = if state.check_quit_allowed(cursor) {
		QuitVerdict::Escaped
	} else {
		QuitVerdict::Blocked {
			exit: state.exit(),
			cursor,
		}
	};
	debug!(?verdict, "game.quit_judged");
	verdict
}

/// Checks an ex command line against the game state.
///
/// Returns `None` for commands outside the quit family. The `!` modifier
/// does not bypass the game; it only matters to the host's own
/// unsaved-changes handling.
pub fn intercept(state: &GameState, host: &dyn CursorSource, line: &str) -> Option<QuitVerdict> {
	let command = QuitCommand::parse(line)?;
	debug!(name = command.name, force = command.force, "game.quit_intercepted");
	Some(judge_quit(state, host))
}

#[cfg(test)]
mod tests;
