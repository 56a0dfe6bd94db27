//! Script-callable game functions.
//!
//! Editor scripts reach the store through three functions. Revisions of the
//! level scripts spell them differently (`GameSetExit`, `gamesetexit`,
//! `SetExit`, `game_set_exit`, ...), so lookup folds case, drops
//! underscores, and treats the `game` prefix as optional.
//!
//! Predicates return numbers (`0` or `1`), matching the host's truthiness.

use tracing::{debug, warn};

use crate::error::{BindingError, Result};
use crate::quit::CursorSource;
use crate::state::GameState;

mod value;

pub use value::ScriptValue;

/// The functions exposed to editor scripts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameFunction {
	/// `GameSetExit(row, col)`: arm or disarm the exit.
	SetExit,
	/// `GameIsActive()`: whether a level is loaded.
	IsActive,
	/// `GameCheckQuit()`: whether quitting now is allowed.
	CheckQuit,
}

impl GameFunction {
	pub const ALL: [Self; 3] = [Self::SetExit, Self::IsActive, Self::CheckQuit];

	/// Canonical script name.
	pub const fn name(self) -> &'static str {
		match self {
			Self::SetExit => "GameSetExit",
			Self::IsActive => "GameIsActive",
			Self::CheckQuit => "GameCheckQuit",
		}
	}

	/// Number of arguments the function takes.
	pub const fn arity(self) -> usize {
		match self {
			Self::SetExit => 2,
			Self::IsActive | Self::CheckQuit => 0,
		}
	}

	/// Resolves a script-side name.
	pub fn lookup(name: &str) -> Option<Self> {
		let folded: String = name
			.chars()
			.filter(|c| *c != '_')
			.map(|c| c.to_ascii_lowercase())
			.collect();
		let bare = folded.strip_prefix("game").unwrap_or(&folded);
		match bare {
			"setexit" => Some(Self::SetExit),
			"isactive" | "inlevel" => Some(Self::IsActive),
			"checkquit" | "checkwinconditions" => Some(Self::CheckQuit),
			_ => None,
		}
	}

	/// Runs the function against `state`.
	///
	/// Arguments are checked before anything is written, so a failed call
	/// leaves the store untouched.
	pub fn call(
		self,
		state: &mut GameState,
		host: &dyn CursorSource,
		args: &[ScriptValue],
	) -> Result<ScriptValue> {
		if args.len() != self.arity() {
			return Err(BindingError::ArgumentCount {
				function: self.name(),
				expected: self.arity(),
				got: args.len(),
			});
		}

		match self {
			Self::SetExit => {
				let row = self.number_arg(args, 0)?;
				let col = self.number_arg(args, 1)?;
				state.set_exit(row, col);
				Ok(ScriptValue::Null)
			}
			Self::IsActive => Ok(ScriptValue::from(state.is_active())),
			Self::CheckQuit => Ok(ScriptValue::from(state.check_quit_allowed(host.cursor()))),
		}
	}

	fn number_arg(self, args: &[ScriptValue], index: usize) -> Result<i64> {
		let value = &args[index];
		value.as_number().ok_or(BindingError::NumberRequired {
			function: self.name(),
			position: index + 1,
			found: value.type_name(),
		})
	}
}

/// Looks up `name` and calls it.
///
/// Errors are logged at warn level before being returned; the host shows
/// them to the user.
pub fn call_function(
	state: &mut GameState,
	host: &dyn CursorSource,
	name: &str,
	args: &[ScriptValue],
) -> Result<ScriptValue> {
	let result = GameFunction::lookup(name)
		.ok_or_else(|| BindingError::UnknownFunction(name.to_string()))
		.and_then(|function| function.call(state, host, args));

	match &result {
		Ok(value) => debug!(function = name, ?value, "game.script_call"),
		Err(error) => warn!(function = name, %error, "game.script_call_rejected"),
	}
	result
}

#[cfg(test)]
mod tests;
