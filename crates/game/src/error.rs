//! Error types for script function calls.

use thiserror::Error;

/// Errors reported to the user when a script calls a game function.
///
/// A failed call never touches the store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindingError {
	/// A position argument was not a number.
	#[error("Number required: {function}() argument {position} is {found}")]
	NumberRequired {
		/// Canonical function name.
		function: &'static str,
		/// 1-based argument position.
		position: usize,
		/// Type name of the offending value.
		found: &'static str,
	},

	/// The call supplied the wrong number of arguments.
	#[error("{function}() takes {expected} argument(s), got {got}")]
	ArgumentCount {
		/// Canonical function name.
		function: &'static str,
		/// Required argument count.
		expected: usize,
		/// Supplied argument count.
		got: usize,
	},

	/// No game function has this name.
	#[error("Unknown function: {0}")]
	UnknownFunction(String),
}

/// Result type for script function calls.
pub type Result<T> = std::result::Result<T, BindingError>;
