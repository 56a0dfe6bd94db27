//! Escape room game state for a modal editor.
//!
//! A level arms an exit position; while armed, quit commands only succeed
//! when the cursor sits on that cell. Everything here is plain data owned by
//! the host and passed by reference to its quit handler and level hooks.

/// Script-facing functions and values.
pub mod bindings;
/// Error types for the script boundary.
pub mod error;
/// Exit and cursor coordinates.
pub mod position;
/// Quit command recognition and verdicts.
pub mod quit;
/// The exit-position store.
pub mod state;

pub use bindings::{GameFunction, ScriptValue, call_function};
pub use error::{BindingError, Result};
pub use position::{CursorPosition, ExitPosition};
pub use quit::{CursorSource, QuitCommand, QuitVerdict, intercept, judge_quit};
pub use state::GameState;
