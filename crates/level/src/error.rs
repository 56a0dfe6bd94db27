//! Error types for level loading and compilation.

use std::path::PathBuf;

use thiserror::Error;

use crate::vim::ParseError;

/// Errors that stop a level from being loaded or built.
///
/// Problems inside a level that still produce output (bad spy routes,
/// cursor cells on walls) are reported as findings instead.
#[derive(Debug, Error)]
pub enum LevelError {
	/// Error reading or writing a level file.
	#[error("I/O error at {path}: {error}")]
	Io {
		/// Path of the file or directory involved.
		path: PathBuf,
		/// The underlying I/O error.
		#[source]
		error: std::io::Error,
	},

	/// `level.toml` did not match the definition schema.
	#[error("invalid level definition {path}: {error}")]
	Definition {
		path: PathBuf,
		#[source]
		error: toml::de::Error,
	},

	/// `lore.json` could not be decoded.
	#[error("invalid lore file {path}: {error}")]
	Lore {
		path: PathBuf,
		#[source]
		error: serde_json::Error,
	},

	/// A Vim literal file could not be parsed.
	#[error("failed to parse {path}: {error}")]
	Literal {
		path: PathBuf,
		#[source]
		error: ParseError,
	},

	/// The maze needs at least one row and one column.
	#[error("maze dimensions must be positive, got {rows}x{cols}")]
	InvalidDimensions { rows: i64, cols: i64 },
}

impl LevelError {
	pub(crate) fn io(path: impl Into<PathBuf>, error: std::io::Error) -> Self {
		Self::Io {
			path: path.into(),
			error,
		}
	}
}

/// Result type for level operations.
pub type Result<T> = std::result::Result<T, LevelError>;
