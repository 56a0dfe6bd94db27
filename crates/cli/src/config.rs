//! `escape.toml` loading.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// File name looked up in the working directory and the user config dir.
pub const CONFIG_FILE: &str = "escape.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
	#[error("I/O error reading {path}: {error}")]
	Io {
		path: PathBuf,
		#[source]
		error: std::io::Error,
	},

	#[error("invalid config {path}: {error}")]
	Parse {
		path: PathBuf,
		#[source]
		error: toml::de::Error,
	},
}

/// Settings shared by every subcommand. Missing keys take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
	/// Directory holding the `levelNN` directories.
	pub levels_dir: PathBuf,
	/// Default log filter when neither `RUST_LOG` nor `-v` is given.
	pub log_level: String,
	pub build: BuildConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BuildConfig {
	/// Print the marked-up maze after each build.
	pub preview: bool,
}

impl Default for Config {
	fn default() -> Self {
		Self {
			levels_dir: PathBuf::from("levels"),
			log_level: "info".to_string(),
			build: BuildConfig::default(),
		}
	}
}

impl Default for BuildConfig {
	fn default() -> Self {
		Self { preview: true }
	}
}

impl Config {
	pub fn parse(text: &str) -> Result<Self, toml::de::Error> {
		toml::from_str(text)
	}

	pub fn load(path: &Path) -> Result<Self, ConfigError> {
		let text = std::fs::read_to_string(path).map_err(|error| ConfigError::Io {
			path: path.to_path_buf(),
			error,
		})?;
		Self::parse(&text).map_err(|error| ConfigError::Parse {
			path: path.to_path_buf(),
			error,
		})
	}

	/// Loads the first config found, returning it with the path it came from.
	///
	/// An explicit path must exist. Otherwise `./escape.toml` is tried, then
	/// `escape/escape.toml` under the user config dir, then the defaults.
	pub fn discover(explicit: Option<&Path>) -> Result<(Self, Option<PathBuf>), ConfigError> {
		if let Some(path) = explicit {
			return Ok((Self::load(path)?, Some(path.to_path_buf())));
		}
		let user = dirs::config_dir().map(|dir| dir.join("escape").join(CONFIG_FILE));
		Self::discover_in(&[Some(PathBuf::from(CONFIG_FILE)), user])
	}

	fn discover_in(candidates: &[Option<PathBuf>]) -> Result<(Self, Option<PathBuf>), ConfigError> {
		for path in candidates.iter().flatten() {
			if path.is_file() {
				return Ok((Self::load(path)?, Some(path.clone())));
			}
		}
		Ok((Self::default(), None))
	}
}
