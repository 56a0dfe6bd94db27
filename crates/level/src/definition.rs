//! Authored level definitions (`level.toml`) and lore (`lore.json`).
//!
//! ```toml
//! dimensions = [25, 80]
//! start = [2, 2]
//! exit = [23, 78]
//!
//! [[walls]]
//! type = "rect"
//! rect = [5, 10, 8, 2]  # top, left, height, width
//!
//! [[walls]]
//! type = "hline"
//! line = [10, 20, 40]   # row, col_start, col_end
//!
//! [[openings]]
//! type = "point"
//! pos = [10, 25]
//!
//! [[spies]]
//! id = "guard1"
//! pattern = "horizontal"
//! endpoints = [[5, 20], [5, 60]]
//! speed = 1.0
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Deserializer, de};

use crate::error::{LevelError, Result};
use crate::grid::GridPos;

/// One level as authored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LevelDefinition {
	/// `[rows, cols]` in characters.
	pub dimensions: [i64; 2],
	#[serde(default)]
	pub start: Option<GridPos>,
	#[serde(default)]
	pub exit: Option<GridPos>,
	#[serde(default)]
	pub walls: Vec<Wall>,
	#[serde(default)]
	pub openings: Vec<Opening>,
	#[serde(default)]
	pub spies: Vec<SpyDefinition>,
	/// Command hints shown in the level intro.
	#[serde(default)]
	pub commands: Vec<CommandHint>,
	#[serde(default)]
	pub blocked_categories: Vec<String>,
	#[serde(default)]
	pub features: Vec<String>,
}

impl LevelDefinition {
	/// Parses a definition from TOML text.
	pub fn from_toml_str(text: &str) -> std::result::Result<Self, toml::de::Error> {
		toml::from_str(text)
	}

	/// Reads and parses `path`.
	pub fn load(path: &Path) -> Result<Self> {
		let text = fs::read_to_string(path).map_err(|e| LevelError::io(path, e))?;
		Self::from_toml_str(&text).map_err(|error| LevelError::Definition {
			path: path.to_path_buf(),
			error,
		})
	}

	pub const fn rows(&self) -> i64 {
		self.dimensions[0]
	}

	pub const fn cols(&self) -> i64 {
		self.dimensions[1]
	}
}

/// Wall shapes. All coordinates 1-indexed.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Wall {
	/// `[top, left, height, width]`.
	Rect { rect: [i64; 4] },
	/// `[row, col_start, col_end]`, inclusive.
	Hline { line: [i64; 3] },
	/// `[col, row_start, row_end]`, inclusive.
	Vline { line: [i64; 3] },
}

/// Floor carved back out of walls.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Opening {
	Hline { line: [i64; 3] },
	Vline { line: [i64; 3] },
	Point { pos: GridPos },
}

/// A patrolling spy.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SpyDefinition {
	pub id: String,
	#[serde(flatten)]
	pub pattern: PatrolPattern,
	/// Overrides the pattern's default spawn cell.
	#[serde(default)]
	pub spawn: Option<GridPos>,
	/// Must be finite; it is written out as a Vim Float.
	#[serde(default = "default_speed", deserialize_with = "finite_speed")]
	pub speed: f64,
}

fn default_speed() -> f64 {
	1.0
}

fn finite_speed<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<f64, D::Error> {
	let speed = f64::deserialize(deserializer)?;
	if speed.is_finite() {
		Ok(speed)
	} else {
		Err(de::Error::custom(format!("speed must be a finite number, got {speed}")))
	}
}

/// How a spy patrols.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "pattern", rename_all = "lowercase")]
pub enum PatrolPattern {
	/// Back and forth along a row.
	Horizontal { endpoints: [GridPos; 2] },
	/// Back and forth along a column.
	Vertical { endpoints: [GridPos; 2] },
	/// Around a closed loop of waypoints.
	Loop {
		waypoints: Vec<GridPos>,
		#[serde(default)]
		direction: LoopDirection,
	},
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoopDirection {
	#[default]
	Cw,
	Ccw,
}

/// A key hint for the level intro screen.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CommandHint {
	pub key: String,
	pub desc: String,
}

/// Narrative text for a level (`lore.json`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Lore {
	pub title: Option<String>,
	pub description: Option<String>,
	pub objective: Option<String>,
	pub quote: Option<String>,
	pub victory_quote: Option<String>,
}

impl Lore {
	/// Reads `path`, returning `None` when the file does not exist.
	pub fn load_optional(path: &Path) -> Result<Option<Self>> {
		let text = match fs::read_to_string(path) {
			Ok(text) => text,
			Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
			Err(e) => return Err(LevelError::io(path, e)),
		};
		serde_json::from_str(&text)
			.map(Some)
			.map_err(|error| LevelError::Lore {
				path: path.to_path_buf(),
				error,
			})
	}
}
