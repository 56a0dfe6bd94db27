//! Build-time tooling for escape room levels.
//!
//! A level is authored as `level.toml` (plus optional `lore.json`) and
//! compiled into the files the editor scripts load:
//!
//! * `maze.txt`: the room, one text row per maze row,
//! * `meta.vim`: title, lore, cursor cells, and maze size,
//! * `spies.vim`: spy patrol routes, when the level has spies.
//!
//! The validator re-reads those files and checks them against each other,
//! and the manifest lists every level for the level picker.
//!
//! All positions are 1-indexed `[row, col]` pairs counted in characters.

/// Level compilation.
pub mod build;
/// Authored level definitions.
pub mod definition;
/// Vim literal emitters for level files.
pub mod emit;
/// Error types.
pub mod error;
/// Grid coordinates.
pub mod grid;
/// Level manifest.
pub mod manifest;
/// Maze grids.
pub mod maze;
/// Spy patrol routes.
pub mod patrol;
/// Generated-level validation.
pub mod validate;
/// Vim literal values.
pub mod vim;

pub use build::{BuildReport, build_level, render_preview};
pub use definition::{LevelDefinition, Lore, Opening, PatrolPattern, SpyDefinition, Wall};
pub use emit::SpyIssue;
pub use error::{LevelError, Result};
pub use grid::GridPos;
pub use manifest::{ManifestEntry, scan_levels, write_manifest};
pub use maze::{EXIT_MARKER, FLOOR, Maze, WALL, generate_maze};
pub use patrol::{Direction, RouteError, RouteVector, patrol_route, spawn_position, walk_route};
pub use validate::{Finding, Issue, validate_all, validate_level, validate_paths};
pub use vim::{VimValue, parse_literal};
