//! Spy patrol routes.
//!
//! A route is a list of vectors walked one cell at a time from the spawn.
//! Every vector moves in a straight line, and a valid route comes back to
//! where it started so the patrol can repeat forever.

use std::fmt;

use thiserror::Error;

use crate::definition::{LoopDirection, PatrolPattern, SpyDefinition};
use crate::grid::GridPos;
use crate::maze::Maze;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
	Up,
	Down,
	Left,
	Right,
}

impl Direction {
	pub fn parse(input: &str) -> Option<Self> {
		match input {
			"up" => Some(Self::Up),
			"down" => Some(Self::Down),
			"left" => Some(Self::Left),
			"right" => Some(Self::Right),
			_ => None,
		}
	}

	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Up => "up",
			Self::Down => "down",
			Self::Left => "left",
			Self::Right => "right",
		}
	}

	/// The neighbouring cell in this direction.
	pub const fn step(self, pos: GridPos) -> GridPos {
		match self {
			Self::Up => GridPos::new(pos.row - 1, pos.col),
			Self::Down => GridPos::new(pos.row + 1, pos.col),
			Self::Left => GridPos::new(pos.row, pos.col - 1),
			Self::Right => GridPos::new(pos.row, pos.col + 1),
		}
	}

	/// Direction of travel from `from` towards `to`.
	///
	/// Rows take precedence; a pure column change (or no change) resolves to
	/// left or right.
	pub fn towards(from: GridPos, to: GridPos) -> Self {
		if to.row < from.row {
			Self::Up
		} else if to.row > from.row {
			Self::Down
		} else if to.col < from.col {
			Self::Left
		} else {
			Self::Right
		}
	}

	/// Returns true if `to` lies on the ray from `from` in this direction.
	fn reaches(self, from: GridPos, to: GridPos) -> bool {
		match self {
			Self::Up => to.col == from.col && to.row <= from.row,
			Self::Down => to.col == from.col && to.row >= from.row,
			Self::Left => to.row == from.row && to.col <= from.col,
			Self::Right => to.row == from.row && to.col >= from.col,
		}
	}
}

impl fmt::Display for Direction {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// One straight leg of a patrol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteVector {
	pub end: GridPos,
	pub dir: Direction,
}

impl RouteVector {
	pub const fn new(end: GridPos, dir: Direction) -> Self {
		Self { end, dir }
	}
}

/// Builds the patrol vectors for a spy.
pub fn patrol_route(spy: &SpyDefinition) -> Vec<RouteVector> {
	match &spy.pattern {
		PatrolPattern::Horizontal { endpoints: [start, end] } => {
			let (out, back) = if end.col > start.col {
				(Direction::Right, Direction::Left)
			} else {
				(Direction::Left, Direction::Right)
			};
			vec![RouteVector::new(*end, out), RouteVector::new(*start, back)]
		}
		PatrolPattern::Vertical { endpoints: [start, end] } => {
			let (out, back) = if end.row > start.row {
				(Direction::Down, Direction::Up)
			} else {
				(Direction::Up, Direction::Down)
			};
			vec![RouteVector::new(*end, out), RouteVector::new(*start, back)]
		}
		PatrolPattern::Loop {
			waypoints,
			direction,
		} => {
			let mut points = waypoints.clone();
			// Counter-clockwise keeps the first waypoint (the default spawn) in front.
			if *direction == LoopDirection::Ccw && points.len() > 1 {
				points[1..].reverse();
			}
			(0..points.len())
				.map(|i| {
					let current = points[i];
					let next = points[(i + 1) % points.len()];
					RouteVector::new(next, Direction::towards(current, next))
				})
				.collect()
		}
	}
}

/// Where a spy starts: the explicit spawn, else the pattern's first point.
pub fn spawn_position(spy: &SpyDefinition) -> Option<GridPos> {
	if let Some(spawn) = spy.spawn {
		return Some(spawn);
	}
	match &spy.pattern {
		PatrolPattern::Horizontal { endpoints } | PatrolPattern::Vertical { endpoints } => {
			Some(endpoints[0])
		}
		PatrolPattern::Loop { waypoints, .. } => waypoints.first().copied(),
	}
}

/// First problem found while walking a route.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
	#[error("cannot determine spawn position")]
	NoSpawn,
	#[error("spawn {spawn} out of bounds")]
	SpawnOutOfBounds { spawn: GridPos },
	#[error("spawn {spawn} is inside a wall")]
	SpawnOnWall { spawn: GridPos },
	#[error("route leg {leg} heads {dir} from {from} but ends at {end}")]
	Misaligned {
		leg: usize,
		from: GridPos,
		end: GridPos,
		dir: Direction,
	},
	#[error("route goes out of bounds at {0}")]
	OutOfBounds(GridPos),
	#[error("route hits wall at {0}")]
	HitsWall(GridPos),
	#[error("route ends at {end} instead of spawn {spawn}")]
	DoesNotLoop { end: GridPos, spawn: GridPos },
}

/// Walks `route` from `spawn` and reports the first problem.
pub fn walk_route(maze: &Maze, spawn: GridPos, route: &[RouteVector]) -> Result<(), RouteError> {
	if !maze.contains(spawn) {
		return Err(RouteError::SpawnOutOfBounds { spawn });
	}
	if maze.is_wall(spawn) {
		return Err(RouteError::SpawnOnWall { spawn });
	}

	let mut pos = spawn;
	for (leg, vector) in route.iter().enumerate() {
		if !vector.dir.reaches(pos, vector.end) {
			return Err(RouteError::Misaligned {
				leg: leg + 1,
				from: pos,
				end: vector.end,
				dir: vector.dir,
			});
		}
		while pos != vector.end {
			pos = vector.dir.step(pos);
			if !maze.contains(pos) {
				return Err(RouteError::OutOfBounds(pos));
			}
			if maze.is_wall(pos) {
				return Err(RouteError::HitsWall(pos));
			}
		}
	}

	if pos != spawn {
		return Err(RouteError::DoesNotLoop { end: pos, spawn });
	}
	Ok(())
}
