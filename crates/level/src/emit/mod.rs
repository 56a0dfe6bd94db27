//! Emitters for the generated `.vim` level files.

use std::fmt;

use crate::definition::{LevelDefinition, Lore, SpyDefinition};
use crate::manifest::ManifestEntry;
use crate::maze::Maze;
use crate::patrol::{RouteError, RouteVector, patrol_route, spawn_position, walk_route};
use crate::vim::VimValue;

const SPIES_HEADER: &[&str] = &[
	"\" Spy patrol data for this level",
	"\" Generated by escape build - do not edit manually",
	"\" Format: Vim list - use eval(join(readfile(...), \"\")) to parse",
];

/// A route problem attached to the spy it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpyIssue {
	pub spy: String,
	pub error: RouteError,
}

impl fmt::Display for SpyIssue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}: {}", self.spy, self.error)
	}
}

/// Renders `meta.vim`: one dict, one key per continuation line.
///
/// Cursor keys are omitted when the definition leaves them out, so the
/// validator reports them as missing rather than malformed.
pub fn meta_vim(def: &LevelDefinition, lore: &Lore) -> String {
	let mut entries: Vec<(&str, VimValue)> = vec![
		("title", lore.title.as_ref().into()),
		("description", lore.description.as_ref().into()),
		("objective", lore.objective.as_ref().into()),
		("quote", lore.quote.as_ref().into()),
		("victory_quote", lore.victory_quote.as_ref().into()),
		(
			"maze",
			VimValue::dict([("lines", def.rows()), ("cols", def.cols())]),
		),
	];
	if let Some(start) = def.start {
		entries.push(("start_cursor", start.into()));
	}
	if let Some(exit) = def.exit {
		entries.push(("exit_cursor", exit.into()));
	}
	entries.push((
		"commands",
		VimValue::List(
			def.commands
				.iter()
				.map(|c| VimValue::dict([("key", &c.key), ("desc", &c.desc)]))
				.collect(),
		),
	));
	entries.push(("blocked_categories", def.blocked_categories.clone().into()));
	entries.push(("features", def.features.clone().into()));

	let mut out = String::from("{\n");
	for (key, value) in entries {
		out.push_str(&format!("\\ {}: {},\n", VimValue::from(key), value));
	}
	out.push_str("\\ }\n");
	out
}

/// Renders `spies.vim` and walks every route against `maze`.
///
/// The list sits on a single line so scripts can `eval()` it after joining
/// the file's lines. Route problems are returned alongside; the file is
/// still produced so the author can inspect it.
pub fn spies_vim(spies: &[SpyDefinition], maze: &Maze) -> (String, Vec<SpyIssue>) {
	let mut issues = Vec::new();
	let mut records = Vec::with_capacity(spies.len());

	for spy in spies {
		let route = patrol_route(spy);
		let spawn = spawn_position(spy);
		let walked = match spawn {
			Some(spawn) => walk_route(maze, spawn, &route),
			None => Err(RouteError::NoSpawn),
		};
		if let Err(error) = walked {
			issues.push(SpyIssue {
				spy: spy.id.clone(),
				error,
			});
		}

		records.push(VimValue::dict([
			("id", VimValue::from(&spy.id)),
			("spawn", spawn.into()),
			("route", route_value(&route)),
			("speed", VimValue::Float(spy.speed)),
		]));
	}

	let mut lines: Vec<String> = SPIES_HEADER.iter().map(|s| s.to_string()).collect();
	lines.push(VimValue::List(records).to_literal());
	(lines.join("\n"), issues)
}

fn route_value(route: &[RouteVector]) -> VimValue {
	VimValue::List(
		route
			.iter()
			.map(|v| VimValue::dict([("end", VimValue::from(v.end)), ("dir", VimValue::from(v.dir.as_str()))]))
			.collect(),
	)
}

/// Renders `manifest.vim`: a one-line list of `{'id', 'dir', 'title'}`.
pub fn manifest_vim(entries: &[ManifestEntry]) -> String {
	let list = VimValue::List(
		entries
			.iter()
			.map(|e| {
				VimValue::dict([
					("id", VimValue::from(e.id)),
					("dir", VimValue::from(&e.dir)),
					("title", VimValue::from(&e.title)),
				])
			})
			.collect(),
	);
	format!("{list}\n")
}

#[cfg(test)]
mod tests;
