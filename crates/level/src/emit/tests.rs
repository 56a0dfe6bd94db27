use pretty_assertions::assert_eq;

use super::*;
use crate::grid::GridPos;
use crate::vim::parse_literal;

fn definition(toml: &str) -> LevelDefinition {
	LevelDefinition::from_toml_str(toml).unwrap()
}

#[test]
fn meta_layout() {
	let def = definition(
		r#"
		dimensions = [10, 20]
		start = [2, 2]
		exit = [9, 19]
		blocked_categories = ["insert"]
		commands = [{ key = "h", desc = "left" }]
		"#,
	);
	let lore = Lore {
		title: Some("Test Level".into()),
		description: Some("A test".into()),
		objective: Some("Win".into()),
		quote: Some("It's a trap".into()),
		victory_quote: Some("Victory!".into()),
	};
	let expected = "{\n\
		\\ 'title': 'Test Level',\n\
		\\ 'description': 'A test',\n\
		\\ 'objective': 'Win',\n\
		\\ 'quote': 'It''s a trap',\n\
		\\ 'victory_quote': 'Victory!',\n\
		\\ 'maze': {'lines': 10, 'cols': 20},\n\
		\\ 'start_cursor': [2, 2],\n\
		\\ 'exit_cursor': [9, 19],\n\
		\\ 'commands': [{'key': 'h', 'desc': 'left'}],\n\
		\\ 'blocked_categories': ['insert'],\n\
		\\ 'features': [],\n\
		\\ }\n";
	assert_eq!(meta_vim(&def, &lore), expected);
}

#[test]
fn meta_parses_back() {
	let def = definition(
		r#"
		dimensions = [25, 80]
		start = [5, 10]
		exit = [20, 70]
		"#,
	);
	let meta = parse_literal(&meta_vim(&def, &Lore::default())).unwrap();
	assert_eq!(meta.get("title"), Some(&VimValue::Null));
	assert_eq!(meta.get("start_cursor").and_then(VimValue::as_pos), Some(GridPos::new(5, 10)));
	assert_eq!(meta.get("exit_cursor").and_then(VimValue::as_pos), Some(GridPos::new(20, 70)));
	assert_eq!(
		meta.get("maze").and_then(|m| m.get("lines")).and_then(VimValue::as_int),
		Some(25)
	);
}

#[test]
fn meta_omits_missing_cursors() {
	let meta = meta_vim(&definition("dimensions = [5, 5]"), &Lore::default());
	assert!(!meta.contains("start_cursor"));
	assert!(!meta.contains("exit_cursor"));
}

#[test]
fn spies_basic() {
	let def = definition(
		r#"
		dimensions = [4, 10]
		[[spies]]
		id = "guard1"
		pattern = "horizontal"
		endpoints = [[2, 2], [2, 8]]
		speed = 1.0
		"#,
	);
	let maze = Maze::parse("██████████\n█        █\n█        █\n██████████");
	let (text, issues) = spies_vim(&def.spies, &maze);

	assert!(issues.is_empty(), "{issues:?}");
	let lines: Vec<&str> = text.lines().collect();
	assert_eq!(lines.len(), 4);
	assert!(lines[0].starts_with('"'));
	assert_eq!(
		lines[3],
		"[{'id': 'guard1', 'spawn': [2, 2], 'route': [{'end': [2, 8], 'dir': 'right'}, \
		 {'end': [2, 2], 'dir': 'left'}], 'speed': 1.0}]"
	);

	let parsed = parse_literal(&text).unwrap();
	assert_eq!(parsed.as_list().map(<[VimValue]>::len), Some(1));
}

#[test]
fn spies_report_bad_routes() {
	let def = definition(
		r#"
		dimensions = [3, 10]
		[[spies]]
		id = "bad_guard"
		pattern = "horizontal"
		endpoints = [[1, 1], [1, 5]]
		"#,
	);
	let maze = Maze::parse("██████████\n█        █\n██████████");
	let (text, issues) = spies_vim(&def.spies, &maze);

	assert_eq!(
		issues,
		vec![SpyIssue {
			spy: "bad_guard".into(),
			error: RouteError::SpawnOnWall {
				spawn: GridPos::new(1, 1)
			},
		}]
	);
	assert!(issues[0].to_string().starts_with("bad_guard: "));
	assert!(text.contains("'bad_guard'"));
}

#[test]
fn spies_without_spawn() {
	let def = definition(
		r#"
		dimensions = [3, 3]
		[[spies]]
		id = "ghost"
		pattern = "loop"
		waypoints = []
		"#,
	);
	let maze = Maze::parse("   \n   \n   ");
	let (text, issues) = spies_vim(&def.spies, &maze);
	assert_eq!(issues[0].error, RouteError::NoSpawn);
	assert!(text.contains("'spawn': v:null"));
}

#[test]
fn manifest_entries() {
	let entries = vec![
		ManifestEntry {
			id: 1,
			dir: "level01".into(),
			title: "First Level".into(),
		},
		ManifestEntry {
			id: 2,
			dir: "level02".into(),
			title: "It's a Test".into(),
		},
	];
	assert_eq!(
		manifest_vim(&entries),
		"[{'id': 1, 'dir': 'level01', 'title': 'First Level'}, \
		 {'id': 2, 'dir': 'level02', 'title': 'It''s a Test'}]\n"
	);
}

#[test]
fn empty_manifest() {
	assert_eq!(manifest_vim(&[]), "[]\n");
}
