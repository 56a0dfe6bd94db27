use rstest::rstest;

use super::*;

struct Window {
	line: usize,
	col: usize,
}

impl CursorSource for Window {
	fn cursor(&self) -> CursorPosition {
		CursorPosition::from_host(self.line, self.col)
	}
}

#[rstest]
#[case("q", "quit", false)]
#[case(":q", "quit", false)]
#[case(":quit!", "quit", true)]
#[case("  :qa ", "quitall", false)]
#[case(":qall!", "quitall", true)]
#[case(":wq", "wq", false)]
#[case(":wq notes.txt", "wq", false)]
#[case(":x", "xit", false)]
#[case(":exit!", "exit", true)]
#[case(":qu", "quit", false)]
#[case(":qui!", "quit", true)]
#[case(":qal", "quitall", false)]
#[case(":quita", "quitall", false)]
#[case(":quital!", "quitall", true)]
#[case(":wqa", "wqall", false)]
#[case(":wqall", "wqall", false)]
#[case(":xi", "xit", false)]
#[case(":xa", "xall", false)]
#[case(":xall!", "xall", true)]
#[case(":2q", "quit", false)]
#[case(":%wq", "wq", false)]
#[case(":confirm q", "quit", false)]
#[case(":conf qa!", "quitall", true)]
fn parses_quit_family(#[case] line: &str, #[case] name: &str, #[case] force: bool) {
	let cmd = QuitCommand::parse(line).expect("quit command");
	assert_eq!(cmd.name, name);
	assert_eq!(cmd.force, force);
}

#[rstest]
#[case(":w")]
#[case(":e file.txt")]
#[case(":quitter")]
#[case(":ex")]
#[case(":confirm")]
#[case(":confirm w")]
#[case(":2")]
#[case(":")]
#[case("")]
fn ignores_other_commands(#[case] line: &str) {
	assert_eq!(QuitCommand::parse(line), None);
}

#[test]
fn unrestricted_outside_level() {
	let state = GameState::new();
	let host = Window { line: 9, col: 9 };
	let verdict = judge_quit(&state, &host);
	assert_eq!(verdict, QuitVerdict::Unrestricted);
	assert!(verdict.permits_quit());
}

#[test]
fn escaped_on_exit_cell() {
	let mut state = GameState::new();
	state.set_exit(5, 3);
	let host = Window { line: 5, col: 2 };
	let verdict = judge_quit(&state, &host);
	assert_eq!(verdict, QuitVerdict::Escaped);
	assert!(verdict.permits_quit());
}

#[test]
fn blocked_elsewhere() {
	let mut state = GameState::new();
	state.set_exit(5, 3);
	let host = Window { line: 5, col: 3 };
	let verdict = judge_quit(&state, &host);
	assert_eq!(
		verdict,
		QuitVerdict::Blocked {
			exit: ExitPosition::new(5, 3),
			cursor: CursorPosition::new(5, 4),
		}
	);
	assert!(!verdict.permits_quit());
}

#[test]
fn intercept_passes_non_quit_commands_through() {
	let mut state = GameState::new();
	state.set_exit(5, 3);
	assert_eq!(intercept(&state, &CursorPosition::new(1, 1), ":w"), None);
}

#[test]
fn forced_quit_is_still_judged() {
	let mut state = GameState::new();
	state.set_exit(5, 3);
	let verdict = intercept(&state, &CursorPosition::new(1, 1), ":q!");
	assert!(matches!(verdict, Some(QuitVerdict::Blocked { .. })));
}

#[rstest]
fn every_spelling_is_judged_in_a_level(
	#[values(":qu", ":qui", ":qal", ":quital", ":wqa", ":wqall", ":xa", ":xall", ":2q", ":confirm q")] line: &str,
) {
	let mut state = GameState::new();
	state.set_exit(5, 3);
	assert!(
		matches!(
			intercept(&state, &CursorPosition::new(1, 1), line),
			Some(QuitVerdict::Blocked { .. })
		),
		"{line}"
	);
}
