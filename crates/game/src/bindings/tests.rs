use rstest::rstest;

use super::*;
use crate::position::{CursorPosition, ExitPosition};

fn armed(row: i64, col: i64) -> GameState {
	let mut state = GameState::new();
	state.set_exit(row, col);
	state
}

#[rstest]
#[case("GameSetExit", GameFunction::SetExit)]
#[case("gamesetexit", GameFunction::SetExit)]
#[case("SetExit", GameFunction::SetExit)]
#[case("game_set_exit", GameFunction::SetExit)]
#[case("GameIsActive", GameFunction::IsActive)]
#[case("IsActive", GameFunction::IsActive)]
#[case("gameinlevel", GameFunction::IsActive)]
#[case("GameInLevel", GameFunction::IsActive)]
#[case("CheckQuit", GameFunction::CheckQuit)]
#[case("gamecheckquit", GameFunction::CheckQuit)]
fn lookup_accepts_every_spelling(#[case] name: &str, #[case] expected: GameFunction) {
	assert_eq!(GameFunction::lookup(name), Some(expected));
}

#[test]
fn lookup_rejects_unknown_names() {
	assert_eq!(GameFunction::lookup("GameReset"), None);
	assert_eq!(GameFunction::lookup(""), None);
}

#[test]
fn canonical_names_round_trip() {
	for function in GameFunction::ALL {
		assert_eq!(GameFunction::lookup(function.name()), Some(function));
	}
}

#[test]
fn set_exit_then_is_active() {
	let mut state = GameState::new();
	let host = CursorPosition::new(1, 1);
	let ret = call_function(
		&mut state,
		&host,
		"SetExit",
		&[ScriptValue::Number(5), ScriptValue::Number(3)],
	)
	.unwrap();
	assert_eq!(ret, ScriptValue::Null);

	let active = call_function(&mut state, &host, "IsActive", &[]).unwrap();
	assert_eq!(active, ScriptValue::Number(1));
}

#[rstest]
#[case(0, 0)]
#[case(-1, -1)]
fn set_exit_sentinel_deactivates(#[case] row: i64, #[case] col: i64) {
	let mut state = armed(5, 3);
	let host = CursorPosition::new(1, 1);
	call_function(
		&mut state,
		&host,
		"GameSetExit",
		&[ScriptValue::Number(row), ScriptValue::Number(col)],
	)
	.unwrap();
	let active = call_function(&mut state, &host, "GameIsActive", &[]).unwrap();
	assert_eq!(active, ScriptValue::Number(0));
}

#[test]
fn check_quit_uses_host_cursor() {
	let mut state = armed(5, 3);
	let on_exit = CursorPosition::from_host(5, 2);
	let elsewhere = CursorPosition::from_host(5, 3);

	let ret = call_function(&mut state, &on_exit, "CheckQuit", &[]).unwrap();
	assert!(ret.is_truthy());
	let ret = call_function(&mut state, &elsewhere, "CheckQuit", &[]).unwrap();
	assert!(!ret.is_truthy());
}

#[test]
fn check_quit_inactive_is_always_true() {
	let mut state = GameState::new();
	let ret = call_function(&mut state, &CursorPosition::new(40, 2), "CheckQuit", &[]).unwrap();
	assert_eq!(ret, ScriptValue::Number(1));
}

#[rstest]
#[case(vec![ScriptValue::from("x"), ScriptValue::Number(3)], 1, "string")]
#[case(vec![ScriptValue::Number(3), ScriptValue::Float(2.0)], 2, "float")]
#[case(vec![ScriptValue::Bool(true), ScriptValue::Number(3)], 1, "bool")]
#[case(vec![ScriptValue::Number(3), ScriptValue::Null], 2, "null")]
fn set_exit_requires_numbers(
	#[case] args: Vec<ScriptValue>,
	#[case] position: usize,
	#[case] found: &'static str,
) {
	let mut state = armed(5, 3);
	let err = call_function(&mut state, &CursorPosition::new(1, 1), "SetExit", &args).unwrap_err();
	assert_eq!(
		err,
		BindingError::NumberRequired {
			function: "GameSetExit",
			position,
			found,
		}
	);
	assert!(err.to_string().starts_with("Number required"));
	assert_eq!(state.exit(), ExitPosition::new(5, 3));
}

#[test]
fn wrong_argument_count_leaves_state() {
	let mut state = armed(5, 3);
	let err = call_function(
		&mut state,
		&CursorPosition::new(1, 1),
		"SetExit",
		&[ScriptValue::Number(1)],
	)
	.unwrap_err();
	assert_eq!(
		err,
		BindingError::ArgumentCount {
			function: "GameSetExit",
			expected: 2,
			got: 1,
		}
	);
	assert_eq!(state.exit(), ExitPosition::new(5, 3));
}

#[test]
fn unknown_function_is_reported() {
	let mut state = GameState::new();
	let err = call_function(&mut state, &CursorPosition::new(1, 1), "GameWarp", &[]).unwrap_err();
	assert_eq!(err, BindingError::UnknownFunction("GameWarp".into()));
}
