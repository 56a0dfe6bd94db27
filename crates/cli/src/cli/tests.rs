use clap::CommandFactory;
use rstest::rstest;

use super::*;

#[rstest]
#[case("5:3", CursorPosition::new(5, 3))]
#[case(" 12 : 40 ", CursorPosition::new(12, 40))]
#[case("0:0", CursorPosition::new(0, 0))]
#[case("-1:2", CursorPosition::new(-1, 2))]
fn parses_cursor(#[case] input: &str, #[case] expected: CursorPosition) {
	assert_eq!(parse_cursor(input), Ok(expected));
}

#[rstest]
#[case("5")]
#[case("5:")]
#[case("a:3")]
#[case("5:3:1")]
fn rejects_bad_cursor(#[case] input: &str) {
	assert!(parse_cursor(input).is_err(), "{input}");
}

#[test]
fn schema_is_consistent() {
	Cli::command().debug_assert();
}

#[test]
fn parses_build() {
	let cli = Cli::try_parse_from(["escape", "build", "a/level.toml", "b/level.toml", "--no-preview"]).unwrap();
	assert_eq!(
		cli.command,
		Command::Build {
			definitions: vec![PathBuf::from("a/level.toml"), PathBuf::from("b/level.toml")],
			no_preview: true,
		}
	);
	assert!(!cli.verbose);
}

#[test]
fn build_needs_a_definition() {
	assert!(Cli::try_parse_from(["escape", "build"]).is_err());
}

#[test]
fn global_flags_after_subcommand() {
	let cli = Cli::try_parse_from(["escape", "validate", "-v", "--config", "my.toml"]).unwrap();
	assert!(cli.verbose);
	assert_eq!(cli.config, Some(PathBuf::from("my.toml")));
	assert_eq!(cli.command, Command::Validate { levels: vec![] });
}

#[test]
fn parses_check_quit() {
	let cli = Cli::try_parse_from(["escape", "check-quit", "levels/level01", "--cursor", "5:3"]).unwrap();
	assert_eq!(
		cli.command,
		Command::CheckQuit {
			level: PathBuf::from("levels/level01"),
			cursor: CursorPosition::new(5, 3),
		}
	);
}

#[test]
fn check_quit_requires_cursor() {
	assert!(Cli::try_parse_from(["escape", "check-quit", "levels/level01"]).is_err());
	assert!(Cli::try_parse_from(["escape", "check-quit", "levels/level01", "--cursor", "x"]).is_err());
}
