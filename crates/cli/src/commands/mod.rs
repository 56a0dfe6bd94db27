//! Subcommand implementations. Output goes to the writer the caller passes
//! in; diagnostics go through `tracing`.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use escape_game::{CursorPosition, GameState, QuitVerdict, ScriptValue, call_function, judge_quit};
use escape_level::{Finding, VimValue, build_level, parse_literal, render_preview, validate_all, validate_paths, write_manifest};
use tracing::{debug, info};

use crate::cli::Command;
use crate::config::Config;

/// Whether a command found problems.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
	Success,
	/// The command ran but reported problems (exit status 1).
	Failure,
}

impl From<Outcome> for ExitCode {
	fn from(outcome: Outcome) -> Self {
		match outcome {
			Outcome::Success => ExitCode::SUCCESS,
			Outcome::Failure => ExitCode::FAILURE,
		}
	}
}

pub fn run(command: Command, config: &Config, out: &mut dyn Write) -> Result<Outcome> {
	match command {
		Command::Build {
			definitions,
			no_preview,
		} => build(&definitions, config.build.preview && !no_preview, out),
		Command::Validate { levels } => validate(&levels, &config.levels_dir, out),
		Command::Manifest { output } => manifest(&config.levels_dir, output.as_deref(), out),
		Command::CheckQuit { level, cursor } => check_quit(&level, cursor, out),
	}
}

fn build(definitions: &[PathBuf], preview: bool, out: &mut dyn Write) -> Result<Outcome> {
	let mut outcome = Outcome::Success;
	for path in definitions {
		let report = build_level(path).with_context(|| format!("failed to build {}", path.display()))?;

		for file in &report.written {
			writeln!(out, "Written: {}", file.display())?;
		}
		if !report.issues.is_empty() {
			writeln!(out, "VALIDATION ERRORS:")?;
			for issue in &report.issues {
				writeln!(out, "  - {issue}")?;
			}
		}
		writeln!(out, "=== Summary ===")?;
		writeln!(out, "{}", report.summary())?;

		if report.is_clean() {
			writeln!(out, "\n✓ All validations passed")?;
		} else {
			writeln!(out, "\n⚠ {} validation error(s) found!", report.issues.len())?;
			outcome = Outcome::Failure;
		}

		if preview {
			writeln!(out, "\n=== PREVIEW (S=start, Q=exit, 1-9=spy spawns) ===\n")?;
			writeln!(out, "{}\n", render_preview(&report.maze, &report.definition))?;
		}
	}
	Ok(outcome)
}

fn validate(levels: &[PathBuf], levels_dir: &Path, out: &mut dyn Write) -> Result<Outcome> {
	let findings: Vec<Finding> = if levels.is_empty() {
		validate_all(levels_dir).with_context(|| format!("failed to scan {}", levels_dir.display()))?
	} else {
		validate_paths(levels)
	};

	if findings.is_empty() {
		writeln!(out, "✓ All levels valid")?;
		return Ok(Outcome::Success);
	}
	writeln!(out, "VALIDATION ERRORS:")?;
	for finding in &findings {
		writeln!(out, "  - {finding}")?;
	}
	Ok(Outcome::Failure)
}

fn manifest(levels_dir: &Path, output: Option<&Path>, out: &mut dyn Write) -> Result<Outcome> {
	let path = write_manifest(levels_dir, output)
		.with_context(|| format!("failed to write manifest for {}", levels_dir.display()))?;
	writeln!(out, "Written: {}", path.display())?;
	Ok(Outcome::Success)
}

/// Arms the game from the level's `meta.vim` the way the level loader does,
/// then judges a quit from `cursor`.
fn check_quit(level: &Path, cursor: CursorPosition, out: &mut dyn Write) -> Result<Outcome> {
	let meta_path = level.join("meta.vim");
	let text = std::fs::read_to_string(&meta_path).with_context(|| format!("failed to read {}", meta_path.display()))?;
	let meta = parse_literal(&text).with_context(|| format!("failed to parse {}", meta_path.display()))?;

	let mut state = GameState::new();
	match meta.get("exit_cursor") {
		Some(VimValue::List(items)) if items.len() == 2 => {
			let args: Vec<ScriptValue> = items.iter().map(script_value).collect();
			call_function(&mut state, &cursor, "GameSetExit", &args)
				.with_context(|| format!("{}: bad exit_cursor", meta_path.display()))?;
		}
		Some(other) => bail!("{}: exit_cursor must be [row, col], got {other}", meta_path.display()),
		None => debug!(level = %level.display(), "no exit_cursor, level stays inactive"),
	}

	let active = call_function(&mut state, &cursor, "GameIsActive", &[])?;
	info!(level = %level.display(), exit = %state.exit(), active = active.is_truthy(), "level loaded");

	let verdict = judge_quit(&state, &cursor);
	match verdict {
		QuitVerdict::Unrestricted => writeln!(out, "No level active: quit allowed")?,
		QuitVerdict::Escaped => writeln!(out, "Cursor {cursor} is on the exit: escaped!")?,
		QuitVerdict::Blocked { exit, cursor } => {
			writeln!(out, "Quit blocked: cursor {cursor} is not on the exit {exit}")?;
		}
	}
	Ok(if verdict.permits_quit() {
		Outcome::Success
	} else {
		Outcome::Failure
	})
}

/// Carries a Vim value across the script boundary unchanged in kind, so a
/// non-number exit coordinate is rejected by the binding itself.
fn script_value(value: &VimValue) -> ScriptValue {
	match value {
		VimValue::Null => ScriptValue::Null,
		VimValue::Bool(b) => ScriptValue::Bool(*b),
		VimValue::Int(n) => ScriptValue::Number(*n),
		VimValue::Float(x) => ScriptValue::Float(*x),
		VimValue::Str(s) => ScriptValue::String(s.clone()),
		VimValue::List(items) => ScriptValue::List(items.iter().map(script_value).collect()),
		VimValue::Dict(_) => ScriptValue::String(value.to_literal()),
	}
}
