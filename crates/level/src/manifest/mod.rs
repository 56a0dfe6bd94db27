//! The level manifest: every built level, in play order.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::definition::Lore;
use crate::emit::manifest_vim;
use crate::error::{LevelError, Result};
use crate::vim::parse_literal;

/// File name written into the levels directory by default.
pub const MANIFEST_FILE: &str = "manifest.vim";

/// One row of the level picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
	/// Number parsed from the directory name (`level07` is 7).
	pub id: u32,
	/// Directory name relative to the levels directory.
	pub dir: String,
	pub title: String,
}

/// Returns the number in a `levelNN` directory name.
fn level_number(name: &str) -> Option<u32> {
	let digits = name.strip_prefix("level")?;
	if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
		return None;
	}
	digits.parse().ok()
}

/// Lists the `levelNN` directories under `levels_dir` in numeric order.
pub fn scan_levels(levels_dir: &Path) -> Result<Vec<ManifestEntry>> {
	let read = fs::read_dir(levels_dir).map_err(|e| LevelError::io(levels_dir, e))?;
	let mut entries = Vec::new();
	for dirent in read {
		let dirent = dirent.map_err(|e| LevelError::io(levels_dir, e))?;
		let path = dirent.path();
		if !path.is_dir() {
			continue;
		}
		let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
			continue;
		};
		let Some(id) = level_number(name) else {
			continue;
		};
		let title = level_title(&path)?.unwrap_or_else(|| name.to_string());
		entries.push(ManifestEntry {
			id,
			dir: name.to_string(),
			title,
		});
	}
	entries.sort_by(|a, b| a.id.cmp(&b.id).then_with(|| a.dir.cmp(&b.dir)));
	Ok(entries)
}

/// Title from `lore.json`, falling back to the `title` key of `meta.vim`.
fn level_title(dir: &Path) -> Result<Option<String>> {
	if let Some(title) = Lore::load_optional(&dir.join("lore.json"))?.and_then(|l| l.title) {
		return Ok(Some(title));
	}

	let meta_path = dir.join("meta.vim");
	let text = match fs::read_to_string(&meta_path) {
		Ok(text) => text,
		Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
		Err(e) => return Err(LevelError::io(meta_path, e)),
	};
	match parse_literal(&text) {
		Ok(meta) => Ok(meta.get("title").and_then(|t| t.as_str()).map(str::to_string)),
		Err(error) => {
			warn!(path = %meta_path.display(), %error, "unreadable meta.vim, using directory name");
			Ok(None)
		}
	}
}

/// Scans `levels_dir` and writes the manifest.
///
/// `output` defaults to `manifest.vim` inside `levels_dir`. Returns the path
/// written.
pub fn write_manifest(levels_dir: &Path, output: Option<&Path>) -> Result<PathBuf> {
	let entries = scan_levels(levels_dir)?;
	let path = output.map_or_else(|| levels_dir.join(MANIFEST_FILE), Path::to_path_buf);
	fs::write(&path, manifest_vim(&entries)).map_err(|e| LevelError::io(&path, e))?;
	info!(path = %path.display(), levels = entries.len(), "wrote manifest");
	Ok(path)
}
