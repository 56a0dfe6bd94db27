//! Vim literal values.
//!
//! Level metadata is stored as Vim expressions so the editor scripts can
//! `eval()` it directly. [`VimValue`] covers the subset the level files use,
//! renders it as a literal, and [`parse_literal`] reads it back.

use std::fmt::{self, Write};

use indexmap::IndexMap;

use crate::grid::GridPos;

mod parse;

pub use parse::{MAX_DEPTH, ParseError, parse_literal};

/// A Vim value: the data shapes found in level files.
#[derive(Debug, Clone, PartialEq)]
pub enum VimValue {
	Null,
	Bool(bool),
	Int(i64),
	Float(f64),
	Str(String),
	List(Vec<VimValue>),
	/// Keys keep insertion order so emitted files are stable.
	Dict(IndexMap<String, VimValue>),
}

impl VimValue {
	/// Builds a dict from `(key, value)` pairs.
	pub fn dict<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
	where
		K: Into<String>,
		V: Into<VimValue>,
	{
		Self::Dict(entries.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
	}

	/// Looks up `key` if this is a dict.
	pub fn get(&self, key: &str) -> Option<&VimValue> {
		match self {
			Self::Dict(map) => map.get(key),
			_ => None,
		}
	}

	pub fn as_int(&self) -> Option<i64> {
		match self {
			Self::Int(n) => Some(*n),
			_ => None,
		}
	}

	pub fn as_str(&self) -> Option<&str> {
		match self {
			Self::Str(s) => Some(s),
			_ => None,
		}
	}

	pub fn as_list(&self) -> Option<&[VimValue]> {
		match self {
			Self::List(items) => Some(items),
			_ => None,
		}
	}

	pub fn as_dict(&self) -> Option<&IndexMap<String, VimValue>> {
		match self {
			Self::Dict(map) => Some(map),
			_ => None,
		}
	}

	/// Reads a `[row, col]` pair of integers.
	pub fn as_pos(&self) -> Option<GridPos> {
		match self.as_list()? {
			[row, col] => Some(GridPos::new(row.as_int()?, col.as_int()?)),
			_ => None,
		}
	}

	/// Renders the value as a one-line Vim literal.
	pub fn to_literal(&self) -> String {
		let mut out = String::new();
		self.write_literal(&mut out);
		out
	}

	fn write_literal(&self, out: &mut String) {
		match self {
			Self::Null => out.push_str("v:null"),
			Self::Bool(true) => out.push_str("v:true"),
			Self::Bool(false) => out.push_str("v:false"),
			Self::Int(n) => {
				let _ = write!(out, "{n}");
			}
			Self::Float(x) => out.push_str(&format_float(*x)),
			Self::Str(s) => out.push_str(&quote_string(s)),
			Self::List(items) => {
				out.push('[');
				for (i, item) in items.iter().enumerate() {
					if i > 0 {
						out.push_str(", ");
					}
					item.write_literal(out);
				}
				out.push(']');
			}
			Self::Dict(map) => {
				out.push('{');
				for (i, (key, value)) in map.iter().enumerate() {
					if i > 0 {
						out.push_str(", ");
					}
					let _ = write!(out, "'{}': ", escape_single_quoted(key.as_str()));
					value.write_literal(out);
				}
				out.push('}');
			}
		}
	}
}

impl fmt::Display for VimValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.to_literal())
	}
}

impl From<bool> for VimValue {
	fn from(value: bool) -> Self {
		Self::Bool(value)
	}
}

impl From<i64> for VimValue {
	fn from(value: i64) -> Self {
		Self::Int(value)
	}
}

impl From<u32> for VimValue {
	fn from(value: u32) -> Self {
		Self::Int(i64::from(value))
	}
}

impl From<usize> for VimValue {
	fn from(value: usize) -> Self {
		Self::Int(value as i64)
	}
}

impl From<f64> for VimValue {
	fn from(value: f64) -> Self {
		Self::Float(value)
	}
}

impl From<&str> for VimValue {
	fn from(value: &str) -> Self {
		Self::Str(value.to_string())
	}
}

impl From<String> for VimValue {
	fn from(value: String) -> Self {
		Self::Str(value)
	}
}

impl From<&String> for VimValue {
	fn from(value: &String) -> Self {
		Self::Str(value.clone())
	}
}

impl From<GridPos> for VimValue {
	fn from(pos: GridPos) -> Self {
		Self::List(vec![Self::Int(pos.row), Self::Int(pos.col)])
	}
}

impl<T: Into<VimValue>> From<Option<T>> for VimValue {
	fn from(value: Option<T>) -> Self {
		value.map_or(Self::Null, Into::into)
	}
}

impl<T: Into<VimValue>> From<Vec<T>> for VimValue {
	fn from(items: Vec<T>) -> Self {
		Self::List(items.into_iter().map(Into::into).collect())
	}
}

/// Escapes text for a single-quoted Vim string: `'` becomes `''`.
///
/// `None` yields an empty string.
pub fn escape_single_quoted<'a>(text: impl Into<Option<&'a str>>) -> String {
	text.into().map(|s| s.replace('\'', "''")).unwrap_or_default()
}

/// Escapes text for a double-quoted Vim string.
///
/// `None` yields an empty string.
pub fn escape_double_quoted<'a>(text: impl Into<Option<&'a str>>) -> String {
	let Some(text) = text.into() else {
		return String::new();
	};
	let mut out = String::with_capacity(text.len());
	for ch in text.chars() {
		match ch {
			'\\' => out.push_str("\\\\"),
			'"' => out.push_str("\\\""),
			'\n' => out.push_str("\\n"),
			'\r' => out.push_str("\\r"),
			'\t' => out.push_str("\\t"),
			other => out.push(other),
		}
	}
	out
}

/// Single quotes unless the text needs escapes only double quotes support.
fn quote_string(text: &str) -> String {
	if text.chars().any(char::is_control) {
		format!("\"{}\"", escape_double_quoted(text))
	} else {
		format!("'{}'", escape_single_quoted(text))
	}
}

/// Floats always carry a fractional part so Vim reads them back as Float.
fn format_float(x: f64) -> String {
	if x.is_finite() && x.fract() == 0.0 && x.abs() < 1e16 {
		format!("{x:.1}")
	} else {
		format!("{x}")
	}
}
