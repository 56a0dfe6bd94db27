use indexmap::IndexMap;
use thiserror::Error;

use super::VimValue;

/// Failure while reading a Vim literal. Offsets count characters in the
/// joined expression (after comment and continuation handling).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
	#[error("no expression found")]
	Empty,
	#[error("unexpected end of input")]
	UnexpectedEnd,
	#[error("unexpected '{found}' at offset {offset}")]
	UnexpectedChar { found: char, offset: usize },
	#[error("unterminated string starting at offset {offset}")]
	UnterminatedString { offset: usize },
	#[error("invalid number '{text}' at offset {offset}")]
	InvalidNumber { text: String, offset: usize },
	#[error("unknown value '{text}' at offset {offset}")]
	UnknownSymbol { text: String, offset: usize },
	#[error("dictionary key at offset {offset} must be a string or number")]
	InvalidKey { offset: usize },
	#[error("trailing input at offset {offset}")]
	TrailingInput { offset: usize },
	#[error("nesting deeper than {max} levels at offset {offset}", max = MAX_DEPTH)]
	TooDeep { offset: usize },
}

/// Deepest list/dict nesting accepted before parsing gives up.
pub const MAX_DEPTH: usize = 128;

/// Parses a Vim literal as it appears in a level file.
///
/// Leading blank and `"` comment lines are skipped. A line whose first
/// non-blank character is `\` continues the previous line.
pub fn parse_literal(text: &str) -> Result<VimValue, ParseError> {
	let source = join_continuations(text);
	let mut parser = Parser {
		chars: source.chars().collect(),
		pos: 0,
		depth: 0,
	};
	parser.skip_ws();
	if parser.at_end() {
		return Err(ParseError::Empty);
	}
	let value = parser.value()?;
	parser.skip_ws();
	if !parser.at_end() {
		return Err(ParseError::TrailingInput { offset: parser.pos });
	}
	Ok(value)
}

fn join_continuations(text: &str) -> String {
	let mut joined: Vec<String> = Vec::new();
	for line in text.lines() {
		let trimmed = line.trim_start();
		if joined.is_empty() && (trimmed.is_empty() || trimmed.starts_with('"')) {
			continue;
		}
		match trimmed.strip_prefix('\\') {
			Some(rest) => match joined.last_mut() {
				Some(last) => {
					last.push(' ');
					last.push_str(rest.trim_start());
				}
				None => joined.push(rest.trim_start().to_string()),
			},
			None => joined.push(line.to_string()),
		}
	}
	joined.join("\n")
}

struct Parser {
	chars: Vec<char>,
	pos: usize,
	/// Open lists and dicts around the current position.
	depth: usize,
}

impl Parser {
	fn at_end(&self) -> bool {
		self.pos >= self.chars.len()
	}

	fn peek(&self) -> Option<char> {
		self.chars.get(self.pos).copied()
	}

	fn bump(&mut self) -> Option<char> {
		let ch = self.peek()?;
		self.pos += 1;
		Some(ch)
	}

	fn skip_ws(&mut self) {
		while self.peek().is_some_and(char::is_whitespace) {
			self.pos += 1;
		}
	}

	fn expect(&mut self, want: char) -> Result<(), ParseError> {
		self.skip_ws();
		match self.bump() {
			Some(ch) if ch == want => Ok(()),
			Some(found) => Err(ParseError::UnexpectedChar {
				found,
				offset: self.pos - 1,
			}),
			None => Err(ParseError::UnexpectedEnd),
		}
	}

	fn value(&mut self) -> Result<VimValue, ParseError> {
		self.skip_ws();
		match self.peek() {
			None => Err(ParseError::UnexpectedEnd),
			Some('[') => self.nested(Self::list),
			Some('{') => self.nested(Self::dict),
			Some('\'') => self.single_quoted().map(VimValue::Str),
			Some('"') => self.double_quoted().map(VimValue::Str),
			Some(c) if c.is_ascii_digit() || c == '-' || c == '+' => self.number(),
			Some(c) if c.is_ascii_alphabetic() => self.symbol(),
			Some(found) => Err(ParseError::UnexpectedChar {
				found,
				offset: self.pos,
			}),
		}
	}

	fn nested(&mut self, parse: fn(&mut Self) -> Result<VimValue, ParseError>) -> Result<VimValue, ParseError> {
		if self.depth >= MAX_DEPTH {
			return Err(ParseError::TooDeep { offset: self.pos });
		}
		self.depth += 1;
		let value = parse(self);
		self.depth -= 1;
		value
	}

	fn list(&mut self) -> Result<VimValue, ParseError> {
		self.expect('[')?;
		let mut items = Vec::new();
		loop {
			self.skip_ws();
			if self.peek() == Some(']') {
				self.pos += 1;
				return Ok(VimValue::List(items));
			}
			items.push(self.value()?);
			if !self.separator(']')? {
				return Ok(VimValue::List(items));
			}
		}
	}

	fn dict(&mut self) -> Result<VimValue, ParseError> {
		self.expect('{')?;
		let mut map = IndexMap::new();
		loop {
			self.skip_ws();
			if self.peek() == Some('}') {
				self.pos += 1;
				return Ok(VimValue::Dict(map));
			}
			let offset = self.pos;
			let key = match self.value()? {
				VimValue::Str(s) => s,
				VimValue::Int(n) => n.to_string(),
				_ => return Err(ParseError::InvalidKey { offset }),
			};
			self.expect(':')?;
			let value = self.value()?;
			map.insert(key, value);
			if !self.separator('}')? {
				return Ok(VimValue::Dict(map));
			}
		}
	}

	/// Consumes `,` (returning true to continue) or `close` (returning false).
	fn separator(&mut self, close: char) -> Result<bool, ParseError> {
		self.skip_ws();
		match self.bump() {
			Some(',') => Ok(true),
			Some(ch) if ch == close => Ok(false),
			Some(found) => Err(ParseError::UnexpectedChar {
				found,
				offset: self.pos - 1,
			}),
			None => Err(ParseError::UnexpectedEnd),
		}
	}

	fn single_quoted(&mut self) -> Result<String, ParseError> {
		let offset = self.pos;
		self.pos += 1;
		let mut out = String::new();
		loop {
			match self.bump() {
				None => return Err(ParseError::UnterminatedString { offset }),
				Some('\'') if self.peek() == Some('\'') => {
					self.pos += 1;
					out.push('\'');
				}
				Some('\'') => return Ok(out),
				Some(ch) => out.push(ch),
			}
		}
	}

	fn double_quoted(&mut self) -> Result<String, ParseError> {
		let offset = self.pos;
		self.pos += 1;
		let mut out = String::new();
		loop {
			match self.bump() {
				None => return Err(ParseError::UnterminatedString { offset }),
				Some('"') => return Ok(out),
				Some('\\') => match self.bump() {
					None => return Err(ParseError::UnterminatedString { offset }),
					Some('n') => out.push('\n'),
					Some('t') => out.push('\t'),
					Some('r') => out.push('\r'),
					Some('e') => out.push('\u{1b}'),
					Some(other) => out.push(other),
				},
				Some(ch) => out.push(ch),
			}
		}
	}

	fn number(&mut self) -> Result<VimValue, ParseError> {
		let start = self.pos;
		if matches!(self.peek(), Some('-' | '+')) {
			self.pos += 1;
		}
		self.digits();
		let mut is_float = false;
		if self.peek() == Some('.') && self.chars.get(self.pos + 1).is_some_and(char::is_ascii_digit) {
			is_float = true;
			self.pos += 1;
			self.digits();
			if matches!(self.peek(), Some('e' | 'E')) {
				self.pos += 1;
				if matches!(self.peek(), Some('-' | '+')) {
					self.pos += 1;
				}
				self.digits();
			}
		}

		let text: String = self.chars[start..self.pos].iter().collect();
		let invalid = || ParseError::InvalidNumber {
			text: text.clone(),
			offset: start,
		};
		if is_float {
			text.parse::<f64>().map(VimValue::Float).map_err(|_| invalid())
		} else {
			text.parse::<i64>().map(VimValue::Int).map_err(|_| invalid())
		}
	}

	fn digits(&mut self) {
		while self.peek().is_some_and(|c| c.is_ascii_digit()) {
			self.pos += 1;
		}
	}

	fn symbol(&mut self) -> Result<VimValue, ParseError> {
		let start = self.pos;
		while self.peek().is_some_and(|c| c.is_ascii_alphanumeric() || c == '_' || c == ':') {
			self.pos += 1;
		}
		let text: String = self.chars[start..self.pos].iter().collect();
		match text.as_str() {
			"v:null" | "v:none" => Ok(VimValue::Null),
			"v:true" => Ok(VimValue::Bool(true)),
			"v:false" => Ok(VimValue::Bool(false)),
			_ => Err(ParseError::UnknownSymbol {
				text,
				offset: start,
			}),
		}
	}
}
