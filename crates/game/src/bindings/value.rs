/// A value crossing the script boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum ScriptValue {
	Null,
	Bool(bool),
	Number(i64),
	Float(f64),
	String(String),
	List(Vec<ScriptValue>),
}

impl ScriptValue {
	/// Type name used in error messages.
	pub const fn type_name(&self) -> &'static str {
		match self {
			Self::Null => "null",
			Self::Bool(_) => "bool",
			Self::Number(_) => "number",
			Self::Float(_) => "float",
			Self::String(_) => "string",
			Self::List(_) => "list",
		}
	}

	/// Returns the integer if this is a number.
	///
	/// Floats, strings, and booleans are rejected rather than coerced.
	pub const fn as_number(&self) -> Option<i64> {
		match self {
			Self::Number(n) => Some(*n),
			_ => None,
		}
	}

	/// Host truthiness: non-zero numbers and `true`.
	pub const fn is_truthy(&self) -> bool {
		match self {
			Self::Number(n) => *n != 0,
			Self::Bool(b) => *b,
			_ => false,
		}
	}
}

impl From<bool> for ScriptValue {
	fn from(value: bool) -> Self {
		Self::Number(i64::from(value))
	}
}

impl From<i64> for ScriptValue {
	fn from(value: i64) -> Self {
		Self::Number(value)
	}
}

impl From<&str> for ScriptValue {
	fn from(value: &str) -> Self {
		Self::String(value.to_string())
	}
}
