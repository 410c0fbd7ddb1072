//! Attribute values as held by a principal's attribute store.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A single attribute value.
///
/// Numbers keep their variant through claim coercion, so an `Int` released
/// as a claim stays an `Int`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
	/// Boolean value.
	Bool(bool),
	/// Integer value.
	Int(i64),
	/// Floating point value.
	Float(f64),
	/// String value.
	String(String),
	/// Raw bytes from a store that carries binary attributes.
	#[serde(skip_deserializing)]
	Opaque(Vec<u8>),
}

impl AttributeValue {
	/// Returns the textual form used for claim coercion.
	///
	/// Opaque bytes have a textual form only when they are valid UTF-8.
	pub fn string_form(&self) -> Option<Cow<'_, str>> {
		match self {
			Self::Bool(v) => Some(Cow::Borrowed(if *v { "true" } else { "false" })),
			Self::Int(v) => Some(Cow::Owned(v.to_string())),
			Self::Float(v) => Some(Cow::Owned(v.to_string())),
			Self::String(v) => Some(Cow::Borrowed(v)),
			Self::Opaque(bytes) => std::str::from_utf8(bytes).ok().map(Cow::Borrowed),
		}
	}

	/// Returns the boolean value if this is a `Bool` variant.
	pub fn as_bool(&self) -> Option<bool> {
		match self {
			Self::Bool(v) => Some(*v),
			_ => None,
		}
	}

	/// Returns the string value if this is a `String` variant.
	pub fn as_str(&self) -> Option<&str> {
		match self {
			Self::String(v) => Some(v),
			_ => None,
		}
	}

	/// Returns true for `Int` and `Float`.
	pub fn is_number(&self) -> bool {
		matches!(self, Self::Int(_) | Self::Float(_))
	}

	/// Returns the type name of this value.
	pub fn type_name(&self) -> &'static str {
		match self {
			Self::Bool(_) => "bool",
			Self::Int(_) => "int",
			Self::Float(_) => "float",
			Self::String(_) => "string",
			Self::Opaque(_) => "opaque",
		}
	}
}

impl fmt::Display for AttributeValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match (self, self.string_form()) {
			(_, Some(text)) => f.write_str(&text),
			(Self::Opaque(bytes), None) => write!(f, "<{} opaque bytes>", bytes.len()),
			(_, None) => Ok(()),
		}
	}
}

impl From<bool> for AttributeValue {
	fn from(v: bool) -> Self {
		Self::Bool(v)
	}
}

impl From<i64> for AttributeValue {
	fn from(v: i64) -> Self {
		Self::Int(v)
	}
}

impl From<i32> for AttributeValue {
	fn from(v: i32) -> Self {
		Self::Int(v.into())
	}
}

impl From<f64> for AttributeValue {
	fn from(v: f64) -> Self {
		Self::Float(v)
	}
}

impl From<String> for AttributeValue {
	fn from(v: String) -> Self {
		Self::String(v)
	}
}

impl From<&str> for AttributeValue {
	fn from(v: &str) -> Self {
		Self::String(v.to_string())
	}
}

impl From<Vec<u8>> for AttributeValue {
	fn from(v: Vec<u8>) -> Self {
		Self::Opaque(v)
	}
}

/// An attribute's raw value: a single value or an ordered sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany {
	One(AttributeValue),
	Many(Vec<AttributeValue>),
}

impl OneOrMany {
	/// Views the value(s) as a slice; a single value is a one-element slice.
	pub fn as_slice(&self) -> &[AttributeValue] {
		match self {
			Self::One(value) => std::slice::from_ref(value),
			Self::Many(values) => values,
		}
	}

	/// Converts into an owned sequence.
	pub fn into_vec(self) -> Vec<AttributeValue> {
		match self {
			Self::One(value) => vec![value],
			Self::Many(values) => values,
		}
	}

	/// Builds a sequence from anything convertible to attribute values.
	pub fn many<T: Into<AttributeValue>>(values: impl IntoIterator<Item = T>) -> Self {
		Self::Many(values.into_iter().map(Into::into).collect())
	}
}

impl From<AttributeValue> for OneOrMany {
	fn from(value: AttributeValue) -> Self {
		Self::One(value)
	}
}

impl From<Vec<AttributeValue>> for OneOrMany {
	fn from(values: Vec<AttributeValue>) -> Self {
		Self::Many(values)
	}
}

macro_rules! one_from {
	($($ty:ty),* $(,)?) => {
		$(
			impl From<$ty> for OneOrMany {
				fn from(value: $ty) -> Self {
					Self::One(value.into())
				}
			}
		)*
	};
}

one_from!(bool, i64, i32, f64, String, &str);
