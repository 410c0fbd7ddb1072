//! Normalization of raw attribute values into claim values.
//!
//! Protocol booleans often arrive as strings, so any value whose textual form
//! reads `true` or `false` (ignoring case) is released as a boolean. Every
//! other value passes through with its original variant.

use crate::value::AttributeValue;

/// Values released for a single claim, in store order.
///
/// An empty sequence is a released claim with no values, which is distinct
/// from a claim that is absent from the release.
pub type ClaimValues = Vec<AttributeValue>;

/// Coerces a sequence of raw values, preserving order and duplicates.
pub fn coerce(raw: impl IntoIterator<Item = AttributeValue>) -> ClaimValues {
	raw.into_iter().map(coerce_value).collect()
}

/// Coerces a single raw value.
pub fn coerce_value(value: AttributeValue) -> AttributeValue {
	if let AttributeValue::Bool(_) = value {
		return value;
	}
	let parsed = value.string_form().as_deref().and_then(parse_bool);
	match parsed {
		Some(flag) => AttributeValue::Bool(flag),
		None => value,
	}
}

fn parse_bool(text: &str) -> Option<bool> {
	if text.eq_ignore_ascii_case("true") {
		Some(true)
	} else if text.eq_ignore_ascii_case("false") {
		Some(false)
	} else {
		None
	}
}
