//! Path-prefix boundaries for discovery scans.
//!
//! Qualified names and namespaces are sequences of segments separated by `::`
//! (Rust module paths) or `.` (dotted package names). Matching compares whole
//! segments, so `acme::auth` contains `acme::auth::Foo` but not
//! `acme::authz::Foo`.

use std::fmt;

/// Splits a qualified path into its segments, accepting `::` and `.` separators.
pub(crate) fn segments(path: &str) -> impl Iterator<Item = &str> {
	path.split("::").flat_map(|part| part.split('.')).filter(|segment| !segment.is_empty())
}

/// Returns the last segment of a qualified name.
pub fn simple_name(qualified_name: &str) -> &str {
	segments(qualified_name).last().unwrap_or(qualified_name)
}

/// A segment-aligned prefix that bounds a discovery scan.
///
/// The empty namespace is the root and contains every qualified name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Namespace {
	raw: String,
	segments: Vec<String>,
}

impl Namespace {
	/// Parses a namespace from a `::`- or `.`-separated prefix.
	pub fn new(prefix: impl Into<String>) -> Self {
		let raw = prefix.into();
		let segments = segments(&raw).map(str::to_owned).collect();
		Self { raw, segments }
	}

	/// The root namespace.
	pub fn root() -> Self {
		Self::new("")
	}

	/// Returns true if this is the root namespace.
	pub fn is_root(&self) -> bool {
		self.segments.is_empty()
	}

	/// The prefix as supplied by the caller.
	pub fn as_str(&self) -> &str {
		&self.raw
	}

	/// Returns true if `qualified_name` lies strictly below this namespace.
	///
	/// A type is named by at least one segment after the prefix, so a
	/// qualified name equal to the namespace itself is not contained.
	pub fn contains(&self, qualified_name: &str) -> bool {
		let mut candidate = segments(qualified_name);
		for expected in &self.segments {
			match candidate.next() {
				Some(segment) if segment == expected => {}
				_ => return false,
			}
		}
		candidate.next().is_some()
	}
}

impl From<&str> for Namespace {
	fn from(prefix: &str) -> Self {
		Self::new(prefix)
	}
}

impl From<String> for Namespace {
	fn from(prefix: String) -> Self {
		Self::new(prefix)
	}
}

impl From<&Namespace> for Namespace {
	fn from(namespace: &Namespace) -> Self {
		namespace.clone()
	}
}

impl fmt::Display for Namespace {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.is_root() { f.write_str("<root>") } else { f.write_str(&self.raw) }
	}
}

#[cfg(test)]
mod tests {
	use rstest::rstest;

	use super::*;

	#[rstest]
	#[case("acme", "acme::a::Foo", true)]
	#[case("acme", "acme.a.Foo", true)]
	#[case("acme.a", "acme::a::Foo", true)]
	#[case("acme::a", "acme::b::Foo", false)]
	#[case("acme::auth", "acme::authz::Foo", false)]
	#[case("acme::a::Foo", "acme::a::Foo", false)]
	#[case("", "Foo", true)]
	#[case("acme", "other::Foo", false)]
	fn test_namespace_contains(#[case] namespace: &str, #[case] name: &str, #[case] expected: bool) {
		assert_eq!(Namespace::new(namespace).contains(name), expected);
	}

	#[test]
	fn test_simple_name() {
		assert_eq!(simple_name("acme::a::Foo"), "Foo");
		assert_eq!(simple_name("com.example.b.Foo"), "Foo");
		assert_eq!(simple_name("Foo"), "Foo");
	}

	#[test]
	fn test_root_display() {
		assert!(Namespace::root().is_root());
		assert_eq!(Namespace::root().to_string(), "<root>");
		assert_eq!(Namespace::new("acme::a").to_string(), "acme::a");
	}
}
