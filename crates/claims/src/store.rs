//! Read-only access to a principal's attributes.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use serde::{Deserialize, Serialize};

use crate::value::OneOrMany;

/// Maps attribute names to one or many values.
///
/// Implemented by whatever the principal-resolution layer hands over; claim
/// resolution only ever reads from it.
pub trait AttributeStore {
	/// Returns the raw value(s) of `name`, if the attribute exists.
	fn attribute(&self, name: &str) -> Option<&OneOrMany>;

	/// Returns true if the attribute exists, even with an empty sequence.
	fn contains_attribute(&self, name: &str) -> bool {
		self.attribute(name).is_some()
	}
}

impl<S: BuildHasher> AttributeStore for HashMap<String, OneOrMany, S> {
	fn attribute(&self, name: &str) -> Option<&OneOrMany> {
		self.get(name)
	}
}

impl AttributeStore for BTreeMap<String, OneOrMany> {
	fn attribute(&self, name: &str) -> Option<&OneOrMany> {
		self.get(name)
	}
}

impl<T: AttributeStore + ?Sized> AttributeStore for &T {
	fn attribute(&self, name: &str) -> Option<&OneOrMany> {
		(**self).attribute(name)
	}
}

/// An authenticated principal and its resolved attributes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Principal {
	pub id: String,
	#[serde(default)]
	pub attributes: BTreeMap<String, OneOrMany>,
}

impl Principal {
	/// Creates a principal with no attributes.
	pub fn new(id: impl Into<String>) -> Self {
		Self {
			id: id.into(),
			attributes: BTreeMap::new(),
		}
	}

	/// Adds or replaces an attribute.
	pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<OneOrMany>) -> Self {
		self.attributes.insert(name.into(), value.into());
		self
	}
}

impl AttributeStore for Principal {
	fn attribute(&self, name: &str) -> Option<&OneOrMany> {
		self.attributes.get(name)
	}
}
