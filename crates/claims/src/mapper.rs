//! Translation of protocol claim names to attribute names.
//!
//! A [`RenameTable`] is loaded once from configuration and never changes.
//! Claims without an entry are looked up under their own name.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::coerce::{ClaimValues, coerce};
use crate::store::AttributeStore;
use crate::value::OneOrMany;

/// Resolves claim names to the attribute names that back them.
pub trait AttributeToClaimMapper {
	/// Returns the attribute mapped to `claim`, if a mapping exists.
	fn mapped_attribute(&self, claim: &str) -> Option<&str>;

	/// Returns true if `claim` has a mapping.
	fn contains_mapped_attribute(&self, claim: &str) -> bool;
}

/// Maps `claim` to its attribute name, or returns it unchanged.
pub fn to_mapped_claim_name<'a, M>(mapper: &'a M, claim: &'a str) -> &'a str
where
	M: AttributeToClaimMapper + ?Sized,
{
	if mapper.contains_mapped_attribute(claim) {
		mapper.mapped_attribute(claim).unwrap_or(claim)
	} else {
		claim
	}
}

/// Resolves the coerced values released for `claim`.
///
/// Reads the mapped attribute from `store`. When the attribute is missing
/// entirely, `default` stands in for it; a missing default yields an empty
/// sequence. An attribute that is present always wins over the default.
pub fn map_claim<M, S>(mapper: &M, claim: &str, store: &S, default: Option<&OneOrMany>) -> ClaimValues
where
	M: AttributeToClaimMapper + ?Sized,
	S: AttributeStore + ?Sized,
{
	let attribute = to_mapped_claim_name(mapper, claim);
	let raw = if store.contains_attribute(attribute) { store.attribute(attribute) } else { default };

	tracing::trace!(claim, attribute, values = ?raw, "handling claim");
	coerce(raw.map(|values| values.as_slice().to_vec()).unwrap_or_default())
}

/// Immutable `claim -> attribute` rename table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RenameTable {
	entries: BTreeMap<String, String>,
}

impl RenameTable {
	/// An empty table; every claim maps to itself.
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns the attribute for `claim`, or `claim` itself when unmapped.
	pub fn map_claim_name<'a>(&'a self, claim: &'a str) -> &'a str {
		to_mapped_claim_name(self, claim)
	}

	/// Returns true iff `claim` is a key of the table.
	pub fn has_mapping(&self, claim: &str) -> bool {
		self.entries.contains_key(claim)
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Iterates `(claim, attribute)` pairs in claim order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.entries.iter().map(|(claim, attribute)| (claim.as_str(), attribute.as_str()))
	}
}

impl AttributeToClaimMapper for RenameTable {
	fn mapped_attribute(&self, claim: &str) -> Option<&str> {
		self.entries.get(claim).map(String::as_str)
	}

	fn contains_mapped_attribute(&self, claim: &str) -> bool {
		self.has_mapping(claim)
	}
}

impl<C: Into<String>, A: Into<String>> FromIterator<(C, A)> for RenameTable {
	fn from_iter<I: IntoIterator<Item = (C, A)>>(iter: I) -> Self {
		Self {
			entries: iter.into_iter().map(|(claim, attribute)| (claim.into(), attribute.into())).collect(),
		}
	}
}

#[cfg(test)]
mod tests;
