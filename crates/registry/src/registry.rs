//! Discovery queries over a component source.

use rustc_hash::FxHashSet;

use crate::def::{ComponentDef, ComponentHandle, TypeRef};
use crate::error::{DiscoveryError, LoadFailure, Result};
use crate::namespace::Namespace;
use crate::scan::{ComponentSource, Scan};

/// Outcome of a discovery query that loads a batch of components.
///
/// Load failures are recorded per descriptor and never abort the batch.
#[derive(Debug, Default, Clone)]
pub struct Discovered {
	/// Successfully loaded components, in scan order.
	pub components: Vec<ComponentHandle>,
	/// Matched components that failed to load.
	pub failures: Vec<LoadFailure>,
}

impl Discovered {
	/// Returns true if nothing was loaded.
	pub fn is_empty(&self) -> bool {
		self.components.is_empty()
	}

	/// Number of loaded components.
	pub fn len(&self) -> usize {
		self.components.len()
	}

	/// Iterates the qualified names of the loaded components.
	pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
		self.components.iter().map(ComponentHandle::qualified_name)
	}

	/// Finds a loaded component by qualified name.
	pub fn get(&self, qualified_name: &str) -> Option<&ComponentHandle> {
		self.components.iter().find(|handle| handle.qualified_name() == qualified_name)
	}
}

/// Locates component implementations by supertype, annotation or simple name.
///
/// The registry holds no scan state. Every query opens a fresh scan over its
/// source, so callers that want to reuse results own the caching.
#[derive(Debug, Clone)]
pub struct ComponentRegistry {
	source: ComponentSource,
}

impl ComponentRegistry {
	/// Registry over every def submitted with [`component!`](crate::component).
	pub fn linked() -> Self {
		Self {
			source: ComponentSource::Linked,
		}
	}

	/// Registry over an explicit catalog of defs.
	pub fn from_defs(defs: impl IntoIterator<Item = &'static ComponentDef>) -> Self {
		Self {
			source: ComponentSource::Explicit(defs.into_iter().collect()),
		}
	}

	/// Finds every type below `namespace` that extends or implements `super_type`.
	///
	/// For an interface, returns the concrete and abstract types implementing it
	/// (directly, through a superclass, or through a sub-interface). For a
	/// class, returns every type whose superclass chain includes it. The super
	/// type itself is never returned.
	pub fn find_subtypes(&self, super_type: TypeRef, namespace: impl Into<Namespace>) -> Discovered {
		let scan = Scan::open(&self.source, namespace.into());
		let matched = scan.in_namespace().filter(|def| scan.is_subtype_candidate(def, &super_type));
		let discovered = load_all(matched);
		tracing::debug!(
			domain = "discovery",
			namespace = %scan.namespace(),
			super_type = super_type.name,
			found = discovered.len(),
			failed = discovered.failures.len(),
			"subtype scan complete",
		);
		discovered
	}

	/// Finds every type below `namespace` carrying at least one of `annotations`.
	///
	/// Types carrying several of the annotations appear once.
	pub fn find_by_annotations<'a>(&self, annotations: impl IntoIterator<Item = &'a str>, namespace: impl Into<Namespace>) -> Discovered {
		let wanted: FxHashSet<&str> = annotations.into_iter().collect();
		let scan = Scan::open(&self.source, namespace.into());
		let matched = scan
			.in_namespace()
			.filter(|def| def.annotations.iter().any(|annotation| wanted.contains(annotation)));
		let discovered = load_all(matched);
		tracing::debug!(
			domain = "discovery",
			namespace = %scan.namespace(),
			annotations = wanted.len(),
			found = discovered.len(),
			failed = discovered.failures.len(),
			"annotation scan complete",
		);
		discovered
	}

	/// Finds the first type below `namespace` whose simple name matches `name`, ignoring case.
	///
	/// Scan order is lexicographic by qualified name, so when several
	/// subpackages define the same simple name the result is the
	/// lexicographically first. A match that fails to load is logged and
	/// yields `None`.
	pub fn find_by_simple_name(&self, name: &str, namespace: impl Into<Namespace>) -> Option<ComponentHandle> {
		let scan = Scan::open(&self.source, namespace.into());
		let def = scan.in_namespace().find(|def| matches_simple_name(def, name))?;
		match def.load() {
			Ok(handle) => Some(handle),
			Err(error) => {
				warn_load_failure(def, &error);
				None
			}
		}
	}

	/// Like [`find_by_simple_name`](Self::find_by_simple_name), but reports
	/// an ambiguous simple name instead of picking the first match.
	pub fn find_by_simple_name_strict(&self, name: &str, namespace: impl Into<Namespace>) -> Result<Option<ComponentHandle>> {
		let scan = Scan::open(&self.source, namespace.into());
		let candidates: Vec<&'static ComponentDef> = scan.in_namespace().filter(|def| matches_simple_name(def, name)).collect();
		match candidates.as_slice() {
			[] => Ok(None),
			[def] => Ok(Some(def.load()?)),
			_ => Err(DiscoveryError::AmbiguousSimpleName {
				name: name.to_string(),
				namespace: scan.namespace().as_str().to_string(),
				candidates: candidates.iter().map(|def| def.qualified_name).collect(),
			}),
		}
	}
}

impl Default for ComponentRegistry {
	fn default() -> Self {
		Self::linked()
	}
}

fn matches_simple_name(def: &ComponentDef, name: &str) -> bool {
	let simple = crate::namespace::simple_name(def.qualified_name);
	simple.chars().flat_map(char::to_lowercase).eq(name.chars().flat_map(char::to_lowercase))
}

fn load_all(defs: impl Iterator<Item = &'static ComponentDef>) -> Discovered {
	let mut discovered = Discovered::default();
	for def in defs {
		match def.load() {
			Ok(handle) => discovered.components.push(handle),
			Err(error) => {
				warn_load_failure(def, &error);
				discovered.failures.push(LoadFailure {
					qualified_name: def.qualified_name,
					error,
				});
			}
		}
	}
	discovered
}

fn warn_load_failure(def: &ComponentDef, error: &crate::error::LoadError) {
	tracing::warn!(
		domain = "discovery",
		name = def.qualified_name,
		%error,
		"failed to load discovered component; skipping",
	);
}
