//! Scan-scoped view over a component source.
//!
//! A [`Scan`] snapshots the defs of a source once, orders them by qualified
//! name and indexes them for hierarchy walks. It is opened per query and
//! released on drop, so concurrent queries share nothing mutable.

use rustc_hash::{FxHashMap, FxHashSet};

use crate::def::{ComponentDef, ComponentReg, TypeKind, TypeRef};
use crate::namespace::Namespace;

/// Where a registry takes its component definitions from.
#[derive(Debug, Clone)]
pub enum ComponentSource {
	/// Defs submitted with [`component!`](crate::component) and collected at link time.
	Linked,
	/// An externally supplied catalog.
	Explicit(Vec<&'static ComponentDef>),
}

impl ComponentSource {
	fn collect(&self) -> Vec<&'static ComponentDef> {
		match self {
			Self::Linked => inventory::iter::<ComponentReg>.into_iter().map(|reg| reg.0).collect(),
			Self::Explicit(defs) => defs.clone(),
		}
	}
}

/// A single scan over a source, bounded by a namespace.
pub(crate) struct Scan {
	namespace: Namespace,
	/// Every def of the source in scan order; ancestry may leave the namespace.
	defs: Vec<&'static ComponentDef>,
	by_name: FxHashMap<&'static str, &'static ComponentDef>,
}

impl Scan {
	pub(crate) fn open(source: &ComponentSource, namespace: Namespace) -> Self {
		let mut defs = source.collect();
		// Stable sort keeps source order among duplicates so the first submitted wins.
		defs.sort_by(|a, b| a.qualified_name.cmp(b.qualified_name));
		defs.dedup_by(|dup, kept| {
			let same = dup.qualified_name == kept.qualified_name;
			if same {
				tracing::warn!(
					domain = "discovery",
					name = dup.qualified_name,
					"duplicate component registration; keeping the first",
				);
			}
			same
		});

		let by_name = defs.iter().map(|def| (def.qualified_name, *def)).collect();
		tracing::trace!(domain = "discovery", namespace = %namespace, total = defs.len(), "component scan opened");
		Self { namespace, defs, by_name }
	}

	pub(crate) fn namespace(&self) -> &Namespace {
		&self.namespace
	}

	/// Defs inside the namespace, in scan order.
	pub(crate) fn in_namespace(&self) -> impl Iterator<Item = &'static ComponentDef> + '_ {
		self.defs.iter().copied().filter(|def| self.namespace.contains(def.qualified_name))
	}

	/// Returns true if `def` descends from `target`.
	///
	/// Interface targets follow superclasses and implemented interfaces;
	/// class targets follow the superclass chain only.
	pub(crate) fn descends_from(&self, def: &ComponentDef, target: &TypeRef) -> bool {
		let follow_interfaces = target.is_interface();
		let mut pending: Vec<&'static str> = Vec::new();
		let mut seen: FxHashSet<&'static str> = FxHashSet::default();
		push_parents(def, follow_interfaces, &mut pending);

		while let Some(parent) = pending.pop() {
			if !seen.insert(parent) {
				continue;
			}
			if parent == target.name {
				return true;
			}
			if let Some(parent_def) = self.by_name.get(parent) {
				push_parents(parent_def, follow_interfaces, &mut pending);
			}
		}
		false
	}

	/// Returns true if `def` may appear in a subtype result for `target`.
	pub(crate) fn is_subtype_candidate(&self, def: &ComponentDef, target: &TypeRef) -> bool {
		if def.qualified_name == target.name {
			return false;
		}
		if target.is_interface() && def.kind == TypeKind::Interface {
			return false;
		}
		self.descends_from(def, target)
	}
}

impl Drop for Scan {
	fn drop(&mut self) {
		tracing::trace!(domain = "discovery", namespace = %self.namespace, "component scan released");
	}
}

fn push_parents(def: &ComponentDef, follow_interfaces: bool, pending: &mut Vec<&'static str>) {
	pending.extend(def.extends);
	if follow_interfaces {
		pending.extend(def.implements.iter().copied());
	}
}
