//! Component discovery for pluggable server behavior.
//!
//! Policies, mappers and other extensions register a static
//! [`ComponentDef`] with [`component!`]. The linker collects every
//! submission through `inventory`, and a [`ComponentRegistry`] answers three
//! queries over them, each bounded by a [`Namespace`]:
//!
//! - [`ComponentRegistry::find_subtypes`] - implementors of an interface or
//!   descendants of a class
//! - [`ComponentRegistry::find_by_annotations`] - types carrying any of a set
//!   of annotations
//! - [`ComponentRegistry::find_by_simple_name`] - a type by its unqualified
//!   name, ignoring case
//!
//! Results are ordered by qualified name. A registry never caches: each query
//! opens its own scan and releases it before returning.

pub mod def;
pub mod error;
mod macros;
pub mod namespace;
pub mod registry;
mod scan;

pub use def::{ComponentDef, ComponentDescriptor, ComponentHandle, ComponentReg, Factory, Instance, Loader, TypeKind, TypeRef};
pub use error::{DiscoveryError, LoadError, LoadFailure};
pub use namespace::Namespace;
pub use registry::{ComponentRegistry, Discovered};
pub use scan::ComponentSource;

#[doc(hidden)]
pub mod __private {
	pub use {inventory, paste};
}
