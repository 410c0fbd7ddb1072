//! Component definitions, descriptors and loadable handles.
//!
//! Each pluggable type is described by a static [`ComponentDef`]. Defs are
//! either submitted through `inventory` with the [`component!`] macro and
//! collected at link time, or handed to a registry explicitly.
//!
//! [`component!`]: crate::component

use std::any::{Any, type_name};
use std::fmt;

use crate::error::LoadError;
use crate::namespace::simple_name;

/// Type-erased component instance.
pub type Instance = Box<dyn Any + Send + Sync>;

/// Constructs a fresh instance of a concrete component.
pub type Factory = fn() -> Instance;

/// Materializes a component's implementation.
///
/// Returns `Ok(None)` for types without a constructor (interfaces and
/// abstract types) and `Err` when the implementation is missing at load time.
pub type Loader = fn() -> Result<Option<Factory>, LoadError>;

/// How a type participates in the hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TypeKind {
	/// A concrete, instantiable type.
	Class,
	/// A type that may be extended but not instantiated.
	AbstractClass,
	/// A capability implemented by classes.
	Interface,
}

/// Reference to a supertype used as a discovery query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeRef {
	/// Qualified name of the referenced type.
	pub name: &'static str,
	/// Whether the reference is an interface or a class.
	pub kind: TypeKind,
}

impl TypeRef {
	/// References an interface.
	pub const fn interface(name: &'static str) -> Self {
		Self { name, kind: TypeKind::Interface }
	}

	/// References a concrete or abstract class.
	pub const fn class(name: &'static str) -> Self {
		Self { name, kind: TypeKind::Class }
	}

	/// Returns true if the referenced type is an interface.
	pub const fn is_interface(&self) -> bool {
		matches!(self.kind, TypeKind::Interface)
	}
}

/// Static registration record of one type.
pub struct ComponentDef {
	/// Fully qualified name, e.g. `acme::policies::EmailPolicy`.
	pub qualified_name: &'static str,
	/// Kind of type.
	pub kind: TypeKind,
	/// Direct superclass, if any.
	pub extends: Option<&'static str>,
	/// Directly implemented (or, for interfaces, extended) interfaces.
	pub implements: &'static [&'static str],
	/// Annotations carried by the type.
	pub annotations: &'static [&'static str],
	/// Materializes the implementation.
	pub loader: Loader,
}

impl ComponentDef {
	/// Builds the immutable descriptor for this definition.
	pub fn descriptor(&self) -> ComponentDescriptor {
		ComponentDescriptor {
			qualified_name: self.qualified_name,
			simple_name: simple_name(self.qualified_name),
			kind: self.kind,
			supertypes: self.extends.into_iter().chain(self.implements.iter().copied()).collect(),
			annotations: self.annotations,
		}
	}

	/// Returns true if the type carries `annotation`.
	pub fn has_annotation(&self, annotation: &str) -> bool {
		self.annotations.contains(&annotation)
	}

	/// Runs the loader and pairs the result with the descriptor.
	pub fn load(&self) -> Result<ComponentHandle, LoadError> {
		let factory = (self.loader)()?;
		Ok(ComponentHandle {
			descriptor: self.descriptor(),
			factory,
		})
	}
}

impl fmt::Debug for ComponentDef {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ComponentDef")
			.field("qualified_name", &self.qualified_name)
			.field("kind", &self.kind)
			.field("extends", &self.extends)
			.field("implements", &self.implements)
			.field("annotations", &self.annotations)
			.finish_non_exhaustive()
	}
}

/// Wrapper for `inventory::collect!`.
pub struct ComponentReg(pub &'static ComponentDef);

inventory::collect!(ComponentReg);

/// Identity of a discovered type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ComponentDescriptor {
	pub qualified_name: &'static str,
	pub simple_name: &'static str,
	pub kind: TypeKind,
	/// Declared direct supertypes: superclass first, then interfaces.
	pub supertypes: Vec<&'static str>,
	pub annotations: &'static [&'static str],
}

/// A discovered component whose implementation has been materialized.
#[derive(Clone)]
pub struct ComponentHandle {
	descriptor: ComponentDescriptor,
	factory: Option<Factory>,
}

impl ComponentHandle {
	/// The descriptor of the discovered type.
	pub fn descriptor(&self) -> &ComponentDescriptor {
		&self.descriptor
	}

	/// Qualified name of the discovered type.
	pub fn qualified_name(&self) -> &'static str {
		self.descriptor.qualified_name
	}

	/// Returns true if the component has a constructor.
	pub fn is_instantiable(&self) -> bool {
		self.factory.is_some()
	}

	/// Constructs a type-erased instance.
	pub fn instantiate(&self) -> Result<Instance, LoadError> {
		let factory = self.factory.ok_or(LoadError::NotInstantiable(self.descriptor.qualified_name))?;
		Ok(factory())
	}

	/// Constructs an instance and downcasts it to `T`.
	pub fn instantiate_as<T: Any>(&self) -> Result<T, LoadError> {
		self.instantiate()?
			.downcast::<T>()
			.map(|boxed| *boxed)
			.map_err(|_| LoadError::TypeMismatch {
				name: self.descriptor.qualified_name,
				expected: type_name::<T>(),
			})
	}
}

impl fmt::Debug for ComponentHandle {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ComponentHandle")
			.field("descriptor", &self.descriptor)
			.field("instantiable", &self.factory.is_some())
			.finish()
	}
}
