//! Error types for component loading and discovery.

use thiserror::Error;

/// Failure to materialize or instantiate a discovered component.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
	/// The component was registered but its implementation is not available.
	#[error("component {name} is unavailable: {reason}")]
	Unavailable {
		/// Qualified name of the component.
		name: &'static str,
		/// Why the loader could not provide the implementation.
		reason: String,
	},

	/// The component is an interface or abstract type and has no constructor.
	#[error("component {0} cannot be instantiated")]
	NotInstantiable(&'static str),

	/// The constructed instance is not of the requested Rust type.
	#[error("component {name} does not produce a {expected}")]
	TypeMismatch {
		/// Qualified name of the component.
		name: &'static str,
		/// Name of the requested Rust type.
		expected: &'static str,
	},
}

/// Errors reported by the strict discovery lookups.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiscoveryError {
	/// More than one type in the namespace carries the requested simple name.
	#[error("simple name {name:?} is ambiguous in {namespace:?}: {candidates:?}")]
	AmbiguousSimpleName {
		/// The requested simple name.
		name: String,
		/// The namespace that was scanned.
		namespace: String,
		/// Qualified names of every match, in scan order.
		candidates: Vec<&'static str>,
	},

	/// The single match failed to load.
	#[error(transparent)]
	Load(#[from] LoadError),
}

/// Records a matched descriptor that could not be loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadFailure {
	/// Qualified name of the component that failed.
	pub qualified_name: &'static str,
	/// The underlying load error.
	pub error: LoadError,
}

/// Result type for strict discovery lookups.
pub type Result<T> = std::result::Result<T, DiscoveryError>;
