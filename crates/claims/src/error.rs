//! Error types for claims configuration and release.

use std::path::PathBuf;

use thiserror::Error;

use crate::scope::Scope;

/// Errors that can occur when loading claims configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Error parsing TOML syntax or schema.
	#[error("TOML parse error: {0}")]
	Parse(#[from] toml::de::Error),

	/// Error reading a configuration file.
	#[error("I/O error reading {path}: {error}")]
	Io {
		/// Path to the file that failed to read.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},

	/// A custom scope declares no allowed attributes.
	#[error("scope {0:?} has no allowed attributes")]
	EmptyScope(String),

	/// A custom scope reuses the name of a standard scope.
	#[error("scope {0:?} is a standard scope and cannot be redefined")]
	StandardScopeOverride(String),

	/// The same custom scope is declared twice.
	#[error("scope {0:?} is declared more than once")]
	DuplicateScope(String),
}

/// Errors raised while releasing claims.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReleaseError {
	/// A policy allows claims it does not request attribute definitions for.
	#[error("scope {scope} allows claims without requested definitions: {missing:?}")]
	UncoveredAttributes {
		/// Scope of the offending policy.
		scope: Scope,
		/// Allowed claims missing from the requested definitions.
		missing: Vec<String>,
	},
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
