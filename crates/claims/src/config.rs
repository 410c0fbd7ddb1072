//! Claims configuration.
//!
//! Configuration is written in TOML:
//!
//! ```toml
//! [claims-map]
//! email = "mail"
//! email_verified = "mail_confirmed"
//!
//! [[scopes]]
//! name = "eduperson"
//! allowed-attributes = ["eduPersonAffiliation"]
//!
//! [scopes.defaults]
//! eduPersonAffiliation = "member"
//! ```
//!
//! `claims-map` renames claims to the attributes that back them. Each
//! `scopes` entry declares a custom scope released through a [`ScopePolicy`].

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::mapper::RenameTable;
use crate::policy::ScopePolicy;
use crate::scope::Scope;
use crate::value::OneOrMany;

/// Parsed claims configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct ClaimsConfig {
	/// Claim to attribute renames.
	#[serde(default)]
	pub claims_map: RenameTable,
	/// Custom scopes.
	#[serde(default)]
	pub scopes: Vec<CustomScopeConfig>,
}

/// A custom scope declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct CustomScopeConfig {
	pub name: String,
	pub allowed_attributes: Vec<String>,
	/// Values released when a claim's attribute is missing.
	#[serde(default)]
	pub defaults: BTreeMap<String, OneOrMany>,
}

impl ClaimsConfig {
	/// Parses and validates configuration from a TOML string.
	pub fn from_toml_str(content: &str) -> Result<Self> {
		let config: Self = toml::from_str(content)?;
		config.validate()?;
		Ok(config)
	}

	/// Reads, parses and validates a configuration file.
	pub fn load(path: &Path) -> Result<Self> {
		let content = std::fs::read_to_string(path).map_err(|error| ConfigError::Io {
			path: path.to_path_buf(),
			error,
		})?;
		Self::from_toml_str(&content)
	}

	/// Checks custom scope declarations.
	pub fn validate(&self) -> Result<()> {
		let mut seen = Vec::with_capacity(self.scopes.len());
		for scope in &self.scopes {
			if Scope::parse(&scope.name).is_standard() {
				return Err(ConfigError::StandardScopeOverride(scope.name.clone()));
			}
			if scope.allowed_attributes.is_empty() {
				return Err(ConfigError::EmptyScope(scope.name.clone()));
			}
			if seen.contains(&scope.name.as_str()) {
				return Err(ConfigError::DuplicateScope(scope.name.clone()));
			}
			seen.push(scope.name.as_str());
		}
		Ok(())
	}

	/// Builds a policy for each custom scope.
	pub fn custom_policies(&self) -> impl Iterator<Item = ScopePolicy> + '_ {
		self.scopes.iter().map(|scope| {
			ScopePolicy::new(Scope::Custom(scope.name.clone()), scope.allowed_attributes.iter().cloned()).with_defaults(scope.defaults.clone())
		})
	}
}
