//! Scopes a relying party can request.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A named bundle of claims.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Scope {
	OpenId,
	Profile,
	Email,
	Address,
	Phone,
	OfflineAccess,
	/// A deployment-defined scope.
	Custom(String),
}

impl Scope {
	/// The standard OpenID Connect scopes.
	pub const STANDARD: [Scope; 6] = [
		Scope::OpenId,
		Scope::Profile,
		Scope::Email,
		Scope::Address,
		Scope::Phone,
		Scope::OfflineAccess,
	];

	/// Returns the protocol name of the scope.
	pub fn as_str(&self) -> &str {
		match self {
			Self::OpenId => "openid",
			Self::Profile => "profile",
			Self::Email => "email",
			Self::Address => "address",
			Self::Phone => "phone",
			Self::OfflineAccess => "offline_access",
			Self::Custom(name) => name,
		}
	}

	/// Returns true for the standard OpenID Connect scopes.
	pub fn is_standard(&self) -> bool {
		!matches!(self, Self::Custom(_))
	}

	/// Parses a scope name; unknown names become [`Scope::Custom`].
	pub fn parse(name: &str) -> Self {
		match name {
			"openid" => Self::OpenId,
			"profile" => Self::Profile,
			"email" => Self::Email,
			"address" => Self::Address,
			"phone" => Self::Phone,
			"offline_access" => Self::OfflineAccess,
			other => Self::Custom(other.to_string()),
		}
	}

	/// Parses a space-separated scope parameter, dropping repeats.
	pub fn parse_list(scopes: &str) -> Vec<Scope> {
		let mut parsed: Vec<Scope> = Vec::new();
		for scope in scopes.split_whitespace().map(Self::parse) {
			if !parsed.contains(&scope) {
				parsed.push(scope);
			}
		}
		parsed
	}
}

impl From<String> for Scope {
	fn from(name: String) -> Self {
		Self::parse(&name)
	}
}

impl From<&str> for Scope {
	fn from(name: &str) -> Self {
		Self::parse(name)
	}
}

impl From<Scope> for String {
	fn from(scope: Scope) -> Self {
		scope.as_str().to_string()
	}
}

impl fmt::Display for Scope {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}
