//! Policies for the standard OpenID Connect scopes.

use cairn_registry::component;

use super::{SCOPE_POLICY, SCOPE_POLICY_CLASS, STANDARD_SCOPE, ScopeAttributeReleasePolicy, ScopePolicy};
use crate::scope::Scope;
use crate::value::OneOrMany;

/// Declares a standard scope policy wrapping [`ScopePolicy`] and registers it.
macro_rules! standard_policy {
	($(#[$attr:meta])* $name:ident, $scope:expr, [$($claim:literal),+ $(,)?]) => {
		$(#[$attr])*
		#[derive(Debug, Clone, PartialEq)]
		pub struct $name(ScopePolicy);

		impl $name {
			/// Claims released under this scope.
			pub const CLAIMS: &'static [&'static str] = &[$($claim),+];

			pub fn new() -> Self {
				Self(ScopePolicy::new($scope, Self::CLAIMS.iter().copied()))
			}
		}

		impl Default for $name {
			fn default() -> Self {
				Self::new()
			}
		}

		impl ScopeAttributeReleasePolicy for $name {
			fn scope(&self) -> Scope {
				self.0.scope()
			}

			fn allowed_attributes(&self) -> &[String] {
				self.0.allowed_attributes()
			}

			fn claim_default(&self, claim: &str) -> Option<&OneOrMany> {
				self.0.claim_default(claim)
			}
		}

		component!($name, {
			kind: Class,
			extends: SCOPE_POLICY_CLASS,
			implements: &[SCOPE_POLICY.name],
			annotations: &[STANDARD_SCOPE],
			factory: || -> Box<dyn ScopeAttributeReleasePolicy> { Box::new($name::new()) },
		});
	};
}

standard_policy!(
	/// Releases the subject identifier.
	OpenIdScopePolicy,
	Scope::OpenId,
	["sub"]
);

standard_policy!(
	/// Releases the end-user's default profile claims.
	ProfileScopePolicy,
	Scope::Profile,
	[
		"name",
		"family_name",
		"given_name",
		"middle_name",
		"nickname",
		"preferred_username",
		"profile",
		"picture",
		"website",
		"gender",
		"birthdate",
		"zoneinfo",
		"locale",
		"updated_at",
	]
);

standard_policy!(
	/// Releases the end-user's email address and its verification status.
	EmailScopePolicy,
	Scope::Email,
	["email", "email_verified"]
);

standard_policy!(AddressScopePolicy, Scope::Address, ["address"]);

standard_policy!(PhoneScopePolicy, Scope::Phone, ["phone_number", "phone_number_verified"]);
