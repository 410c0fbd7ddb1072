//! Orchestration of a claim release across requested scopes.

use std::collections::BTreeMap;

use cairn_registry::ComponentRegistry;

use crate::config::ClaimsConfig;
use crate::error::ReleaseError;
use crate::policy::{ClaimMap, POLICY_NAMESPACE, ReleaseContext, ScopeAttributeReleasePolicy, discover_policies};
use crate::scope::Scope;

/// Scope policies available to a release, keyed by scope.
#[derive(Debug, Default)]
pub struct ClaimRelease {
	policies: BTreeMap<Scope, Box<dyn ScopeAttributeReleasePolicy>>,
}

impl ClaimRelease {
	/// A release with no policies.
	pub fn new() -> Self {
		Self::default()
	}

	/// Builds a release from the standard policies found in `registry`.
	pub fn discover(registry: &ComponentRegistry) -> Self {
		let mut release = Self::new();
		for policy in discover_policies(registry, POLICY_NAMESPACE) {
			release.insert(policy);
		}
		tracing::debug!(policies = release.policies.len(), "scope policies discovered");
		release
	}

	/// Builds a release from discovered standard policies plus the custom
	/// scopes declared in `config`.
	pub fn from_config(registry: &ComponentRegistry, config: &ClaimsConfig) -> Self {
		let mut release = Self::discover(registry);
		for policy in config.custom_policies() {
			release.insert(Box::new(policy));
		}
		release
	}

	/// Adds a policy, returning the one it replaced for the same scope.
	pub fn insert(&mut self, policy: Box<dyn ScopeAttributeReleasePolicy>) -> Option<Box<dyn ScopeAttributeReleasePolicy>> {
		self.policies.insert(policy.scope(), policy)
	}

	/// Adds a policy by value.
	pub fn with_policy(mut self, policy: impl ScopeAttributeReleasePolicy + 'static) -> Self {
		self.insert(Box::new(policy));
		self
	}

	/// Returns the policy bound to `scope`.
	pub fn policy(&self, scope: &Scope) -> Option<&dyn ScopeAttributeReleasePolicy> {
		self.policies.get(scope).map(|policy| policy.as_ref())
	}

	/// Iterates the scopes that have a policy.
	pub fn scopes(&self) -> impl Iterator<Item = &Scope> {
		self.policies.keys()
	}

	/// Releases the claims of every requested scope.
	///
	/// Scopes without a policy release nothing. When two scopes release the
	/// same claim, the scope requested first wins.
	pub fn release(&self, scopes: &[Scope], ctx: &ReleaseContext<'_>) -> Result<ClaimMap, ReleaseError> {
		let mut claims = ClaimMap::new();
		for scope in scopes {
			let Some(policy) = self.policy(scope) else {
				if scope.is_standard() {
					tracing::debug!(%scope, "no policy for standard scope; nothing released");
				} else {
					tracing::warn!(%scope, service = ctx.service, "requested scope has no policy");
				}
				continue;
			};

			verify_requested_definitions(policy, ctx)?;
			for (claim, values) in policy.attributes(ctx) {
				claims.entry(claim).or_insert(values);
			}
		}
		Ok(claims)
	}
}

/// Checks that every allowed claim is among the policy's requested attribute definitions.
pub fn verify_requested_definitions(policy: &dyn ScopeAttributeReleasePolicy, ctx: &ReleaseContext<'_>) -> Result<(), ReleaseError> {
	let requested = policy.requested_attribute_definitions(ctx);
	let missing: Vec<String> = policy
		.allowed_attributes()
		.iter()
		.filter(|claim| !requested.contains(*claim))
		.cloned()
		.collect();
	if missing.is_empty() {
		Ok(())
	} else {
		Err(ReleaseError::UncoveredAttributes {
			scope: policy.scope(),
			missing,
		})
	}
}

#[cfg(test)]
mod tests;
