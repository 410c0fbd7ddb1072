//! Scope-based claim release policies.
//!
//! A policy owns the set of claims a scope may release and turns a
//! principal's attributes into the claim map for that scope. Policies are
//! registered with the component registry under [`SCOPE_POLICY`], so wiring
//! code can discover them instead of naming each one.

mod standard;

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use cairn_registry::{TypeRef, component};

use crate::coerce::ClaimValues;
use crate::mapper::{RenameTable, map_claim, to_mapped_claim_name};
use crate::scope::Scope;
use crate::store::AttributeStore;
use crate::value::OneOrMany;

pub use standard::{AddressScopePolicy, EmailScopePolicy, OpenIdScopePolicy, PhoneScopePolicy, ProfileScopePolicy};

/// Released claims keyed by claim name.
pub type ClaimMap = BTreeMap<String, ClaimValues>;

/// Interface under which every scope policy is registered.
pub const SCOPE_POLICY: TypeRef = TypeRef::interface(concat!(module_path!(), "::ScopeAttributeReleasePolicy"));

/// Annotation carried by the standard OpenID Connect scope policies.
pub const STANDARD_SCOPE: &str = concat!(module_path!(), "::StandardScope");

/// Qualified name of [`ScopePolicy`], the class the standard policies extend.
pub const SCOPE_POLICY_CLASS: &str = concat!(module_path!(), "::ScopePolicy");

/// Namespace containing the policies shipped with this crate.
pub const POLICY_NAMESPACE: &str = module_path!();

/// Inputs of a single release decision.
#[derive(Clone, Copy)]
pub struct ReleaseContext<'a> {
	/// Attributes of the principal the claims are released for.
	pub principal: &'a dyn AttributeStore,
	/// Claim to attribute renames from configuration.
	pub claims_map: &'a RenameTable,
	/// Identifier of the relying party, if known.
	pub service: Option<&'a str>,
}

impl<'a> ReleaseContext<'a> {
	pub fn new(principal: &'a dyn AttributeStore, claims_map: &'a RenameTable) -> Self {
		Self {
			principal,
			claims_map,
			service: None,
		}
	}

	pub fn with_service(mut self, service: &'a str) -> Self {
		self.service = Some(service);
		self
	}
}

impl fmt::Debug for ReleaseContext<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ReleaseContext")
			.field("claims_map", &self.claims_map)
			.field("service", &self.service)
			.finish_non_exhaustive()
	}
}

/// Decides which claims a scope releases and with which values.
pub trait ScopeAttributeReleasePolicy: fmt::Debug + Send + Sync {
	/// The scope this policy is bound to.
	fn scope(&self) -> Scope;

	/// Claims this scope may release.
	fn allowed_attributes(&self) -> &[String];

	/// Scope-level value used when a claim's attribute is missing.
	fn claim_default(&self, _claim: &str) -> Option<&OneOrMany> {
		None
	}

	/// Builds the claim map for this scope.
	///
	/// A claim whose attribute is missing and which has no scope default is
	/// left out of the map rather than released empty.
	fn attributes(&self, ctx: &ReleaseContext<'_>) -> ClaimMap {
		let mut claims = ClaimMap::new();
		for claim in self.allowed_attributes() {
			let default = self.claim_default(claim);
			let attribute = to_mapped_claim_name(ctx.claims_map, claim);
			if default.is_none() && !ctx.principal.contains_attribute(attribute) {
				tracing::trace!(scope = %self.scope(), claim = %claim, attribute, "attribute missing; claim not released");
				continue;
			}
			claims.insert(claim.clone(), map_claim(ctx.claims_map, claim, ctx.principal, default));
		}
		claims
	}

	/// Attribute definitions this policy needs resolved for a release.
	///
	/// Contains every allowed claim plus the attribute each one maps to.
	fn requested_attribute_definitions(&self, ctx: &ReleaseContext<'_>) -> BTreeSet<String> {
		let mut definitions = BTreeSet::new();
		for claim in self.allowed_attributes() {
			definitions.insert(claim.clone());
			definitions.insert(to_mapped_claim_name(ctx.claims_map, claim).to_string());
		}
		definitions
	}
}

component!(ScopeAttributeReleasePolicy, {
	kind: Interface,
});

/// A policy configured with an explicit scope, claim list and defaults.
///
/// Custom scopes from configuration use this directly; the standard scope
/// policies wrap it.
#[derive(Debug, Clone, PartialEq)]
pub struct ScopePolicy {
	scope: Scope,
	allowed: Vec<String>,
	defaults: BTreeMap<String, OneOrMany>,
}

impl ScopePolicy {
	pub fn new<C: Into<String>>(scope: Scope, allowed: impl IntoIterator<Item = C>) -> Self {
		Self {
			scope,
			allowed: allowed.into_iter().map(Into::into).collect(),
			defaults: BTreeMap::new(),
		}
	}

	/// Sets the value released for `claim` when its attribute is missing.
	pub fn with_default(mut self, claim: impl Into<String>, value: impl Into<OneOrMany>) -> Self {
		self.defaults.insert(claim.into(), value.into());
		self
	}

	pub(crate) fn with_defaults(mut self, defaults: BTreeMap<String, OneOrMany>) -> Self {
		self.defaults.extend(defaults);
		self
	}
}

impl ScopeAttributeReleasePolicy for ScopePolicy {
	fn scope(&self) -> Scope {
		self.scope.clone()
	}

	fn allowed_attributes(&self) -> &[String] {
		&self.allowed
	}

	fn claim_default(&self, claim: &str) -> Option<&OneOrMany> {
		self.defaults.get(claim)
	}
}

component!(ScopePolicy, {
	kind: Class,
	implements: &[SCOPE_POLICY.name],
});

/// Discovers and instantiates the scope policies registered below `namespace`.
///
/// Components that cannot be instantiated without configuration are skipped.
pub fn discover_policies(registry: &cairn_registry::ComponentRegistry, namespace: &str) -> Vec<Box<dyn ScopeAttributeReleasePolicy>> {
	let discovered = registry.find_subtypes(SCOPE_POLICY, namespace);
	discovered
		.components
		.iter()
		.filter(|handle| handle.is_instantiable())
		.filter_map(|handle| match handle.instantiate_as::<Box<dyn ScopeAttributeReleasePolicy>>() {
			Ok(policy) => Some(policy),
			Err(error) => {
				tracing::warn!(name = handle.qualified_name(), %error, "discovered scope policy could not be instantiated");
				None
			}
		})
		.collect()
}
