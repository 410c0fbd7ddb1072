use std::collections::BTreeSet;

use cairn_registry::ComponentRegistry;
use pretty_assertions::assert_eq;

use super::*;
use crate::mapper::RenameTable;
use crate::policy::{EmailScopePolicy, ProfileScopePolicy, ScopePolicy};
use crate::store::Principal;
use crate::value::AttributeValue;

fn principal() -> Principal {
	Principal::new("casuser")
		.with_attribute("mail", "cas@example.org")
		.with_attribute("mail_confirmed", "True")
		.with_attribute("name", "CAS User")
		.with_attribute("nickname", "cas")
		.with_attribute("eduPersonAffiliation", "staff")
}

fn claims_map() -> RenameTable {
	[("email", "mail"), ("email_verified", "mail_confirmed")].into_iter().collect()
}

/// A policy that forgets to request definitions for its claims.
#[derive(Debug)]
struct UnrequestedPolicy {
	allowed: Vec<String>,
}

impl ScopeAttributeReleasePolicy for UnrequestedPolicy {
	fn scope(&self) -> Scope {
		Scope::Custom("broken".into())
	}

	fn allowed_attributes(&self) -> &[String] {
		&self.allowed
	}

	fn requested_attribute_definitions(&self, _ctx: &ReleaseContext<'_>) -> BTreeSet<String> {
		BTreeSet::from(["name".to_string()])
	}
}

#[test]
fn test_release_merges_requested_scopes() {
	let principal = principal();
	let claims_map = claims_map();
	let ctx = ReleaseContext::new(&principal, &claims_map);
	let release = ClaimRelease::new().with_policy(EmailScopePolicy::new()).with_policy(ProfileScopePolicy::new());

	let claims = release.release(&Scope::parse_list("openid email profile"), &ctx).unwrap();
	assert_eq!(claims.keys().collect::<Vec<_>>(), ["email", "email_verified", "name", "nickname"]);
	assert_eq!(claims["email_verified"], vec![AttributeValue::Bool(true)]);
}

#[test]
fn test_unrequested_scope_is_not_released() {
	let principal = principal();
	let claims_map = claims_map();
	let ctx = ReleaseContext::new(&principal, &claims_map);
	let release = ClaimRelease::new().with_policy(EmailScopePolicy::new()).with_policy(ProfileScopePolicy::new());

	let claims = release.release(&[Scope::Email], &ctx).unwrap();
	assert!(!claims.contains_key("name"));
}

/// When scopes overlap, the values of the first requested scope are kept.
#[test]
fn test_first_requested_scope_wins() {
	let principal = principal();
	let claims_map = RenameTable::new();
	let ctx = ReleaseContext::new(&principal, &claims_map);
	let release = ClaimRelease::new()
		.with_policy(ScopePolicy::new(Scope::Custom("a".into()), ["nickname", "missing"]).with_default("missing", "from a"))
		.with_policy(ScopePolicy::new(Scope::Custom("b".into()), ["missing"]).with_default("missing", "from b"));

	let claims = release.release(&[Scope::Custom("b".into()), Scope::Custom("a".into())], &ctx).unwrap();
	assert_eq!(claims["nickname"], vec![AttributeValue::from("cas")]);
	assert_eq!(claims["missing"], vec![AttributeValue::from("from b")]);

	let claims = release.release(&[Scope::Custom("a".into()), Scope::Custom("b".into())], &ctx).unwrap();
	assert_eq!(claims["missing"], vec![AttributeValue::from("from a")]);
}

#[test]
fn test_scope_without_policy_is_skipped() {
	let principal = principal();
	let claims_map = claims_map();
	let ctx = ReleaseContext::new(&principal, &claims_map).with_service("https://app.example.org");
	let release = ClaimRelease::new().with_policy(EmailScopePolicy::new());

	let claims = release.release(&Scope::parse_list("offline_access unknown email"), &ctx).unwrap();
	assert_eq!(claims.len(), 2);
}

#[test]
fn test_uncovered_attributes_fail_release() {
	let principal = principal();
	let claims_map = RenameTable::new();
	let ctx = ReleaseContext::new(&principal, &claims_map);
	let release = ClaimRelease::new().with_policy(UnrequestedPolicy {
		allowed: vec!["name".into(), "nickname".into()],
	});

	let err = release.release(&[Scope::Custom("broken".into())], &ctx).unwrap_err();
	assert_eq!(
		err,
		ReleaseError::UncoveredAttributes {
			scope: Scope::Custom("broken".into()),
			missing: vec!["nickname".into()],
		}
	);
}

#[test]
fn test_verify_standard_policy_definitions() {
	let principal = principal();
	let claims_map = claims_map();
	let ctx = ReleaseContext::new(&principal, &claims_map);
	assert_eq!(verify_requested_definitions(&ProfileScopePolicy::new(), &ctx), Ok(()));
}

#[test]
fn test_insert_replaces_policy_for_scope() {
	let mut release = ClaimRelease::new().with_policy(EmailScopePolicy::new());
	let replaced = release.insert(Box::new(ScopePolicy::new(Scope::Email, ["email"])));
	assert!(replaced.is_some());
	assert_eq!(release.policy(&Scope::Email).map(|policy| policy.allowed_attributes().len()), Some(1));
}

#[test]
fn test_from_config_adds_custom_scopes() {
	let config = ClaimsConfig::from_toml_str(
		r#"
[claims-map]
email = "mail"

[[scopes]]
name = "eduperson"
allowed-attributes = ["eduPersonAffiliation", "eduPersonEntitlement"]

[scopes.defaults]
eduPersonEntitlement = "urn:example:none"
"#,
	)
	.unwrap();
	let release = ClaimRelease::from_config(&ComponentRegistry::linked(), &config);
	assert_eq!(release.scopes().count(), 6);

	let principal = principal();
	let ctx = ReleaseContext::new(&principal, &config.claims_map);
	let claims = release.release(&Scope::parse_list("openid email eduperson"), &ctx).unwrap();
	assert_eq!(claims["email"], vec![AttributeValue::from("cas@example.org")]);
	assert_eq!(claims["eduPersonAffiliation"], vec![AttributeValue::from("staff")]);
	assert_eq!(claims["eduPersonEntitlement"], vec![AttributeValue::from("urn:example:none")]);
	assert!(!claims.contains_key("sub"));
}
