use std::collections::{BTreeMap, HashMap};

use pretty_assertions::assert_eq;
use proptest::prelude::*;

use super::*;
use crate::store::Principal;
use crate::value::AttributeValue;

fn value_types_principal() -> Principal {
	Principal::new("casuser")
		.with_attribute("status1", "true")
		.with_attribute("status2", false)
		.with_attribute("status3", 1)
}

fn value_types_table() -> RenameTable {
	[("active1", "status1"), ("active2", "status2"), ("active3", "status3")].into_iter().collect()
}

#[test]
fn test_mapped_attribute() {
	let table: RenameTable = [("name", "givenName")].into_iter().collect();
	assert!(table.contains_mapped_attribute("name"));
	assert_eq!(table.mapped_attribute("name"), Some("givenName"));
	assert_eq!(table.map_claim_name("name"), "givenName");

	assert!(!table.has_mapping("email"));
	assert_eq!(table.mapped_attribute("email"), None);
	assert_eq!(table.map_claim_name("email"), "email");
}

#[test]
fn test_empty_table_is_identity() {
	let table = RenameTable::new();
	assert!(table.is_empty());
	assert_eq!(to_mapped_claim_name(&table, "sub"), "sub");
}

#[test]
fn test_map_claim_value_types() {
	let table = value_types_table();
	let principal = value_types_principal();

	assert_eq!(map_claim(&table, "active1", &principal, None), vec![AttributeValue::Bool(true)]);
	assert_eq!(map_claim(&table, "active2", &principal, None), vec![AttributeValue::Bool(false)]);
	assert_eq!(map_claim(&table, "active3", &principal, None), vec![AttributeValue::Int(1)]);
}

#[test]
fn test_map_claim_present_attribute_ignores_default() {
	let table = value_types_table();
	let principal = value_types_principal();
	let default = OneOrMany::from("ignored");

	assert_eq!(map_claim(&table, "active3", &principal, Some(&default)), vec![AttributeValue::Int(1)]);
}

#[test]
fn test_map_claim_absent_attribute_uses_default() {
	let table = RenameTable::new();
	let principal = Principal::new("casuser");

	let scalar = OneOrMany::from("TRUE");
	assert_eq!(map_claim(&table, "verified", &principal, Some(&scalar)), vec![AttributeValue::Bool(true)]);

	let many = OneOrMany::many(["a", "b"]);
	assert_eq!(map_claim(&table, "groups", &principal, Some(&many)), vec!["a".into(), "b".into()]);

	assert!(map_claim(&table, "groups", &principal, None).is_empty());
}

#[test]
fn test_map_claim_present_but_empty_attribute() {
	let table = RenameTable::new();
	let principal = Principal::new("casuser").with_attribute("groups", OneOrMany::Many(Vec::new()));
	let default = OneOrMany::from("fallback");

	assert!(map_claim(&table, "groups", &principal, Some(&default)).is_empty());
}

#[test]
fn test_map_claim_multi_valued_attribute() {
	let table: RenameTable = [("email", "mail")].into_iter().collect();
	let mut store: HashMap<String, OneOrMany> = HashMap::new();
	store.insert("mail".into(), OneOrMany::many(["cas@example.org", "false", "cas@example.org"]));

	assert_eq!(
		map_claim(&table, "email", &store, None),
		vec!["cas@example.org".into(), AttributeValue::Bool(false), "cas@example.org".into()]
	);
}

#[test]
fn test_map_claim_does_not_fall_back_to_claim_name_when_mapped() {
	let table: RenameTable = [("email", "mail")].into_iter().collect();
	let mut store = BTreeMap::new();
	store.insert("email".to_string(), OneOrMany::from("wrong@example.org"));

	assert!(map_claim(&table, "email", &store, None).is_empty());
}

#[test]
fn test_rename_table_deserializes_from_map() {
	let table: RenameTable = toml::from_str("email = \"mail\"\nemail_verified = \"mail_confirmed\"").unwrap();
	assert_eq!(table.len(), 2);
	assert_eq!(table.iter().collect::<Vec<_>>(), vec![("email", "mail"), ("email_verified", "mail_confirmed")]);
}

proptest! {
	#[test]
	fn prop_mapping_matches_table(
		entries in proptest::collection::btree_map("[a-z_]{1,8}", "[a-zA-Z]{1,8}", 0..6),
		claim in "[a-z_]{1,8}",
	) {
		let table: RenameTable = entries.clone().into_iter().collect();
		match entries.get(&claim) {
			Some(attribute) => {
				prop_assert!(table.has_mapping(&claim));
				prop_assert_eq!(table.map_claim_name(&claim), attribute.as_str());
			}
			None => {
				prop_assert!(!table.has_mapping(&claim));
				prop_assert_eq!(table.map_claim_name(&claim), claim.as_str());
			}
		}
	}
}
