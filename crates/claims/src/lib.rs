//! OpenID Connect claim resolution.
//!
//! Claims are released per requested scope. Each scope is backed by a
//! [`ScopeAttributeReleasePolicy`] that lists the claims it may release; the
//! policy reads every claim from the principal's attributes through the
//! configured [`RenameTable`] and coerces the values with [`coerce()`].
//!
//! The standard scope policies register themselves with the component
//! registry, so a [`ClaimRelease`] can be assembled by discovery and then
//! extended with the custom scopes declared in a [`ClaimsConfig`].

pub mod coerce;
pub mod config;
pub mod error;
pub mod mapper;
pub mod policy;
pub mod release;
pub mod scope;
pub mod store;
pub mod value;

pub use coerce::{ClaimValues, coerce, coerce_value};
pub use config::{ClaimsConfig, CustomScopeConfig};
pub use error::{ConfigError, ReleaseError};
pub use mapper::{AttributeToClaimMapper, RenameTable, map_claim, to_mapped_claim_name};
pub use policy::{ClaimMap, ReleaseContext, ScopeAttributeReleasePolicy, ScopePolicy, discover_policies};
pub use release::{ClaimRelease, verify_requested_definitions};
pub use scope::Scope;
pub use store::{AttributeStore, Principal};
pub use value::{AttributeValue, OneOrMany};
