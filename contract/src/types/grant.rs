//! # Grants
//!
//! A grant records what a resource owner has consented to: scopes, claims,
//! and authorization details. The same shapes appear in authorization
//! responses, token records, and grant management messages.

use credibil_schema::{Bool, Fields, Shape, Str, array, nullish, object};
use serde::Serialize;

use crate::types::AuthzDetails;

/// A key-value pair.
#[derive(Clone, Debug, Default, Serialize, PartialEq, Eq)]
pub struct Pair {
    /// The key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    /// The value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl Shape for Pair {
    const NAME: &'static str = "Pair";

    fn read(f: &mut Fields<'_>) -> Option<Self> {
        let key = f.field("key", nullish(Str));
        let value = f.field("value", nullish(Str));
        Some(Self { key: key?, value: value? })
    }
}

/// An OAuth 2.0 scope.
#[derive(Clone, Debug, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Scope {
    /// The scope name, as it appears in the `scope` request parameter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Whether the scope is granted when a request names no scope.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_entry: Option<bool>,

    /// Human-readable description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Arbitrary scope attributes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Vec<Pair>>,
}

impl Shape for Scope {
    const NAME: &'static str = "Scope";

    fn read(f: &mut Fields<'_>) -> Option<Self> {
        let name = f.field("name", nullish(Str));
        let default_entry = f.field("defaultEntry", nullish(Bool));
        let description = f.field("description", nullish(Str));
        let attributes = f.field("attributes", nullish(array(object::<Pair>())));

        Some(Self {
            name: name?,
            default_entry: default_entry?,
            description: description?,
            attributes: attributes?,
        })
    }
}

/// The permissions granted to a client by a resource owner.
#[derive(Clone, Debug, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Grant {
    /// Granted scopes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scopes: Option<Vec<Scope>>,

    /// Granted claims.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub claims: Option<Vec<String>>,

    /// Granted authorization details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorization_details: Option<AuthzDetails>,
}

impl Shape for Grant {
    const NAME: &'static str = "Grant";

    fn read(f: &mut Fields<'_>) -> Option<Self> {
        let scopes = f.field("scopes", nullish(array(object::<Scope>())));
        let claims = f.field("claims", nullish(array(Str)));
        let authorization_details =
            f.field("authorizationDetails", nullish(object::<AuthzDetails>()));

        Some(Self {
            scopes: scopes?,
            claims: claims?,
            authorization_details: authorization_details?,
        })
    }
}
