//! # Authorization Details
//!
//! Rich Authorization Requests ([RFC9396]) allow a client to describe the
//! access it needs in finer detail than a scope.
//!
//! [RFC9396]: (https://www.rfc-editor.org/rfc/rfc9396.html)

use credibil_schema::{Fields, Mode, Shape, Str, array, nullish, object};
use serde::Serialize;
use serde_json::{Map, Value};

/// A single authorization details element.
///
/// Each `type` of element may define its own members, so any member not
/// listed here is carried through unchanged.
#[derive(Clone, Debug, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AuthzDetailsElement {
    /// The type of authorization data, determining the allowed members.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,

    /// Locations of the resource or resource server.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locations: Option<Vec<String>>,

    /// Kinds of action to be taken at the resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actions: Option<Vec<String>>,

    /// Kinds of data being requested from the resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub datatypes: Option<Vec<String>>,

    /// A specific resource available at the API.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,

    /// Types or levels of privilege being requested at the resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub privileges: Option<Vec<String>>,

    /// Type-specific members, passed through verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Shape for AuthzDetailsElement {
    const MODE: Mode = Mode::Open;
    const NAME: &'static str = "AuthzDetailsElement";

    fn read(f: &mut Fields<'_>) -> Option<Self> {
        let r#type = f.field("type", nullish(Str));
        let locations = f.field("locations", nullish(array(Str)));
        let actions = f.field("actions", nullish(array(Str)));
        let datatypes = f.field("datatypes", nullish(array(Str)));
        let identifier = f.field("identifier", nullish(Str));
        let privileges = f.field("privileges", nullish(array(Str)));

        Some(Self {
            r#type: r#type?,
            locations: locations?,
            actions: actions?,
            datatypes: datatypes?,
            identifier: identifier?,
            privileges: privileges?,
            extra: f.rest(),
        })
    }
}

/// The `authorization_details` of a request, grant, or token.
#[derive(Clone, Debug, Default, Serialize, PartialEq, Eq)]
pub struct AuthzDetails {
    /// Authorization details elements.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elements: Option<Vec<AuthzDetailsElement>>,
}

impl Shape for AuthzDetails {
    const NAME: &'static str = "AuthzDetails";

    fn read(f: &mut Fields<'_>) -> Option<Self> {
        let elements = f.field("elements", nullish(array(object::<AuthzDetailsElement>())));
        Some(Self { elements: elements? })
    }
}
