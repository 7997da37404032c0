//! # Introspection
//!
//! Access token introspection by a resource server.

use credibil_schema::{
    Bool, Fields, Int, Mode, Shape, Str, Uri, array, nullish, object, one_of, required, tokens,
};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::types::{AuthzDetails, GrantType, Property, TokenInfo};

/// Request to introspect an access token.
#[derive(Clone, Debug, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct IntrospectionRequest {
    /// The access token presented to the resource server.
    pub token: String,

    /// Scopes the resource endpoint requires.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scopes: Option<Vec<String>>,

    /// Subject the token must have been issued for.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,

    /// Resources the token must be bound to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resources: Option<Vec<String>>,
}

impl Shape for IntrospectionRequest {
    const NAME: &'static str = "IntrospectionRequest";

    fn read(f: &mut Fields<'_>) -> Option<Self> {
        let token = f.field("token", required(Str));
        let scopes = f.field("scopes", nullish(array(Str)));
        let subject = f.field("subject", nullish(Str));
        let resources = f.field("resources", nullish(array(Uri)));

        Some(Self { token: token?, scopes: scopes?, subject: subject?, resources: resources? })
    }
}

tokens! {
    /// The next action for the resource server.
    pub enum IntrospectionAction {
        /// The API failed internally.
        InternalServerError => "internal_server_error",

        /// The request carried no access token.
        BadRequest => "bad_request",

        /// The access token is unknown or has expired.
        Unauthorized => "unauthorized",

        /// The access token does not cover the required scopes.
        Forbidden => "forbidden",

        /// The access token is valid.
        Ok => "ok",
    }
}

/// Response from the introspection API.
#[derive(Clone, Debug, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct IntrospectionResponse {
    /// Result code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result_code: Option<String>,

    /// Result message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result_message: Option<String>,

    /// The next action the resource server should take.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<IntrospectionAction>,

    /// Content for an error response, e.g. a `WWW-Authenticate` value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_content: Option<String>,

    /// Client ID the token was issued to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<i64>,

    /// Resource owner.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,

    /// Scopes covered by the token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scopes: Option<Vec<String>>,

    /// Whether the token exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub existent: Option<bool>,

    /// Whether the token exists and has not expired.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usable: Option<bool>,

    /// Whether the token covers the required scopes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sufficient: Option<bool>,

    /// Whether the token can be refreshed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refreshable: Option<bool>,

    /// Expiry, in milliseconds since the Unix epoch.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<i64>,

    /// Token properties.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<Vec<Property>>,

    /// Resources the token is bound to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resources: Option<Vec<String>>,

    /// Authorization details bound to the token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorization_details: Option<AuthzDetails>,

    /// The grant type the token was issued under.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grant_type: Option<GrantType>,

    /// The subject token, when the token was issued by token exchange.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject_token_info: Option<TokenInfo>,

    /// Members not (yet) described by this type.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Shape for IntrospectionResponse {
    const MODE: Mode = Mode::Open;
    const NAME: &'static str = "IntrospectionResponse";

    fn read(f: &mut Fields<'_>) -> Option<Self> {
        let result_code = f.field("resultCode", nullish(Str));
        let result_message = f.field("resultMessage", nullish(Str));
        let action = f.field("action", nullish(one_of::<IntrospectionAction>()));
        let response_content = f.field("responseContent", nullish(Str));
        let client_id = f.field("clientId", nullish(Int));
        let subject = f.field("subject", nullish(Str));
        let scopes = f.field("scopes", nullish(array(Str)));
        let existent = f.field("existent", nullish(Bool));
        let usable = f.field("usable", nullish(Bool));
        let sufficient = f.field("sufficient", nullish(Bool));
        let refreshable = f.field("refreshable", nullish(Bool));
        let expires_at = f.field("expiresAt", nullish(Int));
        let properties = f.field("properties", nullish(array(object::<Property>())));
        let resources = f.field("resources", nullish(array(Uri)));
        let authorization_details =
            f.field("authorizationDetails", nullish(object::<AuthzDetails>()));
        let grant_type = f.field("grantType", nullish(one_of::<GrantType>()));
        let subject_token_info = f.field("subjectTokenInfo", nullish(object::<TokenInfo>()));

        Some(Self {
            result_code: result_code?,
            result_message: result_message?,
            action: action?,
            response_content: response_content?,
            client_id: client_id?,
            subject: subject?,
            scopes: scopes?,
            existent: existent?,
            usable: usable?,
            sufficient: sufficient?,
            refreshable: refreshable?,
            expires_at: expires_at?,
            properties: properties?,
            resources: resources?,
            authorization_details: authorization_details?,
            grant_type: grant_type?,
            subject_token_info: subject_token_info?,
            extra: f.rest(),
        })
    }
}
