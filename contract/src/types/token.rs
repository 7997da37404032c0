//! # Tokens
//!
//! Token records and the messages used to create tokens directly, outside
//! of a token endpoint flow.

use credibil_schema::{
    Bool, Fields, Int, Mode, Shape, Str, Uri, array, nullish, object, one_of, required, tokens,
};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::types::AuthzDetails;

tokens! {
    /// OAuth 2.0 grant types.
    pub enum GrantType {
        /// Authorization Code Flow ([RFC6749]).
        ///
        /// [RFC6749]: (https://www.rfc-editor.org/rfc/rfc6749.html)
        AuthorizationCode => "authorization_code",

        /// Implicit Flow.
        Implicit => "implicit",

        /// Resource Owner Password Credentials Flow.
        Password => "password",

        /// Client Credentials Flow.
        ClientCredentials => "client_credentials",

        /// Refresh Token Flow.
        RefreshToken => "refresh_token",

        /// Client Initiated Backchannel Authentication.
        Ciba => "urn:openid:params:grant-type:ciba",

        /// Device Authorization Grant ([RFC8628]).
        ///
        /// [RFC8628]: (https://www.rfc-editor.org/rfc/rfc8628.html)
        DeviceCode => "urn:ietf:params:oauth:grant-type:device_code",

        /// Token Exchange ([RFC8693]).
        ///
        /// [RFC8693]: (https://www.rfc-editor.org/rfc/rfc8693.html)
        TokenExchange => "urn:ietf:params:oauth:grant-type:token-exchange",

        /// JWT Authorization Grant ([RFC7523]).
        ///
        /// [RFC7523]: (https://www.rfc-editor.org/rfc/rfc7523.html)
        JwtBearer => "urn:ietf:params:oauth:grant-type:jwt-bearer",

        /// `OpenID4VCI` Pre-Authorized Code Flow.
        PreAuthorizedCode => "urn:ietf:params:oauth:grant-type:pre-authorized_code",
    }
}

/// An arbitrary property attached to a token.
#[derive(Clone, Debug, Default, Serialize, PartialEq, Eq)]
pub struct Property {
    /// Property name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    /// Property value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    /// When `true`, the property is not exposed to the client.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hidden: Option<bool>,
}

impl Shape for Property {
    const NAME: &'static str = "Property";

    fn read(f: &mut Fields<'_>) -> Option<Self> {
        let key = f.field("key", nullish(Str));
        let value = f.field("value", nullish(Str));
        let hidden = f.field("hidden", nullish(Bool));
        Some(Self { key: key?, value: value?, hidden: hidden? })
    }
}

/// Information about an issued token, e.g. the subject token of a token
/// exchange.
#[derive(Clone, Debug, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TokenInfo {
    /// Client ID the token was issued to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<i64>,

    /// Client ID alias.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id_alias: Option<String>,

    /// Whether the alias was used when the token was requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id_alias_used: Option<bool>,

    /// Resource owner.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,

    /// Granted scopes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scopes: Option<Vec<String>>,

    /// Expiry, in milliseconds since the Unix epoch.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<i64>,

    /// Token properties.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<Vec<Property>>,

    /// Target resources ([RFC8707]).
    ///
    /// [RFC8707]: (https://www.rfc-editor.org/rfc/rfc8707.html)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resources: Option<Vec<String>>,

    /// Authorization details bound to the token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorization_details: Option<AuthzDetails>,
}

impl Shape for TokenInfo {
    const NAME: &'static str = "TokenInfo";

    fn read(f: &mut Fields<'_>) -> Option<Self> {
        let client_id = f.field("clientId", nullish(Int));
        let client_id_alias = f.field("clientIdAlias", nullish(Str));
        let client_id_alias_used = f.field("clientIdAliasUsed", nullish(Bool));
        let subject = f.field("subject", nullish(Str));
        let scopes = f.field("scopes", nullish(array(Str)));
        let expires_at = f.field("expiresAt", nullish(Int));
        let properties = f.field("properties", nullish(array(object::<Property>())));
        let resources = f.field("resources", nullish(array(Uri)));
        let authorization_details =
            f.field("authorizationDetails", nullish(object::<AuthzDetails>()));

        Some(Self {
            client_id: client_id?,
            client_id_alias: client_id_alias?,
            client_id_alias_used: client_id_alias_used?,
            subject: subject?,
            scopes: scopes?,
            expires_at: expires_at?,
            properties: properties?,
            resources: resources?,
            authorization_details: authorization_details?,
        })
    }
}

/// Request to create an access token without a token endpoint flow.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TokenCreateRequest {
    /// The grant type the token is created for.
    pub grant_type: GrantType,

    /// Client ID the token is issued to.
    pub client_id: i64,

    /// Resource owner.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,

    /// Scopes to grant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scopes: Option<Vec<String>>,

    /// Access token lifetime in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_token_duration: Option<i64>,

    /// Refresh token lifetime in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_token_duration: Option<i64>,

    /// Properties to attach to the token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<Vec<Property>>,

    /// Target resources.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resources: Option<Vec<String>>,

    /// Authorization details to bind to the token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorization_details: Option<AuthzDetails>,
}

impl Shape for TokenCreateRequest {
    const NAME: &'static str = "TokenCreateRequest";

    fn read(f: &mut Fields<'_>) -> Option<Self> {
        let grant_type = f.field("grantType", required(one_of::<GrantType>()));
        let client_id = f.field("clientId", required(Int));
        let subject = f.field("subject", nullish(Str));
        let scopes = f.field("scopes", nullish(array(Str)));
        let access_token_duration = f.field("accessTokenDuration", nullish(Int));
        let refresh_token_duration = f.field("refreshTokenDuration", nullish(Int));
        let properties = f.field("properties", nullish(array(object::<Property>())));
        let resources = f.field("resources", nullish(array(Uri)));
        let authorization_details =
            f.field("authorizationDetails", nullish(object::<AuthzDetails>()));

        Some(Self {
            grant_type: grant_type?,
            client_id: client_id?,
            subject: subject?,
            scopes: scopes?,
            access_token_duration: access_token_duration?,
            refresh_token_duration: refresh_token_duration?,
            properties: properties?,
            resources: resources?,
            authorization_details: authorization_details?,
        })
    }
}

tokens! {
    /// The next action for a caller of the token creation API.
    pub enum TokenCreateAction {
        /// The API failed internally.
        InternalServerError => "internal_server_error",

        /// The request was malformed.
        BadRequest => "bad_request",

        /// The client may not be issued the token.
        Forbidden => "forbidden",

        /// The token was created.
        Ok => "ok",
    }
}

/// Response from the token creation API.
#[derive(Clone, Debug, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TokenCreateResponse {
    /// Result code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result_code: Option<String>,

    /// Result message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result_message: Option<String>,

    /// The next action the caller should take.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<TokenCreateAction>,

    /// The grant type the token was created for.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grant_type: Option<GrantType>,

    /// Client ID the token was issued to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<i64>,

    /// Resource owner.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,

    /// Granted scopes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scopes: Option<Vec<String>>,

    /// The newly created access token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,

    /// Access token expiry, in milliseconds since the Unix epoch.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<i64>,

    /// Access token lifetime in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_in: Option<i64>,

    /// The newly created refresh token, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,

    /// Properties attached to the token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<Vec<Property>>,

    /// Authorization details bound to the token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorization_details: Option<AuthzDetails>,

    /// Members not (yet) described by this type.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Shape for TokenCreateResponse {
    const MODE: Mode = Mode::Open;
    const NAME: &'static str = "TokenCreateResponse";

    fn read(f: &mut Fields<'_>) -> Option<Self> {
        let result_code = f.field("resultCode", nullish(Str));
        let result_message = f.field("resultMessage", nullish(Str));
        let action = f.field("action", nullish(one_of::<TokenCreateAction>()));
        let grant_type = f.field("grantType", nullish(one_of::<GrantType>()));
        let client_id = f.field("clientId", nullish(Int));
        let subject = f.field("subject", nullish(Str));
        let scopes = f.field("scopes", nullish(array(Str)));
        let access_token = f.field("accessToken", nullish(Str));
        let expires_at = f.field("expiresAt", nullish(Int));
        let expires_in = f.field("expiresIn", nullish(Int));
        let refresh_token = f.field("refreshToken", nullish(Str));
        let properties = f.field("properties", nullish(array(object::<Property>())));
        let authorization_details =
            f.field("authorizationDetails", nullish(object::<AuthzDetails>()));

        Some(Self {
            result_code: result_code?,
            result_message: result_message?,
            action: action?,
            grant_type: grant_type?,
            client_id: client_id?,
            subject: subject?,
            scopes: scopes?,
            access_token: access_token?,
            expires_at: expires_at?,
            expires_in: expires_in?,
            refresh_token: refresh_token?,
            properties: properties?,
            authorization_details: authorization_details?,
            extra: f.rest(),
        })
    }
}
