//! # Authorization

use credibil_schema::{Fields, Mode, Shape, Str, Uri, array, nullish, object, one_of, tokens};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::types::{AuthzDetails, Scope};

tokens! {
    /// The next action for the authorization endpoint implementation.
    pub enum AuthorizationAction {
        /// The API failed internally.
        InternalServerError => "internal_server_error",

        /// The request was malformed and the client could not be identified.
        BadRequest => "bad_request",

        /// Redirect the user agent to the client with an error.
        Location => "location",

        /// Return an auto-submitting form to the user agent.
        Form => "form",

        /// The request asked for no user interaction.
        NoInteraction => "no_interaction",

        /// Authenticate the user and obtain consent.
        Interaction => "interaction",
    }
}

/// Response from the authorization request processing API.
#[derive(Clone, Debug, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AuthorizationResponse {
    /// Result code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result_code: Option<String>,

    /// Result message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result_message: Option<String>,

    /// The next action the authorization endpoint should take.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<AuthorizationAction>,

    /// Content for the response to the user agent, e.g. a redirect URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_content: Option<String>,

    /// Ticket to pass to the authorization issue or fail APIs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticket: Option<String>,

    /// Requested scopes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scopes: Option<Vec<Scope>>,

    /// Requested claims.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub claims: Option<Vec<String>>,

    /// Requested target resources.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resources: Option<Vec<String>>,

    /// Requested authorization details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorization_details: Option<AuthzDetails>,

    /// Members not (yet) described by this type.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Shape for AuthorizationResponse {
    const MODE: Mode = Mode::Open;
    const NAME: &'static str = "AuthorizationResponse";

    fn read(f: &mut Fields<'_>) -> Option<Self> {
        let result_code = f.field("resultCode", nullish(Str));
        let result_message = f.field("resultMessage", nullish(Str));
        let action = f.field("action", nullish(one_of::<AuthorizationAction>()));
        let response_content = f.field("responseContent", nullish(Str));
        let ticket = f.field("ticket", nullish(Str));
        let scopes = f.field("scopes", nullish(array(object::<Scope>())));
        let claims = f.field("claims", nullish(array(Str)));
        let resources = f.field("resources", nullish(array(Uri)));
        let authorization_details =
            f.field("authorizationDetails", nullish(object::<AuthzDetails>()));

        Some(Self {
            result_code: result_code?,
            result_message: result_message?,
            action: action?,
            response_content: response_content?,
            ticket: ticket?,
            scopes: scopes?,
            claims: claims?,
            resources: resources?,
            authorization_details: authorization_details?,
            extra: f.rest(),
        })
    }
}
