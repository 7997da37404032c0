//! # Credential Issuance
//!
//! Orders and responses exchanged when the authorization server asks the API
//! to issue a Verifiable Credential on behalf of the Credential Issuer.

use credibil_schema::{Bool, Fields, Mode, Num, Shape, Str, nullish, one_of, required, tokens};
use serde::Serialize;
use serde_json::{Map, Number, Value};

/// Instructions for issuing a single credential.
///
/// When `credential_duration` is absent the issuer applies its default
/// lifetime of one calendar year (see [`credibil_schema::one_year_duration`]).
#[derive(Clone, Debug, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CredentialIssuanceOrder {
    /// Identifier of the credential request being fulfilled.
    pub request_identifier: String,

    /// Credential payload, as a JSON string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credential_payload: Option<String>,

    /// Whether issuance is deferred.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issuance_deferred: Option<bool>,

    /// Credential lifetime in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credential_duration: Option<Number>,

    /// Key ID of the signing key to use.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signing_key_id: Option<String>,
}

impl Shape for CredentialIssuanceOrder {
    const NAME: &'static str = "CredentialIssuanceOrder";

    fn read(f: &mut Fields<'_>) -> Option<Self> {
        let request_identifier = f.field("requestIdentifier", required(Str));
        let credential_payload = f.field("credentialPayload", nullish(Str));
        let issuance_deferred = f.field("issuanceDeferred", nullish(Bool));
        let credential_duration = f.field("credentialDuration", nullish(Num));
        let signing_key_id = f.field("signingKeyId", nullish(Str));

        Some(Self {
            request_identifier: request_identifier?,
            credential_payload: credential_payload?,
            issuance_deferred: issuance_deferred?,
            credential_duration: credential_duration?,
            signing_key_id: signing_key_id?,
        })
    }
}

tokens! {
    /// The next action for the credential endpoint implementation.
    pub enum CredentialIssuanceAction {
        /// The caller supplied an invalid request to the API.
        CallerError => "caller_error",

        /// Return the credential as JSON.
        Ok => "ok",

        /// Return the credential as a JWT.
        OkJwt => "ok_jwt",

        /// Issuance was deferred; return the transaction ID as JSON.
        Accepted => "accepted",

        /// Issuance was deferred; return the transaction ID as a JWT.
        AcceptedJwt => "accepted_jwt",

        /// The access token is invalid.
        Unauthorized => "unauthorized",

        /// The access token does not permit issuance.
        Forbidden => "forbidden",

        /// The API failed internally.
        InternalServerError => "internal_server_error",
    }
}

/// Response from the credential issuance API.
#[derive(Clone, Debug, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CredentialIssuanceResponse {
    /// Result code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result_code: Option<String>,

    /// Result message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result_message: Option<String>,

    /// The next action the credential endpoint should take.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<CredentialIssuanceAction>,

    /// Body of the credential endpoint response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_content: Option<String>,

    /// Transaction ID for deferred issuance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,

    /// Members not (yet) described by this type.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Shape for CredentialIssuanceResponse {
    const MODE: Mode = Mode::Open;
    const NAME: &'static str = "CredentialIssuanceResponse";

    fn read(f: &mut Fields<'_>) -> Option<Self> {
        let result_code = f.field("resultCode", nullish(Str));
        let result_message = f.field("resultMessage", nullish(Str));
        let action = f.field("action", nullish(one_of::<CredentialIssuanceAction>()));
        let response_content = f.field("responseContent", nullish(Str));
        let transaction_id = f.field("transactionId", nullish(Str));

        Some(Self {
            result_code: result_code?,
            result_message: result_message?,
            action: action?,
            response_content: response_content?,
            transaction_id: transaction_id?,
            extra: f.rest(),
        })
    }
}
