//! # Contract
//!
//! Request and response contracts for an OAuth 2.0, `OpenID` Connect, and
//! Verifiable Credential Issuance API.
//!
//! Each message type is a [`Shape`]: validating an untyped JSON value yields
//! either the normalized message or every field-level failure found.
//!
//! ```rust
//! use credibil_contract::types::AuthorizationResponse;
//! use credibil_contract::types::AuthorizationAction;
//! use serde_json::json;
//!
//! let input = json!({"action": "LOCATION", "responseContent": "https://x", "extra": 1});
//! let response: AuthorizationResponse = credibil_contract::validate(&input).unwrap();
//!
//! assert_eq!(response.action, Some(AuthorizationAction::Location));
//! assert_eq!(response.extra.get("extra"), Some(&json!(1)));
//! ```

mod error;
pub mod types;

pub use credibil_schema::{
    Failure, FailureKind, Failures, Options, Path, Policy, Shape, Token, add_one_year,
    one_year_duration, validate, validate_with,
};
use serde_json::Value;

pub use self::error::Error;

/// Result type for reading contract messages.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Parse `json` and validate it as the message type `S`.
///
/// # Errors
///
/// Returns [`Error::Json`] when `json` is not well-formed and
/// [`Error::Invalid`] when it does not conform to `S`.
pub fn from_str<S: Shape>(json: &str) -> Result<S> {
    let value: Value = serde_json::from_str(json)?;
    Ok(validate(&value)?)
}
