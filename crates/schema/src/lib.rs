//! # Schema
//!
//! Validation and normalization combinators for the JSON messages exchanged
//! with an OAuth 2.0, `OpenID` Connect, and Verifiable Credential Issuance
//! API.
//!
//! Message schemas are assembled from a small set of reusable rules:
//!
//! * scalar rules ([`Str`], [`Num`], [`Int`], [`Bool`], [`Uri`], [`Json`]),
//! * presence adapters treating `null` as absent ([`nullish`]) or rejecting
//!   both ([`required`]),
//! * case-insensitive token sets normalized to a canonical form
//!   ([`one_of`], [`tokens!`]),
//! * arrays ([`array`]), and
//! * open or closed objects ([`Shape`], [`object`]), which may embed one
//!   another.
//!
//! Validation is a pure function of the schema and the input value. Failures
//! are returned, never raised, and carry the path of the offending field.
//!
//! The crate also provides the default one-year expiry calculation used when
//! an issuance order does not specify a credential lifetime
//! ([`one_year_duration`]).

mod array;
mod context;
mod duration;
mod error;
mod object;
mod options;
mod path;
mod rule;
mod token;

use serde_json::Value;
use tracing::instrument;

pub use self::array::*;
pub use self::context::*;
pub use self::duration::*;
pub use self::error::*;
pub use self::object::*;
pub use self::options::*;
pub use self::path::*;
pub use self::rule::*;
pub use self::token::*;

#[doc(hidden)]
pub mod __private {
    pub use serde;
}

/// Validate `value` against the shape `S` using default options.
///
/// # Errors
///
/// Returns every field-level failure found. A top-level value that is not an
/// object yields a single `TypeMismatch` at the root path.
pub fn validate<S: Shape>(value: &Value) -> Result<S, Failures> {
    validate_with(value, &Options::default())
}

/// Validate `value` against the shape `S`.
///
/// # Errors
///
/// Returns the failures found, subject to the [`Policy`] in `options`.
#[instrument(level = "trace", skip_all, fields(schema = S::NAME))]
pub fn validate_with<S: Shape>(value: &Value, options: &Options) -> Result<S, Failures> {
    let mut cx = Context::new(options);
    let output = object::<S>().check(value, &Path::root(), &mut cx);

    cx.finish(output).inspect_err(|failures| {
        tracing::debug!(schema = S::NAME, failures = failures.len(), "validation failed");
    })
}

/// Validate a single, possibly absent, value with a field rule.
///
/// Useful for standalone checks of scalars, tokens, and arrays.
///
/// # Errors
///
/// Returns the failures recorded by `rule`.
pub fn validate_field<F: Field>(rule: &F, value: Option<&Value>) -> Result<F::Output, Failures> {
    let mut cx = Context::new(&Options::default());
    let output = rule.check_field(value, &Path::root(), &mut cx);
    cx.finish(output)
}
