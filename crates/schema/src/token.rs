//! # Canonical Tokens
//!
//! Enumerated string values are matched case-insensitively and normalized to
//! a single canonical (lower-case) token. Token sets are declared with the
//! [`tokens!`](crate::tokens) macro:
//!
//! ```rust
//! use credibil_schema::{Token, tokens};
//!
//! tokens! {
//!     /// Token endpoint outcome.
//!     pub enum Outcome {
//!         /// Success.
//!         Ok => "ok",
//!         /// The caller is not allowed.
//!         Forbidden => "forbidden",
//!     }
//! }
//!
//! assert_eq!(Outcome::from_token("FORBIDDEN"), Some(Outcome::Forbidden));
//! assert_eq!(Outcome::Ok.as_str(), "ok");
//! ```

use std::marker::PhantomData;

use serde_json::Value;

use crate::context::Context;
use crate::error::FailureKind;
use crate::path::Path;
use crate::rule::Rule;

/// A fixed, ordered set of canonical string tokens.
///
/// Canonical tokens are declared lower-case so input only needs to be
/// lower-cased once before comparison.
pub trait Token: Copy + 'static {
    /// Every member of the set, in declaration order.
    const TOKENS: &'static [Self];

    /// The canonical token for this member.
    fn as_str(&self) -> &'static str;

    /// Find the member matching `s`, ignoring case.
    #[must_use]
    fn from_token(s: &str) -> Option<Self> {
        let lower = s.to_lowercase();
        Self::TOKENS.iter().copied().find(|t| t.as_str() == lower)
    }

    /// The canonical tokens, in declaration order.
    #[must_use]
    fn allowed() -> Vec<&'static str> {
        Self::TOKENS.iter().map(Self::as_str).collect()
    }
}

/// Accepts a string naming one of the members of `T`, in any case.
#[derive(Debug)]
pub struct OneOf<T>(PhantomData<fn() -> T>);

impl<T> Clone for OneOf<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for OneOf<T> {}

impl<T> Default for OneOf<T> {
    fn default() -> Self {
        Self(PhantomData)
    }
}

/// A rule accepting any member of the token set `T`.
#[must_use]
pub const fn one_of<T: Token>() -> OneOf<T> {
    OneOf(PhantomData)
}

impl<T: Token> Rule for OneOf<T> {
    type Output = T;

    fn check(&self, value: &Value, path: &Path, cx: &mut Context) -> Option<T> {
        let Value::String(s) = value else {
            cx.mismatch(path, "string", value);
            return None;
        };
        let token = T::from_token(s);
        if token.is_none() {
            let kind = FailureKind::InvalidEnumValue { found: s.clone(), allowed: T::allowed() };
            cx.fail(path, kind);
        }
        token
    }
}

/// Declare a token set: a fieldless enum whose members each map to one
/// canonical, lower-case string.
///
/// The generated enum implements [`Token`], `Display`, `FromStr`, and
/// serializes to its canonical token. Deserialization matches any case.
#[macro_export]
macro_rules! tokens {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $token:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
        }

        impl $crate::Token for $name {
            const TOKENS: &'static [Self] = &[$(Self::$variant),+];

            fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $token,)+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::Token::as_str(self))
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::FailureKind;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                <Self as $crate::Token>::from_token(s).ok_or_else(|| {
                    $crate::FailureKind::InvalidEnumValue {
                        found: s.to_string(),
                        allowed: <Self as $crate::Token>::allowed(),
                    }
                })
            }
        }

        impl $crate::__private::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: $crate::__private::serde::Serializer,
            {
                serializer.serialize_str($crate::Token::as_str(self))
            }
        }

        impl<'de> $crate::__private::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: $crate::__private::serde::Deserializer<'de>,
            {
                let s: ::std::string::String =
                    $crate::__private::serde::Deserialize::deserialize(deserializer)?;
                s.parse().map_err($crate::__private::serde::de::Error::custom)
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::options::Options;

    tokens! {
        /// Test actions.
        enum Action {
            /// Redirect.
            Location => "location",
            /// Render a form.
            Form => "form",
            /// Interaction needed.
            NoInteraction => "no_interaction",
        }
    }

    fn run(value: &Value) -> Result<Action, crate::Failures> {
        let mut cx = Context::new(&Options::new());
        let out = one_of::<Action>().check(value, &Path::root().key("action"), &mut cx);
        cx.finish(out)
    }

    #[test]
    fn case_insensitive() {
        for input in ["location", "LOCATION", "Location", "lOcAtIoN"] {
            assert_eq!(run(&json!(input)).expect("should match"), Action::Location);
        }
        assert_eq!(run(&json!("NO_INTERACTION")).expect("should match"), Action::NoInteraction);
    }

    #[test]
    fn canonical_output() {
        let action = run(&json!("FORM")).expect("should match");
        assert_eq!(action.to_string(), "form");
        assert_eq!(serde_json::to_value(action).expect("should serialize"), json!("form"));
    }

    #[test]
    fn not_in_set() {
        for input in ["", " ", "0", "INVALID_ACTION", " location"] {
            let failures = run(&json!(input)).expect_err("should fail");
            assert_eq!(failures.len(), 1);
            assert_eq!(
                failures.at("action").map(|f| &f.kind),
                Some(&FailureKind::InvalidEnumValue {
                    found: input.to_string(),
                    allowed: vec!["location", "form", "no_interaction"],
                })
            );
        }
    }

    #[test]
    fn not_a_string() {
        let failures = run(&json!(1)).expect_err("should fail");
        assert_eq!(
            failures.at("action").map(|f| &f.kind),
            Some(&FailureKind::TypeMismatch { expected: "string", found: "number" })
        );
    }

    #[test]
    fn deserialize() {
        let action: Action = serde_json::from_value(json!("Location")).expect("should deserialize");
        assert_eq!(action, Action::Location);
        assert!(serde_json::from_value::<Action>(json!("elsewhere")).is_err());
    }
}
