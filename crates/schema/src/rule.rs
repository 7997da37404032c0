//! # Rules
//!
//! A [`Rule`] checks a JSON value that is present. Presence itself (absent,
//! `null`, or a value) is decided by wrapping a rule in one of the two
//! presence adapters, [`Nullish`] or [`Required`], which turn it into a
//! [`Field`].
//!
//! Base rules never coerce: `"1"` is not a number and `1` is not a boolean.

use serde_json::{Number, Value};
use url::Url;

use crate::context::Context;
use crate::error::FailureKind;
use crate::path::Path;

/// Validates and normalizes a present JSON value.
pub trait Rule {
    /// The normalized output type.
    type Output;

    /// Check `value`, located at `path`.
    ///
    /// Returns `None` when the value failed; the reason has been recorded in
    /// `cx`.
    fn check(&self, value: &Value, path: &Path, cx: &mut Context) -> Option<Self::Output>;
}

/// Validates a named member that may be absent.
pub trait Field {
    /// The normalized output type.
    type Output;

    /// Check `value`, which is `None` when the member is absent.
    fn check_field(
        &self, value: Option<&Value>, path: &Path, cx: &mut Context,
    ) -> Option<Self::Output>;
}

/// Any JSON string.
#[derive(Clone, Copy, Debug, Default)]
pub struct Str;

impl Rule for Str {
    type Output = String;

    fn check(&self, value: &Value, path: &Path, cx: &mut Context) -> Option<String> {
        if let Value::String(s) = value {
            Some(s.clone())
        } else {
            cx.mismatch(path, "string", value);
            None
        }
    }
}

/// Any JSON number. The number's representation is kept as received.
#[derive(Clone, Copy, Debug, Default)]
pub struct Num;

impl Rule for Num {
    type Output = Number;

    fn check(&self, value: &Value, path: &Path, cx: &mut Context) -> Option<Number> {
        if let Value::Number(n) = value {
            Some(n.clone())
        } else {
            cx.mismatch(path, "number", value);
            None
        }
    }
}

/// A JSON number with an integral value in `i64` range.
///
/// Integral numbers written in float form (`1.0`, `1e12`) are accepted and
/// normalized to `i64`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Int;

// 2^63, the first float past `i64::MAX`
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

#[allow(clippy::float_cmp, clippy::cast_possible_truncation)]
fn integral(value: &Value) -> Option<i64> {
    if let Some(int) = value.as_i64() {
        return Some(int);
    }
    let float = value.as_f64()?;
    (float.fract() == 0.0 && (-I64_BOUND..I64_BOUND).contains(&float)).then(|| float as i64)
}

impl Rule for Int {
    type Output = i64;

    fn check(&self, value: &Value, path: &Path, cx: &mut Context) -> Option<i64> {
        let int = integral(value);
        if int.is_none() {
            cx.mismatch(path, "integer", value);
        }
        int
    }
}

/// A JSON boolean.
#[derive(Clone, Copy, Debug, Default)]
pub struct Bool;

impl Rule for Bool {
    type Output = bool;

    fn check(&self, value: &Value, path: &Path, cx: &mut Context) -> Option<bool> {
        let b = value.as_bool();
        if b.is_none() {
            cx.mismatch(path, "boolean", value);
        }
        b
    }
}

/// A string holding an absolute URL. The string is returned unchanged.
#[derive(Clone, Copy, Debug, Default)]
pub struct Uri;

impl Rule for Uri {
    type Output = String;

    fn check(&self, value: &Value, path: &Path, cx: &mut Context) -> Option<String> {
        let s = Str.check(value, path, cx)?;
        if Url::parse(&s).is_err() {
            cx.fail(path, FailureKind::InvalidFormat { format: "uri" });
            return None;
        }
        Some(s)
    }
}

/// Any JSON value, taken verbatim.
#[derive(Clone, Copy, Debug, Default)]
pub struct Json;

impl Rule for Json {
    type Output = Value;

    fn check(&self, value: &Value, _: &Path, _: &mut Context) -> Option<Value> {
        Some(value.clone())
    }
}

/// Nullable-but-optional: absent and `null` are equivalent and both
/// normalize to `None`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Nullish<R>(pub R);

impl<R: Rule> Field for Nullish<R> {
    type Output = Option<R::Output>;

    fn check_field(
        &self, value: Option<&Value>, path: &Path, cx: &mut Context,
    ) -> Option<Self::Output> {
        match value {
            None | Some(Value::Null) => Some(None),
            Some(value) => self.0.check(value, path, cx).map(Some),
        }
    }
}

/// A member that must be present and not `null`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Required<R>(pub R);

impl<R: Rule> Field for Required<R> {
    type Output = R::Output;

    fn check_field(
        &self, value: Option<&Value>, path: &Path, cx: &mut Context,
    ) -> Option<Self::Output> {
        match value {
            None | Some(Value::Null) => {
                cx.fail(path, FailureKind::MissingRequired);
                None
            }
            Some(value) => self.0.check(value, path, cx),
        }
    }
}

/// Wrap `rule` so that absent and `null` both yield `None`.
pub const fn nullish<R: Rule>(rule: R) -> Nullish<R> {
    Nullish(rule)
}

/// Wrap `rule` so that absent and `null` both fail with `MissingRequired`.
pub const fn required<R: Rule>(rule: R) -> Required<R> {
    Required(rule)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::options::Options;

    fn run<F: Field>(field: &F, value: Option<&Value>) -> (Option<F::Output>, Context) {
        let mut cx = Context::new(&Options::new());
        let out = field.check_field(value, &Path::root().key("f"), &mut cx);
        (out, cx)
    }

    #[test]
    fn null_is_absent() {
        assert_eq!(run(&nullish(Str), None).0, Some(None));
        assert_eq!(run(&nullish(Str), Some(&Value::Null)).0, Some(None));
        assert_eq!(run(&nullish(Bool), Some(&Value::Null)).0, Some(None));
        assert_eq!(run(&nullish(Num), None).0, Some(None));
    }

    #[test]
    fn no_coercion() {
        let (out, cx) = run(&nullish(Num), Some(&json!("1")));
        assert!(out.is_none());
        let failures = cx.finish::<()>(None).expect_err("should fail");
        assert_eq!(
            failures.at("f").map(|f| &f.kind),
            Some(&FailureKind::TypeMismatch { expected: "number", found: "string" })
        );

        assert!(run(&nullish(Bool), Some(&json!(1))).0.is_none());
        assert!(run(&nullish(Str), Some(&json!(true))).0.is_none());
    }

    #[test]
    fn value_unchanged() {
        assert_eq!(run(&nullish(Str), Some(&json!("  padded "))).0, Some(Some("  padded ".into())));
        assert_eq!(run(&required(Bool), Some(&json!(false))).0, Some(false));
        assert_eq!(
            run(&nullish(Num), Some(&json!(2.5))).0.flatten().map(|n| n.to_string()),
            Some("2.5".to_string())
        );
    }

    #[test]
    fn required_missing() {
        for value in [None, Some(&Value::Null)] {
            let (out, cx) = run(&required(Str), value);
            assert!(out.is_none());
            let failures = cx.finish::<()>(None).expect_err("should fail");
            assert_eq!(failures.at("f").map(|f| &f.kind), Some(&FailureKind::MissingRequired));
        }
    }

    #[test]
    fn integers() {
        assert_eq!(run(&nullish(Int), Some(&json!(42))).0, Some(Some(42)));
        assert!(run(&nullish(Int), Some(&json!(4.2))).0.is_none());

        // integral values in float form
        assert_eq!(run(&nullish(Int), Some(&json!(1.0))).0, Some(Some(1)));
        assert_eq!(run(&nullish(Int), Some(&json!(1e12))).0, Some(Some(1_000_000_000_000)));
        assert_eq!(run(&nullish(Int), Some(&json!(-3.0))).0, Some(Some(-3)));

        // out of range
        assert!(run(&nullish(Int), Some(&json!(u64::MAX))).0.is_none());
        assert!(run(&nullish(Int), Some(&json!(1e19))).0.is_none());
    }

    #[test]
    fn uris() {
        assert_eq!(
            run(&nullish(Uri), Some(&json!("https://ok.com"))).0,
            Some(Some("https://ok.com".to_string()))
        );

        let (out, cx) = run(&nullish(Uri), Some(&json!("not-a-url")));
        assert!(out.is_none());
        let failures = cx.finish::<()>(None).expect_err("should fail");
        assert_eq!(
            failures.at("f").map(|f| &f.kind),
            Some(&FailureKind::InvalidFormat { format: "uri" })
        );
    }
}
