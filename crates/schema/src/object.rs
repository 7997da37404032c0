//! # Objects
//!
//! Composite schemas are Rust types implementing [`Shape`]. A shape reads
//! its declared members through a [`Fields`] reader and is embedded in other
//! shapes (or arrays) using the [`Object`] rule, so each composed schema is
//! declared exactly once and behaves the same wherever it appears.
//!
//! ```rust
//! use credibil_schema::{Fields, Mode, Shape, Str, nullish, required, validate};
//! use serde_json::{Map, Value, json};
//!
//! struct Pair {
//!     key: String,
//!     value: Option<String>,
//!     extra: Map<String, Value>,
//! }
//!
//! impl Shape for Pair {
//!     const NAME: &'static str = "Pair";
//!     const MODE: Mode = Mode::Open;
//!
//!     fn read(f: &mut Fields<'_>) -> Option<Self> {
//!         let key = f.field("key", required(Str));
//!         let value = f.field("value", nullish(Str));
//!         Some(Self { key: key?, value: value?, extra: f.rest() })
//!     }
//! }
//!
//! let pair: Pair = validate(&json!({"key": "k", "value": null, "x": 1})).unwrap();
//! assert_eq!(pair.key, "k");
//! assert!(pair.value.is_none());
//! assert_eq!(pair.extra.get("x"), Some(&json!(1)));
//! ```

use std::marker::PhantomData;

use serde_json::{Map, Value};

use crate::context::Context;
use crate::path::Path;
use crate::rule::{Field, Rule};

/// How an object treats members it does not declare.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    /// Undeclared members are dropped from the output. They are not an
    /// error.
    #[default]
    Closed,

    /// Undeclared members are passed through verbatim, without validation.
    Open,
}

/// A composed schema.
pub trait Shape: Sized {
    /// Schema name, used in diagnostics.
    const NAME: &'static str;

    /// Treatment of undeclared members.
    const MODE: Mode = Mode::Closed;

    /// Read every declared member from `fields`.
    ///
    /// Implementations must evaluate all fields before unwrapping any of
    /// them so that every failing member is reported. Open shapes collect
    /// passthrough members with [`Fields::rest`] after the declared fields
    /// have been read.
    fn read(fields: &mut Fields<'_>) -> Option<Self>;
}

/// Reader over the members of one JSON object.
#[derive(Debug)]
pub struct Fields<'a> {
    map: &'a Map<String, Value>,
    path: &'a Path,
    cx: &'a mut Context,
    mode: Mode,
    declared: Vec<&'static str>,
}

impl<'a> Fields<'a> {
    fn new(map: &'a Map<String, Value>, path: &'a Path, cx: &'a mut Context, mode: Mode) -> Self {
        Self { map, path, cx, mode, declared: Vec::new() }
    }

    /// Validate the member `name` with `rule`.
    ///
    /// Returns `None` when the member failed or a fail-fast call has already
    /// halted.
    pub fn field<F: Field>(&mut self, name: &'static str, rule: F) -> Option<F::Output> {
        self.declared.push(name);
        if self.cx.halted() {
            return None;
        }
        rule.check_field(self.map.get(name), &self.path.key(name), self.cx)
    }

    /// Members not declared so far, copied verbatim.
    ///
    /// Always empty for closed objects.
    #[must_use]
    pub fn rest(&self) -> Map<String, Value> {
        match self.mode {
            Mode::Open => self.undeclared().map(|(k, v)| (k.clone(), v.clone())).collect(),
            Mode::Closed => Map::new(),
        }
    }

    fn undeclared(&self) -> impl Iterator<Item = (&'a String, &'a Value)> + '_ {
        self.map.iter().filter(|(k, _)| !self.declared.iter().any(|d| *d == k.as_str()))
    }
}

/// Accepts a JSON object conforming to the shape `S`.
#[derive(Debug)]
pub struct Object<S>(PhantomData<fn() -> S>);

impl<S> Clone for Object<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for Object<S> {}

impl<S> Default for Object<S> {
    fn default() -> Self {
        Self(PhantomData)
    }
}

/// A rule accepting objects of shape `S`.
#[must_use]
pub const fn object<S: Shape>() -> Object<S> {
    Object(PhantomData)
}

impl<S: Shape> Rule for Object<S> {
    type Output = S;

    fn check(&self, value: &Value, path: &Path, cx: &mut Context) -> Option<S> {
        let Value::Object(map) = value else {
            cx.mismatch(path, "object", value);
            return None;
        };

        let mut fields = Fields::new(map, path, cx, S::MODE);
        let output = S::read(&mut fields);

        if S::MODE == Mode::Closed {
            for (key, _) in fields.undeclared() {
                tracing::trace!(
                    schema = S::NAME,
                    %path,
                    key = key.as_str(),
                    "dropping undeclared member"
                );
            }
        }
        output
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::error::FailureKind;
    use crate::options::Options;
    use crate::rule::{Bool, Str, nullish, required};

    #[derive(Debug, PartialEq)]
    struct Closed {
        name: String,
        enabled: Option<bool>,
    }

    impl Shape for Closed {
        const NAME: &'static str = "Closed";

        fn read(f: &mut Fields<'_>) -> Option<Self> {
            let name = f.field("name", required(Str));
            let enabled = f.field("enabled", nullish(Bool));
            Some(Self { name: name?, enabled: enabled? })
        }
    }

    #[derive(Debug, PartialEq)]
    struct Open {
        name: Option<String>,
        extra: Map<String, Value>,
    }

    impl Shape for Open {
        const MODE: Mode = Mode::Open;
        const NAME: &'static str = "Open";

        fn read(f: &mut Fields<'_>) -> Option<Self> {
            let name = f.field("name", nullish(Str));
            Some(Self { name: name?, extra: f.rest() })
        }
    }

    fn run<S: Shape>(value: &Value) -> Result<S, crate::Failures> {
        let mut cx = Context::new(&Options::new());
        let out = object::<S>().check(value, &Path::root(), &mut cx);
        cx.finish(out)
    }

    #[test]
    fn closed_drops_unknown() {
        let closed: Closed = run(&json!({"name": "n", "other": [1, 2]})).expect("should validate");
        assert_eq!(closed, Closed { name: "n".into(), enabled: None });
    }

    #[test]
    fn open_keeps_unknown() {
        let open: Open = run(&json!({"name": null, "a": {"deep": [null]}, "b": "x"}))
            .expect("should validate");
        assert!(open.name.is_none());
        assert_eq!(open.extra.len(), 2);
        assert_eq!(open.extra.get("a"), Some(&json!({"deep": [null]})));
        assert_eq!(open.extra.get("b"), Some(&json!("x")));
    }

    #[test]
    fn siblings_all_reported() {
        let failures =
            run::<Closed>(&json!({"name": 1, "enabled": "yes"})).expect_err("should fail");
        assert_eq!(failures.len(), 2);
        assert!(failures.at("name").is_some());
        assert!(failures.at("enabled").is_some());
    }

    #[test]
    fn not_an_object() {
        for value in [json!([]), json!("x"), json!(1), Value::Null] {
            let failures = run::<Closed>(&value).expect_err("should fail");
            assert_eq!(failures.len(), 1);
            assert!(matches!(
                failures.at("").map(|f| &f.kind),
                Some(FailureKind::TypeMismatch { expected: "object", .. })
            ));
        }
    }
}
