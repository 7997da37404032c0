//! # Validation Context
//!
//! Per-call accumulator for failures. A `Context` lives for exactly one
//! top-level validation call and is never shared.

use serde_json::Value;

use crate::error::{Failure, FailureKind, Failures};
use crate::options::{Options, Policy};
use crate::path::Path;

/// Collects failures while a document is validated.
#[derive(Debug, Default)]
pub struct Context {
    policy: Policy,
    failures: Failures,
}

impl Context {
    /// Create a context for a single validation call.
    #[must_use]
    pub fn new(options: &Options) -> Self {
        Self { policy: options.policy, failures: Failures::default() }
    }

    /// Record a failure at `path`.
    ///
    /// Once a fail-fast context has halted, further failures are discarded.
    pub fn fail(&mut self, path: &Path, kind: FailureKind) {
        if self.halted() {
            return;
        }
        self.failures.push(Failure { path: path.clone(), kind });
    }

    /// Record a type mismatch between the `expected` JSON type and `value`.
    pub fn mismatch(&mut self, path: &Path, expected: &'static str, value: &Value) {
        self.fail(path, FailureKind::TypeMismatch { expected, found: json_type(value) });
    }

    /// Returns `true` when validation should stop visiting further values.
    #[must_use]
    pub fn halted(&self) -> bool {
        matches!(self.policy, Policy::FailFast) && !self.failures.is_empty()
    }

    /// Resolve the call: the output is only returned when nothing failed.
    ///
    /// # Errors
    ///
    /// Returns every recorded failure when at least one field failed.
    pub fn finish<T>(self, output: Option<T>) -> Result<T, Failures> {
        match output {
            Some(value) if self.failures.is_empty() => Ok(value),
            _ => Err(self.failures),
        }
    }
}

/// The JSON type name of a value.
#[must_use]
pub const fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn fail_fast_keeps_first() {
        let mut cx = Context::new(&Options::new().policy(Policy::FailFast));
        assert!(!cx.halted());

        cx.mismatch(&Path::root().key("a"), "string", &json!(1));
        cx.fail(&Path::root().key("b"), FailureKind::MissingRequired);
        assert!(cx.halted());

        let failures = cx.finish::<()>(None).expect_err("should fail");
        assert_eq!(failures.len(), 1);
        assert!(failures.at("a").is_some());
    }

    #[test]
    fn collect_keeps_all() {
        let mut cx = Context::new(&Options::new());
        cx.fail(&Path::root().key("a"), FailureKind::MissingRequired);
        cx.fail(&Path::root().key("b"), FailureKind::MissingRequired);
        assert!(!cx.halted());

        let failures = cx.finish(Some(())).expect_err("should fail");
        assert_eq!(failures.len(), 2);
    }
}
