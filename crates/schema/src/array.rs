//! # Arrays

use serde_json::Value;

use crate::context::Context;
use crate::path::Path;
use crate::rule::Rule;

/// Accepts a JSON array whose elements each satisfy `R`.
///
/// Element failures are attributed to `path[index]`. An empty array is
/// valid and distinct from an absent one.
#[derive(Clone, Copy, Debug, Default)]
pub struct ArrayOf<R>(pub R);

/// A rule accepting arrays of `rule` elements.
pub const fn array<R: Rule>(rule: R) -> ArrayOf<R> {
    ArrayOf(rule)
}

impl<R: Rule> Rule for ArrayOf<R> {
    type Output = Vec<R::Output>;

    fn check(&self, value: &Value, path: &Path, cx: &mut Context) -> Option<Self::Output> {
        let Value::Array(items) = value else {
            cx.mismatch(path, "array", value);
            return None;
        };

        let mut output = Vec::with_capacity(items.len());
        let mut failed = false;

        for (index, item) in items.iter().enumerate() {
            if cx.halted() {
                return None;
            }
            match self.0.check(item, &path.index(index), cx) {
                Some(element) => output.push(element),
                None => failed = true,
            }
        }

        if failed { None } else { Some(output) }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::Failures;
    use crate::error::FailureKind;
    use crate::options::{Options, Policy};
    use crate::rule::{Field, Str, Uri, nullish};

    fn run<F: Field>(
        field: &F, value: Option<&Value>, options: &Options,
    ) -> Result<F::Output, Failures> {
        let mut cx = Context::new(options);
        let out = field.check_field(value, &Path::root().key("resources"), &mut cx);
        cx.finish(out)
    }

    #[test]
    fn empty_is_not_absent() {
        let options = Options::new();
        assert_eq!(run(&nullish(array(Str)), Some(&json!([])), &options), Ok(Some(vec![])));
        assert_eq!(run(&nullish(array(Str)), Some(&Value::Null), &options), Ok(None));
        assert_eq!(run(&nullish(array(Str)), None, &options), Ok(None));
    }

    #[test]
    fn element_path() {
        let value = json!(["not-a-url", "https://ok.com"]);
        let failures =
            run(&nullish(array(Uri)), Some(&value), &Options::new()).expect_err("should fail");

        assert_eq!(failures.len(), 1);
        assert_eq!(
            failures.at("resources[0]").map(|f| &f.kind),
            Some(&FailureKind::InvalidFormat { format: "uri" })
        );
    }

    #[test]
    fn null_element() {
        let value = json!(["a", null, 3]);
        let failures =
            run(&nullish(array(Str)), Some(&value), &Options::new()).expect_err("should fail");

        assert_eq!(failures.len(), 2);
        assert!(failures.at("resources[1]").is_some());
        assert!(failures.at("resources[2]").is_some());
    }

    #[test]
    fn fail_fast() {
        let value = json!([1, 2, 3]);
        let options = Options::new().policy(Policy::FailFast);
        let failures = run(&nullish(array(Str)), Some(&value), &options).expect_err("should fail");

        assert_eq!(failures.len(), 1);
        assert!(failures.at("resources[0]").is_some());
    }

    #[test]
    fn not_an_array() {
        let failures = run(&nullish(array(Str)), Some(&json!("a")), &Options::new())
            .expect_err("should fail");
        assert_eq!(
            failures.at("resources").map(|f| &f.kind),
            Some(&FailureKind::TypeMismatch { expected: "array", found: "string" })
        );
    }
}
