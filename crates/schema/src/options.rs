//! # Validation Options

use serde::{Deserialize, Serialize};

/// How many failures a validation call gathers before giving up.
#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum Policy {
    /// Validate every field and report all failures.
    #[default]
    Collect,

    /// Stop at the first failure.
    FailFast,
}

/// Options applied to a top-level validation call.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct Options {
    /// Failure collection policy.
    pub policy: Policy,
}

impl Options {
    /// Create `Options` with the default (collecting) policy.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Specify the failure collection policy.
    #[must_use]
    pub const fn policy(mut self, policy: Policy) -> Self {
        self.policy = policy;
        self
    }
}
