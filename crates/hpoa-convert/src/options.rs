//! Options that control batch conversion.

use serde::{Deserialize, Serialize};

use hpoa_model::TermId;
use hpoa_ontology::ModifierIndex;

/// What the batch driver does when a row fails fatally.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
    /// Stop at the first fatal row. Rows before it are kept.
    Halt,
    /// Convert every row and report all failures.
    #[default]
    Collect,
}

/// Batches below this size are converted on the calling thread.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 256;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionOptions {
    pub failure_policy: FailurePolicy,
    pub parallel_threshold: usize,
    /// Root of the subtree searched for modifier labels.
    pub modifier_root: TermId,
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self {
            failure_policy: FailurePolicy::default(),
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
            modifier_root: ModifierIndex::clinical_modifier_root(),
        }
    }
}

impl ConversionOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn halt_on_error(mut self) -> Self {
        self.failure_policy = FailurePolicy::Halt;
        self
    }

    #[must_use]
    pub fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }

    #[must_use]
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    #[must_use]
    pub fn with_modifier_root(mut self, root: TermId) -> Self {
        self.modifier_root = root;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_collect_and_use_clinical_modifier_root() {
        let options = ConversionOptions::default();
        assert_eq!(options.failure_policy, FailurePolicy::Collect);
        assert_eq!(options.modifier_root.as_str(), "HP:0012823");
        assert_eq!(options.parallel_threshold, DEFAULT_PARALLEL_THRESHOLD);
    }

    #[test]
    fn serializes_policy_in_snake_case() {
        let options = ConversionOptions::new().halt_on_error();
        let json = serde_json::to_value(&options).unwrap();
        assert_eq!(json["failure_policy"], "halt");
        assert_eq!(json["modifier_root"], "HP:0012823");
    }
}
