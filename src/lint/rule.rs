//! Lint check contract.
//!
//! Every rule implements [`LintCheck`]. The evaluator drives the three
//! operations in a fixed order and owns all gating, memoization and failure
//! isolation, so implementations only describe the rule itself.

use crate::certificate::Certificate;

use super::status::LintResult;

/// The behaviour of a single compliance rule.
///
/// Implementations must not share mutable state with other rules. A check may
/// hold state that is set up once by [`initialize`](LintCheck::initialize)
/// (for example a compiled regular expression) but must otherwise behave as a
/// pure function of the certificate.
pub trait LintCheck: Send + Sync {
    /// One-time setup. Called at most once per descriptor per process.
    fn initialize(&self) -> anyhow::Result<()> {
        Ok(())
    }

    /// Whether the rule's preconditions hold for this certificate.
    ///
    /// Independent of the rule's effective date, which the evaluator checks
    /// first.
    fn check_applies(&self, cert: &Certificate) -> bool;

    /// Inspect the certificate and return a verdict.
    fn execute(&self, cert: &Certificate) -> LintResult;
}
