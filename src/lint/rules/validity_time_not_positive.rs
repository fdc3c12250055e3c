//! Validity period ordering.

use crate::certificate::Certificate;
use crate::lint::{Lint, LintCheck, LintResult, Source};

/// notAfter must not precede notBefore.
pub struct ValidityTimeNotPositive;

pub fn descriptor() -> Lint {
    Lint::new("e_validity_time_not_positive", ValidityTimeNotPositive)
        .with_description("Certificates MUST have a positive time for which they are valid")
        .with_citation("RFC 5280: 4.1.2.5")
        .with_source(Source::Rfc5280)
}

impl LintCheck for ValidityTimeNotPositive {
    fn check_applies(&self, _cert: &Certificate) -> bool {
        true
    }

    fn execute(&self, cert: &Certificate) -> LintResult {
        if cert.not_after < cert.not_before {
            return LintResult::error("notAfter is earlier than notBefore");
        }
        LintResult::pass()
    }
}
