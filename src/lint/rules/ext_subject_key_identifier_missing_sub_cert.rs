//! subjectKeyIdentifier on subscriber certificates.

use crate::certificate::Certificate;
use crate::lint::{Lint, LintCheck, LintResult, Source};
use crate::util::dates::RFC2459_DATE;
use crate::util::oid::SUBJECT_KEY_IDENTIFIER;

/// Subscriber certificates should carry a subjectKeyIdentifier.
pub struct SubjectKeyIdentifierMissingSubCert;

pub fn descriptor() -> Lint {
    Lint::new(
        "w_ext_subject_key_identifier_missing_sub_cert",
        SubjectKeyIdentifierMissingSubCert,
    )
    .with_description("Sub certificates SHOULD include Subject Key Identifier in end entity certs")
    .with_citation("RFC 5280: 4.2 & 4.2.1.2")
    .with_source(Source::Rfc5280)
    .with_effective_date(*RFC2459_DATE)
}

impl LintCheck for SubjectKeyIdentifierMissingSubCert {
    fn check_applies(&self, cert: &Certificate) -> bool {
        cert.is_subscriber()
    }

    fn execute(&self, cert: &Certificate) -> LintResult {
        if cert.has_extension(SUBJECT_KEY_IDENTIFIER) {
            LintResult::pass()
        } else {
            LintResult::warn("subscriber certificate has no subjectKeyIdentifier extension")
        }
    }
}
