//! EV subject:organizationIdentifier string type.

use crate::certificate::Certificate;
use crate::lint::{Lint, LintCheck, LintResult, Source};
use crate::util::dates::CAB_ALT_REG_NUM_EV_DATE;
use crate::util::oid::ORGANIZATION_IDENTIFIER;
use crate::util::{decode_subject, OrgId, StringKind};

/// The organizationIdentifier must be a PrintableString or UTF8String.
pub struct EvOrgIdEncoding;

pub fn descriptor() -> Lint {
    Lint::new("e_ev_orgid_encoding", EvOrgIdEncoding)
        .with_description(
            "The organizationIdentifier MUST be encoded as a PrintableString or UTF8String",
        )
        .with_citation("CA/Browser Forum EV Guidelines v1.7, Sec. 9.2.8")
        .with_source(Source::CabfEvGuidelines)
        .with_effective_date(*CAB_ALT_REG_NUM_EV_DATE)
}

impl LintCheck for EvOrgIdEncoding {
    fn check_applies(&self, cert: &Certificate) -> bool {
        cert.is_ev() && OrgId::from_raw_subject(&cert.raw_subject).is_some()
    }

    fn execute(&self, cert: &Certificate) -> LintResult {
        let subject = match decode_subject(&cert.raw_subject) {
            Ok(subject) => subject,
            Err(e) => return LintResult::fatal(format!("failed to decode subject: {}", e)),
        };
        if subject.has_trailing_data() {
            return LintResult::fatal("trailing data after subject RDNSequence");
        }

        let bad = subject
            .all(ORGANIZATION_IDENTIFIER)
            .find(|attr| !matches!(attr.kind, StringKind::Printable | StringKind::Utf8));
        match bad {
            Some(attr) => LintResult::error(format!(
                "invalid string type in subject:organizationIdentifier: {}",
                attr.kind
            )),
            None => LintResult::pass(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{assert_statuses, fixture, run};
    use crate::lint::Status;

    const LINT: &str = "e_ev_orgid_encoding";

    #[test]
    fn fixtures() {
        assert_statuses(
            LINT,
            &[
                ("ev_no_orgid.pem", Status::NA),
                ("ev_orgid_ia5.pem", Status::Error),
                ("ev_valid.pem", Status::Pass),
                ("ev_orgidext_missing_2019.pem", Status::Pass),
                ("ev_too_long.pem", Status::NE),
                ("dv_long_validity.pem", Status::NA),
            ],
        );
    }

    #[test]
    fn error_names_the_string_type() {
        let result = run(LINT, &fixture("ev_orgid_ia5.pem"));
        assert!(result.details.contains("IA5String"));
    }

    #[test]
    fn trailing_subject_data_is_fatal() {
        let mut cert = fixture("ev_valid.pem");
        cert.raw_subject.extend_from_slice(&[0x05, 0x00]);

        let result = run(LINT, &cert);
        assert_eq!(result.status, Status::Fatal);
        assert!(!result.details.is_empty());
    }
}
