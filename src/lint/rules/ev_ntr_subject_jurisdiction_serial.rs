//! Subject fields required alongside an NTR organizationIdentifier.

use once_cell::sync::OnceCell;
use regex::Regex;

use crate::certificate::Certificate;
use crate::lint::{Lint, LintCheck, LintResult, Source};
use crate::util::dates::CAB_ALT_REG_NUM_EV_DATE;
use crate::util::oid::{JURISDICTION_COUNTRY, JURISDICTION_STATE_OR_PROVINCE, SERIAL_NUMBER};
use crate::util::{decode_subject, OrgId, OrgIdParts, ORG_ID_PATTERN};

/// An NTR registration reference must agree with the subject's jurisdiction
/// fields and be accompanied by subject:serialNumber.
#[derive(Default)]
pub struct EvNtrSubjectJurisdictionSerial {
    pattern: OnceCell<Regex>,
}

pub fn descriptor() -> Lint {
    Lint::new(
        "e_ev_ntr_subject_jurisdiction_serial",
        EvNtrSubjectJurisdictionSerial::default(),
    )
    .with_description(
        "An NTR organizationIdentifier requires subject:jurisdiction fields matching its country and state, and subject:serialNumber",
    )
    .with_citation("CA/Browser Forum EV Guidelines v1.7, Sec. 9.2.8")
    .with_source(Source::CabfEvGuidelines)
    .with_effective_date(*CAB_ALT_REG_NUM_EV_DATE)
}

impl EvNtrSubjectJurisdictionSerial {
    fn ntr_parts(&self, cert: &Certificate) -> Option<OrgIdParts> {
        let org_id = OrgId::from_raw_subject(&cert.raw_subject)?;
        let caps = self.pattern.get()?.captures(&org_id.value)?;
        OrgIdParts::from_captures(&caps).filter(|parts| parts.scheme == "NTR")
    }
}

impl LintCheck for EvNtrSubjectJurisdictionSerial {
    fn initialize(&self) -> anyhow::Result<()> {
        self.pattern.get_or_try_init(|| Regex::new(ORG_ID_PATTERN))?;
        Ok(())
    }

    fn check_applies(&self, cert: &Certificate) -> bool {
        cert.is_ev() && self.ntr_parts(cert).is_some()
    }

    fn execute(&self, cert: &Certificate) -> LintResult {
        let Some(parts) = self.ntr_parts(cert) else {
            return LintResult::fatal("subject:organizationIdentifier could not be parsed");
        };
        let subject = match decode_subject(&cert.raw_subject) {
            Ok(subject) => subject,
            Err(e) => return LintResult::fatal(format!("failed to decode subject: {}", e)),
        };

        let Some(jurisdiction) = subject.value(JURISDICTION_COUNTRY) else {
            return LintResult::error(
                "subject:jurisdictionCountryName is required with an NTR organizationIdentifier",
            );
        };
        if subject.value(SERIAL_NUMBER).is_none() {
            return LintResult::error(
                "subject:serialNumber is required with an NTR organizationIdentifier",
            );
        }
        if jurisdiction != parts.country {
            return LintResult::error(format!(
                "subject:organizationIdentifier country '{}' does not match subject:jurisdictionCountryName '{}'",
                parts.country, jurisdiction
            ));
        }
        if let Some(state) = &parts.state {
            match subject.value(JURISDICTION_STATE_OR_PROVINCE) {
                None => {
                    return LintResult::error(
                        "subject:organizationIdentifier names a state or province but subject:jurisdictionStateOrProvinceName is missing",
                    )
                }
                Some(jurisdiction_state) if jurisdiction_state != state => {
                    return LintResult::error(format!(
                        "subject:organizationIdentifier state '{}' does not match subject:jurisdictionStateOrProvinceName '{}'",
                        state, jurisdiction_state
                    ))
                }
                Some(_) => {}
            }
        }

        LintResult::pass()
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::assert_statuses;
    use crate::lint::Status;

    #[test]
    fn fixtures() {
        assert_statuses(
            "e_ev_ntr_subject_jurisdiction_serial",
            &[
                ("ev_no_orgid.pem", Status::NA),
                ("ev_valid.pem", Status::Pass),
                ("ev_ntr_jurisdiction_mismatch.pem", Status::Error),
                ("ev_ntr_state_missing.pem", Status::Error),
                ("ev_vat_valid.pem", Status::NA),
                ("ev_orgid_bad_pattern.pem", Status::NA),
            ],
        );
    }
}
