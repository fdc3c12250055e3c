//! CA/B Forum organizationIdentifier extension presence.

use crate::certificate::Certificate;
use crate::lint::{Lint, LintCheck, LintResult, Source};
use crate::util::dates::CAB_ALT_REG_NUM_EV_EXT_MAND_DATE;
use crate::util::oid::CABF_ORGANIZATION_IDENTIFIER_EXT;
use crate::util::OrgId;

/// subject:organizationIdentifier requires the CA/B Forum extension.
pub struct EvOrgIdExtPresentMandatory;

pub fn descriptor() -> Lint {
    Lint::new("e_ev_orgidext_present_mandatory", EvOrgIdExtPresentMandatory)
        .with_description(
            "If the subject:organizationIdentifier field is present, the CA/Browser Forum organization identifier extension MUST also be present",
        )
        .with_citation("CA/Browser Forum EV Guidelines v1.7, Sec. 9.8.2")
        .with_source(Source::CabfEvGuidelines)
        .with_effective_date(*CAB_ALT_REG_NUM_EV_EXT_MAND_DATE)
}

impl LintCheck for EvOrgIdExtPresentMandatory {
    fn check_applies(&self, cert: &Certificate) -> bool {
        cert.is_ev() && OrgId::from_raw_subject(&cert.raw_subject).is_some()
    }

    fn execute(&self, cert: &Certificate) -> LintResult {
        if !cert.has_extension(CABF_ORGANIZATION_IDENTIFIER_EXT) {
            return LintResult::error(
                "subject:organizationIdentifier field is present in an EV certificate but the CA/Browser Forum Organization Identifier Field Extension is missing",
            );
        }
        LintResult::pass()
    }
}
