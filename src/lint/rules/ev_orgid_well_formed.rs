//! EV subject:organizationIdentifier syntax.

use once_cell::sync::OnceCell;
use regex::Regex;

use crate::certificate::Certificate;
use crate::lint::{Lint, LintCheck, LintResult, Source};
use crate::util::dates::CAB_ALT_REG_NUM_EV_DATE;
use crate::util::{is_iso_country_code, OrgId, OrgIdParts, ORG_ID_PATTERN};

const SCHEMES: &[&str] = &["NTR", "VAT", "PSD"];

/// Country prefixes VAT numbers use that are not ISO 3166-1 codes.
const VAT_COUNTRY_EXCEPTIONS: &[&str] = &["EL", "XI"];

/// The organizationIdentifier must follow EVG 9.2.8 syntax.
#[derive(Default)]
pub struct EvOrgIdWellFormed {
    pattern: OnceCell<Regex>,
}

pub fn descriptor() -> Lint {
    Lint::new("e_ev_orgid_well_formed", EvOrgIdWellFormed::default())
        .with_description(
            "The organizationIdentifier MUST be a registration scheme, country code, optional state or province, and registration reference",
        )
        .with_citation("CA/Browser Forum EV Guidelines v1.7, Sec. 9.2.8")
        .with_source(Source::CabfEvGuidelines)
        .with_effective_date(*CAB_ALT_REG_NUM_EV_DATE)
}

impl LintCheck for EvOrgIdWellFormed {
    fn initialize(&self) -> anyhow::Result<()> {
        self.pattern.get_or_try_init(|| Regex::new(ORG_ID_PATTERN))?;
        Ok(())
    }

    fn check_applies(&self, cert: &Certificate) -> bool {
        cert.is_ev() && OrgId::from_raw_subject(&cert.raw_subject).is_some()
    }

    fn execute(&self, cert: &Certificate) -> LintResult {
        let Some(pattern) = self.pattern.get() else {
            return LintResult::fatal("organizationIdentifier pattern not initialized");
        };
        let Some(org_id) = OrgId::from_raw_subject(&cert.raw_subject) else {
            return LintResult::fatal("subject:organizationIdentifier could not be read");
        };

        let Some(parts) = pattern
            .captures(&org_id.value)
            .and_then(|caps| OrgIdParts::from_captures(&caps))
        else {
            return LintResult::error(format!(
                "subject:organizationIdentifier '{}' does not match the expected pattern",
                org_id.value
            ));
        };

        if !SCHEMES.contains(&parts.scheme.as_str()) {
            return LintResult::error(format!(
                "subject:organizationIdentifier uses unknown registration scheme '{}'",
                parts.scheme
            ));
        }

        let country_ok = is_iso_country_code(&parts.country)
            || (parts.scheme == "VAT" && VAT_COUNTRY_EXCEPTIONS.contains(&parts.country.as_str()));
        if !country_ok {
            return LintResult::error(format!(
                "subject:organizationIdentifier has invalid country code '{}'",
                parts.country
            ));
        }

        if parts.state.is_some() && parts.scheme != "NTR" {
            return LintResult::error(
                "subject:organizationIdentifier may only include a state or province with the NTR scheme",
            );
        }

        LintResult::pass()
    }
}
