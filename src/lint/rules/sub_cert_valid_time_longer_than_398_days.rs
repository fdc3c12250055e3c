//! Baseline Requirements 398-day subscriber validity limit.

use chrono::TimeDelta;

use crate::certificate::Certificate;
use crate::lint::{Lint, LintCheck, LintResult, Source};
use crate::util::dates::SUB_CERT_398_DAYS_DATE;

const MAX_DAYS: i64 = 398;

/// Subscriber certificates issued after 2020-09-01 may be valid for at most
/// 398 days.
pub struct SubCertValidTimeLongerThan398Days;

pub fn descriptor() -> Lint {
    Lint::new(
        "e_sub_cert_valid_time_longer_than_398_days",
        SubCertValidTimeLongerThan398Days,
    )
    .with_description(
        "Subscriber Certificates issued after 1 September 2020 MUST NOT have a Validity Period greater than 398 days",
    )
    .with_citation("CA/Browser Forum Baseline Requirements, Sec. 6.3.2")
    .with_source(Source::CabfBaselineRequirements)
    .with_effective_date(*SUB_CERT_398_DAYS_DATE)
}

impl LintCheck for SubCertValidTimeLongerThan398Days {
    fn check_applies(&self, cert: &Certificate) -> bool {
        cert.is_subscriber()
    }

    fn execute(&self, cert: &Certificate) -> LintResult {
        // notAfter is inclusive.
        let validity = cert.validity() + TimeDelta::seconds(1);
        if validity > TimeDelta::days(MAX_DAYS) {
            return LintResult::error(format!(
                "validity period of {} days exceeds the maximum of {} days",
                validity.num_days(),
                MAX_DAYS
            ));
        }
        LintResult::pass()
    }
}
