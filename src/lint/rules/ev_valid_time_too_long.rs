//! EV validity period ceiling.

use chrono::Months;

use crate::certificate::Certificate;
use crate::lint::{Lint, LintCheck, LintResult, Source};

const MAX_MONTHS: u32 = 27;

/// EV subscriber certificates may be valid for at most 27 months.
pub struct EvValidTimeTooLong;

pub fn descriptor() -> Lint {
    Lint::new("e_ev_valid_time_too_long", EvValidTimeTooLong)
        .with_description("EV certificates must be 27 months in validity or less")
        .with_citation("CA/Browser Forum EV Guidelines v1.7, Sec. 9.4")
        .with_source(Source::CabfEvGuidelines)
}

impl LintCheck for EvValidTimeTooLong {
    fn check_applies(&self, cert: &Certificate) -> bool {
        cert.is_ev() && cert.is_subscriber()
    }

    fn execute(&self, cert: &Certificate) -> LintResult {
        let Some(limit) = cert.not_before.checked_add_months(Months::new(MAX_MONTHS)) else {
            return LintResult::fatal("notBefore is too late to compute the validity limit");
        };
        if cert.not_after > limit {
            return LintResult::error(format!(
                "EV certificate validity ends {} which is more than {} months after notBefore",
                cert.not_after.format("%Y-%m-%d"),
                MAX_MONTHS
            ));
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
            "e_ev_valid_time_too_long",
            &[
                ("ev_valid.pem", Status::Pass),
                ("ev_too_long.pem", Status::Error),
                ("dv_long_validity.pem", Status::NA),
            ],
        );
    }
}
