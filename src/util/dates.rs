//! Effective dates for rules, named after the policy event that introduced them.
//!
//! A lint is in force for certificates whose notBefore is at or after its
//! effective date.

use chrono::{DateTime, TimeZone, Utc};
use once_cell::sync::Lazy;

fn utc(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .unwrap_or_default()
}

/// RFC 2459 publication; the earliest date RFC 5280-family rules apply from.
pub static RFC2459_DATE: Lazy<DateTime<Utc>> = Lazy::new(|| utc(1999, 1, 1));

/// EV Guidelines 1.7 (ballot SC17) permits registration references in
/// subject:organizationIdentifier.
pub static CAB_ALT_REG_NUM_EV_DATE: Lazy<DateTime<Utc>> = Lazy::new(|| utc(2019, 1, 31));

/// The CA/B Forum organizationIdentifier extension becomes mandatory
/// alongside subject:organizationIdentifier.
pub static CAB_ALT_REG_NUM_EV_EXT_MAND_DATE: Lazy<DateTime<Utc>> =
    Lazy::new(|| utc(2020, 1, 31));

/// Baseline Requirements ballot SC31: subscriber validity capped at 398 days.
pub static SUB_CERT_398_DAYS_DATE: Lazy<DateTime<Utc>> = Lazy::new(|| utc(2020, 9, 1));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dates_are_ordered() {
        assert!(*RFC2459_DATE < *CAB_ALT_REG_NUM_EV_DATE);
        assert!(*CAB_ALT_REG_NUM_EV_DATE < *CAB_ALT_REG_NUM_EV_EXT_MAND_DATE);
        assert!(*CAB_ALT_REG_NUM_EV_EXT_MAND_DATE < *SUB_CERT_398_DAYS_DATE);
    }

    #[test]
    fn ev_date_is_midnight_utc() {
        assert_eq!(
            CAB_ALT_REG_NUM_EV_DATE.to_rfc3339(),
            "2019-01-31T00:00:00+00:00"
        );
    }
}
