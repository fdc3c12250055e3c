//! Built-in lint rules.
//!
//! Each module defines one rule and a `descriptor()` that binds it to its
//! name and policy metadata. [`builtin_lints`] is the single place new rules
//! are added; the evaluator needs no changes.

pub mod ev_ntr_subject_jurisdiction_serial;
pub mod ev_orgid_encoding;
pub mod ev_orgid_well_formed;
pub mod ev_orgidext_present_mandatory;
pub mod ev_valid_time_too_long;
pub mod ext_subject_key_identifier_missing_sub_cert;
pub mod sub_cert_valid_time_longer_than_398_days;
pub mod validity_time_not_positive;

pub use ev_ntr_subject_jurisdiction_serial::EvNtrSubjectJurisdictionSerial;
pub use ev_orgid_encoding::EvOrgIdEncoding;
pub use ev_orgid_well_formed::EvOrgIdWellFormed;
pub use ev_orgidext_present_mandatory::EvOrgIdExtPresentMandatory;
pub use ev_valid_time_too_long::EvValidTimeTooLong;
pub use ext_subject_key_identifier_missing_sub_cert::SubjectKeyIdentifierMissingSubCert;
pub use sub_cert_valid_time_longer_than_398_days::SubCertValidTimeLongerThan398Days;
pub use validity_time_not_positive::ValidityTimeNotPositive;

use super::descriptor::Lint;

/// Descriptors for every built-in rule.
pub fn builtin_lints() -> Vec<Lint> {
    vec![
        ev_orgid_encoding::descriptor(),
        ev_orgid_well_formed::descriptor(),
        ev_orgidext_present_mandatory::descriptor(),
        ev_ntr_subject_jurisdiction_serial::descriptor(),
        ev_valid_time_too_long::descriptor(),
        sub_cert_valid_time_longer_than_398_days::descriptor(),
        validity_time_not_positive::descriptor(),
        ext_subject_key_identifier_missing_sub_cert::descriptor(),
    ]
}
