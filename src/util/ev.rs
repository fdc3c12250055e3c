//! Extended Validation policy detection.
//!
//! A certificate is EV when any of its certificate policy identifiers is the
//! CA/Browser Forum EV OID or a CA-specific EV OID recognised by the major
//! root programs.

use super::oid::CABF_EV_POLICY;

/// Known EV policy OIDs.
const EV_POLICY_OIDS: &[&str] = &[
    CABF_EV_POLICY,
    // DigiCert
    "2.16.840.1.114412.2.1",
    // Entrust
    "2.16.840.1.114028.10.1.2",
    // Sectigo
    "1.3.6.1.4.1.6449.1.2.1.5.1",
    // GlobalSign
    "1.3.6.1.4.1.4146.1.1",
    // SwissSign
    "2.16.756.1.89.1.2.1.1",
    // Network Solutions
    "1.3.6.1.4.1.782.1.2.1.8.1",
    // QuoVadis
    "1.3.6.1.4.1.8024.0.2.100.1.2",
    // GoDaddy
    "2.16.840.1.114413.1.7.23.3",
    // Starfield
    "2.16.840.1.114414.1.7.23.3",
    // Thawte
    "2.16.840.1.113733.1.7.48.1",
    // VeriSign / Symantec
    "2.16.840.1.113733.1.7.23.6",
    // Certum
    "1.2.616.1.113527.2.5.1.1",
    // Buypass
    "2.16.578.1.26.1.3.3",
    // SECOM
    "1.2.392.200091.100.721.1",
    // Actalis
    "1.3.159.1.17.1",
    // Camerfirma
    "1.3.6.1.4.1.17326.10.14.2.1.2",
    // HARICA
    "1.3.6.1.4.1.26513.1.1.1.4",
];

/// Returns true if `oid` identifies an EV policy.
pub fn is_ev_policy(oid: &str) -> bool {
    EV_POLICY_OIDS.contains(&oid)
}
