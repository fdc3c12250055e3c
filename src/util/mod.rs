//! Shared helpers for lint rules.
//!
//! - [`oid`] - Dotted OID constants for extensions, attributes and policies
//! - [`dates`] - Named effective dates taken from policy documents
//! - [`ev`] - Extended Validation policy detection
//! - [`subject`] - Subject RDN decoding and organizationIdentifier parsing
//! - [`countries`] - ISO 3166-1 alpha-2 country codes

pub mod countries;
pub mod dates;
pub mod ev;
pub mod oid;
pub mod subject;

pub use countries::is_iso_country_code;
pub use ev::is_ev_policy;
pub use subject::{
    decode_subject, DecodedSubject, OrgId, OrgIdParts, StringKind, SubjectAttribute, SubjectError,
    ORG_ID_PATTERN,
};
