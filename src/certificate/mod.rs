//! Decoded certificate view.
//!
//! The engine never touches certificate bytes directly. A [`Certificate`] is
//! built once from DER (see [`loader`]) and every rule reads the same owned,
//! already-decoded fields.

pub mod loader;

pub use loader::InputFormat;

use chrono::{DateTime, TimeDelta, Utc};
use sha2::{Digest, Sha256};

use crate::util::ev::is_ev_policy;
use crate::util::oid::{EKU_ANY, EKU_SERVER_AUTH, EXT_KEY_USAGE};

/// A raw certificate extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extension {
    /// Extension identifier as a dotted OID.
    pub oid: String,
    pub critical: bool,
    /// DER contents of the extnValue OCTET STRING.
    pub value: Vec<u8>,
}

/// A decoded X.509 certificate.
#[derive(Debug, Clone, Default)]
pub struct Certificate {
    /// Full DER encoding.
    pub raw: Vec<u8>,
    /// DER encoding of the subject Name.
    pub raw_subject: Vec<u8>,
    /// Subject rendered as an RFC 4514-style string.
    pub subject: String,
    /// Issuer rendered as an RFC 4514-style string.
    pub issuer: String,
    /// Serial number as colon-separated hex.
    pub serial: String,
    pub not_before: DateTime<Utc>,
    pub not_after: DateTime<Utc>,
    /// Whether basicConstraints marks this as a CA certificate.
    pub is_ca: bool,
    /// Certificate policy identifiers, dotted OIDs.
    pub policy_identifiers: Vec<String>,
    /// Extended key usage purposes, dotted OIDs.
    pub ext_key_usage: Vec<String>,
    pub extensions: Vec<Extension>,
}

impl Certificate {
    /// First extension with the given OID.
    pub fn extension(&self, oid: &str) -> Option<&Extension> {
        self.extensions.iter().find(|e| e.oid == oid)
    }

    /// Whether an extension with the given OID is present.
    pub fn has_extension(&self, oid: &str) -> bool {
        self.extension(oid).is_some()
    }

    /// Whether any policy identifier is an EV policy.
    pub fn is_ev(&self) -> bool {
        self.policy_identifiers.iter().any(|p| is_ev_policy(p))
    }

    /// Whether the certificate may be used for TLS server authentication.
    ///
    /// A certificate without an extKeyUsage extension is unrestricted.
    pub fn is_server_auth(&self) -> bool {
        if !self.has_extension(EXT_KEY_USAGE) {
            return true;
        }
        self.ext_key_usage
            .iter()
            .any(|eku| eku == EKU_SERVER_AUTH || eku == EKU_ANY)
    }

    /// Subscriber (end-entity) certificate.
    pub fn is_subscriber(&self) -> bool {
        !self.is_ca
    }

    /// Length of the validity period. Negative if notAfter precedes notBefore.
    pub fn validity(&self) -> TimeDelta {
        self.not_after - self.not_before
    }

    /// SHA-256 of the DER encoding, lowercase hex.
    pub fn fingerprint_sha256(&self) -> String {
        hex::encode(Sha256::digest(&self.raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::oid::{EKU_CLIENT_AUTH, SUBJECT_KEY_IDENTIFIER};
    use chrono::TimeZone;

    fn with_eku(ekus: &[&str]) -> Certificate {
        Certificate {
            extensions: vec![Extension {
                oid: EXT_KEY_USAGE.to_string(),
                critical: false,
                value: vec![],
            }],
            ext_key_usage: ekus.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn no_eku_is_server_auth() {
        assert!(Certificate::default().is_server_auth());
    }

    #[test]
    fn client_only_eku_is_not_server_auth() {
        assert!(!with_eku(&[EKU_CLIENT_AUTH]).is_server_auth());
        assert!(with_eku(&[EKU_CLIENT_AUTH, EKU_SERVER_AUTH]).is_server_auth());
        assert!(with_eku(&[EKU_ANY]).is_server_auth());
    }

    #[test]
    fn extension_lookup() {
        let cert = with_eku(&[]);
        assert!(cert.has_extension(EXT_KEY_USAGE));
        assert!(!cert.has_extension(SUBJECT_KEY_IDENTIFIER));
    }

    #[test]
    fn ev_detection() {
        let cert = Certificate {
            policy_identifiers: vec!["2.23.140.1.2.2".into(), "2.23.140.1.1".into()],
            ..Default::default()
        };
        assert!(cert.is_ev());
        assert!(!Certificate::default().is_ev());
    }

    #[test]
    fn validity_can_be_negative() {
        let cert = Certificate {
            not_before: Utc.with_ymd_and_hms(2021, 1, 2, 0, 0, 0).unwrap(),
            not_after: Utc.with_ymd_and_hms(2021, 1, 1, 0, 0, 0).unwrap(),
            ..Default::default()
        };
        assert!(cert.validity() < TimeDelta::zero());
    }

    #[test]
    fn fingerprint_is_hex_sha256() {
        let cert = Certificate::default();
        assert_eq!(
            cert.fingerprint_sha256(),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }
}
