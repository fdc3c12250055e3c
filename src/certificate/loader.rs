//! Building [`Certificate`] values from encoded input.
//!
//! Decoding is delegated to `x509-parser`; this module only copies the fields
//! rules need into the owned view.

use base64::Engine;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use x509_parser::prelude::*;

use super::{Certificate, Extension};
use crate::error::{CertlintError, Result};
use crate::util::oid::{
    EKU_ANY, EKU_CLIENT_AUTH, EKU_CODE_SIGNING, EKU_EMAIL_PROTECTION, EKU_OCSP_SIGNING,
    EKU_SERVER_AUTH, EKU_TIME_STAMPING,
};

/// Encoding of certificate input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum InputFormat {
    #[default]
    Pem,
    Der,
    Base64,
}

fn parse_error(message: impl Into<String>) -> CertlintError {
    CertlintError::CertificateParse {
        message: message.into(),
    }
}

fn timestamp(time: &ASN1Time) -> Result<DateTime<Utc>> {
    DateTime::from_timestamp(time.timestamp(), 0)
        .ok_or_else(|| parse_error(format!("validity time out of range: {}", time)))
}

impl Certificate {
    /// Decode a certificate in the given format.
    pub fn load(data: &[u8], format: InputFormat) -> Result<Self> {
        match format {
            InputFormat::Pem => Self::from_pem(data),
            InputFormat::Der => Self::from_der(data),
            InputFormat::Base64 => Self::from_base64(data),
        }
    }

    /// Decode the first PEM `CERTIFICATE` block.
    pub fn from_pem(data: &[u8]) -> Result<Self> {
        let (_, pem) = x509_parser::pem::parse_x509_pem(data)
            .map_err(|e| parse_error(format!("invalid PEM: {}", e)))?;
        if pem.label != "CERTIFICATE" {
            return Err(parse_error(format!(
                "expected a CERTIFICATE PEM block, found {}",
                pem.label
            )));
        }
        Self::from_der(&pem.contents)
    }

    /// Decode base64 DER without PEM armour. Whitespace is ignored.
    pub fn from_base64(data: &[u8]) -> Result<Self> {
        let compact: Vec<u8> = data
            .iter()
            .copied()
            .filter(|b| !b.is_ascii_whitespace())
            .collect();
        let der = base64::engine::general_purpose::STANDARD
            .decode(compact)
            .map_err(|e| parse_error(format!("invalid base64: {}", e)))?;
        Self::from_der(&der)
    }

    /// Decode a DER certificate.
    pub fn from_der(der: &[u8]) -> Result<Self> {
        let (_, x509) = parse_x509_certificate(der).map_err(|e| parse_error(e.to_string()))?;

        let mut policy_identifiers = Vec::new();
        let mut ext_key_usage = Vec::new();
        let mut extensions = Vec::new();

        for ext in x509.extensions() {
            match ext.parsed_extension() {
                ParsedExtension::CertificatePolicies(policies) => {
                    policy_identifiers.extend(policies.iter().map(|p| p.policy_id.to_id_string()));
                }
                ParsedExtension::ExtendedKeyUsage(eku) => {
                    let flags = [
                        (eku.any, EKU_ANY),
                        (eku.server_auth, EKU_SERVER_AUTH),
                        (eku.client_auth, EKU_CLIENT_AUTH),
                        (eku.code_signing, EKU_CODE_SIGNING),
                        (eku.email_protection, EKU_EMAIL_PROTECTION),
                        (eku.time_stamping, EKU_TIME_STAMPING),
                        (eku.ocsp_signing, EKU_OCSP_SIGNING),
                    ];
                    ext_key_usage.extend(
                        flags
                            .iter()
                            .filter(|(set, _)| *set)
                            .map(|(_, oid)| oid.to_string()),
                    );
                    ext_key_usage.extend(eku.other.iter().map(|oid| oid.to_id_string()));
                }
                _ => {}
            }
            extensions.push(Extension {
                oid: ext.oid.to_id_string(),
                critical: ext.critical,
                value: ext.value.to_vec(),
            });
        }

        let is_ca = x509
            .basic_constraints()
            .ok()
            .flatten()
            .is_some_and(|bc| bc.value.ca);

        let validity = x509.validity();
        Ok(Self {
            raw: der.to_vec(),
            raw_subject: x509.subject().as_raw().to_vec(),
            subject: x509.subject().to_string(),
            issuer: x509.issuer().to_string(),
            serial: x509.raw_serial_as_string(),
            not_before: timestamp(&validity.not_before)?,
            not_after: timestamp(&validity.not_after)?,
            is_ca,
            policy_identifiers,
            ext_key_usage,
            extensions,
        })
    }
}
