//! Object identifiers used by the built-in rules, in dotted form.

/// subjectKeyIdentifier (RFC 5280 4.2.1.2).
pub const SUBJECT_KEY_IDENTIFIER: &str = "2.5.29.14";
/// basicConstraints (RFC 5280 4.2.1.9).
pub const BASIC_CONSTRAINTS: &str = "2.5.29.19";
/// certificatePolicies (RFC 5280 4.2.1.4).
pub const CERTIFICATE_POLICIES: &str = "2.5.29.32";
/// extKeyUsage (RFC 5280 4.2.1.12).
pub const EXT_KEY_USAGE: &str = "2.5.29.37";

/// anyExtendedKeyUsage.
pub const EKU_ANY: &str = "2.5.29.37.0";
/// id-kp-serverAuth.
pub const EKU_SERVER_AUTH: &str = "1.3.6.1.5.5.7.3.1";
/// id-kp-clientAuth.
pub const EKU_CLIENT_AUTH: &str = "1.3.6.1.5.5.7.3.2";
/// id-kp-codeSigning.
pub const EKU_CODE_SIGNING: &str = "1.3.6.1.5.5.7.3.3";
/// id-kp-emailProtection.
pub const EKU_EMAIL_PROTECTION: &str = "1.3.6.1.5.5.7.3.4";
/// id-kp-timeStamping.
pub const EKU_TIME_STAMPING: &str = "1.3.6.1.5.5.7.3.8";
/// id-kp-OCSPSigning.
pub const EKU_OCSP_SIGNING: &str = "1.3.6.1.5.5.7.3.9";

/// CA/Browser Forum Organization Identifier Field extension (EVG 9.8.2).
pub const CABF_ORGANIZATION_IDENTIFIER_EXT: &str = "2.23.140.3.1";

/// subject:serialNumber.
pub const SERIAL_NUMBER: &str = "2.5.4.5";
/// subject:countryName.
pub const COUNTRY_NAME: &str = "2.5.4.6";
/// subject:organizationName.
pub const ORGANIZATION_NAME: &str = "2.5.4.10";
/// subject:organizationIdentifier (X.520).
pub const ORGANIZATION_IDENTIFIER: &str = "2.5.4.97";
/// subject:jurisdictionLocalityName (EVG 9.2.4).
pub const JURISDICTION_LOCALITY: &str = "1.3.6.1.4.1.311.60.2.1.1";
/// subject:jurisdictionStateOrProvinceName (EVG 9.2.4).
pub const JURISDICTION_STATE_OR_PROVINCE: &str = "1.3.6.1.4.1.311.60.2.1.2";
/// subject:jurisdictionCountryName (EVG 9.2.4).
pub const JURISDICTION_COUNTRY: &str = "1.3.6.1.4.1.311.60.2.1.3";

/// CA/Browser Forum EV policy identifier.
pub const CABF_EV_POLICY: &str = "2.23.140.1.1";
