//! Subject distinguished name decoding.
//!
//! Rules work from the raw subject bytes rather than a pre-rendered string so
//! they can see the ASN.1 string type of each attribute and detect malformed
//! or trailing data.

use regex::Captures;
use thiserror::Error;
use x509_parser::prelude::*;

use super::oid::ORGANIZATION_IDENTIFIER;

/// Pattern for subject:organizationIdentifier values (EVG 9.2.8):
/// three-letter scheme, two-letter country, optional `+` state or province,
/// hyphen, registration reference.
pub const ORG_ID_PATTERN: &str =
    r"^(?P<scheme>[A-Z]{3})(?P<country>[A-Z]{2})(?:\+(?P<state>[A-Z]{2}))?-(?P<reference>.+)$";

/// ASN.1 string type carrying an attribute value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StringKind {
    Utf8,
    Printable,
    Teletex,
    Ia5,
    Visible,
    Universal,
    Bmp,
    /// Any other universal tag number.
    Other(u32),
}

impl StringKind {
    /// Map a universal tag number to a string kind.
    pub fn from_tag(tag: u32) -> Self {
        match tag {
            12 => StringKind::Utf8,
            19 => StringKind::Printable,
            20 => StringKind::Teletex,
            22 => StringKind::Ia5,
            26 => StringKind::Visible,
            28 => StringKind::Universal,
            30 => StringKind::Bmp,
            other => StringKind::Other(other),
        }
    }
}

impl std::fmt::Display for StringKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StringKind::Utf8 => write!(f, "UTF8String"),
            StringKind::Printable => write!(f, "PrintableString"),
            StringKind::Teletex => write!(f, "TeletexString"),
            StringKind::Ia5 => write!(f, "IA5String"),
            StringKind::Visible => write!(f, "VisibleString"),
            StringKind::Universal => write!(f, "UniversalString"),
            StringKind::Bmp => write!(f, "BMPString"),
            StringKind::Other(tag) => write!(f, "tag {}", tag),
        }
    }
}

/// One AttributeTypeAndValue from the subject.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectAttribute {
    /// Attribute type as a dotted OID.
    pub oid: String,
    /// String type of the value.
    pub kind: StringKind,
    /// Value as text, if it decodes as a string.
    pub value: Option<String>,
}

/// A decoded subject RDNSequence, flattened in encoding order.
#[derive(Debug, Clone, Default)]
pub struct DecodedSubject {
    pub attributes: Vec<SubjectAttribute>,
    /// Number of bytes left over after the RDNSequence.
    pub trailing: usize,
}

impl DecodedSubject {
    /// First attribute with the given type.
    pub fn first(&self, oid: &str) -> Option<&SubjectAttribute> {
        self.attributes.iter().find(|a| a.oid == oid)
    }

    /// All attributes with the given type.
    pub fn all<'a>(&'a self, oid: &'a str) -> impl Iterator<Item = &'a SubjectAttribute> + 'a {
        self.attributes.iter().filter(move |a| a.oid == oid)
    }

    /// Text value of the first attribute with the given type.
    pub fn value(&self, oid: &str) -> Option<&str> {
        self.first(oid).and_then(|a| a.value.as_deref())
    }

    /// Whether the raw subject carried bytes after the RDNSequence.
    pub fn has_trailing_data(&self) -> bool {
        self.trailing > 0
    }
}

/// Errors from decoding a raw subject.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubjectError {
    #[error("subject is not a valid RDNSequence: {0}")]
    Malformed(String),
}

/// Decode raw subject bytes into attributes.
pub fn decode_subject(raw: &[u8]) -> Result<DecodedSubject, SubjectError> {
    let (rest, name) =
        X509Name::from_der(raw).map_err(|e| SubjectError::Malformed(e.to_string()))?;

    let attributes = name
        .iter()
        .flat_map(|rdn| rdn.iter())
        .map(|atv| SubjectAttribute {
            oid: atv.attr_type().to_id_string(),
            kind: StringKind::from_tag(atv.attr_value().tag().0),
            value: atv.as_str().ok().map(str::to_owned),
        })
        .collect();

    Ok(DecodedSubject {
        attributes,
        trailing: rest.len(),
    })
}

/// The subject:organizationIdentifier attribute of a certificate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrgId {
    pub value: String,
    pub kind: StringKind,
}

impl OrgId {
    /// Find the organizationIdentifier in a raw subject.
    ///
    /// Returns `None` when the subject does not decode or has no such
    /// attribute; rules that need to distinguish those cases decode the
    /// subject themselves.
    pub fn from_raw_subject(raw: &[u8]) -> Option<Self> {
        let subject = decode_subject(raw).ok()?;
        let attr = subject.first(ORGANIZATION_IDENTIFIER)?;
        Some(Self {
            value: attr.value.clone().unwrap_or_default(),
            kind: attr.kind,
        })
    }
}

/// Components of a well-formed organizationIdentifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrgIdParts {
    pub scheme: String,
    pub country: String,
    pub state: Option<String>,
    pub reference: String,
}

impl OrgIdParts {
    /// Build from a match of [`ORG_ID_PATTERN`].
    pub fn from_captures(caps: &Captures<'_>) -> Option<Self> {
        Some(Self {
            scheme: caps.name("scheme")?.as_str().to_string(),
            country: caps.name("country")?.as_str().to_string(),
            state: caps.name("state").map(|m| m.as_str().to_string()),
            reference: caps.name("reference")?.as_str().to_string(),
        })
    }
}
