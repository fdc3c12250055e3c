//! Policy document families that lints derive from.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::CertlintError;

/// The policy document family a lint is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Source {
    #[serde(rename = "Unknown")]
    Unknown,
    #[serde(rename = "RFC5280")]
    Rfc5280,
    #[serde(rename = "RFC5480")]
    Rfc5480,
    #[serde(rename = "RFC5891")]
    Rfc5891,
    #[serde(rename = "CABF_BR")]
    CabfBaselineRequirements,
    #[serde(rename = "CABF_EV")]
    CabfEvGuidelines,
    #[serde(rename = "Mozilla")]
    MozillaRootStorePolicy,
    #[serde(rename = "Apple")]
    AppleRootStorePolicy,
    #[serde(rename = "Community")]
    Community,
    #[serde(rename = "ETSI_ESI")]
    EtsiEsi,
}

impl Source {
    pub const ALL: [Source; 10] = [
        Source::Unknown,
        Source::Rfc5280,
        Source::Rfc5480,
        Source::Rfc5891,
        Source::CabfBaselineRequirements,
        Source::CabfEvGuidelines,
        Source::MozillaRootStorePolicy,
        Source::AppleRootStorePolicy,
        Source::Community,
        Source::EtsiEsi,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Source::Unknown => "Unknown",
            Source::Rfc5280 => "RFC5280",
            Source::Rfc5480 => "RFC5480",
            Source::Rfc5891 => "RFC5891",
            Source::CabfBaselineRequirements => "CABF_BR",
            Source::CabfEvGuidelines => "CABF_EV",
            Source::MozillaRootStorePolicy => "Mozilla",
            Source::AppleRootStorePolicy => "Apple",
            Source::Community => "Community",
            Source::EtsiEsi => "ETSI_ESI",
        }
    }

    /// Parse a comma-separated list of source tags, ignoring blank entries.
    pub fn parse_list(list: &str) -> Result<Vec<Source>, CertlintError> {
        list.split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(Source::from_str)
            .collect()
    }
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Source {
    type Err = CertlintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Source::ALL
            .into_iter()
            .find(|source| source.as_str() == s)
            .ok_or_else(|| CertlintError::UnknownSource {
                source_name: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_strings() {
        for source in Source::ALL {
            assert_eq!(source.as_str().parse::<Source>().unwrap(), source);
        }
    }

    #[test]
    fn unknown_string_is_error() {
        let err = "CABF_XX".parse::<Source>().unwrap_err();
        assert!(matches!(err, CertlintError::UnknownSource { .. }));
    }

    #[test]
    fn parse_list_skips_blanks() {
        let sources = Source::parse_list("CABF_EV, RFC5280,,").unwrap();
        assert_eq!(sources, vec![Source::CabfEvGuidelines, Source::Rfc5280]);
        assert!(Source::parse_list("").unwrap().is_empty());
        assert!(Source::parse_list("CABF_EV,nope").is_err());
    }

    #[test]
    fn serde_uses_tag_strings() {
        let json = serde_json::to_string(&Source::CabfBaselineRequirements).unwrap();
        assert_eq!(json, "\"CABF_BR\"");
    }
}
