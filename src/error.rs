//! Error types for certlint operations.
//!
//! This module defines [`CertlintError`], the primary error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Configuration mistakes (duplicate lint names, unknown names or sources in
//!   a selection, bad config files) surface as `CertlintError` values
//! - Failures inside an individual lint never become a `CertlintError`; the
//!   evaluator records them as `Fatal` results in the report instead
//! - Use `anyhow::Error` (via `CertlintError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for certlint operations.
#[derive(Debug, Error)]
pub enum CertlintError {
    /// A lint with the same name was already registered.
    #[error("Duplicate lint registration: {name}")]
    DuplicateLint { name: String },

    /// A selection referenced a lint name the registry does not know.
    #[error("Unknown lint: {name}")]
    UnknownLint { name: String },

    /// A selection or config referenced an unrecognised lint source.
    #[error("Unknown lint source: {source_name}")]
    UnknownSource { source_name: String },

    /// The lint name filter is not a valid regular expression.
    #[error("Invalid lint name filter '{pattern}': {message}")]
    InvalidNameFilter { pattern: String, message: String },

    /// The input could not be decoded as an X.509 certificate.
    #[error("Failed to parse certificate: {message}")]
    CertificateParse { message: String },

    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for certlint operations.
pub type Result<T> = std::result::Result<T, CertlintError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_lint_displays_name() {
        let err = CertlintError::DuplicateLint {
            name: "e_ev_orgid_encoding".into(),
        };
        assert!(err.to_string().contains("e_ev_orgid_encoding"));
    }

    #[test]
    fn unknown_lint_displays_name() {
        let err = CertlintError::UnknownLint {
            name: "e_does_not_exist".into(),
        };
        assert!(err.to_string().contains("e_does_not_exist"));
    }

    #[test]
    fn unknown_source_displays_source() {
        let err = CertlintError::UnknownSource {
            source_name: "CABF_XX".into(),
        };
        assert!(err.to_string().contains("CABF_XX"));
    }

    #[test]
    fn invalid_name_filter_displays_pattern_and_message() {
        let err = CertlintError::InvalidNameFilter {
            pattern: "e_(".into(),
            message: "unclosed group".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("e_("));
        assert!(msg.contains("unclosed group"));
    }

    #[test]
    fn config_parse_error_displays_path_and_message() {
        let err = CertlintError::ConfigParseError {
            path: PathBuf::from("/.certlint.yml"),
            message: "invalid syntax".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/.certlint.yml"));
        assert!(msg.contains("invalid syntax"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: CertlintError = io_err.into();
        assert!(matches!(err, CertlintError::Io(_)));
    }

    #[test]
    fn anyhow_error_converts() {
        let err: CertlintError = anyhow::anyhow!("boom").into();
        assert!(matches!(err, CertlintError::Other(_)));
        assert_eq!(err.to_string(), "boom");
    }
}
