//! JSON output formatter.
//!
//! Formats lint reports as machine-readable JSON for tooling integration.

use super::ReportFormatter;
use crate::certificate::Certificate;
use crate::lint::report::Summary;
use crate::lint::Report;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Write;

/// Formats lint reports as JSON.
#[derive(Default)]
pub struct JsonFormatter {
    pretty: bool,
    certificate: Option<CertificateHeader>,
}

/// Identifying fields of the linted certificate.
#[derive(Debug, Clone, Serialize)]
pub struct CertificateHeader {
    pub subject: String,
    pub issuer: String,
    pub serial: String,
    pub not_before: DateTime<Utc>,
    pub not_after: DateTime<Utc>,
    pub fingerprint_sha256: String,
}

impl From<&Certificate> for CertificateHeader {
    fn from(cert: &Certificate) -> Self {
        Self {
            subject: cert.subject.clone(),
            issuer: cert.issuer.clone(),
            serial: cert.serial.clone(),
            not_before: cert.not_before,
            not_after: cert.not_after,
            fingerprint_sha256: cert.fingerprint_sha256(),
        }
    }
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    certificate: Option<&'a CertificateHeader>,
    lints: &'a Report,
    summary: Summary,
    warnings_present: bool,
    errors_present: bool,
    fatals_present: bool,
}

impl JsonFormatter {
    /// Create a new JSON formatter.
    pub fn new(pretty: bool) -> Self {
        Self {
            pretty,
            certificate: None,
        }
    }

    /// Include certificate identity in the output.
    pub fn with_certificate(mut self, cert: &Certificate) -> Self {
        self.certificate = Some(cert.into());
        self
    }
}

impl ReportFormatter for JsonFormatter {
    fn format<W: Write>(&self, report: &Report, writer: &mut W) -> std::io::Result<()> {
        let output = JsonOutput {
            certificate: self.certificate.as_ref(),
            lints: report,
            summary: report.summary(),
            warnings_present: report.warnings_present(),
            errors_present: report.errors_present(),
            fatals_present: report.fatals_present(),
        };

        if self.pretty {
            serde_json::to_writer_pretty(&mut *writer, &output)
        } else {
            serde_json::to_writer(&mut *writer, &output)
        }
        .map_err(std::io::Error::other)?;
        writeln!(writer)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lint::LintResult;

    fn render(formatter: &JsonFormatter, report: &Report) -> serde_json::Value {
        let mut output = Vec::new();
        formatter.format(report, &mut output).unwrap();
        serde_json::from_slice(&output).unwrap()
    }

    #[test]
    fn produces_valid_json() {
        let report = Report::from_results([("e_bad".to_string(), LintResult::error("msg"))]);
        let parsed = render(&JsonFormatter::new(false), &report);

        assert_eq!(parsed["lints"]["e_bad"]["result"], "error");
        assert_eq!(parsed["summary"]["total"], 1);
        assert_eq!(parsed["errors_present"], true);
        assert!(parsed.get("certificate").is_none());
    }

    #[test]
    fn includes_certificate_when_requested() {
        let cert = Certificate {
            subject: "CN=example".into(),
            ..Default::default()
        };
        let formatter = JsonFormatter::new(true).with_certificate(&cert);
        let parsed = render(&formatter, &Report::default());

        assert_eq!(parsed["certificate"]["subject"], "CN=example");
        assert_eq!(
            parsed["certificate"]["fingerprint_sha256"],
            cert.fingerprint_sha256()
        );
    }

    #[test]
    fn summary_counts_by_status() {
        let report = Report::from_results([
            ("r1".to_string(), LintResult::error("e1")),
            ("r2".to_string(), LintResult::error("e2")),
            ("r3".to_string(), LintResult::warn("w1")),
            ("r4".to_string(), LintResult::na()),
        ]);
        let parsed = render(&JsonFormatter::default(), &report);

        assert_eq!(parsed["summary"]["total"], 4);
        assert_eq!(parsed["summary"]["error"], 2);
        assert_eq!(parsed["summary"]["warn"], 1);
        assert_eq!(parsed["summary"]["na"], 1);
        assert_eq!(parsed["warnings_present"], true);
        assert_eq!(parsed["fatals_present"], false);
    }
}
