//! Running lints against a certificate.
//!
//! The [`Evaluator`] resolves a [`Selection`] against a [`Registry`] and runs
//! every selected lint through the same pipeline:
//!
//! 1. Cancellation: once the deadline passes or the token fires, lints that
//!    have not started are recorded as `Fatal` / `Cancelled`
//! 2. Effective date: certificates issued before the lint's effective date
//!    get `NE`, and nothing else runs
//! 3. Initialization: memoized per lint; a failure gives `Fatal`
//! 4. Source applicability: Baseline Requirements lints are `NA` for
//!    certificates that cannot authenticate TLS servers
//! 5. `check_applies`: `false` gives `NA`
//! 6. `execute`: its result is recorded verbatim
//!
//! Steps 3, 5 and 6 run inside a panic boundary. A panicking rule is recorded
//! as `Fatal` and the remaining lints still run.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use rayon::prelude::*;

use super::descriptor::Lint;
use super::guard::guarded;
use super::registry::Registry;
use super::report::Report;
use super::selection::Selection;
use super::source::Source;
use super::status::LintResult;
use crate::certificate::Certificate;
use crate::error::Result;

/// Details recorded for lints skipped by cancellation.
pub const CANCELLED: &str = "Cancelled";

/// Shared flag for cancelling an in-flight evaluation.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// How an evaluation is scheduled.
#[derive(Debug, Clone, Default)]
pub struct EvaluateOptions {
    /// Run lints on the rayon thread pool.
    pub parallel: bool,
    /// Stop starting new lints once this long has passed since the call
    /// began. A batch shares one deadline across all certificates.
    pub timeout: Option<Duration>,
    /// Stop starting new lints once cancelled.
    pub cancel: Option<CancelToken>,
}

/// Evaluates certificates against lints from a registry.
pub struct Evaluator<'r> {
    registry: &'r Registry,
    options: EvaluateOptions,
}

struct Stop<'a> {
    deadline: Option<Instant>,
    cancel: Option<&'a CancelToken>,
}

impl Stop<'_> {
    fn reached(&self) -> bool {
        self.deadline.is_some_and(|d| Instant::now() >= d)
            || self.cancel.is_some_and(CancelToken::is_cancelled)
    }
}

impl<'r> Evaluator<'r> {
    /// Create an evaluator with sequential scheduling and no deadline.
    pub fn new(registry: &'r Registry) -> Self {
        Self {
            registry,
            options: EvaluateOptions::default(),
        }
    }

    pub fn with_options(mut self, options: EvaluateOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &EvaluateOptions {
        &self.options
    }

    /// Evaluate a certificate against the selected lints.
    ///
    /// # Errors
    ///
    /// Only selection errors are returned. Rule failures are recorded in the
    /// report as `Fatal` results, so the report always has exactly one entry
    /// per selected lint.
    pub fn evaluate(&self, cert: &Certificate, selection: &Selection) -> Result<Report> {
        let lints = selection.resolve(self.registry)?;
        Ok(self.run(cert, &lints, &self.stop()))
    }

    /// Evaluate a certificate against every registered lint.
    pub fn evaluate_all(&self, cert: &Certificate) -> Result<Report> {
        self.evaluate(cert, &Selection::all())
    }

    /// Evaluate several certificates with the same selection.
    ///
    /// With `parallel` set, certificates are also spread across the pool.
    /// Reports are returned in input order.
    pub fn evaluate_batch(
        &self,
        certs: &[Certificate],
        selection: &Selection,
    ) -> Result<Vec<Report>> {
        let lints = selection.resolve(self.registry)?;
        let stop = self.stop();
        let reports = if self.options.parallel {
            certs
                .par_iter()
                .map(|cert| self.run(cert, &lints, &stop))
                .collect()
        } else {
            certs
                .iter()
                .map(|cert| self.run(cert, &lints, &stop))
                .collect()
        };
        Ok(reports)
    }

    fn stop(&self) -> Stop<'_> {
        Stop {
            deadline: self.options.timeout.map(|t| Instant::now() + t),
            cancel: self.options.cancel.as_ref(),
        }
    }

    fn run(&self, cert: &Certificate, lints: &[&Lint], stop: &Stop<'_>) -> Report {
        let run_one = |lint: &&Lint| {
            let result = if stop.reached() {
                LintResult::fatal(CANCELLED)
            } else {
                run_lint(lint, cert)
            };
            (lint.name().to_string(), result)
        };

        let report = if self.options.parallel {
            Report::from_results(lints.par_iter().map(run_one).collect::<Vec<_>>())
        } else {
            Report::from_results(lints.iter().map(run_one))
        };

        tracing::debug!(
            subject = %cert.subject,
            lints = report.len(),
            max_status = ?report.max_status(),
            "evaluation complete"
        );
        report
    }
}

/// Run a single lint against a certificate through the full pipeline.
pub fn run_lint(lint: &Lint, cert: &Certificate) -> LintResult {
    let result = gate_and_execute(lint, cert);
    tracing::debug!(lint = lint.name(), status = %result.status, "lint evaluated");
    result
}

fn gate_and_execute(lint: &Lint, cert: &Certificate) -> LintResult {
    if !lint.is_effective(cert) {
        return LintResult::ne();
    }

    if let Err(e) = lint.initialize() {
        return LintResult::fatal(format!("lint {} failed to initialize: {}", lint.name(), e));
    }

    if lint.source() == Source::CabfBaselineRequirements && !cert.is_server_auth() {
        return LintResult::na();
    }

    match guarded(|| lint.check().check_applies(cert)) {
        Ok(true) => {}
        Ok(false) => return LintResult::na(),
        Err(panic) => {
            tracing::warn!(lint = lint.name(), panic = %panic, "check_applies panicked");
            return LintResult::fatal(format!(
                "rule applicability check raised an unexpected condition: {}",
                panic
            ));
        }
    }

    match guarded(|| lint.check().execute(cert)) {
        Ok(result) => result,
        Err(panic) => {
            tracing::warn!(lint = lint.name(), panic = %panic, "execute panicked");
            LintResult::fatal(format!(
                "lint {} raised an unexpected condition: {}",
                lint.name(),
                panic
            ))
        }
    }
}
