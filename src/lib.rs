//! bucketwatch — rule-based security auditor for cloud storage configurations.
//!
//! Evaluates static S3 resource descriptions against a fixed set of
//! checks and reports findings with contextual severity. Offline-first:
//! input is an already-fetched JSON snapshot, never a live API call.
//!
//! # Quick Start
//!
//! ```no_run
//! use bucketwatch::{scan, ScanOptions};
//!
//! let options = ScanOptions::default();
//! let report = scan(&options).unwrap();
//! println!("Pass: {}, Findings: {}", report.verdict.pass, report.findings.len());
//! ```

pub mod config;
pub mod error;
pub mod model;
pub mod output;
pub mod rules;
pub mod source;

use std::path::PathBuf;

use config::Config;
use error::{AuditError, Result};
use output::OutputFormat;
use rules::policy::Verdict;
use rules::{sort_by_severity, Finding, RuleEngine, Severity, Summary};
use source::{S3DataSource, SourceMode};

/// Options for a scan invocation.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// Path to config file (defaults to `.bucketwatch.toml` in the cwd).
    pub config_path: Option<PathBuf>,
    /// CLI override for the mock data file.
    pub data_path: Option<PathBuf>,
    /// Query the live AWS API instead of mock data.
    pub live: bool,
    /// Output format.
    pub format: OutputFormat,
    /// CLI override for the fail_on threshold.
    pub fail_on_override: Option<Severity>,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            config_path: None,
            data_path: None,
            live: false,
            format: OutputFormat::Console,
            fail_on_override: None,
        }
    }
}

/// Complete scan report: sorted findings plus summary and verdict.
#[derive(Debug)]
pub struct ScanReport {
    pub resources_scanned: usize,
    pub findings: Vec<Finding>,
    pub summary: Summary,
    pub verdict: Verdict,
}

/// Run a complete scan: load config, load resource data, evaluate all
/// checks, apply policy, sort and summarize.
pub fn scan(options: &ScanOptions) -> Result<ScanReport> {
    let config_path = options
        .config_path
        .clone()
        .unwrap_or_else(|| PathBuf::from(".bucketwatch.toml"));
    let mut config = Config::load(&config_path)?;

    if let Some(fail_on) = options.fail_on_override {
        config.policy.fail_on = fail_on;
    }

    let mode = if options.live {
        SourceMode::Live
    } else {
        match config.scan.mode.as_str() {
            "mock" => SourceMode::Mock,
            "live" => SourceMode::Live,
            other => {
                return Err(AuditError::Config(format!("unknown scan mode '{other}'")));
            }
        }
    };
    let data_path = options
        .data_path
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.scan.data_file));

    let source = S3DataSource::new(mode, data_path);
    let resources = source.load()?;

    let engine = RuleEngine::new();
    let raw_findings = engine.evaluate(&resources);

    // Ignore list and overrides apply before sorting, so the report
    // order reflects effective severity.
    let verdict = config.policy.evaluate(&raw_findings);
    let findings = sort_by_severity(config.policy.apply(&raw_findings));
    let summary = Summary::from_findings(&findings);

    Ok(ScanReport {
        resources_scanned: resources.len(),
        findings,
        summary,
        verdict,
    })
}

/// Render a scan report in the specified format.
pub fn render_report(report: &ScanReport, format: OutputFormat) -> Result<String> {
    output::render(report, format)
}
