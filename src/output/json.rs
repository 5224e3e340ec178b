use chrono::Utc;
use serde::Serialize;

use crate::error::Result;
use crate::rules::policy::Verdict;
use crate::rules::{Finding, Summary};
use crate::ScanReport;

#[derive(Serialize)]
struct JsonReport<'a> {
    scan_date: String,
    scanner_version: &'static str,
    total_findings: usize,
    summary: &'a Summary,
    verdict: &'a Verdict,
    findings: &'a [Finding],
}

/// Render a scan report as a pretty-printed JSON document.
pub fn render(report: &ScanReport) -> Result<String> {
    let json_report = JsonReport {
        scan_date: Utc::now().to_rfc3339(),
        scanner_version: env!("CARGO_PKG_VERSION"),
        total_findings: report.findings.len(),
        summary: &report.summary,
        verdict: &report.verdict,
        findings: &report.findings,
    };
    Ok(serde_json::to_string_pretty(&json_report)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::Severity;

    #[test]
    fn json_report_carries_version_and_counts() {
        let findings = vec![Finding {
            service: "S3".into(),
            resource: "b".into(),
            severity: Severity::High,
            issue: "Encryption Not Enabled".into(),
            description: "Bucket 'b' does not have default encryption enabled".into(),
            remediation: "aws s3api put-bucket-encryption --bucket b".into(),
        }];
        let summary = Summary::from_findings(&findings);
        let report = ScanReport {
            resources_scanned: 1,
            verdict: Verdict {
                pass: false,
                total_findings: 1,
                effective_findings: 1,
                highest_severity: Some(Severity::High),
                fail_threshold: Severity::High,
            },
            findings,
            summary,
        };

        let rendered = render(&report).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value["scanner_version"], env!("CARGO_PKG_VERSION"));
        assert_eq!(value["total_findings"], 1);
        assert_eq!(value["findings"][0]["severity"], "HIGH");
        assert!(value["scan_date"].as_str().unwrap().contains('T'));
    }
}
