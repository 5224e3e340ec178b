use crate::rules::Severity;
use crate::ScanReport;

/// Render findings as a console listing with a trailing summary block.
pub fn render(report: &ScanReport) -> String {
    let mut output = String::new();

    if report.findings.is_empty() {
        output.push_str("\n  No security issues found.\n\n");
        output.push_str(&format!(
            "  Scanned {} resource(s), 0 findings.\n\n",
            report.resources_scanned
        ));
        return output;
    }

    output.push_str(&format!(
        "\n  {} finding(s) across {} resource(s):\n\n",
        report.findings.len(),
        report.resources_scanned
    ));

    for (i, finding) in report.findings.iter().enumerate() {
        let severity_tag = match finding.severity {
            Severity::Critical => "[CRITICAL]",
            Severity::High => "[HIGH]    ",
            Severity::Medium => "[MEDIUM]  ",
            Severity::Low => "[LOW]     ",
        };

        output.push_str(&format!(
            "  [{}] {} {}\n",
            i + 1,
            severity_tag,
            finding.issue
        ));
        output.push_str(&format!(
            "      service: {}  resource: {}\n",
            finding.service, finding.resource
        ));
        output.push_str(&format!("      {}\n", finding.description));
        output.push_str(&format!("      fix: {}\n", finding.remediation));
        output.push('\n');
    }

    output.push_str("  Summary:\n");
    output.push_str(&format!("    Critical: {}\n", report.summary.critical));
    output.push_str(&format!("    High:     {}\n", report.summary.high));
    output.push_str(&format!("    Medium:   {}\n", report.summary.medium));
    output.push_str(&format!("    Low:      {}\n", report.summary.low));

    let status = if report.verdict.pass { "PASS" } else { "FAIL" };
    output.push_str(&format!(
        "\n  Result: {} (threshold: {}, highest: {})\n\n",
        status,
        report.verdict.fail_threshold,
        report
            .verdict
            .highest_severity
            .map(|s| s.to_string())
            .unwrap_or_else(|| "none".into()),
    ));

    output
}
