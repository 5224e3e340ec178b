use chrono::Utc;

use crate::rules::Severity;
use crate::ScanReport;

/// Render a scan report as a self-contained HTML document: per-severity
/// count boxes plus one styled block per finding.
pub fn render(report: &ScanReport) -> String {
    let findings_html: String = report
        .findings
        .iter()
        .map(|f| {
            let sev_class = severity_class(f.severity);
            format!(
                r#"<div class="finding {sev_class}">
  <div class="finding-header">
    <span class="badge {sev_class}">{severity}</span>
    {issue}
  </div>
  <p><strong>Service:</strong> {service}</p>
  <p><strong>Resource:</strong> {resource}</p>
  <p><strong>Description:</strong> {description}</p>
  <div class="remediation">
    <strong>Remediation:</strong><br>
    {remediation}
  </div>
</div>
"#,
                sev_class = sev_class,
                severity = f.severity,
                issue = html_escape(&f.issue),
                service = html_escape(&f.service),
                resource = html_escape(&f.resource),
                description = html_escape(&f.description),
                remediation = html_escape(&f.remediation),
            )
        })
        .collect();

    let content = if report.findings.is_empty() {
        "<div class=\"empty\">No security issues found.</div>".to_string()
    } else {
        findings_html
    };

    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>bucketwatch Security Report</title>
<style>
  body {{ font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
    margin: 0; padding: 20px; background-color: #f5f5f5; }}
  .container {{ max-width: 1200px; margin: 0 auto; background-color: white;
    padding: 30px; border-radius: 8px; box-shadow: 0 2px 4px rgba(0,0,0,0.1); }}
  h1 {{ color: #2c3e50; border-bottom: 3px solid #3498db; padding-bottom: 10px; }}
  h2 {{ color: #2c3e50; margin-top: 30px; margin-bottom: 20px; }}
  .timestamp {{ color: #7f8c8d; font-size: 0.9em; }}
  .summary {{ display: grid; grid-template-columns: repeat(4, 1fr);
    gap: 15px; margin: 20px 0; }}
  .summary-box {{ padding: 20px; border-radius: 5px; text-align: center; color: white; }}
  .summary-box.critical {{ background-color: #e74c3c; }}
  .summary-box.high {{ background-color: #e67e22; }}
  .summary-box.medium {{ background-color: #f39c12; }}
  .summary-box.low {{ background-color: #3498db; }}
  .finding {{ border-left: 4px solid; padding: 20px; margin: 15px 0;
    background-color: #ffffff; border-radius: 4px;
    box-shadow: 0 1px 3px rgba(0,0,0,0.1); }}
  .finding.critical {{ border-left-color: #e74c3c; }}
  .finding.high {{ border-left-color: #e67e22; }}
  .finding.medium {{ border-left-color: #f39c12; }}
  .finding.low {{ border-left-color: #3498db; }}
  .finding-header {{ font-weight: bold; font-size: 1.2em;
    margin-bottom: 15px; color: #2c3e50; }}
  .finding p {{ color: #34495e; line-height: 1.6; margin: 8px 0; }}
  .badge {{ display: inline-block; padding: 5px 12px; border-radius: 3px;
    font-size: 0.85em; font-weight: bold; margin-right: 10px; color: white; }}
  .badge.critical {{ background-color: #e74c3c; }}
  .badge.high {{ background-color: #e67e22; }}
  .badge.medium {{ background-color: #f39c12; }}
  .badge.low {{ background-color: #3498db; }}
  .remediation {{ background-color: #ecf0f1; padding: 15px; margin-top: 15px;
    border-radius: 4px; font-family: 'Courier New', monospace;
    font-size: 0.9em; color: #2c3e50; border: 1px solid #bdc3c7; }}
  .empty {{ text-align: center; padding: 3rem; color: #27ae60; font-size: 1.2em; }}
</style>
</head>
<body>
<div class="container">
  <h1>bucketwatch Security Report</h1>
  <p class="timestamp">Generated: {scan_date} — scanner v{version}</p>

  <div class="summary">
    <div class="summary-box critical"><h2>{critical}</h2><p>Critical</p></div>
    <div class="summary-box high"><h2>{high}</h2><p>High</p></div>
    <div class="summary-box medium"><h2>{medium}</h2><p>Medium</p></div>
    <div class="summary-box low"><h2>{low}</h2><p>Low</p></div>
  </div>

  <h2>Findings</h2>
  {content}
</div>
</body>
</html>"##,
        scan_date = Utc::now().format("%Y-%m-%d %H:%M:%S"),
        version = env!("CARGO_PKG_VERSION"),
        critical = report.summary.critical,
        high = report.summary.high,
        medium = report.summary.medium,
        low = report.summary.low,
        content = content,
    )
}

fn severity_class(s: Severity) -> &'static str {
    match s {
        Severity::Critical => "critical",
        Severity::High => "high",
        Severity::Medium => "medium",
        Severity::Low => "low",
    }
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::policy::Verdict;
    use crate::rules::{Finding, Summary};

    #[test]
    fn html_has_count_boxes_and_escaped_finding() {
        let findings = vec![Finding {
            service: "S3".into(),
            resource: "open<bucket>".into(),
            severity: Severity::Critical,
            issue: "Public Bucket Policy".into(),
            description: "Bucket 'open<bucket>' has a bucket policy that allows public access"
                .into(),
            remediation: "Review and restrict the bucket policy for 'open<bucket>'. aws s3api".into(),
        }];
        let summary = Summary::from_findings(&findings);
        let report = ScanReport {
            resources_scanned: 1,
            verdict: Verdict {
                pass: false,
                total_findings: 1,
                effective_findings: 1,
                highest_severity: Some(Severity::Critical),
                fail_threshold: Severity::High,
            },
            findings,
            summary,
        };

        let html = render(&report);
        assert!(html.contains(r#"<div class="summary-box critical"><h2>1</h2>"#));
        assert!(html.contains("open&lt;bucket&gt;"));
        assert!(!html.contains("open<bucket>"));
        assert!(html.contains("Public Bucket Policy"));
    }
}
