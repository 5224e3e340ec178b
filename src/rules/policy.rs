use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use super::{Finding, Severity};

/// Scan verdict — the pass/fail decision after applying the ignore
/// list and severity overrides to raw findings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Verdict {
    pub pass: bool,
    pub total_findings: usize,
    pub effective_findings: usize,
    pub highest_severity: Option<Severity>,
    pub fail_threshold: Severity,
}

/// Scan policy loaded from `.bucketwatch.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Policy {
    /// Minimum severity to fail the scan.
    #[serde(default = "default_fail_on")]
    pub fail_on: Severity,
    /// Check IDs to ignore entirely (e.g., "S3-004").
    #[serde(default)]
    pub ignore_checks: HashSet<String>,
    /// Per-issue severity overrides, keyed by issue label.
    #[serde(default)]
    pub overrides: HashMap<String, Severity>,
}

fn default_fail_on() -> Severity {
    Severity::High
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            fail_on: Severity::High,
            ignore_checks: HashSet::new(),
            overrides: HashMap::new(),
        }
    }
}

impl Policy {
    fn ignored(&self, finding: &Finding) -> bool {
        self.ignore_checks.contains(&finding.issue)
    }

    /// Evaluate findings against this policy and produce a verdict.
    pub fn evaluate(&self, findings: &[Finding]) -> Verdict {
        let effective: Vec<Severity> = findings
            .iter()
            .filter(|f| !self.ignored(f))
            .map(|f| self.overrides.get(&f.issue).copied().unwrap_or(f.severity))
            .collect();

        let highest = effective.iter().copied().min();
        let failed = effective.iter().any(|&sev| sev.at_least(self.fail_on));

        Verdict {
            pass: !failed,
            total_findings: findings.len(),
            effective_findings: effective.len(),
            highest_severity: highest,
            fail_threshold: self.fail_on,
        }
    }

    /// Filter findings: remove ignored issues, apply overrides.
    pub fn apply(&self, findings: &[Finding]) -> Vec<Finding> {
        findings
            .iter()
            .filter(|f| !self.ignored(f))
            .map(|f| {
                let mut f = f.clone();
                if let Some(&override_sev) = self.overrides.get(&f.issue) {
                    f.severity = override_sev;
                }
                f
            })
            .collect()
    }
}
