use serde::{Deserialize, Serialize};

/// A security finding produced by a check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Finding {
    /// Which scanner produced the finding (e.g., "S3").
    pub service: String,
    /// Name of the resource the finding refers to.
    pub resource: String,
    /// Severity level.
    pub severity: Severity,
    /// Short categorical label (e.g., "Public Access Enabled").
    pub issue: String,
    /// Human-readable explanation, references the resource name.
    pub description: String,
    /// Corrective guidance with a concrete command template.
    pub remediation: String,
}

/// Severity of a finding. `Critical` is the most severe; the derived
/// ordering puts it first, so an ascending sort ranks worst-first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
}

impl Severity {
    /// Numeric rank: CRITICAL=0 .. LOW=3.
    pub fn rank(self) -> u8 {
        self as u8
    }

    /// Whether this severity is at least as severe as `threshold`.
    pub fn at_least(self, threshold: Severity) -> bool {
        self.rank() <= threshold.rank()
    }

    pub fn from_str_lenient(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "critical" | "crit" => Some(Self::Critical),
            "high" => Some(Self::High),
            "medium" | "med" => Some(Self::Medium),
            "low" => Some(Self::Low),
            _ => None,
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Critical => write!(f, "CRITICAL"),
            Self::High => write!(f, "HIGH"),
            Self::Medium => write!(f, "MEDIUM"),
            Self::Low => write!(f, "LOW"),
        }
    }
}

/// Metadata about a check, used for `list-checks` output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckMetadata {
    pub id: String,
    pub name: String,
    pub description: String,
    pub default_severity: Severity,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn critical_sorts_before_low() {
        assert!(Severity::Critical < Severity::Low);
        assert_eq!(Severity::Critical.rank(), 0);
        assert_eq!(Severity::Low.rank(), 3);
    }

    #[test]
    fn at_least_compares_by_rank() {
        assert!(Severity::Critical.at_least(Severity::High));
        assert!(Severity::High.at_least(Severity::High));
        assert!(!Severity::Medium.at_least(Severity::High));
    }

    #[test]
    fn serializes_uppercase() {
        assert_eq!(
            serde_json::to_string(&Severity::Critical).unwrap(),
            "\"CRITICAL\""
        );
    }

    #[test]
    fn lenient_parsing() {
        assert_eq!(
            Severity::from_str_lenient("CRITICAL"),
            Some(Severity::Critical)
        );
        assert_eq!(Severity::from_str_lenient("med"), Some(Severity::Medium));
        assert_eq!(Severity::from_str_lenient("bogus"), None);
    }
}
