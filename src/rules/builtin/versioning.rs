use crate::model::{ResourceDescription, Versioning};
use crate::rules::{Check, CheckMetadata, Finding, Severity};

/// Name keywords that mark a resource as compliance- or recovery-critical.
const CRITICAL_DATA_KEYWORDS: &[&str] = &["backup", "records", "financial", "compliance"];

/// S3-003: Versioning Disabled
///
/// Flags resources whose versioning state is anything but Enabled
/// (Suspended counts as disabled). MEDIUM for compliance-critical
/// names, LOW otherwise.
pub struct VersioningCheck;

impl Check for VersioningCheck {
    fn metadata(&self) -> CheckMetadata {
        CheckMetadata {
            id: "S3-003".into(),
            name: "Versioning".into(),
            description: "Bucket versioning is disabled or suspended".into(),
            default_severity: Severity::Low,
        }
    }

    fn run(&self, resource: &ResourceDescription) -> Vec<Finding> {
        if resource.versioning == Versioning::Enabled {
            return vec![];
        }

        let severity = if resource.name_contains_any(CRITICAL_DATA_KEYWORDS) {
            Severity::Medium
        } else {
            Severity::Low
        };

        vec![Finding {
            service: super::SERVICE.into(),
            resource: resource.name.clone(),
            severity,
            issue: "Versioning Disabled".into(),
            description: format!(
                "Bucket '{}' does not have versioning enabled. \
                 This increases risk of accidental data loss.",
                resource.name
            ),
            remediation: format!(
                "Enable versioning for bucket '{name}'. \
                 Use AWS CLI: aws s3api put-bucket-versioning --bucket {name} \
                 --versioning-configuration Status=Enabled",
                name = resource.name
            ),
        }]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_versioning(name: &str, state: &str) -> ResourceDescription {
        serde_json::from_str(&format!(r#"{{"name": "{name}", "versioning": "{state}"}}"#))
            .unwrap()
    }

    #[test]
    fn enabled_versioning_is_clean() {
        assert!(VersioningCheck
            .run(&with_versioning("any", "Enabled"))
            .is_empty());
    }

    #[test]
    fn suspended_counts_as_disabled() {
        let findings = VersioningCheck.run(&with_versioning("scratch", "Suspended"));
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].severity, Severity::Low);
    }

    #[test]
    fn compliance_name_escalates_to_medium() {
        let findings = VersioningCheck.run(&with_versioning("audit-records", "Disabled"));
        assert_eq!(findings[0].severity, Severity::Medium);
    }

    #[test]
    fn absent_versioning_defaults_to_disabled() {
        let resource: ResourceDescription =
            serde_json::from_str(r#"{"name": "no-field"}"#).unwrap();
        assert_eq!(VersioningCheck.run(&resource).len(), 1);
    }
}
