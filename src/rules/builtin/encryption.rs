use crate::model::ResourceDescription;
use crate::rules::{Check, CheckMetadata, Finding, Severity};

/// Name keywords that mark a resource as likely holding sensitive data.
const SENSITIVE_KEYWORDS: &[&str] = &[
    "financial", "customer", "personal", "pii", "records", "backup",
];

/// S3-002: Encryption Not Enabled
///
/// Flags resources without a default encryption configuration. HIGH
/// when the resource name suggests sensitive contents, MEDIUM otherwise.
pub struct EncryptionCheck;

impl Check for EncryptionCheck {
    fn metadata(&self) -> CheckMetadata {
        CheckMetadata {
            id: "S3-002".into(),
            name: "Default Encryption".into(),
            description: "Bucket has no default server-side encryption configured".into(),
            default_severity: Severity::Medium,
        }
    }

    fn run(&self, resource: &ResourceDescription) -> Vec<Finding> {
        if resource.encryption.is_some() {
            return vec![];
        }

        let severity = if resource.name_contains_any(SENSITIVE_KEYWORDS) {
            Severity::High
        } else {
            Severity::Medium
        };

        vec![Finding {
            service: super::SERVICE.into(),
            resource: resource.name.clone(),
            severity,
            issue: "Encryption Not Enabled".into(),
            description: format!(
                "Bucket '{}' does not have default encryption enabled",
                resource.name
            ),
            remediation: format!(
                "Enable default encryption for bucket '{name}'. \
                 Use AWS CLI: aws s3api put-bucket-encryption --bucket {name} \
                 --server-side-encryption-configuration \
                 '{{\"Rules\":[{{\"ApplyServerSideEncryptionByDefault\":{{\"SSEAlgorithm\":\"AES256\"}}}}]}}'",
                name = resource.name
            ),
        }]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unencrypted(name: &str) -> ResourceDescription {
        serde_json::from_str(&format!(r#"{{"name": "{name}"}}"#)).unwrap()
    }

    #[test]
    fn sensitive_name_escalates_to_high() {
        let findings = EncryptionCheck.run(&unencrypted("customer-data-backup"));
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].severity, Severity::High);
        assert_eq!(findings[0].issue, "Encryption Not Enabled");
    }

    #[test]
    fn plain_name_stays_medium() {
        let findings = EncryptionCheck.run(&unencrypted("temp-logs"));
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].severity, Severity::Medium);
    }

    #[test]
    fn keyword_match_ignores_case() {
        let findings = EncryptionCheck.run(&unencrypted("PII-Exports"));
        assert_eq!(findings[0].severity, Severity::High);
    }

    #[test]
    fn encrypted_resource_is_clean() {
        let resource: ResourceDescription = serde_json::from_str(
            r#"{"name": "customer-data", "encryption": {"algorithm": "AES256"}}"#,
        )
        .unwrap();
        assert!(EncryptionCheck.run(&resource).is_empty());
    }

    #[test]
    fn remediation_names_the_bucket() {
        let findings = EncryptionCheck.run(&unencrypted("temp-logs"));
        assert!(findings[0].remediation.contains("--bucket temp-logs"));
    }
}
