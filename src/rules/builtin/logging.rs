use crate::model::ResourceDescription;
use crate::rules::{Check, CheckMetadata, Finding, Severity};

/// S3-004: Access Logging Disabled
///
/// Flags resources without access logging. Always LOW — no contextual
/// escalation for this check.
pub struct LoggingCheck;

impl Check for LoggingCheck {
    fn metadata(&self) -> CheckMetadata {
        CheckMetadata {
            id: "S3-004".into(),
            name: "Access Logging".into(),
            description: "Bucket access logging is not configured".into(),
            default_severity: Severity::Low,
        }
    }

    fn run(&self, resource: &ResourceDescription) -> Vec<Finding> {
        if resource.logging {
            return vec![];
        }

        vec![Finding {
            service: super::SERVICE.into(),
            resource: resource.name.clone(),
            severity: Severity::Low,
            issue: "Access Logging Disabled".into(),
            description: format!(
                "Bucket '{}' does not have access logging enabled. \
                 This makes it difficult to audit access patterns and investigate incidents.",
                resource.name
            ),
            remediation: format!(
                "Enable access logging for bucket '{name}'. \
                 First create a logging bucket, then use AWS CLI: \
                 aws s3api put-bucket-logging --bucket {name} \
                 --bucket-logging-status file://logging.json",
                name = resource.name
            ),
        }]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_logging_is_low() {
        let resource: ResourceDescription =
            serde_json::from_str(r#"{"name": "customer-records"}"#).unwrap();
        let findings = LoggingCheck.run(&resource);
        assert_eq!(findings.len(), 1);
        // No escalation even for sensitive names.
        assert_eq!(findings[0].severity, Severity::Low);
        assert_eq!(findings[0].issue, "Access Logging Disabled");
    }

    #[test]
    fn logging_enabled_is_clean() {
        let resource: ResourceDescription =
            serde_json::from_str(r#"{"name": "b", "logging": true}"#).unwrap();
        assert!(LoggingCheck.run(&resource).is_empty());
    }
}
