use crate::model::{Effect, ResourceDescription};
use crate::rules::{Check, CheckMetadata, Finding, Severity};

/// S3-005: Public Bucket Policy
///
/// Flags every policy statement that allows the wildcard principal.
/// Unlike the ACL check, each matching statement gets its own finding,
/// since each one is an independently removable grant.
pub struct PublicPolicyCheck;

impl Check for PublicPolicyCheck {
    fn metadata(&self) -> CheckMetadata {
        CheckMetadata {
            id: "S3-005".into(),
            name: "Public Bucket Policy".into(),
            description: "Bucket policy allows access to the wildcard principal".into(),
            default_severity: Severity::Critical,
        }
    }

    fn run(&self, resource: &ResourceDescription) -> Vec<Finding> {
        let Some(policy) = &resource.bucket_policy else {
            return vec![];
        };

        policy
            .statement
            .iter()
            .filter(|s| s.has_wildcard_principal() && s.effect == Effect::Allow)
            .map(|_| Finding {
                service: super::SERVICE.into(),
                resource: resource.name.clone(),
                severity: Severity::Critical,
                issue: "Public Bucket Policy".into(),
                description: format!(
                    "Bucket '{}' has a bucket policy that allows public access \
                     (Principal: '*'). This overrides bucket ACL settings.",
                    resource.name
                ),
                remediation: format!(
                    "Review and restrict the bucket policy for '{}'. \
                     Remove or narrow the Principal field. Consider using AWS Organizations \
                     SCPs to prevent public bucket policies.",
                    resource.name
                ),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_policy(statements: &str) -> ResourceDescription {
        serde_json::from_str(&format!(
            r#"{{"name": "policied", "bucket_policy": {{"Statement": {statements}}}}}"#
        ))
        .unwrap()
    }

    #[test]
    fn wildcard_allow_is_critical() {
        let resource = with_policy(r#"[{"Principal": "*", "Effect": "Allow"}]"#);
        let findings = PublicPolicyCheck.run(&resource);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].severity, Severity::Critical);
        assert_eq!(findings[0].issue, "Public Bucket Policy");
    }

    #[test]
    fn deny_statement_does_not_match() {
        let resource = with_policy(
            r#"[{"Principal": "*", "Effect": "Allow"},
                {"Principal": "*", "Effect": "Deny"}]"#,
        );
        let findings = PublicPolicyCheck.run(&resource);
        assert_eq!(findings.len(), 1);
    }

    #[test]
    fn one_finding_per_matching_statement() {
        let resource = with_policy(
            r#"[{"Principal": "*", "Effect": "Allow", "Action": "s3:GetObject"},
                {"Principal": "*", "Effect": "Allow", "Action": "s3:ListBucket"}]"#,
        );
        assert_eq!(PublicPolicyCheck.run(&resource).len(), 2);
    }

    #[test]
    fn scoped_principal_is_clean() {
        let resource = with_policy(
            r#"[{"Principal": {"AWS": "arn:aws:iam::123456789012:root"}, "Effect": "Allow"}]"#,
        );
        assert!(PublicPolicyCheck.run(&resource).is_empty());
    }

    #[test]
    fn absent_policy_is_clean() {
        let resource: ResourceDescription =
            serde_json::from_str(r#"{"name": "no-policy"}"#).unwrap();
        assert!(PublicPolicyCheck.run(&resource).is_empty());
    }
}
