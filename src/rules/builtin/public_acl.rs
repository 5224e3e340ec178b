use crate::model::{GranteeType, ResourceDescription};
use crate::rules::{Check, CheckMetadata, Finding, Severity};

/// S3-001: Public Access Enabled
///
/// Flags ACL grants to the AllUsers group. A resource tagged
/// `Purpose` with a value containing "public" is treated as an
/// intentional public website and reported LOW instead of CRITICAL.
/// Emits at most one finding per resource, however many grants match.
pub struct PublicAclCheck;

impl Check for PublicAclCheck {
    fn metadata(&self) -> CheckMetadata {
        CheckMetadata {
            id: "S3-001".into(),
            name: "Public ACL".into(),
            description: "ACL grants read access to the AllUsers group".into(),
            default_severity: Severity::Critical,
        }
    }

    fn run(&self, resource: &ResourceDescription) -> Vec<Finding> {
        let publicly_granted = resource.acl.grants.iter().any(|g| {
            g.grantee.grantee_type == GranteeType::Group && g.grantee.uri.contains("AllUsers")
        });
        if !publicly_granted {
            return vec![];
        }

        let intentional = resource
            .tag_value("Purpose")
            .is_some_and(|v| v.to_lowercase().contains("public"));

        let (severity, description) = if intentional {
            (
                Severity::Low,
                format!(
                    "Bucket '{}' is publicly accessible (tagged as public website)",
                    resource.name
                ),
            )
        } else {
            (
                Severity::Critical,
                format!(
                    "Bucket '{}' is publicly accessible and may contain sensitive data",
                    resource.name
                ),
            )
        };

        vec![Finding {
            service: super::SERVICE.into(),
            resource: resource.name.clone(),
            severity,
            issue: "Public Access Enabled".into(),
            description,
            remediation: format!(
                "Block public access for bucket '{name}' unless absolutely necessary. \
                 Use AWS CLI: aws s3api put-public-access-block --bucket {name} \
                 --public-access-block-configuration BlockPublicAcls=true,IgnorePublicAcls=true,\
                 BlockPublicPolicy=true,RestrictPublicBuckets=true",
                name = resource.name
            ),
        }]
    }
}
