mod encryption;
mod logging;
mod public_acl;
mod public_policy;
mod versioning;

use super::Check;

/// Service label attached to every finding from the S3 check set.
pub(crate) const SERVICE: &str = "S3";

/// Returns all built-in checks, in the fixed evaluation order.
pub fn all_checks() -> Vec<Box<dyn Check>> {
    vec![
        Box::new(public_acl::PublicAclCheck),
        Box::new(encryption::EncryptionCheck),
        Box::new(versioning::VersioningCheck),
        Box::new(logging::LoggingCheck),
        Box::new(public_policy::PublicPolicyCheck),
    ]
}
