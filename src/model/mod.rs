//! Resource description model — the snapshot all checks operate on.
//!
//! Data sources produce `ResourceDescription`s. All checks consume them.
//! Every field except `name` has a safe default, so a description with
//! missing optional fields deserializes cleanly and checks stay total
//! over incomplete input.

use serde::{Deserialize, Serialize};

/// Security-relevant configuration snapshot of one storage resource.
///
/// Immutable input to the rule engine; checks never mutate it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceDescription {
    /// Resource name, unique within a scan.
    pub name: String,
    /// Access control list. Absent ACL means no grants.
    #[serde(default)]
    pub acl: Acl,
    /// Resource tags. Keys are not necessarily unique.
    #[serde(default)]
    pub tags: Vec<Tag>,
    /// Server-side encryption descriptor. Presence means configured.
    #[serde(default)]
    pub encryption: Option<Encryption>,
    /// Versioning state. Absent means Disabled.
    #[serde(default)]
    pub versioning: Versioning,
    /// Whether access logging is configured.
    #[serde(default)]
    pub logging: bool,
    /// Attached bucket policy, if any.
    #[serde(default)]
    pub bucket_policy: Option<BucketPolicy>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Acl {
    #[serde(default)]
    pub grants: Vec<Grant>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Grant {
    pub grantee: Grantee,
    #[serde(default)]
    pub permission: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Grantee {
    #[serde(rename = "type")]
    pub grantee_type: GranteeType,
    #[serde(default)]
    pub uri: String,
}

/// Who a grant applies to. Unknown grantee kinds fold to `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GranteeType {
    CanonicalUser,
    Group,
    AmazonCustomerByEmail,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tag {
    pub key: String,
    pub value: String,
}

/// Presence of this descriptor means default encryption is configured.
/// Algorithm-level detail is carried but not interpreted by any check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Encryption {
    #[serde(default)]
    pub algorithm: Option<String>,
    #[serde(default)]
    pub kms_key_id: Option<String>,
}

/// Versioning state. Unknown strings fold to `Disabled`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Versioning {
    Enabled,
    Suspended,
    #[default]
    #[serde(other)]
    Disabled,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BucketPolicy {
    #[serde(rename = "Statement", default)]
    pub statement: Vec<PolicyStatement>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolicyStatement {
    /// Principal as raw JSON: the wildcard is the string `"*"`, but real
    /// policies may carry maps here which no check interprets.
    #[serde(rename = "Principal", default)]
    pub principal: serde_json::Value,
    #[serde(rename = "Effect", default)]
    pub effect: Effect,
    #[serde(rename = "Action", default)]
    pub action: Option<serde_json::Value>,
    #[serde(rename = "Resource", default)]
    pub resource: Option<serde_json::Value>,
}

impl PolicyStatement {
    /// Whether this statement grants to everyone.
    pub fn has_wildcard_principal(&self) -> bool {
        self.principal == "*"
    }
}

/// Statement effect. Unknown strings fold to `Other` and never match
/// the public-policy check.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Effect {
    Allow,
    Deny,
    #[default]
    #[serde(other)]
    Other,
}

impl ResourceDescription {
    /// Case-insensitive substring search over the resource name.
    pub fn name_contains_any(&self, keywords: &[&str]) -> bool {
        let lowered = self.name.to_lowercase();
        keywords.iter().any(|k| lowered.contains(k))
    }

    /// Look up a tag value by key (first match wins).
    pub fn tag_value(&self, key: &str) -> Option<&str> {
        self.tags
            .iter()
            .find(|t| t.key == key)
            .map(|t| t.value.as_str())
    }
}
