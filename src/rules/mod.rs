pub mod aggregate;
pub mod builtin;
pub mod finding;
pub mod policy;

use crate::model::ResourceDescription;

pub use aggregate::{sort_by_severity, Summary};
pub use finding::{CheckMetadata, Finding, Severity};

/// A check examines one resource description and produces findings.
pub trait Check: Send + Sync {
    /// Metadata about this check (id, name, default severity).
    fn metadata(&self) -> CheckMetadata;

    /// Run the check against a resource description.
    fn run(&self, resource: &ResourceDescription) -> Vec<Finding>;
}

/// The rule engine runs all registered checks against every resource.
pub struct RuleEngine {
    checks: Vec<Box<dyn Check>>,
}

impl RuleEngine {
    /// Create a new engine with all built-in checks registered.
    pub fn new() -> Self {
        Self {
            checks: builtin::all_checks(),
        }
    }

    /// Run every check on every resource. Checks never short-circuit:
    /// a resource that trips one check is still evaluated by the rest.
    pub fn evaluate(&self, resources: &[ResourceDescription]) -> Vec<Finding> {
        let mut findings = Vec::new();
        for resource in resources {
            let before = findings.len();
            for check in &self.checks {
                findings.extend(check.run(resource));
            }
            tracing::debug!(
                resource = %resource.name,
                findings = findings.len() - before,
                "evaluated resource"
            );
        }
        findings
    }

    /// List metadata for all registered checks.
    pub fn list_checks(&self) -> Vec<CheckMetadata> {
        self.checks.iter().map(|c| c.metadata()).collect()
    }
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::new()
    }
}
