use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::rules::policy::Policy;

/// Top-level configuration from `.bucketwatch.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub scan: ScanConfig,
    #[serde(default)]
    pub policy: Policy,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    /// "mock" or "live".
    #[serde(default = "default_mode")]
    pub mode: String,
    /// Path to the mock data document.
    #[serde(default = "default_data_file")]
    pub data_file: String,
}

fn default_mode() -> String {
    "mock".into()
}

fn default_data_file() -> String {
    "mock_data/s3_mock.json".into()
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            mode: default_mode(),
            data_file: default_data_file(),
        }
    }
}

impl Config {
    /// Load config from a TOML file. Returns default if file doesn't exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Generate a starter config file.
    pub fn starter_toml() -> &'static str {
        r#"# bucketwatch configuration
# See https://github.com/limaronaldo/bucketwatch for documentation.

[scan]
# "mock" reads the JSON snapshot below; "live" is not implemented yet.
mode = "mock"
data_file = "mock_data/s3_mock.json"

[policy]
# Minimum severity to fail the scan (low, medium, high, critical).
fail_on = "HIGH"

# Issue labels to ignore entirely.
# ignore_checks = ["Access Logging Disabled"]

# Per-issue severity overrides.
# [policy.overrides]
# "Versioning Disabled" = "LOW"
"#
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::Severity;
    use std::io::Write;

    #[test]
    fn missing_file_gives_defaults() {
        let config = Config::load(Path::new("/nonexistent/.bucketwatch.toml")).unwrap();
        assert_eq!(config.scan.mode, "mock");
        assert_eq!(config.policy.fail_on, Severity::High);
    }

    #[test]
    fn starter_toml_round_trips() {
        let config: Config = toml::from_str(Config::starter_toml()).unwrap();
        assert_eq!(config.scan.data_file, "mock_data/s3_mock.json");
        assert_eq!(config.policy.fail_on, Severity::High);
    }

    #[test]
    fn partial_config_fills_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[policy]\nfail_on = \"CRITICAL\"\n").unwrap();
        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.policy.fail_on, Severity::Critical);
        assert_eq!(config.scan.mode, "mock");
    }
}
