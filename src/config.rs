//! Inference configuration
//!
//! Settings can be built in code or loaded from a YAML (or JSON) file:
//!
//! ```yaml
//! max_depth: 64
//! formats:
//!   uri: true
//!   email: false
//! ```
//!
//! Every field is optional and falls back to its default.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default limit on container nesting
pub const DEFAULT_MAX_DEPTH: usize = 256;

fn default_max_depth() -> usize {
    DEFAULT_MAX_DEPTH
}

fn default_true() -> bool {
    true
}

// ============================================================================
// Inference Config
// ============================================================================

/// Top-level inference settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InferenceConfig {
    /// Containers nested deeper than this degrade to a bare typed fragment
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,

    /// Which string formats to detect
    #[serde(default)]
    pub formats: FormatDetection,
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            formats: FormatDetection::default(),
        }
    }
}

impl InferenceConfig {
    /// Parse from YAML text. JSON is valid YAML, so this reads both.
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let config: InferenceConfig = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::FileNotFound {
            path: format!("{}: {e}", path.display()),
        })?;
        Self::from_yaml_str(&content)
    }

    /// Reject settings the inferrer cannot honour
    pub fn validate(&self) -> Result<()> {
        if self.max_depth == 0 {
            return Err(Error::invalid_value("max_depth", "must be at least 1"));
        }
        Ok(())
    }
}

// ============================================================================
// Format Detection
// ============================================================================

/// Per-format detection toggles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FormatDetection {
    #[serde(default = "default_true")]
    pub uri: bool,

    #[serde(default = "default_true")]
    pub email: bool,

    #[serde(default = "default_true")]
    pub date: bool,

    #[serde(default = "default_true", rename = "date-time", alias = "date_time")]
    pub date_time: bool,
}

impl Default for FormatDetection {
    fn default() -> Self {
        Self {
            uri: true,
            email: true,
            date: true,
            date_time: true,
        }
    }
}

impl FormatDetection {
    /// Detect nothing
    pub fn none() -> Self {
        Self {
            uri: false,
            email: false,
            date: false,
            date_time: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_from_empty_mapping() {
        let config = InferenceConfig::from_yaml_str("{}").unwrap();
        assert_eq!(config, InferenceConfig::default());
        assert_eq!(config.max_depth, DEFAULT_MAX_DEPTH);
    }

    #[test]
    fn test_partial_formats() {
        let yaml = r"
max_depth: 8
formats:
  email: false
  date-time: false
";
        let config = InferenceConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.max_depth, 8);
        assert!(config.formats.uri);
        assert!(!config.formats.email);
        assert!(config.formats.date);
        assert!(!config.formats.date_time);
    }

    #[test]
    fn test_json_config() {
        let config = InferenceConfig::from_yaml_str(r#"{"formats": {"uri": false}}"#).unwrap();
        assert!(!config.formats.uri);
    }

    #[test]
    fn test_zero_depth_rejected() {
        let err = InferenceConfig::from_yaml_str("max_depth: 0").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid config value for 'max_depth': must be at least 1"
        );
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result = InferenceConfig::from_yaml_str("max_dept: 3");
        assert!(matches!(result, Err(Error::YamlParse(_))));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "max_depth: 3").unwrap();
        let config = InferenceConfig::from_file(file.path()).unwrap();
        assert_eq!(config.max_depth, 3);
    }

    #[test]
    fn test_from_missing_file() {
        let result = InferenceConfig::from_file("/nonexistent/json-shape.yaml");
        assert!(matches!(result, Err(Error::FileNotFound { .. })));
    }
}
