use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{CiVersionError, Result};

/// Name of the project-local configuration file.
pub const CONFIG_FILE_NAME: &str = "civersion.toml";

/// Represents the complete configuration for ci-version.
///
/// Contains the environment variable names the context is read from, the
/// manifest location and behavior options.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub environment: EnvironmentConfig,

    #[serde(default)]
    pub manifest: ManifestConfig,

    #[serde(default)]
    pub behavior: BehaviorConfig,
}

fn default_ci_var() -> String {
    "CI".to_string()
}

fn default_ref_var() -> String {
    "GITHUB_REF".to_string()
}

fn default_head_ref_var() -> String {
    "GITHUB_HEAD_REF".to_string()
}

fn default_run_number_var() -> String {
    "GITHUB_RUN_NUMBER".to_string()
}

fn default_output_var() -> String {
    "GITHUB_OUTPUT".to_string()
}

/// Names of the environment variables describing the CI build.
///
/// Defaults follow the GitHub Actions conventions.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct EnvironmentConfig {
    #[serde(default = "default_ci_var")]
    pub ci: String,

    #[serde(default = "default_ref_var", rename = "ref")]
    pub git_ref: String,

    #[serde(default = "default_head_ref_var")]
    pub head_ref: String,

    #[serde(default = "default_run_number_var")]
    pub run_number: String,

    /// Variable naming the file that receives step outputs
    #[serde(default = "default_output_var")]
    pub output: String,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        EnvironmentConfig {
            ci: default_ci_var(),
            git_ref: default_ref_var(),
            head_ref: default_head_ref_var(),
            run_number: default_run_number_var(),
            output: default_output_var(),
        }
    }
}

fn default_manifest_path() -> String {
    "package.json".to_string()
}

/// Location of the manifest whose `version` field gets stamped.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ManifestConfig {
    #[serde(default = "default_manifest_path")]
    pub path: String,
}

impl Default for ManifestConfig {
    fn default() -> Self {
        ManifestConfig {
            path: default_manifest_path(),
        }
    }
}

fn default_emit_outputs() -> bool {
    true
}

/// Configuration for behavior customization.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct BehaviorConfig {
    /// Write `version` / `dist-tag` step outputs after a successful resolve
    #[serde(default = "default_emit_outputs")]
    pub emit_outputs: bool,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        BehaviorConfig {
            emit_outputs: default_emit_outputs(),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `civersion.toml` in current directory
/// 3. `.civersion.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)
            .map_err(|e| CiVersionError::config(format!("Cannot read '{}': {}", path, e)))?
    } else if Path::new(CONFIG_FILE_NAME).exists() {
        fs::read_to_string(CONFIG_FILE_NAME)?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(format!(".{}", CONFIG_FILE_NAME));
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    parse_config(&config_str)
}

/// Parses configuration from TOML text.
pub fn parse_config(config_str: &str) -> Result<Config> {
    toml::from_str(config_str).map_err(|e| CiVersionError::config(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_environment_names() {
        let config = Config::default();
        assert_eq!(config.environment.ci, "CI");
        assert_eq!(config.environment.git_ref, "GITHUB_REF");
        assert_eq!(config.environment.head_ref, "GITHUB_HEAD_REF");
        assert_eq!(config.environment.run_number, "GITHUB_RUN_NUMBER");
        assert_eq!(config.environment.output, "GITHUB_OUTPUT");
    }

    #[test]
    fn test_default_manifest_and_behavior() {
        let config = Config::default();
        assert_eq!(config.manifest.path, "package.json");
        assert!(config.behavior.emit_outputs);
    }

    #[test]
    fn test_empty_document_is_default() {
        assert_eq!(parse_config("").unwrap(), Config::default());
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let config = parse_config(
            r#"
[environment]
ref = "CI_COMMIT_REF"
"#,
        )
        .unwrap();
        assert_eq!(config.environment.git_ref, "CI_COMMIT_REF");
        assert_eq!(config.environment.ci, "CI");
        assert_eq!(config.manifest.path, "package.json");
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = parse_config("[manifest\npath = 1").unwrap_err();
        assert!(matches!(err, CiVersionError::Config(_)));
    }

    #[test]
    fn test_missing_explicit_path_is_error() {
        assert!(load_config(Some("/nonexistent/civersion.toml")).is_err());
    }
}
