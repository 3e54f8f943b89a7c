//! Configuration management for cognitoctl
//!
//! Handles configuration loading from files and profile resolution.
//! Configuration is stored in TOML format with support for multiple named profiles.

#[cfg(target_os = "macos")]
use directories::BaseDirs;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use super::error::{ConfigError, Result};
use crate::connect::ConnectionSettings;

/// Main configuration structure
#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq)]
pub struct Config {
    /// Profile used when none is given on the command line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_profile: Option<String>,
    /// Map of profile name -> profile configuration
    #[serde(default)]
    pub profiles: HashMap<String, Profile>,
}

/// Individual profile configuration
///
/// Every field is optional; anything left unset falls through to the AWS
/// SDK's own resolution (environment, shared config files, instance metadata).
#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq)]
pub struct Profile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// Named profile in `~/.aws/config`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aws_profile: Option<String>,
    /// Endpoint override, e.g. a local emulator
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_key_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret_access_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_token: Option<String>,
}

impl Profile {
    /// Connection values with `${VAR}` references resolved.
    ///
    /// The profile itself keeps the references, so saving never writes
    /// environment values back to disk.
    pub fn connection_settings(&self) -> ConnectionSettings {
        let expand = |value: &Option<String>| value.as_deref().map(Config::expand_env_vars);
        ConnectionSettings {
            region: expand(&self.region),
            aws_profile: expand(&self.aws_profile),
            endpoint_url: expand(&self.endpoint_url),
            access_key_id: expand(&self.access_key_id),
            secret_access_key: expand(&self.secret_access_key),
            session_token: expand(&self.session_token),
        }
    }

    /// Check if this profile carries explicit keys
    pub fn has_explicit_credentials(&self) -> bool {
        self.access_key_id.is_some() && self.secret_access_key.is_some()
    }

    /// Problems that would make this profile fail at connect time
    pub fn validate(&self) -> Vec<String> {
        let mut problems = Vec::new();

        if self.access_key_id.is_some() != self.secret_access_key.is_some() {
            problems.push(
                "access_key_id and secret_access_key must be set together".to_string(),
            );
        }
        if self.session_token.is_some() && !self.has_explicit_credentials() {
            problems.push("session_token requires access_key_id and secret_access_key".to_string());
        }
        if let Some(url) = self.endpoint_url.as_deref().map(Config::expand_env_vars)
            && !(url.starts_with("http://") || url.starts_with("https://"))
        {
            problems.push(format!("endpoint_url '{url}' must start with http:// or https://"));
        }

        problems
    }
}

impl Config {
    /// Resolve the profile to use.
    ///
    /// An explicit name must exist. Otherwise the default profile is used if
    /// one is set, and no profile at all if not.
    pub fn resolve_profile(&self, explicit_profile: Option<&str>) -> Result<Option<(&str, &Profile)>> {
        let name = match explicit_profile.or(self.default_profile.as_deref()) {
            Some(name) => name,
            None => return Ok(None),
        };

        self.profiles
            .get_key_value(name)
            .map(|(name, profile)| Some((name.as_str(), profile)))
            .ok_or_else(|| ConfigError::ProfileNotFound {
                name: name.to_string(),
            })
    }

    /// Load configuration from the standard location
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;
        Self::load_from_path(&config_path)
    }

    /// Load configuration from a specific path
    pub fn load_from_path(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(config_path).map_err(|e| ConfigError::LoadError {
            path: config_path.display().to_string(),
            source: e,
        })?;

        // `${VAR}` references stay unexpanded until connection time
        let config: Config =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: config_path.display().to_string(),
                source: e,
            })?;

        Ok(config)
    }

    /// Save configuration to the standard location
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;
        self.save_to_path(&config_path)
    }

    /// Save configuration to a specific path
    pub fn save_to_path(&self, config_path: &Path) -> Result<()> {
        // Create parent directories if they don't exist
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::SaveError {
                path: parent.display().to_string(),
                source: e,
            })?;
        }

        let content = toml::to_string_pretty(self)?;

        fs::write(config_path, content).map_err(|e| ConfigError::SaveError {
            path: config_path.display().to_string(),
            source: e,
        })?;

        Ok(())
    }

    /// Set or update a profile
    pub fn set_profile(&mut self, name: String, profile: Profile) {
        self.profiles.insert(name, profile);
    }

    /// Remove a profile by name
    pub fn remove_profile(&mut self, name: &str) -> Option<Profile> {
        if self.default_profile.as_deref() == Some(name) {
            self.default_profile = None;
        }
        self.profiles.remove(name)
    }

    /// List all profiles sorted by name
    pub fn list_profiles(&self) -> Vec<(&String, &Profile)> {
        let mut profiles: Vec<_> = self.profiles.iter().collect();
        profiles.sort_by_key(|(name, _)| *name);
        profiles
    }

    /// Get the path to the configuration file
    ///
    /// On macOS, this supports both the standard macOS path and Linux-style ~/.config path:
    /// 1. Check ~/.config/cognitoctl/config.toml (Linux-style, preferred for consistency)
    /// 2. Fall back to ~/Library/Application Support/com.cognitoctl.cognitoctl/config.toml
    ///
    /// On Linux: ~/.config/cognitoctl/config.toml
    /// On Windows: %APPDATA%\cognitoctl\cognitoctl\config.toml
    pub fn config_path() -> Result<PathBuf> {
        #[cfg(target_os = "macos")]
        {
            if let Some(base_dirs) = BaseDirs::new() {
                let linux_style_path = base_dirs
                    .home_dir()
                    .join(".config")
                    .join("cognitoctl")
                    .join("config.toml");

                if linux_style_path
                    .parent()
                    .map(|p| p.exists())
                    .unwrap_or(false)
                {
                    return Ok(linux_style_path);
                }
            }
        }

        let proj_dirs = ProjectDirs::from("com", "cognitoctl", "cognitoctl")
            .ok_or(ConfigError::ConfigDirError)?;

        Ok(proj_dirs.config_dir().join("config.toml"))
    }

    /// Expand environment variables in a profile value
    ///
    /// Supports ${VAR} and ${VAR:-default} syntax. Unset variables without a
    /// default are left as-is.
    ///
    /// Example:
    /// ```toml
    /// secret_access_key = "${COGNITO_SECRET_KEY}"
    /// region = "${AWS_REGION:-us-east-1}"
    /// ```
    fn expand_env_vars(value: &str) -> String {
        shellexpand::env_with_context_no_errors(value, |var| std::env::var(var).ok()).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn local_profile() -> Profile {
        Profile {
            region: Some("us-east-1".to_string()),
            endpoint_url: Some("http://localhost:9229".to_string()),
            access_key_id: Some("local".to_string()),
            secret_access_key: Some("local".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_config_serialization() {
        let mut config = Config::default();
        config.set_profile("local".to_string(), local_profile());
        config.default_profile = Some("local".to_string());

        let serialized = toml::to_string(&config).unwrap();
        assert!(!serialized.contains("session_token"));

        let deserialized: Config = toml::from_str(&serialized).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_connection_settings_copy_fields() {
        let settings = local_profile().connection_settings();
        assert_eq!(settings.region.as_deref(), Some("us-east-1"));
        assert_eq!(settings.endpoint_url.as_deref(), Some("http://localhost:9229"));
        assert_eq!(settings.aws_profile, None);
    }

    #[test]
    #[serial_test::serial]
    fn test_env_var_expansion() {
        unsafe {
            std::env::set_var("TEST_COGNITO_SECRET", "from-env");
            std::env::remove_var("TEST_COGNITO_REGION");
        }

        let profile = Profile {
            secret_access_key: Some("${TEST_COGNITO_SECRET}".to_string()),
            region: Some("${TEST_COGNITO_REGION:-eu-central-1}".to_string()),
            aws_profile: Some("${TEST_COGNITO_UNSET}".to_string()),
            ..Default::default()
        };

        let settings = profile.connection_settings();
        assert_eq!(settings.secret_access_key.as_deref(), Some("from-env"));
        assert_eq!(settings.region.as_deref(), Some("eu-central-1"));
        assert_eq!(settings.aws_profile.as_deref(), Some("${TEST_COGNITO_UNSET}"));

        // The profile keeps its references
        assert_eq!(
            profile.secret_access_key.as_deref(),
            Some("${TEST_COGNITO_SECRET}")
        );

        unsafe {
            std::env::remove_var("TEST_COGNITO_SECRET");
        }
    }

    #[test]
    fn test_resolve_profile() {
        let mut config = Config::default();
        config.set_profile("local".to_string(), local_profile());
        config.set_profile(
            "prod".to_string(),
            Profile {
                aws_profile: Some("admin".to_string()),
                ..Default::default()
            },
        );

        // No default, no explicit: ambient AWS resolution only
        assert!(config.resolve_profile(None).unwrap().is_none());

        config.default_profile = Some("local".to_string());
        let (name, _) = config.resolve_profile(None).unwrap().unwrap();
        assert_eq!(name, "local");

        let (name, profile) = config.resolve_profile(Some("prod")).unwrap().unwrap();
        assert_eq!(name, "prod");
        assert_eq!(profile.aws_profile.as_deref(), Some("admin"));

        let err = config.resolve_profile(Some("missing")).unwrap_err();
        assert!(matches!(err, ConfigError::ProfileNotFound { name } if name == "missing"));
    }

    #[test]
    fn test_remove_default_profile_clears_default() {
        let mut config = Config::default();
        config.set_profile("local".to_string(), local_profile());
        config.default_profile = Some("local".to_string());

        assert!(config.remove_profile("local").is_some());
        assert_eq!(config.default_profile, None);
        assert!(config.remove_profile("local").is_none());
    }

    #[test]
    fn test_profile_validation() {
        assert!(local_profile().validate().is_empty());

        let half = Profile {
            access_key_id: Some("AKIDEXAMPLE".to_string()),
            session_token: Some("token".to_string()),
            endpoint_url: Some("localhost:9229".to_string()),
            ..Default::default()
        };
        let problems = half.validate();
        assert_eq!(problems.len(), 3);
        assert!(problems[2].contains("localhost:9229"));
    }
}
