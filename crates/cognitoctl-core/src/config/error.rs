//! Errors raised while reading or writing the cognitoctl profile file

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Cannot load cognitoctl profiles from {path}: {source}")]
    LoadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot save cognitoctl profiles to {path}: {source}")]
    SaveError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot parse {path} as a cognitoctl profile file (fix or remove it): {source}")]
    ParseError {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("Cannot encode cognitoctl profiles as TOML: {0}")]
    SerializeError(#[from] toml::ser::Error),

    #[error("No cognitoctl profile named '{name}' (create it with `cognitoctl profile set {name}`)")]
    ProfileNotFound { name: String },

    #[error("No home directory to hold cognitoctl profiles; pass --config-file or set COGNITOCTL_CONFIG_FILE")]
    ConfigDirError,
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_profile_file() {
        let err = ConfigError::LoadError {
            path: "/home/me/.config/cognitoctl/config.toml".to_string(),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        };
        let msg = err.to_string();
        assert!(msg.contains("cognitoctl profiles"));
        assert!(msg.contains("/home/me/.config/cognitoctl/config.toml"));

        let parse = toml::from_str::<toml::Table>("[[[").unwrap_err();
        let err = ConfigError::ParseError {
            path: "config.toml".to_string(),
            source: parse,
        };
        assert!(err.to_string().starts_with("Cannot parse config.toml"));
    }

    #[test]
    fn test_missing_profile_points_at_profile_set() {
        let err = ConfigError::ProfileNotFound {
            name: "staging".to_string(),
        };
        assert!(err.to_string().contains("cognitoctl profile set staging"));
    }

    #[test]
    fn test_config_dir_error_names_overrides() {
        let msg = ConfigError::ConfigDirError.to_string();
        assert!(msg.contains("--config-file"));
        assert!(msg.contains("COGNITOCTL_CONFIG_FILE"));
    }
}
