//! Connection management for Cognito clients

use std::path::PathBuf;
use std::sync::Arc;

use cognitoctl_core::config::Config;
use cognitoctl_core::{ClientCache, ConnectionSettings, Environment, SdkCognitoApi};
use tracing::{debug, info};

use crate::error::Result as CliResult;

/// Resolves connection settings from flags and profiles, and hands out
/// cached clients
pub struct ConnectionManager {
    pub config: Config,
    pub config_path: Option<PathBuf>,
    clients: ClientCache,
}

impl ConnectionManager {
    /// Create a new connection manager with the given configuration
    #[cfg(test)]
    pub fn new(config: Config) -> Self {
        Self::with_config_path(config, None)
    }

    /// Create a new connection manager with a custom config path
    pub fn with_config_path(config: Config, config_path: Option<PathBuf>) -> Self {
        Self {
            config,
            config_path,
            clients: ClientCache::new(),
        }
    }

    /// Save the configuration to the appropriate location
    pub fn save_config(&self) -> CliResult<()> {
        match &self.config_path {
            Some(path) => self.config.save_to_path(path)?,
            None => self.config.save()?,
        }
        Ok(())
    }

    /// Merge command-line connection flags over the selected profile.
    ///
    /// Anything still unset is left to the AWS SDK's own resolution.
    pub fn resolve_settings(
        &self,
        profile_name: Option<&str>,
        flags: ConnectionSettings,
    ) -> CliResult<ConnectionSettings> {
        match self.config.resolve_profile(profile_name)? {
            Some((name, profile)) => {
                info!("Using profile: {}", name);
                Ok(flags.or(&profile.connection_settings()))
            }
            None => {
                debug!("No profile selected, using AWS default resolution");
                Ok(flags)
            }
        }
    }

    /// Get the client for `settings`, creating it on first use
    pub async fn client(
        &self,
        settings: &ConnectionSettings,
    ) -> CliResult<(Arc<SdkCognitoApi>, Environment)> {
        Ok(self.clients.get_or_connect(settings).await?)
    }
}
