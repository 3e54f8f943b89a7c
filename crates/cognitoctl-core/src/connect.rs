//! Client construction and caching
//!
//! Region and credentials come from `aws-config`'s default provider chain,
//! overridden by whatever [`ConnectionSettings`] carries. Built clients are
//! cached per settings key so repeated invocations in one process (pipeline
//! items) share a single client.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use aws_config::BehaviorVersion;
use aws_config::meta::region::RegionProviderChain;
use aws_credential_types::Credentials;
use aws_types::region::Region;
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::sdk::SdkCognitoApi;

/// Provider name attached to explicitly supplied credentials
const CREDENTIALS_PROVIDER: &str = "cognitoctl";

/// Everything that selects a distinct client
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct ConnectionSettings {
    pub region: Option<String>,
    pub aws_profile: Option<String>,
    pub endpoint_url: Option<String>,
    pub access_key_id: Option<String>,
    pub secret_access_key: Option<String>,
    pub session_token: Option<String>,
}

impl fmt::Debug for ConnectionSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionSettings")
            .field("region", &self.region)
            .field("aws_profile", &self.aws_profile)
            .field("endpoint_url", &self.endpoint_url)
            .field("access_key_id", &self.access_key_id)
            .field(
                "secret_access_key",
                &self.secret_access_key.as_ref().map(|_| "***"),
            )
            .field("session_token", &self.session_token.as_ref().map(|_| "***"))
            .finish()
    }
}

impl ConnectionSettings {
    /// Fill unset fields from `fallback`.
    pub fn or(self, fallback: &ConnectionSettings) -> Self {
        Self {
            region: self.region.or_else(|| fallback.region.clone()),
            aws_profile: self.aws_profile.or_else(|| fallback.aws_profile.clone()),
            endpoint_url: self.endpoint_url.or_else(|| fallback.endpoint_url.clone()),
            access_key_id: self.access_key_id.or_else(|| fallback.access_key_id.clone()),
            secret_access_key: self
                .secret_access_key
                .or_else(|| fallback.secret_access_key.clone()),
            session_token: self.session_token.or_else(|| fallback.session_token.clone()),
        }
    }

    fn credential_source(&self) -> Result<CredentialSource, ConnectError> {
        match (&self.access_key_id, &self.secret_access_key) {
            (Some(_), Some(_)) => Ok(CredentialSource::Explicit),
            (None, None) => Ok(match &self.aws_profile {
                Some(profile) => CredentialSource::Profile(profile.clone()),
                None => CredentialSource::DefaultChain,
            }),
            _ => Err(ConnectError::IncompleteCredentials),
        }
    }
}

/// Where the client's credentials come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialSource {
    /// Access key pair given on the command line or in the profile
    Explicit,
    /// A named profile in the shared AWS config files
    Profile(String),
    /// The SDK default provider chain
    DefaultChain,
}

impl fmt::Display for CredentialSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CredentialSource::Explicit => f.write_str("explicit keys"),
            CredentialSource::Profile(name) => write!(f, "AWS profile '{name}'"),
            CredentialSource::DefaultChain => f.write_str("default provider chain"),
        }
    }
}

/// The resolved ambient environment of an invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Environment {
    pub region: String,
    pub endpoint_url: Option<String>,
    pub credentials: CredentialSource,
}

impl Environment {
    /// The endpoint requests go to
    pub fn endpoint(&self) -> String {
        match &self.endpoint_url {
            Some(url) => url.clone(),
            None => format!("https://cognito-idp.{}.amazonaws.com", self.region),
        }
    }
}

#[derive(Error, Debug)]
pub enum ConnectError {
    #[error("No AWS region configured")]
    MissingRegion,

    #[error("Access key and secret key must be supplied together")]
    IncompleteCredentials,
}

/// Build a client for `settings`.
pub async fn connect(
    settings: &ConnectionSettings,
) -> Result<(SdkCognitoApi, Environment), ConnectError> {
    let credentials = settings.credential_source()?;

    let region_provider =
        RegionProviderChain::first_try(settings.region.clone().map(Region::new))
            .or_default_provider();
    let mut loader = aws_config::defaults(BehaviorVersion::latest()).region(region_provider);

    if let Some(profile) = &settings.aws_profile {
        loader = loader.profile_name(profile);
    }
    if let (Some(access_key), Some(secret_key)) =
        (&settings.access_key_id, &settings.secret_access_key)
    {
        loader = loader.credentials_provider(Credentials::new(
            access_key,
            secret_key,
            settings.session_token.clone(),
            None,
            CREDENTIALS_PROVIDER,
        ));
    }

    let sdk_config = loader.load().await;
    let region = sdk_config
        .region()
        .map(|r| r.as_ref().to_string())
        .ok_or(ConnectError::MissingRegion)?;

    let environment = Environment {
        region,
        endpoint_url: settings.endpoint_url.clone(),
        credentials,
    };
    info!(
        region = %environment.region,
        endpoint = %environment.endpoint(),
        credentials = %environment.credentials,
        "Created Cognito client"
    );

    let api = SdkCognitoApi::from_sdk_config(&sdk_config, settings.endpoint_url.as_deref());
    Ok((api, environment))
}

/// Lazily created clients, one per distinct [`ConnectionSettings`]
#[derive(Default)]
pub struct ClientCache {
    clients: Mutex<HashMap<ConnectionSettings, (Arc<SdkCognitoApi>, Environment)>>,
}

impl ClientCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached client for `settings`, creating it on first use.
    pub async fn get_or_connect(
        &self,
        settings: &ConnectionSettings,
    ) -> Result<(Arc<SdkCognitoApi>, Environment), ConnectError> {
        let mut clients = self.clients.lock().await;
        if let Some((api, environment)) = clients.get(settings) {
            debug!(region = %environment.region, "Reusing cached Cognito client");
            return Ok((Arc::clone(api), environment.clone()));
        }

        let (api, environment) = connect(settings).await?;
        let api = Arc::new(api);
        clients.insert(settings.clone(), (Arc::clone(&api), environment.clone()));
        Ok((api, environment))
    }

    pub async fn len(&self) -> usize {
        self.clients.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.clients.lock().await.is_empty()
    }
}
