//! Error types for cognitoctl
//!
//! Defines structured error types using thiserror for better error handling and user experience.

use cognitoctl_core::{ConnectError, InvokeError, PipelineError};
use colored::Colorize;
use thiserror::Error;

/// Cargo-style diagnostic formatter for CLI errors.
///
/// Produces structured output like:
/// ```text
/// error: ResourceNotFoundException: Group not found. (HTTP 400)
///   while running get-group on 'Admins'
///
///   tip: check the identifier and the user pool ID
/// ```
pub struct CliDiagnostic {
    message: String,
    detail: Option<String>,
    tips: Vec<(String, Vec<String>)>,
}

impl CliDiagnostic {
    /// Start a new error diagnostic with the given message.
    pub fn error(message: &str) -> Self {
        Self {
            message: message.to_string(),
            detail: None,
            tips: Vec::new(),
        }
    }

    /// Add a detail line below the error message.
    pub fn detail(mut self, text: &str) -> Self {
        self.detail = Some(text.to_string());
        self
    }

    /// Add a tip with optional example commands.
    pub fn tip(mut self, description: &str, commands: &[&str]) -> Self {
        self.tips.push((
            description.to_string(),
            commands.iter().map(|s| s.to_string()).collect(),
        ));
        self
    }

    /// Print the diagnostic to stderr with colored formatting.
    pub fn print(&self) {
        eprint!("{}{}", "error".red().bold(), ": ".bold());
        eprintln!("{}", self.message);

        if let Some(detail) = &self.detail {
            eprintln!("  {}", detail);
        }

        for (description, commands) in &self.tips {
            eprintln!();
            eprint!("  {}{}", "tip".yellow().bold(), ": ".bold());
            eprintln!("{}", description);
            for cmd in commands {
                eprintln!("      {}", cmd);
            }
        }
    }
}

/// Main error type for the cognitoctl application
#[derive(Error, Debug)]
pub enum CognitoCtlError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Profile '{name}' not found")]
    ProfileNotFound { name: String },

    #[error("No AWS region configured")]
    MissingRegion,

    #[error("Access key and secret key must be supplied together")]
    IncompleteCredentials,

    #[error(transparent)]
    Invoke(#[from] InvokeError),

    #[error(transparent)]
    Pipeline(#[from] PipelineError),

    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    #[error("Output formatting error: {message}")]
    OutputError { message: String },

    #[error("{failed} of {total} item(s) failed")]
    ItemsFailed { failed: usize, total: usize },
}

/// Result type for cognitoctl operations
pub type Result<T> = std::result::Result<T, CognitoCtlError>;

impl CognitoCtlError {
    /// Get helpful suggestions for resolving this error
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            CognitoCtlError::ProfileNotFound { name } => vec![
                "List available profiles: cognitoctl profile list".to_string(),
                format!("Create profile '{}': cognitoctl profile set {} --region <region>", name, name),
            ],
            CognitoCtlError::MissingRegion => vec![
                "Pass --region, e.g. --region us-east-1".to_string(),
                "Set AWS_REGION or a region in ~/.aws/config".to_string(),
                "Store a region in a profile: cognitoctl profile set <name> --region <region>".to_string(),
            ],
            CognitoCtlError::IncompleteCredentials => vec![
                "Pass both --access-key and --secret-key, or neither".to_string(),
                "Check the profile: cognitoctl profile validate".to_string(),
            ],
            CognitoCtlError::Invoke(InvokeError::NameResolution { .. }) => vec![
                "Check that the region name is spelled correctly".to_string(),
                "Check --endpoint-url if you are using a local emulator".to_string(),
                "Check network connectivity and DNS settings".to_string(),
            ],
            CognitoCtlError::Invoke(err) => match err.api_error() {
                Some(api) if api.is_not_found() => vec![
                    "Verify the identifier and the user pool ID".to_string(),
                    "List user pools: cognitoctl get-user-pool-list --max-results 60".to_string(),
                ],
                Some(api) if api.is_unauthorized() => vec![
                    "Check which AWS credentials are in use (run with -v)".to_string(),
                    "Ensure the IAM policy allows this cognito-idp action".to_string(),
                ],
                Some(api) if api.is_rate_limited() => {
                    vec!["Slow down: the service is throttling requests".to_string()]
                }
                Some(api) if api.is_bad_request() => {
                    vec!["Check the command syntax: cognitoctl <command> --help".to_string()]
                }
                _ => vec![],
            },
            CognitoCtlError::Pipeline(PipelineError::Bind { .. }) => vec![
                "Each input line must be a value, a JSON string or a JSON object".to_string(),
            ],
            CognitoCtlError::InvalidInput { .. } => vec![
                "Check the command syntax: cognitoctl <command> --help".to_string(),
            ],
            _ => vec![],
        }
    }

    /// Print a cargo-style diagnostic to stderr using colored formatting.
    pub fn print_diagnostic(&self, context: Option<&str>) {
        let mut diag = CliDiagnostic::error(&format!("{}", self));

        if let Some(context) = context {
            diag = diag.detail(context);
        }
        for suggestion in self.suggestions() {
            diag = diag.tip(&suggestion, &[]);
        }

        diag.print();
    }
}

impl From<ConnectError> for CognitoCtlError {
    fn from(err: ConnectError) -> Self {
        match err {
            ConnectError::MissingRegion => CognitoCtlError::MissingRegion,
            ConnectError::IncompleteCredentials => CognitoCtlError::IncompleteCredentials,
        }
    }
}

impl From<cognitoctl_core::config::ConfigError> for CognitoCtlError {
    fn from(err: cognitoctl_core::config::ConfigError) -> Self {
        match err {
            cognitoctl_core::config::ConfigError::ProfileNotFound { name } => {
                CognitoCtlError::ProfileNotFound { name }
            }
            other => CognitoCtlError::Configuration(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for CognitoCtlError {
    fn from(err: serde_json::Error) -> Self {
        CognitoCtlError::OutputError {
            message: format!("JSON error: {}", err),
        }
    }
}

impl From<std::io::Error> for CognitoCtlError {
    fn from(err: std::io::Error) -> Self {
        CognitoCtlError::OutputError {
            message: format!("IO error: {}", err),
        }
    }
}

impl From<anyhow::Error> for CognitoCtlError {
    fn from(err: anyhow::Error) -> Self {
        CognitoCtlError::OutputError {
            message: format!("{:#}", err),
        }
    }
}
