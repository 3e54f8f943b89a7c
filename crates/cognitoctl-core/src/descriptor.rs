//! Static command metadata shared by every wrapped operation
//!
//! Each Cognito operation is described once by a [`CommandDescriptor`]: the
//! verb/noun that names the command, the API operation it targets, which
//! request parameter binds from the pipeline, and how the response is
//! projected to output. The [`Operation`] trait ties a request type to its
//! descriptor, its response type and the [`CognitoApi`] method that serves it.

use std::fmt;

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::api::CognitoApi;
use crate::error::ApiError;

/// Command verbs, following the verb-noun naming convention
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verb {
    Add,
    Disable,
    Enable,
    Get,
    New,
    Remove,
    Reset,
    Set,
    Start,
    Stop,
    Update,
}

impl Verb {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verb::Add => "add",
            Verb::Disable => "disable",
            Verb::Enable => "enable",
            Verb::Get => "get",
            Verb::New => "new",
            Verb::Remove => "remove",
            Verb::Reset => "reset",
            Verb::Set => "set",
            Verb::Start => "start",
            Verb::Stop => "stop",
            Verb::Update => "update",
        }
    }

    /// Returns true for verbs that change remote state
    pub fn is_mutating(&self) -> bool {
        !matches!(self, Verb::Get)
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What part of the response becomes command output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputShape {
    /// A single top-level response member, by wire name
    Field(&'static str),
    /// The whole response object
    Whole,
    /// No natural payload
    Nothing,
}

impl fmt::Display for OutputShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputShape::Field(name) => f.write_str(name),
            OutputShape::Whole => f.write_str("*"),
            OutputShape::Nothing => f.write_str("-"),
        }
    }
}

/// Immutable per-operation metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandDescriptor {
    /// Cognito API operation name, e.g. `GetGroup`
    pub operation: &'static str,
    pub verb: Verb,
    /// Kebab-case noun, e.g. `admin-device`
    pub noun: &'static str,
    /// Wire name of the parameter that binds from the pipeline
    pub pipeline_param: &'static str,
    /// Wire name of the parameter describing the target in confirmation text
    pub resource_param: &'static str,
    pub output: OutputShape,
    /// Wire name of the parameter echoed by `--pass-thru`
    pub pass_thru: Option<&'static str>,
}

impl CommandDescriptor {
    /// Verb-noun command name, e.g. `get-admin-device`
    pub fn command_name(&self) -> String {
        format!("{}-{}", self.verb, self.noun)
    }

    /// The API operation name in kebab case, e.g. `admin-get-device`
    pub fn operation_alias(&self) -> String {
        kebab_case(self.operation)
    }

    pub fn requires_confirmation(&self) -> bool {
        self.verb.is_mutating()
    }
}

/// A request type bound to exactly one Cognito operation
#[async_trait]
pub trait Operation: Serialize + DeserializeOwned + Clone + fmt::Debug + Send + Sync + 'static {
    type Response: Serialize + fmt::Debug + Send;

    const DESCRIPTOR: CommandDescriptor;

    /// Issue the single remote call for this request
    async fn dispatch(&self, api: &dyn CognitoApi) -> Result<Self::Response, ApiError>;
}

/// Convert a PascalCase operation name into kebab case.
///
/// Acronym runs stay together: `GetUICustomization` -> `get-ui-customization`.
pub fn kebab_case(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if c.is_ascii_uppercase() && i > 0 {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_ascii_lowercase());
            if prev.is_ascii_lowercase()
                || prev.is_ascii_digit()
                || (prev.is_ascii_uppercase() && next_is_lower)
            {
                out.push('-');
            }
        }
        out.push(c.to_ascii_lowercase());
    }

    out
}
