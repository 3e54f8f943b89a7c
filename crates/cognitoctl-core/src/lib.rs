//! # cognitoctl-core
//!
//! The engine behind `cognitoctl`: one command per Amazon Cognito Identity
//! Provider API operation, all driven through a single invocation pipeline.
//!
//! ## Layout
//!
//! - [`descriptor`] - static per-operation metadata and the [`Operation`] trait
//! - [`operations`] - request/response types for every wrapped operation
//! - [`model`] - Cognito resource types as they appear in output
//! - [`api`] - the [`CognitoApi`] seam, one async method per operation
//! - [`sdk`] - [`CognitoApi`] over the AWS SDK client
//! - [`connect`] - region/credential resolution and the client cache
//! - [`invoke`] - confirmation, dispatch, error enrichment, output projection
//! - [`pipeline`] - fan-out of stdin items into independent invocations
//! - [`config`] - TOML profiles
//!
//! ## Example
//!
//! ```rust,no_run
//! use cognitoctl_core::{ClientCache, ConnectionSettings, InvocationContext, Invoker, Switches};
//! use cognitoctl_core::invoke::ConfirmationGate;
//! use cognitoctl_core::operations::GetGroupRequest;
//!
//! struct Yes;
//!
//! impl ConfirmationGate for Yes {
//!     fn confirm(&self, _prompt: &str) -> std::io::Result<bool> {
//!         Ok(true)
//!     }
//! }
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let cache = ClientCache::new();
//! let settings = ConnectionSettings {
//!     region: Some("us-east-1".to_string()),
//!     ..Default::default()
//! };
//! let (api, environment) = cache.get_or_connect(&settings).await?;
//!
//! let request = GetGroupRequest {
//!     group_name: Some("Admins".to_string()),
//!     user_pool_id: Some("us-east-1_ABC123".to_string()),
//! };
//! let outcome = Invoker::new(&*api, &Yes)
//!     .invoke(&InvocationContext::new(request, environment), &Switches::default())
//!     .await?;
//! println!("{outcome:?}");
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod connect;
pub mod descriptor;
pub mod error;
pub mod invoke;
pub mod model;
pub mod operations;
pub mod parse;
pub mod pipeline;
pub mod sdk;

pub use api::CognitoApi;
pub use connect::{ClientCache, ConnectError, ConnectionSettings, CredentialSource, Environment};
pub use descriptor::{CommandDescriptor, Operation, OutputShape, Verb};
pub use error::{ApiError, InvokeError};
pub use invoke::{InvocationContext, Invoker, Outcome, Selector, Switches};
pub use pipeline::PipelineError;
pub use sdk::SdkCognitoApi;
