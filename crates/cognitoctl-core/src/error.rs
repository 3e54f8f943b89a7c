//! Error types for the invocation pipeline
//!
//! [`ApiError`] is what a single remote call can fail with. It is built from the
//! SDK's `SdkError` and keeps the original as its source so nothing is lost.
//! [`InvokeError`] is what an invocation fails with: either the API error
//! unchanged, or the same error rewrapped with a hint when the cause chain
//! shows that the service host name could not be resolved.
//!
//! # Example
//!
//! ```rust
//! use cognitoctl_core::ApiError;
//!
//! let err = ApiError::Service {
//!     code: Some("ResourceNotFoundException".to_string()),
//!     message: Some("Group not found.".to_string()),
//!     status: 400,
//!     source: "Group not found.".into(),
//! };
//! assert!(err.is_not_found());
//! assert!(!err.is_retryable());
//! ```

use std::error::Error as StdError;

use aws_sdk_cognitoidentityprovider::error::SdkError;
use aws_smithy_runtime_api::client::orchestrator::HttpResponse;
use aws_smithy_types::error::metadata::ProvideErrorMetadata;
use thiserror::Error;

use crate::connect::Environment;

/// Boxed error kept as the cause of an [`ApiError`]
pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// Error from a single Cognito API call
#[derive(Error, Debug)]
pub enum ApiError {
    /// The service answered with an error response
    #[error("{}", service_message(.code, .message, .status))]
    Service {
        code: Option<String>,
        message: Option<String>,
        status: u16,
        #[source]
        source: BoxError,
    },

    /// The request never reached the service
    #[error("failed to send request: {source}")]
    Dispatch {
        #[source]
        source: BoxError,
    },

    /// The request timed out
    #[error("request timed out: {source}")]
    Timeout {
        #[source]
        source: BoxError,
    },

    /// The request could not be built
    #[error("failed to construct request: {source}")]
    Construction {
        #[source]
        source: BoxError,
    },

    /// The response could not be read
    #[error("failed to read response: {source}")]
    Response {
        #[source]
        source: BoxError,
    },
}

fn service_message(code: &Option<String>, message: &Option<String>, status: &u16) -> String {
    match (code, message) {
        (Some(code), Some(message)) => format!("{code}: {message}"),
        (Some(code), None) => format!("{code} (HTTP {status})"),
        (None, Some(message)) => format!("{message} (HTTP {status})"),
        (None, None) => format!("service error (HTTP {status})"),
    }
}

enum Kind {
    Service {
        code: Option<String>,
        message: Option<String>,
        status: u16,
    },
    Dispatch,
    Timeout,
    Construction,
    Response,
}

impl<E> From<SdkError<E, HttpResponse>> for ApiError
where
    E: ProvideErrorMetadata + StdError + Send + Sync + 'static,
{
    fn from(err: SdkError<E, HttpResponse>) -> Self {
        let kind = match &err {
            SdkError::ServiceError(service) => Kind::Service {
                code: service.err().code().map(str::to_owned),
                message: service.err().message().map(str::to_owned),
                status: service.raw().status().as_u16(),
            },
            SdkError::DispatchFailure(_) => Kind::Dispatch,
            SdkError::TimeoutError(_) => Kind::Timeout,
            SdkError::ConstructionFailure(_) => Kind::Construction,
            _ => Kind::Response,
        };

        let source: BoxError = Box::new(err);
        match kind {
            Kind::Service {
                code,
                message,
                status,
            } => ApiError::Service {
                code,
                message,
                status,
                source,
            },
            Kind::Dispatch => ApiError::Dispatch { source },
            Kind::Timeout => ApiError::Timeout { source },
            Kind::Construction => ApiError::Construction { source },
            Kind::Response => ApiError::Response { source },
        }
    }
}

impl ApiError {
    /// The service error code, e.g. `ResourceNotFoundException`
    pub fn code(&self) -> Option<&str> {
        match self {
            ApiError::Service { code, .. } => code.as_deref(),
            _ => None,
        }
    }

    /// Returns true if the requested resource does not exist
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(
            self.code(),
            Some("ResourceNotFoundException" | "UserNotFoundException" | "GroupNotFoundException")
        )
    }

    /// Returns true for authentication/authorization failures
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(
            self.code(),
            Some(
                "NotAuthorizedException"
                    | "AccessDeniedException"
                    | "UnrecognizedClientException"
                    | "InvalidSignatureException"
                    | "ExpiredTokenException"
            )
        )
    }

    /// Returns true if the service throttled the request
    #[must_use]
    pub fn is_rate_limited(&self) -> bool {
        matches!(
            self.code(),
            Some("TooManyRequestsException" | "ThrottlingException" | "LimitExceededException")
        )
    }

    /// Returns true if the service rejected the request parameters
    #[must_use]
    pub fn is_bad_request(&self) -> bool {
        match self {
            ApiError::Service { code, status, .. } => {
                if matches!(
                    code.as_deref(),
                    Some("InvalidParameterException" | "ValidationException")
                ) {
                    return true;
                }
                *status == 400
                    && !self.is_not_found()
                    && !self.is_unauthorized()
                    && !self.is_rate_limited()
            }
            ApiError::Construction { .. } => true,
            _ => false,
        }
    }

    /// Returns true if this error is potentially retryable
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            ApiError::Service { status, .. } => self.is_rate_limited() || *status >= 500,
            ApiError::Dispatch { .. } | ApiError::Timeout { .. } => {
                !is_name_resolution_failure(self)
            }
            _ => false,
        }
    }

    /// Returns true if the cause chain shows the host name did not resolve
    #[must_use]
    pub fn is_name_resolution(&self) -> bool {
        matches!(self, ApiError::Dispatch { .. }) && is_name_resolution_failure(self)
    }
}

const NAME_RESOLUTION_MARKERS: &[&str] = &[
    "dns error",
    "failed to lookup address",
    "name or service not known",
    "nodename nor servname",
    "no such host is known",
    "temporary failure in name resolution",
];

/// Walk the source chain looking for a name-resolution failure.
pub fn is_name_resolution_failure(err: &(dyn StdError + 'static)) -> bool {
    let mut current = Some(err);
    while let Some(e) = current {
        let text = e.to_string().to_lowercase();
        if NAME_RESOLUTION_MARKERS.iter().any(|m| text.contains(m)) {
            return true;
        }
        current = e.source();
    }

    // Connector errors do not always surface their cause through Display
    let debug = format!("{err:?}").to_lowercase();
    NAME_RESOLUTION_MARKERS.iter().any(|m| debug.contains(m))
}

/// Error from one invocation of a wrapped operation
#[derive(Error, Debug)]
pub enum InvokeError {
    /// The service endpoint could not be resolved
    #[error("{source} {hint}")]
    NameResolution {
        hint: String,
        #[source]
        source: ApiError,
    },

    #[error(transparent)]
    Api(#[from] ApiError),

    /// The request could not be rendered as a payload
    #[error("failed to encode request: {0}")]
    Encode(#[from] serde_json::Error),

    /// The confirmation prompt itself failed
    #[error("confirmation prompt failed: {0}")]
    Confirmation(#[from] std::io::Error),
}

impl InvokeError {
    /// Wrap an API error, adding a hint when the endpoint did not resolve.
    pub fn from_api(err: ApiError, environment: &Environment) -> Self {
        if err.is_name_resolution() {
            InvokeError::NameResolution {
                hint: name_resolution_hint(environment),
                source: err,
            }
        } else {
            InvokeError::Api(err)
        }
    }

    /// The underlying API error, if any
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            InvokeError::NameResolution { source, .. } => Some(source),
            InvokeError::Api(err) => Some(err),
            _ => None,
        }
    }
}

fn name_resolution_hint(environment: &Environment) -> String {
    format!(
        "Name resolution failure attempting to reach service in region {} (as supplied by \
         --region, the profile or the AWS environment). Check that the region is valid and \
         that {} is reachable.",
        environment.region,
        environment.endpoint()
    )
}
