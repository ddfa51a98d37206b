//! AWS error classification
//!
//! Turns SageMaker SDK failures into a small set of typed errors using the
//! error code from `ProvideErrorMetadata`, so the terminator can tell a
//! vanished resource apart from a real failure.

use aws_sdk_sagemaker::error::{ProvideErrorMetadata, SdkError};
use aws_sdk_sagemaker::operation::{
    delete_app::DeleteAppError, delete_endpoint::DeleteEndpointError,
    stop_mlflow_tracking_server::StopMlflowTrackingServerError,
    stop_notebook_instance::StopNotebookInstanceError,
};
use thiserror::Error;

/// AWS error categories for termination outcomes
#[derive(Debug, Error)]
pub enum AwsError {
    /// Resource no longer exists (deleted between listing and termination)
    #[error("Resource not found: {message}")]
    NotFound { message: String },

    /// Resource is mid-transition and cannot take the command right now
    #[error("Resource is busy: {message}")]
    Conflict { message: String },

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    Throttled,

    /// Any other SDK error, with code and message
    #[error("AWS error: {message}")]
    Sdk {
        code: Option<String>,
        message: String,
    },
}

impl AwsError {
    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, AwsError::NotFound { .. })
    }

    /// Check if the resource was busy rather than broken
    pub fn is_conflict(&self) -> bool {
        matches!(self, AwsError::Conflict { .. })
    }

    /// Canonical error code, used when re-classifying a wrapped `AwsError`
    fn code(&self) -> Option<&str> {
        match self {
            AwsError::NotFound { .. } => Some("ResourceNotFound"),
            AwsError::Conflict { .. } => Some("ResourceInUse"),
            AwsError::Throttled => Some("ThrottlingException"),
            AwsError::Sdk { code, .. } => code.as_deref(),
        }
    }
}

/// Error codes SageMaker returns for missing resources
const NOT_FOUND_CODES: &[&str] = &["ResourceNotFound", "ResourceNotFoundException"];

/// `ValidationException` messages that actually mean "missing"
const NOT_FOUND_MESSAGES: &[&str] = &[
    "Could not find",
    "does not exist",
    "not found",
    "RecordNotFound",
];

/// Error codes for resources in a state that rejects the command
const CONFLICT_CODES: &[&str] = &["ResourceInUse", "ConflictException"];

/// Error codes for throttling/rate limiting
const THROTTLING_CODES: &[&str] = &["ThrottlingException", "Throttling", "RequestLimitExceeded"];

/// Classify an AWS SDK error using the error code.
pub fn classify_aws_error(code: Option<&str>, message: Option<&str>) -> AwsError {
    let message = message.unwrap_or("Unknown error").to_string();

    match code {
        Some(c) if NOT_FOUND_CODES.contains(&c) => AwsError::NotFound { message },
        Some("ValidationException")
            if NOT_FOUND_MESSAGES.iter().any(|m| message.contains(m)) =>
        {
            AwsError::NotFound { message }
        }
        Some(c) if CONFLICT_CODES.contains(&c) => AwsError::Conflict { message },
        Some(c) if THROTTLING_CODES.contains(&c) => AwsError::Throttled,
        _ => AwsError::Sdk {
            code: code.map(|s| s.to_string()),
            message,
        },
    }
}

/// Classify an `anyhow::Error` by looking for a SageMaker SDK error in its chain.
///
/// Only the stop/delete operations are checked; list failures are fatal to
/// the run and never need classifying.
pub fn classify_anyhow_error(error: &anyhow::Error) -> AwsError {
    for cause in error.chain() {
        if let Some(e) = cause.downcast_ref::<SdkError<StopNotebookInstanceError>>() {
            return classify_aws_error(e.code(), e.message());
        }
        if let Some(e) = cause.downcast_ref::<SdkError<DeleteAppError>>() {
            return classify_aws_error(e.code(), e.message());
        }
        if let Some(e) = cause.downcast_ref::<SdkError<DeleteEndpointError>>() {
            return classify_aws_error(e.code(), e.message());
        }
        if let Some(e) = cause.downcast_ref::<SdkError<StopMlflowTrackingServerError>>() {
            return classify_aws_error(e.code(), e.message());
        }
        if let Some(e) = cause.downcast_ref::<AwsError>() {
            return classify_aws_error(e.code(), Some(&e.to_string()));
        }
    }

    AwsError::Sdk {
        code: None,
        message: format!("{error:#}"),
    }
}
