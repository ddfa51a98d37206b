//! Default configuration values shared by the CLI and the event handler
//!
//! Both entry points must agree on what "unset" means, so every fallback
//! lives here.

/// Page size requested from every SageMaker list call
pub const DEFAULT_PAGE_SIZE: i32 = 100;

/// Wildcard app-type selector matching every Studio application type
pub const APP_TYPE_WILDCARD: &str = "*";

/// Category toggles default to enabled: an unconfigured run stops everything
pub const DEFAULT_TOGGLE: bool = true;

/// Literal prefix of the handler's response body
pub const STOPPED_MESSAGE_PREFIX: &str = "Stopped SageMaker Resources: ";

/// HTTP-style status code returned by the event handler on success
pub const SUCCESS_STATUS_CODE: u16 = 200;

/// Environment variables read by the event-triggered entry point
pub mod env {
    /// Studio application type selector (e.g. "KernelGateway" or "*")
    pub const STUDIO_APP_TYPE: &str = "SAGEMAKER_STUDIO_APP_TYPE";

    /// Toggle for deleting model inference endpoints
    pub const MODEL_ENDPOINT_STOP: &str = "SAGEMAKER_MODEL_ENDPOINT_STOP";

    /// Toggle for deleting Studio application sessions
    pub const STUDIO_APP_STOP: &str = "SAGEMAKER_STUDIO_APP_STOP";

    /// Toggle for stopping notebook instances
    pub const NOTEBOOK_INSTANCE_STOP: &str = "SAGEMAKER_NOTEBOOK_INSTANCE_STOP";

    /// Toggle for stopping MLflow tracking servers
    pub const MLFLOW_SERVER_STOP: &str = "SAGEMAKER_MLFLOW_SERVER_STOP";

    /// Optional region override
    pub const REGION: &str = "SAGEMAKER_REGION";

    /// Optional dry-run switch
    pub const DRY_RUN: &str = "SAGEMAKER_DRY_RUN";
}
