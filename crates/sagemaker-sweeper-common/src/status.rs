//! Provider status literals
//!
//! SageMaker reports resource state as strings. These are the values that
//! mean a resource is provisioned and incurring cost.

/// Notebook instances, Studio apps and endpoints that are serving
pub const IN_SERVICE: &str = "InService";

/// MLflow tracking server lifecycle status for a running server
pub const TRACKING_SERVER_STARTED: &str = "Started";

/// MLflow tracking server activity flag for a server accepting traffic
pub const TRACKING_SERVER_ACTIVE: &str = "Active";
