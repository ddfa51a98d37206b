//! Configuration validation errors

use thiserror::Error;

/// Configuration validation errors, raised before any remote call
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// App type selector is present but empty
    #[error("Studio app type cannot be empty (use \"*\" for all types)")]
    EmptyAppType,

    /// Region override is present but empty
    #[error("region cannot be empty")]
    EmptyRegion,
}
