//! sagemaker-sweeper-common - Shared types and constants
//!
//! This crate carries the SageMaker vocabulary used by the sweeper and its
//! entry points, without any AWS SDK dependencies.
//!
//! ## Modules
//!
//! - [`app_type`]: Studio application type selector (concrete type or wildcard)
//! - [`category`]: Resource categories and their sweep order
//! - [`defaults`]: Default configuration values and environment variable names
//! - [`status`]: Provider status literals that mark a resource as billable
//! - [`toggle`]: Text-to-boolean parsing for environment toggles

pub mod app_type;
pub mod category;
pub mod defaults;
pub mod status;
pub mod toggle;

// Re-export commonly used types
pub use app_type::AppTypeSelector;
pub use category::{Action, Category};
pub use toggle::{parse_flag, parse_toggle};
