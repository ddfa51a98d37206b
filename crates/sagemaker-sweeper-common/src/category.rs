//! SageMaker resource categories and sweep ordering
//!
//! Every category is swept independently; the order only decides which
//! categories are lost when an earlier one fails to enumerate.

use crate::defaults::env;

/// What the sweeper does to an active resource of a category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum Action {
    /// The resource is stopped and can be started again later
    Stop,
    /// The resource is deleted
    Delete,
}

/// Types of billable SageMaker resources handled by a sweep
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    serde::Serialize,
)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    /// Studio application session (KernelGateway, JupyterServer, ...)
    StudioApp,
    /// Classic notebook instance
    NotebookInstance,
    /// Real-time model inference endpoint
    ModelEndpoint,
    /// Managed MLflow tracking server
    MlflowServer,
}

impl Category {
    /// All categories, in sweep order
    pub const ALL: [Category; 4] = [
        Category::StudioApp,
        Category::NotebookInstance,
        Category::ModelEndpoint,
        Category::MlflowServer,
    ];

    /// Termination applied to active resources of this category
    pub fn action(self) -> Action {
        match self {
            Category::StudioApp | Category::ModelEndpoint => Action::Delete,
            Category::NotebookInstance | Category::MlflowServer => Action::Stop,
        }
    }

    /// Environment variable holding this category's enable toggle
    pub fn toggle_env_var(self) -> &'static str {
        match self {
            Category::StudioApp => env::STUDIO_APP_STOP,
            Category::NotebookInstance => env::NOTEBOOK_INSTANCE_STOP,
            Category::ModelEndpoint => env::MODEL_ENDPOINT_STOP,
            Category::MlflowServer => env::MLFLOW_SERVER_STOP,
        }
    }

    /// Human-readable name for log lines
    pub fn label(self) -> &'static str {
        match self {
            Category::StudioApp => "SageMaker Studio app",
            Category::NotebookInstance => "SageMaker notebook instance",
            Category::ModelEndpoint => "SageMaker model endpoint",
            Category::MlflowServer => "SageMaker MLflow tracking server",
        }
    }
}
