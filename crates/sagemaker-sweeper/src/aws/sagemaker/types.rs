//! Read-only copies of SageMaker resource summaries
//!
//! The sweep only needs identifiers and status strings, so list responses
//! are flattened into these records as soon as they arrive.

use aws_sdk_sagemaker::types::{
    AppDetails, EndpointSummary, NotebookInstanceSummary, TrackingServerSummary,
};

/// Classic notebook instance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotebookInstance {
    pub name: String,
    pub arn: String,
    pub status: String,
}

/// Who a Studio application belongs to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppOwner {
    /// Private app launched from a user profile
    UserProfile(String),
    /// App running in a shared space
    Space(String),
}

impl AppOwner {
    pub fn name(&self) -> &str {
        match self {
            AppOwner::UserProfile(name) | AppOwner::Space(name) => name,
        }
    }
}

/// Studio application session.
///
/// Domain, owner, type and name together address one app.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudioApp {
    pub domain_id: String,
    pub owner: AppOwner,
    pub app_type: String,
    pub app_name: String,
    pub status: String,
}

/// Model inference endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelEndpoint {
    pub name: String,
    pub arn: String,
    pub status: String,
}

/// MLflow tracking server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MlflowServer {
    pub name: String,
    pub arn: String,
    pub status: String,
    pub is_active: String,
}

/// Owned text out of an SDK summary field.
///
/// Summary shapes mix required members (`&str`, `&Enum`) with optional ones
/// (`Option<&str>`, `Option<&Enum>`); absent values become empty strings.
pub(crate) trait FieldText {
    fn text(self) -> String;
}

impl<T: AsRef<str> + ?Sized> FieldText for &T {
    fn text(self) -> String {
        self.as_ref().to_string()
    }
}

impl<T: AsRef<str> + ?Sized> FieldText for Option<&T> {
    fn text(self) -> String {
        self.map(|v| v.as_ref().to_string()).unwrap_or_default()
    }
}

fn field(value: impl FieldText) -> String {
    value.text()
}

impl From<&NotebookInstanceSummary> for NotebookInstance {
    fn from(summary: &NotebookInstanceSummary) -> Self {
        Self {
            name: field(summary.notebook_instance_name()),
            arn: field(summary.notebook_instance_arn()),
            status: field(summary.notebook_instance_status()),
        }
    }
}

impl From<&AppDetails> for StudioApp {
    fn from(app: &AppDetails) -> Self {
        let user_profile = field(app.user_profile_name());
        let owner = if user_profile.is_empty() {
            AppOwner::Space(field(app.space_name()))
        } else {
            AppOwner::UserProfile(user_profile)
        };

        Self {
            domain_id: field(app.domain_id()),
            owner,
            app_type: field(app.app_type()),
            app_name: field(app.app_name()),
            status: field(app.status()),
        }
    }
}

impl From<&EndpointSummary> for ModelEndpoint {
    fn from(summary: &EndpointSummary) -> Self {
        Self {
            name: field(summary.endpoint_name()),
            arn: field(summary.endpoint_arn()),
            status: field(summary.endpoint_status()),
        }
    }
}

impl From<&TrackingServerSummary> for MlflowServer {
    fn from(summary: &TrackingServerSummary) -> Self {
        Self {
            name: field(summary.tracking_server_name()),
            arn: field(summary.tracking_server_arn()),
            status: field(summary.tracking_server_status()),
            is_active: field(summary.is_active()),
        }
    }
}
