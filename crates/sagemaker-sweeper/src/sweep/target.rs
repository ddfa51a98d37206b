//! Per-category sweep behaviour
//!
//! Each resource record knows its category, how to decide whether it is
//! billable, and which SageMaker calls list and terminate it.

use crate::aws::{
    AppOwner, MlflowServer, ModelEndpoint, NotebookInstance, SageMakerOperations, StudioApp,
};
use anyhow::Result;
use sagemaker_sweeper_common::status::{IN_SERVICE, TRACKING_SERVER_ACTIVE, TRACKING_SERVER_STARTED};
use sagemaker_sweeper_common::{AppTypeSelector, Category};
use std::future::Future;

/// A SageMaker resource the sweeper can list, judge and terminate.
pub trait SweepTarget: Clone + std::fmt::Debug + Send + Sync {
    /// Category this record belongs to
    const CATEGORY: Category;

    /// Identifier used in log lines and failure reports
    fn display_name(&self) -> String;

    /// ARN, when the provider reports one
    fn arn(&self) -> Option<&str>;

    /// Provider status string
    fn status(&self) -> &str;

    /// Whether the resource is billable and selected for termination
    fn is_active(&self, app_type: &AppTypeSelector) -> bool;

    /// List every resource of this category
    fn list<O: SageMakerOperations>(ops: &O) -> impl Future<Output = Result<Vec<Self>>> + Send;

    /// Stop or delete this resource
    fn terminate<O: SageMakerOperations>(&self, ops: &O) -> impl Future<Output = Result<()>> + Send;
}

impl SweepTarget for NotebookInstance {
    const CATEGORY: Category = Category::NotebookInstance;

    fn display_name(&self) -> String {
        self.name.clone()
    }

    fn arn(&self) -> Option<&str> {
        Some(&self.arn)
    }

    fn status(&self) -> &str {
        &self.status
    }

    fn is_active(&self, _app_type: &AppTypeSelector) -> bool {
        self.status == IN_SERVICE
    }

    async fn list<O: SageMakerOperations>(ops: &O) -> Result<Vec<Self>> {
        ops.list_notebook_instances().await
    }

    async fn terminate<O: SageMakerOperations>(&self, ops: &O) -> Result<()> {
        ops.stop_notebook_instance(&self.name).await
    }
}

impl SweepTarget for StudioApp {
    const CATEGORY: Category = Category::StudioApp;

    fn display_name(&self) -> String {
        match &self.owner {
            AppOwner::UserProfile(profile) => format!("{}.{}", profile, self.app_name),
            AppOwner::Space(space) => format!("space:{}.{}", space, self.app_name),
        }
    }

    fn arn(&self) -> Option<&str> {
        None
    }

    fn status(&self) -> &str {
        &self.status
    }

    fn is_active(&self, app_type: &AppTypeSelector) -> bool {
        self.status == IN_SERVICE && app_type.matches(&self.app_type)
    }

    async fn list<O: SageMakerOperations>(ops: &O) -> Result<Vec<Self>> {
        ops.list_studio_apps().await
    }

    async fn terminate<O: SageMakerOperations>(&self, ops: &O) -> Result<()> {
        ops.delete_studio_app(self).await
    }
}

impl SweepTarget for ModelEndpoint {
    const CATEGORY: Category = Category::ModelEndpoint;

    fn display_name(&self) -> String {
        self.name.clone()
    }

    fn arn(&self) -> Option<&str> {
        Some(&self.arn)
    }

    fn status(&self) -> &str {
        &self.status
    }

    fn is_active(&self, _app_type: &AppTypeSelector) -> bool {
        self.status == IN_SERVICE
    }

    async fn list<O: SageMakerOperations>(ops: &O) -> Result<Vec<Self>> {
        ops.list_endpoints().await
    }

    async fn terminate<O: SageMakerOperations>(&self, ops: &O) -> Result<()> {
        ops.delete_endpoint(&self.name).await
    }
}

impl SweepTarget for MlflowServer {
    const CATEGORY: Category = Category::MlflowServer;

    fn display_name(&self) -> String {
        self.name.clone()
    }

    fn arn(&self) -> Option<&str> {
        Some(&self.arn)
    }

    fn status(&self) -> &str {
        &self.status
    }

    // Both the lifecycle status and the activity flag must agree
    fn is_active(&self, _app_type: &AppTypeSelector) -> bool {
        self.status == TRACKING_SERVER_STARTED && self.is_active == TRACKING_SERVER_ACTIVE
    }

    async fn list<O: SageMakerOperations>(ops: &O) -> Result<Vec<Self>> {
        ops.list_mlflow_servers().await
    }

    async fn terminate<O: SageMakerOperations>(&self, ops: &O) -> Result<()> {
        ops.stop_mlflow_server(&self.name).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app(owner: AppOwner, app_type: &str, status: &str) -> StudioApp {
        StudioApp {
            domain_id: "d-1".to_string(),
            owner,
            app_type: app_type.to_string(),
            app_name: "default".to_string(),
            status: status.to_string(),
        }
    }

    #[test]
    fn test_notebook_predicate() {
        let mut nb = NotebookInstance {
            name: "nb".to_string(),
            arn: "arn:nb".to_string(),
            status: "InService".to_string(),
        };
        assert!(nb.is_active(&AppTypeSelector::Any));
        for status in ["Stopped", "Stopping", "Pending", "Failed", "inservice"] {
            nb.status = status.to_string();
            assert!(!nb.is_active(&AppTypeSelector::Any), "{status} should be inactive");
        }
    }

    #[test]
    fn test_notebook_ignores_app_type() {
        let nb = NotebookInstance {
            name: "nb".to_string(),
            arn: "arn:nb".to_string(),
            status: "InService".to_string(),
        };
        assert!(nb.is_active(&AppTypeSelector::parse("KernelGateway")));
    }

    #[test]
    fn test_studio_app_predicate() {
        let selector = AppTypeSelector::parse("KernelGateway");
        let owner = AppOwner::UserProfile("alice".to_string());

        assert!(app(owner.clone(), "KernelGateway", "InService").is_active(&selector));
        assert!(!app(owner.clone(), "JupyterServer", "InService").is_active(&selector));
        assert!(!app(owner.clone(), "KernelGateway", "Deleted").is_active(&selector));
        assert!(app(owner, "JupyterServer", "InService").is_active(&AppTypeSelector::Any));
    }

    #[test]
    fn test_studio_app_display_name() {
        let private = app(AppOwner::UserProfile("alice".to_string()), "JupyterServer", "InService");
        assert_eq!(private.display_name(), "alice.default");

        let shared = app(AppOwner::Space("team".to_string()), "JupyterLab", "InService");
        assert_eq!(shared.display_name(), "space:team.default");
        assert!(shared.arn().is_none());
    }

    #[test]
    fn test_endpoint_predicate() {
        let endpoint = ModelEndpoint {
            name: "ep".to_string(),
            arn: "arn:ep".to_string(),
            status: "InService".to_string(),
        };
        assert!(endpoint.is_active(&AppTypeSelector::Any));
        let updating = ModelEndpoint {
            status: "Updating".to_string(),
            ..endpoint
        };
        assert!(!updating.is_active(&AppTypeSelector::Any));
    }

    #[test]
    fn test_mlflow_requires_both_conditions() {
        let server = |status: &str, is_active: &str| MlflowServer {
            name: "mlflow".to_string(),
            arn: "arn:mlflow".to_string(),
            status: status.to_string(),
            is_active: is_active.to_string(),
        };

        assert!(server("Started", "Active").is_active(&AppTypeSelector::Any));
        assert!(!server("Started", "Inactive").is_active(&AppTypeSelector::Any));
        assert!(!server("Stopped", "Active").is_active(&AppTypeSelector::Any));
        assert!(!server("InService", "Active").is_active(&AppTypeSelector::Any));
    }
}
