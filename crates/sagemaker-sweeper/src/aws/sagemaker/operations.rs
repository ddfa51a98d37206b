//! SageMaker operations trait for testing

use super::SageMakerClient;
use super::types::{MlflowServer, ModelEndpoint, NotebookInstance, StudioApp};
use anyhow::Result;
use std::future::Future;

/// Trait for SageMaker operations that can be mocked in tests.
///
/// The sweeper only talks to SageMaker through this trait, so pipelines can
/// be exercised without hitting real AWS.
#[cfg_attr(test, mockall::automock)]
pub trait SageMakerOperations: Send + Sync {
    /// List all notebook instances
    fn list_notebook_instances(&self) -> impl Future<Output = Result<Vec<NotebookInstance>>> + Send;

    /// Stop a notebook instance
    fn stop_notebook_instance(&self, name: &str) -> impl Future<Output = Result<()>> + Send;

    /// List all Studio apps
    fn list_studio_apps(&self) -> impl Future<Output = Result<Vec<StudioApp>>> + Send;

    /// Delete a Studio app
    fn delete_studio_app(&self, app: &StudioApp) -> impl Future<Output = Result<()>> + Send;

    /// List all model endpoints
    fn list_endpoints(&self) -> impl Future<Output = Result<Vec<ModelEndpoint>>> + Send;

    /// Delete a model endpoint
    fn delete_endpoint(&self, name: &str) -> impl Future<Output = Result<()>> + Send;

    /// List all MLflow tracking servers
    fn list_mlflow_servers(&self) -> impl Future<Output = Result<Vec<MlflowServer>>> + Send;

    /// Stop an MLflow tracking server
    fn stop_mlflow_server(&self, name: &str) -> impl Future<Output = Result<()>> + Send;
}

impl SageMakerOperations for SageMakerClient {
    async fn list_notebook_instances(&self) -> Result<Vec<NotebookInstance>> {
        SageMakerClient::list_notebook_instances(self).await
    }

    async fn stop_notebook_instance(&self, name: &str) -> Result<()> {
        SageMakerClient::stop_notebook_instance(self, name).await
    }

    async fn list_studio_apps(&self) -> Result<Vec<StudioApp>> {
        SageMakerClient::list_studio_apps(self).await
    }

    async fn delete_studio_app(&self, app: &StudioApp) -> Result<()> {
        SageMakerClient::delete_studio_app(self, app).await
    }

    async fn list_endpoints(&self) -> Result<Vec<ModelEndpoint>> {
        SageMakerClient::list_endpoints(self).await
    }

    async fn delete_endpoint(&self, name: &str) -> Result<()> {
        SageMakerClient::delete_endpoint(self, name).await
    }

    async fn list_mlflow_servers(&self) -> Result<Vec<MlflowServer>> {
        SageMakerClient::list_mlflow_servers(self).await
    }

    async fn stop_mlflow_server(&self, name: &str) -> Result<()> {
        SageMakerClient::stop_mlflow_server(self, name).await
    }
}

impl<T: SageMakerOperations> SageMakerOperations for &T {
    async fn list_notebook_instances(&self) -> Result<Vec<NotebookInstance>> {
        (**self).list_notebook_instances().await
    }

    async fn stop_notebook_instance(&self, name: &str) -> Result<()> {
        (**self).stop_notebook_instance(name).await
    }

    async fn list_studio_apps(&self) -> Result<Vec<StudioApp>> {
        (**self).list_studio_apps().await
    }

    async fn delete_studio_app(&self, app: &StudioApp) -> Result<()> {
        (**self).delete_studio_app(app).await
    }

    async fn list_endpoints(&self) -> Result<Vec<ModelEndpoint>> {
        (**self).list_endpoints().await
    }

    async fn delete_endpoint(&self, name: &str) -> Result<()> {
        (**self).delete_endpoint(name).await
    }

    async fn list_mlflow_servers(&self) -> Result<Vec<MlflowServer>> {
        (**self).list_mlflow_servers().await
    }

    async fn stop_mlflow_server(&self, name: &str) -> Result<()> {
        (**self).stop_mlflow_server(name).await
    }
}

/// Boxed, already-resolved future in the shape mock expectations return
#[cfg(test)]
pub(crate) fn ready<T: Send + 'static>(
    value: T,
) -> std::pin::Pin<Box<dyn Future<Output = T> + Send>> {
    Box::pin(std::future::ready(value))
}
