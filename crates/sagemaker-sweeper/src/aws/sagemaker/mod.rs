//! SageMaker resource listing and termination

mod operations;
mod types;

pub use operations::SageMakerOperations;
pub use types::{AppOwner, MlflowServer, ModelEndpoint, NotebookInstance, StudioApp};

#[cfg(test)]
pub use operations::MockSageMakerOperations;
#[cfg(test)]
pub(crate) use operations::ready;

use crate::aws::context::{AwsContext, FromAwsContext};
use anyhow::{Context, Result};
use aws_sdk_sagemaker::{Client, types::AppType};
use sagemaker_sweeper_common::defaults::DEFAULT_PAGE_SIZE;
use tracing::debug;

/// SageMaker client scoped to one region
pub struct SageMakerClient {
    client: Client,
}

impl FromAwsContext for SageMakerClient {
    fn from_context(ctx: &AwsContext) -> Self {
        Self {
            client: ctx.sagemaker_client(),
        }
    }
}

impl SageMakerClient {
    /// Create a new SageMaker client (loads AWS config from environment)
    pub async fn new(region: Option<&str>) -> Self {
        let ctx = AwsContext::new(region).await;
        Self::from_context(&ctx)
    }

    /// List every notebook instance, following `NextToken` until exhausted
    pub async fn list_notebook_instances(&self) -> Result<Vec<NotebookInstance>> {
        let mut instances = Vec::new();
        let mut next_token: Option<String> = None;

        loop {
            let response = self
                .client
                .list_notebook_instances()
                .max_results(DEFAULT_PAGE_SIZE)
                .set_next_token(next_token.take())
                .send()
                .await
                .context("Failed to list notebook instances")?;

            instances.extend(response.notebook_instances().iter().map(NotebookInstance::from));

            match response.next_token() {
                Some(token) if !token.is_empty() => next_token = Some(token.to_string()),
                _ => break,
            }
        }

        debug!(count = instances.len(), "Found notebook instances");
        Ok(instances)
    }

    /// Stop a notebook instance by name
    pub async fn stop_notebook_instance(&self, name: &str) -> Result<()> {
        self.client
            .stop_notebook_instance()
            .notebook_instance_name(name)
            .send()
            .await
            .with_context(|| format!("Failed to stop notebook instance {name}"))?;
        Ok(())
    }

    /// List every Studio app across all domains
    pub async fn list_studio_apps(&self) -> Result<Vec<StudioApp>> {
        let mut apps = Vec::new();
        let mut next_token: Option<String> = None;

        loop {
            let response = self
                .client
                .list_apps()
                .max_results(DEFAULT_PAGE_SIZE)
                .set_next_token(next_token.take())
                .send()
                .await
                .context("Failed to list Studio apps")?;

            apps.extend(response.apps().iter().map(StudioApp::from));

            match response.next_token() {
                Some(token) if !token.is_empty() => next_token = Some(token.to_string()),
                _ => break,
            }
        }

        debug!(count = apps.len(), "Found Studio apps");
        Ok(apps)
    }

    /// Delete a Studio app addressed by domain, owner, type and name
    pub async fn delete_studio_app(&self, app: &StudioApp) -> Result<()> {
        let request = self
            .client
            .delete_app()
            .domain_id(&app.domain_id)
            .app_type(AppType::from(app.app_type.as_str()))
            .app_name(&app.app_name);

        let request = match &app.owner {
            AppOwner::UserProfile(profile) => request.user_profile_name(profile),
            AppOwner::Space(space) => request.space_name(space),
        };

        request.send().await.with_context(|| {
            format!(
                "Failed to delete Studio app {}.{}",
                app.owner.name(),
                app.app_name
            )
        })?;
        Ok(())
    }

    /// List every model endpoint
    pub async fn list_endpoints(&self) -> Result<Vec<ModelEndpoint>> {
        let mut endpoints = Vec::new();
        let mut next_token: Option<String> = None;

        loop {
            let response = self
                .client
                .list_endpoints()
                .max_results(DEFAULT_PAGE_SIZE)
                .set_next_token(next_token.take())
                .send()
                .await
                .context("Failed to list model endpoints")?;

            endpoints.extend(response.endpoints().iter().map(ModelEndpoint::from));

            match response.next_token() {
                Some(token) if !token.is_empty() => next_token = Some(token.to_string()),
                _ => break,
            }
        }

        debug!(count = endpoints.len(), "Found model endpoints");
        Ok(endpoints)
    }

    /// Delete a model endpoint by name
    pub async fn delete_endpoint(&self, name: &str) -> Result<()> {
        self.client
            .delete_endpoint()
            .endpoint_name(name)
            .send()
            .await
            .with_context(|| format!("Failed to delete model endpoint {name}"))?;
        Ok(())
    }

    /// List every MLflow tracking server
    pub async fn list_mlflow_servers(&self) -> Result<Vec<MlflowServer>> {
        let mut servers = Vec::new();
        let mut next_token: Option<String> = None;

        loop {
            let response = self
                .client
                .list_mlflow_tracking_servers()
                .max_results(DEFAULT_PAGE_SIZE)
                .set_next_token(next_token.take())
                .send()
                .await
                .context("Failed to list MLflow tracking servers")?;

            servers.extend(
                response
                    .tracking_server_summaries()
                    .iter()
                    .map(MlflowServer::from),
            );

            match response.next_token() {
                Some(token) if !token.is_empty() => next_token = Some(token.to_string()),
                _ => break,
            }
        }

        debug!(count = servers.len(), "Found MLflow tracking servers");
        Ok(servers)
    }

    /// Stop an MLflow tracking server by name
    pub async fn stop_mlflow_server(&self, name: &str) -> Result<()> {
        self.client
            .stop_mlflow_tracking_server()
            .tracking_server_name(name)
            .send()
            .await
            .with_context(|| format!("Failed to stop MLflow tracking server {name}"))?;
        Ok(())
    }
}
