//! Event-triggered entry point
//!
//! A scheduler invokes the handler with configuration in the environment;
//! the handler sweeps and answers with a fixed-shape response.

use crate::aws::{AwsContext, FromAwsContext, SageMakerClient, SageMakerOperations};
use crate::config::RunConfig;
use crate::sweep::Sweeper;
use anyhow::Result;
use sagemaker_sweeper_common::defaults::{STOPPED_MESSAGE_PREFIX, SUCCESS_STATUS_CODE};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Response returned to the scheduler
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventResponse {
    pub status_code: u16,
    /// JSON-encoded message string
    pub body: String,
}

impl EventResponse {
    /// Success response reporting how many resources were stopped
    pub fn stopped(total: usize) -> serde_json::Result<Self> {
        Ok(Self {
            status_code: SUCCESS_STATUS_CODE,
            body: serde_json::to_string(&stopped_message(total))?,
        })
    }
}

/// Message embedded in the response body
pub fn stopped_message(total: usize) -> String {
    format!("{STOPPED_MESSAGE_PREFIX}{total}")
}

/// Sweep with an already-built client and configuration.
pub async fn handle_event<O: SageMakerOperations>(ops: O, config: RunConfig) -> Result<EventResponse> {
    let summary = Sweeper::new(ops, config).run().await?;
    Ok(EventResponse::stopped(summary.total_stopped())?)
}

/// Read configuration from the environment, connect to SageMaker and sweep.
pub async fn handle_event_from_env() -> Result<EventResponse> {
    let config = RunConfig::from_env()?;
    let aws = AwsContext::new(config.region.as_deref()).await;
    info!(region = ?aws.region(), "Handling scheduled sweep");

    let sagemaker = SageMakerClient::from_context(&aws);
    handle_event(sagemaker, config).await
}
