//! Shared AWS configuration context
//!
//! Loads the SDK configuration once per run so every client in the run
//! targets the same region with the same credentials.

use aws_config::{BehaviorVersion, Region, SdkConfig};
use std::sync::Arc;

/// Loaded AWS SDK configuration for one sweep.
///
/// # Example
/// ```ignore
/// let aws = AwsContext::new(Some("us-east-2")).await;
/// let sagemaker = SageMakerClient::from_context(&aws);
/// ```
#[derive(Clone)]
pub struct AwsContext {
    config: Arc<SdkConfig>,
}

/// Construct a service wrapper from a loaded [`AwsContext`].
pub trait FromAwsContext {
    fn from_context(ctx: &AwsContext) -> Self;
}

impl AwsContext {
    /// Load AWS configuration, optionally overriding the region.
    ///
    /// Without an override the region comes from the provider chain
    /// (`AWS_REGION`, profile config, instance metadata).
    pub async fn new(region: Option<&str>) -> Self {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        if let Some(region) = region {
            loader = loader.region(Region::new(region.to_string()));
        }

        Self {
            config: Arc::new(loader.load().await),
        }
    }

    /// Get the underlying SDK config for direct client construction.
    pub fn sdk_config(&self) -> &SdkConfig {
        &self.config
    }

    /// Region the context resolved to, if any.
    pub fn region(&self) -> Option<String> {
        self.config.region().map(|r| r.to_string())
    }

    /// Create a SageMaker client from this context.
    pub fn sagemaker_client(&self) -> aws_sdk_sagemaker::Client {
        aws_sdk_sagemaker::Client::new(self.sdk_config())
    }
}

impl std::fmt::Debug for AwsContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AwsContext")
            .field("region", &self.region())
            .finish_non_exhaustive()
    }
}
