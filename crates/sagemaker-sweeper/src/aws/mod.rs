//! AWS client modules
//!
//! - context: shared SDK configuration for one run
//! - error: classification of SDK failures
//! - sagemaker: listing and termination of SageMaker resources

pub mod context;
pub mod error;
pub mod sagemaker;

pub use context::{AwsContext, FromAwsContext};
pub use error::{AwsError, classify_anyhow_error, classify_aws_error};
pub use sagemaker::{
    AppOwner, MlflowServer, ModelEndpoint, NotebookInstance, SageMakerClient,
    SageMakerOperations, StudioApp,
};
