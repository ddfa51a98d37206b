//! sagemaker-sweeper: stop billable SageMaker resources from the command line

#![recursion_limit = "256"]

use anyhow::Result;
use sagemaker_sweeper::aws::{AwsContext, FromAwsContext, SageMakerClient};
use sagemaker_sweeper::cli::{parse_args, print_error};
use sagemaker_sweeper::logging::{self, LogFormat};
use sagemaker_sweeper::sweep::Sweeper;
use tracing::debug;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(e) = run().await {
        print_error(&e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    logging::init(LogFormat::Text)?;

    let config = parse_args(std::env::args())?;
    config.validate()?;

    let aws = AwsContext::new(config.region.as_deref()).await;
    let sagemaker = SageMakerClient::from_context(&aws);

    let summary = Sweeper::new(sagemaker, config).run().await?;
    debug!(
        run_id = %summary.run_id,
        failed = summary.total_failed(),
        "Sweep finished"
    );

    Ok(())
}
