//! sagemaker-sweeper-event: scheduled entry point
//!
//! Reads configuration from the environment, sweeps, and writes the
//! response document to stdout for the invoking scheduler.

#![recursion_limit = "256"]

use anyhow::{Context, Result};
use sagemaker_sweeper::cli::print_error;
use sagemaker_sweeper::handler::handle_event_from_env;
use sagemaker_sweeper::logging::{self, LogFormat};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(e) = run().await {
        print_error(&e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    logging::init(LogFormat::Json)?;

    let response = Box::pin(handle_event_from_env()).await?;
    let json = serde_json::to_string(&response).context("Failed to encode event response")?;
    println!("{json}");

    Ok(())
}
