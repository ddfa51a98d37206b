//! SageMaker integration tests - actually call AWS APIs
//!
//! Listing only: nothing here stops or deletes anything. These tests are
//! marked `#[ignore]` and only run with:
//! ```
//! AWS_PROFILE=your_profile cargo test --test aws_sagemaker_integration -- --ignored
//! ```

#![recursion_limit = "256"]


use aws_test_helpers::*;
use sagemaker_sweeper::aws::SageMakerClient;
use sagemaker_sweeper::config::{CategoryToggles, RunConfig};
use sagemaker_sweeper::sweep::Sweeper;

async fn client() -> SageMakerClient {
    let region = get_test_region();
    SageMakerClient::new(Some(&region)).await
}

#[tokio::test]
#[ignore]
async fn test_list_notebook_instances() {
    let notebooks = client()
        .await
        .list_notebook_instances()
        .await
        .expect("AWS credentials required - set AWS_PROFILE or AWS_ACCESS_KEY_ID");

    for nb in &notebooks {
        assert!(!nb.name.is_empty());
        assert!(nb.arn.starts_with("arn:"), "Unexpected ARN: {}", nb.arn);
    }
}

#[tokio::test]
#[ignore]
async fn test_list_studio_apps() {
    let apps = client()
        .await
        .list_studio_apps()
        .await
        .expect("Should list Studio apps");

    for app in &apps {
        assert!(!app.domain_id.is_empty());
        assert!(!app.owner.name().is_empty());
    }
}

#[tokio::test]
#[ignore]
async fn test_list_endpoints() {
    let endpoints = client()
        .await
        .list_endpoints()
        .await
        .expect("Should list endpoints");

    for ep in &endpoints {
        assert!(!ep.status.is_empty(), "Endpoint {} has no status", ep.name);
    }
}

#[tokio::test]
#[ignore]
async fn test_list_mlflow_servers() {
    let servers = client()
        .await
        .list_mlflow_servers()
        .await
        .expect("Should list MLflow tracking servers");

    for server in &servers {
        assert!(!server.name.is_empty());
    }
}

/// Full sweep in dry-run mode: lists everything, stops nothing
#[tokio::test]
#[ignore]
async fn test_dry_run_sweep() {
    let config = RunConfig {
        toggles: CategoryToggles::default(),
        region: Some(get_test_region()),
        dry_run: true,
        ..Default::default()
    };

    let summary = Sweeper::new(client().await, config)
        .run()
        .await
        .expect("Dry-run sweep should succeed");

    assert_eq!(summary.total_stopped(), 0);
    assert_eq!(summary.categories.len(), 4);
}
