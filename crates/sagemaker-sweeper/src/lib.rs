//! sagemaker-sweeper - stops or deletes idle billable SageMaker resources
//!
//! Lists notebook instances, Studio apps, model endpoints and MLflow
//! tracking servers in one region, then stops or deletes the ones that are
//! still running. Two binaries drive the same [`sweep::Sweeper`]: a
//! command-line tool and an event handler for scheduled invocations.

#![recursion_limit = "256"]

pub mod aws;
pub mod cli;
pub mod config;
pub mod error;
pub mod handler;
pub mod logging;
pub mod sweep;
