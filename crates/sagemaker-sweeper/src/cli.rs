//! Command-line entry point
//!
//! Only `--apptype`, `--region` and `--dry-run` are recognized. Anything
//! else on the command line is dropped before parsing, so schedulers that
//! append their own arguments do not break the run.

use crate::config::{CategoryToggles, RunConfig};
use anyhow::{Context, Result};
use clap::Parser;
use sagemaker_sweeper_common::AppTypeSelector;
use sagemaker_sweeper_common::defaults::APP_TYPE_WILDCARD;

/// Flags that take a value
const VALUE_FLAGS: &[&str] = &["--apptype", "--region"];

/// Flags without a value
const SWITCH_FLAGS: &[&str] = &["--dry-run"];

#[derive(Parser, Debug)]
#[command(name = "sagemaker-sweeper")]
#[command(about = "Stop or delete billable SageMaker resources")]
#[command(args_override_self = true)]
pub struct Args {
    /// Studio app type to delete ("*" for all types)
    #[arg(long = "apptype", default_value = APP_TYPE_WILDCARD, allow_hyphen_values = true)]
    pub app_type: String,

    /// AWS region (provider default chain if not specified)
    #[arg(long, allow_hyphen_values = true)]
    pub region: Option<String>,

    /// Log what would be stopped without stopping anything
    #[arg(long)]
    pub dry_run: bool,
}

impl From<Args> for RunConfig {
    fn from(args: Args) -> Self {
        Self {
            // Every category is always swept from the command line
            toggles: CategoryToggles::default(),
            app_type: AppTypeSelector::parse(&args.app_type),
            region: args.region,
            dry_run: args.dry_run,
        }
    }
}

/// Keep the program name and recognized flags, drop everything else.
///
/// A value flag at the end of the line with no value is dropped too.
pub fn retain_known_args<I>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    let mut kept: Vec<String> = args.next().into_iter().collect();

    while let Some(arg) = args.next() {
        if VALUE_FLAGS.contains(&arg.as_str()) {
            if let Some(value) = args.next() {
                kept.push(arg);
                kept.push(value);
            }
        } else if SWITCH_FLAGS.contains(&arg.as_str())
            || VALUE_FLAGS
                .iter()
                .any(|flag| arg.strip_prefix(flag).is_some_and(|rest| rest.starts_with('=')))
        {
            kept.push(arg);
        }
    }

    kept
}

/// Parse process arguments into a run configuration.
///
/// Repeated flags keep their last value.
pub fn parse_args<I>(args: I) -> Result<RunConfig>
where
    I: IntoIterator<Item = String>,
{
    let args = Args::try_parse_from(retain_known_args(args))
        .context("Failed to parse command-line arguments")?;
    Ok(args.into())
}

/// Print an error and its causes to stderr
pub fn print_error(e: &anyhow::Error) {
    use std::io::Write;

    let mut stderr = std::io::stderr();

    let _ = writeln!(stderr, "\n\x1b[1;31mError:\x1b[0m {e}");

    let mut source = e.source();
    while let Some(cause) = source {
        let _ = writeln!(stderr, "  \x1b[33mCaused by:\x1b[0m {cause}");
        source = cause.source();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_defaults() {
        let config = parse_args(argv(&["sagemaker-sweeper"])).unwrap();
        assert_eq!(config.app_type, AppTypeSelector::Any);
        assert!(config.region.is_none());
        assert!(!config.dry_run);
        assert_eq!(config.enabled_categories().count(), 4);
    }

    #[test]
    fn test_recognized_flags() {
        let config = parse_args(argv(&[
            "sagemaker-sweeper",
            "--apptype",
            "KernelGateway",
            "--region",
            "us-west-2",
            "--dry-run",
        ]))
        .unwrap();
        assert_eq!(
            config.app_type,
            AppTypeSelector::Only("KernelGateway".to_string())
        );
        assert_eq!(config.region.as_deref(), Some("us-west-2"));
        assert!(config.dry_run);
    }

    #[test]
    fn test_unknown_flags_ignored() {
        let config = parse_args(argv(&[
            "sagemaker-sweeper",
            "--snstopic",
            "arn:aws:sns:us-east-1:123:topic",
            "--apptype",
            "JupyterServer",
            "positional",
            "--verbose",
            "--",
        ]))
        .unwrap();
        assert_eq!(
            config.app_type,
            AppTypeSelector::Only("JupyterServer".to_string())
        );
    }

    #[test]
    fn test_retain_known_args() {
        let kept = retain_known_args(argv(&[
            "prog",
            "--help",
            "--region=eu-west-1",
            "--regional",
            "--apptype",
        ]));
        assert_eq!(kept, argv(&["prog", "--region=eu-west-1"]));
    }

    #[test]
    fn test_value_that_looks_like_flag() {
        let kept = retain_known_args(argv(&["prog", "--apptype", "--region", "us-east-1"]));
        assert_eq!(kept, argv(&["prog", "--apptype", "--region"]));
    }

    #[test]
    fn test_repeated_flags_keep_last_value() {
        let config = parse_args(argv(&[
            "sagemaker-sweeper",
            "--apptype",
            "JupyterServer",
            "--apptype",
            "KernelGateway",
            "--dry-run",
            "--dry-run",
        ]))
        .unwrap();
        assert_eq!(
            config.app_type,
            AppTypeSelector::Only("KernelGateway".to_string())
        );
        assert!(config.dry_run);
    }

    #[test]
    fn test_flag_consumed_as_value() {
        // "--region" is taken as the app type; the dangling "us-east-1" is dropped
        let config = parse_args(argv(&[
            "sagemaker-sweeper",
            "--apptype",
            "--region",
            "us-east-1",
        ]))
        .unwrap();
        assert_eq!(config.app_type, AppTypeSelector::Only("--region".to_string()));
        assert!(config.region.is_none());
    }

    #[test]
    fn test_empty_argv() {
        assert!(retain_known_args(Vec::new()).is_empty());
    }
}
