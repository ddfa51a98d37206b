//! Tracing subscriber setup
//!
//! Each binary builds its subscriber explicitly at startup. Library code
//! only emits events and spans.

use anyhow::{Result, anyhow};
use tracing_subscriber::EnvFilter;

/// Output format for log lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable lines for terminals
    Text,
    /// One JSON object per line for log collectors
    Json,
}

/// Targets that are noisy at INFO
const QUIET_TARGETS: &[&str] = &["aws_config", "aws_sdk_sagemaker", "aws_smithy_runtime", "hyper"];

/// Build the filter from `RUST_LOG`, or INFO with AWS SDK targets capped at WARN.
pub fn env_filter() -> Result<EnvFilter> {
    filter_from(std::env::var(EnvFilter::DEFAULT_ENV).ok().as_deref())
}

/// An explicit directive string wins outright; the defaults apply only
/// when it is absent or unparsable.
fn filter_from(directives: Option<&str>) -> Result<EnvFilter> {
    if let Some(filter) = directives
        .filter(|d| !d.trim().is_empty())
        .and_then(|d| EnvFilter::try_new(d).ok())
    {
        return Ok(filter);
    }

    let mut filter = EnvFilter::new("info");
    for target in QUIET_TARGETS {
        filter = filter.add_directive(format!("{target}=warn").parse()?);
    }
    Ok(filter)
}

/// Install the global subscriber for a binary.
pub fn init(format: LogFormat) -> Result<()> {
    let filter = env_filter()?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    match format {
        LogFormat::Text => builder.try_init(),
        LogFormat::Json => builder.json().with_current_span(true).try_init(),
    }
    .map_err(|e| anyhow!("Failed to initialize logging: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_quiets_sdk() {
        let rendered = filter_from(None).unwrap().to_string();
        assert!(rendered.contains("aws_config=warn"));
        assert!(rendered.contains("info"));
    }

    #[test]
    fn test_rust_log_is_not_overridden() {
        let rendered = filter_from(Some("aws_config=debug")).unwrap().to_string();
        assert!(rendered.contains("aws_config=debug"));
        assert!(!rendered.contains("=warn"));
    }

    #[test]
    fn test_unparsable_rust_log_falls_back() {
        let rendered = filter_from(Some("aws_config=loud")).unwrap().to_string();
        assert!(rendered.contains("aws_config=warn"));

        let rendered = filter_from(Some("  ")).unwrap().to_string();
        assert!(rendered.contains("aws_config=warn"));
    }
}
