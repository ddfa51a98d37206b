//! Sweep coordination
//!
//! Runs list → filter → terminate for each enabled category in sweep order.
//! A listing failure aborts the run; per-item failures are recorded in the
//! category report and the run continues.

mod filter;
mod report;
mod target;
mod terminate;

pub use filter::filter_active;
pub use report::{CategoryReport, SweepSummary, TerminationFailure};
pub use target::SweepTarget;
pub use terminate::{TerminationOutcome, terminate_all, terminate_one};

use crate::aws::{MlflowServer, ModelEndpoint, NotebookInstance, SageMakerOperations, StudioApp};
use crate::config::RunConfig;
use anyhow::{Context, Result};
use sagemaker_sweeper_common::Category;
use sagemaker_sweeper_common::defaults::STOPPED_MESSAGE_PREFIX;
use tracing::{Instrument, Span, debug, info, info_span};
use uuid::Uuid;

/// Stops or deletes billable SageMaker resources for one run
pub struct Sweeper<O> {
    ops: O,
    config: RunConfig,
    run_id: Uuid,
    span: Span,
}

impl<O: SageMakerOperations> Sweeper<O> {
    /// Create a sweeper whose logs are grouped under a fresh `sweep` span
    pub fn new(ops: O, config: RunConfig) -> Self {
        let run_id = Uuid::new_v4();
        let span = info_span!(
            "sweep",
            %run_id,
            region = config.region.as_deref().unwrap_or("default"),
            dry_run = config.dry_run
        );
        Self {
            ops,
            config,
            run_id,
            span,
        }
    }

    /// Report under a caller-provided span instead
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    pub fn run_id(&self) -> Uuid {
        self.run_id
    }

    /// Sweep every enabled category and return the combined summary.
    pub async fn run(&self) -> Result<SweepSummary> {
        self.run_categories().instrument(self.span.clone()).await
    }

    async fn run_categories(&self) -> Result<SweepSummary> {
        let mut summary = SweepSummary::new(
            self.run_id,
            self.config.region.clone(),
            self.config.dry_run,
        );

        info!(app_type = %self.config.app_type, "Starting SageMaker sweep");

        for category in Category::ALL {
            if !self.config.toggles.is_enabled(category) {
                info!(%category, "Category disabled, skipping");
                continue;
            }

            let report = match category {
                Category::StudioApp => self.sweep::<StudioApp>().await,
                Category::NotebookInstance => self.sweep::<NotebookInstance>().await,
                Category::ModelEndpoint => self.sweep::<ModelEndpoint>().await,
                Category::MlflowServer => self.sweep::<MlflowServer>().await,
            }
            .with_context(|| format!("Sweep aborted while processing {category}"))?;

            summary.categories.push(report);
        }

        let total = summary.total_stopped();
        info!(
            total,
            failed = summary.total_failed(),
            "{}{}",
            STOPPED_MESSAGE_PREFIX,
            total
        );

        Ok(summary)
    }

    async fn sweep<R: SweepTarget>(&self) -> Result<CategoryReport> {
        let span = info_span!(parent: &self.span, "category", category = %R::CATEGORY);
        self.sweep_category::<R>().instrument(span).await
    }

    async fn sweep_category<R: SweepTarget>(&self) -> Result<CategoryReport> {
        let label = R::CATEGORY.label();
        let action = R::CATEGORY.action();
        let mut report = CategoryReport::new(R::CATEGORY);

        debug!("Getting {label}s");
        let records = R::list(&self.ops).await?;
        report.found = records.len();

        let active = filter_active(records, &self.config.app_type);
        report.active = active.len();

        if active.is_empty() {
            info!("No active {label}s to {action}");
            return Ok(report);
        }

        for record in &active {
            info!(
                resource = %record.display_name(),
                arn = record.arn().unwrap_or("-"),
                status = %record.status(),
                "Active {label}"
            );
        }

        let outcomes =
            terminate_all(&self.ops, &active, &self.config.app_type, self.config.dry_run).await;
        for (resource, outcome) in outcomes {
            report.record(resource, outcome);
        }

        info!(
            found = report.found,
            active = report.active,
            stopped = report.stopped,
            failed = report.failed(),
            "Finished {label}s"
        );
        Ok(report)
    }
}
