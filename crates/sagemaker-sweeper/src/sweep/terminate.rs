//! Per-item termination
//!
//! Every item yields a [`TerminationOutcome`]; a failure on one item never
//! stops the loop.

use super::target::SweepTarget;
use crate::aws::{SageMakerOperations, classify_anyhow_error};
use sagemaker_sweeper_common::AppTypeSelector;
use tracing::{debug, error, info, warn};

/// Result of a single stop/delete attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminationOutcome {
    /// The stop/delete call succeeded
    Terminated,
    /// Not attempted: inactive at re-check, or dry run
    Skipped,
    /// The resource disappeared before the call reached it
    AlreadyGone,
    /// The call failed
    Failed { reason: String },
}

impl TerminationOutcome {
    pub fn is_terminated(&self) -> bool {
        matches!(self, TerminationOutcome::Terminated)
    }
}

/// Re-check a record and, if still active, stop or delete it.
pub async fn terminate_one<R, O>(
    ops: &O,
    record: &R,
    app_type: &AppTypeSelector,
    dry_run: bool,
) -> TerminationOutcome
where
    R: SweepTarget,
    O: SageMakerOperations,
{
    let resource = record.display_name();
    let action = R::CATEGORY.action();

    // Filter results can be stale by the time we get here
    if !record.is_active(app_type) {
        debug!(resource = %resource, status = %record.status(), "No longer active, skipping");
        return TerminationOutcome::Skipped;
    }

    if dry_run {
        info!(resource = %resource, %action, "[DRY RUN] Would {action}");
        return TerminationOutcome::Skipped;
    }

    info!(
        resource = %resource,
        arn = record.arn().unwrap_or("-"),
        %action,
        "Terminating {}",
        R::CATEGORY.label()
    );

    match record.terminate(ops).await {
        Ok(()) => TerminationOutcome::Terminated,
        Err(e) => {
            let classified = classify_anyhow_error(&e);
            if classified.is_not_found() {
                warn!(resource = %resource, error = %classified, "Already gone");
                TerminationOutcome::AlreadyGone
            } else if classified.is_conflict() {
                // Mid-transition; the next scheduled run picks it up
                warn!(resource = %resource, error = %classified, "Busy, could not {action}");
                TerminationOutcome::Failed {
                    reason: classified.to_string(),
                }
            } else {
                error!(
                    resource = %resource,
                    error = ?e,
                    "Could not {action} {} {resource}",
                    R::CATEGORY.label()
                );
                TerminationOutcome::Failed {
                    reason: classified.to_string(),
                }
            }
        }
    }
}

/// Terminate every record in order, collecting one outcome per record.
pub async fn terminate_all<R, O>(
    ops: &O,
    records: &[R],
    app_type: &AppTypeSelector,
    dry_run: bool,
) -> Vec<(String, TerminationOutcome)>
where
    R: SweepTarget,
    O: SageMakerOperations,
{
    let mut outcomes = Vec::with_capacity(records.len());
    for record in records {
        let outcome = terminate_one(ops, record, app_type, dry_run).await;
        outcomes.push((record.display_name(), outcome));
    }
    outcomes
}
