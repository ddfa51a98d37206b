//! Sweep reports

use super::terminate::TerminationOutcome;
use chrono::{DateTime, Utc};
use sagemaker_sweeper_common::Category;
use serde::Serialize;
use uuid::Uuid;

/// A resource that could not be stopped or deleted
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TerminationFailure {
    pub resource: String,
    pub reason: String,
}

/// Outcome of one category's pipeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryReport {
    pub category: Category,
    /// Resources returned by the listing
    pub found: usize,
    /// Resources that passed the active filter
    pub active: usize,
    pub stopped: usize,
    pub skipped: usize,
    pub already_gone: usize,
    pub failures: Vec<TerminationFailure>,
}

impl CategoryReport {
    pub fn new(category: Category) -> Self {
        Self {
            category,
            found: 0,
            active: 0,
            stopped: 0,
            skipped: 0,
            already_gone: 0,
            failures: Vec::new(),
        }
    }

    /// Fold one termination outcome into the counters
    pub fn record(&mut self, resource: String, outcome: TerminationOutcome) {
        match outcome {
            TerminationOutcome::Terminated => self.stopped += 1,
            TerminationOutcome::Skipped => self.skipped += 1,
            TerminationOutcome::AlreadyGone => self.already_gone += 1,
            TerminationOutcome::Failed { reason } => {
                self.failures.push(TerminationFailure { resource, reason })
            }
        }
    }

    pub fn failed(&self) -> usize {
        self.failures.len()
    }
}

/// Outcome of a whole run
#[derive(Debug, Clone, Serialize)]
pub struct SweepSummary {
    pub run_id: Uuid,
    pub region: Option<String>,
    pub dry_run: bool,
    pub started_at: DateTime<Utc>,
    /// Reports for the enabled categories, in sweep order
    pub categories: Vec<CategoryReport>,
}

impl SweepSummary {
    pub fn new(run_id: Uuid, region: Option<String>, dry_run: bool) -> Self {
        Self {
            run_id,
            region,
            dry_run,
            started_at: Utc::now(),
            categories: Vec::new(),
        }
    }

    /// Resources stopped or deleted across all categories
    pub fn total_stopped(&self) -> usize {
        self.categories.iter().map(|c| c.stopped).sum()
    }

    pub fn total_failed(&self) -> usize {
        self.categories.iter().map(|c| c.failed()).sum()
    }

    /// Report for one category, if it was swept
    pub fn category(&self, category: Category) -> Option<&CategoryReport> {
        self.categories.iter().find(|c| c.category == category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_outcomes() {
        let mut report = CategoryReport::new(Category::ModelEndpoint);
        report.record("a".to_string(), TerminationOutcome::Terminated);
        report.record("b".to_string(), TerminationOutcome::Skipped);
        report.record("c".to_string(), TerminationOutcome::AlreadyGone);
        report.record(
            "d".to_string(),
            TerminationOutcome::Failed {
                reason: "AWS error: denied".to_string(),
            },
        );

        assert_eq!(report.stopped, 1);
        assert_eq!(report.skipped, 1);
        assert_eq!(report.already_gone, 1);
        assert_eq!(report.failed(), 1);
        assert_eq!(report.failures[0].resource, "d");
    }

    #[test]
    fn test_summary_totals() {
        let mut summary = SweepSummary::new(Uuid::new_v4(), None, false);
        let mut notebooks = CategoryReport::new(Category::NotebookInstance);
        notebooks.stopped = 2;
        let mut endpoints = CategoryReport::new(Category::ModelEndpoint);
        endpoints.stopped = 3;
        endpoints.record("ep".to_string(), TerminationOutcome::Failed { reason: "x".into() });
        summary.categories = vec![notebooks, endpoints];

        assert_eq!(summary.total_stopped(), 5);
        assert_eq!(summary.total_failed(), 1);
        assert!(summary.category(Category::StudioApp).is_none());
        assert_eq!(summary.category(Category::NotebookInstance).map(|c| c.stopped), Some(2));
    }

    #[test]
    fn test_summary_serializes() {
        let mut summary = SweepSummary::new(Uuid::nil(), Some("us-east-2".to_string()), true);
        summary.categories.push(CategoryReport::new(Category::MlflowServer));

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["region"], "us-east-2");
        assert_eq!(json["dry_run"], true);
        assert_eq!(json["categories"][0]["category"], "mlflow-server");
    }
}
