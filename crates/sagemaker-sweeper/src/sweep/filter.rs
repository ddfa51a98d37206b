//! Active-resource filtering
//!
//! Pure: no remote calls, no logging. Keeps provider order and does not
//! deduplicate.

use super::target::SweepTarget;
use sagemaker_sweeper_common::AppTypeSelector;

/// Keep only the records that are billable and selected.
///
/// An empty input yields an empty output.
pub fn filter_active<R: SweepTarget>(records: Vec<R>, app_type: &AppTypeSelector) -> Vec<R> {
    records
        .into_iter()
        .filter(|record| record.is_active(app_type))
        .collect()
}
