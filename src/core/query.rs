//! Pure queries over a loaded maintenance log: filtering and the aggregates
//! behind the dashboard and analytics views.

use crate::models::{
    Category, Field, MaintenanceLog, MaintenanceRecord, PendingTask, Priority, Status,
};
use chrono::NaiveDate;
use std::collections::{BTreeMap, BTreeSet, HashSet};

/// Accepted values per filterable column. A record passes when every one of
/// its four values is in the matching set, so an empty set matches nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordFilter {
    pub categories: BTreeSet<Category>,
    pub statuses: BTreeSet<Status>,
    pub technicians: BTreeSet<String>,
    pub priorities: BTreeSet<Priority>,
}

impl RecordFilter {
    /// Every value present in `log`: filtering with this is the identity.
    pub fn all_of(log: &MaintenanceLog) -> Self {
        Self {
            categories: log.iter().map(|r| r.category).collect(),
            statuses: log.iter().map(|r| r.status).collect(),
            technicians: distinct_values(log, Field::Technician).into_iter().collect(),
            priorities: log.iter().map(|r| r.priority).collect(),
        }
    }

    pub fn categories(mut self, values: impl IntoIterator<Item = Category>) -> Self {
        self.categories = values.into_iter().collect();
        self
    }

    pub fn statuses(mut self, values: impl IntoIterator<Item = Status>) -> Self {
        self.statuses = values.into_iter().collect();
        self
    }

    pub fn technicians<S: Into<String>>(mut self, values: impl IntoIterator<Item = S>) -> Self {
        self.technicians = values.into_iter().map(Into::into).collect();
        self
    }

    pub fn priorities(mut self, values: impl IntoIterator<Item = Priority>) -> Self {
        self.priorities = values.into_iter().collect();
        self
    }

    pub fn matches(&self, r: &MaintenanceRecord) -> bool {
        self.categories.contains(&r.category)
            && self.statuses.contains(&r.status)
            && self.technicians.contains(&r.technician)
            && self.priorities.contains(&r.priority)
    }
}

/// Records accepted by `filter`, in their original order.
pub fn filter(log: &MaintenanceLog, filter: &RecordFilter) -> MaintenanceLog {
    log.iter().filter(|r| filter.matches(r)).cloned().collect()
}

/// Number of records per distinct value of `field`.
pub fn count_by(log: &MaintenanceLog, field: Field) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for r in log {
        *counts.entry(r.value_of(field).into_owned()).or_insert(0) += 1;
    }
    counts
}

/// Records per calendar date, ascending; dates without records are absent.
pub fn completions_by_date(log: &MaintenanceLog) -> Vec<(NaiveDate, usize)> {
    let mut per_day: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    for r in log {
        *per_day.entry(r.date).or_insert(0) += 1;
    }
    per_day.into_iter().collect()
}

/// Every record not yet completed, projected for the pending-tasks table.
pub fn pending_by_priority(log: &MaintenanceLog) -> Vec<PendingTask> {
    log.iter()
        .filter(|r| !r.status.is_completed())
        .map(PendingTask::from)
        .collect()
}

/// Distinct values of `field`, in order of first appearance.
pub fn distinct_values(log: &MaintenanceLog, field: Field) -> Vec<String> {
    let mut seen = HashSet::new();
    log.iter()
        .map(|r| r.value_of(field).into_owned())
        .filter(|v| seen.insert(v.clone()))
        .collect()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusSummary {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
    pub in_progress: usize,
}

pub fn status_summary(log: &MaintenanceLog) -> StatusSummary {
    log.iter().fold(
        StatusSummary {
            total: log.len(),
            ..Default::default()
        },
        |mut acc, r| {
            match r.status {
                Status::Completed => acc.completed += 1,
                Status::Pending => acc.pending += 1,
                Status::InProgress => acc.in_progress += 1,
            }
            acc
        },
    )
}
