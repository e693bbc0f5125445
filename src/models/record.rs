use super::{category::Category, field::Field, priority::Priority, status::Status};
use crate::utils::date;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// A single maintenance task.
///
/// Field order matches the persisted column order, so serializing a record
/// with `csv::Writer::serialize` yields the canonical header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaintenanceRecord {
    #[serde(rename = "Date")]
    pub date: NaiveDate,
    #[serde(rename = "Category")]
    pub category: Category,
    #[serde(rename = "Equipment")]
    pub equipment: String,
    #[serde(rename = "Task")]
    pub task: String,
    #[serde(rename = "Technician")]
    pub technician: String,
    #[serde(rename = "Status")]
    pub status: Status,
    #[serde(rename = "Priority")]
    pub priority: Priority,
    #[serde(rename = "Notes")]
    pub notes: String,
}

impl MaintenanceRecord {
    /// Build a record; a missing date defaults to today.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        date: Option<NaiveDate>,
        category: Category,
        equipment: impl Into<String>,
        task: impl Into<String>,
        technician: impl Into<String>,
        status: Status,
        priority: Priority,
        notes: impl Into<String>,
    ) -> Self {
        Self {
            date: date.unwrap_or_else(date::today),
            category,
            equipment: equipment.into(),
            task: task.into(),
            technician: technician.into(),
            status,
            priority,
            notes: notes.into(),
        }
    }

    pub fn date_str(&self) -> String {
        self.date.format(date::DATE_FORMAT).to_string()
    }

    /// Display value of a column, as it is persisted.
    pub fn value_of(&self, field: Field) -> Cow<'_, str> {
        match field {
            Field::Date => Cow::Owned(self.date_str()),
            Field::Category => Cow::Borrowed(self.category.as_str()),
            Field::Equipment => Cow::Borrowed(&self.equipment),
            Field::Task => Cow::Borrowed(&self.task),
            Field::Technician => Cow::Borrowed(&self.technician),
            Field::Status => Cow::Borrowed(self.status.as_str()),
            Field::Priority => Cow::Borrowed(self.priority.as_str()),
            Field::Notes => Cow::Borrowed(&self.notes),
        }
    }

    /// Row of strings in persisted column order.
    pub fn to_row(&self) -> Vec<String> {
        Field::ALL
            .iter()
            .map(|f| self.value_of(*f).into_owned())
            .collect()
    }
}

/// Projection of a not-yet-completed record, as shown in the analytics view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PendingTask {
    #[serde(rename = "Date")]
    pub date: NaiveDate,
    #[serde(rename = "Equipment")]
    pub equipment: String,
    #[serde(rename = "Priority")]
    pub priority: Priority,
    #[serde(rename = "Technician")]
    pub technician: String,
    #[serde(rename = "Status")]
    pub status: Status,
    #[serde(rename = "Notes")]
    pub notes: String,
}

impl PendingTask {
    pub const COLUMNS: [Field; 6] = [
        Field::Date,
        Field::Equipment,
        Field::Priority,
        Field::Technician,
        Field::Status,
        Field::Notes,
    ];
}

impl From<&MaintenanceRecord> for PendingTask {
    fn from(r: &MaintenanceRecord) -> Self {
        Self {
            date: r.date,
            equipment: r.equipment.clone(),
            priority: r.priority,
            technician: r.technician.clone(),
            status: r.status,
            notes: r.notes.clone(),
        }
    }
}
