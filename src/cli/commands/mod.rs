pub mod add;
pub mod analytics;
pub mod backup;
pub mod config;
pub mod dashboard;
pub mod export;
pub mod init;
pub mod list;
pub mod log;

use crate::cli::parser::FilterArgs;
use crate::core::query::RecordFilter;
use crate::errors::AppResult;
use crate::models::{Category, MaintenanceLog, Priority, Status};

/// Default filter over `log`, narrowed by the flags the user passed.
pub(crate) fn build_filter(args: &FilterArgs, log: &MaintenanceLog) -> AppResult<RecordFilter> {
    let mut f = RecordFilter::all_of(log);

    if !args.categories.is_empty() {
        f = f.categories(
            args.categories
                .iter()
                .map(|s| s.parse())
                .collect::<AppResult<Vec<Category>>>()?,
        );
    }
    if !args.statuses.is_empty() {
        f = f.statuses(
            args.statuses
                .iter()
                .map(|s| s.parse())
                .collect::<AppResult<Vec<Status>>>()?,
        );
    }
    if !args.technicians.is_empty() {
        f = f.technicians(args.technicians.iter().cloned());
    }
    if !args.priorities.is_empty() {
        f = f.priorities(
            args.priorities
                .iter()
                .map(|s| s.parse())
                .collect::<AppResult<Vec<Priority>>>()?,
        );
    }

    Ok(f)
}
