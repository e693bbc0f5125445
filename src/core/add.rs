use crate::errors::AppResult;
use crate::models::MaintenanceRecord;
use crate::store::RecordStore;
use crate::ui::messages::{success, warning};

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    /// Append `record` to the store and note it in the journal.
    ///
    /// A journal failure is reported but does not undo the append.
    pub fn apply(store: &mut RecordStore, record: MaintenanceRecord) -> AppResult<()> {
        let target = format!("{} {}", record.date_str(), record.equipment);
        let message = format!(
            "{} / {} / {} ({})",
            record.category, record.status, record.priority, record.technician
        );

        store.append(record)?;

        success(format!(
            "Record saved ({} total) in {}",
            store.log().len(),
            store.path().display()
        ));

        if let Err(e) = store.journal().write("add", target.trim(), &message) {
            warning(format!("Failed to write internal journal: {e}"));
        }

        Ok(())
    }
}
