use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::errors::{AppError, AppResult};
use crate::models::MaintenanceRecord;
use crate::store::RecordStore;
use crate::utils::date;

/// Record a new maintenance task.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        date,
        category,
        equipment,
        task,
        technician,
        status,
        priority,
        notes,
    } = cmd
    {
        //
        // 1. Parse date (default = today)
        //
        let d = match date {
            Some(s) => Some(date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?),
            None => None,
        };

        //
        // 2. Typed fields, rejected before touching the store
        //
        let record = MaintenanceRecord::new(
            d,
            category.parse()?,
            equipment.trim(),
            task.trim(),
            technician.trim(),
            status.parse()?,
            priority.parse()?,
            notes.trim(),
        );

        //
        // 3. Open store and append
        //
        let mut store = RecordStore::from_config(cfg)?;
        AddLogic::apply(&mut store, record)?;
    }

    Ok(())
}
