use crate::core::query::{RecordFilter, distinct_values, filter};
use crate::models::{Field, MaintenanceLog};
use crate::ui::messages::{info, warning};
use crate::utils::colors::{color_for_priority, color_for_status, colorize_optional, paint};
use crate::utils::table::{Column, Table};

pub struct ListLogic;

impl ListLogic {
    pub fn print(log: &MaintenanceLog, record_filter: &RecordFilter, notes_width: usize) {
        if log.is_empty() {
            warning("No maintenance records yet. Add a new one with `rmaintlog add`.");
            return;
        }

        let selected = filter(log, record_filter);
        if selected.is_empty() {
            info("No records match the selected filters.");
            print_options(log);
            return;
        }

        print!("{}", render_records(&selected, notes_width));
        info(format!("{} of {} record(s) shown.", selected.len(), log.len()));
    }
}

/// Values on record for each filterable column, to pick filters from.
fn print_options(log: &MaintenanceLog) {
    for field in [Field::Category, Field::Status, Field::Technician, Field::Priority] {
        let values: Vec<String> = distinct_values(log, field)
            .into_iter()
            .map(|v| if v.is_empty() { "(none)".to_string() } else { v })
            .collect();
        println!("  {:<11} {}", format!("{field}:"), values.join(", "));
    }
}

/// Full log as a table; the free-text columns wrap at `text_width`.
pub fn render_records(log: &MaintenanceLog, text_width: usize) -> String {
    let columns = Field::ALL
        .iter()
        .map(|f| match f {
            Field::Task | Field::Notes => Column::wrapped(f.header(), text_width),
            _ => Column::new(f.header()),
        })
        .collect();

    let mut table = Table::new(columns);
    for r in log {
        table.add_row(vec![
            r.date_str(),
            r.category.to_string(),
            colorize_optional(&r.equipment),
            colorize_optional(&r.task),
            colorize_optional(&r.technician),
            paint(r.status.as_str(), color_for_status(r.status)),
            paint(r.priority.as_str(), color_for_priority(r.priority)),
            colorize_optional(&r.notes),
        ]);
    }
    table.render()
}
