use crate::core::dashboard::print_counts;
use crate::core::query::{completions_by_date, pending_by_priority};
use crate::models::{Field, MaintenanceLog, PendingTask};
use crate::ui::chart::render_bars;
use crate::ui::messages::{header, info, warning};
use crate::utils::colors::{color_for_priority, color_for_status, colorize_optional, paint};
use crate::utils::date::DATE_FORMAT;
use crate::utils::table::{Column, Table};

pub struct AnalyticsLogic;

impl AnalyticsLogic {
    pub fn print(log: &MaintenanceLog, chart_width: usize, notes_width: usize) {
        if log.is_empty() {
            warning("No data available for analytics.");
            return;
        }

        header("Status Distribution");
        print_counts(log, Field::Status, chart_width);

        header("Task Completion Over Time");
        let per_day: Vec<(String, usize)> = completions_by_date(log)
            .into_iter()
            .map(|(d, n)| (d.format(DATE_FORMAT).to_string(), n))
            .collect();
        print!("{}", render_bars(&per_day, chart_width));

        header("Pending Tasks by Priority");
        let pending = pending_by_priority(log);
        if pending.is_empty() {
            info("Every task is completed.");
        } else {
            print!("{}", render_pending(&pending, notes_width));
        }
    }
}

fn render_pending(tasks: &[PendingTask], notes_width: usize) -> String {
    let columns = PendingTask::COLUMNS
        .iter()
        .map(|f| match f {
            Field::Notes => Column::wrapped(f.header(), notes_width),
            _ => Column::new(f.header()),
        })
        .collect();

    let mut table = Table::new(columns);
    for t in tasks {
        table.add_row(vec![
            t.date.format(DATE_FORMAT).to_string(),
            colorize_optional(&t.equipment),
            paint(t.priority.as_str(), color_for_priority(t.priority)),
            colorize_optional(&t.technician),
            paint(t.status.as_str(), color_for_status(t.status)),
            colorize_optional(&t.notes),
        ]);
    }
    table.render()
}
