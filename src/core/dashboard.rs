use crate::core::query::{count_by, status_summary};
use crate::models::{Field, MaintenanceLog};
use crate::ui::chart::render_bars;
use crate::ui::messages::{header, metric, warning};

pub struct DashboardLogic;

impl DashboardLogic {
    /// System overview: headline counts, then one chart per grouping.
    pub fn print(log: &MaintenanceLog, chart_width: usize) {
        header("System Overview");

        let summary = status_summary(log);
        metric("Total Tasks", summary.total);
        metric("Completed", summary.completed);
        metric("Pending", summary.pending);
        metric("In Progress", summary.in_progress);

        if log.is_empty() {
            warning("No data available yet.");
            return;
        }

        for (title, field) in [
            ("Status Distribution", Field::Status),
            ("Tasks per Category", Field::Category),
            ("Tasks per Technician", Field::Technician),
        ] {
            header(title);
            print_counts(log, field, chart_width);
        }
    }
}

pub(crate) fn print_counts(log: &MaintenanceLog, field: Field, chart_width: usize) {
    let counts: Vec<(String, usize)> = count_by(log, field)
        .into_iter()
        .map(|(k, n)| if k.is_empty() { ("(none)".to_string(), n) } else { (k, n) })
        .collect();
    print!("{}", render_bars(&counts, chart_width));
}
