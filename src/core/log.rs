use crate::errors::AppResult;
use crate::store::journal::Journal;
use crate::utils::table::visible_width;
use ansi_term::Colour;

const OP_TARGET_MAX: usize = 60;

/// ANSI colour per journal operation.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" => Colour::Green,
        "backup" => Colour::Blue,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(journal: &Journal) -> AppResult<()> {
        let entries = journal.entries()?;

        if entries.is_empty() {
            println!("📜 Internal log is empty ({}).", journal.path().display());
            return Ok(());
        }

        let rows: Vec<(usize, String, &str, String, &str)> = entries
            .iter()
            .enumerate()
            .map(|(i, e)| {
                let date = chrono::DateTime::parse_from_rfc3339(&e.date)
                    .map(|dt| dt.format("%FT%T%:z").to_string())
                    .unwrap_or_else(|_| e.date.clone());

                let op_target = if e.target.is_empty() {
                    e.operation.clone()
                } else {
                    format!("{} ({})", e.operation, e.target)
                };

                (i + 1, date, e.operation.as_str(), op_target, e.message.as_str())
            })
            .collect();

        let id_w = rows.len().to_string().len();
        let date_w = rows.iter().map(|r| r.1.len()).max().unwrap_or(0);
        let op_w = rows
            .iter()
            .map(|r| visible_width(&r.3))
            .max()
            .unwrap_or(10)
            .min(OP_TARGET_MAX);

        println!("📜 Internal log:\n");

        for (id, date, operation, op_target, message) in rows {
            let visible = if op_target.chars().count() > OP_TARGET_MAX {
                let mut s: String = op_target.chars().take(OP_TARGET_MAX - 3).collect();
                s.push_str("...");
                s
            } else {
                op_target
            };

            // only the operation word is coloured
            let color = color_for_operation(operation);
            let painted = match visible.split_once(' ') {
                Some((op_word, rest)) => format!("{} {}", color.paint(op_word), rest),
                None => color.paint(visible.as_str()).to_string(),
            };

            let padding = " ".repeat(op_w.saturating_sub(visible_width(&painted)));

            println!("{id:>id_w$}: {date:<date_w$} | {painted}{padding} => {message}");
        }

        Ok(())
    }
}
