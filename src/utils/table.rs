//! Table rendering utilities for CLI outputs.
//!
//! Cell widths are measured on the visible text (ANSI escapes stripped,
//! East Asian wide characters counted as two columns).

use regex::Regex;
use std::sync::OnceLock;
use unicode_width::UnicodeWidthStr;

pub struct Column {
    pub header: String,
    /// Wrap cells wider than this; `None` sizes the column to its content.
    pub max_width: Option<usize>,
}

impl Column {
    pub fn new(header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            max_width: None,
        }
    }

    pub fn wrapped(header: impl Into<String>, max_width: usize) -> Self {
        Self {
            header: header.into(),
            max_width: Some(max_width.max(1)),
        }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

fn ansi_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("static regex"))
}

pub fn strip_ansi(s: &str) -> String {
    ansi_re().replace_all(s, "").into_owned()
}

pub fn visible_width(s: &str) -> usize {
    UnicodeWidthStr::width(strip_ansi(s).as_str())
}

fn pad(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(visible_width(s));
    format!("{s}{}", " ".repeat(fill))
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Split each cell of a row into lines, wrapping where the column asks for it.
    fn cell_lines(&self, row: &[String]) -> Vec<Vec<String>> {
        self.columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                let cell = row.get(i).map(String::as_str).unwrap_or("");
                match col.max_width {
                    Some(w) if visible_width(cell) > w => textwrap::wrap(&strip_ansi(cell), w)
                        .into_iter()
                        .map(|l| l.into_owned())
                        .collect(),
                    _ => vec![cell.to_string()],
                }
            })
            .collect()
    }

    pub fn render(&self) -> String {
        let wrapped: Vec<Vec<Vec<String>>> =
            self.rows.iter().map(|r| self.cell_lines(r)).collect();

        let widths: Vec<usize> = self
            .columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                wrapped
                    .iter()
                    .flat_map(|r| r[i].iter())
                    .map(|l| visible_width(l))
                    .chain(std::iter::once(visible_width(&col.header)))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let mut out = String::new();

        // Header
        let header: Vec<String> = self
            .columns
            .iter()
            .zip(&widths)
            .map(|(c, w)| pad(&c.header, *w))
            .collect();
        out.push_str(header.join(" | ").trim_end());
        out.push('\n');

        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        out.push_str(&rule.join("-+-"));
        out.push('\n');

        // Rows
        for cells in &wrapped {
            let height = cells.iter().map(Vec::len).max().unwrap_or(1);
            for line in 0..height {
                let parts: Vec<String> = cells
                    .iter()
                    .zip(&widths)
                    .map(|(c, w)| pad(c.get(line).map(String::as_str).unwrap_or(""), *w))
                    .collect();
                out.push_str(parts.join(" | ").trim_end());
                out.push('\n');
            }
        }

        out
    }
}
