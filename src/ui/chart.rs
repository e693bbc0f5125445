//! Horizontal text bar charts for the dashboard and analytics views.

use crate::utils::table::visible_width;
use ansi_term::Colour;

const BAR: char = '█';

/// Render one bar per `(label, count)`, scaled so the largest count spans
/// `width` cells. Non-zero counts always get at least one cell.
pub fn render_bars<L: AsRef<str>>(items: &[(L, usize)], width: usize) -> String {
    let max = items.iter().map(|(_, n)| *n).max().unwrap_or(0);
    if max == 0 {
        return String::new();
    }

    let label_w = items
        .iter()
        .map(|(l, _)| visible_width(l.as_ref()))
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for (label, n) in items {
        let label = label.as_ref();
        let len = (n * width.max(1)).div_ceil(max);
        let fill = label_w.saturating_sub(visible_width(label));

        out.push_str(&format!(
            "  {label}{} │ {} {n}\n",
            " ".repeat(fill),
            Colour::Cyan.paint(BAR.to_string().repeat(len)),
        ));
    }
    out
}
