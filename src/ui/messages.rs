use ansi_term::{Colour, Style};
use std::fmt;

/// Icons
const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

pub fn info<T: fmt::Display>(msg: T) {
    println!("{} {}", Colour::Blue.bold().paint(ICON_INFO), msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{} {}", Colour::Green.bold().paint(ICON_OK), msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{} {}", Colour::Yellow.bold().paint(ICON_WARN), msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{} {}", Colour::Red.bold().paint(ICON_ERR), msg);
}

/// Section header, e.g. `=== Status Distribution ===`
pub fn header<T: fmt::Display>(msg: T) {
    println!("\n{}", Style::new().bold().paint(format!("=== {msg} ===")));
}

/// One dashboard metric: `label: value`
pub fn metric<T: fmt::Display>(label: &str, value: T) {
    println!("  {:<14} {}", format!("{label}:"), Colour::Cyan.bold().paint(value.to_string()));
}
