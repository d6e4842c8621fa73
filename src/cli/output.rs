//! Terminal output formatting with colors
//!
//! Respects NO_COLOR, CLICOLOR, CLICOLOR_FORCE automatically.

use std::io::{self, Write};

use colored::Colorize;

/// Print error (red bold "error:" prefix) to stderr
pub fn error(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

/// Print indented error detail (e.g. captured stderr) to stderr
pub fn error_detail(msg: &(impl std::fmt::Display + ?Sized)) {
    for line in msg.to_string().lines() {
        eprintln!("    {}", line);
    }
}

/// Print success status (green checkmark)
pub fn success(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{} {}", "✓".green(), msg);
}

/// Print completed action (green label)
pub fn action(label: &str, msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{}: {}", label.green(), msg);
}

/// Print plain output (no color)
pub fn info(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{}", msg);
}

/// Write `data` exactly as given, no newline, and flush.
pub fn raw<W: Write>(out: &mut W, data: &str) -> io::Result<()> {
    out.write_all(data.as_bytes())?;
    out.flush()
}
