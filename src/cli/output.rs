//! Terminal output for command results
//!
//! Data and listings go to stdout uncolored so they can be piped or diffed;
//! status and errors are colored. Color handling respects NO_COLOR, CLICOLOR,
//! CLICOLOR_FORCE and the `color` setting.

use std::fmt::Display;

use colored::Colorize;

/// Print error (red bold "error:" prefix) to stderr
pub fn error(msg: &(impl Display + ?Sized)) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

/// Print warning (yellow "Warning:" prefix) to stderr
pub fn warning(msg: &(impl Display + ?Sized)) {
    eprintln!("{}: {}", "Warning".yellow(), msg);
}

/// Print a completed write (green checkmark)
pub fn saved(path: &std::path::Path) {
    println!("{} Data saved to {}", "✓".green(), path.display());
}

/// Print a section title (cyan bold)
pub fn section(title: &str) {
    println!("{}", title.cyan().bold());
}

/// Print `label: count`, indented one level under a section
pub fn count(label: &str, n: usize) {
    println!("  {}: {}", label, n);
}

/// Print `label: count` at top level
pub fn total(label: &str, n: usize) {
    println!("{}: {}", label, n);
}

/// Print each line as-is
pub fn lines<I>(lines: I)
where
    I: IntoIterator,
    I::Item: Display,
{
    for line in lines {
        println!("{}", line);
    }
}

/// Print plain output (no color, for documents and notices)
pub fn info(msg: &(impl Display + ?Sized)) {
    println!("{}", msg);
}
