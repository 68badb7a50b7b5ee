use colored::Colorize;

/// Print a warning message.
pub fn warning(msg: &str) {
    println!("  {} {}", "⚠".yellow(), msg);
}

/// Print an error message.
pub fn error(msg: &str) {
    eprintln!("  {} {}", "✗".red(), msg);
}

/// Print a plain line, verbatim.
pub fn log(msg: &str) {
    println!("{msg}");
}
