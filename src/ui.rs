//! Console reporting.
//!
//! All user-facing output goes through [Console] so the orchestrator and the
//! shell executor share one notion of verbosity.

use console::style;

/// Lightweight reporter injected into the orchestrator and shell executor
#[derive(Debug, Clone, Copy, Default)]
pub struct Console {
    verbose: bool,
}

impl Console {
    pub fn new(verbose: bool) -> Self {
        Console { verbose }
    }

    /// Print a status message with a yellow arrow
    pub fn status(&self, message: &str) {
        println!("{} {}", style("→").yellow(), message);
    }

    /// Print a success message with a green checkmark
    pub fn success(&self, message: &str) {
        println!("{} {}", style("✓").green(), message);
    }

    /// Print a warning to stderr
    pub fn warn(&self, message: &str) {
        eprintln!("{} {}", style("⚠ WARNING:").yellow(), message);
    }

    /// Print an error to stderr
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", style("ERROR:").red(), message);
    }

    /// Echo a command about to run. Dry-run commands are always shown;
    /// otherwise only in verbose mode.
    pub fn command(&self, command: &str, dry_run: bool) {
        if dry_run {
            println!("{} {} {}", style("$").dim(), command, style("(dry run)").dim());
        } else if self.verbose {
            println!("{} {}", style("$").dim(), command);
        }
    }
}
