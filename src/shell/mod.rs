//! Shell command execution.
//!
//! The orchestrator issues every side-effecting command through
//! [ShellExecutor], which renders the template, honors dry-run, and reports
//! the outcome. The actual process spawn sits behind the [CommandRunner]
//! port so tests can substitute a recording implementation:
//!
//! - [system::SystemRunner]: runs commands through `sh -c`
//! - [mock::RecordingRunner]: records commands and returns scripted results

pub mod mock;
pub mod system;

pub use mock::RecordingRunner;
pub use system::SystemRunner;

use crate::context::RunContext;
use crate::error::{ReleaseError, Result};
use crate::template;
use crate::ui::Console;

/// Captured result of one shell command
#[derive(Debug, Clone, PartialEq)]
pub struct CommandOutput {
    pub code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    /// A simulated success, used for dry-run
    pub fn simulated() -> Self {
        CommandOutput {
            code: 0,
            stdout: String::new(),
            stderr: String::new(),
        }
    }

    pub fn success(&self) -> bool {
        self.code == 0
    }
}

/// Port for running one shell command to completion.
///
/// Implementors return `Ok` with the captured output whenever the command
/// could be spawned, non-zero exits included; `Err` is reserved for spawn
/// failures. All implementors must be `Send + Sync`.
pub trait CommandRunner: Send + Sync {
    fn run(&self, command: &str) -> Result<CommandOutput>;
}

/// Formats and runs one command at a time with consistent logging and
/// dry-run semantics. Strictly sequential: callers never issue two commands
/// concurrently for the same phase.
pub struct ShellExecutor {
    runner: Box<dyn CommandRunner>,
    console: Console,
    dry_run: bool,
}

impl ShellExecutor {
    pub fn new(runner: Box<dyn CommandRunner>, console: Console, dry_run: bool) -> Self {
        ShellExecutor {
            runner,
            console,
            dry_run,
        }
    }

    pub fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    /// Render a command template against the run context and execute it.
    ///
    /// A leading `-` marks the command best-effort: a non-zero exit logs a
    /// warning instead of failing the run.
    ///
    /// # Returns
    /// * `Ok(CommandOutput)` - Command ran (or was skipped in dry-run mode)
    /// * `Err` - Unknown template variable, spawn failure, or non-zero exit
    pub fn exec_template(&self, template: &str, ctx: &RunContext) -> Result<CommandOutput> {
        let (best_effort, template) = match template.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, template),
        };
        let command = template::render(template.trim(), ctx)?;
        self.exec_inner(&command, best_effort)
    }

    /// Execute an already-rendered command.
    pub fn exec(&self, command: &str) -> Result<CommandOutput> {
        self.exec_inner(command, false)
    }

    fn exec_inner(&self, command: &str, best_effort: bool) -> Result<CommandOutput> {
        self.console.command(command, self.dry_run);

        if self.dry_run {
            return Ok(CommandOutput::simulated());
        }

        let output = self.runner.run(command)?;
        if !output.success() {
            if best_effort {
                self.console.warn(&format!(
                    "command exited with code {} (ignored): {}",
                    output.code, command
                ));
                return Ok(output);
            }
            return Err(ReleaseError::shell(command, output.code));
        }
        Ok(output)
    }
}
