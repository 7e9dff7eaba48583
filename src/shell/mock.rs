use std::sync::{Arc, Mutex};

use crate::error::Result;
use crate::shell::{CommandOutput, CommandRunner};

/// Recording runner for testing without touching the system shell.
///
/// Records every command it receives, in order, and returns success unless a
/// failure was scripted with [RecordingRunner::fail_on]. Clones share the
/// same log, so tests can keep a handle after moving the runner into a
/// [ShellExecutor](crate::shell::ShellExecutor).
#[derive(Debug, Clone, Default)]
pub struct RecordingRunner {
    commands: Arc<Mutex<Vec<String>>>,
    failures: Arc<Mutex<Vec<(String, i32)>>>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script a failure: any command containing `needle` exits with `code`
    pub fn fail_on(&self, needle: impl Into<String>, code: i32) {
        self.failures
            .lock()
            .expect("failures lock")
            .push((needle.into(), code));
    }

    /// Every command received so far, in execution order
    pub fn commands(&self) -> Vec<String> {
        self.commands.lock().expect("commands lock").clone()
    }

    /// Whether any recorded command contains `needle`
    pub fn ran(&self, needle: &str) -> bool {
        self.commands().iter().any(|c| c.contains(needle))
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&self, command: &str) -> Result<CommandOutput> {
        self.commands
            .lock()
            .expect("commands lock")
            .push(command.to_string());

        let code = self
            .failures
            .lock()
            .expect("failures lock")
            .iter()
            .find(|(needle, _)| command.contains(needle))
            .map(|(_, code)| *code)
            .unwrap_or(0);

        Ok(CommandOutput {
            code,
            stdout: String::new(),
            stderr: String::new(),
        })
    }
}
