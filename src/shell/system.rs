use std::process::Command;

use crate::error::Result;
use crate::shell::{CommandOutput, CommandRunner};

/// Runs commands through the system shell (`sh -c`)
#[derive(Debug, Default)]
pub struct SystemRunner;

impl SystemRunner {
    pub fn new() -> Self {
        SystemRunner
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, command: &str) -> Result<CommandOutput> {
        let output = Command::new("sh").arg("-c").arg(command).output()?;

        Ok(CommandOutput {
            code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_captures_stdout() {
        let runner = SystemRunner::new();
        let output = runner.run("echo hello").unwrap();
        assert_eq!(output.code, 0);
        assert_eq!(output.stdout.trim(), "hello");
    }

    #[test]
    fn test_run_reports_exit_code() {
        let runner = SystemRunner::new();
        let output = runner.run("exit 3").unwrap();
        assert_eq!(output.code, 3);
    }

    #[test]
    fn test_run_captures_stderr() {
        let runner = SystemRunner::new();
        let output = runner.run("echo oops >&2").unwrap();
        assert_eq!(output.stderr.trim(), "oops");
    }
}
