//! Operator interaction port.
//!
//! The orchestrator never reads stdin directly; it talks to a [Prompter] so
//! non-interactive runs and tests can substitute scripted answers.
//!
//! - [StdinPrompter]: reads answers from the terminal
//! - [PresetPrompter]: returns scripted answers, for tests and automation

use std::collections::VecDeque;
use std::io::{self, Write};
use std::sync::Mutex;

use crate::error::Result;

/// Asks the operator a yes/no or choice question
pub trait Prompter: Send + Sync {
    /// Ask a yes/no question. `default_yes` selects the answer for plain Enter.
    fn confirm(&self, message: &str, default_yes: bool) -> Result<bool>;

    /// Ask the operator to pick one of `options`; returns the chosen index.
    /// `default` is used for plain Enter.
    fn select(&self, message: &str, options: &[String], default: usize) -> Result<usize>;
}

/// Interactive prompter reading from stdin
#[derive(Debug, Default)]
pub struct StdinPrompter;

impl StdinPrompter {
    pub fn new() -> Self {
        StdinPrompter
    }
}

impl Prompter for StdinPrompter {
    fn confirm(&self, message: &str, default_yes: bool) -> Result<bool> {
        let suffix = if default_yes { "(Y/n)" } else { "(y/N)" };
        print!("\n{} {}: ", message, suffix);
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;

        let response = input.trim().to_lowercase();
        if response.is_empty() {
            return Ok(default_yes);
        }
        Ok(response == "y" || response == "yes")
    }

    fn select(&self, message: &str, options: &[String], default: usize) -> Result<usize> {
        println!("\n\x1b[1m{}\x1b[0m", message);
        for (i, option) in options.iter().enumerate() {
            println!("  {}. {}", i + 1, option);
        }

        print!(
            "\nSelect (1-{}) [default: {}]: ",
            options.len(),
            default + 1
        );
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;
        let selection = input.trim();

        if selection.is_empty() {
            return Ok(default);
        }

        let index = selection.parse::<usize>().unwrap_or(0);
        if index > 0 && index <= options.len() {
            Ok(index - 1)
        } else {
            Ok(default)
        }
    }
}

/// Scripted prompter for tests and automation.
///
/// Confirmations pop answers from a queue, falling back to `fallback` once
/// the queue is drained. Selections always return the offered default.
#[derive(Debug, Default)]
pub struct PresetPrompter {
    answers: Mutex<VecDeque<bool>>,
    fallback: bool,
}

impl PresetPrompter {
    /// Answer every confirmation with `fallback`
    pub fn new(fallback: bool) -> Self {
        PresetPrompter {
            answers: Mutex::new(VecDeque::new()),
            fallback,
        }
    }

    /// Answer confirmations from `answers` in order, then with `fallback`
    pub fn with_answers(answers: Vec<bool>, fallback: bool) -> Self {
        PresetPrompter {
            answers: Mutex::new(answers.into()),
            fallback,
        }
    }
}

impl Prompter for PresetPrompter {
    fn confirm(&self, _message: &str, _default_yes: bool) -> Result<bool> {
        let mut answers = self.answers.lock().expect("answers lock");
        Ok(answers.pop_front().unwrap_or(self.fallback))
    }

    fn select(&self, _message: &str, _options: &[String], default: usize) -> Result<usize> {
        Ok(default)
    }
}
