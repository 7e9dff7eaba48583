//! Release orchestration.
//!
//! [TaskRunner] walks the fixed lifecycle sequence and, for each event, runs
//! the surrounding hooks and the per-namespace plugin work. Hook ordering is
//! fixed: global before scoped for "before" hooks, scoped before global for
//! "after" hooks. Scoped "after" hooks fire immediately after a namespace's
//! work executes, so a later namespace's failure cannot retract them; the
//! global "after" hook fires once the whole event completed.

use std::collections::HashMap;
use std::fmt;
use std::time::{Duration, Instant};

use crate::config::Config;
use crate::context::RunContext;
use crate::error::{ReleaseError, Result};
use crate::gate::ConfirmationGate;
use crate::hooks::{self, HookPrefix, LifecycleEvent};
use crate::plugins::{self, ReleasePlugin};
use crate::prompt::Prompter;
use crate::shell::ShellExecutor;
use crate::template;
use crate::ui::Console;

/// Result classification for one (event, namespace) phase.
///
/// Governs whether the corresponding scoped "after" hook fires: it does iff
/// the outcome is `Executed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseOutcome {
    /// The plugin work ran to completion
    Executed,
    /// A feature flag disabled the step
    Skipped,
    /// The operator declined, directly or through a dependent decline
    Cancelled,
    /// The plugin work errored; the run aborts
    Failed,
}

impl fmt::Display for PhaseOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PhaseOutcome::Executed => "executed",
            PhaseOutcome::Skipped => "skipped",
            PhaseOutcome::Cancelled => "cancelled",
            PhaseOutcome::Failed => "failed",
        };
        write!(f, "{}", name)
    }
}

/// Final result of a completed run
#[derive(Debug, Clone, PartialEq)]
pub struct ReleaseSummary {
    pub name: String,
    pub latest_version: String,
    pub version: String,
    pub elapsed: Duration,
}

impl ReleaseSummary {
    /// The completion line logged at the end of a run
    pub fn completion_line(&self) -> String {
        format!("Done (in {}s.)", self.elapsed.as_secs())
    }
}

/// The release state machine.
///
/// Owns the run context, the hook map snapshot (through [Config]), the
/// enabled plugin set, and the per-namespace decision memory for the run's
/// duration. Execution is strictly sequential.
pub struct TaskRunner {
    config: Config,
    ctx: RunContext,
    plugins: Vec<Box<dyn ReleasePlugin>>,
    shell: ShellExecutor,
    gate: ConfirmationGate,
    prompter: Box<dyn Prompter>,
    console: Console,
    outcomes: HashMap<(LifecycleEvent, String), PhaseOutcome>,
}

impl TaskRunner {
    /// Build a runner. Validates the configuration up front: a malformed hook
    /// key or unknown template variable aborts here, before any phase runs.
    pub fn new(
        config: Config,
        plugins: Vec<Box<dyn ReleasePlugin>>,
        shell: ShellExecutor,
        prompter: Box<dyn Prompter>,
        console: Console,
    ) -> Result<Self> {
        config.validate()?;

        let ctx = RunContext::new(config.project.name.clone());
        let gate = ConfirmationGate::new(!config.ci, config.default_answer);

        Ok(TaskRunner {
            config,
            ctx,
            plugins,
            shell,
            gate,
            prompter,
            console,
            outcomes: HashMap::new(),
        })
    }

    /// Drive the full lifecycle and return the release summary.
    ///
    /// Any failure short-circuits the remaining namespaces and events; the
    /// phases completed so far are reported before the error is returned.
    pub fn run(&mut self) -> Result<ReleaseSummary> {
        let started = Instant::now();

        for event in LifecycleEvent::SEQUENCE {
            self.run_event(event)?;

            if event == LifecycleEvent::Init {
                self.console.status(&format!(
                    "release {} (currently at {})",
                    self.ctx.name,
                    self.ctx.latest_version.as_deref().unwrap_or("0.0.0")
                ));
            }
        }

        let summary = ReleaseSummary {
            name: self.ctx.name.clone(),
            latest_version: self
                .ctx
                .latest_version
                .clone()
                .unwrap_or_else(|| "0.0.0".to_string()),
            version: self
                .ctx
                .version
                .clone()
                .unwrap_or_else(|| "0.0.0".to_string()),
            elapsed: started.elapsed(),
        };
        self.console.success(&summary.completion_line());
        Ok(summary)
    }

    /// The recorded outcome for a namespace's work on an event, if any
    pub fn outcome(&self, event: LifecycleEvent, namespace: &str) -> Option<PhaseOutcome> {
        self.outcomes
            .get(&(event, namespace.to_string()))
            .copied()
    }

    /// The run context (resolved name, versions, tag)
    pub fn context(&self) -> &RunContext {
        &self.ctx
    }

    fn run_event(&mut self, event: LifecycleEvent) -> Result<()> {
        // Before hooks are unconditional: global first, then each enabled
        // namespace in registration order
        self.run_hooks(HookPrefix::Before, event, None)?;
        let namespaces: Vec<String> = self
            .plugins
            .iter()
            .map(|plugin| plugin.namespace().to_string())
            .collect();
        for namespace in &namespaces {
            self.run_hooks(HookPrefix::Before, event, Some(namespace))?;
        }

        if event == LifecycleEvent::Bump {
            self.resolve_version()?;
        }

        for index in 0..self.plugins.len() {
            if !self.plugins[index].provides(event) {
                continue;
            }
            let namespace = self.plugins[index].namespace().to_string();

            if !self.plugins[index].step_enabled(event) {
                self.record(event, &namespace, PhaseOutcome::Skipped);
                self.console
                    .status(&format!("{}:{} skipped (disabled)", namespace, event));
                continue;
            }

            if event.confirmable() {
                // Releasing without the corresponding bump is invalid, so a
                // declined bump cancels the namespace's release as well
                if event == LifecycleEvent::Release
                    && self.gate.declined(&namespace, LifecycleEvent::Bump)
                {
                    self.record(event, &namespace, PhaseOutcome::Cancelled);
                    self.console.status(&format!(
                        "{}:release cancelled (bump was declined)",
                        namespace
                    ));
                    continue;
                }

                let message = self.plugins[index].confirm_message(event, &self.ctx);
                if !self
                    .gate
                    .confirm(self.prompter.as_ref(), &namespace, event, &message)?
                {
                    self.record(event, &namespace, PhaseOutcome::Cancelled);
                    self.console
                        .status(&format!("{}:{} cancelled", namespace, event));
                    continue;
                }
            }

            match plugins::execute(
                self.plugins[index].as_mut(),
                event,
                &mut self.ctx,
                &self.shell,
            ) {
                Ok(()) => {
                    self.record(event, &namespace, PhaseOutcome::Executed);
                    self.run_hooks(HookPrefix::After, event, Some(&namespace))?;
                }
                Err(e) => {
                    self.record(event, &namespace, PhaseOutcome::Failed);
                    self.report_completed();
                    return Err(ReleaseError::plugin(namespace, event.name(), e.to_string()));
                }
            }
        }

        self.run_hooks(HookPrefix::After, event, None)
    }

    fn resolve_version(&mut self) -> Result<()> {
        let mut resolved = None;
        for plugin in &self.plugins {
            let candidate = if self.config.ci {
                plugin.incremented_version_ci(&self.ctx)?
            } else {
                plugin.incremented_version(&self.ctx, self.prompter.as_ref())?
            };
            if candidate.is_some() {
                resolved = candidate;
                break;
            }
        }

        let version = resolved
            .ok_or_else(|| ReleaseError::version("no plugin resolved the next version"))?;
        self.ctx.version = Some(version);
        self.ctx.tag_name = Some(template::render(&self.config.tag_name, &self.ctx)?);
        Ok(())
    }

    fn run_hooks(
        &self,
        prefix: HookPrefix,
        event: LifecycleEvent,
        namespace: Option<&str>,
    ) -> Result<()> {
        for template in hooks::resolve(&self.config.hooks, prefix, event, namespace) {
            self.shell.exec_template(&template, &self.ctx)?;
        }
        Ok(())
    }

    fn record(&mut self, event: LifecycleEvent, namespace: &str, outcome: PhaseOutcome) {
        self.outcomes
            .insert((event, namespace.to_string()), outcome);
    }

    fn report_completed(&self) {
        let mut completed: Vec<String> = self
            .outcomes
            .iter()
            .filter(|(_, outcome)| **outcome == PhaseOutcome::Executed)
            .map(|((event, namespace), _)| format!("{}:{}", namespace, event))
            .collect();
        completed.sort();

        if !completed.is_empty() {
            self.console.warn(&format!(
                "phases completed before the failure: {}",
                completed.join(", ")
            ));
        }
    }
}
