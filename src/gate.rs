//! Confirmation gate.
//!
//! Wraps confirmable phase work with an operator decision. A decline is not
//! an error: the caller records the phase as cancelled and moves on.
//! Decisions are remembered per (namespace, event) for the duration of the
//! run so dependency rules (a declined bump cancels the namespace's release)
//! can be consulted without re-prompting.

use std::collections::HashMap;

use crate::error::Result;
use crate::hooks::lifecycle::LifecycleEvent;
use crate::prompt::Prompter;

/// Gate point where an operator decision determines whether a phase proceeds
#[derive(Debug)]
pub struct ConfirmationGate {
    interactive: bool,
    default_answer: bool,
    decisions: HashMap<(String, LifecycleEvent), bool>,
}

impl ConfirmationGate {
    /// `interactive = false` answers every gate with `default_answer`
    /// without showing a prompt.
    pub fn new(interactive: bool, default_answer: bool) -> Self {
        ConfirmationGate {
            interactive,
            default_answer,
            decisions: HashMap::new(),
        }
    }

    /// Ask (or recall) the decision for a namespace's work on an event.
    ///
    /// The first call per (namespace, event) prompts; later calls return the
    /// remembered answer.
    pub fn confirm(
        &mut self,
        prompter: &dyn Prompter,
        namespace: &str,
        event: LifecycleEvent,
        message: &str,
    ) -> Result<bool> {
        let key = (namespace.to_string(), event);
        if let Some(&decision) = self.decisions.get(&key) {
            return Ok(decision);
        }

        let accepted = if self.interactive {
            prompter.confirm(message, true)?
        } else {
            self.default_answer
        };

        self.decisions.insert(key, accepted);
        Ok(accepted)
    }

    /// Whether the namespace's work on an event was explicitly declined
    pub fn declined(&self, namespace: &str, event: LifecycleEvent) -> bool {
        self.decisions
            .get(&(namespace.to_string(), event))
            .map(|accepted| !accepted)
            .unwrap_or(false)
    }
}
