//! Hook key resolution.
//!
//! Maps a (prefix, event, namespace) triple to the ordered list of command
//! templates configured for it. Pure functions over the hook map; template
//! substitution happens later, in the shell executor.
//!
//! Ordering is fixed and user-observable: the global `{prefix}:{event}` hook
//! runs before the scoped `{prefix}:{namespace}:{event}` hook for `before`,
//! and the scoped hook runs before the global one for `after` (a nested-scope
//! model, with the global hook marking event completion).

use crate::config::HookMap;
use crate::hooks::lifecycle::{HookPrefix, LifecycleEvent};

/// Build the hook key for a prefix, event, and optional namespace.
pub fn key(prefix: HookPrefix, event: LifecycleEvent, namespace: Option<&str>) -> String {
    match namespace {
        Some(ns) => format!("{}:{}:{}", prefix.name(), ns, event.name()),
        None => format!("{}:{}", prefix.name(), event.name()),
    }
}

/// Resolve the command templates for a hook point, in execution order.
///
/// Missing keys contribute nothing; a key mapped to a list contributes its
/// commands in declaration order.
pub fn resolve(
    hooks: &HookMap,
    prefix: HookPrefix,
    event: LifecycleEvent,
    namespace: Option<&str>,
) -> Vec<String> {
    hooks
        .get(&key(prefix, event, namespace))
        .map(|command| command.commands())
        .unwrap_or_default()
}
