use std::fmt;
use std::str::FromStr;

use crate::error::ReleaseError;

/// Hook position relative to the phase it surrounds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookPrefix {
    Before,
    After,
}

impl HookPrefix {
    /// Get the prefix as it appears in hook keys
    pub fn name(&self) -> &'static str {
        match self {
            HookPrefix::Before => "before",
            HookPrefix::After => "after",
        }
    }
}

impl FromStr for HookPrefix {
    type Err = ReleaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "before" => Ok(HookPrefix::Before),
            "after" => Ok(HookPrefix::After),
            _ => Err(ReleaseError::config(format!(
                "invalid hook prefix '{}': expected 'before' or 'after'",
                s
            ))),
        }
    }
}

/// One named phase in the fixed release sequence.
///
/// Events run in the order of [LifecycleEvent::SEQUENCE]; no two events
/// interleave and no event is skipped as a whole. The string forms are the
/// camelCase names used in hook keys (`"before:init"`, `"after:git:bump"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LifecycleEvent {
    Init,
    BeforeBump,
    Bump,
    BeforeRelease,
    Release,
    AfterRelease,
}

impl LifecycleEvent {
    /// The fixed, total order of lifecycle events
    pub const SEQUENCE: [LifecycleEvent; 6] = [
        LifecycleEvent::Init,
        LifecycleEvent::BeforeBump,
        LifecycleEvent::Bump,
        LifecycleEvent::BeforeRelease,
        LifecycleEvent::Release,
        LifecycleEvent::AfterRelease,
    ];

    /// Get the event name as it appears in hook keys
    pub fn name(&self) -> &'static str {
        match self {
            LifecycleEvent::Init => "init",
            LifecycleEvent::BeforeBump => "beforeBump",
            LifecycleEvent::Bump => "bump",
            LifecycleEvent::BeforeRelease => "beforeRelease",
            LifecycleEvent::Release => "release",
            LifecycleEvent::AfterRelease => "afterRelease",
        }
    }

    /// Whether plugin work for this event is gated by operator confirmation.
    ///
    /// Only `bump` and `release` carry confirmable side effects; `init`
    /// resolves state and the remaining events are hook-only for the
    /// built-in plugins.
    pub fn confirmable(&self) -> bool {
        matches!(self, LifecycleEvent::Bump | LifecycleEvent::Release)
    }
}

impl fmt::Display for LifecycleEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for LifecycleEvent {
    type Err = ReleaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "init" => Ok(LifecycleEvent::Init),
            "beforeBump" => Ok(LifecycleEvent::BeforeBump),
            "bump" => Ok(LifecycleEvent::Bump),
            "beforeRelease" => Ok(LifecycleEvent::BeforeRelease),
            "release" => Ok(LifecycleEvent::Release),
            "afterRelease" => Ok(LifecycleEvent::AfterRelease),
            _ => Err(ReleaseError::config(format!(
                "invalid lifecycle event '{}': expected one of init, beforeBump, bump, beforeRelease, release, afterRelease",
                s
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_order() {
        assert_eq!(LifecycleEvent::SEQUENCE[0], LifecycleEvent::Init);
        assert_eq!(LifecycleEvent::SEQUENCE[5], LifecycleEvent::AfterRelease);
        assert_eq!(LifecycleEvent::SEQUENCE.len(), 6);
    }

    #[test]
    fn test_event_names() {
        assert_eq!(LifecycleEvent::Init.name(), "init");
        assert_eq!(LifecycleEvent::BeforeBump.name(), "beforeBump");
        assert_eq!(LifecycleEvent::AfterRelease.name(), "afterRelease");
    }

    #[test]
    fn test_event_from_str() {
        assert_eq!(
            "bump".parse::<LifecycleEvent>().unwrap(),
            LifecycleEvent::Bump
        );
        assert_eq!(
            "beforeRelease".parse::<LifecycleEvent>().unwrap(),
            LifecycleEvent::BeforeRelease
        );
        assert!("prePublish".parse::<LifecycleEvent>().is_err());
    }

    #[test]
    fn test_confirmable_events() {
        assert!(LifecycleEvent::Bump.confirmable());
        assert!(LifecycleEvent::Release.confirmable());
        assert!(!LifecycleEvent::Init.confirmable());
        assert!(!LifecycleEvent::AfterRelease.confirmable());
    }

    #[test]
    fn test_prefix_from_str() {
        assert_eq!("before".parse::<HookPrefix>().unwrap(), HookPrefix::Before);
        assert_eq!("after".parse::<HookPrefix>().unwrap(), HookPrefix::After);
        assert!("around".parse::<HookPrefix>().is_err());
    }
}
