use std::fmt;
use std::str::FromStr;

use semver::Version;

use crate::context::RunContext;
use crate::error::{ReleaseError, Result};
use crate::hooks::lifecycle::LifecycleEvent;
use crate::plugins::ReleasePlugin;
use crate::prompt::Prompter;
use crate::shell::ShellExecutor;

/// Which semver component to increment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Increment {
    Patch,
    Minor,
    Major,
}

impl Increment {
    const ALL: [Increment; 3] = [Increment::Patch, Increment::Minor, Increment::Major];

    pub fn name(&self) -> &'static str {
        match self {
            Increment::Patch => "patch",
            Increment::Minor => "minor",
            Increment::Major => "major",
        }
    }

    /// Apply the increment, resetting the lower components
    pub fn apply(&self, version: &Version) -> Version {
        match self {
            Increment::Patch => Version::new(version.major, version.minor, version.patch + 1),
            Increment::Minor => Version::new(version.major, version.minor + 1, 0),
            Increment::Major => Version::new(version.major + 1, 0, 0),
        }
    }
}

impl fmt::Display for Increment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Increment {
    type Err = ReleaseError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "patch" => Ok(Increment::Patch),
            "minor" => Ok(Increment::Minor),
            "major" => Ok(Increment::Major),
            _ => Err(ReleaseError::config(format!(
                "invalid increment '{}': expected patch, minor, or major",
                s
            ))),
        }
    }
}

/// Resolves the version being released.
///
/// Defaults the latest version to `0.0.0` when no other plugin resolved one
/// during `init`, so a fresh project's first patch release is `0.0.1`.
pub struct VersionPlugin {
    increment: Increment,
}

impl VersionPlugin {
    pub fn new(increment: Increment) -> Self {
        VersionPlugin { increment }
    }

    fn latest(&self, ctx: &RunContext) -> Result<Version> {
        let latest = ctx.latest_version.as_deref().unwrap_or("0.0.0");
        Version::parse(latest.trim_start_matches('v')).map_err(|e| {
            ReleaseError::version(format!("cannot parse latest version '{}': {}", latest, e))
        })
    }
}

impl ReleasePlugin for VersionPlugin {
    fn namespace(&self) -> &str {
        "version"
    }

    fn provides(&self, event: LifecycleEvent) -> bool {
        matches!(event, LifecycleEvent::Init)
    }

    fn init(&mut self, ctx: &mut RunContext, _shell: &ShellExecutor) -> Result<()> {
        if ctx.latest_version.is_none() {
            ctx.latest_version = Some("0.0.0".to_string());
        }
        Ok(())
    }

    fn incremented_version(
        &self,
        ctx: &RunContext,
        prompter: &dyn Prompter,
    ) -> Result<Option<String>> {
        let latest = self.latest(ctx)?;

        let options: Vec<String> = Increment::ALL
            .iter()
            .map(|increment| format!("{} ({})", increment, increment.apply(&latest)))
            .collect();
        let default = Increment::ALL
            .iter()
            .position(|increment| *increment == self.increment)
            .unwrap_or(0);

        let chosen = prompter.select("Select increment", &options, default)?;
        let increment = Increment::ALL.get(chosen).copied().unwrap_or(self.increment);

        Ok(Some(increment.apply(&latest).to_string()))
    }

    fn incremented_version_ci(&self, ctx: &RunContext) -> Result<Option<String>> {
        let latest = self.latest(ctx)?;
        Ok(Some(self.increment.apply(&latest).to_string()))
    }
}
