//! Release plugins.
//!
//! Each plugin owns one namespace of the release (`version`, `git`, `github`,
//! `gitlab`, `npm`, or a user-defined name) and declares the lifecycle steps
//! it participates in. Capability is explicit: the orchestrator asks
//! [ReleasePlugin::provides] before invoking a step, never relying on
//! runtime method lookup.
//!
//! Plugins perform their side effects through the shell executor (so dry-run
//! and logging stay uniform) or, for read-only git state, through the
//! [Repository](crate::git::Repository) port.

pub mod git;
pub mod github;
pub mod gitlab;
pub mod npm;
pub mod version;

pub use git::GitPlugin;
pub use github::GithubPlugin;
pub use gitlab::GitlabPlugin;
pub use npm::NpmPlugin;
pub use version::VersionPlugin;

use std::str::FromStr;

use crate::config::Config;
use crate::context::RunContext;
use crate::error::Result;
use crate::git::Repository;
use crate::hooks::lifecycle::LifecycleEvent;
use crate::prompt::Prompter;
use crate::shell::ShellExecutor;

/// Contract every release plugin satisfies.
///
/// All step methods default to no-ops; a plugin implements the ones it
/// declares through [provides](Self::provides). An `Err` from any step is
/// treated as a failure of that (event, namespace) phase and aborts the run.
pub trait ReleasePlugin: Send + Sync {
    /// The namespace this plugin owns
    fn namespace(&self) -> &str;

    /// Whether this plugin declares work for the given lifecycle event
    fn provides(&self, event: LifecycleEvent) -> bool;

    /// Whether the feature flags leave this step enabled. A disabled step is
    /// skipped entirely (outcome `Skipped`), hooks included.
    fn step_enabled(&self, _event: LifecycleEvent) -> bool {
        true
    }

    /// Question shown at the confirmation gate for a confirmable step
    fn confirm_message(&self, event: LifecycleEvent, _ctx: &RunContext) -> String {
        format!("Run {} {}?", self.namespace(), event)
    }

    /// Resolve the next version interactively. The first plugin returning
    /// `Some` wins; plugins without an opinion return `None`.
    fn incremented_version(
        &self,
        _ctx: &RunContext,
        _prompter: &dyn Prompter,
    ) -> Result<Option<String>> {
        Ok(None)
    }

    /// Resolve the next version without prompting (non-interactive mode)
    fn incremented_version_ci(&self, _ctx: &RunContext) -> Result<Option<String>> {
        Ok(None)
    }

    fn init(&mut self, _ctx: &mut RunContext, _shell: &ShellExecutor) -> Result<()> {
        Ok(())
    }

    fn before_bump(&mut self, _ctx: &mut RunContext, _shell: &ShellExecutor) -> Result<()> {
        Ok(())
    }

    fn bump(&mut self, _ctx: &mut RunContext, _shell: &ShellExecutor) -> Result<()> {
        Ok(())
    }

    fn before_release(&mut self, _ctx: &mut RunContext, _shell: &ShellExecutor) -> Result<()> {
        Ok(())
    }

    fn release(&mut self, _ctx: &mut RunContext, _shell: &ShellExecutor) -> Result<()> {
        Ok(())
    }

    fn after_release(&mut self, _ctx: &mut RunContext, _shell: &ShellExecutor) -> Result<()> {
        Ok(())
    }
}

/// Invoke the plugin step mapped to a lifecycle event
pub fn execute(
    plugin: &mut dyn ReleasePlugin,
    event: LifecycleEvent,
    ctx: &mut RunContext,
    shell: &ShellExecutor,
) -> Result<()> {
    match event {
        LifecycleEvent::Init => plugin.init(ctx, shell),
        LifecycleEvent::BeforeBump => plugin.before_bump(ctx, shell),
        LifecycleEvent::Bump => plugin.bump(ctx, shell),
        LifecycleEvent::BeforeRelease => plugin.before_release(ctx, shell),
        LifecycleEvent::Release => plugin.release(ctx, shell),
        LifecycleEvent::AfterRelease => plugin.after_release(ctx, shell),
    }
}

/// Build the built-in plugin set in registration order:
/// version, git, github, gitlab, npm.
pub fn default_plugins(
    config: &Config,
    repository: Box<dyn Repository>,
) -> Result<Vec<Box<dyn ReleasePlugin>>> {
    let increment = version::Increment::from_str(&config.increment)?;

    Ok(vec![
        Box::new(VersionPlugin::new(increment)),
        Box::new(GitPlugin::new(repository, &config.git)),
        Box::new(GithubPlugin::new(&config.github)),
        Box::new(GitlabPlugin::new(&config.gitlab)),
        Box::new(NpmPlugin::new(&config.npm)),
    ])
}
