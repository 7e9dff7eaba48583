use crate::config::GitlabConfig;
use crate::context::RunContext;
use crate::error::{ReleaseError, Result};
use crate::hooks::lifecycle::LifecycleEvent;
use crate::plugins::ReleasePlugin;
use crate::shell::ShellExecutor;
use crate::template;

/// GitLab namespace: hosted release creation through the `glab` CLI
pub struct GitlabPlugin {
    release: bool,
    release_name: String,
}

impl GitlabPlugin {
    pub fn new(config: &GitlabConfig) -> Self {
        GitlabPlugin {
            release: config.release,
            release_name: config.release_name.clone(),
        }
    }
}

impl ReleasePlugin for GitlabPlugin {
    fn namespace(&self) -> &str {
        "gitlab"
    }

    fn provides(&self, event: LifecycleEvent) -> bool {
        matches!(event, LifecycleEvent::Release)
    }

    fn step_enabled(&self, event: LifecycleEvent) -> bool {
        match event {
            LifecycleEvent::Release => self.release,
            _ => true,
        }
    }

    fn confirm_message(&self, _event: LifecycleEvent, ctx: &RunContext) -> String {
        let name = template::render(&self.release_name, ctx)
            .unwrap_or_else(|_| self.release_name.clone());
        format!("Create a release on GitLab ({})?", name)
    }

    fn release(&mut self, ctx: &mut RunContext, shell: &ShellExecutor) -> Result<()> {
        let tag = ctx
            .tag_name
            .clone()
            .ok_or_else(|| ReleaseError::version("tag name not resolved before release"))?;
        let name = template::render(&self.release_name, ctx)?;

        shell.exec(&format!("glab release create {} --name \"{}\"", tag, name))?;
        Ok(())
    }
}
