use crate::config::NpmConfig;
use crate::context::RunContext;
use crate::error::{ReleaseError, Result};
use crate::hooks::lifecycle::LifecycleEvent;
use crate::plugins::ReleasePlugin;
use crate::shell::ShellExecutor;

/// npm namespace: package version rewrite and registry publish
pub struct NpmPlugin {
    publish: bool,
}

impl NpmPlugin {
    pub fn new(config: &NpmConfig) -> Self {
        NpmPlugin {
            publish: config.publish,
        }
    }
}

impl ReleasePlugin for NpmPlugin {
    fn namespace(&self) -> &str {
        "npm"
    }

    fn provides(&self, event: LifecycleEvent) -> bool {
        matches!(event, LifecycleEvent::Bump | LifecycleEvent::Release)
    }

    fn step_enabled(&self, event: LifecycleEvent) -> bool {
        match event {
            LifecycleEvent::Release => self.publish,
            _ => true,
        }
    }

    fn confirm_message(&self, event: LifecycleEvent, ctx: &RunContext) -> String {
        match event {
            LifecycleEvent::Bump => format!(
                "Bump package version to {}?",
                ctx.template_value("version").unwrap_or_default()
            ),
            LifecycleEvent::Release => format!("Publish {} to npm?", ctx.name),
            _ => format!("Run npm {}?", event),
        }
    }

    fn bump(&mut self, ctx: &mut RunContext, shell: &ShellExecutor) -> Result<()> {
        let version = ctx
            .version
            .clone()
            .ok_or_else(|| ReleaseError::version("version not resolved before bump"))?;

        shell.exec(&format!(
            "npm version {} --no-git-tag-version --allow-same-version",
            version
        ))?;
        Ok(())
    }

    fn release(&mut self, _ctx: &mut RunContext, shell: &ShellExecutor) -> Result<()> {
        shell.exec("npm publish")?;
        Ok(())
    }
}
