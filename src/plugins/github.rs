use crate::config::GithubConfig;
use crate::context::RunContext;
use crate::error::{ReleaseError, Result};
use crate::hooks::lifecycle::LifecycleEvent;
use crate::plugins::ReleasePlugin;
use crate::shell::ShellExecutor;
use crate::template;

/// GitHub namespace: hosted release creation through the `gh` CLI
pub struct GithubPlugin {
    release: bool,
    release_name: String,
}

impl GithubPlugin {
    pub fn new(config: &GithubConfig) -> Self {
        GithubPlugin {
            release: config.release,
            release_name: config.release_name.clone(),
        }
    }
}

impl ReleasePlugin for GithubPlugin {
    fn namespace(&self) -> &str {
        "github"
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
        format!("Create a release on GitHub ({})?", name)
    }

    fn release(&mut self, ctx: &mut RunContext, shell: &ShellExecutor) -> Result<()> {
        let tag = ctx
            .tag_name
            .clone()
            .ok_or_else(|| ReleaseError::version("tag name not resolved before release"))?;
        let name = template::render(&self.release_name, ctx)?;

        shell.exec(&format!("gh release create {} --title \"{}\"", tag, name))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::RecordingRunner;
    use crate::ui::Console;

    fn enabled_plugin() -> GithubPlugin {
        GithubPlugin::new(&GithubConfig {
            release: true,
            release_name: "Release {version}".to_string(),
        })
    }

    #[test]
    fn test_release_creates_named_release() {
        let runner = RecordingRunner::new();
        let shell = ShellExecutor::new(Box::new(runner.clone()), Console::default(), false);
        let mut plugin = enabled_plugin();
        let mut ctx = RunContext::new(Some("widget".to_string()));
        ctx.version = Some("1.1.0".to_string());
        ctx.tag_name = Some("1.1.0".to_string());

        plugin.release(&mut ctx, &shell).unwrap();

        assert_eq!(
            runner.commands(),
            vec!["gh release create 1.1.0 --title \"Release 1.1.0\""]
        );
    }

    #[test]
    fn test_release_flag_gates_step() {
        let plugin = GithubPlugin::new(&GithubConfig::default());
        assert!(!plugin.step_enabled(LifecycleEvent::Release));
        assert!(enabled_plugin().step_enabled(LifecycleEvent::Release));
    }

    #[test]
    fn test_release_requires_resolved_tag() {
        let runner = RecordingRunner::new();
        let shell = ShellExecutor::new(Box::new(runner), Console::default(), false);
        let mut plugin = enabled_plugin();
        let mut ctx = RunContext::new(None);

        assert!(plugin.release(&mut ctx, &shell).is_err());
    }
}
