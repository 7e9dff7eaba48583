use crate::config::GitConfig;
use crate::context::RunContext;
use crate::error::{ReleaseError, Result};
use crate::git::{project_name_from_url, Repository};
use crate::hooks::lifecycle::LifecycleEvent;
use crate::plugins::ReleasePlugin;
use crate::shell::ShellExecutor;
use crate::template;

/// Git namespace: repository introspection, the bump commit, and tag/push.
///
/// Reads repository state through the [Repository] port during `init`;
/// mutations go through the shell executor so they obey dry-run.
pub struct GitPlugin {
    repository: Box<dyn Repository>,
    push: bool,
    require_clean: bool,
    commit_message: String,
}

impl GitPlugin {
    pub fn new(repository: Box<dyn Repository>, config: &GitConfig) -> Self {
        GitPlugin {
            repository,
            push: config.push,
            require_clean: config.require_clean_working_dir,
            commit_message: config.commit_message.clone(),
        }
    }

    fn fallback_project_name() -> Option<String> {
        let cwd = std::env::current_dir().ok()?;
        cwd.file_name()
            .map(|name| name.to_string_lossy().to_string())
    }
}

impl ReleasePlugin for GitPlugin {
    fn namespace(&self) -> &str {
        "git"
    }

    fn provides(&self, event: LifecycleEvent) -> bool {
        matches!(
            event,
            LifecycleEvent::Init | LifecycleEvent::Bump | LifecycleEvent::Release
        )
    }

    fn step_enabled(&self, event: LifecycleEvent) -> bool {
        match event {
            LifecycleEvent::Release => self.push,
            _ => true,
        }
    }

    fn confirm_message(&self, event: LifecycleEvent, ctx: &RunContext) -> String {
        match event {
            LifecycleEvent::Bump => {
                let message = template::render(&self.commit_message, ctx)
                    .unwrap_or_else(|_| self.commit_message.clone());
                format!("Commit ({})?", message)
            }
            LifecycleEvent::Release => {
                let tag = ctx.template_value("tagName").unwrap_or_default();
                format!("Tag ({}) and push?", tag)
            }
            _ => format!("Run git {}?", event),
        }
    }

    fn init(&mut self, ctx: &mut RunContext, _shell: &ShellExecutor) -> Result<()> {
        if self.require_clean && !self.repository.is_clean()? {
            return Err(ReleaseError::repository(
                "working directory not clean: commit or stash changes first",
            ));
        }

        if ctx.name.is_empty() {
            ctx.name = self
                .repository
                .remote_url()?
                .as_deref()
                .and_then(project_name_from_url)
                .or_else(Self::fallback_project_name)
                .unwrap_or_default();
        }

        if let Some(tag) = self.repository.latest_tag()? {
            ctx.latest_version = Some(tag.trim_start_matches('v').to_string());
        }

        ctx.commit_subject = self.repository.head_subject()?;
        Ok(())
    }

    fn bump(&mut self, ctx: &mut RunContext, shell: &ShellExecutor) -> Result<()> {
        let message = template::render(&self.commit_message, ctx)?;
        shell.exec(&format!("git commit --all --message \"{}\"", message))?;
        Ok(())
    }

    fn release(&mut self, ctx: &mut RunContext, shell: &ShellExecutor) -> Result<()> {
        let tag = ctx
            .tag_name
            .clone()
            .ok_or_else(|| ReleaseError::version("tag name not resolved before release"))?;
        let annotation = template::render("Release {version}", ctx)?;

        shell.exec(&format!(
            "git tag --annotate {} --message \"{}\"",
            tag, annotation
        ))?;
        shell.exec("git push --follow-tags origin")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::git::MockRepository;
    use crate::shell::RecordingRunner;
    use crate::ui::Console;

    fn shell_with(runner: RecordingRunner) -> ShellExecutor {
        ShellExecutor::new(Box::new(runner), Console::default(), false)
    }

    fn plugin_with(repository: MockRepository) -> GitPlugin {
        GitPlugin::new(Box::new(repository), &GitConfig::default())
    }

    #[test]
    fn test_init_resolves_name_and_latest_version() {
        let repository = MockRepository::new()
            .with_remote_url("git@github.com:acme/widget.git")
            .with_latest_tag("v1.2.3")
            .with_head_subject("fix: align header");
        let mut plugin = plugin_with(repository);
        let mut ctx = RunContext::new(None);

        plugin.init(&mut ctx, &shell_with(RecordingRunner::new())).unwrap();

        assert_eq!(ctx.name, "widget");
        assert_eq!(ctx.latest_version, Some("1.2.3".to_string()));
        assert_eq!(ctx.commit_subject, Some("fix: align header".to_string()));
    }

    #[test]
    fn test_init_keeps_configured_name() {
        let repository = MockRepository::new().with_remote_url("git@github.com:acme/widget.git");
        let mut plugin = plugin_with(repository);
        let mut ctx = RunContext::new(Some("custom-name".to_string()));

        plugin.init(&mut ctx, &shell_with(RecordingRunner::new())).unwrap();
        assert_eq!(ctx.name, "custom-name");
    }

    #[test]
    fn test_init_rejects_dirty_working_dir() {
        let repository = MockRepository::new().with_dirty_working_dir();
        let mut plugin = plugin_with(repository);
        let mut ctx = RunContext::new(None);

        let result = plugin.init(&mut ctx, &shell_with(RecordingRunner::new()));
        assert!(matches!(result, Err(ReleaseError::Repository(_))));
    }

    #[test]
    fn test_init_accepts_dirty_working_dir_when_allowed() {
        let repository = MockRepository::new().with_dirty_working_dir();
        let config = GitConfig {
            require_clean_working_dir: false,
            ..GitConfig::default()
        };
        let mut plugin = GitPlugin::new(Box::new(repository), &config);
        let mut ctx = RunContext::new(None);

        assert!(plugin.init(&mut ctx, &shell_with(RecordingRunner::new())).is_ok());
    }

    #[test]
    fn test_bump_commits_with_rendered_message() {
        let runner = RecordingRunner::new();
        let mut plugin = plugin_with(MockRepository::new());
        let mut ctx = RunContext::new(Some("widget".to_string()));
        ctx.version = Some("1.1.0".to_string());

        plugin.bump(&mut ctx, &shell_with(runner.clone())).unwrap();

        assert_eq!(
            runner.commands(),
            vec!["git commit --all --message \"Release 1.1.0\""]
        );
    }

    #[test]
    fn test_release_tags_then_pushes() {
        let runner = RecordingRunner::new();
        let mut plugin = plugin_with(MockRepository::new());
        let mut ctx = RunContext::new(Some("widget".to_string()));
        ctx.version = Some("1.1.0".to_string());
        ctx.tag_name = Some("1.1.0".to_string());

        plugin.release(&mut ctx, &shell_with(runner.clone())).unwrap();

        let commands = runner.commands();
        assert_eq!(commands.len(), 2);
        assert!(commands[0].starts_with("git tag --annotate 1.1.0"));
        assert_eq!(commands[1], "git push --follow-tags origin");
    }

    #[test]
    fn test_release_disabled_by_push_flag() {
        let config = GitConfig {
            push: false,
            ..GitConfig::default()
        };
        let plugin = GitPlugin::new(Box::new(MockRepository::new()), &config);

        assert!(!plugin.step_enabled(LifecycleEvent::Release));
        assert!(plugin.step_enabled(LifecycleEvent::Bump));
    }
}
