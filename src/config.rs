use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::error::{ReleaseError, Result};
use crate::hooks::lifecycle::{HookPrefix, LifecycleEvent};
use crate::plugins::version::Increment;
use crate::template;

/// One hook entry: a single command template or a list run in declaration order.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(untagged)]
pub enum HookCommand {
    Single(String),
    Many(Vec<String>),
}

impl HookCommand {
    /// The command templates in execution order
    pub fn commands(&self) -> Vec<String> {
        match self {
            HookCommand::Single(command) => vec![command.clone()],
            HookCommand::Many(commands) => commands.clone(),
        }
    }
}

/// Hook key to command template mapping, as configured under `[hooks]`
pub type HookMap = HashMap<String, HookCommand>;

/// Represents the complete configuration for release-cycle.
///
/// Contains the hook map, the per-namespace plugin settings, and run behavior
/// (increment, tag format, interactivity).
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub project: ProjectConfig,

    /// Version increment applied when not chosen interactively: patch, minor, or major
    #[serde(default = "default_increment")]
    pub increment: String,

    /// Tag name template, rendered once the new version is resolved
    #[serde(default = "default_tag_name")]
    pub tag_name: String,

    /// Non-interactive mode: no prompts, the default answer is used
    #[serde(default)]
    pub ci: bool,

    /// Answer assumed for confirmation gates in non-interactive mode
    #[serde(default = "default_true")]
    pub default_answer: bool,

    #[serde(default)]
    pub hooks: HookMap,

    #[serde(default)]
    pub git: GitConfig,

    #[serde(default)]
    pub github: GithubConfig,

    #[serde(default)]
    pub gitlab: GitlabConfig,

    #[serde(default)]
    pub npm: NpmConfig,
}

fn default_increment() -> String {
    "patch".to_string()
}

fn default_tag_name() -> String {
    "{version}".to_string()
}

fn default_true() -> bool {
    true
}

fn default_commit_message() -> String {
    "Release {version}".to_string()
}

fn default_release_name() -> String {
    "Release {version}".to_string()
}

/// Project identity overrides
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct ProjectConfig {
    /// Project name; when absent it is resolved from the git remote or directory
    #[serde(default)]
    pub name: Option<String>,
}

/// Settings for the git namespace
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct GitConfig {
    /// Gate for the git release step (tag and push)
    #[serde(default = "default_true")]
    pub push: bool,

    /// Refuse to start when the working tree has uncommitted changes
    #[serde(default = "default_true")]
    pub require_clean_working_dir: bool,

    /// Commit message template for the bump commit
    #[serde(default = "default_commit_message")]
    pub commit_message: String,
}

impl Default for GitConfig {
    fn default() -> Self {
        GitConfig {
            push: true,
            require_clean_working_dir: true,
            commit_message: default_commit_message(),
        }
    }
}

/// Settings for the github namespace
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct GithubConfig {
    /// Gate for GitHub release creation
    #[serde(default)]
    pub release: bool,

    /// Release title template
    #[serde(default = "default_release_name")]
    pub release_name: String,
}

impl Default for GithubConfig {
    fn default() -> Self {
        GithubConfig {
            release: false,
            release_name: default_release_name(),
        }
    }
}

/// Settings for the gitlab namespace
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct GitlabConfig {
    /// Gate for GitLab release creation
    #[serde(default)]
    pub release: bool,

    /// Release title template
    #[serde(default = "default_release_name")]
    pub release_name: String,
}

impl Default for GitlabConfig {
    fn default() -> Self {
        GitlabConfig {
            release: false,
            release_name: default_release_name(),
        }
    }
}

/// Settings for the npm namespace
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct NpmConfig {
    /// Gate for the npm release step (publish)
    #[serde(default = "default_true")]
    pub publish: bool,
}

impl Default for NpmConfig {
    fn default() -> Self {
        NpmConfig { publish: true }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            project: ProjectConfig::default(),
            increment: default_increment(),
            tag_name: default_tag_name(),
            ci: false,
            default_answer: true,
            hooks: HashMap::new(),
            git: GitConfig::default(),
            github: GithubConfig::default(),
            gitlab: GitlabConfig::default(),
            npm: NpmConfig::default(),
        }
    }
}

impl Config {
    /// Validate the configuration before any phase runs.
    ///
    /// Checks hook key syntax (`prefix:event` or `prefix:namespace:event` with
    /// a known prefix and event), every command template against the
    /// substitution vocabulary, and the configured increment. A malformed hook
    /// or unknown variable aborts here, never mid-run.
    pub fn validate(&self) -> Result<()> {
        for (key, command) in &self.hooks {
            let parts: Vec<&str> = key.split(':').collect();
            let (prefix, event) = match parts.as_slice() {
                [prefix, event] => (*prefix, *event),
                [prefix, _namespace, event] => (*prefix, *event),
                _ => {
                    return Err(ReleaseError::config(format!(
                        "invalid hook key '{}': expected 'prefix:event' or 'prefix:namespace:event'",
                        key
                    )))
                }
            };
            HookPrefix::from_str(prefix)?;
            LifecycleEvent::from_str(event)?;

            for template in command.commands() {
                template::validate(template.strip_prefix('-').unwrap_or(&template))?;
            }
        }

        template::validate(&self.tag_name)?;
        template::validate(&self.git.commit_message)?;
        template::validate(&self.github.release_name)?;
        template::validate(&self.gitlab.release_name)?;
        Increment::from_str(&self.increment)?;

        Ok(())
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `releasecycle.toml` in current directory
/// 3. `~/.config/.releasecycle.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new("./releasecycle.toml").exists() {
        fs::read_to_string("./releasecycle.toml")?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(".releasecycle.toml");
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    let config: Config =
        toml::from_str(&config_str).map_err(|e| ReleaseError::config(e.to_string()))?;
    Ok(config)
}
