use chrono::Local;

/// Per-run state threaded through every component.
///
/// Holds the values resolved as the run progresses (project name and latest
/// version during `init`, the new version and tag name during `bump`) and acts
/// as the substitution source for command templates. Owned exclusively by the
/// [TaskRunner](crate::runner::TaskRunner); no ambient global state.
#[derive(Debug, Clone)]
pub struct RunContext {
    /// Project name, resolved during `init` (remote URL, directory, or config)
    pub name: String,
    /// The version the project is currently at, resolved during `init`
    pub latest_version: Option<String>,
    /// The version being released, resolved at the start of the bump phase
    pub version: Option<String>,
    /// Rendered tag name for the new version
    pub tag_name: Option<String>,
    /// Run date, YYYY-MM-DD
    pub date: String,
    /// Subject line of the HEAD commit, if available
    pub commit_subject: Option<String>,
}

impl RunContext {
    /// Create a fresh context. `name` is the configured project name, if any;
    /// plugins may fill it in during `init` when empty.
    pub fn new(name: Option<String>) -> Self {
        RunContext {
            name: name.unwrap_or_default(),
            latest_version: None,
            version: None,
            tag_name: None,
            date: Local::now().format("%Y-%m-%d").to_string(),
            commit_subject: None,
        }
    }

    /// Look up a template variable by name.
    ///
    /// Values that are not resolved yet fall back to the closest known value:
    /// `version` falls back to `latestVersion`, `latestVersion` to `0.0.0`,
    /// `tagName` to `version`, `commitSubject` to the empty string. Returns
    /// `None` for names outside the vocabulary.
    pub fn template_value(&self, name: &str) -> Option<String> {
        match name {
            "name" => Some(self.name.clone()),
            "latestVersion" => Some(self.latest_version_or_default()),
            "version" => Some(
                self.version
                    .clone()
                    .unwrap_or_else(|| self.latest_version_or_default()),
            ),
            "tagName" => Some(self.tag_name.clone().unwrap_or_else(|| {
                self.version
                    .clone()
                    .unwrap_or_else(|| self.latest_version_or_default())
            })),
            "date" => Some(self.date.clone()),
            "commitSubject" => Some(self.commit_subject.clone().unwrap_or_default()),
            _ => None,
        }
    }

    fn latest_version_or_default(&self) -> String {
        self.latest_version
            .clone()
            .unwrap_or_else(|| "0.0.0".to_string())
    }
}
