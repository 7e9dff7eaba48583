use thiserror::Error;

/// Unified error type for release-cycle operations
#[derive(Error, Debug)]
pub enum ReleaseError {
    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown template variable '{variable}' in \"{template}\"")]
    UnknownVariable { variable: String, template: String },

    #[error("Command exited with code {code}: {command}")]
    Shell { command: String, code: i32 },

    #[error("Plugin '{namespace}' failed during {event}: {message}")]
    Plugin {
        namespace: String,
        event: String,
        message: String,
    },

    #[error("Version error: {0}")]
    Version(String),

    #[error("Repository error: {0}")]
    Repository(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in release-cycle
pub type Result<T> = std::result::Result<T, ReleaseError>;

impl ReleaseError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        ReleaseError::Config(msg.into())
    }

    /// Create a version error with context
    pub fn version(msg: impl Into<String>) -> Self {
        ReleaseError::Version(msg.into())
    }

    /// Create a repository error with context
    pub fn repository(msg: impl Into<String>) -> Self {
        ReleaseError::Repository(msg.into())
    }

    /// Create a shell-command error for a non-zero exit
    pub fn shell(command: impl Into<String>, code: i32) -> Self {
        ReleaseError::Shell {
            command: command.into(),
            code,
        }
    }

    /// Create a plugin failure error identifying the namespace and event
    pub fn plugin(
        namespace: impl Into<String>,
        event: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        ReleaseError::Plugin {
            namespace: namespace.into(),
            event: event.into(),
            message: message.into(),
        }
    }
}
