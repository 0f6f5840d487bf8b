use thiserror::Error;

#[derive(Error, Debug)]
pub enum BootstrapError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Connection error: {0}")]
    Connection(#[source] anyhow::Error),

    #[error("User '{user}' already exists on database '{database}'")]
    DuplicateUser { user: String, database: String },

    #[error("Command failed: {operation} -- {source}")]
    Command {
        operation: String,
        #[source]
        source: anyhow::Error,
    },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BootstrapError {
    pub fn command(operation: impl Into<String>, source: impl Into<anyhow::Error>) -> Self {
        Self::Command {
            operation: operation.into(),
            source: source.into(),
        }
    }
}

pub type BootstrapResult<T> = Result<T, BootstrapError>;
