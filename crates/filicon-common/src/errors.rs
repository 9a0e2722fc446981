use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    #[error("failed to read icon theme {path}: {source}")]
    ReadFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse icon theme {path}: {message}")]
    ParseFailure { path: PathBuf, message: String },

    #[error("theme watch error: {0}")]
    WatchError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum StyleError {
    #[error("stylesheet sink error: {0}")]
    SinkError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum FiliconError {
    #[error(transparent)]
    Theme(#[from] ThemeError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Style(#[from] StyleError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}
