use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PatternError {
    /// The factory was asked for a report kind outside its closed set.
    #[error("Unknown report type: '{0}'")]
    UnknownReportType(String),

    #[error("Failed to write output: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to render JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to read config {}: {source}", .path.display())]
    ConfigRead { path: PathBuf, source: io::Error },

    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

impl PatternError {
    pub fn unknown_report_type(kind: impl Into<String>) -> Self {
        Self::UnknownReportType(kind.into())
    }

    pub fn config_read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::ConfigRead {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, PatternError>;
