use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TreeListError {
    /// A sort or filter referenced a column the row does not carry.
    #[error("row has no column `{column}`")]
    MissingColumn { column: String },

    #[error("failed to read data file {path}: {source}")]
    ReadData {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse node data: {0}")]
    ParseData(#[from] serde_json::Error),

    #[error("failed to watch data file: {0}")]
    Watch(#[from] notify::Error),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("logging setup failed: {0}")]
    Logging(String),
}

pub type Result<T> = std::result::Result<T, TreeListError>;
