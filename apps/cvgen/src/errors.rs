use std::path::PathBuf;

use thiserror::Error;

use crate::records::category::Category;

/// Error type for a generation run.
/// Every variant is fatal: the run aborts and no output file is replaced.
#[derive(Debug, Error)]
pub enum CvError {
    #[error("File not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("Failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml_ng::Error,
    },

    #[error("Malformed data in {}: {reason}", path.display())]
    Malformed { path: PathBuf, reason: String },

    #[error("Missing field '{field}' in {category} record ({})", path.display())]
    MissingField {
        category: Category,
        field: &'static str,
        path: PathBuf,
    },

    #[error("Field '{field}' in {category} record must be {expected} ({})", path.display())]
    InvalidField {
        category: Category,
        field: &'static str,
        expected: &'static str,
        path: PathBuf,
    },

    #[error("No {category} records found in {}", path.display())]
    EmptyCollection { category: Category, path: PathBuf },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl CvError {
    /// Maps a read failure to `FileNotFound` when the path is missing, `Io` otherwise.
    pub fn from_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            CvError::FileNotFound { path }
        } else {
            CvError::Io { path, source }
        }
    }
}
