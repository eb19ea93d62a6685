use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CheckError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid file pattern: {0}")]
    Pattern(String),

    /// A path matched by the pattern could not be inspected (permissions, broken link)
    #[error("failed to inspect {}: {source}", path.display())]
    Glob {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid expected version: {0}")]
    InvalidVersion(String),
}

impl From<glob::PatternError> for CheckError {
    fn from(err: glob::PatternError) -> Self {
        CheckError::Pattern(err.to_string())
    }
}

impl From<glob::GlobError> for CheckError {
    fn from(err: glob::GlobError) -> Self {
        let path = err.path().to_path_buf();
        CheckError::Glob {
            path,
            source: err.into_error(),
        }
    }
}
