use std::path::PathBuf;

/// Failures the driver reports to the user.
#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    #[error("cannot read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{count} illegal token(s) found")]
    IllegalTokens { count: usize },

    #[error("{0}")]
    Usage(String),
}

impl DriverError {
    pub(crate) fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        DriverError::Read {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn usage(msg: impl Into<String>) -> Self {
        DriverError::Usage(msg.into())
    }
}
