use std::path::PathBuf;

use thiserror::Error;

use hackmap_cfg::ConvertError;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// A file could not be opened or created
    #[error("{}: {source}", path.display())]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Loading or conversion failed
    #[error("{0}")]
    Convert(#[from] ConvertError),
}

impl CliError {
    pub(crate) fn file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::File {
            path: path.into(),
            source,
        }
    }
}
