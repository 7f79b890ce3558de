use std::io;
use std::path::PathBuf;

use compress::{ErrorKind, ZlibError};
use filters::FilterError;

/// Exit code for usage errors and rejected arguments.
pub const EXIT_USAGE: i32 = 1;
/// Exit code for input that is not a well-formed stream.
pub const EXIT_MALFORMED: i32 = 2;
/// Exit code for filters or features without an implementation.
pub const EXIT_NOT_IMPLEMENTED: i32 = 3;
/// Exit code for read and write failures.
pub const EXIT_IO: i32 = 4;

/// Failures surfaced by [`run`](crate::run).
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    InvalidArgument(String),
    #[error(transparent)]
    Filter(#[from] FilterError),
    #[error("{}: {source}", display_path(.path.as_ref()))]
    Io {
        path: Option<PathBuf>,
        #[source]
        source: io::Error,
    },
}

fn display_path(path: Option<&PathBuf>) -> String {
    path.map_or_else(|| "<stdio>".to_owned(), |path| path.display().to_string())
}

impl From<ZlibError> for CliError {
    fn from(err: ZlibError) -> Self {
        Self::Filter(FilterError::from(err))
    }
}

impl CliError {
    pub(crate) fn io(path: Option<&PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.cloned(),
            source,
        }
    }

    /// Process exit code for this failure.
    pub(crate) const fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidArgument(_) => EXIT_USAGE,
            Self::Filter(err) => match err.kind() {
                ErrorKind::InvalidArgument => EXIT_USAGE,
                ErrorKind::MalformedInput => EXIT_MALFORMED,
                ErrorKind::NotImplemented => EXIT_NOT_IMPLEMENTED,
                ErrorKind::Io => EXIT_IO,
            },
            Self::Io { .. } => EXIT_IO,
        }
    }
}
