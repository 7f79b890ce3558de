use compress::{ErrorKind, ZlibError};

use crate::name::FilterName;

/// Errors produced while resolving or running a stream filter.
#[derive(Debug, thiserror::Error)]
pub enum FilterError {
    /// The codec behind the filter failed.
    #[error(transparent)]
    Codec(#[from] ZlibError),
    /// The declared filter name is not a known stream filter.
    #[error("unknown stream filter '{0}'")]
    UnknownFilter(String),
    /// The filter is known but has no implementation in this build.
    #[error("stream filter {0} is not implemented")]
    Unsupported(FilterName),
}

impl FilterError {
    /// Returns the coarse classification of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Codec(err) => err.kind(),
            Self::UnknownFilter(_) => ErrorKind::InvalidArgument,
            Self::Unsupported(_) => ErrorKind::NotImplemented,
        }
    }
}
