//! Error types shared by the zlib framer and the DEFLATE engine.

use std::io;

/// Coarse classification of a codec failure.
///
/// Callers that only need to decide how to react (report a usage error,
/// reject a corrupt stream, skip an unsupported feature) match on this
/// instead of the detailed error.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ErrorKind {
    /// A caller-supplied argument was not recognised.
    InvalidArgument,
    /// The input is not a well-formed zlib frame.
    MalformedInput,
    /// The request needs a feature this codec intentionally does not provide.
    NotImplemented,
    /// The underlying engine reported an I/O failure.
    Io,
}

/// Reason a zlib frame was rejected while decoding.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum Malformed {
    /// The frame is shorter than the fixed parts of the format.
    #[error("frame of {len} bytes is shorter than the {required}-byte minimum")]
    TooShort {
        /// Length of the rejected input.
        len: usize,
        /// Minimum length implied by the header.
        required: usize,
    },
    /// The header failed validation while strict header checking was enabled.
    #[error("invalid zlib header {cmf:#04x} {flg:#04x}")]
    InvalidHeader {
        /// Compression method and flags byte.
        cmf: u8,
        /// Flags byte.
        flg: u8,
    },
    /// The DEFLATE engine rejected the bit stream.
    #[error("corrupt deflate stream: {0}")]
    CorruptDeflate(String),
    /// The input ended before the final DEFLATE block was complete.
    #[error("deflate stream ended before its final block")]
    TruncatedDeflate,
    /// Fewer than four bytes follow the DEFLATE stream.
    #[error("adler-32 trailer missing: {available} bytes follow the deflate stream")]
    MissingTrailer {
        /// Bytes available after the DEFLATE stream.
        available: usize,
    },
    /// The trailer does not match the checksum of the decoded payload.
    #[error("adler-32 mismatch: trailer {expected:#010x}, payload {actual:#010x}")]
    ChecksumMismatch {
        /// Checksum stored in the trailer.
        expected: u32,
        /// Checksum of the inflated payload.
        actual: u32,
    },
}

/// Errors produced by [`ZlibCodec`](crate::zlib::ZlibCodec) and the DEFLATE engine.
#[derive(Debug, thiserror::Error)]
pub enum ZlibError {
    /// A caller-supplied value such as a compression mode name was not recognised.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// The input is not a well-formed zlib frame.
    #[error("malformed zlib input: {0}")]
    MalformedInput(#[from] Malformed),
    /// The requested feature is intentionally unsupported.
    #[error("not implemented: {0}")]
    NotImplemented(&'static str),
    /// The engine failed while writing its output buffer.
    #[error("deflate engine i/o failure: {0}")]
    Io(#[from] io::Error),
}

impl ZlibError {
    /// Creates an [`InvalidArgument`](Self::InvalidArgument) error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Returns the coarse classification of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidArgument(_) => ErrorKind::InvalidArgument,
            Self::MalformedInput(_) => ErrorKind::MalformedInput,
            Self::NotImplemented(_) => ErrorKind::NotImplemented,
            Self::Io(_) => ErrorKind::Io,
        }
    }

    /// Returns the rejection reason when this is a [`MalformedInput`](Self::MalformedInput) error.
    #[must_use]
    pub const fn malformed(&self) -> Option<&Malformed> {
        match self {
            Self::MalformedInput(reason) => Some(reason),
            _ => None,
        }
    }
}
