#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `compress` implements the zlib compressed-data format (RFC 1950) used by
//! `FlateDecode` document streams. The crate owns the framing (header, optional
//! dictionary id, Adler-32 trailer) and delegates the DEFLATE bit stream to an
//! external engine.
//!
//! # Design
//!
//! - [`engine`] defines the [`DeflateEngine`](engine::DeflateEngine) seam and its
//!   [`flate2`](https://docs.rs/flate2) implementation. The `flate2` backend is
//!   chosen at build time with the `zlib-ng` and `zlib-rs` features; without
//!   either, the pure-Rust miniz_oxide backend is used.
//! - [`zlib`] builds and parses frames through [`ZlibCodec`](zlib::ZlibCodec).
//! - [`CompressionMode`] maps the three encoder modes onto engine effort.
//!
//! # Invariants
//!
//! - Encoded frames start with `0x78 0x9C` and end with the big-endian
//!   Adler-32 of the uncompressed input, whatever the mode.
//! - Decoding either returns the whole payload or an error; partial output is
//!   never surfaced.
//! - No state is shared between calls.
//!
//! # Errors
//!
//! Every fallible operation returns [`ZlibError`]. [`ZlibError::kind`]
//! classifies failures as invalid arguments, malformed input, unsupported
//! features or engine I/O failures.
//!
//! # Examples
//!
//! ```
//! use compress::CompressionMode;
//! use compress::zlib::{ChecksumPolicy, DecodeOptions, ZlibCodec};
//!
//! # fn main() -> Result<(), compress::ZlibError> {
//! let codec = ZlibCodec::new();
//! let frame = codec.encode(b"0 0 m 100 100 l S", CompressionMode::BestSpeed)?;
//! assert_eq!(codec.decode(&frame)?, b"0 0 m 100 100 l S");
//!
//! // Streams from writers that emit a bad trailer can still be read.
//! let lenient = codec.with_options(DecodeOptions::default().with_checksum(ChecksumPolicy::Ignore));
//! let mut damaged = frame.clone();
//! let last = damaged.len() - 1;
//! damaged[last] ^= 1;
//! assert!(codec.decode(&damaged).is_err());
//! assert_eq!(lenient.decode(&damaged)?, b"0 0 m 100 100 l S");
//! # Ok(())
//! # }
//! ```

pub mod engine;
mod error;
mod mode;
pub mod zlib;

pub use error::{ErrorKind, Malformed, ZlibError};
pub use mode::CompressionMode;
