#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `checksums` provides the Adler-32 checksum (RFC 1950 §8.2) that trails every
//! zlib frame produced by the `compress` crate. The checksum is exposed both as
//! a one-shot function, [`adler32`], and as an incremental state, [`Adler32`],
//! for callers that see their payload in pieces.
//!
//! # Invariants
//!
//! - Both sums are kept reduced modulo [`MOD_ADLER`] between calls, so the
//!   packed value is always a valid Adler-32 digest.
//! - Feeding a payload in any number of chunks yields the same value as
//!   feeding it in one call.
//! - The checksum of the empty input is `1`.
//!
//! # Examples
//!
//! ```
//! use checksums::{Adler32, adler32};
//!
//! assert_eq!(adler32(b"Wikipedia"), 0x11E6_0398);
//!
//! let mut state = Adler32::new();
//! state.update(b"Wiki");
//! state.update(b"pedia");
//! assert_eq!(state.value(), 0x11E6_0398);
//! ```

mod adler32;

pub use adler32::{Adler32, MOD_ADLER, NMAX, adler32};
