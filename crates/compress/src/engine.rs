//! Raw DEFLATE (RFC 1951) engine seam.
//!
//! The zlib framer never touches the DEFLATE bit stream itself; it calls a
//! [`DeflateEngine`]. [`Flate2Engine`] is the only implementation and wraps
//! [`flate2`], whose backend (miniz_oxide, zlib-rs or zlib-ng) is fixed at
//! build time through this crate's Cargo features.

use std::io::Write;

use flate2::{Compression, Decompress, FlushDecompress, Status, write::DeflateEncoder};

use crate::error::{Malformed, ZlibError};

/// Growth step for the inflate output buffer.
const INFLATE_CHUNK: usize = 32 * 1024;

/// Output of [`DeflateEngine::decompress`].
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Inflated {
    /// Decompressed bytes.
    pub data: Vec<u8>,
    /// Number of input bytes occupied by the DEFLATE stream, up to and
    /// including its final block. Anything after this offset is not DEFLATE data.
    pub consumed: usize,
}

/// Whole-buffer raw DEFLATE compressor and decompressor.
pub trait DeflateEngine {
    /// Short name of the backend, for diagnostics.
    fn name(&self) -> &'static str;

    /// Compresses `input` into a raw DEFLATE stream at the given effort.
    fn compress(&self, input: &[u8], effort: Compression) -> Result<Vec<u8>, ZlibError>;

    /// Inflates the raw DEFLATE stream at the start of `input`.
    ///
    /// Decoding stops at the end of the final block; trailing bytes are left
    /// untouched and reported through [`Inflated::consumed`]. A stream that is
    /// structurally invalid or ends before its final block is
    /// [`ZlibError::MalformedInput`].
    fn decompress(&self, input: &[u8]) -> Result<Inflated, ZlibError>;
}

/// [`DeflateEngine`] backed by `flate2`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Flate2Engine;

impl Flate2Engine {
    /// Name of the `flate2` backend compiled into this build.
    #[must_use]
    pub const fn backend() -> &'static str {
        if cfg!(feature = "zlib-ng") {
            "zlib-ng"
        } else if cfg!(feature = "zlib-rs") {
            "zlib-rs"
        } else {
            "miniz_oxide"
        }
    }
}

impl DeflateEngine for Flate2Engine {
    fn name(&self) -> &'static str {
        Self::backend()
    }

    fn compress(&self, input: &[u8], effort: Compression) -> Result<Vec<u8>, ZlibError> {
        let mut encoder = DeflateEncoder::new(Vec::with_capacity(input.len() / 2 + 64), effort);
        encoder.write_all(input)?;
        Ok(encoder.finish()?)
    }

    fn decompress(&self, input: &[u8]) -> Result<Inflated, ZlibError> {
        let mut inflater = Decompress::new(false);
        let mut output = Vec::with_capacity(input.len().saturating_mul(2).max(64));

        loop {
            if output.len() == output.capacity() {
                output.reserve(output.capacity().max(INFLATE_CHUNK));
            }

            let in_before = inflater.total_in();
            let out_before = inflater.total_out();
            let offset = in_before as usize;

            let status = inflater
                .decompress_vec(&input[offset..], &mut output, FlushDecompress::None)
                .map_err(|err| Malformed::CorruptDeflate(err.to_string()))?;

            match status {
                Status::StreamEnd => break,
                Status::Ok | Status::BufError => {
                    let stalled =
                        inflater.total_in() == in_before && inflater.total_out() == out_before;
                    // With spare output room and no progress the engine is starved of input.
                    if stalled && output.len() < output.capacity() {
                        return Err(Malformed::TruncatedDeflate.into());
                    }
                }
            }
        }

        let consumed = inflater.total_in() as usize;
        tracing::trace!(
            target: "flate::engine",
            backend = Self::backend(),
            consumed,
            produced = output.len(),
            "inflated deflate stream"
        );
        Ok(Inflated {
            data: output,
            consumed,
        })
    }
}
