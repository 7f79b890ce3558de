//! # Overview
//!
//! zlib framing (RFC 1950) over a raw DEFLATE engine. A frame is laid out as
//!
//! | Offset | Size | Field |
//! |---|---|---|
//! | 0 | 1 | CMF: method (8) and window size |
//! | 1 | 1 | FLG: level hint, preset-dictionary bit, check bits |
//! | 2 | 4 | DICTID, only when FLG bit 5 is set |
//! | 2 or 6 | variable | raw DEFLATE stream |
//! | end-4 | 4 | big-endian Adler-32 of the uncompressed data |
//!
//! [`ZlibCodec::encode`] always writes the [`ZlibHeader::DEFAULT`] header.
//! [`ZlibCodec::decode`] accepts headers from other writers: unless
//! [`DecodeOptions::strict_header`] is set it only looks at the
//! preset-dictionary bit to find where the DEFLATE stream begins.
//!
//! # Examples
//!
//! ```
//! use compress::zlib::{CompressionMode, decode, encode};
//!
//! let frame = encode(b"BT /F1 12 Tf (Hello) Tj ET", CompressionMode::Default).unwrap();
//! assert_eq!(&frame[..2], &[0x78, 0x9C]);
//! assert_eq!(decode(&frame).unwrap(), b"BT /F1 12 Tf (Hello) Tj ET");
//! ```

mod header;
#[cfg(test)]
mod tests;

pub use header::{
    DICTIONARY_ID_LEN, FLAG_PRESET_DICTIONARY, HEADER_LEN, METHOD_DEFLATE, TRAILER_LEN, ZlibHeader,
};
pub use crate::mode::CompressionMode;

use checksums::adler32;

use crate::engine::{DeflateEngine, Flate2Engine};
use crate::error::{Malformed, ZlibError};

/// How [`ZlibCodec::decode`] treats the Adler-32 trailer.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum ChecksumPolicy {
    /// Require a trailer that matches the decoded payload.
    #[default]
    Verify,
    /// Accept the payload whatever follows the DEFLATE stream.
    Ignore,
}

/// Decoder configuration.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct DecodeOptions {
    /// Trailer handling.
    pub checksum: ChecksumPolicy,
    /// Reject headers that are not DEFLATE with valid check bits.
    pub strict_header: bool,
}

impl DecodeOptions {
    /// Returns a copy with the given checksum policy.
    pub const fn with_checksum(mut self, checksum: ChecksumPolicy) -> Self {
        self.checksum = checksum;
        self
    }

    /// Returns a copy with strict header checking toggled.
    pub const fn with_strict_header(mut self, strict: bool) -> Self {
        self.strict_header = strict;
        self
    }
}

/// zlib encoder and decoder over a [`DeflateEngine`].
///
/// The codec holds only configuration, so one instance can serve any number
/// of concurrent calls.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ZlibCodec<E = Flate2Engine> {
    engine: E,
    options: DecodeOptions,
}

impl ZlibCodec {
    /// Creates a codec over the default `flate2` engine.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            engine: Flate2Engine,
            options: DecodeOptions {
                checksum: ChecksumPolicy::Verify,
                strict_header: false,
            },
        }
    }
}

impl<E: DeflateEngine> ZlibCodec<E> {
    /// Creates a codec over a specific engine.
    pub fn with_engine(engine: E) -> Self {
        Self {
            engine,
            options: DecodeOptions::default(),
        }
    }

    /// Replaces the decoder configuration.
    pub fn with_options(mut self, options: DecodeOptions) -> Self {
        self.options = options;
        self
    }

    /// Active decoder configuration.
    pub const fn options(&self) -> DecodeOptions {
        self.options
    }

    /// Underlying DEFLATE engine.
    pub const fn engine(&self) -> &E {
        &self.engine
    }

    /// Encodes `data` into a complete zlib frame.
    pub fn encode(&self, data: &[u8], mode: CompressionMode) -> Result<Vec<u8>, ZlibError> {
        let body = self.engine.compress(data, mode.effort())?;

        let mut frame = Vec::with_capacity(HEADER_LEN + body.len() + TRAILER_LEN);
        frame.extend_from_slice(&ZlibHeader::DEFAULT.to_bytes());
        frame.extend_from_slice(&body);
        frame.extend_from_slice(&adler32(data).to_be_bytes());

        tracing::debug!(
            target: "flate::encode",
            mode = %mode,
            engine = self.engine.name(),
            input = data.len(),
            output = frame.len(),
            "encoded zlib frame"
        );
        Ok(frame)
    }

    /// Encoding against a preset dictionary is not supported.
    ///
    /// Always returns [`ZlibError::NotImplemented`]; frames carrying a DICTID
    /// can still be decoded.
    pub fn encode_with_dictionary(
        &self,
        data: &[u8],
        mode: CompressionMode,
        dictionary: &[u8],
    ) -> Result<Vec<u8>, ZlibError> {
        tracing::debug!(
            target: "flate::encode",
            mode = %mode,
            input = data.len(),
            dictionary = dictionary.len(),
            "preset dictionary encoding requested"
        );
        Err(ZlibError::NotImplemented("preset dictionary encoding"))
    }

    /// Decodes a complete zlib frame and returns the uncompressed bytes.
    pub fn decode(&self, frame: &[u8]) -> Result<Vec<u8>, ZlibError> {
        let header = ZlibHeader::parse(frame)?;

        if !header.is_valid() {
            let [cmf, flg] = header.to_bytes();
            if self.options.strict_header {
                return Err(Malformed::InvalidHeader { cmf, flg }.into());
            }
            tracing::debug!(
                target: "flate::decode",
                cmf,
                flg,
                "accepting non-conforming zlib header"
            );
        }

        let required = header.min_frame_len();
        if frame.len() < required {
            return Err(Malformed::TooShort {
                len: frame.len(),
                required,
            }
            .into());
        }

        if let Some(id) = header.dictionary_id(frame) {
            tracing::debug!(
                target: "flate::decode",
                dictionary_id = id,
                "skipping preset dictionary id"
            );
        }

        let payload = &frame[header.payload_offset()..];
        let inflated = self.engine.decompress(payload)?;
        let trailer = &payload[inflated.consumed..];

        if self.options.checksum == ChecksumPolicy::Verify {
            verify_trailer(trailer, &inflated.data)?;
        }

        tracing::debug!(
            target: "flate::decode",
            engine = self.engine.name(),
            input = frame.len(),
            output = inflated.data.len(),
            "decoded zlib frame"
        );
        Ok(inflated.data)
    }
}

fn verify_trailer(trailer: &[u8], payload: &[u8]) -> Result<(), ZlibError> {
    let Some(stored) = trailer.first_chunk::<TRAILER_LEN>() else {
        return Err(Malformed::MissingTrailer {
            available: trailer.len(),
        }
        .into());
    };

    let expected = u32::from_be_bytes(*stored);
    let actual = adler32(payload);

    if expected == actual {
        Ok(())
    } else {
        Err(Malformed::ChecksumMismatch { expected, actual }.into())
    }
}

/// Encodes `data` with the default codec.
pub fn encode(data: &[u8], mode: CompressionMode) -> Result<Vec<u8>, ZlibError> {
    ZlibCodec::new().encode(data, mode)
}

/// Decodes `frame` with the default codec, verifying the Adler-32 trailer.
pub fn decode(frame: &[u8]) -> Result<Vec<u8>, ZlibError> {
    ZlibCodec::new().decode(frame)
}
