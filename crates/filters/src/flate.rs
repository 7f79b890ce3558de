//! The `FlateDecode` stream filter.

use compress::CompressionMode;
use compress::zlib::{DecodeOptions, ZlibCodec};

use crate::error::FilterError;
use crate::filter::{Filter, FilterParms};
use crate::name::FilterName;

/// zlib/DEFLATE stream filter.
///
/// Encoding uses the configured [`CompressionMode`]; decoding applies the
/// configured [`DecodeOptions`]. Decode parameters are accepted and ignored.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct FlateDecode {
    codec: ZlibCodec,
    mode: CompressionMode,
}

impl FlateDecode {
    /// Creates a filter with [`CompressionMode::Default`] and verifying decode options.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            codec: ZlibCodec::new(),
            mode: CompressionMode::Default,
        }
    }

    /// Returns a copy that encodes with `mode`.
    pub const fn with_mode(mut self, mode: CompressionMode) -> Self {
        self.mode = mode;
        self
    }

    /// Returns a copy that decodes with `options`.
    pub fn with_decode_options(mut self, options: DecodeOptions) -> Self {
        self.codec = self.codec.with_options(options);
        self
    }

    /// Mode used by [`Filter::encode`].
    pub const fn mode(&self) -> CompressionMode {
        self.mode
    }

    /// Encodes `data` with an explicit mode, overriding the configured one.
    pub fn encode_with_mode(
        &self,
        data: &[u8],
        mode: CompressionMode,
    ) -> Result<Vec<u8>, FilterError> {
        Ok(self.codec.encode(data, mode)?)
    }
}

impl Filter for FlateDecode {
    fn name(&self) -> FilterName {
        FilterName::FlateDecode
    }

    fn encode(&self, data: &[u8]) -> Result<Vec<u8>, FilterError> {
        self.encode_with_mode(data, self.mode)
    }

    fn decode(&self, data: &[u8], parms: &FilterParms) -> Result<Vec<u8>, FilterError> {
        if !parms.is_empty() {
            tracing::trace!(
                target: "flate::filter",
                entries = parms.len(),
                "ignoring decode parameters"
            );
        }
        Ok(self.codec.decode(data)?)
    }
}
