//! The two-byte zlib header (CMF, FLG) and the optional DICTID that follows it.

use crate::error::{Malformed, ZlibError};

/// Compression method value for DEFLATE.
pub const METHOD_DEFLATE: u8 = 8;

/// FLG bit announcing a preset dictionary.
pub const FLAG_PRESET_DICTIONARY: u8 = 0x20;

/// Length of the CMF and FLG bytes.
pub const HEADER_LEN: usize = 2;

/// Length of the DICTID field present when [`FLAG_PRESET_DICTIONARY`] is set.
pub const DICTIONARY_ID_LEN: usize = 4;

/// Length of the big-endian Adler-32 trailer.
pub const TRAILER_LEN: usize = 4;

/// Parsed CMF/FLG pair.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct ZlibHeader {
    cmf: u8,
    flg: u8,
}

impl ZlibHeader {
    /// Header written by the encoder: DEFLATE, 32 KiB window, no dictionary,
    /// default level hint. `0x789C` is a multiple of 31.
    pub const DEFAULT: Self = Self {
        cmf: 0x78,
        flg: 0x9C,
    };

    /// Wraps raw CMF and FLG bytes without validating them.
    #[must_use]
    pub const fn from_bytes(cmf: u8, flg: u8) -> Self {
        Self { cmf, flg }
    }

    /// Reads the header from the first two bytes of `frame`.
    pub fn parse(frame: &[u8]) -> Result<Self, ZlibError> {
        match frame {
            [cmf, flg, ..] => Ok(Self::from_bytes(*cmf, *flg)),
            _ => Err(Malformed::TooShort {
                len: frame.len(),
                required: HEADER_LEN + TRAILER_LEN,
            }
            .into()),
        }
    }

    /// Returns the header as it appears on the wire.
    #[must_use]
    pub const fn to_bytes(self) -> [u8; 2] {
        [self.cmf, self.flg]
    }

    /// Compression method (CM, low nibble of CMF).
    #[must_use]
    pub const fn method(self) -> u8 {
        self.cmf & 0x0F
    }

    /// Base-two logarithm of the LZ77 window size (CINFO + 8).
    #[must_use]
    pub const fn window_bits(self) -> u8 {
        (self.cmf >> 4) + 8
    }

    /// Compression level hint (FLEVEL, top two bits of FLG).
    #[must_use]
    pub const fn level_hint(self) -> u8 {
        self.flg >> 6
    }

    /// Whether a DICTID follows the header.
    #[must_use]
    pub const fn has_preset_dictionary(self) -> bool {
        self.flg & FLAG_PRESET_DICTIONARY != 0
    }

    /// Whether `(CMF << 8) | FLG` is a multiple of 31.
    #[must_use]
    pub const fn check_bits_valid(self) -> bool {
        u16::from_be_bytes([self.cmf, self.flg]) % 31 == 0
    }

    /// Whether the header is one a conforming zlib decoder accepts: DEFLATE,
    /// a window of at most 32 KiB and valid check bits.
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.method() == METHOD_DEFLATE && self.window_bits() <= 15 && self.check_bits_valid()
    }

    /// Offset of the first DEFLATE byte within the frame.
    #[must_use]
    pub const fn payload_offset(self) -> usize {
        if self.has_preset_dictionary() {
            HEADER_LEN + DICTIONARY_ID_LEN
        } else {
            HEADER_LEN
        }
    }

    /// Smallest frame length this header permits: header, optional DICTID and trailer.
    #[must_use]
    pub const fn min_frame_len(self) -> usize {
        self.payload_offset() + TRAILER_LEN
    }

    /// Reads the DICTID that follows the header, if the header announces one
    /// and `frame` is long enough to hold it.
    #[must_use]
    pub fn dictionary_id(self, frame: &[u8]) -> Option<u32> {
        if !self.has_preset_dictionary() {
            return None;
        }
        let bytes = frame.get(HEADER_LEN..HEADER_LEN + DICTIONARY_ID_LEN)?;
        let bytes: [u8; DICTIONARY_ID_LEN] = bytes.try_into().ok()?;
        Some(u32::from_be_bytes(bytes))
    }
}

impl Default for ZlibHeader {
    fn default() -> Self {
        Self::DEFAULT
    }
}
