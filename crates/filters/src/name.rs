//! Declared stream filter names.

use core::fmt;
use core::str::FromStr;

use crate::error::FilterError;

/// Standard stream filters a document may declare for a stored stream.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum FilterName {
    /// zlib/DEFLATE (`/FlateDecode`, abbreviated `/Fl`).
    FlateDecode,
    /// LZW (`/LZWDecode`, `/LZW`).
    LzwDecode,
    /// Hexadecimal text (`/ASCIIHexDecode`, `/AHx`).
    AsciiHexDecode,
    /// Base-85 text (`/ASCII85Decode`, `/A85`).
    Ascii85Decode,
    /// Byte-oriented run-length (`/RunLengthDecode`, `/RL`).
    RunLengthDecode,
    /// CCITT fax (`/CCITTFaxDecode`, `/CCF`).
    CcittFaxDecode,
    /// JPEG baseline (`/DCTDecode`, `/DCT`).
    DctDecode,
    /// JBIG2 monochrome images (`/JBIG2Decode`).
    Jbig2Decode,
    /// JPEG 2000 (`/JPXDecode`).
    JpxDecode,
    /// Security handler crypt filter (`/Crypt`).
    Crypt,
}

impl FilterName {
    /// Every known filter name.
    pub const ALL: [Self; 10] = [
        Self::FlateDecode,
        Self::LzwDecode,
        Self::AsciiHexDecode,
        Self::Ascii85Decode,
        Self::RunLengthDecode,
        Self::CcittFaxDecode,
        Self::DctDecode,
        Self::Jbig2Decode,
        Self::JpxDecode,
        Self::Crypt,
    ];

    /// Full declared name, without the leading `/`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FlateDecode => "FlateDecode",
            Self::LzwDecode => "LZWDecode",
            Self::AsciiHexDecode => "ASCIIHexDecode",
            Self::Ascii85Decode => "ASCII85Decode",
            Self::RunLengthDecode => "RunLengthDecode",
            Self::CcittFaxDecode => "CCITTFaxDecode",
            Self::DctDecode => "DCTDecode",
            Self::Jbig2Decode => "JBIG2Decode",
            Self::JpxDecode => "JPXDecode",
            Self::Crypt => "Crypt",
        }
    }

    /// Abbreviation permitted in inline image dictionaries, if any.
    #[must_use]
    pub const fn abbreviation(self) -> Option<&'static str> {
        match self {
            Self::FlateDecode => Some("Fl"),
            Self::LzwDecode => Some("LZW"),
            Self::AsciiHexDecode => Some("AHx"),
            Self::Ascii85Decode => Some("A85"),
            Self::RunLengthDecode => Some("RL"),
            Self::CcittFaxDecode => Some("CCF"),
            Self::DctDecode => Some("DCT"),
            Self::Jbig2Decode | Self::JpxDecode | Self::Crypt => None,
        }
    }
}

impl fmt::Display for FilterName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterName {
    type Err = FilterError;

    /// Parses a declared name, with or without the leading `/`. Names are
    /// case-sensitive, as they are in the document.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        let name = name.strip_prefix('/').unwrap_or(name);
        Self::ALL
            .into_iter()
            .find(|filter| filter.as_str() == name || filter.abbreviation() == Some(name))
            .ok_or_else(|| FilterError::UnknownFilter(name.to_owned()))
    }
}
