//! Compression modes accepted by the zlib encoder.

use core::fmt;
use core::str::FromStr;

use flate2::Compression;

use crate::error::ZlibError;

/// Effort selected for the DEFLATE engine when encoding a stream.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum CompressionMode {
    /// Standard mode. Maps to the high-effort setting, like
    /// [`BestCompression`](Self::BestCompression).
    #[default]
    Default,
    /// Favour the smallest output.
    BestCompression,
    /// Favour encoding speed over output size.
    BestSpeed,
}

impl CompressionMode {
    /// All modes, in declaration order.
    pub const ALL: [Self; 3] = [Self::Default, Self::BestCompression, Self::BestSpeed];

    /// Canonical name used in diagnostics and on the command line.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::BestCompression => "best-compression",
            Self::BestSpeed => "best-speed",
        }
    }

    /// Engine effort for this mode.
    #[must_use]
    pub fn effort(self) -> Compression {
        match self {
            Self::Default | Self::BestCompression => Compression::best(),
            Self::BestSpeed => Compression::fast(),
        }
    }

    /// Parses a zlib-style numeric level code.
    ///
    /// `-1` selects [`Default`](Self::Default), `9` selects
    /// [`BestCompression`](Self::BestCompression) and `1` selects
    /// [`BestSpeed`](Self::BestSpeed). Every other code is rejected.
    pub fn from_code(code: i32) -> Result<Self, ZlibError> {
        match code {
            -1 => Ok(Self::Default),
            9 => Ok(Self::BestCompression),
            1 => Ok(Self::BestSpeed),
            other => Err(ZlibError::invalid_argument(format!(
                "unrecognised compression mode code {other}"
            ))),
        }
    }

    /// Returns the zlib-style numeric code for this mode.
    #[must_use]
    pub const fn code(self) -> i32 {
        match self {
            Self::Default => -1,
            Self::BestCompression => 9,
            Self::BestSpeed => 1,
        }
    }
}

impl fmt::Display for CompressionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CompressionMode {
    type Err = ZlibError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "default" => Ok(Self::Default),
            "best-compression" | "best" => Ok(Self::BestCompression),
            "best-speed" | "fast" => Ok(Self::BestSpeed),
            other => Err(ZlibError::invalid_argument(format!(
                "unrecognised compression mode '{other}'"
            ))),
        }
    }
}

impl TryFrom<i32> for CompressionMode {
    type Error = ZlibError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        Self::from_code(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn default_and_best_compression_share_high_effort() {
        assert_eq!(CompressionMode::Default.effort().level(), 9);
        assert_eq!(CompressionMode::BestCompression.effort().level(), 9);
        assert_eq!(CompressionMode::BestSpeed.effort().level(), 1);
    }

    #[test]
    fn parsing_accepts_names_and_aliases() {
        assert_eq!(
            "default".parse::<CompressionMode>().unwrap(),
            CompressionMode::Default
        );
        assert_eq!(
            " Best ".parse::<CompressionMode>().unwrap(),
            CompressionMode::BestCompression
        );
        assert_eq!(
            "BEST-SPEED".parse::<CompressionMode>().unwrap(),
            CompressionMode::BestSpeed
        );
        assert_eq!(
            "fast".parse::<CompressionMode>().unwrap(),
            CompressionMode::BestSpeed
        );
    }

    #[test]
    fn names_round_trip_through_display() {
        for mode in CompressionMode::ALL {
            assert_eq!(mode.to_string().parse::<CompressionMode>().unwrap(), mode);
        }
    }

    #[test]
    fn parsing_rejects_unknown_names() {
        let err = "brotli"
            .parse::<CompressionMode>()
            .expect_err("brotli is not a mode");
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert!(err.to_string().contains("brotli"));
    }

    #[test]
    fn numeric_codes_round_trip() {
        for mode in CompressionMode::ALL {
            assert_eq!(CompressionMode::try_from(mode.code()).unwrap(), mode);
        }
    }

    #[test]
    fn numeric_codes_outside_the_set_are_rejected() {
        for code in [0, 2, 6, 10, -2, i32::MAX] {
            let err = CompressionMode::from_code(code).expect_err("code must be rejected");
            assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        }
    }
}
