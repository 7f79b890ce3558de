//! crates/logging/src/config.rs
//! Verbosity configuration for the tracing subscriber.

use tracing::level_filters::LevelFilter;

/// Environment variable consulted for explicit filter directives.
pub const FILTER_ENV: &str = "RUST_LOG";

/// Logging configuration derived from the command line.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct LogConfig {
    level: Verbosity,
    ansi: bool,
}

/// Verbosity ladder selected by repeated `-v` flags.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Ord, PartialOrd)]
pub enum Verbosity {
    /// Errors only.
    Quiet,
    /// Warnings and errors.
    #[default]
    Normal,
    /// Adds per-stream summaries.
    Info,
    /// Adds frame-level diagnostics.
    Debug,
    /// Everything, including engine internals.
    Trace,
}

impl Verbosity {
    /// Maps a `-v` count onto the ladder, saturating at [`Verbosity::Trace`].
    pub const fn from_count(count: u8) -> Self {
        match count {
            0 => Self::Normal,
            1 => Self::Info,
            2 => Self::Debug,
            _ => Self::Trace,
        }
    }

    /// Most verbose level recorded at this verbosity.
    pub const fn level_filter(self) -> LevelFilter {
        match self {
            Self::Quiet => LevelFilter::ERROR,
            Self::Normal => LevelFilter::WARN,
            Self::Info => LevelFilter::INFO,
            Self::Debug => LevelFilter::DEBUG,
            Self::Trace => LevelFilter::TRACE,
        }
    }
}

impl LogConfig {
    /// Create a configuration from a verbose level (number of `-v` flags).
    pub const fn from_verbose_level(level: u8) -> Self {
        Self {
            level: Verbosity::from_count(level),
            ansi: false,
        }
    }

    /// Configuration that records errors only.
    pub const fn quiet() -> Self {
        Self {
            level: Verbosity::Quiet,
            ansi: false,
        }
    }

    /// Enables or disables ANSI colouring of the formatted output.
    pub const fn with_ansi(mut self, ansi: bool) -> Self {
        self.ansi = ansi;
        self
    }

    /// Selected verbosity.
    pub const fn verbosity(&self) -> Verbosity {
        self.level
    }

    /// Whether formatted output uses ANSI colours.
    pub const fn ansi(&self) -> bool {
        self.ansi
    }

    /// Default filter directive used when [`FILTER_ENV`] is unset.
    pub fn directive(&self) -> String {
        self.level.level_filter().to_string().to_ascii_lowercase()
    }
}
