#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logging` maps the command-line verbosity of the `pdf-flate` tools onto a
//! [`tracing`](https://docs.rs/tracing) subscriber. Library crates only emit
//! events through the `tracing` macros with `flate::*` targets; the binary
//! decides where they go by calling [`init_tracing`] once at start-up.
//!
//! # Design
//!
//! - [`LogConfig`] captures the verbosity ladder ([`Verbosity`]) and output
//!   styling.
//! - [`init_tracing`] installs a `tracing-subscriber` registry with an
//!   [`EnvFilter`](tracing_subscriber::EnvFilter) and a stderr `fmt` layer.
//!   `RUST_LOG` overrides the verbosity-derived level when set.
//!
//! # Examples
//!
//! ```
//! use logging::{LogConfig, Verbosity};
//!
//! let config = LogConfig::from_verbose_level(2);
//! assert_eq!(config.verbosity(), Verbosity::Debug);
//! assert_eq!(config.directive(), "debug");
//! ```

mod config;
mod tracing_bridge;

pub use config::{FILTER_ENV, LogConfig, Verbosity};
pub use tracing_bridge::{env_filter, init_tracing};
