#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `filters` is the contract between a document model and the codecs that
//! transform its stored streams. Each stream declares a filter by name; the
//! document model resolves that name to a [`Filter`] and calls
//! [`Filter::encode`] or [`Filter::decode`] on the stream bytes.
//!
//! # Design
//!
//! - [`Filter`] is an object-safe trait so heterogeneous filters can be held
//!   as `Box<dyn Filter>` and chosen at run time.
//! - [`FilterName`] enumerates the standard stream filter names, including the
//!   abbreviations used by inline images.
//! - [`FlateDecode`] implements the trait over the zlib codec from the
//!   `compress` crate. It is the only filter with an implementation; the other
//!   names resolve to [`FilterError::Unsupported`].
//! - [`FilterParms`] carries `/DecodeParms` entries through unchanged.
//!
//! # Examples
//!
//! ```
//! use filters::{FilterParms, filter_for_name};
//!
//! # fn main() -> Result<(), filters::FilterError> {
//! let filter = filter_for_name("/FlateDecode")?;
//! let stored = filter.encode(b"stream content")?;
//! assert_eq!(filter.decode(&stored, &FilterParms::new())?, b"stream content");
//!
//! assert!(filter_for_name("LZWDecode").is_err());
//! # Ok(())
//! # }
//! ```

mod error;
mod filter;
mod flate;
mod name;

pub use error::FilterError;
pub use filter::{Filter, FilterParms};
pub use flate::FlateDecode;
pub use name::FilterName;

/// Returns the filter implementation for a declared filter.
pub fn filter_for(name: FilterName) -> Result<Box<dyn Filter>, FilterError> {
    match name {
        FilterName::FlateDecode => Ok(Box::new(FlateDecode::new())),
        FilterName::LzwDecode
        | FilterName::AsciiHexDecode
        | FilterName::Ascii85Decode
        | FilterName::RunLengthDecode
        | FilterName::CcittFaxDecode
        | FilterName::DctDecode
        | FilterName::Jbig2Decode
        | FilterName::JpxDecode
        | FilterName::Crypt => {
            tracing::debug!(target: "flate::filter", filter = %name, "no implementation");
            Err(FilterError::Unsupported(name))
        }
    }
}

/// Parses a declared filter name and returns its implementation.
pub fn filter_for_name(name: &str) -> Result<Box<dyn Filter>, FilterError> {
    filter_for(name.parse()?)
}
