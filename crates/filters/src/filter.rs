use std::collections::BTreeMap;

use crate::error::FilterError;
use crate::name::FilterName;

/// Decode parameters declared alongside a stream (`/DecodeParms`).
///
/// The bag is opaque to the codecs in this crate: they accept it so the
/// calling document model can hand every filter the same arguments, but they
/// do not read it.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct FilterParms {
    entries: BTreeMap<String, String>,
}

impl FilterParms {
    /// Creates an empty parameter bag.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces an entry, returning the bag for chaining.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Adds or replaces an entry, returning the previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.entries.insert(key.into(), value.into())
    }

    /// Looks up an entry.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the bag has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FilterParms {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

/// A named transform applied to stream content.
///
/// The document model picks the implementation from the stream's declared
/// [`FilterName`] and calls it through this trait.
pub trait Filter: Send + Sync {
    /// Declared name of this filter.
    fn name(&self) -> FilterName;

    /// Encodes raw stream content.
    fn encode(&self, data: &[u8]) -> Result<Vec<u8>, FilterError>;

    /// Decodes stored stream content.
    fn decode(&self, data: &[u8], parms: &FilterParms) -> Result<Vec<u8>, FilterError>;
}
