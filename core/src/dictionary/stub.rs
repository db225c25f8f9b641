//! A data dictionary with no entries, for testing decoders without
//! dictionary assistance.

use super::{DataDictionary, DictionaryEntry};
use crate::header::Tag;

/// An attribute dictionary which misses on every lookup.
#[derive(Debug, Default, Clone, Copy)]
pub struct StubDataDictionary;

impl DataDictionary for StubDataDictionary {
    fn by_tag(&self, _tag: Tag) -> Option<&DictionaryEntry> {
        None
    }
}
