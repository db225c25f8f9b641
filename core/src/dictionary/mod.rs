//! The attribute dictionary types.
//!
//! A data dictionary maps an attribute tag to its value representation and
//! its human readable name. It exists for two purposes: supplying a VR for
//! elements read under Implicit VR, and supplying the attribute name used
//! when emitting metadata entries. A lookup miss is never an error; the
//! caller proceeds with whatever information was read from the wire.

pub mod standard;
pub mod stub;

pub use self::standard::StandardDataDictionary;
pub use self::stub::StubDataDictionary;

use crate::header::{Tag, VR};

/// A dictionary row: the attribute's tag, its value representation,
/// and its human readable name.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct DictionaryEntry {
    /// The attribute tag.
    pub tag: Tag,
    /// The attribute's value representation.
    pub vr: VR,
    /// The human readable attribute name.
    pub description: &'static str,
}

/// Type trait for an attribute dictionary with exact tag lookup.
pub trait DataDictionary {
    /// Fetch the entry for the given tag, if present.
    fn by_tag(&self, tag: Tag) -> Option<&DictionaryEntry>;
}

impl<T: ?Sized> DataDictionary for &T
where
    T: DataDictionary,
{
    fn by_tag(&self, tag: Tag) -> Option<&DictionaryEntry> {
        (**self).by_tag(tag)
    }
}
