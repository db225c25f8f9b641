//! This crate contains the vocabulary types shared by the `dicomdec` family
//! of crates: DICOM attribute tags, value representations, element lengths
//! and headers, plus the built-in attribute dictionary used to resolve
//! value representations and human readable attribute names.
//!
//! Decoding logic lives in the downstream crates
//! (`dicomdec-encoding`, `dicomdec-parser` and `dicomdec-stream`).
pub mod dictionary;
pub mod header;

pub use crate::dictionary::{DataDictionary, DictionaryEntry, StandardDataDictionary};
pub use crate::header::{DataElementHeader, Header, Length, SequenceItemHeader, Tag, VR};
