//! Mid-level DICOM data set parsing for the `dicomdec` crates.
//!
//! The [`stateful`] module tracks the absolute stream position while
//! decoding headers and reading or skipping value fields; the [`dataset`]
//! module builds whole, owned data elements on top of it, including
//! sequences of items with explicit or undefined lengths.
pub mod dataset;
pub mod stateful;

pub use crate::dataset::{DataElement, DataValue};
pub use crate::stateful::decode::StatefulDecoder;
