//! Wire-level DICOM decoding for the `dicomdec` crates.
//!
//! This crate provides the primitive readers for little and big endian
//! binary values, the data element header decoders for the two supported
//! transfer syntaxes (Implicit and Explicit VR Little Endian), and the
//! transfer syntax identification logic.
pub mod decode;
pub mod transfer_syntax;

pub use crate::decode::{BasicDecode, Decode};
pub use crate::transfer_syntax::TransferSyntax;
