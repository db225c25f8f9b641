//! Transfer syntax identification.
//!
//! A DICOM file declares the encoding of its main data set through the
//! Transfer Syntax UID in the file meta group. Only the two uncompressed
//! little endian syntaxes are supported here; the remaining standard
//! syntaxes are recognized well enough to be named in error messages.

use crate::decode::explicit_le::ExplicitVRLittleEndianDecoder;
use crate::decode::implicit_le::StandardImplicitVRLittleEndianDecoder;
use crate::decode::{Decode, Result};
use dicomdec_core::header::{DataElementHeader, SequenceItemHeader};
use std::io::Read;

/// The UID of the Implicit VR Little Endian transfer syntax.
pub const IMPLICIT_VR_LE_UID: &str = "1.2.840.10008.1.2";
/// The UID of the Explicit VR Little Endian transfer syntax.
pub const EXPLICIT_VR_LE_UID: &str = "1.2.840.10008.1.2.1";

/// A supported transfer syntax for the main data set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferSyntax {
    /// Implicit VR Little Endian: the default DICOM transfer syntax.
    ImplicitVrLittleEndian,
    /// Explicit VR Little Endian.
    ExplicitVrLittleEndian,
}

impl TransferSyntax {
    /// Identify a transfer syntax from its UID.
    ///
    /// Trailing spaces and NUL padding in the UID value field are the
    /// caller's responsibility to strip. Returns `None` for any UID
    /// outside the supported set.
    pub fn from_uid(uid: &str) -> Option<Self> {
        match uid {
            IMPLICIT_VR_LE_UID => Some(TransferSyntax::ImplicitVrLittleEndian),
            EXPLICIT_VR_LE_UID => Some(TransferSyntax::ExplicitVrLittleEndian),
            _ => None,
        }
    }

    /// The registered UID of this transfer syntax.
    pub fn uid(self) -> &'static str {
        match self {
            TransferSyntax::ImplicitVrLittleEndian => IMPLICIT_VR_LE_UID,
            TransferSyntax::ExplicitVrLittleEndian => EXPLICIT_VR_LE_UID,
        }
    }

    /// The human readable name of this transfer syntax.
    pub fn name(self) -> &'static str {
        match self {
            TransferSyntax::ImplicitVrLittleEndian => "Implicit VR Little Endian",
            TransferSyntax::ExplicitVrLittleEndian => "Explicit VR Little Endian",
        }
    }

    /// Obtain a data element header decoder for this transfer syntax.
    pub fn decoder(self) -> DataSetDecoder {
        match self {
            TransferSyntax::ImplicitVrLittleEndian => {
                DataSetDecoder::ImplicitVr(StandardImplicitVRLittleEndianDecoder::new())
            }
            TransferSyntax::ExplicitVrLittleEndian => {
                DataSetDecoder::ExplicitVr(ExplicitVRLittleEndianDecoder::default())
            }
        }
    }
}

/// Describe an unsupported transfer syntax UID for diagnostics.
pub fn describe_unsupported(uid: &str) -> &'static str {
    if uid == "1.2.840.10008.1.2.1.99" {
        "Deflated Explicit VR Little Endian"
    } else if uid == "1.2.840.10008.1.2.2" {
        "Explicit VR Big Endian (retired)"
    } else if uid == "1.2.840.10008.1.2.5" {
        "RLE Lossless"
    } else if uid.starts_with("1.2.840.10008.1.2.4.") {
        "a JPEG family transfer syntax"
    } else {
        "an unknown transfer syntax"
    }
}

/// A data element header decoder chosen at run time from the
/// negotiated transfer syntax.
#[derive(Debug)]
pub enum DataSetDecoder {
    /// Decode headers as Implicit VR Little Endian.
    ImplicitVr(StandardImplicitVRLittleEndianDecoder),
    /// Decode headers as Explicit VR Little Endian.
    ExplicitVr(ExplicitVRLittleEndianDecoder),
}

impl Decode for DataSetDecoder {
    fn decode_header<S>(&self, source: &mut S) -> Result<(DataElementHeader, usize)>
    where
        S: ?Sized + Read,
    {
        match self {
            DataSetDecoder::ImplicitVr(dec) => dec.decode_header(source),
            DataSetDecoder::ExplicitVr(dec) => dec.decode_header(source),
        }
    }

    fn decode_item_header<S>(&self, source: &mut S) -> Result<SequenceItemHeader>
    where
        S: ?Sized + Read,
    {
        match self {
            DataSetDecoder::ImplicitVr(dec) => dec.decode_item_header(source),
            DataSetDecoder::ExplicitVr(dec) => dec.decode_item_header(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uid_mapping_is_exact() {
        assert_eq!(
            TransferSyntax::from_uid("1.2.840.10008.1.2"),
            Some(TransferSyntax::ImplicitVrLittleEndian)
        );
        assert_eq!(
            TransferSyntax::from_uid("1.2.840.10008.1.2.1"),
            Some(TransferSyntax::ExplicitVrLittleEndian)
        );
        // everything else is unsupported, including the other real syntaxes
        assert_eq!(TransferSyntax::from_uid("1.2.840.10008.1.2.2"), None);
        assert_eq!(TransferSyntax::from_uid("1.2.840.10008.1.2.1.99"), None);
        assert_eq!(TransferSyntax::from_uid("1.2.840.10008.1.2.4.50"), None);
        assert_eq!(TransferSyntax::from_uid("1.2.840.10008.1.2.5"), None);
        assert_eq!(TransferSyntax::from_uid(""), None);
        // no padding tolerance at this level
        assert_eq!(TransferSyntax::from_uid("1.2.840.10008.1.2 "), None);
    }

    #[test]
    fn unsupported_descriptions() {
        assert_eq!(
            describe_unsupported("1.2.840.10008.1.2.4.90"),
            "a JPEG family transfer syntax"
        );
        assert_eq!(describe_unsupported("1.2.840.10008.1.2.5"), "RLE Lossless");
        assert_eq!(describe_unsupported("9.9.9"), "an unknown transfer syntax");
    }
}
