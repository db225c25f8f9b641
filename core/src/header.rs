//! Basic types for interpreting DICOM data elements:
//! the attribute tag, the value representation, the value length,
//! and the element/item header composites built from them.

use snafu::{Backtrace, Snafu};
use std::fmt;

/// Idiomatic alias for a tag's group number.
pub type GroupNumber = u16;
/// Idiomatic alias for a tag's element number.
pub type ElementNumber = u16;

/// The group number of sequence item and delimitation elements.
pub const ITEM_GROUP: GroupNumber = 0xFFFE;

/// A DICOM attribute tag, a `(group, element)` pair of 16-bit numbers.
#[derive(PartialEq, Eq, Hash, PartialOrd, Ord, Clone, Copy)]
pub struct Tag(pub GroupNumber, pub ElementNumber);

impl Tag {
    /// Getter for the tag's group value.
    #[inline]
    pub fn group(self) -> GroupNumber {
        self.0
    }

    /// Getter for the tag's element value.
    #[inline]
    pub fn element(self) -> ElementNumber {
        self.1
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Tag({:#06X?}, {:#06X?})", self.0, self.1)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({:04X},{:04X})", self.0, self.1)
    }
}

impl From<(u16, u16)> for Tag {
    #[inline]
    fn from(value: (u16, u16)) -> Tag {
        Tag(value.0, value.1)
    }
}

impl PartialEq<(u16, u16)> for Tag {
    fn eq(&self, other: &(u16, u16)) -> bool {
        self.0 == other.0 && self.1 == other.1
    }
}

/// An enum type for a DICOM value representation.
///
/// The variants cover the full set of two-letter codes in part 5 of the
/// standard. Elements read under Implicit VR, or under Explicit VR with
/// unrecognized VR bytes, are represented as [`UN`](VR::UN).
#[derive(Debug, Eq, PartialEq, Hash, Copy, Clone, Ord, PartialOrd)]
pub enum VR {
    /// Application Entity
    AE,
    /// Age String
    AS,
    /// Attribute Tag
    AT,
    /// Code String
    CS,
    /// Date
    DA,
    /// Decimal String
    DS,
    /// Date Time
    DT,
    /// Floating Point Double
    FD,
    /// Floating Point Single
    FL,
    /// Integer String
    IS,
    /// Long String
    LO,
    /// Long Text
    LT,
    /// Other Byte
    OB,
    /// Other Double
    OD,
    /// Other Float
    OF,
    /// Other Long
    OL,
    /// Other Very Long
    OV,
    /// Other Word
    OW,
    /// Person Name
    PN,
    /// Short String
    SH,
    /// Signed Long
    SL,
    /// Sequence of Items
    SQ,
    /// Signed Short
    SS,
    /// Short Text
    ST,
    /// Signed Very Long
    SV,
    /// Time
    TM,
    /// Unlimited Characters
    UC,
    /// Unique Identifier (UID)
    UI,
    /// Unsigned Long
    UL,
    /// Unknown
    UN,
    /// Universal Resource Identifier or Locator
    UR,
    /// Unsigned Short
    US,
    /// Unlimited Text
    UT,
    /// Unsigned Very Long
    UV,
}

impl VR {
    /// Obtain the value representation corresponding to the given two
    /// bytes as they appear on the wire in Explicit VR syntaxes.
    pub fn from_binary(chars: [u8; 2]) -> Option<Self> {
        use VR::*;
        match &chars {
            b"AE" => Some(AE),
            b"AS" => Some(AS),
            b"AT" => Some(AT),
            b"CS" => Some(CS),
            b"DA" => Some(DA),
            b"DS" => Some(DS),
            b"DT" => Some(DT),
            b"FD" => Some(FD),
            b"FL" => Some(FL),
            b"IS" => Some(IS),
            b"LO" => Some(LO),
            b"LT" => Some(LT),
            b"OB" => Some(OB),
            b"OD" => Some(OD),
            b"OF" => Some(OF),
            b"OL" => Some(OL),
            b"OV" => Some(OV),
            b"OW" => Some(OW),
            b"PN" => Some(PN),
            b"SH" => Some(SH),
            b"SL" => Some(SL),
            b"SQ" => Some(SQ),
            b"SS" => Some(SS),
            b"ST" => Some(ST),
            b"SV" => Some(SV),
            b"TM" => Some(TM),
            b"UC" => Some(UC),
            b"UI" => Some(UI),
            b"UL" => Some(UL),
            b"UN" => Some(UN),
            b"UR" => Some(UR),
            b"US" => Some(US),
            b"UT" => Some(UT),
            b"UV" => Some(UV),
            _ => None,
        }
    }

    /// Retrieve a string representation of this VR.
    pub fn to_str(self) -> &'static str {
        use VR::*;
        match self {
            AE => "AE",
            AS => "AS",
            AT => "AT",
            CS => "CS",
            DA => "DA",
            DS => "DS",
            DT => "DT",
            FD => "FD",
            FL => "FL",
            IS => "IS",
            LO => "LO",
            LT => "LT",
            OB => "OB",
            OD => "OD",
            OF => "OF",
            OL => "OL",
            OV => "OV",
            OW => "OW",
            PN => "PN",
            SH => "SH",
            SL => "SL",
            SQ => "SQ",
            SS => "SS",
            ST => "ST",
            SV => "SV",
            TM => "TM",
            UC => "UC",
            UI => "UI",
            UL => "UL",
            UN => "UN",
            UR => "UR",
            US => "US",
            UT => "UT",
            UV => "UV",
        }
    }

    /// Whether this VR uses the long header form in Explicit VR syntaxes:
    /// two reserved bytes followed by a 32-bit value length, instead of a
    /// 16-bit value length right after the VR bytes.
    pub fn is_long_header(self) -> bool {
        use VR::*;
        matches!(
            self,
            OB | OD | OF | OL | OV | OW | SQ | SV | UC | UR | UT | UN | UV
        )
    }
}

impl fmt::Display for VR {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.to_str())
    }
}

const UNDEFINED_LEN: u32 = 0xFFFF_FFFF;

/// A value length in bytes, as read from a data element header.
///
/// The internal value `0xFFFF_FFFF` stands for an undefined length,
/// used by sequences and items which end on a delimitation element
/// instead of at a known byte offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Length(pub u32);

impl Length {
    /// A length that is undefined.
    pub const UNDEFINED: Self = Length(UNDEFINED_LEN);

    /// Check whether this length is undefined.
    #[inline]
    pub fn is_undefined(self) -> bool {
        self.0 == UNDEFINED_LEN
    }

    /// Check whether this length is well defined (not undefined).
    #[inline]
    pub fn is_defined(self) -> bool {
        !self.is_undefined()
    }

    /// Fetch the concrete length value, if defined.
    #[inline]
    pub fn get(self) -> Option<u32> {
        match self.0 {
            UNDEFINED_LEN => None,
            v => Some(v),
        }
    }

    /// Check whether the length is defined and odd.
    /// Odd lengths are invalid per the standard but tolerated in practice.
    #[inline]
    pub fn is_odd(self) -> bool {
        self.is_defined() && self.0 % 2 == 1
    }
}

impl From<u32> for Length {
    fn from(o: u32) -> Self {
        Length(o)
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.0 {
            UNDEFINED_LEN => f.write_str("undefined"),
            v => write!(f, "{}", v),
        }
    }
}

/// A trait for types carrying a DICOM element header.
pub trait Header {
    /// Retrieve the element's tag as a `(group, element)` pair.
    fn tag(&self) -> Tag;

    /// Retrieve the value length as specified by the data element.
    fn length(&self) -> Length;

    /// Check whether this is the header of a sequence item.
    fn is_item(&self) -> bool {
        self.tag() == Tag(ITEM_GROUP, 0xE000)
    }

    /// Check whether this is the header of an item delimiter.
    fn is_item_delimiter(&self) -> bool {
        self.tag() == Tag(ITEM_GROUP, 0xE00D)
    }

    /// Check whether this is the header of a sequence delimiter.
    fn is_sequence_delimiter(&self) -> bool {
        self.tag() == Tag(ITEM_GROUP, 0xE0DD)
    }
}

/// The header of a single data element: tag, value representation and
/// value length. The value itself is read (or skipped) separately.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct DataElementHeader {
    /// DICOM tag
    pub tag: Tag,
    /// Value Representation
    pub vr: VR,
    /// Element value length
    pub len: Length,
}

impl DataElementHeader {
    /// Create a new data element header with the given properties.
    pub fn new<T: Into<Tag>>(tag: T, vr: VR, len: Length) -> DataElementHeader {
        DataElementHeader {
            tag: tag.into(),
            vr,
            len,
        }
    }

    /// Retrieve the element's value representation.
    pub fn vr(&self) -> VR {
        self.vr
    }
}

impl Header for DataElementHeader {
    fn tag(&self) -> Tag {
        self.tag
    }

    fn length(&self) -> Length {
        self.len
    }
}

/// Error raised when interpreting a tag and length pair as a
/// sequence item header.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum SequenceItemError {
    /// The tag is not an item, item delimiter or sequence delimiter.
    #[snafu(display("Unexpected tag {} for sequence item header", tag))]
    UnexpectedTag { tag: Tag, backtrace: Backtrace },

    /// Delimiters must have a zero length.
    #[snafu(display("Unexpected length {} for sequence delimiter", len))]
    UnexpectedDelimiterLength { len: Length, backtrace: Backtrace },
}

/// The header of a sequence item or of one of the delimitation elements
/// which terminate items and sequences of undefined length.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum SequenceItemHeader {
    /// A sequence item, possibly of undefined length.
    Item {
        /// the length of the item in bytes
        len: Length,
    },
    /// An item delimiter: the enclosing undefined-length item ends here.
    ItemDelimiter,
    /// A sequence delimiter: the enclosing sequence ends here.
    SequenceDelimiter,
}

impl SequenceItemHeader {
    /// Interpret the given tag and length as a sequence item header.
    pub fn new<T: Into<Tag>>(
        tag: T,
        len: Length,
    ) -> Result<SequenceItemHeader, SequenceItemError> {
        match tag.into() {
            Tag(ITEM_GROUP, 0xE000) => Ok(SequenceItemHeader::Item { len }),
            Tag(ITEM_GROUP, 0xE00D) => {
                if len != Length(0) {
                    UnexpectedDelimiterLengthSnafu { len }.fail()
                } else {
                    Ok(SequenceItemHeader::ItemDelimiter)
                }
            }
            Tag(ITEM_GROUP, 0xE0DD) => Ok(SequenceItemHeader::SequenceDelimiter),
            tag => UnexpectedTagSnafu { tag }.fail(),
        }
    }
}

impl Header for SequenceItemHeader {
    fn tag(&self) -> Tag {
        match *self {
            SequenceItemHeader::Item { .. } => Tag(ITEM_GROUP, 0xE000),
            SequenceItemHeader::ItemDelimiter => Tag(ITEM_GROUP, 0xE00D),
            SequenceItemHeader::SequenceDelimiter => Tag(ITEM_GROUP, 0xE0DD),
        }
    }

    fn length(&self) -> Length {
        match *self {
            SequenceItemHeader::Item { len } => len,
            SequenceItemHeader::ItemDelimiter | SequenceItemHeader::SequenceDelimiter => Length(0),
        }
    }
}
