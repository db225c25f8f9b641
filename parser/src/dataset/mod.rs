//! Whole-element reading on top of the stateful decoder.
//!
//! A data element is consumed entirely before the next one is parsed:
//! primitive values are read into an owned buffer, and sequence values
//! are consumed item by item until the sequence delimitation element.
//! Sequences are bounded by [`MAX_SEQUENCE_ITEMS`] and undefined-length
//! items by [`MAX_ITEM_TOKENS`], so that an adversarial stream cannot
//! grow memory without limit.

use crate::stateful::decode::StatefulDecoder;
use dicomdec_core::header::{
    DataElementHeader, Header, Length, SequenceItemHeader, Tag, ITEM_GROUP, VR,
};
use dicomdec_encoding::decode::Decode;
use snafu::{Backtrace, ResultExt, Snafu};
use std::io::Read;

/// Maximum number of entries consumed from a single sequence value,
/// including item delimiters and the final sequence delimiter.
pub const MAX_SEQUENCE_ITEMS: usize = 20;

/// Maximum number of 16-bit tokens scanned inside a single item of
/// undefined length before giving up on finding its delimiter.
pub const MAX_ITEM_TOKENS: usize = 5000;

#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum Error {
    #[snafu(display("Could not read element content"))]
    ReadContent {
        #[snafu(backtrace)]
        source: crate::stateful::decode::Error,
    },

    #[snafu(display(
        "Sequence {} at position {} exceeds {} entries",
        tag,
        position,
        MAX_SEQUENCE_ITEMS
    ))]
    SequenceOverflow {
        tag: Tag,
        position: u64,
        backtrace: Backtrace,
    },

    #[snafu(display(
        "Undefined-length item at position {} exceeds {} tokens",
        position,
        MAX_ITEM_TOKENS
    ))]
    ItemTokenOverflow { position: u64, backtrace: Backtrace },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// The value of a parsed data element.
#[derive(Debug, Clone, PartialEq)]
pub enum DataValue {
    /// The raw bytes of the value field, exactly as on the wire.
    Primitive(Vec<u8>),
    /// The entries of a sequence value, the last of which is the
    /// sequence delimitation element.
    Sequence(Vec<DataElement>),
}

/// A fully read data element, owning its value.
#[derive(Debug, Clone, PartialEq)]
pub struct DataElement {
    /// The element header as read from the stream.
    pub header: DataElementHeader,
    /// The element value.
    pub value: DataValue,
}

impl DataElement {
    /// Retrieve the element's value representation.
    pub fn vr(&self) -> VR {
        self.header.vr
    }

    /// Retrieve the raw value bytes, if this is a primitive element.
    pub fn bytes(&self) -> Option<&[u8]> {
        match &self.value {
            DataValue::Primitive(data) => Some(data),
            DataValue::Sequence(_) => None,
        }
    }

    /// Retrieve the sequence entries, if this is a sequence element.
    pub fn items(&self) -> Option<&[DataElement]> {
        match &self.value {
            DataValue::Primitive(_) => None,
            DataValue::Sequence(items) => Some(items),
        }
    }
}

impl Header for DataElement {
    fn tag(&self) -> Tag {
        self.header.tag
    }

    fn length(&self) -> Length {
        self.header.len
    }
}

/// Read the value field announced by `header`, producing a whole element.
///
/// An undefined value length always means a sequence of items, which is
/// consumed up to and including its sequence delimitation element.
pub fn read_element<D, S>(
    decoder: &mut StatefulDecoder<D, S>,
    header: DataElementHeader,
) -> Result<DataElement>
where
    D: Decode,
    S: Read,
{
    let value = if header.len.is_undefined() {
        DataValue::Sequence(read_sequence(decoder, header.tag)?)
    } else {
        let mut data = Vec::new();
        decoder
            .read_to_vec(header.len.0, &mut data)
            .context(ReadContentSnafu)?;
        DataValue::Primitive(data)
    };
    Ok(DataElement { header, value })
}

/// Consume a sequence value: item entries until the sequence
/// delimitation element, which becomes the final entry.
fn read_sequence<D, S>(decoder: &mut StatefulDecoder<D, S>, tag: Tag) -> Result<Vec<DataElement>>
where
    D: Decode,
    S: Read,
{
    let mut entries = Vec::new();
    for _ in 0..MAX_SEQUENCE_ITEMS {
        let item = decoder.decode_item_header().context(ReadContentSnafu)?;
        match item {
            SequenceItemHeader::SequenceDelimiter => {
                entries.push(DataElement {
                    header: DataElementHeader::new(Tag(ITEM_GROUP, 0xE0DD), VR::UN, Length(0)),
                    value: DataValue::Primitive(Vec::new()),
                });
                return Ok(entries);
            }
            SequenceItemHeader::ItemDelimiter => {
                entries.push(DataElement {
                    header: DataElementHeader::new(Tag(ITEM_GROUP, 0xE00D), VR::UN, Length(0)),
                    value: DataValue::Primitive(Vec::new()),
                });
            }
            SequenceItemHeader::Item { len } => {
                let data = if len.is_undefined() {
                    read_undefined_item(decoder)?
                } else {
                    let mut data = Vec::new();
                    decoder
                        .read_to_vec(len.0, &mut data)
                        .context(ReadContentSnafu)?;
                    data
                };
                entries.push(DataElement {
                    header: DataElementHeader::new(Tag(ITEM_GROUP, 0xE000), VR::UN, len),
                    value: DataValue::Primitive(data),
                });
            }
        }
    }
    SequenceOverflowSnafu {
        tag,
        position: decoder.position(),
    }
    .fail()
}

/// Scan an undefined-length item in 16-bit tokens until the item
/// delimitation element, then consume its 4-byte zero length.
/// The collected payload excludes the delimiter.
fn read_undefined_item<D, S>(decoder: &mut StatefulDecoder<D, S>) -> Result<Vec<u8>>
where
    D: Decode,
    S: Read,
{
    let mut data = Vec::new();
    let mut at_item_group = false;
    for _ in 0..MAX_ITEM_TOKENS {
        let token = decoder.read_token().context(ReadContentSnafu)?;
        if token == 0xE00D && at_item_group {
            // the stored trailing 0xFFFE belongs to the delimiter
            data.truncate(data.len() - 2);
            decoder.skip_bytes(4).context(ReadContentSnafu)?;
            return Ok(data);
        }
        data.extend_from_slice(&token.to_le_bytes());
        at_item_group = token == ITEM_GROUP;
    }
    ItemTokenOverflowSnafu {
        position: decoder.position(),
    }
    .fail()
}
