//! Reading of the DICOM file meta information group.
//!
//! The meta group follows the 128-byte preamble and the `DICM` magic
//! code. It is always encoded in Explicit VR Little Endian, regardless
//! of the transfer syntax it announces for the main data set, and is
//! bounded by the File Meta Information Group Length element.

use crate::format;
use crate::{MAGIC_CODE, PREAMBLE_SIZE};
use byteordered::byteorder::{ByteOrder, LittleEndian};
use dicomdec_core::dictionary::{DataDictionary, StandardDataDictionary};
use dicomdec_core::header::Header;
use dicomdec_core::Tag;
use dicomdec_encoding::decode::explicit_le::ExplicitVRLittleEndianDecoder;
use dicomdec_encoding::transfer_syntax::{self, TransferSyntax};
use dicomdec_parser::dataset::{read_element, DataValue};
use dicomdec_parser::stateful::decode::StatefulDecoder;
use snafu::{ensure, Backtrace, OptionExt, ResultExt, Snafu};
use std::io::{self, Read};

/// The meta group length assumed when the File Meta Information Group
/// Length element is missing.
const FALLBACK_GROUP_LENGTH: u32 = 200;

#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum Error {
    #[snafu(display("Could not read the file preamble"))]
    ReadPreamble {
        source: io::Error,
        backtrace: Backtrace,
    },

    #[snafu(display("Could not read the magic code"))]
    ReadMagicCode {
        source: io::Error,
        backtrace: Backtrace,
    },

    /// Invalid DICOM data, detected by checking the `DICM` code.
    #[snafu(display("Invalid DICOM file (magic code check failed)"))]
    NotDicom { backtrace: Backtrace },

    #[snafu(display("Could not decode file meta element"))]
    DecodeElement {
        #[snafu(backtrace)]
        source: dicomdec_parser::stateful::decode::Error,
    },

    #[snafu(display("Could not read file meta element value"))]
    ReadElementValue {
        #[snafu(backtrace)]
        source: dicomdec_parser::dataset::Error,
    },

    #[snafu(display(
        "Transfer syntax \"{}\" ({}) is not supported",
        uid,
        description
    ))]
    UnsupportedTransferSyntax {
        uid: String,
        description: &'static str,
        backtrace: Backtrace,
    },

    #[snafu(display("File meta group carries no transfer syntax"))]
    MissingTransferSyntax { backtrace: Backtrace },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// The outcome of reading the file meta group.
#[derive(Debug, Clone)]
pub struct FileMetaScan {
    /// The transfer syntax declared for the main data set.
    pub transfer_syntax: TransferSyntax,
    /// One formatted metadata entry per meta group element,
    /// in file order.
    pub entries: Vec<(String, String)>,
    /// The absolute stream position right after the meta group,
    /// where the main data set begins.
    pub end_position: u64,
}

/// Read the preamble, the magic code and the whole file meta group
/// from the start of `source`.
///
/// On success the source is positioned at the first data set element.
pub fn read_file_meta<S: Read>(source: &mut S) -> Result<FileMetaScan> {
    let mut preamble = [0u8; PREAMBLE_SIZE];
    source.read_exact(&mut preamble).context(ReadPreambleSnafu)?;

    let mut magic = [0u8; 4];
    source.read_exact(&mut magic).context(ReadMagicCodeSnafu)?;
    ensure!(&magic == MAGIC_CODE, NotDicomSnafu);

    let mut decoder = StatefulDecoder::new_with_position(
        source,
        ExplicitVRLittleEndianDecoder::default(),
        (PREAMBLE_SIZE + MAGIC_CODE.len()) as u64,
    );

    // the group length element tells how far the meta group reaches
    let header = decoder.decode_header().context(DecodeElementSnafu)?;
    let elem = read_element(&mut decoder, header).context(ReadElementValueSnafu)?;
    let group_length = match elem.bytes() {
        Some(data) if elem.tag() == Tag(0x0002, 0x0000) && data.len() >= 4 => {
            LittleEndian::read_u32(data)
        }
        _ => {
            tracing::warn!(
                "First data element is not File Meta Information Group Length, \
                 assuming a meta group of {} bytes",
                FALLBACK_GROUP_LENGTH
            );
            FALLBACK_GROUP_LENGTH
        }
    };

    let dict = StandardDataDictionary;
    let mut entries = Vec::new();
    let mut transfer_syntax = None;
    let mut bytes_read = 0u64;

    while bytes_read < u64::from(group_length) {
        let element_start = decoder.position();
        let header = decoder.decode_header().context(DecodeElementSnafu)?;
        let elem = read_element(&mut decoder, header).context(ReadElementValueSnafu)?;
        bytes_read += decoder.position() - element_start;

        let entry = dict.by_tag(elem.tag());
        let vr = entry.map(|e| e.vr).unwrap_or_else(|| elem.vr());
        let description = entry.map(|e| e.description).unwrap_or("Unknown");

        let value = match &elem.value {
            DataValue::Primitive(data) => format::format_value(vr, data),
            DataValue::Sequence(_) => "[Sequence of items]".into(),
        };

        if elem.tag() == Tag(0x0002, 0x0010) {
            let uid = value
                .trim_end_matches(|c: char| c.is_whitespace() || c == '\0')
                .to_owned();
            transfer_syntax = Some(TransferSyntax::from_uid(&uid).with_context(|| {
                UnsupportedTransferSyntaxSnafu {
                    description: transfer_syntax::describe_unsupported(&uid),
                    uid,
                }
            })?);
        }

        entries.push((format::tag_key(elem.tag(), description), value));
    }

    let transfer_syntax = transfer_syntax.context(MissingTransferSyntaxSnafu)?;
    tracing::debug!("Transfer syntax: {}", transfer_syntax.name());

    Ok(FileMetaScan {
        transfer_syntax,
        entries,
        end_position: decoder.position(),
    })
}
