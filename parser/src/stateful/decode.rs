//! A stateful decoding abstraction binding a data source to a header
//! decoder, with absolute position tracking.

use dicomdec_core::header::{DataElementHeader, Header, SequenceItemHeader};
use dicomdec_encoding::decode::basic::LittleEndianBasicDecoder;
use dicomdec_encoding::decode::{BasicDecode, Decode};
use dicomdec_encoding::transfer_syntax::DataSetDecoder;
use snafu::{ensure, Backtrace, ResultExt, Snafu};
use std::io::{self, Read};

#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum Error {
    #[snafu(display("Could not decode element header at position {}", position))]
    DecodeElementHeader {
        position: u64,
        #[snafu(backtrace)]
        source: dicomdec_encoding::decode::Error,
    },

    #[snafu(display("Could not decode item header at position {}", position))]
    DecodeItemHeader {
        position: u64,
        #[snafu(backtrace)]
        source: dicomdec_encoding::decode::Error,
    },

    #[snafu(display("Could not read value data at position {}", position))]
    ReadValueData {
        position: u64,
        source: io::Error,
        backtrace: Backtrace,
    },

    #[snafu(display(
        "Value field ends prematurely at position {}: expected {} bytes, got {}",
        position,
        expected,
        got
    ))]
    ShortValueData {
        position: u64,
        expected: u64,
        got: u64,
        backtrace: Backtrace,
    },

    #[snafu(display("Could not allocate memory for a value of {} bytes", len))]
    AllocationSize {
        len: u32,
        source: std::collections::TryReserveError,
        backtrace: Backtrace,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// A stateful decoder, tying a header decoder `D` to a data source `S`.
///
/// All reads go through this type so that the assumed absolute position
/// of the source stays accurate; the position is what packet emission
/// reports as the byte offset of pixel data.
#[derive(Debug)]
pub struct StatefulDecoder<D, S> {
    from: S,
    decoder: D,
    basic: LittleEndianBasicDecoder,
    /// the assumed position of the reader source
    position: u64,
}

/// A stateful decoder for the data set, with the header decoder chosen
/// at run time from the negotiated transfer syntax.
pub type DataSetStatefulDecoder<S> = StatefulDecoder<DataSetDecoder, S>;

impl<D, S> StatefulDecoder<D, S> {
    /// Create a new stateful decoder at position 0 of the source.
    pub fn new(from: S, decoder: D) -> Self {
        Self::new_with_position(from, decoder, 0)
    }

    /// Create a new stateful decoder, assuming a base reading position.
    ///
    /// Decoding errors will ensue if `position` does not match the real
    /// position of the source.
    pub fn new_with_position(from: S, decoder: D, position: u64) -> Self {
        StatefulDecoder {
            from,
            decoder,
            basic: LittleEndianBasicDecoder,
            position,
        }
    }

    /// Retrieve the assumed position of the source.
    pub fn position(&self) -> u64 {
        self.position
    }

    /// Dismantle the decoder, returning the source and the position
    /// reached so far. Used when switching to a different transfer
    /// syntax mid-stream (file meta group to data set).
    pub fn into_parts(self) -> (S, u64) {
        (self.from, self.position)
    }
}

impl<D, S> StatefulDecoder<D, S>
where
    D: Decode,
    S: Read,
{
    /// Decode the next data element header.
    ///
    /// Odd value lengths are invalid per the standard, but files carrying
    /// them exist; they are reported and accepted.
    pub fn decode_header(&mut self) -> Result<DataElementHeader> {
        let (header, bytes_read) = self
            .decoder
            .decode_header(&mut self.from)
            .context(DecodeElementHeaderSnafu {
                position: self.position,
            })?;
        self.position += bytes_read as u64;
        if header.len.is_odd() {
            tracing::warn!(
                "Odd value length {} in element {} at position {}",
                header.len,
                header.tag(),
                self.position
            );
        }
        Ok(header)
    }

    /// Decode the next sequence item header (tag and 32-bit length,
    /// no value representation).
    pub fn decode_item_header(&mut self) -> Result<SequenceItemHeader> {
        let header = self
            .decoder
            .decode_item_header(&mut self.from)
            .context(DecodeItemHeaderSnafu {
                position: self.position,
            })?;
        self.position += 8;
        Ok(header)
    }

    /// Read one little endian 16-bit token.
    /// Used when scanning items of undefined length.
    pub fn read_token(&mut self) -> Result<u16> {
        let token = self
            .basic
            .decode_us(&mut self.from)
            .context(ReadValueDataSnafu {
                position: self.position,
            })?;
        self.position += 2;
        Ok(token)
    }

    /// Read exactly `len` value bytes into `vec`.
    ///
    /// The allocation is fallible: an adversarial length surfaces as an
    /// allocation error rather than an abort.
    pub fn read_to_vec(&mut self, len: u32, vec: &mut Vec<u8>) -> Result<()> {
        let base = vec.len();
        vec.try_reserve_exact(len as usize)
            .context(AllocationSizeSnafu { len })?;
        vec.resize(base + len as usize, 0);
        self.from
            .read_exact(&mut vec[base..])
            .context(ReadValueDataSnafu {
                position: self.position,
            })?;
        self.position += u64::from(len);
        Ok(())
    }

    /// Consume and discard exactly `len` bytes of the source.
    pub fn skip_bytes(&mut self, len: u32) -> Result<()> {
        let got = io::copy(
            &mut self.from.by_ref().take(u64::from(len)),
            &mut io::sink(),
        )
        .context(ReadValueDataSnafu {
            position: self.position,
        })?;
        ensure!(
            got == u64::from(len),
            ShortValueDataSnafu {
                position: self.position + got,
                expected: u64::from(len),
                got,
            }
        );
        self.position += u64::from(len);
        Ok(())
    }
}
