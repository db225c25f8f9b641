//! Data element decoding logic.
//!
//! [`BasicDecode`] covers endian-aware reads of primitive binary values;
//! [`Decode`] covers the decoding of data element headers under a
//! concrete transfer syntax.

use byteordered::Endianness;
use dicomdec_core::header::{DataElementHeader, SequenceItemHeader, Tag};
use snafu::{Backtrace, Snafu};
use std::io::{self, Read};

pub mod basic;
pub mod explicit_le;
pub mod implicit_le;

/// Errors which may occur while decoding element headers.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum Error {
    #[snafu(display("Could not read the header tag: {}", source))]
    ReadHeaderTag {
        source: io::Error,
        backtrace: Backtrace,
    },

    #[snafu(display("Could not read the header's value representation: {}", source))]
    ReadVr {
        source: io::Error,
        backtrace: Backtrace,
    },

    #[snafu(display("Could not read the header's reserved bytes: {}", source))]
    ReadReserved {
        source: io::Error,
        backtrace: Backtrace,
    },

    #[snafu(display("Could not read the header's value length: {}", source))]
    ReadLength {
        source: io::Error,
        backtrace: Backtrace,
    },

    #[snafu(display("Could not read the item header: {}", source))]
    ReadItemHeader {
        source: io::Error,
        backtrace: Backtrace,
    },

    #[snafu(display("Bad sequence item header: {}", source))]
    BadSequenceHeader {
        #[snafu(backtrace)]
        source: dicomdec_core::header::SequenceItemError,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Type trait for reading primitive binary values from a data source
/// under a fixed byte order.
///
/// There are only two implementations of interest
/// ([`LittleEndianBasicDecoder`](basic::LittleEndianBasicDecoder) and
/// [`BigEndianBasicDecoder`](basic::BigEndianBasicDecoder)),
/// plus a runtime-dispatched enumeration of the two
/// ([`BasicDecoder`](basic::BasicDecoder)).
pub trait BasicDecode {
    /// Retrieve the byte order expected by this decoder.
    fn endianness(&self) -> Endianness;

    /// Decode an unsigned short value from the given source.
    fn decode_us<S>(&self, source: S) -> io::Result<u16>
    where
        S: Read;

    /// Decode an unsigned long value from the given source.
    fn decode_ul<S>(&self, source: S) -> io::Result<u32>
    where
        S: Read;

    /// Decode an unsigned very long value from the given source.
    fn decode_uv<S>(&self, source: S) -> io::Result<u64>
    where
        S: Read;

    /// Decode a signed short value from the given source.
    fn decode_ss<S>(&self, source: S) -> io::Result<i16>
    where
        S: Read;

    /// Decode a signed long value from the given source.
    fn decode_sl<S>(&self, source: S) -> io::Result<i32>
    where
        S: Read;

    /// Decode a signed very long value from the given source.
    fn decode_sv<S>(&self, source: S) -> io::Result<i64>
    where
        S: Read;

    /// Decode a single precision float value from the given source.
    fn decode_fl<S>(&self, source: S) -> io::Result<f32>
    where
        S: Read;

    /// Decode a double precision float value from the given source.
    fn decode_fd<S>(&self, source: S) -> io::Result<f64>
    where
        S: Read;

    /// Decode a DICOM attribute tag from the given source.
    fn decode_tag<S>(&self, mut source: S) -> io::Result<Tag>
    where
        S: Read,
    {
        let group = self.decode_us(&mut source)?;
        let element = self.decode_us(source)?;
        Ok(Tag(group, element))
    }
}

/// Type trait for decoding DICOM data element headers.
///
/// The decoder leaves the source positioned at the beginning of the
/// element's value data, which the caller reads or skips as necessary.
pub trait Decode {
    /// Fetch and decode the next data element header from the given source.
    ///
    /// Returns the decoded header and the exact number of bytes consumed.
    fn decode_header<S>(&self, source: &mut S) -> Result<(DataElementHeader, usize)>
    where
        S: ?Sized + Read;

    /// Fetch and decode the next sequence item header from the given
    /// source. Item headers never carry a value representation,
    /// regardless of the transfer syntax, hence the separate method.
    fn decode_item_header<S>(&self, source: &mut S) -> Result<SequenceItemHeader>
    where
        S: ?Sized + Read;
}

impl<T: ?Sized> Decode for &T
where
    T: Decode,
{
    fn decode_header<S>(&self, source: &mut S) -> Result<(DataElementHeader, usize)>
    where
        S: ?Sized + Read,
    {
        (**self).decode_header(source)
    }

    fn decode_item_header<S>(&self, source: &mut S) -> Result<SequenceItemHeader>
    where
        S: ?Sized + Read,
    {
        (**self).decode_item_header(source)
    }
}
