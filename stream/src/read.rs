//! The data set scanner: consumes the main data set after the file meta
//! group, maintains the image description state, emits stream metadata,
//! and serves one packet of raw pixel bytes per frame.

use crate::format;
use crate::meta::{self, FileMetaScan};
use byteordered::byteorder::{ByteOrder, LittleEndian};
use dicomdec_core::dictionary::{DataDictionary, StandardDataDictionary};
use dicomdec_core::header::DataElementHeader;
use dicomdec_core::Tag;
use dicomdec_encoding::transfer_syntax::TransferSyntax;
use dicomdec_parser::dataset::{read_element, DataValue};
use dicomdec_parser::stateful::decode::{DataSetStatefulDecoder, StatefulDecoder};
use dicomdec_pixeldata::{ImageParams, PhotometricInterpretation, Rescale, WindowLevel};
use snafu::{Backtrace, ResultExt, Snafu};
use std::io::{ErrorKind, Read};

/// The group holding the image description attributes.
const IMAGE_GROUP: u16 = 0x0028;
/// The group holding the multi-frame timing attributes.
const MULTIFRAME_GROUP: u16 = 0x0018;
/// The pixel data element.
const PIXEL_DATA: Tag = Tag(0x7FE0, 0x0010);

#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum Error {
    #[snafu(display("Could not read the file meta group"))]
    ReadMeta {
        #[snafu(backtrace)]
        source: meta::Error,
    },

    #[snafu(display("Could not decode data set element"))]
    DecodeElement {
        #[snafu(backtrace)]
        source: dicomdec_parser::stateful::decode::Error,
    },

    #[snafu(display("Could not read data set element value"))]
    ReadElementValue {
        #[snafu(backtrace)]
        source: dicomdec_parser::dataset::Error,
    },

    #[snafu(display("Could not read frame data"))]
    ReadFrameData {
        #[snafu(backtrace)]
        source: dicomdec_parser::stateful::decode::Error,
    },

    /// Pixel data of undefined length holds encapsulated (compressed)
    /// frames, which the supported transfer syntaxes never carry.
    #[snafu(display("Pixel data of undefined length is not supported"))]
    UndefinedPixelDataLength { backtrace: Backtrace },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Consumer options for reading a DICOM stream.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ReadOptions {
    /// Override the window width found in the file.
    pub window: Option<i32>,
    /// Override the window center found in the file.
    pub level: Option<i32>,
    /// Emit all non-image, non-pixel data set elements as metadata.
    pub metadata: bool,
}

/// One frame's worth of raw pixel bytes, in file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Packet {
    /// The raw pixel payload of this frame.
    pub data: Vec<u8>,
    /// Absolute byte offset of this frame's payload in the stream.
    pub pos: u64,
    /// Presentation timestamp on a 1/1000 time base.
    pub pts: i64,
    /// Display duration on a 1/1000 time base.
    pub duration: i64,
}

/// Parameters describing the image stream, in the shape expected by a
/// playback layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamInfo {
    /// Frame width in pixels.
    pub width: u16,
    /// Frame height in pixels.
    pub height: u16,
    /// Bits allocated per stored sample.
    pub bits_per_raw_sample: u16,
    /// Bits actually used per stored sample.
    pub bits_per_coded_sample: u16,
    /// Number of frames in the stream.
    pub nb_frames: u64,
    /// Total stream duration on the time base.
    pub duration: i64,
    /// The time base, fixed at 1/1000 (milliseconds).
    pub time_base: (u32, u32),
    /// The stream start time, fixed at 0.
    pub start_time: i64,
}

/// The image description state built up while scanning the data set.
#[derive(Debug, Clone)]
struct ScanState {
    width: u16,
    height: u16,
    bits_allocated: u16,
    bits_stored: u16,
    nb_frames: u64,
    /// inter-frame delay in milliseconds
    frame_delay: f64,
    /// 1-based index of the next frame to serve
    frame_index: u64,
    photometric: PhotometricInterpretation,
    pixel_representation: u16,
    pixel_padding: Option<i32>,
    rescale: Rescale,
    window: Option<i32>,
    level: Option<i32>,
    /// caller-provided window/level take precedence over file values
    window_locked: bool,
    level_locked: bool,
}

impl Default for ScanState {
    fn default() -> Self {
        ScanState {
            width: 0,
            height: 0,
            bits_allocated: 0,
            bits_stored: 0,
            nb_frames: 1,
            frame_delay: 100.0,
            frame_index: 1,
            photometric: PhotometricInterpretation::default(),
            pixel_representation: 1,
            pixel_padding: None,
            rescale: Rescale::default(),
            window: None,
            level: None,
            window_locked: false,
            level_locked: false,
        }
    }
}

impl ScanState {
    fn image_params(&self) -> ImageParams {
        ImageParams {
            photometric: self.photometric,
            pixel_representation: self.pixel_representation,
            pixel_padding: self.pixel_padding,
            rescale: self.rescale,
        }
    }

    /// Digest one element of the image description group.
    fn apply_image_element(&mut self, element: u16, data: &[u8]) {
        match element {
            0x0010 => self.height = u16_le(data),
            0x0011 => self.width = u16_le(data),
            0x0100 => self.bits_allocated = u16_le(data),
            0x0101 => self.bits_stored = u16_le(data),
            0x0008 => {
                let n = parse_is(data);
                if n > 0 {
                    self.nb_frames = n as u64;
                } else {
                    tracing::warn!("Ignoring non-positive number of frames {}", n);
                }
            }
            0x1050 => {
                if !self.level_locked {
                    self.level = Some(parse_is(data) as i32);
                }
            }
            0x1051 => {
                if !self.window_locked {
                    self.window = Some(parse_is(data) as i32);
                }
            }
            0x0004 => {
                let text = String::from_utf8_lossy(data);
                self.photometric = PhotometricInterpretation::from_cs(text.trim_end_matches(
                    |c: char| c.is_whitespace() || c == '\0',
                ));
            }
            0x0103 => self.pixel_representation = u16_le(data),
            0x0120 => self.pixel_padding = Some(i32::from(u16_le(data))),
            0x1052 => self.rescale.intercept = parse_is(data) as i32,
            0x1053 => self.rescale.slope = parse_is(data) as i32,
            _ => {}
        }
    }

    /// Digest one element of the multi-frame timing group.
    fn apply_multiframe_element(&mut self, element: u16, data: &[u8]) {
        if element == 0x1063 {
            self.frame_delay = parse_ds(data);
        }
    }
}

fn u16_le(data: &[u8]) -> u16 {
    if data.len() >= 2 {
        LittleEndian::read_u16(data)
    } else {
        0
    }
}

/// Parse the leading integer of a textual IS value field,
/// ignoring padding and anything after the number.
fn parse_is(data: &[u8]) -> i64 {
    let text = String::from_utf8_lossy(data);
    let text = text.trim_matches(|c: char| c.is_whitespace() || c == '\0');
    let mut end = text.len();
    for (i, c) in text.char_indices() {
        if !(c.is_ascii_digit() || (i == 0 && (c == '+' || c == '-'))) {
            end = i;
            break;
        }
    }
    text[..end].parse().unwrap_or(0)
}

/// Parse the leading decimal number of a textual DS value field.
fn parse_ds(data: &[u8]) -> f64 {
    let text = String::from_utf8_lossy(data);
    let text = text.trim_matches(|c: char| c.is_whitespace() || c == '\0');
    let end = text
        .find(|c: char| !(c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E')))
        .unwrap_or(text.len());
    text[..end].parse().unwrap_or(0.0)
}

/// A reader of DICOM streams.
///
/// Construction consumes the preamble and the file meta group;
/// [`read_packet`](DicomReader::read_packet) then drives the data set
/// scan, returning one packet per image frame and `None` at the end of
/// the stream.
#[derive(Debug)]
pub struct DicomReader<S> {
    decoder: DataSetStatefulDecoder<S>,
    options: ReadOptions,
    dict: StandardDataDictionary,
    meta: FileMetaScan,
    metadata: Vec<(String, String)>,
    state: ScanState,
    /// frame payload size in bytes, known once pixel data is reached
    frame_size: Option<u64>,
    extradata: Option<Vec<u8>>,
    finished: bool,
}

impl<S: Read> DicomReader<S> {
    /// Start reading a DICOM stream: checks the magic code and consumes
    /// the whole file meta group.
    pub fn new(mut source: S, options: ReadOptions) -> Result<Self> {
        let meta = meta::read_file_meta(&mut source).context(ReadMetaSnafu)?;
        let decoder = StatefulDecoder::new_with_position(
            source,
            meta.transfer_syntax.decoder(),
            meta.end_position,
        );

        let mut state = ScanState::default();
        if let Some(window) = options.window {
            state.window = Some(window);
            state.window_locked = true;
        }
        if let Some(level) = options.level {
            state.level = Some(level);
            state.level_locked = true;
        }

        Ok(DicomReader {
            decoder,
            options,
            dict: StandardDataDictionary,
            meta,
            metadata: Vec::new(),
            state,
            frame_size: None,
            extradata: None,
            finished: false,
        })
    }

    /// The transfer syntax of the main data set.
    pub fn transfer_syntax(&self) -> TransferSyntax {
        self.meta.transfer_syntax
    }

    /// The file meta group scan, including its metadata entries.
    pub fn file_meta(&self) -> &FileMetaScan {
        &self.meta
    }

    /// The stream-scoped metadata entries collected so far.
    /// Only populated when [`ReadOptions::metadata`] is set.
    pub fn metadata(&self) -> &[(String, String)] {
        &self.metadata
    }

    /// The image stream parameters gathered so far. Complete once the
    /// first packet has been returned.
    pub fn stream_info(&self) -> StreamInfo {
        StreamInfo {
            width: self.state.width,
            height: self.state.height,
            bits_per_raw_sample: self.state.bits_allocated,
            bits_per_coded_sample: self.state.bits_stored,
            nb_frames: self.state.nb_frames,
            duration: (self.state.frame_delay * self.state.nb_frames as f64) as i64,
            time_base: (1, 1000),
            start_time: 0,
        }
    }

    /// The decoding parameter snapshot taken at the pixel data element,
    /// in its serialized form. `None` until the first packet is served.
    pub fn extradata(&self) -> Option<&[u8]> {
        self.extradata.as_deref()
    }

    /// The per-image decoding parameters gathered so far.
    pub fn image_params(&self) -> ImageParams {
        self.state.image_params()
    }

    /// The effective window/level, after applying the override options
    /// and the file's own values. `None` when neither was provided.
    pub fn window_level(&self) -> Option<WindowLevel> {
        match (self.state.window, self.state.level) {
            (None, None) => None,
            (window, level) => Some(WindowLevel {
                window: window.unwrap_or(dicomdec_pixeldata::DEFAULT_WINDOW),
                level: level.unwrap_or(dicomdec_pixeldata::DEFAULT_LEVEL),
            }),
        }
    }

    /// Produce the next frame packet.
    ///
    /// Scans data set elements until pixel data is reached, updating the
    /// image state and collecting metadata on the way. Returns `None`
    /// when the stream ends after all frames have been served.
    pub fn read_packet(&mut self) -> Result<Option<Packet>> {
        if self.finished {
            return Ok(None);
        }

        if let Some(frame_size) = self.frame_size {
            if self.state.frame_index <= self.state.nb_frames {
                return self.frame_packet(frame_size).map(Some);
            }
        }

        loop {
            let header = match self.decoder.decode_header() {
                Ok(header) => header,
                Err(e) if is_end_of_stream(&e) => {
                    self.finished = true;
                    return Ok(None);
                }
                Err(e) => return Err(e).context(DecodeElementSnafu),
            };

            if header.tag == PIXEL_DATA {
                let length = match header.len.get() {
                    Some(length) => length,
                    None => return UndefinedPixelDataLengthSnafu.fail(),
                };
                let frame_size = u64::from(length) / self.state.nb_frames;
                self.frame_size = Some(frame_size);
                self.extradata = Some(self.state.image_params().to_extradata());
                return self.frame_packet(frame_size).map(Some);
            }

            match header.tag.group() {
                IMAGE_GROUP | MULTIFRAME_GROUP => {
                    let elem =
                        read_element(&mut self.decoder, header).context(ReadElementValueSnafu)?;
                    if let Some(data) = elem.bytes() {
                        match header.tag.group() {
                            IMAGE_GROUP => {
                                self.state.apply_image_element(header.tag.element(), data)
                            }
                            _ => self
                                .state
                                .apply_multiframe_element(header.tag.element(), data),
                        }
                    }
                    self.emit_metadata(&header, &elem.value);
                }
                _ => {
                    // sequences must be consumed to know where they end,
                    // even when their content is of no interest
                    if self.options.metadata || header.len.is_undefined() {
                        let elem = read_element(&mut self.decoder, header)
                            .context(ReadElementValueSnafu)?;
                        self.emit_metadata(&header, &elem.value);
                    } else {
                        self.decoder
                            .skip_bytes(header.len.0)
                            .context(DecodeElementSnafu)?;
                    }
                }
            }
        }
    }

    fn frame_packet(&mut self, frame_size: u64) -> Result<Packet> {
        let pos = self.decoder.position();
        let mut data = Vec::new();
        self.decoder
            .read_to_vec(frame_size as u32, &mut data)
            .context(ReadFrameDataSnafu)?;
        let pts = ((self.state.frame_index - 1) as f64 * self.state.frame_delay) as i64;
        self.state.frame_index += 1;
        Ok(Packet {
            data,
            pos,
            pts,
            duration: self.state.frame_delay as i64,
        })
    }

    /// Emit a stream metadata entry for a dictionary-described element.
    fn emit_metadata(&mut self, header: &DataElementHeader, value: &DataValue) {
        if !self.options.metadata {
            return;
        }
        let entry = match self.dict.by_tag(header.tag) {
            Some(entry) => entry,
            None => return,
        };
        let value = match value {
            DataValue::Primitive(data) => format::format_value(entry.vr, data),
            DataValue::Sequence(_) => "[Sequence of items]".into(),
        };
        self.metadata
            .push((format::tag_key(header.tag, entry.description), value));
    }
}

/// Whether the error is an end-of-stream at an element boundary,
/// which terminates the scan gracefully.
fn is_end_of_stream(e: &dicomdec_parser::stateful::decode::Error) -> bool {
    use dicomdec_encoding::decode::Error as DecodeError;
    use dicomdec_parser::stateful::decode::Error as StatefulError;
    match e {
        StatefulError::DecodeElementHeader {
            source: DecodeError::ReadHeaderTag { source, .. },
            ..
        } => source.kind() == ErrorKind::UnexpectedEof,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_strings_parse_like_atoi() {
        assert_eq!(parse_is(b"128"), 128);
        assert_eq!(parse_is(b"128 "), 128);
        assert_eq!(parse_is(b"0128\0"), 128);
        assert_eq!(parse_is(b"-1024"), -1024);
        assert_eq!(parse_is(b"+3"), 3);
        assert_eq!(parse_is(b"40.5"), 40);
        assert_eq!(parse_is(b"2\\3"), 2);
        assert_eq!(parse_is(b""), 0);
        assert_eq!(parse_is(b"abc"), 0);
    }

    #[test]
    fn decimal_strings_parse_like_atof() {
        assert_eq!(parse_ds(b"40"), 40.0);
        assert_eq!(parse_ds(b"33.33 "), 33.33);
        assert_eq!(parse_ds(b"-0.5\0"), -0.5);
        assert_eq!(parse_ds(b"1.0\\2.0"), 1.0);
        assert_eq!(parse_ds(b"1e3"), 1000.0);
        assert_eq!(parse_ds(b""), 0.0);
    }

    #[test]
    fn image_state_tracks_elements() {
        let mut state = ScanState::default();
        state.apply_image_element(0x0010, &512u16.to_le_bytes());
        state.apply_image_element(0x0011, &256u16.to_le_bytes());
        state.apply_image_element(0x0100, &16u16.to_le_bytes());
        state.apply_image_element(0x0101, &12u16.to_le_bytes());
        state.apply_image_element(0x0004, b"MONOCHROME1 ");
        state.apply_image_element(0x0103, &0u16.to_le_bytes());
        state.apply_image_element(0x0120, &63488u16.to_le_bytes());
        state.apply_image_element(0x1050, b"40");
        state.apply_image_element(0x1051, b"400");
        state.apply_image_element(0x1052, b"-1024");
        state.apply_image_element(0x1053, b"2");
        state.apply_image_element(0x0008, b"3");
        state.apply_multiframe_element(0x1063, b"40.0");

        assert_eq!(state.height, 512);
        assert_eq!(state.width, 256);
        assert_eq!(state.bits_allocated, 16);
        assert_eq!(state.bits_stored, 12);
        assert_eq!(
            state.photometric,
            PhotometricInterpretation::Monochrome1
        );
        assert_eq!(state.pixel_representation, 0);
        assert_eq!(state.pixel_padding, Some(63488));
        assert_eq!(state.level, Some(40));
        assert_eq!(state.window, Some(400));
        assert_eq!(state.rescale, Rescale::new(2, -1024));
        assert_eq!(state.nb_frames, 3);
        assert_eq!(state.frame_delay, 40.0);
    }

    #[test]
    fn caller_overrides_latch_window_and_level() {
        let mut state = ScanState::default();
        state.window = Some(1500);
        state.level = Some(300);
        state.window_locked = true;
        state.level_locked = true;

        state.apply_image_element(0x1050, b"40");
        state.apply_image_element(0x1051, b"400");
        assert_eq!(state.window, Some(1500));
        assert_eq!(state.level, Some(300));
    }

    #[test]
    fn zero_frame_count_is_ignored() {
        let mut state = ScanState::default();
        state.apply_image_element(0x0008, b"0");
        assert_eq!(state.nb_frames, 1);
    }
}
