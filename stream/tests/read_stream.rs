//! End-to-end tests over synthetic DICOM files assembled in memory.

use dicomdec_encoding::transfer_syntax::TransferSyntax;
use dicomdec_pixeldata::{ImageParams, MonoDecoder};
use dicomdec_stream::{probe, DicomReader, ReadOptions, PROBE_SCORE_MAX};
use std::io::Cursor;

const IMPLICIT_UID: &[u8] = b"1.2.840.10008.1.2\0";
const EXPLICIT_UID: &[u8] = b"1.2.840.10008.1.2.1\0";

/// An element in the Explicit VR Little Endian encoding,
/// using the long header form when the VR demands it.
fn explicit_element(group: u16, element: u16, vr: &[u8; 2], value: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    out.extend_from_slice(&group.to_le_bytes());
    out.extend_from_slice(&element.to_le_bytes());
    out.extend_from_slice(vr);
    match vr {
        b"OB" | b"OD" | b"OF" | b"OL" | b"OV" | b"OW" | b"SQ" | b"SV" | b"UC" | b"UR" | b"UT"
        | b"UN" | b"UV" => {
            out.extend_from_slice(&[0, 0]);
            out.extend_from_slice(&(value.len() as u32).to_le_bytes());
        }
        _ => out.extend_from_slice(&(value.len() as u16).to_le_bytes()),
    }
    out.extend_from_slice(value);
    out
}

/// An element in the Implicit VR Little Endian encoding.
fn implicit_element(group: u16, element: u16, value: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    out.extend_from_slice(&group.to_le_bytes());
    out.extend_from_slice(&element.to_le_bytes());
    out.extend_from_slice(&(value.len() as u32).to_le_bytes());
    out.extend_from_slice(value);
    out
}

/// Preamble, magic code and a minimal meta group declaring `ts_uid`.
fn file_prefix(ts_uid: &[u8]) -> Vec<u8> {
    let ts = explicit_element(0x0002, 0x0010, b"UI", ts_uid);
    let mut out = vec![0u8; 128];
    out.extend_from_slice(b"DICM");
    out.extend_from_slice(&explicit_element(
        0x0002,
        0x0000,
        b"UL",
        &(ts.len() as u32).to_le_bytes(),
    ));
    out.extend_from_slice(&ts);
    out
}

#[test]
fn minimal_explicit_file() {
    let raw = file_prefix(EXPLICIT_UID);
    assert_eq!(probe(&raw), PROBE_SCORE_MAX);

    let mut reader = DicomReader::new(Cursor::new(raw), ReadOptions::default())
        .expect("header should parse");
    assert_eq!(reader.transfer_syntax(), TransferSyntax::ExplicitVrLittleEndian);
    assert_eq!(reader.file_meta().entries.len(), 1);
    assert_eq!(
        reader.file_meta().entries[0],
        (
            "(0002,0010) Transfer Syntax UID".to_string(),
            "1.2.840.10008.1.2.1".to_string()
        )
    );

    // no pixel data: the stream just ends
    assert_eq!(reader.read_packet().unwrap(), None);
    assert_eq!(reader.read_packet().unwrap(), None);
}

#[test]
fn corrupt_magic_fails_probe_and_open() {
    let mut raw = file_prefix(EXPLICIT_UID);
    raw[128..132].copy_from_slice(b"JUNK");
    assert_eq!(probe(&raw), 0);
    assert!(DicomReader::new(Cursor::new(raw), ReadOptions::default()).is_err());
}

#[test]
fn implicit_eight_bit_frame_decodes_to_input() {
    let mut raw = file_prefix(IMPLICIT_UID);
    raw.extend_from_slice(&implicit_element(0x0028, 0x0010, &2u16.to_le_bytes()));
    raw.extend_from_slice(&implicit_element(0x0028, 0x0011, &2u16.to_le_bytes()));
    raw.extend_from_slice(&implicit_element(0x0028, 0x0100, &8u16.to_le_bytes()));
    raw.extend_from_slice(&implicit_element(0x0028, 0x0101, &8u16.to_le_bytes()));
    raw.extend_from_slice(&implicit_element(0x0028, 0x1050, b"128 "));
    raw.extend_from_slice(&implicit_element(0x0028, 0x1051, b"256 "));
    let pixels = [0x00u8, 0x40, 0x80, 0xFF];
    raw.extend_from_slice(&implicit_element(0x7FE0, 0x0010, &pixels));

    let mut reader =
        DicomReader::new(Cursor::new(raw), ReadOptions::default()).unwrap();
    assert_eq!(reader.transfer_syntax(), TransferSyntax::ImplicitVrLittleEndian);

    let packet = reader.read_packet().unwrap().expect("one frame");
    assert_eq!(packet.data, pixels);
    assert_eq!(packet.pts, 0);

    let info = reader.stream_info();
    assert_eq!((info.width, info.height), (2, 2));
    assert_eq!(info.bits_per_raw_sample, 8);
    assert_eq!(info.nb_frames, 1);
    assert_eq!(info.time_base, (1, 1000));
    assert_eq!(info.start_time, 0);

    // window/level from the file: center 128, width 256
    let wl = reader.window_level().expect("window/level from the file");
    assert_eq!((wl.window, wl.level), (256, 128));

    // feed the packet through the pixel pipeline via the extradata contract
    let extradata = reader.extradata().expect("snapshot at pixel data");
    let params = ImageParams::from_extradata(extradata).unwrap();
    let decoder = MonoDecoder::new(
        info.width,
        info.height,
        info.bits_per_raw_sample,
        info.bits_per_coded_sample,
        params,
        Some(wl),
    )
    .unwrap();
    assert_eq!(decoder.decode(&packet.data).unwrap(), pixels.to_vec());

    // single frame: the stream ends afterwards
    assert_eq!(reader.read_packet().unwrap(), None);
}

#[test]
fn multi_frame_packets_carry_increasing_pts() {
    let mut raw = file_prefix(EXPLICIT_UID);
    raw.extend_from_slice(&explicit_element(0x0028, 0x0010, b"US", &1u16.to_le_bytes()));
    raw.extend_from_slice(&explicit_element(0x0028, 0x0011, b"US", &2u16.to_le_bytes()));
    raw.extend_from_slice(&explicit_element(0x0028, 0x0100, b"US", &16u16.to_le_bytes()));
    raw.extend_from_slice(&explicit_element(0x0028, 0x0101, b"US", &12u16.to_le_bytes()));
    raw.extend_from_slice(&explicit_element(0x0028, 0x0008, b"IS", b"3 "));
    raw.extend_from_slice(&explicit_element(0x0018, 0x1063, b"DS", b"40"));

    // 3 frames of 1x2 pixels, 2 bytes each
    let frames: [&[u8]; 3] = [
        &[0x01, 0x00, 0x02, 0x00],
        &[0x03, 0x00, 0x04, 0x00],
        &[0x05, 0x00, 0x06, 0x00],
    ];
    let pixel_data = frames.concat();
    raw.extend_from_slice(&explicit_element(0x7FE0, 0x0010, b"OW", &pixel_data));
    let pixel_data_pos = (raw.len() - pixel_data.len()) as u64;

    let mut reader =
        DicomReader::new(Cursor::new(raw), ReadOptions::default()).unwrap();

    for (k, frame) in frames.iter().enumerate() {
        let packet = reader.read_packet().unwrap().expect("a frame packet");
        assert_eq!(packet.data, *frame);
        assert_eq!(packet.pts, 40 * k as i64);
        assert_eq!(packet.duration, 40);
        assert_eq!(packet.pos, pixel_data_pos + 4 * k as u64);
    }
    assert_eq!(reader.read_packet().unwrap(), None);

    let info = reader.stream_info();
    assert_eq!(info.nb_frames, 3);
    assert_eq!(info.duration, 120);
}

#[test]
fn metadata_is_collected_when_enabled() {
    let mut raw = file_prefix(EXPLICIT_UID);
    raw.extend_from_slice(&explicit_element(0x0008, 0x0060, b"CS", b"CT"));
    raw.extend_from_slice(&explicit_element(0x0010, 0x0010, b"PN", b"Doe^John"));
    // a private element outside the dictionary: read but not emitted
    raw.extend_from_slice(&explicit_element(0x0009, 0x0001, b"LO", b"vendor"));

    let options = ReadOptions {
        metadata: true,
        ..ReadOptions::default()
    };
    let mut reader = DicomReader::new(Cursor::new(raw), options).unwrap();
    assert_eq!(reader.read_packet().unwrap(), None);

    let expected = vec![
        ("(0008,0060) Modality".to_string(), "CT".to_string()),
        (
            "(0010,0010) Patient's Name".to_string(),
            "Doe^John".to_string(),
        ),
    ];
    assert_eq!(reader.metadata(), expected.as_slice());
}

#[test]
fn metadata_is_skipped_by_default() {
    let mut raw = file_prefix(EXPLICIT_UID);
    raw.extend_from_slice(&explicit_element(0x0008, 0x0060, b"CS", b"CT"));

    let mut reader =
        DicomReader::new(Cursor::new(raw), ReadOptions::default()).unwrap();
    assert_eq!(reader.read_packet().unwrap(), None);
    assert!(reader.metadata().is_empty());
}

#[test]
fn undefined_length_sequences_are_consumed_in_passing() {
    let mut raw = file_prefix(EXPLICIT_UID);
    raw.extend_from_slice(&explicit_element(0x0028, 0x0010, b"US", &1u16.to_le_bytes()));
    raw.extend_from_slice(&explicit_element(0x0028, 0x0011, b"US", &1u16.to_le_bytes()));
    raw.extend_from_slice(&explicit_element(0x0028, 0x0100, b"US", &8u16.to_le_bytes()));
    raw.extend_from_slice(&explicit_element(0x0028, 0x0101, b"US", &8u16.to_le_bytes()));

    // (0008,1140) SQ of undefined length with one empty item; even with
    // metadata disabled the scanner must walk it to find the pixel data
    raw.extend_from_slice(&[
        0x08, 0x00, 0x40, 0x11, b'S', b'Q', 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0xFE, 0xFF, 0x00,
        0xE0, 0x00, 0x00, 0x00, 0x00, 0xFE, 0xFF, 0xDD, 0xE0, 0x00, 0x00, 0x00, 0x00,
    ]);
    raw.extend_from_slice(&explicit_element(0x7FE0, 0x0010, b"OW", &[0x7F]));

    let mut reader =
        DicomReader::new(Cursor::new(raw), ReadOptions::default()).unwrap();
    let packet = reader.read_packet().unwrap().expect("the frame after the sequence");
    assert_eq!(packet.data, vec![0x7F]);
}

#[test]
fn caller_window_level_overrides_the_file() {
    let mut raw = file_prefix(EXPLICIT_UID);
    raw.extend_from_slice(&explicit_element(0x0028, 0x1050, b"IS", b"128 "));
    raw.extend_from_slice(&explicit_element(0x0028, 0x1051, b"IS", b"256 "));

    let options = ReadOptions {
        window: Some(4096),
        level: Some(0),
        metadata: false,
    };
    let mut reader = DicomReader::new(Cursor::new(raw), options).unwrap();
    assert_eq!(reader.read_packet().unwrap(), None);

    let wl = reader.window_level().unwrap();
    assert_eq!((wl.window, wl.level), (4096, 0));
}

#[test]
fn trailing_elements_after_pixel_data_are_tolerated() {
    let mut raw = file_prefix(EXPLICIT_UID);
    raw.extend_from_slice(&explicit_element(0x0028, 0x0010, b"US", &1u16.to_le_bytes()));
    raw.extend_from_slice(&explicit_element(0x0028, 0x0011, b"US", &1u16.to_le_bytes()));
    raw.extend_from_slice(&explicit_element(0x0028, 0x0100, b"US", &8u16.to_le_bytes()));
    raw.extend_from_slice(&explicit_element(0x0028, 0x0101, b"US", &8u16.to_le_bytes()));
    raw.extend_from_slice(&explicit_element(0x7FE0, 0x0010, b"OW", &[0x42]));
    raw.extend_from_slice(&explicit_element(0x0008, 0x0060, b"CS", b"CT"));

    let mut reader =
        DicomReader::new(Cursor::new(raw), ReadOptions::default()).unwrap();
    assert!(reader.read_packet().unwrap().is_some());
    // the trailing element is scanned through before the end of stream
    assert_eq!(reader.read_packet().unwrap(), None);
}

#[test]
fn truncated_pixel_data_is_fatal() {
    let mut raw = file_prefix(EXPLICIT_UID);
    raw.extend_from_slice(&explicit_element(0x0028, 0x0010, b"US", &2u16.to_le_bytes()));
    raw.extend_from_slice(&explicit_element(0x0028, 0x0011, b"US", &2u16.to_le_bytes()));
    // announce 4 bytes of pixel data but provide only 2
    let mut element = explicit_element(0x7FE0, 0x0010, b"OW", &[0u8; 4]);
    element.truncate(element.len() - 2);
    raw.extend_from_slice(&element);

    let mut reader =
        DicomReader::new(Cursor::new(raw), ReadOptions::default()).unwrap();
    assert!(reader.read_packet().is_err());
}
