//! High-level reading of DICOM streams for the `dicomdec` crates.
//!
//! This crate turns a byte source holding a DICOM Part-10 file into
//! (a) textual metadata entries for the patient, study and series
//! attributes found along the way, and (b) one packet of raw pixel
//! bytes per image frame, ready for the pixel decoder in
//! `dicomdec-pixeldata`.
//!
//! # Example
//!
//! ```no_run
//! use dicomdec_stream::{DicomReader, ReadOptions};
//! use std::fs::File;
//! use std::io::BufReader;
//!
//! let file = BufReader::new(File::open("image.dcm")?);
//! let mut reader = DicomReader::new(file, ReadOptions::default())?;
//! while let Some(packet) = reader.read_packet()? {
//!     println!("frame at pts {} ({} bytes)", packet.pts, packet.data.len());
//! }
//! # Result::<(), Box<dyn std::error::Error>>::Ok(())
//! ```
pub mod format;
pub mod meta;
pub mod read;

pub use crate::meta::FileMetaScan;
pub use crate::read::{DicomReader, Packet, ReadOptions, StreamInfo};

/// Number of preamble bytes before the magic code.
pub const PREAMBLE_SIZE: usize = 128;

/// The magic code expected right after the preamble.
pub const MAGIC_CODE: &[u8; 4] = b"DICM";

/// The score returned by [`probe`] on a positive match.
pub const PROBE_SCORE_MAX: u8 = 100;

/// Check whether the given file prefix looks like a DICOM stream.
///
/// Returns [`PROBE_SCORE_MAX`] exactly when bytes 128..132 spell
/// `DICM`, and 0 in every other case, including prefixes too short
/// to tell.
pub fn probe(prefix: &[u8]) -> u8 {
    match prefix.get(PREAMBLE_SIZE..PREAMBLE_SIZE + MAGIC_CODE.len()) {
        Some(magic) if magic == MAGIC_CODE => PROBE_SCORE_MAX,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn probe_requires_the_magic_at_128() {
        let mut prefix = vec![0u8; 132];
        assert_eq!(probe(&prefix), 0);

        prefix[128..132].copy_from_slice(b"DICM");
        assert_eq!(probe(&prefix), PROBE_SCORE_MAX);

        // arbitrary preamble content is fine
        for (i, b) in prefix.iter_mut().enumerate().take(128) {
            *b = i as u8;
        }
        assert_eq!(probe(&prefix), PROBE_SCORE_MAX);

        // magic anywhere else does not count
        let mut shifted = vec![0u8; 140];
        shifted[0..4].copy_from_slice(b"DICM");
        assert_eq!(probe(&shifted), 0);

        // too short to tell
        assert_eq!(probe(b"DICM"), 0);
        assert_eq!(probe(&prefix[..131]), 0);
    }
}
