//! Human readable rendering of data element values for metadata
//! emission.

use byteordered::byteorder::{ByteOrder, LittleEndian};
use dicomdec_core::{Tag, VR};

/// Compose a metadata key of the form `"(gggg,eeee) <description>"`,
/// with the tag in zero-padded lowercase hex.
pub fn tag_key(tag: Tag, description: &str) -> String {
    format!(
        "({:04x},{:04x}) {}",
        tag.group(),
        tag.element(),
        description
    )
}

/// Render a value field as a human readable string, driven by the VR.
///
/// Numeric VRs render their first value, read in little endian; a value
/// field too short for its VR renders as the empty string. String-like
/// VRs are interpreted as ASCII up to the first NUL byte.
pub fn format_value(vr: VR, data: &[u8]) -> String {
    use VR::*;
    match vr {
        AT | OB | OD | OF | OL | OV | OW => "[Binary data]".into(),
        UN | SQ => "[Sequence of items]".into(),
        FL => data
            .get(..4)
            .map(|b| format!("{:.3}", LittleEndian::read_f32(b)))
            .unwrap_or_default(),
        FD => data
            .get(..8)
            .map(|b| format!("{:.3}", LittleEndian::read_f64(b)))
            .unwrap_or_default(),
        SL => data
            .get(..4)
            .map(|b| LittleEndian::read_i32(b).to_string())
            .unwrap_or_default(),
        UL => data
            .get(..4)
            .map(|b| LittleEndian::read_u32(b).to_string())
            .unwrap_or_default(),
        SS => data
            .get(..2)
            .map(|b| LittleEndian::read_i16(b).to_string())
            .unwrap_or_default(),
        US => data
            .get(..2)
            .map(|b| LittleEndian::read_u16(b).to_string())
            .unwrap_or_default(),
        SV => data
            .get(..8)
            .map(|b| LittleEndian::read_i64(b).to_string())
            .unwrap_or_default(),
        UV => data
            .get(..8)
            .map(|b| LittleEndian::read_u64(b).to_string())
            .unwrap_or_default(),
        _ => {
            let end = data.iter().position(|&b| b == 0).unwrap_or(data.len());
            String::from_utf8_lossy(&data[..end]).into_owned()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_lowercase_hex() {
        assert_eq!(
            tag_key(Tag(0x0002, 0x0010), "Transfer Syntax UID"),
            "(0002,0010) Transfer Syntax UID"
        );
        assert_eq!(
            tag_key(Tag(0x7FE0, 0x0010), "Pixel Data"),
            "(7fe0,0010) Pixel Data"
        );
    }

    #[test]
    fn binary_and_sequence_placeholders() {
        assert_eq!(format_value(VR::OB, &[1, 2, 3]), "[Binary data]");
        assert_eq!(format_value(VR::OW, &[]), "[Binary data]");
        assert_eq!(format_value(VR::AT, &[0x08, 0x00]), "[Binary data]");
        assert_eq!(format_value(VR::SQ, &[]), "[Sequence of items]");
        assert_eq!(format_value(VR::UN, &[1]), "[Sequence of items]");
    }

    #[test]
    fn numeric_values_read_little_endian() {
        assert_eq!(format_value(VR::US, &[0x00, 0x02]), "512");
        assert_eq!(format_value(VR::SS, &[0xFF, 0xFF]), "-1");
        assert_eq!(format_value(VR::UL, &[0x04, 0x00, 0x00, 0x00]), "4");
        assert_eq!(format_value(VR::SL, &[0xFF, 0xFF, 0xFF, 0xFF]), "-1");
        assert_eq!(
            format_value(VR::UV, &[1, 0, 0, 0, 0, 0, 0, 0x80]),
            format!("{}", 0x8000_0000_0000_0001u64)
        );
        assert_eq!(
            format_value(VR::SV, &[0xFF; 8]),
            "-1"
        );
        assert_eq!(format_value(VR::FL, &1.5f32.to_le_bytes()), "1.500");
        assert_eq!(format_value(VR::FD, &0.25f64.to_le_bytes()), "0.250");
    }

    #[test]
    fn short_numeric_values_render_empty() {
        assert_eq!(format_value(VR::US, &[0x01]), "");
        assert_eq!(format_value(VR::FD, &[0; 4]), "");
    }

    #[test]
    fn strings_stop_at_the_first_nul() {
        assert_eq!(format_value(VR::UI, b"1.2.840.10008.1.2.1\0"), "1.2.840.10008.1.2.1");
        assert_eq!(format_value(VR::PN, b"Doe^John"), "Doe^John");
        assert_eq!(format_value(VR::CS, b"MONOCHROME2 "), "MONOCHROME2 ");
    }
}
