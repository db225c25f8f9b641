//! Grayscale pixel decoding for the `dicomdec` crates.
//!
//! This crate turns the raw pixel payload of one frame into 8-bit
//! grayscale samples. The pipeline interprets each stored sample under
//! the declared pixel representation, detects the pixel padding value,
//! masks the sample down to the stored bit width, applies the modality
//! rescale, maps the result through the window/level contrast function,
//! and finally inverts the output for MONOCHROME1 images.
//!
//! Only the MONOCHROME1 and MONOCHROME2 photometric interpretations are
//! supported, with 8, 16 or 32 bits allocated per sample. 8-bit samples
//! take a shortcut by default and pass through with only the bit mask
//! applied, as such files are usually display ready; see
//! [`MonoDecoder::with_raw_8bit`].

pub mod transform;

pub use crate::transform::{Rescale, WindowLevel, DEFAULT_LEVEL, DEFAULT_WINDOW};

use byteorder::{ByteOrder, LittleEndian};
use snafu::{ensure, Backtrace, Snafu};

/// Size in bytes of the image parameter block exchanged between the
/// stream reader and the pixel decoder.
pub const EXTRADATA_SIZE: usize = 20;

/// Number of zeroed padding bytes appended to the image parameter block.
pub const EXTRADATA_PADDING: usize = 64;

#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum Error {
    #[snafu(display("Unsupported photometric interpretation {:?}", photometric))]
    UnsupportedPhotometric {
        photometric: PhotometricInterpretation,
        backtrace: Backtrace,
    },

    #[snafu(display("Unsupported bits allocated {}", bits_allocated))]
    UnsupportedBitsAllocated {
        bits_allocated: u16,
        backtrace: Backtrace,
    },

    #[snafu(display(
        "Pixel data too short: the frame requires {} bytes but carries {}",
        expected,
        got
    ))]
    ShortPixelData {
        expected: usize,
        got: usize,
        backtrace: Backtrace,
    },

    #[snafu(display(
        "Image parameter block too short: expected {} bytes, got {}",
        expected,
        got
    ))]
    ShortExtradata {
        expected: usize,
        got: usize,
        backtrace: Backtrace,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// How the stored pixel samples are meant to be displayed.
///
/// Only the two monochrome interpretations can be decoded; the others
/// are recognized so that they can be reported by name.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PhotometricInterpretation {
    /// Not declared, or declared with an unrecognized value.
    Unset,
    /// Grayscale with 0 displayed as white.
    Monochrome1,
    /// Grayscale with 0 displayed as black.
    Monochrome2,
    /// Indexed color through palette lookup tables.
    PaletteColor,
    /// Interleaved red, green and blue samples.
    Rgb,
}

impl PhotometricInterpretation {
    /// Match a trimmed Code String value from the image information
    /// group. Unrecognized strings come out as [`Unset`](Self::Unset).
    pub fn from_cs(value: &str) -> Self {
        match value {
            "MONOCHROME1" => PhotometricInterpretation::Monochrome1,
            "MONOCHROME2" => PhotometricInterpretation::Monochrome2,
            "PALETTE COLOR" => PhotometricInterpretation::PaletteColor,
            "RGB" => PhotometricInterpretation::Rgb,
            _ => PhotometricInterpretation::Unset,
        }
    }

    /// The numeric code used in the image parameter block.
    pub fn code(self) -> i32 {
        match self {
            PhotometricInterpretation::Unset => 0,
            PhotometricInterpretation::Monochrome1 => 1,
            PhotometricInterpretation::Monochrome2 => 2,
            PhotometricInterpretation::PaletteColor => 3,
            PhotometricInterpretation::Rgb => 4,
        }
    }

    /// Recover an interpretation from its numeric code.
    pub fn from_code(code: i32) -> Self {
        match code {
            1 => PhotometricInterpretation::Monochrome1,
            2 => PhotometricInterpretation::Monochrome2,
            3 => PhotometricInterpretation::PaletteColor,
            4 => PhotometricInterpretation::Rgb,
            _ => PhotometricInterpretation::Unset,
        }
    }

    /// Whether this interpretation is one of the monochrome pair.
    pub fn is_monochrome(self) -> bool {
        matches!(
            self,
            PhotometricInterpretation::Monochrome1 | PhotometricInterpretation::Monochrome2
        )
    }
}

impl Default for PhotometricInterpretation {
    fn default() -> Self {
        PhotometricInterpretation::Monochrome2
    }
}

/// The per-image decoding parameters which the stream reader snapshots
/// when it reaches the pixel data element, serialized as five 32-bit
/// little endian integers followed by a zeroed padding tail.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ImageParams {
    /// The photometric interpretation.
    pub photometric: PhotometricInterpretation,
    /// 0 for unsigned samples, 1 for two's complement samples.
    pub pixel_representation: u16,
    /// The stored sample value which means "no data", if declared.
    pub pixel_padding: Option<i32>,
    /// The modality rescale function.
    pub rescale: Rescale,
}

/// The sentinel stored in the parameter block when no pixel padding
/// value was declared.
const NO_PADDING: i32 = i32::MIN;

impl Default for ImageParams {
    fn default() -> Self {
        ImageParams {
            photometric: PhotometricInterpretation::default(),
            pixel_representation: 0,
            pixel_padding: None,
            rescale: Rescale::default(),
        }
    }
}

impl ImageParams {
    /// Serialize the parameters into an extradata block.
    pub fn to_extradata(&self) -> Vec<u8> {
        let mut out = vec![0u8; EXTRADATA_SIZE + EXTRADATA_PADDING];
        LittleEndian::write_i32(&mut out[0..4], self.photometric.code());
        LittleEndian::write_i32(&mut out[4..8], i32::from(self.pixel_representation));
        LittleEndian::write_i32(&mut out[8..12], self.pixel_padding.unwrap_or(NO_PADDING));
        LittleEndian::write_i32(&mut out[12..16], self.rescale.slope);
        LittleEndian::write_i32(&mut out[16..20], self.rescale.intercept);
        out
    }

    /// Deserialize the parameters from an extradata block.
    pub fn from_extradata(data: &[u8]) -> Result<Self> {
        ensure!(
            data.len() >= EXTRADATA_SIZE + EXTRADATA_PADDING,
            ShortExtradataSnafu {
                expected: EXTRADATA_SIZE + EXTRADATA_PADDING,
                got: data.len(),
            }
        );
        let padding = LittleEndian::read_i32(&data[8..12]);
        Ok(ImageParams {
            photometric: PhotometricInterpretation::from_code(LittleEndian::read_i32(&data[0..4])),
            pixel_representation: LittleEndian::read_i32(&data[4..8]) as u16,
            pixel_padding: if padding == NO_PADDING {
                None
            } else {
                Some(padding)
            },
            rescale: Rescale::new(
                LittleEndian::read_i32(&data[12..16]),
                LittleEndian::read_i32(&data[16..20]),
            ),
        })
    }
}

/// A decoded GRAY8 image frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// `width × height` grayscale samples, row major.
    pub data: Vec<u8>,
    /// Frame width in pixels.
    pub width: u16,
    /// Frame height in pixels.
    pub height: u16,
    /// Presentation timestamp on a 1/1000 time base.
    pub pts: i64,
    /// Display duration on a 1/1000 time base.
    pub duration: i64,
}

/// A decoder of monochrome pixel data into GRAY8 frames.
#[derive(Debug, Clone)]
pub struct MonoDecoder {
    width: u16,
    height: u16,
    bits_allocated: u16,
    params: ImageParams,
    window_level: WindowLevel,
    bitmask: i64,
    /// pass 8-bit samples through with only the bit mask applied
    raw_8bit: bool,
}

impl MonoDecoder {
    /// Create a decoder for frames of the given geometry.
    ///
    /// `window_level` may be omitted, in which case the built-in
    /// defaults apply. Fails right away when the photometric
    /// interpretation is not monochrome or the sample width is not
    /// one of 8, 16 or 32 bits.
    pub fn new(
        width: u16,
        height: u16,
        bits_allocated: u16,
        bits_stored: u16,
        params: ImageParams,
        window_level: Option<WindowLevel>,
    ) -> Result<Self> {
        ensure!(
            params.photometric.is_monochrome(),
            UnsupportedPhotometricSnafu {
                photometric: params.photometric,
            }
        );
        ensure!(
            matches!(bits_allocated, 8 | 16 | 32),
            UnsupportedBitsAllocatedSnafu { bits_allocated }
        );
        if window_level.is_none() {
            tracing::debug!(
                "No window/level available; falling back to {}/{}",
                DEFAULT_WINDOW,
                DEFAULT_LEVEL
            );
        }
        // files missing Bits Stored keep the full sample width
        let effective_bits = if bits_stored == 0 || bits_stored > 32 {
            bits_allocated
        } else {
            bits_stored
        };
        Ok(MonoDecoder {
            width,
            height,
            bits_allocated,
            params,
            window_level: window_level.unwrap_or_default(),
            bitmask: (1i64 << effective_bits) - 1,
            raw_8bit: true,
        })
    }

    /// Control the 8-bit sample shortcut.
    ///
    /// 8-bit DICOM files are usually display ready, so by default their
    /// samples pass straight through with only the bit mask applied,
    /// skipping padding, rescale and window/level. Pass `false` to run
    /// the full pipeline for them as well. Has no effect on 16-bit or
    /// 32-bit samples.
    pub fn with_raw_8bit(mut self, raw_8bit: bool) -> Self {
        self.raw_8bit = raw_8bit;
        self
    }

    fn signed(&self) -> bool {
        self.params.pixel_representation == 1
    }

    /// The pixel padding value compared against interpreted samples.
    /// The wire carries the padding as an unsigned 16-bit value, so for
    /// signed representations it is sign extended to the sample width.
    fn effective_padding(&self) -> Option<i64> {
        let pad = self.params.pixel_padding?;
        if !self.signed() {
            return Some(i64::from(pad));
        }
        match self.bits_allocated {
            8 => Some(i64::from(pad as u8 as i8)),
            16 => Some(i64::from(pad as u16 as i16)),
            _ => Some(i64::from(pad)),
        }
    }

    /// Map one interpreted sample value to its display byte.
    fn transform(&self, value: i64, padding: Option<i64>) -> u8 {
        if padding == Some(value) {
            return 0;
        }
        // masking a negative sample would destroy its sign
        let value = if value > 0 { value & self.bitmask } else { value };
        let value = self.params.rescale.apply(value);
        let out = self.window_level.apply(value);
        match self.params.photometric {
            PhotometricInterpretation::Monochrome1 => 255 - out,
            _ => out,
        }
    }

    /// Decode one frame's pixel payload into GRAY8 samples.
    pub fn decode(&self, data: &[u8]) -> Result<Vec<u8>> {
        let size = usize::from(self.width) * usize::from(self.height);
        let expected = size * usize::from(self.bits_allocated) / 8;
        ensure!(
            data.len() >= expected,
            ShortPixelDataSnafu {
                expected,
                got: data.len(),
            }
        );

        let padding = self.effective_padding();
        let mut out = Vec::with_capacity(size);
        match self.bits_allocated {
            8 => {
                for &byte in &data[..size] {
                    let value = if self.signed() {
                        i64::from(byte as i8)
                    } else {
                        i64::from(byte)
                    };
                    if self.raw_8bit {
                        let value = if value > 0 { value & self.bitmask } else { value };
                        out.push(value as u8);
                    } else {
                        out.push(self.transform(value, padding));
                    }
                }
            }
            16 => {
                for chunk in data[..expected].chunks_exact(2) {
                    let raw = LittleEndian::read_u16(chunk);
                    let value = if self.signed() {
                        i64::from(raw as i16)
                    } else {
                        i64::from(raw)
                    };
                    out.push(self.transform(value, padding));
                }
            }
            32 => {
                for chunk in data[..expected].chunks_exact(4) {
                    let raw = LittleEndian::read_u32(chunk);
                    let value = if self.signed() {
                        i64::from(raw as i32)
                    } else {
                        i64::from(raw)
                    };
                    out.push(self.transform(value, padding));
                }
            }
            bits_allocated => {
                return UnsupportedBitsAllocatedSnafu { bits_allocated }.fail();
            }
        }
        Ok(out)
    }

    /// Decode one frame and stamp it with the given timing.
    pub fn decode_frame(&self, data: &[u8], pts: i64, duration: i64) -> Result<Frame> {
        Ok(Frame {
            data: self.decode(data)?,
            width: self.width,
            height: self.height,
            pts,
            duration,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mono2_params() -> ImageParams {
        ImageParams::default()
    }

    fn signed_params() -> ImageParams {
        ImageParams {
            pixel_representation: 1,
            ..ImageParams::default()
        }
    }

    #[test]
    fn extradata_round_trip() {
        let params = ImageParams {
            photometric: PhotometricInterpretation::Monochrome1,
            pixel_representation: 1,
            pixel_padding: Some(63488),
            rescale: Rescale::new(2, -1024),
        };
        let blob = params.to_extradata();
        assert_eq!(blob.len(), EXTRADATA_SIZE + EXTRADATA_PADDING);
        assert_eq!(ImageParams::from_extradata(&blob).unwrap(), params);

        // no padding declared maps through the sentinel
        let params = ImageParams::default();
        let blob = params.to_extradata();
        assert_eq!(ImageParams::from_extradata(&blob).unwrap(), params);
    }

    #[test]
    fn short_extradata_is_rejected() {
        let err = ImageParams::from_extradata(&[0u8; EXTRADATA_SIZE]).unwrap_err();
        assert!(matches!(err, Error::ShortExtradata { .. }));
    }

    #[test]
    fn rejects_unsupported_geometry() {
        let err = MonoDecoder::new(1, 1, 12, 12, mono2_params(), None).unwrap_err();
        assert!(matches!(err, Error::UnsupportedBitsAllocated { .. }));

        let params = ImageParams {
            photometric: PhotometricInterpretation::Rgb,
            ..ImageParams::default()
        };
        let err = MonoDecoder::new(1, 1, 8, 8, params, None).unwrap_err();
        assert!(matches!(err, Error::UnsupportedPhotometric { .. }));
    }

    #[test]
    fn rejects_short_pixel_payload() {
        let dec = MonoDecoder::new(2, 2, 16, 12, mono2_params(), None).unwrap();
        let err = dec.decode(&[0u8; 7]).unwrap_err();
        assert!(matches!(err, Error::ShortPixelData { .. }));
    }

    #[test]
    fn sixteen_bit_signed_window() {
        // bits stored 12, slope 1, intercept 0, level 0, window 4096
        let dec = MonoDecoder::new(
            1,
            1,
            16,
            12,
            signed_params(),
            Some(WindowLevel::new(4096, 0)),
        )
        .unwrap();

        // 0x0800 = 2048: above the window maximum of 2047
        assert_eq!(dec.decode(&[0x00, 0x08]).unwrap(), vec![255]);
        // 0xF800 = -2048 signed: at the window minimum
        assert_eq!(dec.decode(&[0x00, 0xF8]).unwrap(), vec![0]);
    }

    #[test]
    fn monochrome1_inverts_the_output() {
        let wl = WindowLevel::new(4096, 0);
        let mono2 =
            MonoDecoder::new(1, 1, 16, 12, signed_params(), Some(wl)).unwrap();
        let params = ImageParams {
            photometric: PhotometricInterpretation::Monochrome1,
            ..signed_params()
        };
        let mono1 = MonoDecoder::new(1, 1, 16, 12, params, Some(wl)).unwrap();

        // the window minimum maps to 0 and inverts to full white
        assert_eq!(mono1.decode(&[0x00, 0xF8]).unwrap(), vec![255]);

        // inversion holds pixelwise over a sample sweep
        for raw in [0x0000u16, 0x0001, 0x0400, 0x07FF, 0x0800, 0xF800, 0xFFFF] {
            let bytes = raw.to_le_bytes();
            let out2 = mono2.decode(&bytes).unwrap()[0];
            let out1 = mono1.decode(&bytes).unwrap()[0];
            assert_eq!(out1, 255 - out2, "sample {:#06x}", raw);
        }
    }

    #[test]
    fn padding_pixels_map_to_black() {
        let params = ImageParams {
            pixel_padding: Some(0x0FFF),
            ..ImageParams::default()
        };
        let dec = MonoDecoder::new(
            2,
            1,
            16,
            12,
            params,
            Some(WindowLevel::new(4096, 2048)),
        )
        .unwrap();
        // first sample is the padding value, second is in-window
        let out = dec.decode(&[0xFF, 0x0F, 0x00, 0x08]).unwrap();
        assert_eq!(out[0], 0);
        assert_ne!(out[1], 0);
    }

    #[test]
    fn signed_padding_is_sign_extended() {
        // padding read from the wire as u16 0xF800; samples are signed,
        // so -2048 must be recognized as padding
        let params = ImageParams {
            pixel_padding: Some(0xF800),
            ..signed_params()
        };
        let dec = MonoDecoder::new(
            1,
            1,
            16,
            16,
            params,
            Some(WindowLevel::new(8192, 0)),
        )
        .unwrap();
        assert_eq!(dec.decode(&[0x00, 0xF8]).unwrap(), vec![0]);
    }

    #[test]
    fn full_range_window_is_identity_for_bytes() {
        // window 256 centered on 128 makes the full 8-bit pipeline
        // an identity, same as the default shortcut
        let dec = MonoDecoder::new(
            4,
            1,
            8,
            8,
            mono2_params(),
            Some(WindowLevel::new(256, 128)),
        )
        .unwrap()
        .with_raw_8bit(false);
        let input = [0x00, 0x40, 0x80, 0xFF];
        assert_eq!(dec.decode(&input).unwrap(), input.to_vec());
    }

    #[test]
    fn eight_bit_samples_pass_through_by_default() {
        let dec = MonoDecoder::new(4, 1, 8, 8, mono2_params(), None).unwrap();
        let input = [0x00, 0x40, 0x80, 0xFF];
        assert_eq!(dec.decode(&input).unwrap(), input.to_vec());

        // signed samples survive the round trip as raw bytes too
        let dec = MonoDecoder::new(4, 1, 8, 8, signed_params(), None).unwrap();
        assert_eq!(dec.decode(&input).unwrap(), input.to_vec());

        // bits stored 7 masks the top bit of positive samples
        let dec = MonoDecoder::new(4, 1, 8, 7, mono2_params(), None).unwrap();
        assert_eq!(dec.decode(&input).unwrap(), vec![0x00, 0x40, 0x00, 0x7F]);
    }

    #[test]
    fn thirty_two_bit_samples_are_supported() {
        let dec = MonoDecoder::new(
            1,
            1,
            32,
            16,
            mono2_params(),
            Some(WindowLevel::new(65536, 32768)),
        )
        .unwrap();
        assert_eq!(dec.decode(&[0xFF, 0xFF, 0x00, 0x00]).unwrap(), vec![255]);
        assert_eq!(dec.decode(&[0x00, 0x00, 0x00, 0x00]).unwrap(), vec![0]);
    }
}
