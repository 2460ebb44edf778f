use crate::bmp::BmpHeaders;
use crate::error::BitmapError;
use crate::pnm::{self, PGM_MAGIC, PPM_MAGIC};

/// Format detected from magic bytes.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BitmapFormat {
    /// P5 binary grayscale.
    Pgm,
    /// P6 binary RGB.
    Ppm,
    /// Windows bitmap.
    Bmp,
}

/// Header-level description of an encoded image.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageInfo {
    pub width: u32,
    pub height: u32,
    pub format: BitmapFormat,
    /// Bits per pixel as stored in the file.
    pub bits_per_pixel: u16,
}

impl ImageInfo {
    /// Probe the header without decoding pixels.
    pub fn from_bytes(data: &[u8]) -> Result<Self, BitmapError> {
        match data {
            [b'B', b'M', ..] => {
                let (headers, _) = BmpHeaders::parse(data)?;
                Ok(Self {
                    width: headers.info.width.unsigned_abs(),
                    height: headers.info.height.unsigned_abs(),
                    format: BitmapFormat::Bmp,
                    bits_per_pixel: headers.info.bits_per_pixel,
                })
            }
            _ => {
                let header = pnm::read_header(data)?;
                let (format, bits_per_pixel) = match header.magic {
                    PGM_MAGIC => (BitmapFormat::Pgm, 8),
                    PPM_MAGIC => (BitmapFormat::Ppm, 24),
                    other => {
                        return Err(BitmapError::UnsupportedVariant(alloc::format!(
                            "PNM variant P{other} is not supported"
                        )));
                    }
                };
                Ok(Self {
                    width: header.width,
                    height: header.height,
                    format,
                    bits_per_pixel,
                })
            }
        }
    }
}
