use alloc::vec::Vec;

use crate::error::{BitmapError, FormatWarning};
use crate::image::GrayImage;
use crate::limits::Limits;

/// Decoded gray image plus any non-fatal warnings raised on the way.
#[derive(Clone, Debug)]
pub struct DecodeOutput {
    pub image: GrayImage,
    pub warnings: Vec<FormatWarning>,
}

impl DecodeOutput {
    pub(crate) fn new(image: GrayImage, warnings: Vec<FormatWarning>) -> Self {
        Self { image, warnings }
    }
}

/// Geometry of an image decoded into a caller-supplied buffer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodeInfo {
    pub width: u32,
    pub height: u32,
    /// Bytes between consecutive rows in the caller's buffer.
    pub stride: usize,
    pub warnings: Vec<FormatWarning>,
}

/// Decode request builder.
///
/// ```no_run
/// use kltbitmaps::{DecodeRequest, Limits};
///
/// let data: &[u8] = &[]; // PGM bytes
/// let limits = Limits { max_pixels: Some(1 << 20), ..Default::default() };
/// let decoded = DecodeRequest::new(data).with_limits(&limits).decode_pgm()?;
/// println!("{}x{}", decoded.image.width(), decoded.image.height());
/// # Ok::<(), kltbitmaps::BitmapError>(())
/// ```
#[derive(Clone, Copy, Debug)]
pub struct DecodeRequest<'a> {
    data: &'a [u8],
    limits: Option<&'a Limits>,
}

impl<'a> DecodeRequest<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, limits: None }
    }

    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    /// Decode a `P5` file into a newly allocated image.
    pub fn decode_pgm(self) -> Result<DecodeOutput, BitmapError> {
        crate::pnm::decode_pgm(self.data, self.limits)
    }

    /// Decode a `P5` file into `out` (rows packed, stride == width).
    pub fn decode_pgm_into(self, out: &mut [u8]) -> Result<DecodeInfo, BitmapError> {
        crate::pnm::decode_pgm_into(self.data, self.limits, out)
    }

    /// Decode an 8-bit BMP into a newly allocated image.
    ///
    /// The returned image keeps the true width; rows are stored with the
    /// file's 4-byte stride.
    pub fn decode_bmp_gray(self) -> Result<DecodeOutput, BitmapError> {
        crate::bmp::decode_gray(self.data, self.limits)
    }

    /// Decode an 8-bit BMP into `out`, rows at the file's 4-byte stride.
    pub fn decode_bmp_gray_into(self, out: &mut [u8]) -> Result<DecodeInfo, BitmapError> {
        crate::bmp::decode_gray_into(self.data, self.limits, out)
    }
}
