//! Owned 8-bit rasters and borrowed RGB channel planes.

use alloc::vec;
use alloc::vec::Vec;

use crate::error::BitmapError;

/// Owned single-channel 8-bit raster.
///
/// `width` is the true pixel width; `stride` is the number of bytes between
/// the starts of consecutive rows. They are equal for PNM-origin images and
/// differ for BMP-origin images whose width is not a multiple of 4.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GrayImage {
    width: u32,
    height: u32,
    stride: usize,
    pixels: Vec<u8>,
}

impl GrayImage {
    /// Zero-filled image with `stride == width`.
    pub fn new(width: u32, height: u32) -> Result<Self, BitmapError> {
        let len = pixel_count(width, height)?;
        Ok(Self {
            width,
            height,
            stride: width as usize,
            pixels: vec![0; len],
        })
    }

    /// Wrap a tightly packed buffer of exactly `width * height` bytes.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, BitmapError> {
        let needed = pixel_count(width, height)?;
        if pixels.len() != needed {
            return Err(BitmapError::InvalidParameter(alloc::format!(
                "expected {needed} pixels for {width}x{height}, got {}",
                pixels.len()
            )));
        }
        Ok(Self {
            width,
            height,
            stride: width as usize,
            pixels,
        })
    }

    /// Wrap a padded buffer of exactly `stride * height` bytes.
    pub(crate) fn from_padded(width: u32, height: u32, stride: usize, pixels: Vec<u8>) -> Self {
        debug_assert!(stride >= width as usize);
        debug_assert_eq!(pixels.len(), stride * height as usize);
        Self {
            width,
            height,
            stride,
            pixels,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Bytes per stored row, including any padding.
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Whether rows are stored without padding.
    pub fn is_packed(&self) -> bool {
        self.stride == self.width as usize
    }

    /// The whole backing buffer, padding included.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Pixels of row `y`, padding excluded.
    ///
    /// # Panics
    /// If `y >= height`.
    pub fn row(&self, y: u32) -> &[u8] {
        let start = y as usize * self.stride;
        &self.pixels[start..start + self.width as usize]
    }

    /// Iterate over rows top to bottom, padding excluded.
    pub fn rows(&self) -> impl DoubleEndedIterator<Item = &[u8]> + ExactSizeIterator {
        let w = self.width as usize;
        self.pixels
            .chunks_exact(self.stride.max(1))
            .take(self.height as usize)
            .map(move |row| &row[..w])
    }

    pub fn get(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get(y as usize * self.stride + x as usize).copied()
    }

    /// Copy into a tightly packed `width * height` buffer.
    pub fn to_packed(&self) -> Vec<u8> {
        if self.is_packed() {
            return self.pixels.clone();
        }
        let mut out = Vec::with_capacity(self.width as usize * self.height as usize);
        for row in self.rows() {
            out.extend_from_slice(row);
        }
        out
    }
}

/// Three borrowed channel planes of identical dimensions, each row-major
/// with no padding.
#[derive(Clone, Copy, Debug)]
pub struct RgbPlanes<'a> {
    pub(crate) red: &'a [u8],
    pub(crate) green: &'a [u8],
    pub(crate) blue: &'a [u8],
    pub(crate) width: u32,
    pub(crate) height: u32,
}

impl<'a> RgbPlanes<'a> {
    /// Returns [`BitmapError::BufferTooSmall`] if any plane is shorter than
    /// `width * height`.
    pub fn new(
        red: &'a [u8],
        green: &'a [u8],
        blue: &'a [u8],
        width: u32,
        height: u32,
    ) -> Result<Self, BitmapError> {
        let needed = pixel_count(width, height)?;
        for plane in [red, green, blue] {
            if plane.len() < needed {
                return Err(BitmapError::BufferTooSmall {
                    needed,
                    actual: plane.len(),
                });
            }
        }
        Ok(Self {
            red,
            green,
            blue,
            width,
            height,
        })
    }

    /// All three planes set to the same gray raster.
    pub fn from_gray(image: &'a GrayImage) -> Result<Self, BitmapError> {
        if !image.is_packed() {
            return Err(BitmapError::InvalidParameter(
                "gray image must be packed to be used as RGB planes".into(),
            ));
        }
        let p = image.pixels();
        Self::new(p, p, p, image.width(), image.height())
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// (red, green, blue) at linear index `idx`.
    pub(crate) fn rgb(&self, idx: usize) -> (u8, u8, u8) {
        (self.red[idx], self.green[idx], self.blue[idx])
    }
}

/// `width * height` with overflow reported as an error.
pub(crate) fn pixel_count(width: u32, height: u32) -> Result<usize, BitmapError> {
    (width as usize)
        .checked_mul(height as usize)
        .ok_or(BitmapError::DimensionsTooLarge {
            width: u64::from(width),
            height: u64::from(height),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn padded_rows_exclude_padding() {
        let img = GrayImage::from_padded(2, 2, 4, vec![10, 20, 0, 0, 30, 40, 0, 0]);
        assert_eq!(img.row(0), &[10, 20]);
        assert_eq!(img.row(1), &[30, 40]);
        assert_eq!(img.to_packed(), vec![10, 20, 30, 40]);
        assert_eq!(img.get(1, 1), Some(40));
        assert_eq!(img.get(2, 0), None);
        assert!(!img.is_packed());
    }

    #[test]
    fn from_pixels_checks_length() {
        assert!(GrayImage::from_pixels(2, 2, vec![0; 3]).is_err());
        assert!(GrayImage::from_pixels(2, 2, vec![0; 4]).is_ok());
    }

    #[test]
    fn planes_reject_short_channel() {
        let full = [0u8; 6];
        let short = [0u8; 5];
        let err = RgbPlanes::new(&full, &short, &full, 3, 2).unwrap_err();
        assert!(matches!(
            err,
            BitmapError::BufferTooSmall {
                needed: 6,
                actual: 5
            }
        ));
    }
}
