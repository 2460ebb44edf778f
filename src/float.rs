//! Float images and their conversion to 8-bit rasters for visualization.
//!
//! Pyramid levels, gradient maps and residuals are `f32` rasters. Two
//! mappings turn them into bytes:
//!
//! - [`FloatImage::to_gray_normalized`] scans for min and max and stretches
//!   that range to 0..=255.
//! - [`FloatImage::to_gray_abs_scaled`] maps `|v| * 255 / scale` with a fixed
//!   caller-supplied range, clamping at 255.

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use crate::error::BitmapError;
use crate::image::{GrayImage, pixel_count};

/// Owned single-channel f32 image in row-major layout.
///
/// The sample buffer is allocated once with exactly `ncols * nrows` values
/// and never resized.
#[derive(Clone, Debug, PartialEq)]
pub struct FloatImage {
    ncols: u32,
    nrows: u32,
    data: Box<[f32]>,
}

impl FloatImage {
    /// Zero-initialized image.
    pub fn new(ncols: u32, nrows: u32) -> Result<Self, BitmapError> {
        let len = pixel_count(ncols, nrows)?;
        Ok(Self {
            ncols,
            nrows,
            data: vec![0.0; len].into_boxed_slice(),
        })
    }

    /// Wrap `data`, which must hold exactly `ncols * nrows` samples.
    pub fn from_vec(ncols: u32, nrows: u32, data: Vec<f32>) -> Result<Self, BitmapError> {
        let len = pixel_count(ncols, nrows)?;
        if data.len() != len {
            return Err(BitmapError::InvalidParameter(alloc::format!(
                "expected {len} samples for {ncols}x{nrows}, got {}",
                data.len()
            )));
        }
        Ok(Self {
            ncols,
            nrows,
            data: data.into_boxed_slice(),
        })
    }

    pub fn ncols(&self) -> u32 {
        self.ncols
    }

    pub fn nrows(&self) -> u32 {
        self.nrows
    }

    pub fn data(&self) -> &[f32] {
        &self.data
    }

    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Option<f32> {
        if x >= self.ncols || y >= self.nrows {
            return None;
        }
        Some(self.data[y as usize * self.ncols as usize + x as usize])
    }

    /// # Panics
    /// If `(x, y)` is outside the image.
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, v: f32) {
        assert!(x < self.ncols && y < self.nrows, "({x}, {y}) out of bounds");
        self.data[y as usize * self.ncols as usize + x as usize] = v;
    }

    /// Smallest and largest sample. `None` for an empty image.
    ///
    /// NaN samples are ignored.
    pub fn min_max(&self) -> Option<(f32, f32)> {
        if self.data.is_empty() {
            return None;
        }
        let (min, max) = self
            .data
            .iter()
            .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            });
        Some((min, max))
    }

    /// Stretch `[min, max]` to `[0, 255]`, rounding half up.
    ///
    /// A constant image maps to all zeros.
    pub fn to_gray_normalized(&self) -> Result<GrayImage, BitmapError> {
        let pixels = match self.min_max() {
            Some((min, max)) if max > min => {
                let scale = 255.0 / (max - min);
                self.data
                    .iter()
                    .map(|&v| to_byte((v - min) * scale + 0.5))
                    .collect()
            }
            _ => vec![0u8; self.data.len()],
        };
        GrayImage::from_pixels(self.ncols, self.nrows, pixels)
    }

    /// Map `|v| * 255 / scale`, clamped to 255 and truncated.
    ///
    /// `scale` must be finite and positive.
    pub fn to_gray_abs_scaled(&self, scale: f32) -> Result<GrayImage, BitmapError> {
        if !(scale.is_finite() && scale > 0.0) {
            return Err(BitmapError::InvalidParameter(alloc::format!(
                "scale must be finite and positive, got {scale}"
            )));
        }
        let fact = 255.0 / scale;
        let pixels = self.data.iter().map(|&v| to_byte(v.abs() * fact)).collect();
        GrayImage::from_pixels(self.ncols, self.nrows, pixels)
    }

    /// Text dump of the window at `(x0, y0)` of size `width x height`.
    ///
    /// Each sample is printed as `{:6.2} `, one image row per line, with a
    /// blank line before and after.
    pub fn sub_image_table(
        &self,
        x0: u32,
        y0: u32,
        width: u32,
        height: u32,
    ) -> Result<String, BitmapError> {
        let fits = x0.checked_add(width).is_some_and(|x1| x1 <= self.ncols)
            && y0.checked_add(height).is_some_and(|y1| y1 <= self.nrows);
        if !fits {
            return Err(BitmapError::InvalidParameter(alloc::format!(
                "window {width}x{height} at ({x0}, {y0}) exceeds {}x{} image",
                self.ncols, self.nrows
            )));
        }

        let mut out = String::from("\n");
        for y in y0..y0 + height {
            let start = y as usize * self.ncols as usize + x0 as usize;
            for v in &self.data[start..start + width as usize] {
                out.push_str(&alloc::format!("{v:6.2} "));
            }
            out.push('\n');
        }
        out.push('\n');
        Ok(out)
    }
}

/// Saturating float-to-byte cast; NaN becomes 0.
#[inline]
fn to_byte(v: f32) -> u8 {
    v.clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_three_samples() {
        let img = FloatImage::from_vec(3, 1, vec![0.0, 5.0, 10.0]).unwrap();
        let gray = img.to_gray_normalized().unwrap();
        let p = gray.pixels();
        assert_eq!(p[0], 0);
        assert!((127..=129).contains(&p[1]), "got {}", p[1]);
        assert_eq!(p[2], 255);
    }

    #[test]
    fn normalize_negative_range() {
        let img = FloatImage::from_vec(2, 1, vec![-4.0, -2.0]).unwrap();
        assert_eq!(img.to_gray_normalized().unwrap().pixels(), &[0, 255]);
    }

    #[test]
    fn normalize_constant_image_is_black() {
        let img = FloatImage::from_vec(2, 2, vec![3.5; 4]).unwrap();
        assert_eq!(img.to_gray_normalized().unwrap().pixels(), &[0; 4]);
    }

    #[test]
    fn abs_scale_clamps() {
        let img = FloatImage::from_vec(4, 1, vec![-1.0, 0.5, 2.0, 0.0]).unwrap();
        let gray = img.to_gray_abs_scaled(1.0).unwrap();
        assert_eq!(gray.pixels(), &[255, 127, 255, 0]);
    }

    #[test]
    fn abs_scale_rejects_bad_scale() {
        let img = FloatImage::new(1, 1).unwrap();
        assert!(img.to_gray_abs_scaled(0.0).is_err());
        assert!(img.to_gray_abs_scaled(-2.0).is_err());
        assert!(img.to_gray_abs_scaled(f32::NAN).is_err());
    }

    #[test]
    fn from_vec_checks_length() {
        assert!(FloatImage::from_vec(2, 2, vec![0.0; 5]).is_err());
    }

    #[test]
    fn sub_image_table_format() {
        let mut img = FloatImage::new(3, 2).unwrap();
        img.set(1, 0, 1.5);
        img.set(2, 1, -12.25);
        let table = img.sub_image_table(1, 0, 2, 2).unwrap();
        assert_eq!(table, "\n  1.50   0.00 \n  0.00 -12.25 \n\n");
        assert!(img.sub_image_table(2, 0, 2, 1).is_err());
    }
}
