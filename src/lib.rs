//! # kltbitmaps
//!
//! PGM/PPM and BMP codecs plus float-image export, used to read input frames
//! for a pyramidal KLT feature tracker and to visualize its pyramid levels,
//! gradient maps and tracked features.
//!
//! ## Supported Formats
//!
//! - **P5** (PGM binary): read and write, 8-bit.
//! - **P6** (PPM binary): write from three channel planes; header read.
//! - **BMP**: 8-bit gray with identity palette (read and write), 24-bit RGB
//!   (write). Uncompressed, bottom-up rows padded to 4 bytes.
//!
//! BMP-decoded images keep the true width and the 4-byte row stride as
//! separate values; see [`GrayImage::stride`].
//!
//! ## Non-Goals
//!
//! - ASCII PNM formats (P1, P2, P3) and 16-bit samples
//! - Compressed, palettized-color or top-down BMP
//! - The tracker itself (feature selection, pyramid construction)
//!
//! ## Usage
//!
//! ```no_run
//! use kltbitmaps::{DecodeRequest, FloatImage, GrayImage};
//!
//! let data: &[u8] = &[]; // your PGM bytes
//! let decoded = DecodeRequest::new(data).decode_pgm()?;
//! for warning in &decoded.warnings {
//!     eprintln!("warning: {warning}");
//! }
//!
//! let bmp = kltbitmaps::encode_bmp_gray(&decoded.image)?;
//!
//! let level = FloatImage::from_vec(3, 1, vec![0.0, 5.0, 10.0])?;
//! let gray: GrayImage = level.to_gray_normalized()?;
//! let pgm = kltbitmaps::encode_pgm(&gray)?;
//! # let _ = (bmp, pgm);
//! # Ok::<(), kltbitmaps::BitmapError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod decode;
mod error;
mod float;
mod image;
mod info;
mod limits;
mod pixel;

pub mod bmp;
pub mod pnm;

#[cfg(feature = "std")]
mod fs;
#[cfg(feature = "std")]
pub mod paths;

use alloc::vec::Vec;

// Re-exports
pub use decode::{DecodeInfo, DecodeOutput, DecodeRequest};
pub use error::{BitmapError, FormatWarning};
pub use float::FloatImage;
pub use image::{GrayImage, RgbPlanes};
pub use info::{BitmapFormat, ImageInfo};
pub use limits::Limits;
pub use pixel::{PixelKind, row_stride};

#[cfg(feature = "std")]
pub use fs::{
    read_bmp_gray_file, read_bmp_gray_file_into, read_pgm_file, read_pgm_file_into,
    read_pgm_header_file, read_ppm_header_file, write_abs_float_image_pgm, write_bmp_gray_file,
    write_bmp_rgb_file, write_float_image_pgm_and_bmp, write_pgm_file,
    write_ppm_and_bmp_rgb_files, write_ppm_file,
};

/// Decode a `P5` image.
pub fn decode_pgm(data: &[u8]) -> Result<DecodeOutput, BitmapError> {
    DecodeRequest::new(data).decode_pgm()
}

/// Decode an 8-bit BMP image.
pub fn decode_bmp_gray(data: &[u8]) -> Result<DecodeOutput, BitmapError> {
    DecodeRequest::new(data).decode_bmp_gray()
}

/// Encode as `P5`.
pub fn encode_pgm(image: &GrayImage) -> Result<Vec<u8>, BitmapError> {
    pnm::encode_pgm(image)
}

/// Encode as `P6`.
pub fn encode_ppm(planes: &RgbPlanes<'_>) -> Result<Vec<u8>, BitmapError> {
    pnm::encode_ppm(planes)
}

/// Encode as 8-bit BMP with an identity grayscale palette.
pub fn encode_bmp_gray(image: &GrayImage) -> Result<Vec<u8>, BitmapError> {
    bmp::encode_gray(image)
}

/// Encode as 24-bit BMP.
pub fn encode_bmp_rgb(planes: &RgbPlanes<'_>) -> Result<Vec<u8>, BitmapError> {
    bmp::encode_rgb(planes)
}
