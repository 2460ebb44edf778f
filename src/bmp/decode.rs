//! 8-bit BMP decoder.
//!
//! Rows are stored bottom-up at a 4-byte stride. The decoded image keeps the
//! file's stride, so `GrayImage::stride()` is the width rounded up to a
//! multiple of 4 while `GrayImage::width()` stays the true width.

use alloc::vec;

use super::header::BmpHeaders;
use crate::decode::{DecodeInfo, DecodeOutput};
use crate::error::BitmapError;
use crate::image::GrayImage;
use crate::limits::{Limits, check_optional};

/// Validated geometry of an 8-bit bottom-up BMP.
struct GrayLayout {
    width: u32,
    height: u32,
    stride: usize,
    len: usize,
    data_offset: usize,
}

fn gray_layout(headers: &BmpHeaders) -> Result<GrayLayout, BitmapError> {
    let info = &headers.info;
    if info.bits_per_pixel != 8 {
        return Err(BitmapError::UnsupportedVariant(alloc::format!(
            "expected an 8-bit BMP, got {} bits per pixel",
            info.bits_per_pixel
        )));
    }
    if info.compression != 0 {
        return Err(BitmapError::UnsupportedVariant(alloc::format!(
            "BMP compression {} is not supported",
            info.compression
        )));
    }
    if info.height < 0 {
        return Err(BitmapError::UnsupportedVariant(
            "top-down BMP is not supported".into(),
        ));
    }
    if info.width <= 0 || info.height == 0 {
        return Err(BitmapError::InvalidHeader(alloc::format!(
            "the dimensions {} x {} are unacceptable",
            info.width, info.height
        )));
    }

    let width = info.width as u32;
    let height = info.height as u32;
    let stride = headers.stride()?;
    let len = stride
        .checked_mul(height as usize)
        .ok_or(BitmapError::DimensionsTooLarge {
            width: u64::from(width),
            height: u64::from(height),
        })?;
    Ok(GrayLayout {
        width,
        height,
        stride,
        len,
        data_offset: headers.file.data_offset as usize,
    })
}

/// The pixel bytes `layout` claims, or `UnexpectedEof` if the file is shorter.
fn pixel_data<'d>(data: &'d [u8], layout: &GrayLayout) -> Result<&'d [u8], BitmapError> {
    let end = layout
        .data_offset
        .checked_add(layout.len)
        .ok_or(BitmapError::UnexpectedEof)?;
    data.get(layout.data_offset..end).ok_or(BitmapError::UnexpectedEof)
}

/// Copy bottom-up file rows into top-down rows of `out`.
fn copy_rows_flipped(src: &[u8], stride: usize, out: &mut [u8]) {
    for (src, dst) in src.chunks_exact(stride).zip(out.chunks_exact_mut(stride).rev()) {
        dst.copy_from_slice(src);
    }
}

pub(crate) fn decode_gray(
    data: &[u8],
    limits: Option<&Limits>,
) -> Result<DecodeOutput, BitmapError> {
    let (headers, warnings) = BmpHeaders::parse(data)?;
    let layout = gray_layout(&headers)?;
    check_optional(limits, layout.width, layout.height, layout.len)?;
    let src = pixel_data(data, &layout)?;

    let mut pixels = vec![0u8; layout.len];
    copy_rows_flipped(src, layout.stride, &mut pixels);
    let image = GrayImage::from_padded(layout.width, layout.height, layout.stride, pixels);
    Ok(DecodeOutput::new(image, warnings))
}

pub(crate) fn decode_gray_into(
    data: &[u8],
    limits: Option<&Limits>,
    out: &mut [u8],
) -> Result<DecodeInfo, BitmapError> {
    let (headers, warnings) = BmpHeaders::parse(data)?;
    let layout = gray_layout(&headers)?;
    check_optional(limits, layout.width, layout.height, layout.len)?;
    let src = pixel_data(data, &layout)?;
    if out.len() < layout.len {
        return Err(BitmapError::BufferTooSmall {
            needed: layout.len,
            actual: out.len(),
        });
    }

    copy_rows_flipped(src, layout.stride, &mut out[..layout.len]);
    Ok(DecodeInfo {
        width: layout.width,
        height: layout.height,
        stride: layout.stride,
        warnings,
    })
}
