//! PNM header parsing and PGM pixel decoding.

use super::token::{Tokenizer, parse_u32};
use super::{PNM_MAX_DIMENSION, PnmHeader, read_pgm_header};
use crate::decode::{DecodeInfo, DecodeOutput};
use crate::error::BitmapError;
use crate::image::{GrayImage, pixel_count};
use crate::limits::{Limits, check_optional};

/// Parse magic, width, height and maxval, in that order.
///
/// The single byte following maxval is consumed; `data_offset` points just
/// past it.
pub(crate) fn parse_header(data: &[u8]) -> Result<PnmHeader, BitmapError> {
    let mut tokens = Tokenizer::new(data);

    let magic_token = tokens.next_token()?;
    if magic_token[0] != b'P' {
        return Err(BitmapError::UnrecognizedFormat);
    }
    let magic = parse_u32(&magic_token[1..]).ok_or_else(|| {
        BitmapError::InvalidHeader(alloc::format!(
            "magic number '{}' is not P<digit>",
            alloc::string::String::from_utf8_lossy(magic_token)
        ))
    })?;

    let width = tokens.next_u32("width")?;
    let height = tokens.next_u32("height")?;
    if width == 0 || height == 0 {
        return Err(BitmapError::InvalidHeader(alloc::format!(
            "the dimensions {width} x {height} are unacceptable"
        )));
    }
    if width > PNM_MAX_DIMENSION || height > PNM_MAX_DIMENSION {
        return Err(BitmapError::DimensionsTooLarge {
            width: u64::from(width),
            height: u64::from(height),
        });
    }

    let maxval = tokens.next_u32("maxval")?;
    tokens.skip_byte();

    let header = PnmHeader {
        magic,
        width,
        height,
        maxval,
        data_offset: tokens.position(),
    };
    if let Some(warning) = header.warning() {
        log::warn!("PNM header: {warning}");
    }
    log::trace!("PNM header: P{magic} {width}x{height} maxval {maxval}");
    Ok(header)
}

/// Decode a PGM into a freshly allocated image.
pub(crate) fn decode_pgm(
    data: &[u8],
    limits: Option<&Limits>,
) -> Result<DecodeOutput, BitmapError> {
    let header = read_pgm_header(data)?;
    let len = pixel_count(header.width, header.height)?;
    check_optional(limits, header.width, header.height, len)?;
    let src = pixel_data(data, &header, len)?;

    let image = GrayImage::from_pixels(header.width, header.height, src.to_vec())?;
    Ok(DecodeOutput::new(image, header.warning().into_iter().collect()))
}

/// Decode a PGM into a caller-supplied buffer, which is not resized.
pub(crate) fn decode_pgm_into(
    data: &[u8],
    limits: Option<&Limits>,
    out: &mut [u8],
) -> Result<DecodeInfo, BitmapError> {
    let header = read_pgm_header(data)?;
    let len = pixel_count(header.width, header.height)?;
    check_optional(limits, header.width, header.height, len)?;
    let src = pixel_data(data, &header, len)?;
    if out.len() < len {
        return Err(BitmapError::BufferTooSmall {
            needed: len,
            actual: out.len(),
        });
    }

    out[..len].copy_from_slice(src);
    Ok(DecodeInfo {
        width: header.width,
        height: header.height,
        stride: header.width as usize,
        warnings: header.warning().into_iter().collect(),
    })
}

/// The `len` pixel bytes following the header, or `UnexpectedEof` if the
/// input is shorter.
fn pixel_data<'d>(
    data: &'d [u8],
    header: &PnmHeader,
    len: usize,
) -> Result<&'d [u8], BitmapError> {
    let end = header
        .data_offset
        .checked_add(len)
        .ok_or(BitmapError::UnexpectedEof)?;
    data.get(header.data_offset..end).ok_or(BitmapError::UnexpectedEof)
}
