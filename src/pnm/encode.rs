//! PNM encoder: P5 from a gray raster, P6 from three channel planes.

use alloc::format;
use alloc::vec::Vec;

use crate::error::BitmapError;
use crate::image::{GrayImage, RgbPlanes, pixel_count};

/// `P5\n<w> <h>\n255\n` followed by one unpadded row per line of the image.
pub(crate) fn encode_pgm(image: &GrayImage) -> Result<Vec<u8>, BitmapError> {
    let (width, height) = (image.width(), image.height());
    let header = format!("P5\n{width} {height}\n255\n");
    let body = pixel_count(width, height)?;
    let mut out = Vec::with_capacity(header.len().saturating_add(body));
    out.extend_from_slice(header.as_bytes());

    for row in image.rows() {
        out.extend_from_slice(row);
    }

    Ok(out)
}

/// `P6\n<w> <h>\n255\n` followed by interleaved R,G,B bytes, top to bottom.
pub(crate) fn encode_ppm(planes: &RgbPlanes<'_>) -> Result<Vec<u8>, BitmapError> {
    let (width, height) = (planes.width(), planes.height());
    let header = format!("P6\n{width} {height}\n255\n");
    let count = pixel_count(width, height)?;
    let body = count.checked_mul(3).ok_or(BitmapError::DimensionsTooLarge {
        width: u64::from(width),
        height: u64::from(height),
    })?;
    let mut out = Vec::with_capacity(header.len().saturating_add(body));
    out.extend_from_slice(header.as_bytes());

    for idx in 0..count {
        let (r, g, b) = planes.rgb(idx);
        out.push(r);
        out.push(g);
        out.push(b);
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn pgm_layout_is_exact() {
        let img = GrayImage::from_pixels(2, 2, vec![10, 20, 30, 40]).unwrap();
        let out = encode_pgm(&img).unwrap();
        assert_eq!(out, b"P5\n2 2\n255\n\x0a\x14\x1e\x28");
    }

    #[test]
    fn pgm_drops_row_padding() {
        let img = GrayImage::from_padded(2, 2, 4, vec![1, 2, 0, 0, 3, 4, 0, 0]);
        let out = encode_pgm(&img).unwrap();
        assert_eq!(&out[11..], &[1, 2, 3, 4]);
    }

    #[test]
    fn ppm_interleaves_planes() {
        let r = [1u8, 4];
        let g = [2u8, 5];
        let b = [3u8, 6];
        let planes = RgbPlanes::new(&r, &g, &b, 2, 1).unwrap();
        let out = encode_ppm(&planes).unwrap();
        assert_eq!(out, b"P6\n2 1\n255\n\x01\x02\x03\x04\x05\x06");
    }
}
