//! BMP encoder: uncompressed 8-bit gray with identity palette, 24-bit RGB.

use alloc::vec::Vec;

use super::header::BmpHeaders;
use crate::error::BitmapError;
use crate::image::{GrayImage, RgbPlanes};
use crate::pixel::PixelKind;

pub(crate) fn encode_gray(image: &GrayImage) -> Result<Vec<u8>, BitmapError> {
    let headers = BmpHeaders::for_image(PixelKind::Gray8, image.width(), image.height())?;
    let stride = headers.stride()?;
    let pad_bytes = stride - image.width() as usize;

    let mut out = Vec::with_capacity(headers.file.file_size as usize);
    headers.write(&mut out);

    for row in image.rows().rev() {
        out.extend_from_slice(row);
        out.extend(core::iter::repeat_n(0u8, pad_bytes));
    }

    Ok(out)
}

pub(crate) fn encode_rgb(planes: &RgbPlanes<'_>) -> Result<Vec<u8>, BitmapError> {
    let (width, height) = (planes.width(), planes.height());
    let headers = BmpHeaders::for_image(PixelKind::Rgb8, width, height)?;
    let stride = headers.stride()?;
    let w = width as usize;
    let pad_bytes = stride - w * 3;

    let mut out = Vec::with_capacity(headers.file.file_size as usize);
    headers.write(&mut out);

    for row in (0..height as usize).rev() {
        for col in 0..w {
            let (r, g, b) = planes.rgb(row * w + col);
            out.push(b);
            out.push(g);
            out.push(r);
        }
        out.extend(core::iter::repeat_n(0u8, pad_bytes));
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn gray_rows_are_bottom_up_and_padded() {
        let img = GrayImage::from_pixels(2, 2, vec![10, 20, 30, 40]).unwrap();
        let out = encode_gray(&img).unwrap();
        assert_eq!(out.len(), 54 + 1024 + 8);
        assert_eq!(&out[54 + 1024..], &[30, 40, 0, 0, 10, 20, 0, 0]);
    }

    #[test]
    fn rgb_pixels_are_bgr() {
        let r = [1u8, 4];
        let g = [2u8, 5];
        let b = [3u8, 6];
        let planes = RgbPlanes::new(&r, &g, &b, 1, 2).unwrap();
        let out = encode_rgb(&planes).unwrap();
        assert_eq!(out.len(), 54 + 8);
        // bottom row first: pixel (r=4,g=5,b=6), then top row (1,2,3)
        assert_eq!(&out[54..], &[6, 5, 4, 0, 3, 2, 1, 0]);
    }
}
