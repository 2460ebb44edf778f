/// Pixel kind of an encoded raster.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PixelKind {
    /// Single channel, 8-bit grayscale.
    Gray8,
    /// 3 channels, 8-bit RGB (stored as separate planes in memory).
    Rgb8,
}

impl PixelKind {
    /// Bits per pixel in a BMP file.
    pub fn bits_per_pixel(&self) -> u16 {
        match self {
            Self::Gray8 => 8,
            Self::Rgb8 => 24,
        }
    }

    /// Number of BMP color table entries written for this kind.
    pub fn palette_entries(&self) -> usize {
        match self {
            Self::Gray8 => 256,
            Self::Rgb8 => 0,
        }
    }
}

/// Bytes per encoded row, padded to a 4-byte boundary.
///
/// Returns `None` when the computation overflows.
pub fn row_stride(width: usize, bits_per_pixel: u16) -> Option<usize> {
    width
        .checked_mul(usize::from(bits_per_pixel))
        .map(|bits| bits.div_ceil(32) * 4)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stride_rounds_to_four_bytes() {
        assert_eq!(row_stride(1, 24), Some(4));
        assert_eq!(row_stride(10, 8), Some(12));
        assert_eq!(row_stride(4, 8), Some(4));
        assert_eq!(row_stride(5, 24), Some(16));
        assert_eq!(row_stride(0, 8), Some(0));
        assert_eq!(row_stride(usize::MAX, 24), None);
    }

    #[test]
    fn kinds() {
        assert_eq!(PixelKind::Gray8.bits_per_pixel(), 8);
        assert_eq!(PixelKind::Rgb8.bits_per_pixel(), 24);
        assert_eq!(PixelKind::Gray8.palette_entries() * 4, 1024);
        assert_eq!(PixelKind::Rgb8.palette_entries(), 0);
    }
}
