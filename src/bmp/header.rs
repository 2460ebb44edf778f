//! BMP file header, BITMAPINFOHEADER and color table.
//!
//! All multi-byte fields are little-endian. The layout written here is the
//! classic 54-byte header (14-byte file header + 40-byte info header),
//! followed by a 1024-byte identity palette for 8-bit images.

use alloc::vec::Vec;

use crate::error::{BitmapError, FormatWarning};
use crate::pixel::{PixelKind, row_stride};

/// `"BM"` read as a little-endian u16.
pub const BMP_SIGNATURE: u16 = 0x4D42;
/// File header size in bytes, signature included.
pub const FILE_HEADER_LEN: u32 = 14;
/// BITMAPINFOHEADER size in bytes.
pub const INFO_HEADER_LEN: u32 = 40;
/// File header + info header.
pub const HEADERS_LEN: u32 = FILE_HEADER_LEN + INFO_HEADER_LEN;
/// Largest color table an 8-bit image can use.
pub const MAX_PALETTE_ENTRIES: usize = 256;

/// The 12 bytes of the file header that follow the signature.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BmpFileHeader {
    pub file_size: u32,
    pub reserved1: u16,
    pub reserved2: u16,
    /// Offset of the pixel data from the start of the file (`bfOffBits`).
    pub data_offset: u32,
}

/// BITMAPINFOHEADER.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BmpInfoHeader {
    pub header_size: u32,
    pub width: i32,
    /// Positive for bottom-up row order.
    pub height: i32,
    pub planes: u16,
    pub bits_per_pixel: u16,
    /// 0 = uncompressed.
    pub compression: u32,
    pub image_size: u32,
    pub x_pels_per_meter: i32,
    pub y_pels_per_meter: i32,
    /// 0 = all colors used.
    pub colors_used: u32,
    pub colors_important: u32,
}

/// One color table entry, stored blue first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PaletteEntry {
    pub blue: u8,
    pub green: u8,
    pub red: u8,
    pub reserved: u8,
}

/// Everything that precedes the pixel data.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BmpHeaders {
    pub file: BmpFileHeader,
    pub info: BmpInfoHeader,
    /// Empty for 24-bit images; at most 256 entries.
    pub palette: Vec<PaletteEntry>,
}

/// Entry `i` maps to gray level `i`.
pub fn identity_palette() -> Vec<PaletteEntry> {
    (0..=255u8)
        .map(|i| PaletteEntry {
            blue: i,
            green: i,
            red: i,
            reserved: 0,
        })
        .collect()
}

impl BmpHeaders {
    /// Build the headers for an uncompressed bottom-up image.
    ///
    /// Gray images get 8 bits per pixel and the identity palette; RGB images
    /// get 24 bits per pixel and no palette.
    pub fn for_image(kind: PixelKind, width: u32, height: u32) -> Result<Self, BitmapError> {
        let too_large = || BitmapError::DimensionsTooLarge {
            width: u64::from(width),
            height: u64::from(height),
        };
        let bpp = kind.bits_per_pixel();
        let stride = row_stride(width as usize, bpp).ok_or_else(too_large)?;
        let image_size = stride
            .checked_mul(height as usize)
            .and_then(|n| u32::try_from(n).ok())
            .ok_or_else(too_large)?;
        let palette_len = (kind.palette_entries() * 4) as u32;
        let data_offset = HEADERS_LEN + palette_len;
        let file_size = data_offset.checked_add(image_size).ok_or_else(too_large)?;

        let palette = match kind {
            PixelKind::Gray8 => identity_palette(),
            PixelKind::Rgb8 => Vec::new(),
        };

        Ok(Self {
            file: BmpFileHeader {
                file_size,
                reserved1: 0,
                reserved2: 0,
                data_offset,
            },
            info: BmpInfoHeader {
                header_size: INFO_HEADER_LEN,
                width: i32::try_from(width).map_err(|_| too_large())?,
                height: i32::try_from(height).map_err(|_| too_large())?,
                planes: 1,
                bits_per_pixel: bpp,
                compression: 0,
                image_size,
                x_pels_per_meter: 0,
                y_pels_per_meter: 0,
                colors_used: 0,
                colors_important: 0,
            },
            palette,
        })
    }

    /// Bytes per row of pixel data.
    pub fn stride(&self) -> Result<usize, BitmapError> {
        row_stride(self.info.width.unsigned_abs() as usize, self.info.bits_per_pixel).ok_or(
            BitmapError::DimensionsTooLarge {
                width: u64::from(self.info.width.unsigned_abs()),
                height: u64::from(self.info.height.unsigned_abs()),
            },
        )
    }

    /// Append signature, file header, info header and palette to `out`.
    pub fn write(&self, out: &mut Vec<u8>) {
        // File header (14 bytes)
        out.extend_from_slice(&BMP_SIGNATURE.to_le_bytes());
        out.extend_from_slice(&self.file.file_size.to_le_bytes());
        out.extend_from_slice(&self.file.reserved1.to_le_bytes());
        out.extend_from_slice(&self.file.reserved2.to_le_bytes());
        out.extend_from_slice(&self.file.data_offset.to_le_bytes());

        // BITMAPINFOHEADER (40 bytes)
        let info = &self.info;
        out.extend_from_slice(&info.header_size.to_le_bytes());
        out.extend_from_slice(&info.width.to_le_bytes());
        out.extend_from_slice(&info.height.to_le_bytes());
        out.extend_from_slice(&info.planes.to_le_bytes());
        out.extend_from_slice(&info.bits_per_pixel.to_le_bytes());
        out.extend_from_slice(&info.compression.to_le_bytes());
        out.extend_from_slice(&info.image_size.to_le_bytes());
        out.extend_from_slice(&info.x_pels_per_meter.to_le_bytes());
        out.extend_from_slice(&info.y_pels_per_meter.to_le_bytes());
        out.extend_from_slice(&info.colors_used.to_le_bytes());
        out.extend_from_slice(&info.colors_important.to_le_bytes());

        for entry in &self.palette {
            out.extend_from_slice(&[entry.blue, entry.green, entry.red, entry.reserved]);
        }
    }

    /// Parse the headers and color table at the start of `data`.
    ///
    /// Palette entries are whatever lies between the info header and
    /// `bfOffBits`, validated against the 256-entry maximum.
    pub fn parse(data: &[u8]) -> Result<(Self, Vec<FormatWarning>), BitmapError> {
        let mut cursor = Cursor::new(data);

        if cursor.u16()? != BMP_SIGNATURE {
            return Err(BitmapError::UnrecognizedFormat);
        }

        let file = BmpFileHeader {
            file_size: cursor.u32()?,
            reserved1: cursor.u16()?,
            reserved2: cursor.u16()?,
            data_offset: cursor.u32()?,
        };

        let info = BmpInfoHeader {
            header_size: cursor.u32()?,
            width: cursor.i32()?,
            height: cursor.i32()?,
            planes: cursor.u16()?,
            bits_per_pixel: cursor.u16()?,
            compression: cursor.u32()?,
            image_size: cursor.u32()?,
            x_pels_per_meter: cursor.i32()?,
            y_pels_per_meter: cursor.i32()?,
            colors_used: cursor.u32()?,
            colors_important: cursor.u32()?,
        };
        log::trace!("BMP headers: {file:?} {info:?}");

        if info.header_size < INFO_HEADER_LEN {
            return Err(BitmapError::InvalidHeader(alloc::format!(
                "BMP info header size {} is smaller than {INFO_HEADER_LEN}",
                info.header_size
            )));
        }

        let palette_start = FILE_HEADER_LEN
            .checked_add(info.header_size)
            .ok_or_else(|| BitmapError::InvalidHeader("BMP info header size overflows".into()))?;
        if file.data_offset < palette_start {
            return Err(BitmapError::InvalidHeader(alloc::format!(
                "BMP data offset {} points inside the headers",
                file.data_offset
            )));
        }

        let entries = ((file.data_offset - palette_start) / 4) as usize;
        if entries > MAX_PALETTE_ENTRIES {
            return Err(BitmapError::InvalidHeader(alloc::format!(
                "BMP color table has {entries} entries, at most {MAX_PALETTE_ENTRIES} allowed"
            )));
        }

        cursor.seek(palette_start as usize)?;
        let mut palette = Vec::with_capacity(entries);
        for _ in 0..entries {
            let [blue, green, red, reserved] = cursor.bytes::<4>()?;
            palette.push(PaletteEntry {
                blue,
                green,
                red,
                reserved,
            });
        }

        let mut warnings = Vec::new();
        if info.colors_used != 0 && info.colors_used as usize != entries {
            let warning = FormatWarning::PaletteCountMismatch {
                declared: info.colors_used,
                found: entries as u32,
            };
            log::warn!("BMP header: {warning}");
            warnings.push(warning);
        }

        Ok((
            Self {
                file,
                info,
                palette,
            },
            warnings,
        ))
    }
}

/// Little-endian reader over a byte slice; every read is bounds-checked.
struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    fn seek(&mut self, pos: usize) -> Result<(), BitmapError> {
        if pos > self.data.len() {
            return Err(BitmapError::UnexpectedEof);
        }
        self.pos = pos;
        Ok(())
    }

    fn bytes<const N: usize>(&mut self) -> Result<[u8; N], BitmapError> {
        let end = self.pos.checked_add(N).ok_or(BitmapError::UnexpectedEof)?;
        let src = self.data.get(self.pos..end).ok_or(BitmapError::UnexpectedEof)?;
        let mut buf = [0u8; N];
        buf.copy_from_slice(src);
        self.pos = end;
        Ok(buf)
    }

    fn u16(&mut self) -> Result<u16, BitmapError> {
        self.bytes().map(u16::from_le_bytes)
    }

    fn u32(&mut self) -> Result<u32, BitmapError> {
        self.bytes().map(u32::from_le_bytes)
    }

    fn i32(&mut self) -> Result<i32, BitmapError> {
        self.bytes().map(i32::from_le_bytes)
    }
}
