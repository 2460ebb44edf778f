//! File-path entry points.
//!
//! Each call opens its file, runs to completion and closes the handle on
//! every return path. Reads load the whole file and decode from memory;
//! writes encode into memory and then write the file in one pass.

use std::fs::File;
use std::io::{BufWriter, Write as _};
use std::path::Path;
use std::vec::Vec;

use crate::decode::{DecodeInfo, DecodeOutput, DecodeRequest};
use crate::error::BitmapError;
use crate::float::FloatImage;
use crate::image::{GrayImage, RgbPlanes};
use crate::pnm::{self, PnmHeader};

fn io_error(path: &Path, source: std::io::Error) -> BitmapError {
    BitmapError::Io {
        path: path.display().to_string(),
        source,
    }
}

fn read_file(path: &Path) -> Result<Vec<u8>, BitmapError> {
    let data = std::fs::read(path).map_err(|e| io_error(path, e))?;
    log::debug!("read {} bytes from {}", data.len(), path.display());
    Ok(data)
}

fn write_file(path: &Path, bytes: &[u8]) -> Result<(), BitmapError> {
    let file = File::create(path).map_err(|e| io_error(path, e))?;
    let mut writer = BufWriter::new(file);
    writer.write_all(bytes).map_err(|e| io_error(path, e))?;
    writer.flush().map_err(|e| io_error(path, e))?;
    log::debug!("wrote {} bytes to {}", bytes.len(), path.display());
    Ok(())
}

/// Read a `P5` file into a newly allocated image.
pub fn read_pgm_file(path: impl AsRef<Path>) -> Result<DecodeOutput, BitmapError> {
    let data = read_file(path.as_ref())?;
    DecodeRequest::new(&data).decode_pgm()
}

/// Read a `P5` file into a caller-owned buffer.
pub fn read_pgm_file_into(
    path: impl AsRef<Path>,
    out: &mut [u8],
) -> Result<DecodeInfo, BitmapError> {
    let data = read_file(path.as_ref())?;
    DecodeRequest::new(&data).decode_pgm_into(out)
}

/// Read only the header of a `P5` file.
pub fn read_pgm_header_file(path: impl AsRef<Path>) -> Result<PnmHeader, BitmapError> {
    pnm::read_pgm_header(&read_file(path.as_ref())?)
}

/// Read only the header of a `P6` file.
pub fn read_ppm_header_file(path: impl AsRef<Path>) -> Result<PnmHeader, BitmapError> {
    pnm::read_ppm_header(&read_file(path.as_ref())?)
}

pub fn write_pgm_file(path: impl AsRef<Path>, image: &GrayImage) -> Result<(), BitmapError> {
    write_file(path.as_ref(), &crate::encode_pgm(image)?)
}

pub fn write_ppm_file(path: impl AsRef<Path>, planes: &RgbPlanes<'_>) -> Result<(), BitmapError> {
    write_file(path.as_ref(), &crate::encode_ppm(planes)?)
}

/// Read an 8-bit BMP into a newly allocated image.
pub fn read_bmp_gray_file(path: impl AsRef<Path>) -> Result<DecodeOutput, BitmapError> {
    let data = read_file(path.as_ref())?;
    DecodeRequest::new(&data).decode_bmp_gray()
}

/// Read an 8-bit BMP into a caller-owned buffer at the file's row stride.
pub fn read_bmp_gray_file_into(
    path: impl AsRef<Path>,
    out: &mut [u8],
) -> Result<DecodeInfo, BitmapError> {
    let data = read_file(path.as_ref())?;
    DecodeRequest::new(&data).decode_bmp_gray_into(out)
}

pub fn write_bmp_gray_file(path: impl AsRef<Path>, image: &GrayImage) -> Result<(), BitmapError> {
    write_file(path.as_ref(), &crate::encode_bmp_gray(image)?)
}

pub fn write_bmp_rgb_file(
    path: impl AsRef<Path>,
    planes: &RgbPlanes<'_>,
) -> Result<(), BitmapError> {
    write_file(path.as_ref(), &crate::encode_bmp_rgb(planes)?)
}

/// Write the same planes as PPM and as 24-bit BMP.
pub fn write_ppm_and_bmp_rgb_files(
    ppm_path: impl AsRef<Path>,
    bmp_path: impl AsRef<Path>,
    planes: &RgbPlanes<'_>,
) -> Result<(), BitmapError> {
    write_ppm_file(ppm_path, planes)?;
    write_bmp_rgb_file(bmp_path, planes)
}

/// Min/max-normalize `image` and write the bytes as both PGM and 8-bit BMP.
pub fn write_float_image_pgm_and_bmp(
    image: &FloatImage,
    pgm_path: impl AsRef<Path>,
    bmp_path: impl AsRef<Path>,
) -> Result<(), BitmapError> {
    let gray = image.to_gray_normalized()?;
    write_pgm_file(pgm_path, &gray)?;
    write_bmp_gray_file(bmp_path, &gray)
}

/// Map `|v| * 255 / scale` and write the bytes as PGM.
pub fn write_abs_float_image_pgm(
    image: &FloatImage,
    pgm_path: impl AsRef<Path>,
    scale: f32,
) -> Result<(), BitmapError> {
    write_pgm_file(pgm_path, &image.to_gray_abs_scaled(scale)?)
}
