//! Path helpers for choosing where visualization output goes.

use std::path::{Path, PathBuf};
use std::string::String;

use crate::error::BitmapError;

/// An input path split into directory, base name and extension.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathParts {
    /// Directory including its trailing separator, `./` when none was given.
    pub dir: String,
    /// File name without extension.
    pub base: String,
    /// Extension including the leading dot, empty when there is none.
    pub ext: String,
}

/// Split `input` at the last `/` or `\` and at the last `.` of the file name.
pub fn split_path(input: &str) -> PathParts {
    let (dir, file) = match input.rfind(['/', '\\']) {
        Some(sep) => (&input[..=sep], &input[sep + 1..]),
        None => ("./", input),
    };
    let (base, ext) = match file.rfind('.') {
        Some(dot) if dot > 0 => (&file[..dot], &file[dot..]),
        _ => (file, ""),
    };
    PathParts {
        dir: dir.into(),
        base: base.into(),
        ext: ext.into(),
    }
}

/// `base/name`, created (with parents) when absent.
pub fn ensure_output_dir(base: impl AsRef<Path>, name: &str) -> Result<PathBuf, BitmapError> {
    let dir = base.as_ref().join(name);
    if !dir.is_dir() {
        std::fs::create_dir_all(&dir).map_err(|source| BitmapError::Io {
            path: dir.display().to_string(),
            source,
        })?;
        log::debug!("created output directory {}", dir.display());
    }
    Ok(dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_with_directory() {
        let parts = split_path("../pic/1.bmp");
        assert_eq!(parts.dir, "../pic/");
        assert_eq!(parts.base, "1");
        assert_eq!(parts.ext, ".bmp");
    }

    #[test]
    fn split_windows_separator() {
        let parts = split_path("C:\\data\\frame_02.pgm");
        assert_eq!(parts.dir, "C:\\data\\");
        assert_eq!(parts.base, "frame_02");
        assert_eq!(parts.ext, ".pgm");
    }

    #[test]
    fn split_bare_file_name() {
        let parts = split_path("img2.pgm");
        assert_eq!(parts.dir, "./");
        assert_eq!(parts.base, "img2");
        assert_eq!(parts.ext, ".pgm");
    }

    #[test]
    fn split_without_extension() {
        let parts = split_path("out/.hidden");
        assert_eq!(parts.base, ".hidden");
        assert_eq!(parts.ext, "");
    }
}
