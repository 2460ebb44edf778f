use alloc::string::String;

/// Errors from PNM/BMP decoding and encoding.
///
/// Every variant is fatal for the operation that produced it; nothing is
/// retried and no partial image is returned.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum BitmapError {
    #[error("unrecognized format magic bytes")]
    UnrecognizedFormat,

    #[error("invalid header: {0}")]
    InvalidHeader(String),

    #[error("magic number is not 'P{expected}', but 'P{found}'")]
    MagicMismatch { expected: u32, found: u32 },

    #[error("unsupported format variant: {0}")]
    UnsupportedVariant(String),

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u64, height: u64 },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("unexpected end of input")]
    UnexpectedEof,

    #[error("buffer too small: need {needed} bytes, got {actual}")]
    BufferTooSmall { needed: usize, actual: usize },

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[cfg(feature = "std")]
    #[error("can't access file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Non-fatal conditions found while decoding.
///
/// Decoding continues with the declared value; downstream code still treats
/// samples as 8-bit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum FormatWarning {
    /// PNM maxval other than 255.
    NonStandardMaxval(u32),
    /// BMP `biClrUsed` disagrees with the number of palette entries before
    /// the pixel data.
    PaletteCountMismatch { declared: u32, found: u32 },
}

impl core::fmt::Display for FormatWarning {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::NonStandardMaxval(v) => write!(f, "maxval is not 255, but {v}"),
            Self::PaletteCountMismatch { declared, found } => write!(
                f,
                "palette declares {declared} colors but {found} entries precede pixel data"
            ),
        }
    }
}
