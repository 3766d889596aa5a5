use alloc::string::String;
use enough::StopReason;

#[cfg(feature = "std")]
use alloc::boxed::Box;
#[cfg(feature = "std")]
use std::path::PathBuf;

/// Errors from BMP decoding, encoding and file handling.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum BitmapError {
    #[error("not a BMP file (missing \"BM\" signature)")]
    UnrecognizedFormat,

    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("truncated input: need {needed} bytes at offset {offset}, have {actual}")]
    Truncated {
        offset: usize,
        needed: usize,
        actual: usize,
    },

    #[error("cannot allocate pixel buffer for {width}x{height} at {bytes_per_pixel} bytes per pixel")]
    Allocation {
        width: u32,
        height: u32,
        bytes_per_pixel: u32,
    },

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u32, height: u32 },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("pixel buffer size mismatch: expected {expected} bytes, got {actual}")]
    BufferSizeMismatch { expected: usize, actual: usize },

    #[error("operation cancelled")]
    Cancelled(StopReason),

    #[cfg(feature = "std")]
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[cfg(feature = "std")]
    #[error("{}: {source}", .path.display())]
    InFile {
        path: PathBuf,
        #[source]
        source: Box<BitmapError>,
    },
}

impl BitmapError {
    /// The innermost error, looking through file context wrappers.
    pub fn root(&self) -> &BitmapError {
        match self {
            #[cfg(feature = "std")]
            BitmapError::InFile { source, .. } => source.root(),
            other => other,
        }
    }

    /// Attach a file path to a codec error.
    ///
    /// I/O errors already carry their path and are returned unchanged.
    #[cfg(feature = "std")]
    pub(crate) fn in_file(self, path: impl Into<PathBuf>) -> Self {
        match self {
            e @ (BitmapError::Io { .. } | BitmapError::InFile { .. }) => e,
            other => BitmapError::InFile {
                path: path.into(),
                source: Box::new(other),
            },
        }
    }
}

impl From<StopReason> for BitmapError {
    fn from(r: StopReason) -> Self {
        BitmapError::Cancelled(r)
    }
}
