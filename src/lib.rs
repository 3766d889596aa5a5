//! # bmprotate
//!
//! Uncompressed BMP decoder and encoder with in-place mirror transforms.
//!
//! Decoding maps the padded, bottom-up pixel rows of a BMP file into a flat,
//! top-down [`ImageBuffer`] with no row padding. Encoding writes the buffer
//! back with a freshly computed 54-byte header. Pixel bytes are kept in the
//! file's native order (BGR/BGRA); nothing is swizzled.
//!
//! ## Supported input
//!
//! - `BITMAPINFOHEADER` files with compression 0
//! - any bit depth that is a positive multiple of 8
//! - the color table, if any, is skipped via the pixel data offset
//!
//! Rows are padded as `4 * ceil(width / 4) * bytes_per_pixel` in both
//! directions, so files written by this crate always decode to the same pixels.
//!
//! ## Usage
//!
//! ```no_run
//! use bmprotate::{decode_bmp, encode_bmp, rotate_right};
//! use enough::Unstoppable;
//!
//! let data: &[u8] = &[]; // your BMP bytes
//! let mut image = decode_bmp(data, Unstoppable)?;
//! rotate_right(&mut image);
//! let encoded = encode_bmp(&image, Unstoppable)?;
//! # Ok::<(), bmprotate::BitmapError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod buffer;
mod decode;
mod error;
mod limits;
mod transform;

pub mod bmp;

#[cfg(feature = "std")]
mod file;

use alloc::vec::Vec;

// Re-exports
pub use bmp::header::{BmpHeader, BmpInfo, FileHeader, InfoHeader};
pub use bmp::rows::{padded_row_size, unpadded_row_size};
pub use buffer::ImageBuffer;
pub use decode::DecodeRequest;
pub use enough::{Stop, Unstoppable};
pub use error::BitmapError;
pub use limits::Limits;
pub use transform::{RotateRight, mirror_horizontal, mirror_vertical, rotate_right};

#[cfg(feature = "std")]
pub use file::{read_bmp_file, read_bmp_file_with_limits, rotate_bmp_file, write_bmp_file};

/// Decode a BMP into a top-down, unpadded buffer.
pub fn decode_bmp(data: &[u8], stop: impl Stop) -> Result<ImageBuffer, BitmapError> {
    DecodeRequest::new(data).decode(stop)
}

/// Encode a buffer as an uncompressed, bottom-up BMP.
pub fn encode_bmp(buf: &ImageBuffer, stop: impl Stop) -> Result<Vec<u8>, BitmapError> {
    bmp::encode(buf, &stop)
}
