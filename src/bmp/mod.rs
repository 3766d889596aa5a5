//! Uncompressed BMP codec.
//!
//! [`header`] and [`rows`] expose the layout arithmetic; whole-image decode
//! and encode go through [`crate::decode_bmp`] and [`crate::encode_bmp`].

pub mod header;
pub mod rows;

use crate::buffer::ImageBuffer;
use crate::error::BitmapError;
use crate::limits::Limits;
use alloc::vec::Vec;
use enough::Stop;

use header::{BmpHeader, PIXEL_DATA_OFFSET};

/// Decode BMP data into a top-down buffer (native BGR/BGRA byte order).
pub(crate) fn decode(
    data: &[u8],
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<ImageBuffer, BitmapError> {
    let info = header::parse_header(data)?;
    if let Some(limits) = limits {
        limits.check_geometry(info.width, info.height)?;
    }
    stop.check()?;
    rows::read_rows(data, &info, limits, stop)
}

/// Encode a buffer as an uncompressed, bottom-up BMP.
pub(crate) fn encode(buf: &ImageBuffer, stop: &dyn Stop) -> Result<Vec<u8>, BitmapError> {
    let header = BmpHeader::for_image(buf.width(), buf.height(), buf.bytes_per_pixel())?;
    stop.check()?;

    let mut out = Vec::new();
    out.try_reserve_exact(header.file.file_size as usize)
        .map_err(|_| BitmapError::Allocation {
            width: buf.width(),
            height: buf.height(),
            bytes_per_pixel: buf.bytes_per_pixel(),
        })?;
    header.write_to(&mut out);
    debug_assert_eq!(out.len(), PIXEL_DATA_OFFSET as usize);
    rows::write_rows(&mut out, buf, stop)?;

    log::debug!(
        "bmp encode: {}x{} at {} bytes per pixel, {} bytes",
        buf.width(),
        buf.height(),
        buf.bytes_per_pixel(),
        out.len()
    );
    Ok(out)
}
