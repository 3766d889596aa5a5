//! Padded bottom-up disk rows <-> unpadded top-down memory rows.
//!
//! Disk rows are padded on the pixel count, not the byte count:
//! `padded = 4 * ceil(width / 4) * bytes_per_pixel`. For 3-byte pixels this
//! is wider than the usual 4-byte alignment of `width * 3`, and decoding
//! uses the same formula so files written here round-trip exactly.

use alloc::vec::Vec;

use enough::Stop;

use super::header::BmpInfo;
use crate::buffer::ImageBuffer;
use crate::error::BitmapError;
use crate::limits::Limits;

/// Bytes per stored row including padding.
pub fn padded_row_size(width: u32, bytes_per_pixel: u32) -> Option<usize> {
    (width as usize)
        .div_ceil(4)
        .checked_mul(4)?
        .checked_mul(bytes_per_pixel as usize)
}

/// Bytes of pixel data per row (`width * bytes_per_pixel`).
pub fn unpadded_row_size(width: u32, bytes_per_pixel: u32) -> Option<usize> {
    (width as usize).checked_mul(bytes_per_pixel as usize)
}

/// Read `info.height` disk rows starting at `info.data_offset` into a
/// top-down buffer. Disk row `i` lands in memory row `height - 1 - i`.
pub(crate) fn read_rows(
    data: &[u8],
    info: &BmpInfo,
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<ImageBuffer, BitmapError> {
    let (width, height) = (info.width, info.height);
    let bpp = info.bytes_per_pixel();
    let too_large = || BitmapError::DimensionsTooLarge { width, height };
    let padded = padded_row_size(width, bpp).ok_or_else(too_large)?;
    let unpadded = unpadded_row_size(width, bpp).ok_or_else(too_large)?;
    let offset = info.data_offset as usize;

    // The last disk row only needs its pixel bytes, not its padding.
    if height > 0 {
        let last_row = (height as usize - 1)
            .checked_mul(padded)
            .and_then(|r| r.checked_add(offset))
            .ok_or_else(too_large)?;
        let end = last_row.checked_add(unpadded).ok_or_else(too_large)?;
        if end > data.len() {
            return Err(BitmapError::Truncated {
                offset: last_row,
                needed: unpadded,
                actual: data.len().saturating_sub(last_row),
            });
        }
    }

    let mut buf = ImageBuffer::allocate_within(width, height, bpp, limits)?;
    if unpadded == 0 {
        return Ok(buf);
    }
    for i in 0..height {
        if i % 16 == 0 {
            stop.check()?;
        }
        let src = offset + i as usize * padded;
        buf.row_mut(height - 1 - i)
            .copy_from_slice(&data[src..src + unpadded]);
    }
    Ok(buf)
}

/// Append the buffer's rows bottom-up, each followed by zero padding.
pub(crate) fn write_rows(
    out: &mut Vec<u8>,
    buf: &ImageBuffer,
    stop: &dyn Stop,
) -> Result<(), BitmapError> {
    let (width, height) = (buf.width(), buf.height());
    let padded = padded_row_size(width, buf.bytes_per_pixel())
        .ok_or(BitmapError::DimensionsTooLarge { width, height })?;
    if padded == 0 {
        return Ok(());
    }
    let pad_bytes = padded - buf.row_stride();

    for i in 0..height {
        if i % 16 == 0 {
            stop.check()?;
        }
        out.extend_from_slice(buf.row(height - 1 - i));
        out.extend(core::iter::repeat_n(0u8, pad_bytes));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use enough::Unstoppable;

    #[test]
    fn padding_follows_pixel_count() {
        assert_eq!(unpadded_row_size(5, 3), Some(15));
        assert_eq!(padded_row_size(5, 3), Some(24));
        assert_eq!(padded_row_size(4, 3), Some(12));
        assert_eq!(padded_row_size(1, 4), Some(16));
        assert_eq!(padded_row_size(0, 3), Some(0));
    }

    #[test]
    fn write_rows_inverts_order_and_pads() {
        // 1x2, 3 bytes per pixel: top row AAA, bottom row BBB
        let buf = ImageBuffer::from_pixels(vec![0xA, 0xA, 0xA, 0xB, 0xB, 0xB], 1, 2, 3).unwrap();
        let mut out = Vec::new();
        write_rows(&mut out, &buf, &Unstoppable).unwrap();
        assert_eq!(out.len(), 24);
        assert_eq!(&out[0..3], &[0xB; 3]);
        assert_eq!(&out[3..12], &[0; 9]);
        assert_eq!(&out[12..15], &[0xA; 3]);
        assert_eq!(&out[15..24], &[0; 9]);
    }

    #[test]
    fn read_rows_tolerates_missing_final_padding() {
        let info = BmpInfo {
            data_offset: 0,
            width: 1,
            height: 2,
            bits_per_pixel: 24,
            compression: 0,
        };
        // Row 0 padded to 12 bytes, row 1 with pixel bytes only.
        let mut data = vec![1u8, 2, 3];
        data.extend_from_slice(&[0; 9]);
        data.extend_from_slice(&[4, 5, 6]);
        let buf = read_rows(&data, &info, None, &Unstoppable).unwrap();
        assert_eq!(buf.pixels(), &[4, 5, 6, 1, 2, 3]);
    }

    #[test]
    fn read_rows_reports_truncation_offset() {
        let info = BmpInfo {
            data_offset: 54,
            width: 2,
            height: 2,
            bits_per_pixel: 32,
            compression: 0,
        };
        let data = vec![0u8; 54 + 16 + 4];
        match read_rows(&data, &info, None, &Unstoppable) {
            Err(BitmapError::Truncated {
                offset,
                needed,
                actual,
            }) => {
                assert_eq!(offset, 70);
                assert_eq!(needed, 8);
                assert_eq!(actual, 4);
            }
            other => panic!("expected Truncated, got {other:?}"),
        }
    }

    #[test]
    fn zero_width_skips_row_loop() {
        let info = BmpInfo {
            data_offset: 54,
            width: 0,
            height: u32::MAX,
            bits_per_pixel: 24,
            compression: 0,
        };
        let data = vec![0u8; 54];
        let buf = read_rows(&data, &info, None, &Unstoppable).unwrap();
        assert_eq!(buf.height(), u32::MAX);
        assert!(buf.pixels().is_empty());

        let mut out = Vec::new();
        write_rows(&mut out, &buf, &Unstoppable).unwrap();
        assert!(out.is_empty());
    }
}
