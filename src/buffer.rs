//! Owned pixel buffer shared by the codec and the transforms.
//!
//! Pixels are stored top-down, row-major, with no row padding:
//!
//! ```text
//! pixels[y * row_stride + x * bytes_per_pixel + c]
//! ```
//!
//! where `row_stride = width * bytes_per_pixel`.

use alloc::vec::Vec;

use crate::error::BitmapError;
use crate::limits::Limits;

/// Decoded image: unpadded, top-down rows of `bytes_per_pixel`-byte pixels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageBuffer {
    pixels: Vec<u8>,
    width: u32,
    height: u32,
    bytes_per_pixel: u32,
}

impl ImageBuffer {
    /// Allocate a zero-filled buffer.
    ///
    /// Fails with [`BitmapError::Allocation`] if the byte size overflows
    /// `usize` or the allocator cannot satisfy the request.
    pub fn allocate(width: u32, height: u32, bytes_per_pixel: u32) -> Result<Self, BitmapError> {
        Self::allocate_within(width, height, bytes_per_pixel, None)
    }

    /// [`allocate`](Self::allocate), refusing with [`BitmapError::LimitExceeded`]
    /// when the buffer would be larger than `limits.max_memory_bytes`.
    pub fn allocate_within(
        width: u32,
        height: u32,
        bytes_per_pixel: u32,
        limits: Option<&Limits>,
    ) -> Result<Self, BitmapError> {
        let len = buffer_len(width, height, bytes_per_pixel)?;
        if let Some(limits) = limits {
            limits.check_buffer_len(len)?;
        }
        let mut pixels = Vec::new();
        pixels
            .try_reserve_exact(len)
            .map_err(|_| BitmapError::Allocation {
                width,
                height,
                bytes_per_pixel,
            })?;
        pixels.resize(len, 0);
        Ok(Self {
            pixels,
            width,
            height,
            bytes_per_pixel,
        })
    }

    /// Wrap existing pixel bytes. The length must be exactly
    /// `width * height * bytes_per_pixel`.
    pub fn from_pixels(
        pixels: Vec<u8>,
        width: u32,
        height: u32,
        bytes_per_pixel: u32,
    ) -> Result<Self, BitmapError> {
        let expected = buffer_len(width, height, bytes_per_pixel)?;
        if pixels.len() != expected {
            return Err(BitmapError::BufferSizeMismatch {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            pixels,
            width,
            height,
            bytes_per_pixel,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn bytes_per_pixel(&self) -> u32 {
        self.bytes_per_pixel
    }

    /// Bytes per in-memory row (`width * bytes_per_pixel`).
    pub fn row_stride(&self) -> usize {
        self.width as usize * self.bytes_per_pixel as usize
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut [u8] {
        &mut self.pixels
    }

    /// Take ownership of the pixel bytes.
    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }

    /// Row `y`, counted from the top. Panics if `y >= height`.
    pub fn row(&self, y: u32) -> &[u8] {
        let stride = self.row_stride();
        let start = y as usize * stride;
        &self.pixels[start..start + stride]
    }

    /// Mutable row `y`, counted from the top. Panics if `y >= height`.
    pub fn row_mut(&mut self, y: u32) -> &mut [u8] {
        let stride = self.row_stride();
        let start = y as usize * stride;
        &mut self.pixels[start..start + stride]
    }

    /// Bytes of the pixel at column `x`, row `y`, or `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<&[u8]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let bpp = self.bytes_per_pixel as usize;
        let off = y as usize * self.row_stride() + x as usize * bpp;
        self.pixels.get(off..off + bpp)
    }
}

fn buffer_len(width: u32, height: u32, bytes_per_pixel: u32) -> Result<usize, BitmapError> {
    if bytes_per_pixel == 0 {
        return Err(BitmapError::UnsupportedFormat(
            "zero bytes per pixel".into(),
        ));
    }
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|wh| wh.checked_mul(bytes_per_pixel as usize))
        .ok_or(BitmapError::Allocation {
            width,
            height,
            bytes_per_pixel,
        })
}
