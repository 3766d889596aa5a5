//! In-place mirror transforms.
//!
//! [`rotate_right`] is a composite of three partial mirrors. It is defined by
//! those passes, not by a rotation law: it only resembles a clockwise turn for
//! particular image sizes, and applying it twice does not in general restore
//! or half-turn the image.
//!
//! ```text
//! pass 1  rows 0..h/2        pixel columns 0..w/2      swap x <-> w-1-x
//! pass 2  rows 0..h/2        byte columns 0..stride/2  swap y <-> h-1-y
//! pass 3  rows start..h      pixel columns 0..w/2      swap x <-> w-1-x
//! ```

use crate::buffer::ImageBuffer;

/// Parameters for the three-pass composite mirror.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RotateRight {
    /// First row of pass 3. Fixed rather than derived from the image height.
    pub tail_start_row: u32,
}

impl RotateRight {
    /// Pass 3 start row of the historical transform.
    pub const LEGACY_TAIL_START_ROW: u32 = 50;

    pub fn new(tail_start_row: u32) -> Self {
        Self { tail_start_row }
    }

    /// Run the three passes on `buf` in place.
    pub fn apply(&self, buf: &mut ImageBuffer) {
        let (width, height) = (buf.width(), buf.height());
        log::debug!(
            "rotate_right: {width}x{height}, pass 3 from row {}",
            self.tail_start_row
        );
        if buf.pixels().is_empty() {
            return;
        }

        for row in 0..height / 2 {
            swap_row_halves(buf, row);
        }

        let stride = buf.row_stride();
        let pixels = buf.pixels_mut();
        for row in 0..height as usize / 2 {
            let mirror = height as usize - 1 - row;
            for byte in 0..stride / 2 {
                pixels.swap(row * stride + byte, mirror * stride + byte);
            }
        }

        for row in self.tail_start_row..height {
            swap_row_halves(buf, row);
        }
    }
}

impl Default for RotateRight {
    fn default() -> Self {
        Self::new(Self::LEGACY_TAIL_START_ROW)
    }
}

/// Apply the three-pass composite mirror with the historical parameters.
pub fn rotate_right(buf: &mut ImageBuffer) {
    RotateRight::default().apply(buf);
}

/// Reverse the pixel order of every row (left <-> right).
pub fn mirror_horizontal(buf: &mut ImageBuffer) {
    if buf.pixels().is_empty() {
        return;
    }
    for row in 0..buf.height() {
        swap_row_halves(buf, row);
    }
}

/// Reverse the row order (top <-> bottom).
pub fn mirror_vertical(buf: &mut ImageBuffer) {
    if buf.pixels().is_empty() {
        return;
    }
    let height = buf.height();
    for row in 0..height / 2 {
        let mirror = height - 1 - row;
        let stride = buf.row_stride();
        let (top, bottom) = buf.pixels_mut().split_at_mut(mirror as usize * stride);
        top[row as usize * stride..(row as usize + 1) * stride]
            .swap_with_slice(&mut bottom[..stride]);
    }
}

// Swap pixel x with pixel width-1-x for x in 0..width/2, byte by byte.
fn swap_row_halves(buf: &mut ImageBuffer, row: u32) {
    let width = buf.width() as usize;
    let bpp = buf.bytes_per_pixel() as usize;
    let stride = buf.row_stride();
    let pixels = buf.pixels_mut();
    let base = row as usize * stride;
    for col in 0..width / 2 {
        let mirror = width - 1 - col;
        for k in 0..bpp {
            pixels.swap(base + col * bpp + k, base + mirror * bpp + k);
        }
    }
}
