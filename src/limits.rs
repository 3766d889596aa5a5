use crate::error::BitmapError;

/// Caps on what a decode may produce.
///
/// `None` means unbounded. Geometry is checked as soon as the header is read;
/// the memory cap is checked against the exact pixel buffer length right before
/// it is reserved.
#[derive(Clone, Debug, Default)]
pub struct Limits {
    pub max_width: Option<u64>,
    pub max_height: Option<u64>,
    /// width * height
    pub max_pixels: Option<u64>,
    /// Bytes in the decoded `ImageBuffer`.
    pub max_memory_bytes: Option<u64>,
}

impl Limits {
    pub(crate) fn check_geometry(&self, width: u32, height: u32) -> Result<(), BitmapError> {
        let pixels = u64::from(width) * u64::from(height);
        within("width", u64::from(width), self.max_width)?;
        within("height", u64::from(height), self.max_height)?;
        within("pixel count", pixels, self.max_pixels)
    }

    pub(crate) fn check_buffer_len(&self, len: usize) -> Result<(), BitmapError> {
        within("pixel buffer bytes", len as u64, self.max_memory_bytes)
    }
}

fn within(what: &str, value: u64, max: Option<u64>) -> Result<(), BitmapError> {
    match max {
        Some(max) if value > max => Err(BitmapError::LimitExceeded(alloc::format!(
            "{what} {value} over limit {max}"
        ))),
        _ => Ok(()),
    }
}
