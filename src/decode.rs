use crate::buffer::ImageBuffer;
use crate::error::BitmapError;
use crate::limits::Limits;
use enough::Stop;

/// Decode builder: input bytes plus optional resource limits.
#[derive(Clone, Debug)]
pub struct DecodeRequest<'a> {
    data: &'a [u8],
    limits: Option<&'a Limits>,
}

impl<'a> DecodeRequest<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, limits: None }
    }

    /// Reject images whose header exceeds `limits`, before any pixel allocation.
    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    /// Decode to a top-down, unpadded pixel buffer.
    pub fn decode(self, stop: impl Stop) -> Result<ImageBuffer, BitmapError> {
        crate::bmp::decode(self.data, self.limits, &stop)
    }
}
