//! BMP file header (14 bytes) and BITMAPINFOHEADER (40 bytes).

use alloc::vec::Vec;

use super::rows::padded_row_size;
use crate::error::BitmapError;

pub const FILE_HEADER_SIZE: u32 = 14;
pub const INFO_HEADER_SIZE: u32 = 40;
/// Offset of pixel data in every file this crate writes.
pub const PIXEL_DATA_OFFSET: u32 = FILE_HEADER_SIZE + INFO_HEADER_SIZE;

/// 100 DPI expressed in pixels per meter.
pub const RESOLUTION_PPM: u32 = 3937;

const SIGNATURE: [u8; 2] = *b"BM";

// Fixed field offsets read on decode.
const DATA_OFFSET_AT: usize = 0x0A;
const WIDTH_AT: usize = 0x12;
const HEIGHT_AT: usize = 0x16;
const BITS_PER_PIXEL_AT: usize = 0x1C;
const COMPRESSION_AT: usize = 0x1E;

const NO_COMPRESSION: u32 = 0;

/// The 14-byte file header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FileHeader {
    pub signature: [u8; 2],
    pub file_size: u32,
    pub reserved: u32,
    pub pixel_data_offset: u32,
}

/// The 40-byte BITMAPINFOHEADER.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InfoHeader {
    pub header_size: u32,
    pub width: u32,
    pub height: u32,
    pub color_planes: i16,
    pub bits_per_pixel: i16,
    pub compression: u32,
    pub image_size: u32,
    pub resolution_x: u32,
    pub resolution_y: u32,
    /// 0 means "all colors".
    pub colors_used: u32,
    /// 0 means "all colors are important".
    pub important_colors: u32,
}

/// Both headers, as written by the encoder.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BmpHeader {
    pub file: FileHeader,
    pub info: InfoHeader,
}

impl BmpHeader {
    /// Build the header for an image of the given geometry.
    ///
    /// Sizes are derived from the geometry alone; nothing is carried over from
    /// a previously decoded file.
    pub fn for_image(width: u32, height: u32, bytes_per_pixel: u32) -> Result<Self, BitmapError> {
        let too_large = || BitmapError::DimensionsTooLarge { width, height };
        let bits_per_pixel = bytes_per_pixel
            .checked_mul(8)
            .and_then(|b| i16::try_from(b).ok())
            .ok_or_else(|| {
                BitmapError::UnsupportedFormat(alloc::format!(
                    "{bytes_per_pixel} bytes per pixel does not fit a BMP bit depth"
                ))
            })?;
        let image_size = padded_row_size(width, bytes_per_pixel)
            .and_then(|row| row.checked_mul(height as usize))
            .and_then(|size| u32::try_from(size).ok())
            .ok_or_else(too_large)?;
        let file_size = image_size
            .checked_add(PIXEL_DATA_OFFSET)
            .ok_or_else(too_large)?;

        Ok(Self {
            file: FileHeader {
                signature: SIGNATURE,
                file_size,
                reserved: 0,
                pixel_data_offset: PIXEL_DATA_OFFSET,
            },
            info: InfoHeader {
                header_size: INFO_HEADER_SIZE,
                width,
                height,
                color_planes: 1,
                bits_per_pixel,
                compression: NO_COMPRESSION,
                image_size,
                resolution_x: RESOLUTION_PPM,
                resolution_y: RESOLUTION_PPM,
                colors_used: 0,
                important_colors: 0,
            },
        })
    }

    /// Append the 54 header bytes, little-endian, in on-disk field order.
    pub fn write_to(&self, out: &mut Vec<u8>) {
        let FileHeader {
            signature,
            file_size,
            reserved,
            pixel_data_offset,
        } = self.file;
        out.extend_from_slice(&signature);
        out.extend_from_slice(&file_size.to_le_bytes());
        out.extend_from_slice(&reserved.to_le_bytes());
        out.extend_from_slice(&pixel_data_offset.to_le_bytes());

        let info = &self.info;
        out.extend_from_slice(&info.header_size.to_le_bytes());
        out.extend_from_slice(&info.width.to_le_bytes());
        out.extend_from_slice(&info.height.to_le_bytes()); // positive = bottom-up
        out.extend_from_slice(&info.color_planes.to_le_bytes());
        out.extend_from_slice(&info.bits_per_pixel.to_le_bytes());
        out.extend_from_slice(&info.compression.to_le_bytes());
        out.extend_from_slice(&info.image_size.to_le_bytes());
        out.extend_from_slice(&info.resolution_x.to_le_bytes());
        out.extend_from_slice(&info.resolution_y.to_le_bytes());
        out.extend_from_slice(&info.colors_used.to_le_bytes());
        out.extend_from_slice(&info.important_colors.to_le_bytes());
    }
}

/// Write the header for an image of the given geometry.
pub fn encode_header(
    out: &mut Vec<u8>,
    width: u32,
    height: u32,
    bytes_per_pixel: u32,
) -> Result<(), BitmapError> {
    BmpHeader::for_image(width, height, bytes_per_pixel)?.write_to(out);
    Ok(())
}

/// Header fields the decoder needs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BmpInfo {
    pub data_offset: u32,
    pub width: u32,
    pub height: u32,
    pub bits_per_pixel: i16,
    pub compression: u32,
}

impl BmpInfo {
    /// Probe a BMP header without decoding pixels.
    pub fn from_bytes(data: &[u8]) -> Result<Self, BitmapError> {
        parse_header(data)
    }

    /// Whole bytes per pixel (`bits_per_pixel / 8`); 0 for a non-positive depth.
    pub fn bytes_per_pixel(&self) -> u32 {
        u32::try_from(self.bits_per_pixel).unwrap_or(0) / 8
    }
}

/// Read the fixed-offset header fields and reject what the row codec can't handle.
///
/// The bytes between the fields are not interpreted.
pub fn parse_header(data: &[u8]) -> Result<BmpInfo, BitmapError> {
    let header_len = PIXEL_DATA_OFFSET as usize;
    if data.len() < header_len {
        return Err(BitmapError::Truncated {
            offset: 0,
            needed: header_len,
            actual: data.len(),
        });
    }
    if data[0..2] != SIGNATURE {
        return Err(BitmapError::UnrecognizedFormat);
    }

    let info = BmpInfo {
        data_offset: read_u32_le(data, DATA_OFFSET_AT),
        width: read_u32_le(data, WIDTH_AT),
        height: read_u32_le(data, HEIGHT_AT),
        bits_per_pixel: i16::from_le_bytes([data[BITS_PER_PIXEL_AT], data[BITS_PER_PIXEL_AT + 1]]),
        compression: read_u32_le(data, COMPRESSION_AT),
    };

    if info.bits_per_pixel <= 0 || info.bits_per_pixel % 8 != 0 {
        return Err(BitmapError::UnsupportedFormat(alloc::format!(
            "{} bits per pixel (only whole-byte pixels are supported)",
            info.bits_per_pixel
        )));
    }
    if info.compression != NO_COMPRESSION {
        return Err(BitmapError::UnsupportedFormat(alloc::format!(
            "compression type {} (only uncompressed BMP is supported)",
            info.compression
        )));
    }

    log::debug!(
        "bmp header: {}x{} at {} bpp, pixel data at {}",
        info.width,
        info.height,
        info.bits_per_pixel,
        info.data_offset
    );
    Ok(info)
}

// Callers have already checked the 54-byte header is present.
fn read_u32_le(data: &[u8], at: usize) -> u32 {
    u32::from_le_bytes([data[at], data[at + 1], data[at + 2], data[at + 3]])
}
