//! Path-based reading and writing.
//!
//! Files are read whole and written from a fully encoded buffer, so a handle is
//! open only for the duration of a single read or write call and is dropped on
//! every return path.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::Path;

use enough::Stop;

use crate::buffer::ImageBuffer;
use crate::error::BitmapError;
use crate::limits::Limits;

/// Read and decode a BMP file.
pub fn read_bmp_file(path: impl AsRef<Path>, stop: impl Stop) -> Result<ImageBuffer, BitmapError> {
    read_with_limits(path.as_ref(), None, &stop)
}

/// Read and decode a BMP file, rejecting images beyond `limits`.
pub fn read_bmp_file_with_limits(
    path: impl AsRef<Path>,
    limits: &Limits,
    stop: impl Stop,
) -> Result<ImageBuffer, BitmapError> {
    read_with_limits(path.as_ref(), Some(limits), &stop)
}

fn read_with_limits(
    path: &Path,
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<ImageBuffer, BitmapError> {
    let data = fs::read(path).map_err(io_error(path))?;
    let buf = crate::bmp::decode(&data, limits, stop).map_err(|e| e.in_file(path))?;
    log::info!(
        "read {}: {}x{} at {} bytes per pixel",
        path.display(),
        buf.width(),
        buf.height(),
        buf.bytes_per_pixel()
    );
    Ok(buf)
}

/// Encode `buf` and write it to `path`.
///
/// The image is encoded before the file is created. If writing fails, the
/// partially written file is removed.
pub fn write_bmp_file(
    path: impl AsRef<Path>,
    buf: &ImageBuffer,
    stop: impl Stop,
) -> Result<(), BitmapError> {
    write_encoded(path.as_ref(), buf, &stop)
}

fn write_encoded(path: &Path, buf: &ImageBuffer, stop: &dyn Stop) -> Result<(), BitmapError> {
    let encoded = crate::bmp::encode(buf, stop).map_err(|e| e.in_file(path))?;

    let mut file = File::create(path).map_err(io_error(path))?;
    let written = file.write_all(&encoded).and_then(|()| file.sync_all());
    drop(file);

    if let Err(source) = written {
        match fs::remove_file(path) {
            Ok(()) => log::warn!("removed partial {}", path.display()),
            Err(e) => log::warn!("failed to remove partial {}: {e}", path.display()),
        }
        return Err(io_error(path)(source));
    }

    log::info!("wrote {} ({} bytes)", path.display(), encoded.len());
    Ok(())
}

fn io_error(path: &Path) -> impl FnOnce(io::Error) -> BitmapError + '_ {
    move |source| BitmapError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Read `input`, apply [`crate::rotate_right`], and write the result to `output`.
///
/// Returns the transformed buffer.
pub fn rotate_bmp_file(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    stop: impl Stop,
) -> Result<ImageBuffer, BitmapError> {
    let mut buf = read_with_limits(input.as_ref(), None, &stop)?;
    crate::transform::rotate_right(&mut buf);
    write_encoded(output.as_ref(), &buf, &stop)?;
    Ok(buf)
}
