//! PNG load-and-re-encode.
//!
//! The upload payload is not the file's raw bytes but the output of a
//! decode/encode round trip. The round trip rejects files that are not
//! valid PNGs and produces canonical encoder output; since PNG is
//! lossless the pixel grid is preserved exactly.

use std::fs;
use std::io::Cursor;
use std::path::Path;

use image::ImageFormat;
use tracing::{debug, instrument};

use crate::error::{DecodeError, Error};

/// MIME type for the payload produced by [`load_and_reencode`].
pub const MIME_TYPE: &str = "image/png";

/// Read a PNG file and re-encode its pixel grid to an in-memory buffer.
///
/// # Errors
///
/// Returns [`DecodeError::Read`] if the file cannot be read and
/// [`DecodeError::Image`] if its contents do not decode as PNG. No
/// network access happens on any path.
#[instrument]
pub fn load_and_reencode(path: &Path) -> Result<Vec<u8>, Error> {
    let bytes = fs::read(path).map_err(|source| DecodeError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let decoded =
        image::load_from_memory_with_format(&bytes, ImageFormat::Png).map_err(|source| {
            DecodeError::Image {
                path: path.to_path_buf(),
                source,
            }
        })?;

    debug!(
        width = decoded.width(),
        height = decoded.height(),
        "decoded PNG"
    );

    let mut buffer = Vec::new();
    decoded
        .write_to(&mut Cursor::new(&mut buffer), ImageFormat::Png)
        .map_err(|source| DecodeError::Encode { source })?;

    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    fn sample_png(width: u32, height: u32) -> Vec<u8> {
        let img = RgbaImage::from_fn(width, height, |x, y| {
            Rgba([(x % 256) as u8, (y % 256) as u8, 128, 255])
        });
        let mut buffer = Vec::new();
        image::DynamicImage::ImageRgba8(img)
            .write_to(&mut Cursor::new(&mut buffer), ImageFormat::Png)
            .unwrap();
        buffer
    }

    #[test]
    fn round_trips_pixel_data() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("avatar.png");
        fs::write(&path, sample_png(128, 128)).unwrap();

        let reencoded = load_and_reencode(&path).unwrap();

        let original = image::load_from_memory(&fs::read(&path).unwrap()).unwrap();
        let decoded = image::load_from_memory(&reencoded).unwrap();
        assert_eq!(decoded.width(), 128);
        assert_eq!(decoded.height(), 128);
        assert_eq!(original.to_rgba8(), decoded.to_rgba8());
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let err = load_and_reencode(Path::new("/nonexistent/avatar.png")).unwrap_err();
        assert!(err.to_string().contains("failed to read file"));
    }

    #[test]
    fn garbage_bytes_are_a_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("not-a-png.png");
        fs::write(&path, b"definitely not image data").unwrap();

        let err = load_and_reencode(&path).unwrap_err();
        assert!(err.to_string().contains("failed to decode"));
    }

    #[test]
    fn truncated_png_is_a_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let full = sample_png(16, 16);
        let path = dir.path().join("truncated.png");
        fs::write(&path, &full[..full.len() / 2]).unwrap();

        assert!(load_and_reencode(&path).is_err());
    }
}
