//! Minimal PNG header inspection.

use super::ExportError;

const SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n'];

/// Read the pixel dimensions from a PNG's IHDR chunk.
///
/// # Errors
///
/// Returns [`ExportError::Image`] if `data` does not start with a PNG
/// signature followed by an IHDR chunk.
pub fn dimensions(data: &[u8]) -> Result<(u32, u32), ExportError> {
    if data.len() < 24 || data[..8] != SIGNATURE {
        return Err(ExportError::Image("not a PNG file".to_string()));
    }
    if &data[12..16] != b"IHDR" {
        return Err(ExportError::Image("missing IHDR chunk".to_string()));
    }

    let width = u32::from_be_bytes([data[16], data[17], data[18], data[19]]);
    let height = u32::from_be_bytes([data[20], data[21], data[22], data[23]]);
    if width == 0 || height == 0 {
        return Err(ExportError::Image(format!("invalid size {width}x{height}")));
    }

    Ok((width, height))
}
