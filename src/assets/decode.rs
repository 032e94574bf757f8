use std::path::Path;

use image::RgbaImage;

use crate::foundation::error::{PhotoslotError, PhotoslotResult};

/// Decode encoded image bytes (PNG, JPEG, ...) into straight-alpha RGBA8.
pub fn decode_rgba(bytes: &[u8]) -> PhotoslotResult<RgbaImage> {
    let dyn_img = image::load_from_memory(bytes)
        .map_err(|e| PhotoslotError::decode(format!("decode image from memory: {e}")))?;
    let rgba = dyn_img.to_rgba8();
    if rgba.width() == 0 || rgba.height() == 0 {
        return Err(PhotoslotError::decode("image has zero width or height"));
    }
    Ok(rgba)
}

/// Read and decode an image file.
pub fn read_rgba(path: &Path) -> PhotoslotResult<RgbaImage> {
    let bytes = std::fs::read(path)
        .map_err(|e| PhotoslotError::decode(format!("read image '{}': {e}", path.display())))?;
    decode_rgba(&bytes)
}

pub(crate) fn premultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 0 {
            px[0] = 0;
            px[1] = 0;
            px[2] = 0;
            continue;
        }
        px[0] = ((px[0] as u16 * a + 127) / 255) as u8;
        px[1] = ((px[1] as u16 * a + 127) / 255) as u8;
        px[2] = ((px[2] as u16 * a + 127) / 255) as u8;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
