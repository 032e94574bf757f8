use image::RgbaImage;
use rayon::prelude::*;

use crate::{assets::raster::FrameImage, foundation::core::PixelRect};

/// Whether the frame encodes placeholders as opaque white instead of transparency.
///
/// Only the center pixel of the first slot is sampled; every slot is assumed to share that
/// encoding.
pub fn needs_masking(
    frame: &FrameImage,
    first_slot: PixelRect,
    alpha_above: u8,
    white_above: u8,
) -> bool {
    let (cx, cy) = first_slot.center();
    match frame.pixel(cx, cy) {
        Some([r, g, b, a]) => a > alpha_above && r > white_above && g > white_above && b > white_above,
        None => false,
    }
}

/// Zero the alpha of near-white pixels inside `slots`. Pixels outside every slot are untouched.
pub fn mask_white_in_slots(pixels: &mut RgbaImage, slots: &[PixelRect], white_above: u8) {
    let (w, h) = pixels.dimensions();
    let slots: Vec<PixelRect> = slots.iter().filter_map(|s| s.clamp_to(w, h)).collect();
    if slots.is_empty() {
        return;
    }
    let row_bytes = w as usize * 4;
    let buf: &mut [u8] = pixels;

    buf.par_chunks_exact_mut(row_bytes)
        .enumerate()
        .for_each(|(y, row)| {
            let y = y as u32;
            for s in slots.iter().filter(|s| s.y <= y && y < s.bottom()) {
                for px in row[s.x as usize * 4..s.right() as usize * 4].chunks_exact_mut(4) {
                    if px[0] > white_above && px[1] > white_above && px[2] > white_above {
                        px[3] = 0;
                    }
                }
            }
        });
}

#[cfg(test)]
#[path = "../../tests/unit/composite/mask.rs"]
mod tests;
