use image::RgbaImage;
use rayon::prelude::*;

use crate::{
    composite::blend::{PremulRgba8, over},
    foundation::{core::PixelRect, math::to_u8_channel},
    transform::{cover_placement, lerp},
};

/// Draw `shot` scaled-to-cover into `slot` on a premultiplied canvas, clipped to the slot.
///
/// Every canvas pixel inside the (clamped) slot receives shot content; nothing outside the slot
/// is written.
pub fn draw_cover(canvas: &mut RgbaImage, shot: &RgbaImage, slot: PixelRect) {
    let (cw, ch) = canvas.dimensions();
    let Some(clip) = slot.clamp_to(cw, ch) else {
        return;
    };
    let placement = cover_placement(slot.to_kurbo(), shot.width(), shot.height());
    let row_bytes = cw as usize * 4;
    let (x0, x1) = (clip.x as usize, clip.right() as usize);
    let (y0, y1) = (clip.y as usize, clip.bottom() as usize);

    let buf: &mut [u8] = canvas;
    buf[y0 * row_bytes..y1 * row_bytes]
        .par_chunks_exact_mut(row_bytes)
        .enumerate()
        .for_each(|(i, row)| {
            let y = (y0 + i) as u32;
            for x in x0..x1 {
                let p = placement.source_point(x as u32, y);
                let src = sample_premul(shot, p.x, p.y);
                let d = &mut row[x * 4..x * 4 + 4];
                let out = over([d[0], d[1], d[2], d[3]], src, 1.0);
                d.copy_from_slice(&out);
            }
        });
}

/// Bilinear sample at continuous pixel coordinates, clamped to the edges, premultiplied.
pub(crate) fn sample_premul(img: &RgbaImage, sx: f64, sy: f64) -> PremulRgba8 {
    let (w, h) = img.dimensions();
    let fx = sx.clamp(0.0, f64::from(w - 1));
    let fy = sy.clamp(0.0, f64::from(h - 1));
    let (x0, y0) = (fx.floor() as u32, fy.floor() as u32);
    let (x1, y1) = ((x0 + 1).min(w - 1), (y0 + 1).min(h - 1));
    let (tx, ty) = ((fx - f64::from(x0)) as f32, (fy - f64::from(y0)) as f32);

    let texel = |x: u32, y: u32| -> [f32; 4] {
        let [r, g, b, a] = img.get_pixel(x, y).0;
        let af = f32::from(a) / 255.0;
        [
            f32::from(r) * af,
            f32::from(g) * af,
            f32::from(b) * af,
            f32::from(a),
        ]
    };
    let (p00, p10, p01, p11) = (texel(x0, y0), texel(x1, y0), texel(x0, y1), texel(x1, y1));

    let mut out = [0u8; 4];
    for c in 0..4 {
        let top = lerp(p00[c], p10[c], tx);
        let bottom = lerp(p01[c], p11[c], tx);
        out[c] = to_u8_channel(lerp(top, bottom, ty));
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/composite/draw.rs"]
mod tests;
