//! Live capture preview.
//!
//! Committed shots fill their slots in order and the remaining slots show the live raster, all
//! under the frame scaled to the preview size.

use std::borrow::Cow;

use image::{Rgba, RgbaImage, imageops::FilterType};
use rayon::prelude::*;

use crate::{
    assets::{
        decode::premultiply_rgba8_in_place,
        raster::{CapturedShot, FrameImage},
    },
    composite::{
        blend::{over, over_in_place},
        draw::draw_cover,
    },
    config::{Overlay, PreviewOptions, ToneFilter},
    detect::slot::SlotSet,
    foundation::{
        core::{PixelRect, Rgba8Premul},
        error::PhotoslotResult,
        math::to_u8_channel,
    },
};

/// Render one preview image of `opts.width x opts.height`.
///
/// Slot `i` shows `shots[i]` when it has been captured, otherwise `live` (mirrored when
/// `opts.mirror_live`). Slots with neither keep the background.
#[tracing::instrument(skip_all, fields(width = opts.width, height = opts.height, committed = shots.len()))]
pub fn render_preview(
    frame: &FrameImage,
    slots: &SlotSet,
    shots: &[CapturedShot],
    live: Option<&CapturedShot>,
    opts: &PreviewOptions,
) -> PhotoslotResult<RgbaImage> {
    opts.validate()?;
    let (w, h) = (opts.width, opts.height);
    let [r, g, b] = opts.background;
    let mut canvas = RgbaImage::from_pixel(w, h, Rgba([r, g, b, 255]));

    let live = live.map(|shot| {
        if opts.mirror_live {
            Cow::Owned(shot.mirrored())
        } else {
            Cow::Borrowed(shot)
        }
    });

    for (i, rect) in slots.rects_for(w, h).into_iter().enumerate() {
        let Some(rect) = rect else { continue };
        let Some(content) = shots.get(i).or(live.as_deref()) else {
            continue;
        };
        draw_cover(&mut canvas, content.pixels(), rect);
        if opts.filter != ToneFilter::None {
            shade_region(&mut canvas, rect, |px| apply_tone(px, opts.filter));
        }
        if let Some(overlay) = opts.overlay {
            shade_region(&mut canvas, rect, |px| apply_overlay(px, overlay));
        }
    }

    let mut overlay_frame = if (frame.width(), frame.height()) == (w, h) {
        frame.working_copy()
    } else {
        image::imageops::resize(frame.pixels(), w, h, FilterType::Triangle)
    };
    premultiply_rgba8_in_place(&mut overlay_frame);
    over_in_place(&mut canvas, &overlay_frame, 1.0)?;
    Ok(canvas)
}

fn shade_region(canvas: &mut RgbaImage, rect: PixelRect, f: impl Fn(&mut [u8]) + Sync) {
    let (cw, ch) = canvas.dimensions();
    let Some(clip) = rect.clamp_to(cw, ch) else {
        return;
    };
    let row_bytes = cw as usize * 4;
    let (x0, x1) = (clip.x as usize * 4, clip.right() as usize * 4);
    let buf: &mut [u8] = canvas;
    buf[clip.y as usize * row_bytes..clip.bottom() as usize * row_bytes]
        .par_chunks_exact_mut(row_bytes)
        .for_each(|row| row[x0..x1].chunks_exact_mut(4).for_each(&f));
}

/// Recolor one opaque RGBA8 pixel in place.
pub fn apply_tone(px: &mut [u8], filter: ToneFilter) {
    let (r, g, b) = (f32::from(px[0]), f32::from(px[1]), f32::from(px[2]));
    let out = match filter {
        ToneFilter::None => return,
        ToneFilter::Mono => {
            let l = 0.299 * r + 0.587 * g + 0.114 * b;
            [l, l, l]
        }
        ToneFilter::Sepia => [
            0.393 * r + 0.769 * g + 0.189 * b,
            0.349 * r + 0.686 * g + 0.168 * b,
            0.272 * r + 0.534 * g + 0.131 * b,
        ],
        ToneFilter::Warm => [r + 20.0, g, b - 20.0],
        ToneFilter::Cool => [r - 20.0, g, b + 20.0],
    };
    for (dst, v) in px.iter_mut().zip(out) {
        *dst = to_u8_channel(v);
    }
}

fn apply_overlay(px: &mut [u8], overlay: Overlay) {
    let [r, g, b, a] = overlay.rgba;
    let tint = Rgba8Premul::from_straight_rgba(r, g, b, a).to_array();
    let out = over([px[0], px[1], px[2], px[3]], tint, overlay.opacity);
    px.copy_from_slice(&out);
}

#[cfg(test)]
#[path = "../tests/unit/preview.rs"]
mod tests;
