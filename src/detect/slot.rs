use crate::foundation::core::{NormRect, PixelRect};

/// A placeholder rectangle in both native-pixel and normalized form.
///
/// Serializes flat as `{x, y, w, h, nx, ny, nw, nh}`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Slot {
    #[serde(flatten)]
    pub rect: PixelRect,
    #[serde(flatten)]
    pub norm: NormRect,
}

impl Slot {
    /// Build a slot from a native rectangle, deriving the normalized form.
    pub fn from_pixels(rect: PixelRect, frame_width: u32, frame_height: u32) -> Self {
        Self {
            rect,
            norm: NormRect::from_pixels(rect, frame_width, frame_height),
        }
    }
}

/// Full detection result for one frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SlotSet {
    /// Slots in reading order; slot `i` receives shot `i mod shots`.
    pub slots: Vec<Slot>,
    /// `true` when the transparency pass produced the slots.
    pub used_alpha_channel: bool,
    /// Native width of the frame the slots were detected on.
    pub source_width: u32,
    /// Native height of the frame the slots were detected on.
    pub source_height: u32,
}

impl SlotSet {
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Slot> {
        self.slots.iter()
    }

    /// Native rectangles for a `width x height` frame, one entry per slot.
    ///
    /// Matching dimensions use the stored pixel rectangles; otherwise they are re-derived from
    /// the normalized form. Everything is clamped to the frame, and a slot that ends up empty
    /// yields `None` so indices stay aligned with shot assignment.
    pub fn rects_for(&self, width: u32, height: u32) -> Vec<Option<PixelRect>> {
        let same_source = self.source_width == width && self.source_height == height;
        self.slots
            .iter()
            .map(|s| {
                if same_source {
                    s.rect.clamp_to(width, height)
                } else {
                    s.norm.to_pixels(width, height)
                }
            })
            .collect()
    }
}

/// Sort slots into reading order.
///
/// Slots are taken by normalized Y; a row starts at its topmost slot and absorbs every
/// following slot within `row_tolerance` of it. Rows are then ordered left to right by native X.
pub fn order_slots(slots: &mut Vec<Slot>, row_tolerance: f64) {
    slots.sort_by(|a, b| a.norm.ny.total_cmp(&b.norm.ny).then(a.rect.x.cmp(&b.rect.x)));

    let mut ordered = Vec::with_capacity(slots.len());
    let mut row: Vec<Slot> = Vec::new();
    let mut anchor = 0.0;
    for slot in slots.drain(..) {
        if !row.is_empty() && slot.norm.ny - anchor > row_tolerance {
            row.sort_by_key(|s| s.rect.x);
            ordered.append(&mut row);
        }
        if row.is_empty() {
            anchor = slot.norm.ny;
        }
        row.push(slot);
    }
    row.sort_by_key(|s| s.rect.x);
    ordered.append(&mut row);

    *slots = ordered;
}

#[cfg(test)]
#[path = "../../tests/unit/detect/slot.rs"]
mod tests;
