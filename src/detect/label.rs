use image::RgbaImage;

use crate::detect::predicate::PlaceholderPredicate;

/// A 4-connected region of placeholder pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Component {
    pub min_x: u32,
    pub min_y: u32,
    /// Inclusive.
    pub max_x: u32,
    /// Inclusive.
    pub max_y: u32,
    /// Number of member pixels.
    pub count: u64,
}

impl Component {
    pub fn width(&self) -> u32 {
        self.max_x - self.min_x + 1
    }

    pub fn height(&self) -> u32 {
        self.max_y - self.min_y + 1
    }
}

/// Label every 4-connected component of pixels matching `predicate`.
///
/// Components come back in discovery order (row-major by their first pixel). Each pixel is
/// visited once, so the pass is `O(width * height)` regardless of component count.
pub fn label_components(pixels: &RgbaImage, predicate: PlaceholderPredicate) -> Vec<Component> {
    let (w, h) = pixels.dimensions();
    let data = pixels.as_raw();
    let (wu, hu) = (w as usize, h as usize);
    let matches = |idx: usize| predicate.matches(&data[idx * 4..idx * 4 + 4]);

    let mut visited = vec![false; wu * hu];
    let mut stack: Vec<usize> = Vec::new();
    let mut out = Vec::new();

    for start in 0..wu * hu {
        if visited[start] {
            continue;
        }
        visited[start] = true;
        if !matches(start) {
            continue;
        }

        let (sx, sy) = ((start % wu) as u32, (start / wu) as u32);
        let mut c = Component {
            min_x: sx,
            min_y: sy,
            max_x: sx,
            max_y: sy,
            count: 0,
        };

        stack.push(start);
        while let Some(idx) = stack.pop() {
            let (x, y) = (idx % wu, idx / wu);
            c.min_x = c.min_x.min(x as u32);
            c.max_x = c.max_x.max(x as u32);
            c.min_y = c.min_y.min(y as u32);
            c.max_y = c.max_y.max(y as u32);
            c.count += 1;

            let mut visit = |n: usize| {
                if !visited[n] && matches(n) {
                    visited[n] = true;
                    stack.push(n);
                }
            };
            if x + 1 < wu {
                visit(idx + 1);
            }
            if x > 0 {
                visit(idx - 1);
            }
            if y + 1 < hu {
                visit(idx + wu);
            }
            if y > 0 {
                visit(idx - wu);
            }
        }

        out.push(c);
    }

    out
}

#[cfg(test)]
#[path = "../../tests/unit/detect/label.rs"]
mod tests;
