//! axis‑aligned box helpers (y‑down world, so `min.y` is the top edge)
use bevy::prelude::*;

/// Box centred on `center`.
#[inline]
pub fn rect_at(center: Vec2, size: Vec2) -> Rect {
    Rect::from_center_size(center, size)
}

/// Strict overlap: boxes that only share an edge do *not* overlap, so an
/// entity resting exactly on a platform top is not in contact with it until
/// gravity pulls it in again next frame.
#[inline]
pub fn overlaps(a: &Rect, b: &Rect) -> bool {
    a.min.x < b.max.x && a.max.x > b.min.x && a.min.y < b.max.y && a.max.y > b.min.y
}

#[inline]
pub fn top(r: &Rect) -> f32 {
    r.min.y
}

#[inline]
pub fn bottom(r: &Rect) -> f32 {
    r.max.y
}
