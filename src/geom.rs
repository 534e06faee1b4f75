use macroquad::prelude::*;

/// Rect anchored at `pos` with the given size.
#[inline]
pub fn rect_at(pos: Vec2, size: Vec2) -> Rect {
    Rect::new(pos.x, pos.y, size.x, size.y)
}

/// Strict overlap: rects that only touch along an edge do not collide,
/// and a rect with no area never collides.
#[inline]
pub fn overlaps(a: &Rect, b: &Rect) -> bool {
    if a.w <= 0.0 || a.h <= 0.0 || b.w <= 0.0 || b.h <= 0.0 {
        return false;
    }
    a.x < b.x + b.w && a.x + a.w > b.x && a.y < b.y + b.h && a.y + a.h > b.y
}
