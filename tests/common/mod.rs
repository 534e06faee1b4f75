// tests/common/mod.rs

use macroquad::prelude::*;
use tilegrid::Surface;

/// Image stand-in of a fixed size; drawing is a no-op.
#[derive(Clone, Debug)]
pub struct Blank(pub Vec2);

impl Surface for Blank {
    fn size(&self) -> Vec2 {
        self.0
    }

    fn blit(&self, _dest: Rect) {}
}
