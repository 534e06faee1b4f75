use std::cell::RefCell;
use std::rc::Rc;

use macroquad::prelude::*;

use crate::surface::Surface;

/// Surface that records where it was blitted instead of touching the GPU.
#[derive(Debug, Clone)]
pub struct FakeSurface {
    pub size: Vec2,
    pub blits: Rc<RefCell<Vec<Rect>>>,
}

impl FakeSurface {
    pub fn new(w: f32, h: f32) -> Self {
        FakeSurface {
            size: vec2(w, h),
            blits: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn blits(&self) -> Vec<Rect> {
        self.blits.borrow().clone()
    }
}

impl PartialEq for FakeSurface {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && Rc::ptr_eq(&self.blits, &other.blits)
    }
}

impl Surface for FakeSurface {
    fn size(&self) -> Vec2 {
        self.size
    }

    fn blit(&self, dest: Rect) {
        self.blits.borrow_mut().push(dest);
    }
}
