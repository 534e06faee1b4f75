use macroquad::prelude::*;

use crate::surface::Surface;
use crate::tilemap::{CollisionFilter, Tilemap};

/// Which sides of a [`Body`] hit something during one move.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Collisions {
    pub top: bool,
    pub bottom: bool,
    pub left: bool,
    pub right: bool,
}

/// A moving rectangle that is pushed out of solid tiles.
#[derive(Debug, Clone)]
pub struct Body<S = Texture2D> {
    image: Option<S>,
    pub rect: Rect,
    pub velocity: Vec2,
}

impl<S: Surface> Body<S> {
    /// Body sized to its image.
    pub fn new(image: S, x: f32, y: f32) -> Self {
        let size = image.size();
        Body {
            image: Some(image),
            rect: Rect::new(x, y, size.x, size.y),
            velocity: Vec2::ZERO,
        }
    }

    /// Invisible body with an explicit size.
    pub fn with_size(x: f32, y: f32, w: f32, h: f32) -> Self {
        Body {
            image: None,
            rect: Rect::new(x, y, w, h),
            velocity: Vec2::ZERO,
        }
    }

    pub fn image(&self) -> Option<&S> {
        self.image.as_ref()
    }

    /// Apply one step of velocity, resolving x first and then y.
    pub fn move_and_collide<T: Surface>(
        &mut self,
        map: &Tilemap<T>,
        filter: &CollisionFilter,
    ) -> Collisions {
        let mut hits = Collisions::default();

        self.rect.x += self.velocity.x;
        for tile in map.collision_test(&self.rect, filter) {
            if self.velocity.x > 0.0 {
                self.rect.x = tile.left() - self.rect.w;
                hits.right = true;
            } else if self.velocity.x < 0.0 {
                self.rect.x = tile.right();
                hits.left = true;
            }
        }

        self.rect.y += self.velocity.y;
        for tile in map.collision_test(&self.rect, filter) {
            if self.velocity.y > 0.0 {
                self.rect.y = tile.top() - self.rect.h;
                hits.bottom = true;
            } else if self.velocity.y < 0.0 {
                self.rect.y = tile.bottom();
                hits.top = true;
            }
        }

        hits
    }

    pub fn draw(&self) {
        if let Some(image) = &self.image {
            image.blit(self.rect);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::TileRegistry;
    use crate::testutils::FakeSurface;
    use crate::tile::Tile;

    // 4x4 room: solid border, open middle.
    fn room() -> Tilemap<FakeSurface> {
        let mut reg = TileRegistry::new();
        reg.register(Tile::null('.')).unwrap();
        reg.register(Tile::new(FakeSurface::new(16.0, 16.0), "Wall", '#').unwrap())
            .unwrap();
        reg.register(Tile::new(FakeSurface::new(16.0, 16.0), "Ladder", 'H').unwrap())
            .unwrap();
        Tilemap::from_rows(&["####", "#..#", "#.H#", "####"], &reg, 16.0).unwrap()
    }

    #[test]
    fn new_sizes_rect_to_image() {
        let body = Body::new(FakeSurface::new(10.0, 14.0), 3.0, 4.0);
        assert_eq!(body.rect, Rect::new(3.0, 4.0, 10.0, 14.0));
        assert_eq!(body.velocity, Vec2::ZERO);
    }

    #[test]
    fn falling_body_lands_on_floor() {
        let map = room();
        let mut body: Body<FakeSurface> = Body::with_size(20.0, 20.0, 8.0, 8.0);
        body.velocity = vec2(0.0, 30.0);

        let hits = body.move_and_collide(&map, &CollisionFilter::default().ignore_name("Ladder"));
        assert!(hits.bottom);
        assert!(!hits.top && !hits.left && !hits.right);
        assert_eq!(body.rect.y, 48.0 - 8.0);
    }

    #[test]
    fn walking_into_wall_stops_at_its_edge() {
        let map = room();
        let mut body: Body<FakeSurface> = Body::with_size(20.0, 18.0, 8.0, 8.0);
        body.velocity = vec2(-10.0, 0.0);

        let hits = body.move_and_collide(&map, &CollisionFilter::default());
        assert!(hits.left);
        assert_eq!(body.rect.x, 16.0);

        body.velocity = vec2(30.0, 0.0);
        let hits = body.move_and_collide(&map, &CollisionFilter::default());
        assert!(hits.right);
        assert_eq!(body.rect.x, 48.0 - 8.0);
    }

    #[test]
    fn jumping_into_ceiling_sets_top() {
        let map = room();
        let mut body: Body<FakeSurface> = Body::with_size(20.0, 20.0, 8.0, 8.0);
        body.velocity = vec2(0.0, -10.0);

        let hits = body.move_and_collide(&map, &CollisionFilter::default());
        assert!(hits.top);
        assert_eq!(body.rect.y, 16.0);
    }

    #[test]
    fn filter_applies_on_both_axes() {
        let map = room();
        let mut body: Body<FakeSurface> = Body::with_size(32.0, 20.0, 8.0, 8.0);
        body.velocity = vec2(0.0, 12.0);

        let hits = body.move_and_collide(&map, &CollisionFilter::default());
        assert!(hits.bottom);
        assert_eq!(body.rect.y, 32.0 - 8.0);

        let mut body: Body<FakeSurface> = Body::with_size(32.0, 20.0, 8.0, 8.0);
        body.velocity = vec2(0.0, 12.0);
        let hits = body.move_and_collide(&map, &CollisionFilter::default().ignore_code('H'));
        assert_eq!(hits, Collisions::default());
        assert_eq!(body.rect.y, 32.0);
    }

    #[test]
    fn draw_blits_at_current_rect() {
        let img = FakeSurface::new(8.0, 12.0);
        let mut body = Body::new(img.clone(), 10.0, 10.0);
        body.draw();
        body.rect.x += 4.0;
        body.draw();
        assert_eq!(
            img.blits(),
            vec![
                Rect::new(10.0, 10.0, 8.0, 12.0),
                Rect::new(14.0, 10.0, 8.0, 12.0)
            ]
        );

        let invisible: Body<FakeSurface> = Body::with_size(0.0, 0.0, 8.0, 8.0);
        invisible.draw();
        assert!(invisible.image().is_none());
    }
}
