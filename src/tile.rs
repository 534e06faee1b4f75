use macroquad::logging::warn;
use macroquad::prelude::*;

use crate::error::TileError;
use crate::geom::{overlaps, rect_at};
use crate::surface::Surface;

/// One kind of tile (grass, dirt, air, ...).
///
/// A tile with an image carries a bounding rect once placed. A null tile
/// has no image, a zero-size footprint and never collides.
#[derive(Debug, Clone, PartialEq)]
pub struct Tile<S = Texture2D> {
    image: Option<S>,
    name: String,
    code: char,
    has_rect: bool,
}

impl<S: Surface> Tile<S> {
    /// Tile drawn with `image`. The name must not be blank.
    pub fn new(image: S, name: impl Into<String>, code: char) -> Result<Self, TileError> {
        let name = name.into();
        if name.is_empty() {
            warn!("Name cannot be a blank string for tile '{}'", code);
            return Err(TileError::BlankName { code });
        }
        Ok(Tile {
            image: Some(image),
            name,
            code,
            has_rect: true,
        })
    }

    /// Blank tile with no image and no rect.
    pub fn null(code: char) -> Self {
        Self::named_null(String::new(), code)
    }

    /// Blank tile that still has a name, e.g. "Air".
    pub fn named_null(name: impl Into<String>, code: char) -> Self {
        Tile {
            image: None,
            name: name.into(),
            code,
            has_rect: false,
        }
    }

    pub fn image(&self) -> Option<&S> {
        self.image.as_ref()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Legend character used for this tile in grid rows.
    pub fn code(&self) -> char {
        self.code
    }

    pub fn has_rect(&self) -> bool {
        self.has_rect
    }

    pub fn is_null(&self) -> bool {
        self.image.is_none()
    }

    /// Image size, or zero for a null tile.
    pub fn size(&self) -> Vec2 {
        self.image.as_ref().map(S::size).unwrap_or(Vec2::ZERO)
    }
}

/// A [`Tile`] placed at a world position.
///
/// `rect` always sits at `(x, y)` and is sized to the current image, or is
/// empty when the tile type carries no rect.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedTile<S = Texture2D> {
    tiletype: Tile<S>,
    x: f32,
    y: f32,
    rect: Rect,
}

impl<S: Surface> PlacedTile<S> {
    pub fn new(tiletype: Tile<S>, x: f32, y: f32) -> Self {
        let mut tile = PlacedTile {
            tiletype,
            x,
            y,
            rect: Rect::new(x, y, 0.0, 0.0),
        };
        tile.generate_rect();
        tile
    }

    pub fn tiletype(&self) -> &Tile<S> {
        &self.tiletype
    }

    pub fn name(&self) -> &str {
        self.tiletype.name()
    }

    pub fn code(&self) -> char {
        self.tiletype.code()
    }

    pub fn image(&self) -> Option<&S> {
        self.tiletype.image()
    }

    pub fn has_rect(&self) -> bool {
        self.tiletype.has_rect()
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Blit the image at the tile's rect. Null tiles draw nothing.
    pub fn draw(&self) {
        if !self.has_rect() {
            return;
        }
        if let Some(image) = self.image() {
            image.blit(self.rect);
        }
    }

    /// Rebuild `rect` from the position and the current image.
    pub fn generate_rect(&mut self) {
        let size = if self.has_rect() {
            self.tiletype.size()
        } else {
            Vec2::ZERO
        };
        self.rect = rect_at(vec2(self.x, self.y), size);
    }

    /// Swap the tile type in place, keeping the position.
    pub fn update_tiletype(&mut self, new_tiletype: Tile<S>) {
        self.tiletype = new_tiletype;
        self.generate_rect();
    }

    pub fn move_by(&mut self, dx: f32, dy: f32) {
        self.move_to(self.x + dx, self.y + dy);
    }

    pub fn move_to(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
        self.rect.move_to(vec2(x, y));
    }

    /// Whether this tile's rect overlaps `other`. Tiles without a rect never do.
    pub fn collides_with(&self, other: &Rect) -> bool {
        self.has_rect() && overlaps(&self.rect, other)
    }
}
