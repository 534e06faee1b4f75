use macroquad::logging::warn;
use macroquad::prelude::*;

use crate::error::TileError;
use crate::registry::TileRegistry;
use crate::surface::Surface;
use crate::tile::{PlacedTile, Tile};

/// Codes and names to skip in [`Tilemap::collision_test`].
#[derive(Debug, Clone, Default)]
pub struct CollisionFilter {
    pub ignore_codes: Vec<char>,
    pub ignore_names: Vec<String>,
}

impl CollisionFilter {
    pub fn ignore_code(mut self, code: char) -> Self {
        self.ignore_codes.push(code);
        self
    }

    pub fn ignore_name(mut self, name: impl Into<String>) -> Self {
        self.ignore_names.push(name.into());
        self
    }

    #[inline]
    fn skips<S: Surface>(&self, tile: &PlacedTile<S>) -> bool {
        self.ignore_codes.contains(&tile.code())
            || self.ignore_names.iter().any(|n| n == tile.name())
    }
}

/// Grid of placed tiles built from rows of legend codes.
///
/// Cell `(col, row)` starts at `(col * tile_size, row * tile_size)` and
/// moves with the map's scroll offset. Rows may differ in length.
#[derive(Debug, Clone)]
pub struct Tilemap<S = Texture2D> {
    rows: Vec<Vec<PlacedTile<S>>>,
    tile_size: f32,
    offset: Vec2,
}

impl<S: Surface> Tilemap<S> {
    pub fn from_rows<R: AsRef<str>>(
        rows: &[R],
        registry: &TileRegistry<S>,
        tile_size: f32,
    ) -> Result<Self, TileError> {
        if !tile_size.is_finite() || tile_size <= 0.0 {
            return Err(TileError::InvalidTileSize(tile_size));
        }

        let mut placed = Vec::with_capacity(rows.len());
        for (row, line) in rows.iter().enumerate() {
            let mut cells = Vec::new();
            for (col, code) in line.as_ref().chars().enumerate() {
                let Some(tiletype) = registry.get(code) else {
                    warn!("Unknown tile code '{}' at row {}, column {}", code, row, col);
                    return Err(TileError::UnknownCode { row, col, code });
                };
                cells.push(PlacedTile::new(
                    tiletype.clone(),
                    tile_size * col as f32,
                    tile_size * row as f32,
                ));
            }
            placed.push(cells);
        }

        Ok(Tilemap {
            rows: placed,
            tile_size,
            offset: Vec2::ZERO,
        })
    }

    pub fn tile_size(&self) -> f32 {
        self.tile_size
    }

    /// Total scroll applied by the `move_*` / `goto` calls.
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    pub fn rows(&self) -> &[Vec<PlacedTile<S>>] {
        &self.rows
    }

    pub fn get(&self, col: usize, row: usize) -> Option<&PlacedTile<S>> {
        self.rows.get(row).and_then(|r| r.get(col))
    }

    /// Every tile, row by row.
    pub fn tiles(&self) -> impl Iterator<Item = &PlacedTile<S>> {
        self.rows.iter().flatten()
    }

    fn tiles_mut(&mut self) -> impl Iterator<Item = &mut PlacedTile<S>> {
        self.rows.iter_mut().flatten()
    }

    /// Replace the tile type at a cell, keeping its position.
    pub fn set(&mut self, col: usize, row: usize, tiletype: &Tile<S>) -> Result<(), TileError> {
        let cell = self
            .rows
            .get_mut(row)
            .and_then(|r| r.get_mut(col))
            .ok_or(TileError::OutOfBounds { col, row })?;
        cell.update_tiletype(tiletype.clone());
        Ok(())
    }

    pub fn draw(&self) {
        for tile in self.tiles() {
            tile.draw();
        }
    }

    pub fn move_x(&mut self, amount: f32) {
        self.move_xy(amount, 0.0);
    }

    pub fn move_y(&mut self, amount: f32) {
        self.move_xy(0.0, amount);
    }

    pub fn move_xy(&mut self, dx: f32, dy: f32) {
        self.offset += vec2(dx, dy);
        for tile in self.tiles_mut() {
            tile.move_by(dx, dy);
        }
    }

    /// Scroll so the map's origin lands at `(x, y)`.
    pub fn goto(&mut self, x: f32, y: f32) {
        let delta = vec2(x, y) - self.offset;
        self.move_xy(delta.x, delta.y);
    }

    /// Rects of all tiles overlapping `rect`, row by row, minus the filtered ones.
    pub fn collision_test(&self, rect: &Rect, filter: &CollisionFilter) -> Vec<Rect> {
        self.tiles()
            .filter(|t| t.collides_with(rect) && !filter.skips(t))
            .map(|t| t.rect())
            .collect()
    }
}
