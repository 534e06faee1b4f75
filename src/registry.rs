use std::collections::HashMap;

use macroquad::logging::warn;
use macroquad::prelude::Texture2D;

use crate::error::TileError;
use crate::surface::Surface;
use crate::tile::Tile;

/// Legend of tile types, looked up by code or by name.
///
/// Codes are unique. Names are unique among named tiles; unnamed null
/// tiles may repeat.
#[derive(Debug, Clone)]
pub struct TileRegistry<S = Texture2D> {
    tiles: Vec<Tile<S>>,
    by_code: HashMap<char, usize>,
    by_name: HashMap<String, usize>,
}

impl<S: Surface> TileRegistry<S> {
    pub fn new() -> Self {
        TileRegistry {
            tiles: Vec::new(),
            by_code: HashMap::new(),
            by_name: HashMap::new(),
        }
    }

    pub fn register(&mut self, tile: Tile<S>) -> Result<(), TileError> {
        if self.by_code.contains_key(&tile.code()) {
            warn!("Tile code '{}' is already in use", tile.code());
            return Err(TileError::DuplicateCode(tile.code()));
        }
        if !tile.name().is_empty() && self.by_name.contains_key(tile.name()) {
            warn!("Tile name '{}' is already in use", tile.name());
            return Err(TileError::DuplicateName(tile.name().to_owned()));
        }

        let idx = self.tiles.len();
        self.by_code.insert(tile.code(), idx);
        if !tile.name().is_empty() {
            self.by_name.insert(tile.name().to_owned(), idx);
        }
        self.tiles.push(tile);
        Ok(())
    }

    #[inline]
    pub fn get(&self, code: char) -> Option<&Tile<S>> {
        self.by_code.get(&code).map(|&i| &self.tiles[i])
    }

    #[inline]
    pub fn by_name(&self, name: &str) -> Option<&Tile<S>> {
        self.by_name.get(name).map(|&i| &self.tiles[i])
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Tiles in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Tile<S>> {
        self.tiles.iter()
    }
}

impl<S: Surface> Default for TileRegistry<S> {
    fn default() -> Self {
        Self::new()
    }
}
