use std::collections::HashMap;
use std::path::Path;

use anyhow::Context;
use macroquad::logging::info;
use macroquad::prelude::*;

use crate::config::WindowSettings;
use crate::error::TileError;
use crate::ir_level::IrLevel;
use crate::loader::level_json::decode_level_file_to_ir;
use crate::registry::TileRegistry;
use crate::surface::{load_image, Surface};
use crate::tile::Tile;
use crate::tilemap::Tilemap;

/// A loaded level: its legend, the grid built from it and how to show it.
pub struct Level<S = Texture2D> {
    pub registry: TileRegistry<S>,
    pub tilemap: Tilemap<S>,
    pub background: Color,
    pub window: WindowSettings,
}

impl Level {
    pub async fn load(path: &str) -> anyhow::Result<Self> {
        let (ir, base) = decode_level_file_to_ir(path)?;
        Self::from_ir(ir, &base).await
    }

    /// Load every distinct image once, then build the level.
    pub async fn from_ir(ir: IrLevel, base_dir: &Path) -> anyhow::Result<Self> {
        let mut images = HashMap::new();
        for rel in ir.image_paths() {
            let img_path = base_dir.join(rel);
            let img_str = img_path
                .to_str()
                .with_context(|| format!("Image path is not UTF-8: {}", img_path.display()))?;
            let tex = load_image(img_str)
                .await
                .with_context(|| format!("Loading texture {}", rel))?;
            images.insert(rel.to_owned(), tex);
        }

        let level = Self::from_parts(ir, &images)?;
        info!(
            "Loaded level: {} tile types, {} images, {} rows",
            level.registry.len(),
            images.len(),
            level.tilemap.rows().len()
        );
        Ok(level)
    }
}

impl<S: Surface> Level<S> {
    /// Build a level from already loaded images keyed by their path in the level file.
    pub fn from_parts(ir: IrLevel, images: &HashMap<String, S>) -> Result<Self, TileError> {
        let mut registry = TileRegistry::new();
        for t in ir.tiles {
            let tile = match t.image {
                Some(path) => {
                    let image = images
                        .get(&path)
                        .cloned()
                        .ok_or(TileError::MissingImage(path))?;
                    Tile::new(image, t.name, t.code)?
                }
                None => Tile::named_null(t.name, t.code),
            };
            registry.register(tile)?;
        }

        let tilemap = Tilemap::from_rows(ir.rows.as_slice(), &registry, ir.tile_size)?;
        let [r, g, b] = ir.background;

        Ok(Level {
            registry,
            tilemap,
            background: Color::from_rgba(r, g, b, 255),
            window: ir.window,
        })
    }

    pub fn draw(&self) {
        clear_background(self.background);
        self.tilemap.draw();
    }
}
