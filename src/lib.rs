#![warn(missing_docs)]

//! Tile types, placed tiles and a scrollable, collidable tile grid for Macroquad.

mod body;
mod config;
mod error;
mod geom;
mod ir_level;
mod level;
mod loader {
    pub mod level_json;
}
mod registry;
mod surface;
#[cfg(test)]
mod testutils;
mod tile;
mod tilemap;

pub use body::{Body, Collisions};
pub use config::{window_conf_from_level, WindowSettings};
pub use error::TileError;
pub use geom::overlaps;
pub use ir_level::{IrLevel, IrTile};
pub use level::Level;
pub use loader::level_json::{decode_level_file_to_ir, decode_level_str};
pub use registry::TileRegistry;
pub use surface::{load_image, Surface};
pub use tile::{PlacedTile, Tile};
pub use tilemap::{CollisionFilter, Tilemap};
