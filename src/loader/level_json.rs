use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::config::WindowSettings;
use crate::error::TileError;
use crate::ir_level::*;

#[derive(Deserialize)]
struct JsonLevel {
    #[serde(default)]
    window: WindowSettings,
    #[serde(default = "sky")]
    background: [u8; 3],
    tile_size: f32,
    tiles: Vec<JsonTile>,
    #[serde(default)]
    rows: Vec<String>,
}

fn sky() -> [u8; 3] {
    [146, 244, 255]
}

#[derive(Deserialize)]
struct JsonTile {
    code: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    image: Option<String>,
}

fn tile_to_ir(t: JsonTile) -> Result<IrTile, TileError> {
    let mut chars = t.code.chars();
    let code = match (chars.next(), chars.next()) {
        (Some(c), None) => c,
        _ => {
            return Err(TileError::InvalidLevel(format!(
                "tile code must be a single character, got {:?}",
                t.code
            )))
        }
    };

    if t.image.is_some() && t.name.is_empty() {
        return Err(TileError::BlankName { code });
    }

    Ok(IrTile {
        code,
        name: t.name,
        image: t.image,
    })
}

pub fn decode_level_str(txt: &str, path: &Path) -> Result<IrLevel, TileError> {
    let j: JsonLevel = serde_json::from_str(txt).map_err(|source| TileError::Json {
        path: path.to_path_buf(),
        source,
    })?;

    if !j.tile_size.is_finite() || j.tile_size <= 0.0 {
        return Err(TileError::InvalidTileSize(j.tile_size));
    }
    if j.window.width <= 0 || j.window.height <= 0 {
        return Err(TileError::InvalidLevel(format!(
            "window size must be positive, got {}x{}",
            j.window.width, j.window.height
        )));
    }

    let mut tiles = Vec::with_capacity(j.tiles.len());
    let mut codes = HashSet::new();
    let mut names = HashSet::new();
    for t in j.tiles {
        let tile = tile_to_ir(t)?;
        if !codes.insert(tile.code) {
            return Err(TileError::DuplicateCode(tile.code));
        }
        if !tile.name.is_empty() && !names.insert(tile.name.clone()) {
            return Err(TileError::DuplicateName(tile.name));
        }
        tiles.push(tile);
    }

    // Checked here so a bad level fails before any texture is loaded
    for (row, line) in j.rows.iter().enumerate() {
        for (col, code) in line.chars().enumerate() {
            if !codes.contains(&code) {
                return Err(TileError::UnknownCode { row, col, code });
            }
        }
    }

    Ok(IrLevel {
        window: j.window,
        background: j.background,
        tile_size: j.tile_size,
        tiles,
        rows: j.rows,
    })
}

pub fn decode_level_file_to_ir(path: &str) -> Result<(IrLevel, PathBuf), TileError> {
    let p = Path::new(path);
    if p.extension().and_then(|e| e.to_str()) != Some("json") {
        return Err(TileError::InvalidLevel(format!(
            "Level file must be a JSON file: {path}"
        )));
    }

    let txt = std::fs::read_to_string(p).map_err(|source| TileError::Io {
        path: p.to_path_buf(),
        source,
    })?;
    let ir = decode_level_str(&txt, p)?;

    let level_dir = p
        .parent()
        .map(|d| d.to_path_buf())
        .unwrap_or_else(|| PathBuf::from("./"));

    Ok((ir, level_dir))
}
