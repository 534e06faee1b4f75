use std::path::PathBuf;
use std::{error, fmt, io};

use serde_json::Error as SerdeError;

/// Errors raised while building tiles, grids and levels.
#[derive(Debug)]
pub enum TileError {
    /// Reading a level file failed.
    Io { path: PathBuf, source: io::Error },
    /// A level file is not valid JSON for the level schema.
    Json { path: PathBuf, source: SerdeError },
    /// The graphics library could not load an image.
    Image {
        path: String,
        source: macroquad::Error,
    },
    /// A tile with an image was given an empty name.
    BlankName { code: char },
    /// Two named tiles share a name.
    DuplicateName(String),
    /// Two tiles share a legend code.
    DuplicateCode(char),
    /// A grid row uses a code with no registered tile.
    UnknownCode { row: usize, col: usize, code: char },
    /// Tile size must be finite and positive.
    InvalidTileSize(f32),
    /// No tile exists at the given grid cell.
    OutOfBounds { col: usize, row: usize },
    /// A tile refers to an image that was not supplied.
    MissingImage(String),
    /// The level file is structurally wrong.
    InvalidLevel(String),
}

impl fmt::Display for TileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TileError::Io { path, source } => {
                write!(f, "I/O error reading {}: {}", path.display(), source)
            }
            TileError::Json { path, source } => {
                write!(f, "Failed to parse {}: {}", path.display(), source)
            }
            TileError::Image { path, source } => {
                write!(f, "Unable to load image {}: {}", path, source)
            }
            TileError::BlankName { code } => {
                write!(f, "Tile '{}' has a blank name", code)
            }
            TileError::DuplicateName(name) => write!(f, "Tile name '{}' is already in use", name),
            TileError::DuplicateCode(code) => write!(f, "Tile code '{}' is already in use", code),
            TileError::UnknownCode { row, col, code } => write!(
                f,
                "Unknown tile code '{}' at row {}, column {}",
                code, row, col
            ),
            TileError::InvalidTileSize(size) => {
                write!(f, "Tile size must be positive, got {}", size)
            }
            TileError::OutOfBounds { col, row } => {
                write!(f, "No tile at column {}, row {}", col, row)
            }
            TileError::MissingImage(path) => write!(f, "No image loaded for {}", path),
            TileError::InvalidLevel(msg) => write!(f, "Invalid level: {}", msg),
        }
    }
}

impl error::Error for TileError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            TileError::Io { source, .. } => Some(source),
            TileError::Json { source, .. } => Some(source),
            TileError::Image { source, .. } => Some(source),
            _ => None,
        }
    }
}
