use crate::config::WindowSettings;

/// Decoded level, independent of the file it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct IrLevel {
    pub window: WindowSettings,
    pub background: [u8; 3],
    pub tile_size: f32,
    pub tiles: Vec<IrTile>, // legend, file order
    pub rows: Vec<String>,  // every char is a known code
}

/// One legend entry. No image means a null tile.
#[derive(Debug, Clone, PartialEq)]
pub struct IrTile {
    pub code: char,
    pub name: String,
    pub image: Option<String>, // relative to the level file
}

impl IrLevel {
    /// Distinct image paths, first use first.
    pub fn image_paths(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for t in &self.tiles {
            if let Some(img) = t.image.as_deref() {
                if !out.contains(&img) {
                    out.push(img);
                }
            }
        }
        out
    }
}
