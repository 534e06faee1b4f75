use macroquad::logging::error;
use macroquad::prelude::*;

use crate::error::TileError;

/// Something that can be drawn as a tile or body image.
///
/// Implemented for [`Texture2D`]; the handle is cloned into every placed
/// tile that uses it, so clones must share the underlying pixels.
pub trait Surface: Clone {
    /// Pixel size of the image.
    fn size(&self) -> Vec2;
    /// Draw the whole image stretched into `dest`.
    fn blit(&self, dest: Rect);
}

impl Surface for Texture2D {
    fn size(&self) -> Vec2 {
        Texture2D::size(self)
    }

    fn blit(&self, dest: Rect) {
        draw_texture_ex(
            self,
            dest.x,
            dest.y,
            WHITE,
            DrawTextureParams {
                dest_size: Some(vec2(dest.w, dest.h)),
                ..Default::default()
            },
        );
    }
}

/// Load an image from disk as a nearest-filtered texture.
pub async fn load_image(path: &str) -> Result<Texture2D, TileError> {
    match load_texture(path).await {
        Ok(tex) => {
            tex.set_filter(FilterMode::Nearest);
            Ok(tex)
        }
        Err(source) => {
            error!("Unable to load image {}: {}", path, source);
            Err(TileError::Image {
                path: path.to_owned(),
                source,
            })
        }
    }
}
