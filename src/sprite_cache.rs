use crate::error::MenuError;
use crate::raster::{circle_sprite, solid_sprite, SpriteBitmap};
use sdl2::pixels::Color;
use std::collections::HashMap;

/// The parameters that fully determine a generated sprite
///
/// Two equal keys always produce identical pixels, which is what makes the
/// key usable for caching both bitmaps and the textures uploaded from them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpriteKey {
    Circle { radius: u32, color: Color },
    Solid { width: u32, height: u32, color: Color },
}

impl SpriteKey {
    /// Rasterizes the sprite this key describes
    pub fn generate(&self) -> Result<SpriteBitmap, MenuError> {
        match *self {
            SpriteKey::Circle { radius, color } => circle_sprite(radius, color),
            SpriteKey::Solid {
                width,
                height,
                color,
            } => solid_sprite(width, height, color),
        }
    }

    /// Size of the generated bitmap in pixels
    pub fn size(&self) -> (u32, u32) {
        match *self {
            SpriteKey::Circle { radius, .. } => (radius * 2, radius * 2),
            SpriteKey::Solid { width, height, .. } => (width, height),
        }
    }
}

/// Memoizes generated bitmaps by [`SpriteKey`]
///
/// Buttons are redrawn every frame with the same handful of sprites, so each
/// bitmap is generated on first use and then served from the map.
#[derive(Debug, Default)]
pub struct SpriteCache {
    bitmaps: HashMap<SpriteKey, SpriteBitmap>,
}

impl SpriteCache {
    pub fn new() -> Self {
        SpriteCache {
            bitmaps: HashMap::new(),
        }
    }

    /// Returns the cached bitmap, generating it on a miss.
    ///
    /// Generation errors are returned as-is and nothing is cached for the key.
    pub fn get_or_generate(&mut self, key: SpriteKey) -> Result<&SpriteBitmap, MenuError> {
        if !self.bitmaps.contains_key(&key) {
            let bitmap = key.generate()?;
            tracing::debug!(?key, "generated sprite bitmap");
            self.bitmaps.insert(key, bitmap);
        }

        self.bitmaps
            .get(&key)
            .ok_or(MenuError::ResourceExhaustion {
                width: key.size().0,
                height: key.size().1,
            })
    }

    #[cfg(test)]
    pub fn contains(&self, key: &SpriteKey) -> bool {
        self.bitmaps.contains_key(key)
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.bitmaps.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.bitmaps.is_empty()
    }
}
