//! Rendering Context
//!
//! The menu never touches SDL2 directly. It draws through [`MenuRenderer`], which
//! the host passes into `draw` each frame. [`SdlRenderer`] is the real backend;
//! tests supply a recording implementation instead, so menu drawing can be
//! checked without a window or graphics device.

use crate::error::MenuError;
use crate::geometry::Bounds;
use crate::sprite_cache::{SpriteCache, SpriteKey};
use crate::text;
use sdl2::image::LoadTexture;
use sdl2::pixels::{Color, PixelFormatEnum};
use sdl2::render::{BlendMode, Canvas, Texture, TextureCreator};
use sdl2::video::{Window, WindowContext};
use std::collections::HashMap;

/// Drawing capabilities the menu needs from its host
pub trait MenuRenderer {
    /// Size of `text` as it would be drawn by [`MenuRenderer::draw_text`]
    fn measure_text(&self, text: &str) -> (u32, u32);

    /// Drawable area in the same units as layout bounds
    fn viewport_size(&self) -> (u32, u32);

    fn clear(&mut self, color: Color);

    /// Stretches the background image over `dest`. No-op without a background.
    fn draw_background(&mut self, dest: Bounds) -> Result<(), MenuError>;

    /// Copies the sprite described by `sprite` onto `dest`, modulated by `tint`
    fn blit(&mut self, sprite: SpriteKey, dest: Bounds, tint: Color) -> Result<(), MenuError>;

    /// Draws `text` with its top-left corner at (x, y)
    fn draw_text(&mut self, text: &str, x: i32, y: i32, color: Color) -> Result<(), MenuError>;
}

/// SDL2 canvas backend
///
/// Sprites are rasterized on the CPU through a [`SpriteCache`] and uploaded to
/// a texture the first time each [`SpriteKey`] is drawn. Later frames reuse the
/// texture, so steady-state drawing does no pixel generation or uploads.
///
/// # Example
///
/// ```rust
/// let canvas = window.into_canvas().build().map_err(|e| e.to_string())?;
/// let texture_creator = canvas.texture_creator();
/// let mut renderer = SdlRenderer::new(canvas, &texture_creator, 3);
///
/// menu.draw(&mut renderer)?;
/// renderer.present();
/// ```
pub struct SdlRenderer<'a> {
    canvas: Canvas<Window>,
    texture_creator: &'a TextureCreator<WindowContext>,
    bitmaps: SpriteCache,
    textures: HashMap<SpriteKey, Texture<'a>>,
    background: Option<Texture<'a>>,
    text_scale: u32,
}

impl<'a> SdlRenderer<'a> {
    pub fn new(
        canvas: Canvas<Window>,
        texture_creator: &'a TextureCreator<WindowContext>,
        text_scale: u32,
    ) -> Self {
        SdlRenderer {
            canvas,
            texture_creator,
            bitmaps: SpriteCache::new(),
            textures: HashMap::new(),
            background: None,
            text_scale: text_scale.max(1),
        }
    }

    /// Loads the background image. On error the previous background is kept.
    pub fn load_background(&mut self, path: &str) -> Result<(), MenuError> {
        let texture = self
            .texture_creator
            .load_texture(path)
            .map_err(|e| MenuError::Sdl(format!("Failed to load {}: {}", path, e)))?;
        self.background = Some(texture);
        Ok(())
    }

    pub fn present(&mut self) {
        self.canvas.present();
    }

    /// Number of sprite textures uploaded so far
    pub fn cached_textures(&self) -> usize {
        self.textures.len()
    }

    fn upload(&mut self, key: SpriteKey) -> Result<Texture<'a>, MenuError> {
        let creator = self.texture_creator;
        let bitmap = self.bitmaps.get_or_generate(key)?;

        let mut texture = creator
            .create_texture_static(PixelFormatEnum::RGBA32, bitmap.width(), bitmap.height())
            .map_err(|e| {
                tracing::error!(%e, ?key, "texture allocation failed");
                MenuError::ResourceExhaustion {
                    width: bitmap.width(),
                    height: bitmap.height(),
                }
            })?;

        texture
            .update(None, &bitmap.to_rgba_bytes(), bitmap.pitch())
            .map_err(|e| MenuError::Sdl(e.to_string()))?;
        texture.set_blend_mode(BlendMode::Blend);

        tracing::debug!(?key, "uploaded sprite texture");
        Ok(texture)
    }
}

impl MenuRenderer for SdlRenderer<'_> {
    fn measure_text(&self, text: &str) -> (u32, u32) {
        text::measure_text(text, self.text_scale)
    }

    fn viewport_size(&self) -> (u32, u32) {
        self.canvas.window().size()
    }

    fn clear(&mut self, color: Color) {
        self.canvas.set_draw_color(color);
        self.canvas.clear();
    }

    fn draw_background(&mut self, dest: Bounds) -> Result<(), MenuError> {
        if let (Some(background), Some(dst)) = (&self.background, dest.to_sdl_rect()) {
            self.canvas.copy(background, None, dst)?;
        }
        Ok(())
    }

    fn blit(&mut self, sprite: SpriteKey, dest: Bounds, tint: Color) -> Result<(), MenuError> {
        let Some(dst) = dest.to_sdl_rect() else {
            return Ok(());
        };

        if !self.textures.contains_key(&sprite) {
            let texture = self.upload(sprite)?;
            self.textures.insert(sprite, texture);
        }

        let (width, height) = sprite.size();
        let texture = self
            .textures
            .get_mut(&sprite)
            .ok_or(MenuError::ResourceExhaustion { width, height })?;
        texture.set_color_mod(tint.r, tint.g, tint.b);
        texture.set_alpha_mod(tint.a);

        self.canvas.copy(texture, None, dst)?;
        Ok(())
    }

    fn draw_text(&mut self, text: &str, x: i32, y: i32, color: Color) -> Result<(), MenuError> {
        text::draw_text(&mut self.canvas, text, x, y, color, self.text_scale)?;
        Ok(())
    }
}
