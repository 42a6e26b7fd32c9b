//! Procedural Sprite Rasterization
//!
//! CPU-side pixel generation for the primitive sprites a rounded rectangle is
//! composed from. Bitmaps are plain RGBA grids and don't need an SDL context;
//! the renderer uploads them to textures separately.

use crate::error::MenuError;
use sdl2::pixels::Color;

/// Fully transparent pixel
pub const TRANSPARENT: Color = Color::RGBA(0, 0, 0, 0);

/// A width x height grid of pixels, stored row-major
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteBitmap {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl SpriteBitmap {
    /// Allocates a bitmap filled with `fill`.
    ///
    /// Allocation is fallible so an impossible size becomes
    /// [`MenuError::ResourceExhaustion`] instead of an abort.
    fn filled(width: u32, height: u32, fill: Color) -> Result<Self, MenuError> {
        if width == 0 || height == 0 {
            return Err(MenuError::InvalidGeometry {
                width: width as i32,
                height: height as i32,
                radius: 0,
            });
        }

        let exhausted = || MenuError::ResourceExhaustion { width, height };
        let len = (width as usize)
            .checked_mul(height as usize)
            .ok_or_else(exhausted)?;

        let mut pixels = Vec::new();
        pixels.try_reserve_exact(len).map_err(|_| exhausted())?;
        pixels.resize(len, fill);

        Ok(SpriteBitmap {
            width,
            height,
            pixels,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Pixel at (x, y), or `None` outside the bitmap
    #[cfg(test)]
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x < self.width && y < self.height {
            Some(self.pixels[(y * self.width + x) as usize])
        } else {
            None
        }
    }

    fn set_pixel(&mut self, x: u32, y: u32, color: Color) {
        let index = (y * self.width + x) as usize;
        self.pixels[index] = color;
    }

    /// Number of pixels with non-zero alpha
    #[cfg(test)]
    pub fn opaque_count(&self) -> usize {
        self.pixels.iter().filter(|p| p.a > 0).count()
    }

    /// Bytes per row in [`Self::to_rgba_bytes`]
    pub fn pitch(&self) -> usize {
        self.width as usize * 4
    }

    /// Pixel data as R, G, B, A bytes, matching `PixelFormatEnum::RGBA32`
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 4);
        for pixel in &self.pixels {
            bytes.extend_from_slice(&[pixel.r, pixel.g, pixel.b, pixel.a]);
        }
        bytes
    }
}

/// Generates a filled circle sprite of side `2 * radius`.
///
/// A pixel is opaque `color` when its offset from the centre pixel `(radius,
/// radius)` has squared length `<= radius * radius`, and transparent otherwise.
/// The result is deterministic for a given (radius, color) pair, so callers
/// should cache it rather than regenerate it every frame.
///
/// # Errors
///
/// - `InvalidGeometry` when `radius` is zero
/// - `ResourceExhaustion` when the pixel buffer can't be allocated
pub fn circle_sprite(radius: u32, color: Color) -> Result<SpriteBitmap, MenuError> {
    if radius == 0 {
        return Err(MenuError::InvalidGeometry {
            width: 0,
            height: 0,
            radius: 0,
        });
    }

    let diameter = radius.checked_mul(2).ok_or(MenuError::ResourceExhaustion {
        width: u32::MAX,
        height: u32::MAX,
    })?;
    let mut bitmap = SpriteBitmap::filled(diameter, diameter, TRANSPARENT)?;

    let r = radius as i64;
    let radius_squared = r * r;

    for y in 0..diameter {
        let dy = y as i64 - r;
        for x in 0..diameter {
            let dx = x as i64 - r;
            if dx * dx + dy * dy <= radius_squared {
                bitmap.set_pixel(x, y, color);
            }
        }
    }

    Ok(bitmap)
}

/// Generates a width x height sprite filled with one color
pub fn solid_sprite(width: u32, height: u32, color: Color) -> Result<SpriteBitmap, MenuError> {
    SpriteBitmap::filled(width, height, color)
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Color = Color::RGB(255, 0, 0);

    #[test]
    fn test_circle_size_and_center() {
        let circle = circle_sprite(20, RED).unwrap();
        assert_eq!(circle.width(), 40);
        assert_eq!(circle.height(), 40);
        assert_eq!(circle.pixel(20, 20), Some(RED));
    }

    #[test]
    fn test_circle_corners_transparent() {
        let circle = circle_sprite(10, RED).unwrap();
        assert_eq!(circle.pixel(0, 0), Some(TRANSPARENT));
        assert_eq!(circle.pixel(19, 0), Some(TRANSPARENT));
        assert_eq!(circle.pixel(0, 19), Some(TRANSPARENT));
        assert_eq!(circle.pixel(19, 19), Some(TRANSPARENT));
    }

    #[test]
    fn test_circle_boundary_is_inclusive() {
        // (radius, 0) offset from centre is exactly on the circle
        let circle = circle_sprite(8, RED).unwrap();
        assert_eq!(circle.pixel(8, 0), Some(RED));
        assert_eq!(circle.pixel(0, 8), Some(RED));
        assert_eq!(circle.pixel(7, 0), Some(TRANSPARENT));
    }

    #[test]
    fn test_circle_pixels_follow_distance_rule() {
        let radius = 12u32;
        let circle = circle_sprite(radius, RED).unwrap();
        let r = radius as i64;

        for y in 0..circle.height() {
            for x in 0..circle.width() {
                let dx = x as i64 - r;
                let dy = y as i64 - r;
                let expected = if dx * dx + dy * dy <= r * r { RED } else { TRANSPARENT };
                assert_eq!(circle.pixel(x, y), Some(expected));
            }
        }
    }

    #[test]
    fn test_circle_area_close_to_pi_r_squared() {
        for radius in [8u32, 13, 20, 32, 64] {
            let circle = circle_sprite(radius, RED).unwrap();
            let expected = std::f64::consts::PI * (radius * radius) as f64;
            let actual = circle.opaque_count() as f64;
            let error = (actual - expected).abs() / expected;
            assert!(error < 0.15, "radius {} filled {} vs {:.1}", radius, actual, expected);
        }
    }

    #[test]
    fn test_zero_radius_rejected() {
        assert!(matches!(
            circle_sprite(0, RED),
            Err(MenuError::InvalidGeometry { .. })
        ));
    }

    #[test]
    fn test_solid_sprite_fully_filled() {
        let solid = solid_sprite(60, 20, RED).unwrap();
        assert_eq!(solid.opaque_count(), 60 * 20);
        assert_eq!(solid.pixel(59, 19), Some(RED));
        assert_eq!(solid.pixel(60, 0), None);
    }

    #[test]
    fn test_solid_sprite_rejects_empty() {
        assert!(solid_sprite(0, 10, RED).is_err());
        assert!(solid_sprite(10, 0, RED).is_err());
    }

    #[test]
    fn test_unallocatable_sprite_reports_exhaustion() {
        assert!(matches!(
            solid_sprite(u32::MAX, u32::MAX, RED),
            Err(MenuError::ResourceExhaustion { width: u32::MAX, height: u32::MAX })
        ));
        assert!(matches!(
            circle_sprite(u32::MAX, RED),
            Err(MenuError::ResourceExhaustion { .. })
        ));
    }

    #[test]
    fn test_rgba_bytes_layout() {
        let solid = solid_sprite(2, 1, Color::RGBA(1, 2, 3, 4)).unwrap();
        assert_eq!(solid.pitch(), 8);
        assert_eq!(solid.to_rgba_bytes(), vec![1, 2, 3, 4, 1, 2, 3, 4]);
    }

    #[test]
    fn test_generation_is_deterministic() {
        assert_eq!(circle_sprite(9, RED).unwrap(), circle_sprite(9, RED).unwrap());
    }
}
