//! Rounded Rectangle Composition
//!
//! Builds a rounded rectangle out of axis-aligned blits only: a filled circle
//! sprite at each corner, solid strips along the four edges, and a solid centre.
//! No arc or rounded-rect primitive is needed from the renderer.
//!
//! # Layout
//!
//! ```text
//!  +----+-----------+----+
//!  | TL |    top    | TR |   corners: 2r x 2r circle sprites
//!  |    +-----------+    |
//!  |left|  center   |right   edges: (w - 2r) x r and r x (h - 2r)
//!  |    +-----------+    |
//!  | BL |  bottom   | BR |
//!  +----+-----------+----+
//! ```
//!
//! Each corner receives the whole circle rather than a quarter of it. The circle
//! spans exactly the 2r x 2r square at its corner, so it stays inside the
//! rectangle and the overlap with edge and centre strips is painted in the same
//! color.

use crate::error::MenuError;
use crate::geometry::Bounds;
use crate::sprite_cache::SpriteKey;
use sdl2::pixels::Color;

/// Which piece of the rounded rectangle a blit fills
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundedRectPart {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    Top,
    Bottom,
    Left,
    Right,
    Center,
}

impl RoundedRectPart {
    /// Emission order: corners, edges, centre
    pub const ALL: [RoundedRectPart; 9] = [
        RoundedRectPart::TopLeft,
        RoundedRectPart::TopRight,
        RoundedRectPart::BottomLeft,
        RoundedRectPart::BottomRight,
        RoundedRectPart::Top,
        RoundedRectPart::Bottom,
        RoundedRectPart::Left,
        RoundedRectPart::Right,
        RoundedRectPart::Center,
    ];

    pub fn is_corner(&self) -> bool {
        matches!(
            self,
            RoundedRectPart::TopLeft
                | RoundedRectPart::TopRight
                | RoundedRectPart::BottomLeft
                | RoundedRectPart::BottomRight
        )
    }
}

/// One draw instruction: copy `sprite` onto `dest`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Blit {
    pub part: RoundedRectPart,
    pub sprite: SpriteKey,
    pub dest: Bounds,
}

/// Checks that `radius` fits `rect`.
///
/// Returns `InvalidGeometry` for a non-positive radius or one larger than half
/// the shorter side. [`rasterize`] never fails on this; it clamps instead.
pub fn validate_geometry(rect: &Bounds, radius: i32) -> Result<(), MenuError> {
    let fits = radius > 0 && radius.saturating_mul(2) <= rect.width.min(rect.height);
    if fits {
        Ok(())
    } else {
        Err(MenuError::InvalidGeometry {
            width: rect.width,
            height: rect.height,
            radius,
        })
    }
}

/// Clamps `radius` into `[0, min(width, height) / 2]`
pub fn clamp_radius(rect: &Bounds, radius: i32) -> i32 {
    let max_radius = (rect.width.min(rect.height) / 2).max(0);
    radius.clamp(0, max_radius)
}

/// Produces the blits for a rounded rectangle.
///
/// The iterator is lazy and yields at most nine blits in [`RoundedRectPart::ALL`]
/// order. Bad geometry is handled by clamping the radius (see [`clamp_radius`]);
/// any blit that still ends up with a width or height `<= 0` is skipped, so every
/// yielded blit is drawable. Output depends only on the arguments.
///
/// # Example
///
/// ```rust
/// let blits: Vec<Blit> = rasterize(Bounds::new(0, 0, 100, 60), 20, Color::RED).collect();
/// assert_eq!(blits.len(), 9);
/// ```
pub fn rasterize(rect: Bounds, radius: i32, color: Color) -> RoundedRectBlits {
    let clamped = clamp_radius(&rect, radius);
    if let Err(err) = validate_geometry(&rect, radius) {
        tracing::debug!(%err, clamped, "clamping corner radius");
    }

    RoundedRectBlits {
        rect,
        radius: clamped,
        color,
        next_part: if rect.is_drawable() { 0 } else { RoundedRectPart::ALL.len() },
    }
}

/// Lazy sequence of blits returned by [`rasterize`]
#[derive(Debug, Clone)]
pub struct RoundedRectBlits {
    rect: Bounds,
    radius: i32,
    color: Color,
    next_part: usize,
}

impl RoundedRectBlits {
    /// Radius actually used after clamping
    #[cfg(test)]
    pub fn radius(&self) -> i32 {
        self.radius
    }

    fn dest_for(&self, part: RoundedRectPart) -> Bounds {
        let r = self.radius;
        let d = r * 2;
        let rect = &self.rect;
        let inner = rect.inset(r);

        match part {
            RoundedRectPart::TopLeft => Bounds::new(rect.left(), rect.top(), d, d),
            RoundedRectPart::TopRight => Bounds::new(rect.right() - d, rect.top(), d, d),
            RoundedRectPart::BottomLeft => Bounds::new(rect.left(), rect.bottom() - d, d, d),
            RoundedRectPart::BottomRight => {
                Bounds::new(rect.right() - d, rect.bottom() - d, d, d)
            }
            RoundedRectPart::Top => Bounds::new(inner.x, rect.top(), inner.width, r),
            RoundedRectPart::Bottom => {
                Bounds::new(inner.x, rect.bottom() - r, inner.width, r)
            }
            RoundedRectPart::Left => Bounds::new(rect.left(), inner.y, r, inner.height),
            RoundedRectPart::Right => {
                Bounds::new(inner.right(), inner.y, r, inner.height)
            }
            RoundedRectPart::Center => inner,
        }
    }

    fn blit_for(&self, part: RoundedRectPart) -> Option<Blit> {
        let dest = self.dest_for(part);
        if !dest.is_drawable() {
            return None;
        }

        let sprite = if part.is_corner() {
            SpriteKey::Circle {
                radius: self.radius as u32,
                color: self.color,
            }
        } else {
            SpriteKey::Solid {
                width: dest.width as u32,
                height: dest.height as u32,
                color: self.color,
            }
        };

        Some(Blit { part, sprite, dest })
    }
}

impl Iterator for RoundedRectBlits {
    type Item = Blit;

    fn next(&mut self) -> Option<Blit> {
        while let Some(&part) = RoundedRectPart::ALL.get(self.next_part) {
            self.next_part += 1;
            if let Some(blit) = self.blit_for(part) {
                return Some(blit);
            }
        }
        None
    }
}
