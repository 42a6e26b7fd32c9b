//! Screen-space rectangle math for the menu
//!
//! `sdl2::rect::Rect` silently clamps zero or negative sizes up to 1, which hides
//! exactly the degenerate cases the rounded-rectangle code has to detect. Layout
//! and rasterization therefore work on [`Bounds`], which keeps signed sizes, and
//! only convert to SDL rectangles at the draw call.
//!
//! Points reuse `sdl2::rect::Point`, which is a plain value type and needs no
//! SDL context.

use sdl2::rect::{Point, Rect};

/// Axis-aligned rectangle with signed dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bounds {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Bounds {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Bounds {
            x,
            y,
            width,
            height,
        }
    }

    pub fn left(&self) -> i32 {
        self.x
    }

    pub fn top(&self) -> i32 {
        self.y
    }

    /// First column past the rectangle (exclusive edge)
    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    /// First row past the rectangle (exclusive edge)
    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    /// Half-open containment test used for button hit-testing.
    ///
    /// A point is inside when `x <= p.x < x + width` and `y <= p.y < y + height`,
    /// so the right and bottom edges never count as a hit. Rectangles with a
    /// non-positive size contain nothing.
    ///
    /// # Example
    ///
    /// ```rust
    /// let play = Bounds::new(300, 200, 140, 50);
    /// assert!(play.contains(Point::new(305, 205)));
    /// assert!(!play.contains(Point::new(440, 200)));
    /// ```
    pub fn contains(&self, point: Point) -> bool {
        self.x <= point.x()
            && point.x() < self.right()
            && self.y <= point.y()
            && point.y() < self.bottom()
    }

    /// Shrinks the rectangle by `amount` on every side.
    ///
    /// The result may have a non-positive size; check [`Self::is_drawable`].
    pub fn inset(&self, amount: i32) -> Bounds {
        Bounds::new(
            self.x + amount,
            self.y + amount,
            self.width - amount * 2,
            self.height - amount * 2,
        )
    }

    /// True when both dimensions are strictly positive
    pub fn is_drawable(&self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// Converts to an SDL rectangle, or `None` if SDL would have to clamp the size
    pub fn to_sdl_rect(&self) -> Option<Rect> {
        if self.is_drawable() {
            Some(Rect::new(
                self.x,
                self.y,
                self.width as u32,
                self.height as u32,
            ))
        } else {
            None
        }
    }
}

/// Free-function form of [`Bounds::contains`]
pub fn hit_test(point: Point, rect: &Bounds) -> bool {
    rect.contains(point)
}
