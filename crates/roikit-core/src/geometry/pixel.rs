//! Integer pixel geometry used by the rectangle ROI and the point marker.

use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};

/// Pixel-aligned rectangle.
///
/// `right()` and `bottom()` are exclusive: `right = x + width` is one past the
/// last covered column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PixelRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl PixelRect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Build a rectangle from its four edges (`right`/`bottom` exclusive).
    ///
    /// Spans wider than `i32::MAX` saturate.
    pub fn from_edges(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self::new(
            left,
            top,
            right.saturating_sub(left),
            bottom.saturating_sub(top),
        )
    }

    #[inline]
    pub fn left(&self) -> i32 {
        self.x
    }

    #[inline]
    pub fn top(&self) -> i32 {
        self.y
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.x.saturating_add(self.width)
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y.saturating_add(self.height)
    }

    /// Same rectangle shifted by whole pixels.
    pub fn translated(&self, dx: i32, dy: i32) -> Self {
        Self::new(
            self.x.saturating_add(dx),
            self.y.saturating_add(dy),
            self.width,
            self.height,
        )
    }

    /// Real-valued extent covering the same pixels.
    pub fn to_rect(&self) -> Rect {
        Rect::new(
            self.left() as f64,
            self.top() as f64,
            self.right() as f64,
            self.bottom() as f64,
        )
    }
}

/// Pixel-snapped position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PixelPoint {
    pub x: i32,
    pub y: i32,
}

impl PixelPoint {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Snap a real-valued point to the nearest pixel.
    pub fn round_from(p: Point) -> Self {
        Self::new(p.x.round() as i32, p.y.round() as i32)
    }

    pub fn to_point(self) -> Point {
        Point::new(self.x as f64, self.y as f64)
    }
}
