//! Point ROI: a single draggable marker.
//!
//! The grab zone is a square of side `marker_size` centred on the point, so
//! its half-width is `marker_size / 2`: 6 px with the default size of 12. A
//! pointer more than 6 px off on either axis misses it.

use super::pointer::{Buttons, CursorHint, Notification, Outcome};
use super::PointerTarget;
use crate::geometry::PixelPoint;
use crate::HandleConfig;
use kurbo::{Affine, Point, Rect};

/// Point marker controller.
///
/// The grab zone is a square of side `marker_size` centred on the point,
/// edges inclusive.
#[derive(Debug, Clone, PartialEq)]
pub struct PointMarker {
    point: PixelPoint,
    dragging: bool,
    config: HandleConfig,
}

impl Default for PointMarker {
    fn default() -> Self {
        Self::new()
    }
}

impl PointMarker {
    pub fn new() -> Self {
        Self::with_config(HandleConfig::default())
    }

    pub fn with_config(config: HandleConfig) -> Self {
        Self {
            point: PixelPoint::new(20, 20),
            dragging: false,
            config,
        }
    }

    #[inline]
    pub fn position(&self) -> PixelPoint {
        self.point
    }

    #[inline]
    pub fn config(&self) -> &HandleConfig {
        &self.config
    }

    /// Whether `pos` lands on the marker.
    pub fn classify(&self, pos: Point) -> bool {
        let half = f64::from(self.config.marker_size) / 2.0;
        let centre = self.point.to_point();
        (pos.x - centre.x).abs() <= half && (pos.y - centre.y).abs() <= half
    }

    /// Place the marker at `pos`, snapped to the nearest pixel.
    pub fn move_to(&mut self, pos: Point) -> Outcome {
        let before = self.bounding_box();
        self.point = PixelPoint::round_from(pos);
        Outcome::repaint(before, self.bounding_box())
            .with_notification(Notification::PositionChanged)
    }

    /// The marker position mapped through the host's local-to-scene transform.
    pub fn position_on_scene(&self, to_scene: Affine) -> PixelPoint {
        PixelPoint::round_from(to_scene * self.point.to_point())
    }
}

impl PointerTarget for PointMarker {
    fn pointer_down(&mut self, pos: Point) -> Outcome {
        self.dragging = self.classify(pos);
        Outcome::IDLE
    }

    fn pointer_move(&mut self, pos: Point, buttons: Buttons) -> Outcome {
        if !self.dragging || !buttons.is_primary_held() {
            return Outcome::IDLE;
        }
        self.move_to(pos)
    }

    fn pointer_up(&mut self, _pos: Point) -> Outcome {
        self.dragging = false;
        Outcome::IDLE
    }

    fn bounding_box(&self) -> Rect {
        let pad = f64::from(self.config.marker_size + 1);
        let p = self.point.to_point();
        Rect::new(p.x - pad, p.y - pad, p.x + pad, p.y + pad)
    }

    fn cursor(&self) -> CursorHint {
        if self.dragging {
            CursorHint::Cross
        } else {
            CursorHint::Arrow
        }
    }

    fn is_dragging(&self) -> bool {
        self.dragging
    }
}
