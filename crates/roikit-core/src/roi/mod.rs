//! ROI controllers driven by host pointer events
//!
//! Each controller owns its geometry and answers the same capability,
//! [`PointerTarget`]:
//!
//! - **Rectangle** ([`AxisAlignedRegion`]): integer rectangle, move and 8-handle resize
//! - **Caliper** ([`OrientedQuad`]): quadrilateral with move, corner scale, rotate and shear
//! - **Point** ([`PointMarker`]): single draggable marker
//!
//! ## Event Flow
//!
//! Pointer-down classifies the hit and arms one gesture. Pointer-move applies
//! it while the primary button is held. Pointer-up disarms. Every handler
//! returns an [`Outcome`] naming the area to repaint and any notification
//! for the host.

pub mod caliper;
pub mod marker;
pub mod pointer;
pub mod rect;

pub use caliper::{CaliperReading, CaliperRegion, OrientedQuad};
pub use marker::PointMarker;
pub use pointer::{Buttons, CursorHint, Notification, Outcome};
pub use rect::{AxisAlignedRegion, RectRegion};

use crate::HandleConfig;
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};

/// Capability shared by every ROI controller.
///
/// Positions are in the shape's local coordinates.
pub trait PointerTarget {
    /// Classify the hit and arm a gesture. Never changes geometry.
    fn pointer_down(&mut self, pos: Point) -> Outcome;

    /// Apply the armed gesture if `buttons` holds the primary button.
    fn pointer_move(&mut self, pos: Point, buttons: Buttons) -> Outcome;

    /// Disarm the gesture.
    fn pointer_up(&mut self, pos: Point) -> Outcome;

    /// Local extent padded to cover the drawn handles.
    fn bounding_box(&self) -> Rect;

    fn cursor(&self) -> CursorHint;

    fn is_dragging(&self) -> bool;
}

/// Which controller a [`Roi`] or [`RoiSet`] refers to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoiKind {
    #[default]
    Rect,
    Caliper,
    Point,
}

impl RoiKind {
    pub const ALL: [RoiKind; 3] = [RoiKind::Rect, RoiKind::Caliper, RoiKind::Point];

    /// Map a selector index (0 rectangle, 1 caliper, 2 point).
    pub fn from_index(index: usize) -> Option<RoiKind> {
        Self::ALL.get(index).copied()
    }

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// One controller of any kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Roi {
    Rect(AxisAlignedRegion),
    Caliper(OrientedQuad),
    Point(PointMarker),
}

impl Roi {
    /// A controller of `kind` in its default pose.
    pub fn new(kind: RoiKind, config: HandleConfig) -> Self {
        match kind {
            RoiKind::Rect => Roi::Rect(AxisAlignedRegion::with_config(config)),
            RoiKind::Caliper => Roi::Caliper(OrientedQuad::with_config(config)),
            RoiKind::Point => Roi::Point(PointMarker::with_config(config)),
        }
    }

    pub fn kind(&self) -> RoiKind {
        match self {
            Roi::Rect(_) => RoiKind::Rect,
            Roi::Caliper(_) => RoiKind::Caliper,
            Roi::Point(_) => RoiKind::Point,
        }
    }

    fn target(&self) -> &dyn PointerTarget {
        match self {
            Roi::Rect(roi) => roi,
            Roi::Caliper(roi) => roi,
            Roi::Point(roi) => roi,
        }
    }

    fn target_mut(&mut self) -> &mut dyn PointerTarget {
        match self {
            Roi::Rect(roi) => roi,
            Roi::Caliper(roi) => roi,
            Roi::Point(roi) => roi,
        }
    }
}

impl From<AxisAlignedRegion> for Roi {
    fn from(roi: AxisAlignedRegion) -> Self {
        Roi::Rect(roi)
    }
}

impl From<OrientedQuad> for Roi {
    fn from(roi: OrientedQuad) -> Self {
        Roi::Caliper(roi)
    }
}

impl From<PointMarker> for Roi {
    fn from(roi: PointMarker) -> Self {
        Roi::Point(roi)
    }
}

impl PointerTarget for Roi {
    fn pointer_down(&mut self, pos: Point) -> Outcome {
        self.target_mut().pointer_down(pos)
    }

    fn pointer_move(&mut self, pos: Point, buttons: Buttons) -> Outcome {
        self.target_mut().pointer_move(pos, buttons)
    }

    fn pointer_up(&mut self, pos: Point) -> Outcome {
        self.target_mut().pointer_up(pos)
    }

    fn bounding_box(&self) -> Rect {
        self.target().bounding_box()
    }

    fn cursor(&self) -> CursorHint {
        self.target().cursor()
    }

    fn is_dragging(&self) -> bool {
        self.target().is_dragging()
    }
}

/// One controller of each kind, with a single active one.
///
/// Only the active controller is visible and receives pointer events; the
/// other two keep their state while hidden.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RoiSet {
    rect: AxisAlignedRegion,
    caliper: OrientedQuad,
    marker: PointMarker,
    active: RoiKind,
}

impl RoiSet {
    /// All three controllers at their defaults, rectangle active.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: HandleConfig) -> Self {
        Self {
            rect: AxisAlignedRegion::with_config(config),
            caliper: OrientedQuad::with_config(config),
            marker: PointMarker::with_config(config),
            active: RoiKind::default(),
        }
    }

    #[inline]
    pub fn active_kind(&self) -> RoiKind {
        self.active
    }

    /// Switch the visible controller.
    ///
    /// The outcome repaints the old and new extents. Selecting the kind that
    /// is already active does nothing.
    pub fn select(&mut self, kind: RoiKind) -> Outcome {
        if kind == self.active {
            return Outcome::IDLE;
        }
        let before = self.bounding_box();
        self.active = kind;
        tracing::debug!(?kind, "active ROI changed");
        Outcome::repaint(before, self.bounding_box())
    }

    pub fn active(&self) -> &dyn PointerTarget {
        match self.active {
            RoiKind::Rect => &self.rect,
            RoiKind::Caliper => &self.caliper,
            RoiKind::Point => &self.marker,
        }
    }

    pub fn active_mut(&mut self) -> &mut dyn PointerTarget {
        match self.active {
            RoiKind::Rect => &mut self.rect,
            RoiKind::Caliper => &mut self.caliper,
            RoiKind::Point => &mut self.marker,
        }
    }

    pub fn rect(&self) -> &AxisAlignedRegion {
        &self.rect
    }

    pub fn rect_mut(&mut self) -> &mut AxisAlignedRegion {
        &mut self.rect
    }

    pub fn caliper(&self) -> &OrientedQuad {
        &self.caliper
    }

    pub fn caliper_mut(&mut self) -> &mut OrientedQuad {
        &mut self.caliper
    }

    pub fn marker(&self) -> &PointMarker {
        &self.marker
    }

    pub fn marker_mut(&mut self) -> &mut PointMarker {
        &mut self.marker
    }
}

impl PointerTarget for RoiSet {
    fn pointer_down(&mut self, pos: Point) -> Outcome {
        self.active_mut().pointer_down(pos)
    }

    fn pointer_move(&mut self, pos: Point, buttons: Buttons) -> Outcome {
        self.active_mut().pointer_move(pos, buttons)
    }

    fn pointer_up(&mut self, pos: Point) -> Outcome {
        self.active_mut().pointer_up(pos)
    }

    fn bounding_box(&self) -> Rect {
        self.active().bounding_box()
    }

    fn cursor(&self) -> CursorHint {
        self.active().cursor()
    }

    fn is_dragging(&self) -> bool {
        self.active().is_dragging()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{PixelPoint, PixelRect};

    #[test]
    fn test_kind_from_index() {
        assert_eq!(RoiKind::from_index(0), Some(RoiKind::Rect));
        assert_eq!(RoiKind::from_index(1), Some(RoiKind::Caliper));
        assert_eq!(RoiKind::from_index(2), Some(RoiKind::Point));
        assert_eq!(RoiKind::from_index(3), None);
        for kind in RoiKind::ALL {
            assert_eq!(RoiKind::from_index(kind.index()), Some(kind));
        }
    }

    #[test]
    fn test_roi_delegates_to_variant() {
        let mut roi = Roi::new(RoiKind::Caliper, HandleConfig::default());
        assert_eq!(roi.kind(), RoiKind::Caliper);
        assert_eq!(roi.bounding_box(), OrientedQuad::new().bounding_box());

        roi.pointer_down(Point::new(160.0, 20.0));
        assert!(roi.is_dragging());
        assert_eq!(roi.cursor(), CursorHint::PointingHand);
        assert!(roi
            .pointer_move(Point::new(80.0, 120.0), Buttons::PRIMARY)
            .changed());
        let out = roi.pointer_up(Point::new(80.0, 120.0));
        assert_eq!(out.notification, Some(Notification::TransformFinished));
    }

    #[test]
    fn test_roi_from_controller() {
        assert_eq!(Roi::from(PointMarker::new()).kind(), RoiKind::Point);
        assert_eq!(Roi::from(AxisAlignedRegion::new()).kind(), RoiKind::Rect);
    }

    #[test]
    fn test_set_forwards_to_active_only() {
        let mut set = RoiSet::new();
        assert_eq!(set.active_kind(), RoiKind::Rect);

        set.pointer_down(Point::new(50.0, 50.0));
        set.pointer_move(Point::new(60.0, 70.0), Buttons::PRIMARY);
        set.pointer_up(Point::new(60.0, 70.0));
        assert_eq!(set.rect().rect(), PixelRect::new(10, 20, 100, 100));
        assert_eq!(set.marker().position(), PixelPoint::new(20, 20));
        assert_eq!(set.caliper(), &OrientedQuad::new());
    }

    #[test]
    fn test_select_switches_target() {
        let mut set = RoiSet::new();
        let out = set.select(RoiKind::Point);
        assert!(out.changed());
        assert_eq!(set.bounding_box(), PointMarker::new().bounding_box());

        set.pointer_down(Point::new(20.0, 20.0));
        let out = set.pointer_move(Point::new(45.0, 30.0), Buttons::PRIMARY);
        assert_eq!(out.notification, Some(Notification::PositionChanged));
        assert_eq!(set.marker().position(), PixelPoint::new(45, 30));
        assert_eq!(set.rect(), &AxisAlignedRegion::new());
    }

    #[test]
    fn test_select_same_kind_is_idle() {
        let mut set = RoiSet::new();
        assert_eq!(set.select(RoiKind::Rect), Outcome::IDLE);
    }

    #[test]
    fn test_hidden_controller_keeps_state() {
        let mut set = RoiSet::new();
        set.rect_mut().set_rect(PixelRect::new(5, 5, 40, 40));
        set.select(RoiKind::Caliper);
        set.select(RoiKind::Rect);
        assert_eq!(set.rect().rect(), PixelRect::new(5, 5, 40, 40));
    }

    #[test]
    fn test_set_with_config() {
        let mut config = HandleConfig::default();
        config.handle_tolerance = 2.0;
        let set = RoiSet::with_config(config);
        assert_eq!(set.caliper().config().handle_tolerance, 2.0);
        assert_eq!(set.marker().config(), &config);
    }
}
