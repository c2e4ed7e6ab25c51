//! Axis-aligned rectangle ROI with move and eight-handle resize.
//!
//! # Hit Regions
//!
//! ```text
//!   TopLeft ──── Top ──── TopRight
//!      │                     │
//!    Left      Inside      Right        (everything else: Outside)
//!      │                     │
//! BottomLeft ── Bottom ── BottomRight
//! ```
//!
//! Each axis is classified on its own as "near the low edge", "between the
//! edges" or "near the high edge", where "near" means within the handle
//! tolerance. The region is the combination of both axes. Near-edge bands are
//! tested before the between band, so a pointer close to a corner resolves to
//! that corner.

use super::pointer::{Buttons, CursorHint, Notification, Outcome};
use super::PointerTarget;
use crate::geometry::PixelRect;
use crate::persist::{self, Field, PersistError};
use crate::HandleConfig;
use kurbo::{Point, Rect};

/// Where a pointer sits relative to the rectangle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum RectRegion {
    #[default]
    Outside,
    Inside,
    Top,
    Right,
    Bottom,
    Left,
    TopLeft,
    TopRight,
    BottomRight,
    BottomLeft,
}

/// Edges a resize region drags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct DraggedEdges {
    top: bool,
    right: bool,
    bottom: bool,
    left: bool,
}

impl RectRegion {
    fn dragged_edges(self) -> DraggedEdges {
        use RectRegion::*;
        DraggedEdges {
            top: matches!(self, Top | TopLeft | TopRight),
            right: matches!(self, Right | TopRight | BottomRight),
            bottom: matches!(self, Bottom | BottomLeft | BottomRight),
            left: matches!(self, Left | TopLeft | BottomLeft),
        }
    }

    /// True for the eight edge and corner handles.
    pub fn is_handle(self) -> bool {
        !matches!(self, RectRegion::Outside | RectRegion::Inside)
    }

    fn cursor(self) -> CursorHint {
        use RectRegion::*;
        match self {
            Outside => CursorHint::Arrow,
            Inside => CursorHint::ClosedHand,
            Top | Bottom => CursorHint::SizeVertical,
            Left | Right => CursorHint::SizeHorizontal,
            TopLeft | BottomRight => CursorHint::SizeForwardDiagonal,
            TopRight | BottomLeft => CursorHint::SizeBackwardDiagonal,
        }
    }
}

/// Per-axis band of a coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Band {
    Low,
    Between,
    High,
    Beyond,
}

fn band(value: f64, low: f64, high: f64, tolerance: f64) -> Band {
    if (value - low).abs() <= tolerance {
        Band::Low
    } else if value > low + tolerance && value < high - tolerance {
        Band::Between
    } else if (value - high).abs() <= tolerance {
        Band::High
    } else {
        Band::Beyond
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
enum Gesture {
    #[default]
    Idle,
    Moving {
        last: Point,
    },
    Resizing(RectRegion),
}

/// Rectangle ROI controller.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisAlignedRegion {
    rect: PixelRect,
    gesture: Gesture,
    cursor: CursorHint,
    config: HandleConfig,
}

impl Default for AxisAlignedRegion {
    fn default() -> Self {
        Self::new()
    }
}

impl AxisAlignedRegion {
    /// A 100x100 rectangle at the origin with default limits.
    pub fn new() -> Self {
        Self::with_config(HandleConfig::default())
    }

    pub fn with_config(config: HandleConfig) -> Self {
        Self {
            rect: PixelRect::new(0, 0, 100, 100),
            gesture: Gesture::Idle,
            cursor: CursorHint::Arrow,
            config,
        }
    }

    #[inline]
    pub fn rect(&self) -> PixelRect {
        self.rect
    }

    /// Replace the rectangle outright (programmatic placement and loading).
    pub fn set_rect(&mut self, rect: PixelRect) -> Outcome {
        let before = self.bounding_box();
        self.rect = rect;
        Outcome::repaint(before, self.bounding_box())
    }

    #[inline]
    pub fn config(&self) -> &HandleConfig {
        &self.config
    }

    /// Region armed by the current drag, `Outside` when idle.
    pub fn active_region(&self) -> RectRegion {
        match self.gesture {
            Gesture::Idle => RectRegion::Outside,
            Gesture::Moving { .. } => RectRegion::Inside,
            Gesture::Resizing(region) => region,
        }
    }

    /// Classify `pos` against the rectangle's handle bands.
    pub fn classify(&self, pos: Point) -> RectRegion {
        let tolerance = self.config.handle_tolerance;
        let r = self.rect.to_rect();
        let horizontal = band(pos.x, r.x0, r.x1, tolerance);
        let vertical = band(pos.y, r.y0, r.y1, tolerance);

        use Band::*;
        match (horizontal, vertical) {
            (Low, Low) => RectRegion::TopLeft,
            (Low, Between) => RectRegion::Left,
            (Low, High) => RectRegion::BottomLeft,
            (Between, Low) => RectRegion::Top,
            (Between, Between) => RectRegion::Inside,
            (Between, High) => RectRegion::Bottom,
            (High, Low) => RectRegion::TopRight,
            (High, Between) => RectRegion::Right,
            (High, High) => RectRegion::BottomRight,
            _ => RectRegion::Outside,
        }
    }

    /// Drag the edges named by `region` to the pixel under `pos`.
    ///
    /// The opposite edges stay fixed and each moving edge is clamped so the
    /// span never drops below the minimum length.
    pub fn resize(&mut self, region: RectRegion, pos: Point) -> Outcome {
        if !region.is_handle() {
            return Outcome::IDLE;
        }
        let before = self.bounding_box();
        let min = self.config.rect_min_length;
        let (cx, cy) = (pos.x.round() as i32, pos.y.round() as i32);
        let r = self.rect;
        let (mut left, mut top, mut right, mut bottom) = (r.left(), r.top(), r.right(), r.bottom());

        let edges = region.dragged_edges();
        if edges.top {
            top = cy.min(bottom.saturating_sub(min));
        } else if edges.bottom {
            bottom = cy.max(top.saturating_add(min));
        }
        if edges.left {
            left = cx.min(right.saturating_sub(min));
        } else if edges.right {
            right = cx.max(left.saturating_add(min));
        }

        self.rect = PixelRect::from_edges(left, top, right, bottom);
        Outcome::repaint(before, self.bounding_box())
    }

    /// Translate by a pointer delta rounded to whole pixels.
    pub fn translate(&mut self, delta: kurbo::Vec2) -> Outcome {
        let before = self.bounding_box();
        self.rect = self
            .rect
            .translated(delta.x.round() as i32, delta.y.round() as i32);
        Outcome::repaint(before, self.bounding_box())
    }

    /// Persisted form of the rectangle.
    pub fn save(&self) -> Vec<Field> {
        persist::save_rect(&self.rect)
    }

    /// Load a persisted rectangle, leaving the current one untouched on error.
    pub fn try_load(&mut self, fields: &[Field]) -> Result<Outcome, PersistError> {
        let rect = persist::parse_rect(fields)?;
        Ok(self.set_rect(rect))
    }

    /// Like [`try_load`](Self::try_load), but reports failures to the log
    /// and ignores them.
    pub fn load(&mut self, fields: &[Field]) -> Outcome {
        match self.try_load(fields) {
            Ok(outcome) => outcome,
            Err(err) => {
                tracing::warn!(error = %err, "ignoring malformed rectangle ROI record");
                Outcome::IDLE
            }
        }
    }
}

impl PointerTarget for AxisAlignedRegion {
    fn pointer_down(&mut self, pos: Point) -> Outcome {
        let region = self.classify(pos);
        self.gesture = match region {
            RectRegion::Outside => Gesture::Idle,
            RectRegion::Inside => Gesture::Moving { last: pos },
            handle => Gesture::Resizing(handle),
        };
        self.cursor = region.cursor();
        if region != RectRegion::Outside {
            tracing::debug!(?region, "rectangle ROI gesture armed");
        }
        Outcome::IDLE
    }

    fn pointer_move(&mut self, pos: Point, buttons: Buttons) -> Outcome {
        if !buttons.is_primary_held() {
            return Outcome::IDLE;
        }
        match self.gesture {
            Gesture::Idle => Outcome::IDLE,
            Gesture::Moving { last } => {
                self.gesture = Gesture::Moving { last: pos };
                self.cursor = CursorHint::ClosedHand;
                self.translate(pos - last)
            }
            Gesture::Resizing(region) => self.resize(region, pos),
        }
    }

    fn pointer_up(&mut self, _pos: Point) -> Outcome {
        self.gesture = Gesture::Idle;
        self.cursor = CursorHint::Arrow;
        tracing::debug!(rect = ?self.rect, "rectangle ROI transform finished");
        Outcome::notify(Notification::TransformFinished)
    }

    fn bounding_box(&self) -> Rect {
        let pad = self.config.handle_tolerance + 1.0;
        self.rect.to_rect().inflate(pad, pad)
    }

    fn cursor(&self) -> CursorHint {
        self.cursor
    }

    fn is_dragging(&self) -> bool {
        self.gesture != Gesture::Idle
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================
