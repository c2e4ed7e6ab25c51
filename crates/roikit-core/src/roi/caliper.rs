//! Caliper ROI: an orientable quadrilateral with move, scale, rotate and shear.
//!
//! # Pose Bookkeeping
//!
//! The authoritative geometry is the closed [`Quad`]. Alongside it the
//! controller keeps the cumulative rotation and shear applied since the
//! quad's canonical pose (axis-aligned, unsheared). Undoing rotation about
//! the centre and then shear recovers that canonical rectangle, which is
//! where scale edits happen:
//!
//! ```text
//! world ──rotate(-θ)──▶ unrotated ──shear(-φ)──▶ canonical
//!                                                   │ edit corner, clamp size
//! world ◀──rotate(+θ)── sheared  ◀──shear(+φ)───────┘
//!   └─▶ translate so the anchor corner lands where it was
//! ```
//!
//! # Handles
//!
//! Checked in priority order, first match wins:
//! 1. Right edge midpoint → rotate
//! 2. Bottom edge midpoint → shear
//! 3. Corners 0..3 → scale
//! 4. Edges top, right, bottom, left → move

use super::pointer::{Buttons, CursorHint, Notification, Outcome};
use super::PointerTarget;
use crate::geometry::{
    distance, distance_to_line, distance_to_segment, normalize_angle, rotate_point, Corner, Edge,
    Quad,
};
use crate::HandleConfig;
use kurbo::{Point, Rect};
use std::f64::consts::FRAC_PI_2;

/// Where a pointer sits relative to the caliper's handles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CaliperRegion {
    #[default]
    None,
    Vertex(Corner),
    RotateHandle,
    ShearHandle,
    Edge(Edge),
}

impl CaliperRegion {
    fn cursor(self) -> CursorHint {
        match self {
            CaliperRegion::None => CursorHint::Arrow,
            CaliperRegion::Vertex(_) => CursorHint::Cross,
            CaliperRegion::RotateHandle | CaliperRegion::ShearHandle => CursorHint::PointingHand,
            CaliperRegion::Edge(_) => CursorHint::SizeAll,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
enum Gesture {
    #[default]
    Idle,
    Moving {
        last: Point,
        edge: Edge,
    },
    Scaling(Corner),
    Rotating,
    Shearing,
}

/// Measurements taken from the caliper's current shape.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CaliperReading {
    /// Length of the top edge
    pub length: f64,
    /// Perpendicular distance between the top and bottom edges
    pub span: f64,
    /// Cumulative rotation in degrees
    pub rotation_deg: f64,
    /// Cumulative shear in degrees
    pub shear_deg: f64,
}

/// Caliper ROI controller.
#[derive(Debug, Clone, PartialEq)]
pub struct OrientedQuad {
    shape: Quad,
    rotation: f64,
    shear: f64,
    gesture: Gesture,
    cursor: CursorHint,
    config: HandleConfig,
}

impl Default for OrientedQuad {
    fn default() -> Self {
        Self::new()
    }
}

impl OrientedQuad {
    /// A 160x40 axis-aligned caliper at the origin with default limits.
    pub fn new() -> Self {
        Self::with_config(HandleConfig::default())
    }

    pub fn with_config(config: HandleConfig) -> Self {
        Self::from_pose(config, Point::ZERO, 160.0, 40.0, 0.0, 0.0)
    }

    /// Build a caliper from its canonical pose: a `width` x `height`
    /// rectangle at `origin`, sheared by `shear` and then rotated by
    /// `rotation` about its centre.
    pub fn from_pose(
        config: HandleConfig,
        origin: Point,
        width: f64,
        height: f64,
        rotation: f64,
        shear: f64,
    ) -> Self {
        let canonical = Quad::axis_aligned(origin, width, height);
        let sheared = canonical.sheared(shear);
        let shape = sheared.rotated(sheared.centre(), rotation);
        Self {
            shape,
            rotation,
            shear,
            gesture: Gesture::Idle,
            cursor: CursorHint::Arrow,
            config,
        }
    }

    #[inline]
    pub fn shape(&self) -> &Quad {
        &self.shape
    }

    /// The four corners in world space, closure point excluded.
    pub fn vertices(&self) -> [Point; 4] {
        self.shape.corners()
    }

    /// The four corners of the canonical pose, without changing the caliper.
    pub fn canonical_vertices(&self) -> [Point; 4] {
        self.canonical_shape().corners()
    }

    /// Cumulative rotation in radians.
    #[inline]
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    /// Cumulative shear in radians.
    #[inline]
    pub fn shear(&self) -> f64 {
        self.shear
    }

    pub fn centre(&self) -> Point {
        self.shape.centre()
    }

    #[inline]
    pub fn config(&self) -> &HandleConfig {
        &self.config
    }

    /// Handle armed by the current drag, `None` when idle.
    pub fn active_region(&self) -> CaliperRegion {
        match self.gesture {
            Gesture::Idle => CaliperRegion::None,
            Gesture::Moving { edge, .. } => CaliperRegion::Edge(edge),
            Gesture::Scaling(corner) => CaliperRegion::Vertex(corner),
            Gesture::Rotating => CaliperRegion::RotateHandle,
            Gesture::Shearing => CaliperRegion::ShearHandle,
        }
    }

    pub fn reading(&self) -> CaliperReading {
        let s = &self.shape;
        CaliperReading {
            length: distance(s[0], s[1]),
            span: distance_to_line(s[3], s[0], s[1]).unwrap_or(0.0),
            rotation_deg: self.rotation.to_degrees(),
            shear_deg: self.shear.to_degrees(),
        }
    }

    /// Classify `pos` against the handles (see module docs for priority).
    pub fn classify(&self, pos: Point) -> CaliperRegion {
        let tolerance = self.config.handle_tolerance;
        let s = &self.shape;

        if distance(s.edge_midpoint(Edge::Right), pos) <= tolerance {
            return CaliperRegion::RotateHandle;
        }
        if distance(s.edge_midpoint(Edge::Bottom), pos) <= tolerance {
            return CaliperRegion::ShearHandle;
        }
        if let Some(corner) = Corner::ALL
            .into_iter()
            .find(|c| distance(pos, s.corner(*c)) <= tolerance)
        {
            return CaliperRegion::Vertex(corner);
        }
        if let Some(edge) = Edge::ALL.into_iter().find(|e| {
            let (a, b) = s.edge(*e);
            distance_to_segment(pos, a, b) <= tolerance
        }) {
            return CaliperRegion::Edge(edge);
        }
        CaliperRegion::None
    }

    /// Bake rotation and shear into the vertices and reset both to zero.
    ///
    /// The shape keeps its canonical size but becomes axis-aligned around
    /// the same centre. A second call is a no-op.
    pub fn reinitialize(&mut self) -> Outcome {
        if self.rotation == 0.0 && self.shear == 0.0 {
            return Outcome::IDLE;
        }
        let before = self.bounding_box();
        self.shape = self.canonical_shape();
        self.rotation = 0.0;
        self.shear = 0.0;
        Outcome::repaint(before, self.bounding_box())
    }

    fn canonical_shape(&self) -> Quad {
        let mut shape = self.shape;
        if self.rotation != 0.0 {
            shape = shape.rotated(shape.centre(), -self.rotation);
        }
        if self.shear != 0.0 {
            shape = shape.sheared(-self.shear);
        }
        shape
    }

    fn replace_shape(&mut self, shape: Quad) -> Outcome {
        let before = self.bounding_box();
        self.shape = shape;
        Outcome::repaint(before, self.bounding_box())
    }

    fn translate(&mut self, last: Point, pos: Point) -> Outcome {
        self.replace_shape(self.shape.translated(pos - last))
    }

    /// Spin to the pointer's angle around the centre.
    fn rotate_towards(&mut self, pos: Point) -> Outcome {
        let centre = self.shape.centre();
        let angle = (pos.y - centre.y).atan2(pos.x - centre.x);
        let delta = angle - self.rotation;
        self.rotation = angle;
        self.replace_shape(self.shape.rotated(centre, delta))
    }

    /// Shear towards the pointer's angle, rejecting shapes that would invert
    /// or collapse below the minimum apex angle.
    fn shear_towards(&mut self, pos: Point) -> Outcome {
        let centre = self.shape.centre();
        let candidate =
            normalize_angle((pos.y - centre.y).atan2(pos.x - centre.x) - FRAC_PI_2 - self.rotation);
        let trial = self.shape.sheared(candidate - self.shear);

        // Left edge must still run downward once rotation is undone
        let top_left = rotate_point(trial[0], centre, -self.rotation);
        let bottom_left = rotate_point(trial[3], centre, -self.rotation);
        let side = distance(trial[0], trial[3]);
        let accepted = distance_to_line(trial[0], trial[2], trial[3]).is_some_and(|span| {
            top_left.y <= bottom_left.y && span >= side * self.config.min_shear_ratio()
        });

        if !accepted {
            tracing::trace!(candidate, "caliper shear rejected");
            return Outcome::IDLE;
        }
        self.shear = candidate;
        self.replace_shape(trial)
    }

    /// Drag `corner` towards `pos` in canonical space, keeping the opposite
    /// corner anchored in world space.
    fn scale_corner(&mut self, corner: Corner, pos: Point) -> Outcome {
        let centre = self.shape.centre();
        let unrotated = self.shape.rotated(centre, -self.rotation);
        let canonical = unrotated.sheared(-self.shear);
        let pointer = rotate_point(pos, centre, -self.rotation);

        let mut target = canonical[corner] + (pointer - unrotated[corner]);
        let base = canonical[corner.opposite()];
        let min_width = self.config.caliper_min_length;
        let min_height = self.config.caliper_min_height();
        target.x = if corner.is_left() {
            target.x.min(base.x - min_width)
        } else {
            target.x.max(base.x + min_width)
        };
        target.y = if corner.is_top() {
            target.y.min(base.y - min_height)
        } else {
            target.y.max(base.y + min_height)
        };

        let [c0, c1, c2, c3] = canonical.corners();
        let edited = Quad::from_corners(match corner {
            Corner::TopLeft => [target, Point::new(c1.x, target.y), c2, Point::new(target.x, c3.y)],
            Corner::TopRight => [Point::new(c0.x, target.y), target, Point::new(target.x, c2.y), c3],
            Corner::BottomRight => [c0, Point::new(target.x, c1.y), target, Point::new(c3.x, target.y)],
            Corner::BottomLeft => [Point::new(target.x, c0.y), c1, Point::new(c2.x, target.y), target],
        });

        let world = edited.sheared(self.shear).rotated(centre, self.rotation);
        let anchor = corner.opposite();
        let drift = self.shape[anchor] - world[anchor];
        self.replace_shape(world.translated(drift))
    }
}

impl PointerTarget for OrientedQuad {
    fn pointer_down(&mut self, pos: Point) -> Outcome {
        let region = self.classify(pos);
        self.gesture = match region {
            CaliperRegion::None => Gesture::Idle,
            CaliperRegion::Vertex(corner) => Gesture::Scaling(corner),
            CaliperRegion::RotateHandle => Gesture::Rotating,
            CaliperRegion::ShearHandle => Gesture::Shearing,
            CaliperRegion::Edge(edge) => Gesture::Moving { last: pos, edge },
        };
        self.cursor = region.cursor();
        if region != CaliperRegion::None {
            tracing::debug!(?region, "caliper gesture armed");
        }
        Outcome::IDLE
    }

    fn pointer_move(&mut self, pos: Point, buttons: Buttons) -> Outcome {
        if !buttons.is_primary_held() {
            return Outcome::IDLE;
        }
        match self.gesture {
            Gesture::Idle => Outcome::IDLE,
            Gesture::Moving { last, edge } => {
                self.gesture = Gesture::Moving { last: pos, edge };
                self.cursor = CursorHint::ClosedHand;
                self.translate(last, pos)
            }
            Gesture::Scaling(corner) => self.scale_corner(corner, pos),
            Gesture::Rotating => self.rotate_towards(pos),
            Gesture::Shearing => self.shear_towards(pos),
        }
    }

    fn pointer_up(&mut self, _pos: Point) -> Outcome {
        self.gesture = Gesture::Idle;
        self.cursor = CursorHint::Arrow;
        tracing::debug!(
            rotation = self.rotation,
            shear = self.shear,
            "caliper transform finished"
        );
        Outcome::notify(Notification::TransformFinished)
    }

    fn bounding_box(&self) -> Rect {
        let pad = self.config.handle_tolerance + 1.0;
        self.shape.bounding_box().inflate(pad, pad)
    }

    fn cursor(&self) -> CursorHint {
        self.cursor
    }

    fn is_dragging(&self) -> bool {
        self.gesture != Gesture::Idle
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    const EPS: f64 = 1e-6;

    fn assert_point_close(actual: Point, expected: Point) {
        assert!(
            actual.distance(expected) < EPS,
            "expected {:?}, got {:?}",
            expected,
            actual
        );
    }

    fn canonical_size(quad: &OrientedQuad) -> (f64, f64) {
        let [c0, c1, _, c3] = quad.canonical_vertices();
        (c1.x - c0.x, c3.y - c0.y)
    }

    #[test]
    fn test_default_caliper() {
        let quad = OrientedQuad::new();
        assert_eq!(
            quad.vertices(),
            [
                Point::new(0.0, 0.0),
                Point::new(160.0, 0.0),
                Point::new(160.0, 40.0),
                Point::new(0.0, 40.0),
            ]
        );
        assert_eq!(quad.rotation(), 0.0);
        assert_eq!(quad.shear(), 0.0);
        assert!(quad.shape().is_closed());
    }

    #[test]
    fn test_classify_priority() {
        let quad = OrientedQuad::new();
        assert_eq!(quad.classify(Point::new(160.0, 20.0)), CaliperRegion::RotateHandle);
        assert_eq!(quad.classify(Point::new(80.0, 42.0)), CaliperRegion::ShearHandle);
        assert_eq!(
            quad.classify(Point::new(1.0, 1.0)),
            CaliperRegion::Vertex(Corner::TopLeft)
        );
        assert_eq!(
            quad.classify(Point::new(159.0, 41.0)),
            CaliperRegion::Vertex(Corner::BottomRight)
        );
        assert_eq!(quad.classify(Point::new(50.0, 3.0)), CaliperRegion::Edge(Edge::Top));
        assert_eq!(quad.classify(Point::new(-4.0, 20.0)), CaliperRegion::Edge(Edge::Left));
        assert_eq!(quad.classify(Point::new(80.0, 20.0)), CaliperRegion::None);
    }

    #[test]
    fn test_classify_ignores_edge_extensions() {
        // On the top edge's line but far past the corner
        let quad = OrientedQuad::new();
        assert_eq!(quad.classify(Point::new(400.0, 0.0)), CaliperRegion::None);
    }

    #[test]
    fn test_rotate_handle_drag() {
        let mut quad = OrientedQuad::new();
        quad.pointer_down(Point::new(160.0, 20.0));
        assert_eq!(quad.active_region(), CaliperRegion::RotateHandle);
        quad.pointer_move(Point::new(160.0, 120.0), Buttons::PRIMARY);

        let expected = 100.0f64.atan2(80.0);
        assert!((quad.rotation() - expected).abs() < EPS);
        let reference = Quad::axis_aligned(Point::ZERO, 160.0, 40.0)
            .rotated(Point::new(80.0, 20.0), expected);
        for (a, e) in quad.vertices().iter().zip(reference.corners()) {
            assert_point_close(*a, e);
        }
    }

    #[test]
    fn test_rotate_quarter_turn_about_centre() {
        let mut quad = OrientedQuad::new();
        quad.pointer_down(Point::new(160.0, 20.0));
        quad.pointer_move(Point::new(80.0, 120.0), Buttons::PRIMARY);
        assert!((quad.rotation() - FRAC_PI_2).abs() < EPS);
        let v = quad.vertices();
        assert_point_close(v[0], Point::new(100.0, -60.0));
        assert_point_close(v[1], Point::new(100.0, 100.0));
        assert_point_close(v[2], Point::new(60.0, 100.0));
        assert_point_close(v[3], Point::new(60.0, -60.0));
        assert_point_close(quad.centre(), Point::new(80.0, 20.0));
    }

    #[test]
    fn test_rotation_is_incremental_on_current_shape() {
        let mut quad = OrientedQuad::new();
        quad.pointer_down(Point::new(160.0, 20.0));
        quad.pointer_move(Point::new(80.0, 120.0), Buttons::PRIMARY);
        quad.pointer_move(Point::new(-20.0, 20.0), Buttons::PRIMARY);
        assert!((quad.rotation() - PI).abs() < EPS);
        assert_point_close(quad.vertices()[0], Point::new(160.0, 40.0));
    }

    #[test]
    fn test_move_by_edge() {
        let mut quad = OrientedQuad::new();
        quad.pointer_down(Point::new(50.0, 0.0));
        assert_eq!(quad.active_region(), CaliperRegion::Edge(Edge::Top));
        quad.pointer_move(Point::new(60.0, 5.0), Buttons::PRIMARY);
        quad.pointer_move(Point::new(70.5, 15.0), Buttons::PRIMARY);
        assert_point_close(quad.vertices()[0], Point::new(20.5, 15.0));
        assert_point_close(quad.vertices()[2], Point::new(180.5, 55.0));
        assert_eq!(quad.cursor(), CursorHint::ClosedHand);
    }

    #[test]
    fn test_scale_bottom_right_axis_aligned() {
        let mut quad = OrientedQuad::new();
        quad.pointer_down(Point::new(160.0, 40.0));
        assert_eq!(quad.active_region(), CaliperRegion::Vertex(Corner::BottomRight));
        quad.pointer_move(Point::new(200.0, 60.0), Buttons::PRIMARY);
        let v = quad.vertices();
        assert_point_close(v[0], Point::new(0.0, 0.0));
        assert_point_close(v[1], Point::new(200.0, 0.0));
        assert_point_close(v[2], Point::new(200.0, 60.0));
        assert_point_close(v[3], Point::new(0.0, 60.0));
    }

    #[test]
    fn test_scale_top_left_clamps_to_minimum() {
        let mut quad = OrientedQuad::new();
        quad.scale_corner(Corner::TopLeft, Point::new(500.0, 500.0));
        let v = quad.vertices();
        assert_point_close(v[0], Point::new(140.0, 30.0));
        assert_point_close(v[2], Point::new(160.0, 40.0));
        let (w, h) = canonical_size(&quad);
        assert!((w - 20.0).abs() < EPS);
        assert!((h - 10.0).abs() < EPS);
    }

    #[test]
    fn test_scale_keeps_anchor_under_rotation_and_shear() {
        let mut quad = OrientedQuad::from_pose(
            HandleConfig::default(),
            Point::new(30.0, 40.0),
            120.0,
            50.0,
            0.6,
            0.25,
        );
        let anchor = quad.vertices()[2];
        quad.scale_corner(Corner::TopLeft, Point::new(-20.0, 10.0));
        assert_point_close(quad.vertices()[2], anchor);
        assert!((quad.rotation() - 0.6).abs() < EPS);
        assert!((quad.shear() - 0.25).abs() < EPS);
    }

    #[test]
    fn test_scale_moves_dragged_corner_with_pointer() {
        let mut quad = OrientedQuad::from_pose(
            HandleConfig::default(),
            Point::ZERO,
            160.0,
            40.0,
            0.4,
            0.0,
        );
        let target = quad.vertices()[2] + kurbo::Vec2::new(10.0, 15.0);
        quad.scale_corner(Corner::BottomRight, target);
        // Without shear the corner follows the pointer exactly
        assert_point_close(quad.vertices()[2], target);
    }

    #[test]
    fn test_shear_handle_drag() {
        let mut quad = OrientedQuad::new();
        quad.pointer_down(Point::new(80.0, 40.0));
        assert_eq!(quad.active_region(), CaliperRegion::ShearHandle);
        // Pointer to the lower left of centre: +0.3 rad shear
        let angle = FRAC_PI_2 + 0.3;
        let pos = Point::new(80.0 + 30.0 * angle.cos(), 20.0 + 30.0 * angle.sin());
        assert!(quad.pointer_move(pos, Buttons::PRIMARY).changed());
        assert!((quad.shear() - 0.3).abs() < EPS);
        let v = quad.vertices();
        assert!((v[0].distance(v[3]) - 40.0).abs() < EPS);
        assert!((v[1].distance(v[2]) - 40.0).abs() < EPS);
        assert_point_close(quad.centre(), Point::new(80.0, 20.0));
    }

    #[test]
    fn test_shear_collapse_is_rejected() {
        let mut quad = OrientedQuad::new();
        quad.pointer_down(Point::new(80.0, 40.0));
        let before = quad.clone();
        // Pointer level with the centre: a 90 degree shear flattens the shape
        let out = quad.pointer_move(Point::new(200.0, 20.0), Buttons::PRIMARY);
        assert_eq!(out, Outcome::IDLE);
        assert_eq!(quad.shear(), 0.0);
        assert_eq!(quad.shape(), before.shape());
        // The drag continues: a valid move afterwards still applies
        let angle = FRAC_PI_2 - 0.2;
        let pos = Point::new(80.0 + 30.0 * angle.cos(), 20.0 + 30.0 * angle.sin());
        assert!(quad.pointer_move(pos, Buttons::PRIMARY).changed());
        assert!((quad.shear() + 0.2).abs() < EPS);
    }

    #[test]
    fn test_shear_inversion_is_rejected() {
        let mut quad = OrientedQuad::new();
        quad.pointer_down(Point::new(80.0, 40.0));
        // Pointer above the centre would flip the left edge upside down
        let out = quad.pointer_move(Point::new(80.0, -30.0), Buttons::PRIMARY);
        assert_eq!(out, Outcome::IDLE);
        assert_eq!(quad.shear(), 0.0);
    }

    #[test]
    fn test_shear_angle_wraps_near_half_turn() {
        let mut quad =
            OrientedQuad::from_pose(HandleConfig::default(), Point::ZERO, 160.0, 40.0, 3.1, 0.0);
        let centre = quad.centre();
        // Local "down" plus 0.1 rad; the raw candidate lands near -2π + 0.1
        let angle = FRAC_PI_2 + 3.1 + 0.1;
        let pos = Point::new(centre.x + 30.0 * angle.cos(), centre.y + 30.0 * angle.sin());
        assert!(quad.shear_towards(pos).changed());
        assert!((quad.shear() - 0.1).abs() < EPS, "shear = {}", quad.shear());
        assert!((quad.reading().shear_deg - 0.1f64.to_degrees()).abs() < 1e-6);

        let [c0, c1, _, c3] = quad.canonical_vertices();
        assert!((c1.x - c0.x - 160.0).abs() < EPS);
        assert!((c3.y - c0.y - 40.0).abs() < EPS);
    }

    #[test]
    fn test_reinitialize_bakes_pose() {
        let mut quad = OrientedQuad::from_pose(
            HandleConfig::default(),
            Point::new(10.0, 10.0),
            100.0,
            30.0,
            0.8,
            -0.3,
        );
        let centre = quad.centre();
        assert!(quad.reinitialize().changed());
        assert_eq!(quad.rotation(), 0.0);
        assert_eq!(quad.shear(), 0.0);
        let v = quad.vertices();
        assert!((v[1].x - v[0].x - 100.0).abs() < EPS);
        assert!((v[3].y - v[0].y - 30.0).abs() < EPS);
        assert!((v[0].y - v[1].y).abs() < EPS);
        assert_point_close(quad.centre(), centre);
    }

    #[test]
    fn test_reinitialize_twice_is_noop() {
        let mut quad =
            OrientedQuad::from_pose(HandleConfig::default(), Point::ZERO, 80.0, 30.0, 1.1, 0.2);
        quad.reinitialize();
        let once = quad.clone();
        assert_eq!(quad.reinitialize(), Outcome::IDLE);
        assert_eq!(quad, once);
    }

    #[test]
    fn test_reading() {
        let quad = OrientedQuad::new();
        let reading = quad.reading();
        assert!((reading.length - 160.0).abs() < EPS);
        assert!((reading.span - 40.0).abs() < EPS);
        assert_eq!(reading.rotation_deg, 0.0);

        let rotated =
            OrientedQuad::from_pose(HandleConfig::default(), Point::ZERO, 160.0, 40.0, 0.5, 0.0);
        let reading = rotated.reading();
        assert!((reading.length - 160.0).abs() < EPS);
        assert!((reading.span - 40.0).abs() < EPS);
        assert!((reading.rotation_deg - 0.5f64.to_degrees()).abs() < EPS);
    }

    #[test]
    fn test_release_notifies_and_disarms() {
        let mut quad = OrientedQuad::new();
        quad.pointer_down(Point::new(160.0, 20.0));
        assert!(quad.is_dragging());
        assert_eq!(quad.cursor(), CursorHint::PointingHand);
        let out = quad.pointer_up(Point::new(160.0, 20.0));
        assert_eq!(out.notification, Some(Notification::TransformFinished));
        assert!(!quad.is_dragging());
        assert_eq!(quad.cursor(), CursorHint::Arrow);
        // Moves after release do nothing
        assert_eq!(
            quad.pointer_move(Point::new(0.0, 300.0), Buttons::PRIMARY),
            Outcome::IDLE
        );
    }

    #[test]
    fn test_move_without_primary_button_is_ignored() {
        let mut quad = OrientedQuad::new();
        quad.pointer_down(Point::new(160.0, 20.0));
        let out = quad.pointer_move(Point::new(80.0, 120.0), Buttons::NONE);
        assert_eq!(out, Outcome::IDLE);
        assert_eq!(quad.rotation(), 0.0);
    }

    #[test]
    fn test_bounding_box() {
        let quad = OrientedQuad::new();
        assert_eq!(quad.bounding_box(), Rect::new(-7.0, -7.0, 167.0, 47.0));
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================
