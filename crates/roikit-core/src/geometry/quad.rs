//! Closed four-corner polygon used by the caliper ROI.
//!
//! A [`Quad`] stores five points: the four corners in the order top-left,
//! top-right, bottom-right, bottom-left, followed by a copy of the first
//! corner. Every constructor and transform keeps `points[4] == points[0]`.
//!
//! # Shear
//!
//! Shearing rotates the left pair (corners 0 and 3) about their midpoint and
//! the right pair (corners 1 and 2) about theirs, by the same angle. Left and
//! right edge lengths are preserved while the top and bottom edges skew.

use super::kernel::{rotate_point, rotation_about};
use kurbo::{Point, Rect, Vec2};
use std::ops::Index;

/// A corner of the quad, by vertex index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Corner {
    TopLeft = 0,
    TopRight = 1,
    BottomRight = 2,
    BottomLeft = 3,
}

impl Corner {
    pub const ALL: [Corner; 4] = [
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomRight,
        Corner::BottomLeft,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// The diagonally opposite corner.
    pub fn opposite(self) -> Corner {
        match self {
            Corner::TopLeft => Corner::BottomRight,
            Corner::TopRight => Corner::BottomLeft,
            Corner::BottomRight => Corner::TopLeft,
            Corner::BottomLeft => Corner::TopRight,
        }
    }

    #[inline]
    pub fn is_left(self) -> bool {
        matches!(self, Corner::TopLeft | Corner::BottomLeft)
    }

    #[inline]
    pub fn is_top(self) -> bool {
        matches!(self, Corner::TopLeft | Corner::TopRight)
    }
}

/// An edge of the quad; edge `i` runs from corner `i` to corner `i + 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    Top = 0,
    Right = 1,
    Bottom = 2,
    Left = 3,
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::Top, Edge::Right, Edge::Bottom, Edge::Left];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Closed quadrilateral (see module docs for the point layout).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quad {
    points: [Point; 5],
}

impl Quad {
    /// Close four corners into a quad.
    pub fn from_corners(corners: [Point; 4]) -> Self {
        let [p0, p1, p2, p3] = corners;
        Self {
            points: [p0, p1, p2, p3, p0],
        }
    }

    /// Axis-aligned rectangle with its top-left corner at `origin`.
    pub fn axis_aligned(origin: Point, width: f64, height: f64) -> Self {
        Self::from_corners([
            origin,
            Point::new(origin.x + width, origin.y),
            Point::new(origin.x + width, origin.y + height),
            Point::new(origin.x, origin.y + height),
        ])
    }

    /// All five points, closure point included.
    #[inline]
    pub fn points(&self) -> &[Point; 5] {
        &self.points
    }

    /// The four corners, closure point excluded.
    pub fn corners(&self) -> [Point; 4] {
        [self.points[0], self.points[1], self.points[2], self.points[3]]
    }

    #[inline]
    pub fn corner(&self, corner: Corner) -> Point {
        self.points[corner.index()]
    }

    /// Endpoints of an edge.
    pub fn edge(&self, edge: Edge) -> (Point, Point) {
        let i = edge.index();
        (self.points[i], self.points[i + 1])
    }

    /// Midpoint of an edge.
    pub fn edge_midpoint(&self, edge: Edge) -> Point {
        let (a, b) = self.edge(edge);
        a.midpoint(b)
    }

    /// Centre as the average of the two diagonal midpoints.
    ///
    /// Both diagonals of a parallelogram bisect each other, so this stays put
    /// under shear and rotation about itself.
    pub fn centre(&self) -> Point {
        let c1 = self.points[0].midpoint(self.points[2]);
        let c2 = self.points[1].midpoint(self.points[3]);
        c1.midpoint(c2)
    }

    pub fn bounding_box(&self) -> Rect {
        self.points[1..4]
            .iter()
            .fold(Rect::from_points(self.points[0], self.points[0]), |r, p| {
                r.union_pt(*p)
            })
    }

    /// Rotate every point about `center`.
    pub fn rotated(&self, center: Point, angle: f64) -> Quad {
        let affine = rotation_about(center, angle);
        Self {
            points: self.points.map(|p| affine * p),
        }
    }

    /// Shear by `angle` (see module docs).
    pub fn sheared(&self, angle: f64) -> Quad {
        let lmid = self.points[0].midpoint(self.points[3]);
        let rmid = self.points[1].midpoint(self.points[2]);
        Self::from_corners([
            rotate_point(self.points[0], lmid, angle),
            rotate_point(self.points[1], rmid, angle),
            rotate_point(self.points[2], rmid, angle),
            rotate_point(self.points[3], lmid, angle),
        ])
    }

    pub fn translated(&self, delta: Vec2) -> Quad {
        Self {
            points: self.points.map(|p| p + delta),
        }
    }

    #[inline]
    pub fn is_closed(&self) -> bool {
        self.points[4] == self.points[0]
    }
}

impl Index<usize> for Quad {
    type Output = Point;

    fn index(&self, index: usize) -> &Point {
        &self.points[index]
    }
}

impl Index<Corner> for Quad {
    type Output = Point;

    fn index(&self, corner: Corner) -> &Point {
        &self.points[corner.index()]
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================
