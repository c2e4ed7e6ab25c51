//! Point-level geometry: distances and rotation about a centre.
//!
//! # Rotation
//!
//! Rotation is composed as translate-to-origin, rotate, translate-back:
//! ```text
//! x' = (x - cx) * cos(θ) - (y - cy) * sin(θ) + cx
//! y' = (x - cx) * sin(θ) + (y - cy) * cos(θ) + cy
//! ```
//! With y growing downward a positive θ turns points clockwise on screen.

use kurbo::{Affine, Point};
use std::f64::consts::{PI, TAU};

/// Euclidean distance between two points.
#[inline]
pub fn distance(p: Point, q: Point) -> f64 {
    p.distance(q)
}

/// Perpendicular distance from `p` to the infinite line through `a` and `b`.
///
/// Returns `None` when `a == b`, since the line is undefined. Callers treat
/// that as "skip this test" rather than as a failure.
pub fn distance_to_line(p: Point, a: Point, b: Point) -> Option<f64> {
    if a == b {
        return None;
    }
    let ab = b - a;
    Some((p - a).cross(ab).abs() / ab.hypot())
}

/// Distance from `p` to the closest point of the segment `a`–`b`.
///
/// Unlike [`distance_to_line`] this is always defined: a zero-length
/// segment degrades to the distance to `a`.
pub fn distance_to_segment(p: Point, a: Point, b: Point) -> f64 {
    let ab = b - a;
    let len_sq = ab.hypot2();
    if len_sq == 0.0 {
        return p.distance(a);
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    p.distance(a + ab * t)
}

/// Rotate `p` about `center` by `angle` radians (clockwise-positive on screen).
pub fn rotate_point(p: Point, center: Point, angle: f64) -> Point {
    rotation_about(center, angle) * p
}

/// Wrap an angle into `(-π, π]`.
pub fn normalize_angle(angle: f64) -> f64 {
    let wrapped = (angle + PI).rem_euclid(TAU) - PI;
    if wrapped <= -PI {
        wrapped + TAU
    } else {
        wrapped
    }
}

/// Affine rotation about `center`.
#[inline]
pub(crate) fn rotation_about(center: Point, angle: f64) -> Affine {
    let offset = center.to_vec2();
    Affine::translate(offset) * Affine::rotate(angle) * Affine::translate(-offset)
}


// ============================================================================
// Property-Based Tests
// ============================================================================
