//! Roikit Core - Interactive region-of-interest geometry
//!
//! This crate provides the shape controllers a host view uses to let a user
//! delineate part of an image with the pointer:
//!
//! - [`AxisAlignedRegion`] - rectangle with move and 8-handle resize
//! - [`OrientedQuad`] - caliper quadrilateral with move, scale, rotate and shear
//! - [`PointMarker`] - single draggable point
//!
//! The host forwards pointer events in the shape's local coordinates and
//! repaints the region reported in each [`Outcome`]. Rendering, windowing and
//! image handling stay on the host side.

pub mod geometry;
pub mod persist;
pub mod roi;

pub use geometry::{Corner, Edge, PixelPoint, PixelRect, Quad};
pub use persist::{Field, PersistError};
pub use roi::{
    AxisAlignedRegion, Buttons, CaliperReading, CaliperRegion, CursorHint, Notification,
    OrientedQuad, Outcome, PointMarker, PointerTarget, RectRegion, Roi, RoiKind, RoiSet,
};

/// Half-width of the grab zone around every control handle, in pixels.
pub const HANDLE_TOLERANCE: f64 = 6.0;
/// Minimum width and height of the rectangle ROI.
pub const RECT_MIN_LENGTH: i32 = 18;
/// Minimum canonical width of the caliper; its minimum height is half this.
pub const CALIPER_MIN_LENGTH: f64 = 20.0;
/// Smallest interior angle a sheared caliper may reach, in degrees.
pub const CALIPER_MIN_ANGLE_DEG: f64 = 5.0;
/// Side of the point marker's grab square, in pixels.
pub const MARKER_SIZE: i32 = 12;

/// Tunable limits shared by the ROI controllers.
///
/// Missing fields deserialize to their defaults, so hosts can override a
/// single limit without restating the rest.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct HandleConfig {
    /// Grab tolerance around handles, edges and corners (pixels)
    pub handle_tolerance: f64,
    /// Rectangle minimum side length (pixels)
    pub rect_min_length: i32,
    /// Caliper minimum canonical width; minimum height is half of it
    pub caliper_min_length: f64,
    /// Caliper minimum apex angle under shear (degrees)
    pub caliper_min_angle_deg: f64,
    /// Point marker grab-square side (pixels)
    pub marker_size: i32,
}

impl Default for HandleConfig {
    fn default() -> Self {
        Self {
            handle_tolerance: HANDLE_TOLERANCE,
            rect_min_length: RECT_MIN_LENGTH,
            caliper_min_length: CALIPER_MIN_LENGTH,
            caliper_min_angle_deg: CALIPER_MIN_ANGLE_DEG,
            marker_size: MARKER_SIZE,
        }
    }
}

impl HandleConfig {
    /// Create a config with the default limits
    pub fn new() -> Self {
        Self::default()
    }

    /// Minimum canonical caliper height.
    #[inline]
    pub fn caliper_min_height(&self) -> f64 {
        self.caliper_min_length / 2.0
    }

    /// `sin` of the minimum apex angle, the ratio a sheared caliper's
    /// span-to-side must stay above.
    #[inline]
    pub fn min_shear_ratio(&self) -> f64 {
        self.caliper_min_angle_deg.to_radians().sin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_limits() {
        let config = HandleConfig::new();
        assert_eq!(config.handle_tolerance, 6.0);
        assert_eq!(config.rect_min_length, 18);
        assert_eq!(config.caliper_min_length, 20.0);
        assert_eq!(config.caliper_min_height(), 10.0);
        assert_eq!(config.marker_size, 12);
    }

    #[test]
    fn test_min_shear_ratio() {
        let config = HandleConfig::new();
        assert!((config.min_shear_ratio() - 5.0f64.to_radians().sin()).abs() < 1e-12);
    }

    #[test]
    fn test_custom_limits() {
        let mut config = HandleConfig::default();
        config.caliper_min_length = 40.0;
        assert_eq!(config.caliper_min_height(), 20.0);
        assert_ne!(config, HandleConfig::default());
    }
}
