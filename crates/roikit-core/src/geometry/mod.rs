//! Geometry kernel shared by the ROI controllers.
//!
//! Everything in this module is pure: functions take values and return new
//! values, and nothing holds state between calls.
//!
//! # Coordinate System
//!
//! - Screen convention: x grows to the right, y grows downward
//! - Angles are in radians, positive = clockwise on screen
//! - Real-valued coordinates use [`kurbo::Point`]; pixel-snapped geometry
//!   uses [`PixelRect`] and [`PixelPoint`]

mod kernel;
mod pixel;
mod quad;

pub use kernel::{distance, distance_to_line, distance_to_segment, normalize_angle, rotate_point};
pub use pixel::{PixelPoint, PixelRect};
pub use quad::{Corner, Edge, Quad};
