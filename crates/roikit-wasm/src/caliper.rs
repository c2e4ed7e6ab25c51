//! Caliper ROI bindings.

use crate::types::{config_from_js, css_cursor, EventSink, JsReading, JsRect};
use kurbo::Point;
use roikit_core::{Buttons, HandleConfig, OrientedQuad, PointerTarget};
use wasm_bindgen::prelude::*;

/// Caliper ROI wrapper for JavaScript
#[wasm_bindgen]
pub struct CaliperRoi {
    inner: OrientedQuad,
    sink: EventSink,
}

impl Default for CaliperRoi {
    fn default() -> Self {
        Self::new()
    }
}

/// Flatten corners to `[x0, y0, x1, y1, x2, y2, x3, y3]`.
fn flatten(corners: [Point; 4]) -> Vec<f64> {
    corners.iter().flat_map(|p| [p.x, p.y]).collect()
}

#[wasm_bindgen]
impl CaliperRoi {
    /// Create a 160x40 axis-aligned caliper at the origin
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::from_inner(OrientedQuad::new())
    }

    /// Create a caliper with a partial `HandleConfig` object
    pub fn with_config(config: JsValue) -> Result<CaliperRoi, JsValue> {
        Ok(Self::from_inner(OrientedQuad::with_config(config_from_js(
            config,
        )?)))
    }

    /// Create a caliper from its canonical pose (angles in radians)
    pub fn from_pose(
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        rotation: f64,
        shear: f64,
    ) -> CaliperRoi {
        Self::from_inner(OrientedQuad::from_pose(
            HandleConfig::default(),
            Point::new(x, y),
            width,
            height,
            rotation,
            shear,
        ))
    }

    /// Press at a local position. Returns whether a handle was armed.
    pub fn pointer_down(&mut self, x: f64, y: f64) -> bool {
        let outcome = self.inner.pointer_down(Point::new(x, y));
        self.sink.apply(outcome);
        self.inner.is_dragging()
    }

    /// Drag to a local position with DOM `buttons` bits. Returns whether the shape changed.
    pub fn pointer_move(&mut self, x: f64, y: f64, buttons: u16) -> bool {
        let outcome = self.inner.pointer_move(Point::new(x, y), Buttons::from(buttons));
        self.sink.apply(outcome)
    }

    pub fn pointer_up(&mut self, x: f64, y: f64) {
        let outcome = self.inner.pointer_up(Point::new(x, y));
        self.sink.apply(outcome);
    }

    pub fn bounding_box(&self) -> JsRect {
        self.inner.bounding_box().into()
    }

    /// Area to repaint since the last call
    pub fn take_dirty(&mut self) -> Option<JsRect> {
        self.sink.take_dirty()
    }

    /// CSS cursor for the current gesture
    pub fn cursor(&self) -> String {
        css_cursor(self.inner.cursor()).to_string()
    }

    /// World-space corners as a flat Float64Array
    pub fn vertices(&self) -> Vec<f64> {
        flatten(self.inner.vertices())
    }

    /// Corners with rotation and shear undone, as a flat Float64Array
    pub fn canonical_vertices(&self) -> Vec<f64> {
        flatten(self.inner.canonical_vertices())
    }

    /// Cumulative rotation in radians
    #[wasm_bindgen(getter)]
    pub fn rotation(&self) -> f64 {
        self.inner.rotation()
    }

    /// Cumulative shear in radians
    #[wasm_bindgen(getter)]
    pub fn shear(&self) -> f64 {
        self.inner.shear()
    }

    pub fn reading(&self) -> JsReading {
        self.inner.reading().into()
    }

    /// Bake rotation and shear into the shape. Returns whether anything changed.
    pub fn reinitialize(&mut self) -> bool {
        let outcome = self.inner.reinitialize();
        self.sink.apply(outcome)
    }

    pub fn set_on_transform_finished(&mut self, callback: Option<js_sys::Function>) {
        self.sink.set_on_transform_finished(callback);
    }
}

impl CaliperRoi {
    fn from_inner(inner: OrientedQuad) -> Self {
        Self {
            inner,
            sink: EventSink::default(),
        }
    }
}


/// WASM-specific tests that require JsValue.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_with_partial_config() {
        let config = js_sys::JSON::parse(r#"{"caliper_min_length": 60}"#).unwrap();
        let mut roi = CaliperRoi::with_config(config).unwrap();
        roi.pointer_down(160.0, 40.0);
        roi.pointer_move(0.0, 0.0, 1);
        let v = roi.vertices();
        assert!((v[2] - v[0] - 60.0).abs() < 1e-9);
        assert!((v[7] - v[1] - 30.0).abs() < 1e-9);
    }
}
