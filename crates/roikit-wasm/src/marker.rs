//! Point ROI bindings.

use crate::types::{config_from_js, css_cursor, EventSink, JsPoint, JsRect};
use kurbo::{Affine, Point};
use roikit_core::{Buttons, PointMarker, PointerTarget};
use wasm_bindgen::prelude::*;

/// Point marker wrapper for JavaScript
#[wasm_bindgen]
pub struct PointRoi {
    inner: PointMarker,
    sink: EventSink,
}

impl Default for PointRoi {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl PointRoi {
    /// Create a marker at (20, 20)
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            inner: PointMarker::new(),
            sink: EventSink::default(),
        }
    }

    /// Create a marker with a partial `HandleConfig` object
    pub fn with_config(config: JsValue) -> Result<PointRoi, JsValue> {
        Ok(Self {
            inner: PointMarker::with_config(config_from_js(config)?),
            sink: EventSink::default(),
        })
    }

    /// Press at a local position. Returns whether the marker was grabbed.
    pub fn pointer_down(&mut self, x: f64, y: f64) -> bool {
        let outcome = self.inner.pointer_down(Point::new(x, y));
        self.sink.apply(outcome);
        self.inner.is_dragging()
    }

    /// Drag to a local position with DOM `buttons` bits. Returns whether the marker moved.
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

    pub fn cursor(&self) -> String {
        css_cursor(self.inner.cursor()).to_string()
    }

    pub fn position(&self) -> JsPoint {
        self.inner.position().into()
    }

    /// Place the marker, snapped to the nearest pixel
    pub fn move_to(&mut self, x: f64, y: f64) {
        let outcome = self.inner.move_to(Point::new(x, y));
        self.sink.apply(outcome);
    }

    /// Position mapped through a local-to-scene matrix given as the six
    /// `DOMMatrix` coefficients `a b c d e f`
    pub fn position_on_scene(&self, a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> JsPoint {
        self.inner
            .position_on_scene(Affine::new([a, b, c, d, e, f]))
            .into()
    }

    pub fn set_on_position_changed(&mut self, callback: Option<js_sys::Function>) {
        self.sink.set_on_position_changed(callback);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drag_marker() {
        let mut roi = PointRoi::new();
        assert!(roi.pointer_down(21.0, 19.0));
        assert_eq!(roi.cursor(), "crosshair");
        assert!(roi.pointer_move(50.6, 70.2, 1));
        roi.pointer_up(50.6, 70.2);
        let p = roi.position();
        assert_eq!((p.x(), p.y()), (51, 70));
        assert_eq!(roi.cursor(), "default");
    }

    #[test]
    fn test_miss_does_not_grab() {
        let mut roi = PointRoi::new();
        assert!(!roi.pointer_down(80.0, 80.0));
        assert!(!roi.pointer_move(90.0, 90.0, 1));
    }

    #[test]
    fn test_move_to() {
        let mut roi = PointRoi::new();
        roi.move_to(5.0, 6.0);
        assert_eq!(roi.position().x(), 5);
        assert!(roi.take_dirty().is_some());
    }

    #[test]
    fn test_position_on_scene() {
        let roi = PointRoi::new();
        let p = roi.position_on_scene(2.0, 0.0, 0.0, 2.0, 10.0, -5.0);
        assert_eq!((p.x(), p.y()), (50, 35));
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
        let config = js_sys::JSON::parse(r#"{"marker_size": 40}"#).unwrap();
        let mut roi = PointRoi::with_config(config).unwrap();
        assert!(roi.pointer_down(38.0, 20.0));
    }
}
