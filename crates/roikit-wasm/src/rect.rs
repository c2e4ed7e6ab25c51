//! Rectangle ROI bindings.

use crate::types::{config_from_js, css_cursor, EventSink, JsRect};
use kurbo::Point;
use roikit_core::{AxisAlignedRegion, Buttons, Field, PixelRect, PointerTarget};
use wasm_bindgen::prelude::*;

/// Rectangle ROI wrapper for JavaScript
#[wasm_bindgen]
pub struct RectRoi {
    inner: AxisAlignedRegion,
    sink: EventSink,
}

impl Default for RectRoi {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl RectRoi {
    /// Create a 100x100 rectangle at the origin
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            inner: AxisAlignedRegion::new(),
            sink: EventSink::default(),
        }
    }

    /// Create a rectangle with a partial `HandleConfig` object
    pub fn with_config(config: JsValue) -> Result<RectRoi, JsValue> {
        Ok(Self {
            inner: AxisAlignedRegion::with_config(config_from_js(config)?),
            sink: EventSink::default(),
        })
    }

    /// Press at a local position. Returns whether a handle was armed.
    pub fn pointer_down(&mut self, x: f64, y: f64) -> bool {
        let outcome = self.inner.pointer_down(Point::new(x, y));
        self.sink.apply(outcome);
        self.inner.is_dragging()
    }

    /// Drag to a local position with DOM `buttons` bits. Returns whether the rectangle changed.
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

    pub fn rect(&self) -> JsRect {
        self.inner.rect().into()
    }

    pub fn set_rect(&mut self, x: i32, y: i32, width: i32, height: i32) {
        let outcome = self.inner.set_rect(PixelRect::new(x, y, width, height));
        self.sink.apply(outcome);
    }

    /// Saved fields as an array of `{name, value}` objects
    pub fn save(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner.save())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Restore from fields produced by `save`.
    ///
    /// A malformed record is logged and ignored, leaving the rectangle as it
    /// was. Only a value that is not an array of `{name, value}` objects throws.
    pub fn load(&mut self, fields: JsValue) -> Result<(), JsValue> {
        let fields: Vec<Field> = serde_wasm_bindgen::from_value(fields)
            .map_err(|e| JsValue::from_str(&format!("Invalid fields: {}", e)))?;
        let outcome = self.inner.load(&fields);
        self.sink.apply(outcome);
        Ok(())
    }

    pub fn set_on_transform_finished(&mut self, callback: Option<js_sys::Function>) {
        self.sink.set_on_transform_finished(callback);
    }
}
