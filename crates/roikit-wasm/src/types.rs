//! WASM-compatible value types and the shared event plumbing.
//!
//! The controller wrappers hand geometry to JavaScript as small getter-only
//! classes and forward core notifications to optional JS callbacks.

use kurbo::Rect;
use roikit_core::{CaliperReading, CursorHint, HandleConfig, Notification, Outcome, PixelPoint, PixelRect};
use wasm_bindgen::prelude::*;

/// A rectangle for JavaScript (`x`, `y`, `width`, `height`).
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JsRect {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
}

#[wasm_bindgen]
impl JsRect {
    #[wasm_bindgen(getter)]
    pub fn x(&self) -> f64 {
        self.x
    }

    #[wasm_bindgen(getter)]
    pub fn y(&self) -> f64 {
        self.y
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> f64 {
        self.height
    }
}

impl From<Rect> for JsRect {
    fn from(rect: Rect) -> Self {
        Self {
            x: rect.x0,
            y: rect.y0,
            width: rect.width(),
            height: rect.height(),
        }
    }
}

impl From<PixelRect> for JsRect {
    fn from(rect: PixelRect) -> Self {
        Self {
            x: f64::from(rect.x),
            y: f64::from(rect.y),
            width: f64::from(rect.width),
            height: f64::from(rect.height),
        }
    }
}

/// A pixel position for JavaScript.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JsPoint {
    x: i32,
    y: i32,
}

#[wasm_bindgen]
impl JsPoint {
    #[wasm_bindgen(getter)]
    pub fn x(&self) -> i32 {
        self.x
    }

    #[wasm_bindgen(getter)]
    pub fn y(&self) -> i32 {
        self.y
    }
}

impl From<PixelPoint> for JsPoint {
    fn from(p: PixelPoint) -> Self {
        Self { x: p.x, y: p.y }
    }
}

/// Caliper measurements for JavaScript.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JsReading {
    inner: CaliperReading,
}

#[wasm_bindgen]
impl JsReading {
    /// Length of the top edge
    #[wasm_bindgen(getter)]
    pub fn length(&self) -> f64 {
        self.inner.length
    }

    /// Distance between the top and bottom edges
    #[wasm_bindgen(getter)]
    pub fn span(&self) -> f64 {
        self.inner.span
    }

    #[wasm_bindgen(getter)]
    pub fn rotation_deg(&self) -> f64 {
        self.inner.rotation_deg
    }

    #[wasm_bindgen(getter)]
    pub fn shear_deg(&self) -> f64 {
        self.inner.shear_deg
    }
}

impl From<CaliperReading> for JsReading {
    fn from(inner: CaliperReading) -> Self {
        Self { inner }
    }
}

/// CSS `cursor` value for a cursor hint.
pub(crate) fn css_cursor(hint: CursorHint) -> &'static str {
    match hint {
        CursorHint::Arrow => "default",
        CursorHint::ClosedHand => "grabbing",
        CursorHint::SizeVertical => "ns-resize",
        CursorHint::SizeHorizontal => "ew-resize",
        CursorHint::SizeForwardDiagonal => "nwse-resize",
        CursorHint::SizeBackwardDiagonal => "nesw-resize",
        CursorHint::Cross => "crosshair",
        CursorHint::PointingHand => "pointer",
        CursorHint::SizeAll => "move",
    }
}

/// Read a partial config object; `undefined` or `null` gives the defaults.
pub(crate) fn config_from_js(config: JsValue) -> Result<HandleConfig, JsValue> {
    if config.is_undefined() || config.is_null() {
        return Ok(HandleConfig::default());
    }
    serde_wasm_bindgen::from_value(config)
        .map_err(|e| JsValue::from_str(&format!("Invalid ROI config: {}", e)))
}

/// Pending repaint area and host callbacks for one controller.
#[derive(Default)]
pub(crate) struct EventSink {
    dirty: Option<Rect>,
    on_transform_finished: Option<js_sys::Function>,
    on_position_changed: Option<js_sys::Function>,
}

impl EventSink {
    /// Record an outcome and fire its callback. Returns whether geometry changed.
    pub(crate) fn apply(&mut self, outcome: Outcome) -> bool {
        if let Some(rect) = outcome.dirty {
            self.dirty = Some(self.dirty.map_or(rect, |pending| pending.union(rect)));
        }
        let callback = match outcome.notification {
            Some(Notification::TransformFinished) => self.on_transform_finished.as_ref(),
            Some(Notification::PositionChanged) => self.on_position_changed.as_ref(),
            None => None,
        };
        if let Some(callback) = callback {
            if let Err(err) = callback.call0(&JsValue::NULL) {
                tracing::warn!(?err, "ROI callback threw");
            }
        }
        outcome.changed()
    }

    /// Area changed since the last call, if any.
    pub(crate) fn take_dirty(&mut self) -> Option<JsRect> {
        self.dirty.take().map(JsRect::from)
    }

    pub(crate) fn set_on_transform_finished(&mut self, callback: Option<js_sys::Function>) {
        self.on_transform_finished = callback;
    }

    pub(crate) fn set_on_position_changed(&mut self, callback: Option<js_sys::Function>) {
        self.on_position_changed = callback;
    }
}
