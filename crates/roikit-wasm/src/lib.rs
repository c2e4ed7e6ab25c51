//! Roikit WASM - WebAssembly bindings for the roikit ROI controllers
//!
//! This crate wraps the roikit-core controllers for a browser host that
//! draws the shapes on a canvas and forwards pointer events.
//!
//! # Module Structure
//!
//! - `rect` - Rectangle ROI (`RectRoi`)
//! - `caliper` - Caliper ROI with rotate and shear (`CaliperRoi`)
//! - `marker` - Point ROI (`PointRoi`)
//! - `types` - JS-facing value types and callback plumbing
//!
//! # Usage
//!
//! ```typescript
//! import init, { CaliperRoi } from '@roikit/wasm';
//!
//! await init();
//!
//! const roi = new CaliperRoi();
//! roi.set_on_transform_finished(() => console.log(roi.reading()));
//! canvas.onpointerdown = (e) => roi.pointer_down(e.offsetX, e.offsetY);
//! canvas.onpointermove = (e) => {
//!   if (roi.pointer_move(e.offsetX, e.offsetY, e.buttons)) redraw(roi.take_dirty());
//!   canvas.style.cursor = roi.cursor();
//! };
//! canvas.onpointerup = (e) => roi.pointer_up(e.offsetX, e.offsetY);
//! ```

use wasm_bindgen::prelude::*;

mod caliper;
mod marker;
mod rect;
mod types;

// Re-export public types
pub use caliper::CaliperRoi;
pub use marker::PointRoi;
pub use rect::RectRoi;
pub use types::{JsPoint, JsReading, JsRect};

/// Initialize the WASM module (called automatically on load)
///
/// Routes Rust panics and `tracing` output to the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        // A second init keeps the first subscriber
        let _ = tracing_wasm::try_set_as_global_default();
    }
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
