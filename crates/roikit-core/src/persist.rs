//! Field-record persistence for the rectangle ROI.
//!
//! A saved rectangle is an ordered list of four named fields, `x`, `y`,
//! `width` and `height`, each holding a decimal integer. The host maps these
//! onto whatever document format it stores (typically one child element per
//! field). Loading is strict: exactly four fields, in that order.

use crate::geometry::PixelRect;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Field names in their required order.
pub const RECT_FIELDS: [&str; 4] = ["x", "y", "width", "height"];

/// One named value of a persisted record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    pub value: String,
}

impl Field {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Error types for loading a persisted rectangle.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PersistError {
    /// The record does not hold exactly four fields.
    #[error("expected 4 fields, found {found}")]
    FieldCount { found: usize },

    /// A field sits at the wrong position or has an unknown name.
    #[error("field {index} should be `{expected}`, found `{found}`")]
    UnexpectedField {
        index: usize,
        expected: &'static str,
        found: String,
    },

    /// A field value is not a decimal integer.
    #[error("field `{name}` has non-integer value `{value}`")]
    InvalidValue { name: String, value: String },
}

/// Serialize a rectangle as `x`, `y`, `width`, `height` fields.
pub fn save_rect(rect: &PixelRect) -> Vec<Field> {
    [rect.x, rect.y, rect.width, rect.height]
        .iter()
        .zip(RECT_FIELDS)
        .map(|(value, name)| Field::new(name, value.to_string()))
        .collect()
}

/// Parse a rectangle saved by [`save_rect`].
pub fn parse_rect(fields: &[Field]) -> Result<PixelRect, PersistError> {
    if fields.len() != RECT_FIELDS.len() {
        return Err(PersistError::FieldCount {
            found: fields.len(),
        });
    }

    let mut values = [0i32; 4];
    for (index, (field, expected)) in fields.iter().zip(RECT_FIELDS).enumerate() {
        if field.name != expected {
            return Err(PersistError::UnexpectedField {
                index,
                expected,
                found: field.name.clone(),
            });
        }
        values[index] = field
            .value
            .trim()
            .parse()
            .map_err(|_| PersistError::InvalidValue {
                name: field.name.clone(),
                value: field.value.clone(),
            })?;
    }

    let [x, y, width, height] = values;
    Ok(PixelRect::new(x, y, width, height))
}
