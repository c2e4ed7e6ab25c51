//! Types exchanged with the host's event loop.

use kurbo::Rect;
use serde::{Deserialize, Serialize};

/// Held pointer buttons, using the DOM `MouseEvent.buttons` bit layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Buttons(u16);

impl Buttons {
    pub const NONE: Buttons = Buttons(0);
    pub const PRIMARY: Buttons = Buttons(1);
    pub const SECONDARY: Buttons = Buttons(2);
    pub const AUXILIARY: Buttons = Buttons(4);

    #[inline]
    pub fn from_bits(bits: u16) -> Self {
        Buttons(bits)
    }

    #[inline]
    pub fn bits(self) -> u16 {
        self.0
    }

    #[inline]
    pub fn contains(self, other: Buttons) -> bool {
        self.0 & other.0 == other.0
    }

    /// Only moves with the primary button held drive a transform.
    #[inline]
    pub fn is_primary_held(self) -> bool {
        self.contains(Buttons::PRIMARY)
    }
}

impl From<u16> for Buttons {
    fn from(bits: u16) -> Self {
        Buttons(bits)
    }
}

impl std::ops::BitOr for Buttons {
    type Output = Buttons;

    fn bitor(self, rhs: Buttons) -> Buttons {
        Buttons(self.0 | rhs.0)
    }
}

/// Signals a controller raises towards the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Notification {
    /// A drag sequence ended (rectangle and caliper, every pointer-up).
    TransformFinished,
    /// The point marker moved.
    PositionChanged,
}

/// Pointer cursor the host should show while a gesture is in progress.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CursorHint {
    #[default]
    Arrow,
    ClosedHand,
    SizeVertical,
    SizeHorizontal,
    /// `\` diagonal: top-left / bottom-right resize
    SizeForwardDiagonal,
    /// `/` diagonal: top-right / bottom-left resize
    SizeBackwardDiagonal,
    Cross,
    PointingHand,
    SizeAll,
}

/// What a pointer handler did.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Outcome {
    /// Area to repaint: union of the extents before and after a mutation.
    pub dirty: Option<Rect>,
    pub notification: Option<Notification>,
}

impl Outcome {
    /// Nothing happened.
    pub const IDLE: Outcome = Outcome {
        dirty: None,
        notification: None,
    };

    /// Geometry changed from `before` to `after`.
    pub fn repaint(before: Rect, after: Rect) -> Self {
        Self {
            dirty: Some(before.union(after)),
            notification: None,
        }
    }

    pub fn notify(notification: Notification) -> Self {
        Self {
            dirty: None,
            notification: Some(notification),
        }
    }

    pub fn with_notification(mut self, notification: Notification) -> Self {
        self.notification = Some(notification);
        self
    }

    #[inline]
    pub fn changed(&self) -> bool {
        self.dirty.is_some()
    }
}
