// src/ui/mod.rs
//! Widgets for embedded displays
//!
//! - [`AvatarStack`]: overlapping circular avatars with a "+N" overflow badge
//! - [`FloatingField`]: text input whose label floats onto its border
//! - Core traits for drawable and touchable elements, with dirty tracking
//! - Tweening for the label transition

pub mod animation;
pub mod clip;
pub mod components;
pub mod core;
pub mod error;
pub mod styling;

/// Width of the demo display
pub const DISPLAY_WIDTH_PX: u16 = 320;

/// Height of the demo display
pub const DISPLAY_HEIGHT_PX: u16 = 240;

pub use animation::{Easing, Lerp, Tween};
pub use components::{
    AvatarStack, ClearButton, FieldInput, FloatingField, LabelState, LabelVisuals,
    OverflowBadge, PaddedLabel, SubmitOutcome,
};
pub use self::core::{
    Action, DirtyRegion, Drawable, KeyEvent, LayoutDirection, PageId, TouchEvent,
    TouchPoint, TouchResult, Touchable,
};
pub use error::{FieldError, FieldResult};
pub use styling::{ColorPalette, Padding, Style, Theme};
