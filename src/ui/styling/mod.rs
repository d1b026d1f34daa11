//! Styling system for UI elements
//!
//! - [`colors`] - Color constants and palette management
//! - [`layout`] - Padding
//! - [`style`] - Style configuration
//! - [`theme`] - Palette plus widget geometry

pub mod colors;
pub mod layout;
pub mod style;
pub mod theme;

pub use colors::{
    BLACK, COLOR_BACKGROUND, COLOR_BADGE, COLOR_FIELD_TINT, COLOR_FOREGROUND, ColorPalette,
    DARK_GRAY, LIGHT_GRAY, WHITE,
};
pub use layout::Padding;
pub use style::Style;
pub use theme::Theme;
