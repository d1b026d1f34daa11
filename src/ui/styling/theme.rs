//! Global theme management
//!
//! Combines the color palette with the widget geometry so a host can hand a
//! single value to every page.

use super::colors::ColorPalette;
use crate::config::{AvatarStackConfig, FloatingFieldConfig};

/// Global theme configuration
///
/// # Examples
///
/// ```ignore
/// let theme = Theme::default();
/// let stack = AvatarStack::new(bounds).with_theme(&theme);
/// let email = FloatingField::new(bounds, "Email", LayoutDirection::LeftToRight)?
///     .with_theme(&theme);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Theme {
    /// The active color palette
    pub palette: ColorPalette,

    /// Avatar stack geometry
    pub avatar_stack: AvatarStackConfig,

    /// Text field geometry and timing
    pub floating_field: FloatingFieldConfig,
}

impl Theme {
    /// Light palette with stock geometry
    pub fn light() -> Self {
        Self {
            palette: ColorPalette::light(),
            ..Self::default()
        }
    }

    /// Dark palette with stock geometry
    pub fn dark() -> Self {
        Self {
            palette: ColorPalette::dark(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_share_geometry() {
        let light = Theme::light();
        let dark = Theme::dark();

        assert_eq!(light.palette, Theme::default().palette);
        assert_ne!(light.palette.background, dark.palette.background);
        assert_eq!(light.avatar_stack, dark.avatar_stack);
        assert_eq!(light.floating_field, dark.floating_field);
    }
}
