//! Style configuration for UI elements
//!
//! Provides the core `Style` struct and builder methods for defining the
//! visual appearance of UI components (colors, borders, padding).

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::primitives::{PrimitiveStyle, PrimitiveStyleBuilder};

use super::colors::WHITE;
use super::layout::Padding;

/// Visual style configuration for a UI element
///
/// Use the builder pattern to construct styles incrementally.
///
/// # Examples
///
/// ```ignore
/// // Bordered input box
/// let field_style = Style::new()
///     .with_background(palette.surface)
///     .with_border(palette.tint, 1);
///
/// // Filled badge
/// let badge_style = Style::new()
///     .with_background(palette.badge)
///     .with_foreground(palette.badge_text);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Style {
    /// Background fill color (if any)
    pub background_color: Option<Rgb565>,

    /// Foreground/text color (if any)
    pub foreground_color: Option<Rgb565>,

    /// Border color (if any)
    pub border_color: Option<Rgb565>,

    /// Border width in pixels (0 = no border)
    pub border_width: u32,

    /// Internal padding around content
    pub padding: Padding,
}

impl Default for Style {
    /// Returns a minimal default style with white text and no background or border
    fn default() -> Self {
        Self {
            background_color: None,
            foreground_color: Some(WHITE),
            border_color: None,
            border_width: 0,
            padding: Padding::default(),
        }
    }
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the background color
    pub fn with_background(mut self, color: Rgb565) -> Self {
        self.background_color = Some(color);
        self
    }

    /// Removes the background fill
    pub fn without_background(mut self) -> Self {
        self.background_color = None;
        self
    }

    /// Sets the foreground (text) color
    pub fn with_foreground(mut self, color: Rgb565) -> Self {
        self.foreground_color = Some(color);
        self
    }

    /// Sets the border color and width
    ///
    /// A width of 0 effectively disables the border.
    pub fn with_border(mut self, color: Rgb565, width: u32) -> Self {
        self.border_color = Some(color);
        self.border_width = width;
        self
    }

    /// Sets the padding around the element
    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    /// Converts this style to a `PrimitiveStyle` for embedded-graphics drawing
    pub fn to_primitive_style(&self) -> PrimitiveStyle<Rgb565> {
        let mut builder = PrimitiveStyleBuilder::new();

        if let Some(bg) = self.background_color {
            builder = builder.fill_color(bg);
        }

        if let Some(border) = self.border_color
            && self.border_width > 0
        {
            builder = builder.stroke_color(border).stroke_width(self.border_width);
        }

        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::styling::colors::{BLACK, COLOR_BADGE};

    #[test]
    fn test_zero_width_border_is_not_stroked() {
        let style = Style::new().with_background(COLOR_BADGE).with_border(BLACK, 0);
        let primitive = style.to_primitive_style();

        assert_eq!(primitive.fill_color, Some(COLOR_BADGE));
        assert_eq!(primitive.stroke_color, None);
    }

    #[test]
    fn test_border_only_style() {
        let primitive = Style::new()
            .with_border(BLACK, 1)
            .without_background()
            .to_primitive_style();

        assert_eq!(primitive.fill_color, None);
        assert_eq!(primitive.stroke_color, Some(BLACK));
        assert_eq!(primitive.stroke_width, 1);
    }
}
