//! Color definitions and palette management
//!
//! Colors are RGB565, the native format of the target displays.
//!
//! # RGB565 Format
//! - Red: 5 bits (0-31)
//! - Green: 6 bits (0-63)
//! - Blue: 5 bits (0-31)
//!
//! To convert from 8-bit RGB: R>>3, G>>2, B>>3

use embedded_graphics::pixelcolor::Rgb565;

// ============================================================================
// Base Colors
// ============================================================================

/// Pure white - maximum brightness in RGB565
pub const WHITE: Rgb565 = Rgb565::new(31, 63, 31);

/// Pure black
pub const BLACK: Rgb565 = Rgb565::new(0, 0, 0);

/// Light gray - used for the inline clear control
pub const LIGHT_GRAY: Rgb565 = Rgb565::new(21, 42, 21);

/// Dark gray - for subtle text on light backgrounds
pub const DARK_GRAY: Rgb565 = Rgb565::new(10, 20, 10);

/// Very dark gray-blue page background
pub const COLOR_BACKGROUND: Rgb565 = Rgb565::new(18 >> 3, 23 >> 2, 24 >> 3);

/// Surface color slightly lighter than [`COLOR_BACKGROUND`]
pub const COLOR_FOREGROUND: Rgb565 = Rgb565::new(26 >> 3, 32 >> 2, 33 >> 3);

// ============================================================================
// Widget Colors
// ============================================================================

/// Muted slate used for field borders, the caret and the resting label
pub const COLOR_FIELD_TINT: Rgb565 = Rgb565::new(108 >> 3, 117 >> 2, 125 >> 3);

/// Overflow badge fill
pub const COLOR_BADGE: Rgb565 = Rgb565::new(255 >> 3, 165 >> 2, 0);

// ============================================================================
// Color Palette
// ============================================================================

/// A cohesive color palette shared by the avatar stack and the text field.
///
/// # Examples
///
/// ```ignore
/// // White screens, as in the demo pages
/// let palette = ColorPalette::default();
///
/// // Or the dark variant
/// let dark = ColorPalette::dark();
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorPalette {
    /// Page background
    pub background: Rgb565,

    /// Fill behind the field's text and the floating label pill
    pub surface: Rgb565,

    /// Primary text color - typed text and the floating label
    pub text_primary: Rgb565,

    /// Border, caret and resting label color
    pub tint: Rgb565,

    /// Ring drawn around each avatar
    pub avatar_border: Rgb565,

    /// Overflow badge fill
    pub badge: Rgb565,

    /// Overflow badge text
    pub badge_text: Rgb565,

    /// Inline clear control glyph
    pub clear_control: Rgb565,
}

impl Default for ColorPalette {
    /// Returns the light palette
    fn default() -> Self {
        Self::light()
    }
}

impl ColorPalette {
    /// Dark text on white surfaces
    pub fn light() -> Self {
        Self {
            background: WHITE,
            surface: WHITE,
            text_primary: BLACK,
            tint: COLOR_FIELD_TINT,
            avatar_border: WHITE,
            badge: COLOR_BADGE,
            badge_text: WHITE,
            clear_control: LIGHT_GRAY,
        }
    }

    /// Light text on dark surfaces
    pub fn dark() -> Self {
        Self {
            background: COLOR_BACKGROUND,
            surface: COLOR_FOREGROUND,
            text_primary: WHITE,
            tint: LIGHT_GRAY,
            avatar_border: COLOR_BACKGROUND,
            badge: COLOR_BADGE,
            badge_text: WHITE,
            clear_control: DARK_GRAY,
        }
    }
}
