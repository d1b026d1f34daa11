// src/ui/components/padded_label.rs
//! Single-line label whose caption is inset from its background

use crate::ui::core::{DirtyRegion, Drawable};
use crate::ui::error::{FieldError, FieldResult};
use crate::ui::styling::{Padding, Style};
use embedded_graphics::Drawable as EgDrawable;
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle, ascii::FONT_6X10};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Rectangle, RoundedRectangle};
use embedded_graphics::text::{Alignment, Baseline, Text, TextStyleBuilder};

/// Maximum caption length in bytes
pub const MAX_CAPTION_LEN: usize = 32;

/// A label that reports its intrinsic size as caption size plus insets.
///
/// The owner positions it with [`set_bounds`](PaddedLabel::set_bounds); the
/// background, when the style has one, is a rounded rectangle filling those
/// bounds and the caption is vertically centred inside them.
///
/// # Examples
/// ```ignore
/// let mut label = PaddedLabel::new("Email")?.with_padding(Padding::symmetric(2, 6));
/// let size = label.intrinsic_size();
/// label.set_bounds(Rectangle::new(Point::new(12, 0), size));
/// ```
pub struct PaddedLabel {
    bounds: Rectangle,
    text: heapless::String<MAX_CAPTION_LEN>,
    font: &'static MonoFont<'static>,
    alignment: Alignment,
    corner_radius: u32,
    style: Style,
    dirty: bool,
}

impl PaddedLabel {
    pub fn new(text: &str) -> FieldResult<Self> {
        let mut label = Self {
            bounds: Rectangle::zero(),
            text: heapless::String::new(),
            font: &FONT_6X10,
            alignment: Alignment::Left,
            corner_radius: 0,
            style: Style::default().with_padding(Padding::symmetric(0, 4)),
            dirty: true,
        };
        label.set_text(text)?;
        Ok(label)
    }

    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.style.padding = padding;
        self
    }

    pub fn set_padding(&mut self, padding: Padding) {
        if self.style.padding != padding {
            self.style.padding = padding;
            self.dirty = true;
        }
    }

    /// Replace the caption.
    ///
    /// Fails without touching the current caption if `text` is too long.
    pub fn set_text(&mut self, text: &str) -> FieldResult<()> {
        let mut new_text = heapless::String::new();
        new_text
            .push_str(text)
            .map_err(|_| FieldError::CaptionTooLong {
                max: MAX_CAPTION_LEN,
            })?;

        if self.text != new_text {
            self.text = new_text;
            self.dirty = true;
        }
        Ok(())
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Caption size plus padding on each side.
    pub fn intrinsic_size(&self) -> Size {
        let chars = self.text.chars().count() as u32;
        let char_size = self.font.character_size;
        let spacing = self.font.character_spacing * chars.saturating_sub(1);

        Size::new(
            chars * char_size.width + spacing + self.style.padding.horizontal(),
            char_size.height + self.style.padding.vertical(),
        )
    }

    pub fn set_bounds(&mut self, bounds: Rectangle) {
        if self.bounds != bounds {
            self.bounds = bounds;
            self.dirty = true;
        }
    }

    pub fn set_style(&mut self, style: Style) {
        if self.style != style {
            self.style = style;
            self.dirty = true;
        }
    }

    pub fn set_alignment(&mut self, alignment: Alignment) {
        if self.alignment != alignment {
            self.alignment = alignment;
            self.dirty = true;
        }
    }

    pub fn set_corner_radius(&mut self, radius: u32) {
        if self.corner_radius != radius {
            self.corner_radius = radius;
            self.dirty = true;
        }
    }

    fn text_anchor(&self) -> Point {
        let y = self.bounds.center().y;
        match self.alignment {
            Alignment::Left => Point::new(self.bounds.top_left.x + self.style.padding.left as i32, y),
            Alignment::Center => Point::new(self.bounds.center().x, y),
            Alignment::Right => Point::new(
                self.bounds.top_left.x + self.bounds.size.width as i32
                    - self.style.padding.right as i32,
                y,
            ),
        }
    }
}

impl Drawable for PaddedLabel {
    fn draw<D: DrawTarget<Color = Rgb565>>(&self, display: &mut D) -> Result<(), D::Error> {
        if self.style.background_color.is_some() {
            let radius = Size::new(self.corner_radius, self.corner_radius);
            RoundedRectangle::with_equal_corners(self.bounds, radius)
                .into_styled(self.style.to_primitive_style())
                .draw(display)?;
        }

        let text_color = self.style.foreground_color.unwrap_or(Rgb565::WHITE);
        let character_style = MonoTextStyle::new(self.font, text_color);
        let text_style = TextStyleBuilder::new()
            .alignment(self.alignment)
            .baseline(Baseline::Middle)
            .build();

        Text::with_text_style(&self.text, self.text_anchor(), character_style, text_style)
            .draw(display)?;

        Ok(())
    }

    fn bounds(&self) -> Rectangle {
        self.bounds
    }

    fn is_dirty(&self) -> bool {
        self.dirty
    }

    fn mark_clean(&mut self) {
        self.dirty = false;
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    fn dirty_region(&self) -> Option<DirtyRegion> {
        if self.dirty {
            Some(DirtyRegion::new(self.bounds))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intrinsic_size_includes_insets() {
        let label = PaddedLabel::new("Email")
            .unwrap()
            .with_padding(Padding::new(2, 6, 2, 6));

        // 5 chars * 6px + 12px insets, 10px tall + 4px insets
        assert_eq!(label.intrinsic_size(), Size::new(42, 14));
    }

    #[test]
    fn test_empty_caption_is_just_insets() {
        let label = PaddedLabel::new("").unwrap().with_padding(Padding::all(3));
        assert_eq!(label.intrinsic_size(), Size::new(6, 16));
    }

    #[test]
    fn test_overlong_caption_is_rejected() {
        let mut label = PaddedLabel::new("Password").unwrap();
        let long = "x".repeat(MAX_CAPTION_LEN + 1);

        assert_eq!(
            label.set_text(&long),
            Err(FieldError::CaptionTooLong {
                max: MAX_CAPTION_LEN
            })
        );
        assert_eq!(label.text(), "Password");
    }

    #[test]
    fn test_set_text_marks_dirty_only_on_change() {
        let mut label = PaddedLabel::new("Email").unwrap();
        label.mark_clean();

        label.set_text("Email").unwrap();
        assert!(!label.is_dirty());

        label.set_text("Login").unwrap();
        assert!(label.is_dirty());
    }
}
