// src/ui/components/clear_button.rs
//! Inline "clear" control drawn as a filled circle with a cross

use crate::ui::core::{Action, DirtyRegion, Drawable, TouchEvent, TouchPoint, TouchResult, Touchable};
use crate::ui::styling::ColorPalette;
use embedded_graphics::Drawable as EgDrawable;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, Line, PrimitiveStyle, Rectangle};

/// Inset of the cross arms from the circle's bounding box
const CROSS_INSET_PX: i32 = 7;

/// Stroke width of the cross
const CROSS_STROKE_PX: u32 = 2;

/// Clear control shown at the reading-direction edge of a text field.
///
/// It is only drawn and only accepts touches while visible; the owning field
/// toggles visibility with its focus.
pub struct ClearButton {
    bounds: Rectangle,
    visible: bool,
    palette: ColorPalette,
    dirty: bool,
}

impl ClearButton {
    pub fn new(bounds: Rectangle) -> Self {
        Self {
            bounds,
            visible: false,
            palette: ColorPalette::default(),
            dirty: true,
        }
    }

    pub fn with_palette(mut self, palette: ColorPalette) -> Self {
        self.palette = palette;
        self.dirty = true;
        self
    }

    pub fn set_bounds(&mut self, bounds: Rectangle) {
        if self.bounds != bounds {
            self.bounds = bounds;
            self.dirty = true;
        }
    }

    pub fn set_visible(&mut self, visible: bool) {
        if self.visible != visible {
            self.visible = visible;
            self.dirty = true;
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

impl Drawable for ClearButton {
    fn draw<D: DrawTarget<Color = Rgb565>>(&self, display: &mut D) -> Result<(), D::Error> {
        if !self.visible {
            return Ok(());
        }

        let diameter = self.bounds.size.width.min(self.bounds.size.height);
        Circle::with_center(self.bounds.center(), diameter)
            .into_styled(PrimitiveStyle::with_fill(self.palette.clear_control))
            .draw(display)?;

        let cross = PrimitiveStyle::with_stroke(self.palette.surface, CROSS_STROKE_PX);
        let top_left = self.bounds.top_left + Point::new(CROSS_INSET_PX, CROSS_INSET_PX);
        let bottom_right = self.bounds.top_left + self.bounds.size
            - Point::new(CROSS_INSET_PX + 1, CROSS_INSET_PX + 1);

        Line::new(top_left, bottom_right)
            .into_styled(cross)
            .draw(display)?;
        Line::new(
            Point::new(bottom_right.x, top_left.y),
            Point::new(top_left.x, bottom_right.y),
        )
        .into_styled(cross)
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

impl Touchable for ClearButton {
    fn contains_point(&self, point: TouchPoint) -> bool {
        self.visible && self.bounds.contains(point.to_point())
    }

    fn handle_touch(&mut self, event: TouchEvent) -> TouchResult {
        match event {
            TouchEvent::Press(point) if self.contains_point(point) => {
                TouchResult::Action(Action::FieldCleared)
            }
            _ => TouchResult::NotHandled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn button() -> ClearButton {
        ClearButton::new(Rectangle::new(Point::new(100, 10), Size::new(24, 24)))
    }

    #[test]
    fn test_hidden_button_ignores_touches() {
        let mut button = button();
        let result = button.handle_touch(TouchEvent::Press(TouchPoint::new(110, 20)));
        assert_eq!(result, TouchResult::NotHandled);
    }

    #[test]
    fn test_visible_button_clears() {
        let mut button = button();
        button.set_visible(true);

        assert_eq!(
            button.handle_touch(TouchEvent::Press(TouchPoint::new(110, 20))),
            TouchResult::Action(Action::FieldCleared)
        );
        assert_eq!(
            button.handle_touch(TouchEvent::Press(TouchPoint::new(10, 20))),
            TouchResult::NotHandled
        );
    }
}
