// src/ui/core.rs
//! Core UI traits and types shared by every widget

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

/// Represents a 2D touch point on the display
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchPoint {
    pub x: u16,
    pub y: u16,
}

impl TouchPoint {
    pub fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }

    pub fn to_point(&self) -> Point {
        Point::new(self.x as i32, self.y as i32)
    }
}

/// Touch events that can occur on the UI
#[derive(Debug, Clone, Copy)]
pub enum TouchEvent {
    /// Initial touch press at a point
    Press(TouchPoint),
}

/// Keyboard input routed to the focused text field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEvent {
    Char(char),
    Backspace,
    /// Return / done
    Enter,
    /// Move focus to the next field
    Tab,
    /// Drop focus without submitting
    Escape,
}

/// Result from handling a touch event
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TouchResult {
    /// Event was not handled, pass to next element
    NotHandled,
    /// Event triggered an action
    Action(Action),
}

/// Actions that UI elements can trigger
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    /// Navigate to a specific page
    NavigateToPage(PageId),
    /// A text field asked to become the focused input
    FocusRequested,
    /// A text field's inline clear control was pressed
    FieldCleared,
}

/// Page identifier for navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageId {
    AvatarGroup,
    FloatingField,
}

/// Reading direction of the hosting container.
///
/// Widgets resolve "leading" and "trailing" edges against this once, at
/// construction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutDirection {
    #[default]
    LeftToRight,
    RightToLeft,
}

impl LayoutDirection {
    pub fn is_rtl(&self) -> bool {
        matches!(self, LayoutDirection::RightToLeft)
    }

    /// X coordinate of a `width`-wide element placed `inset` pixels from the
    /// leading edge of `container`.
    pub fn leading_x(&self, container: &Rectangle, inset: i32, width: u32) -> i32 {
        match self {
            LayoutDirection::LeftToRight => container.top_left.x + inset,
            LayoutDirection::RightToLeft => {
                container.top_left.x + container.size.width as i32 - inset - width as i32
            }
        }
    }

    /// X coordinate of a `width`-wide element placed `inset` pixels from the
    /// trailing edge of `container`.
    pub fn trailing_x(&self, container: &Rectangle, inset: i32, width: u32) -> i32 {
        match self {
            LayoutDirection::LeftToRight => LayoutDirection::RightToLeft,
            LayoutDirection::RightToLeft => LayoutDirection::LeftToRight,
        }
        .leading_x(container, inset, width)
    }
}

/// Dirty region tracking for efficient rendering
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirtyRegion {
    pub bounds: Rectangle,
    pub is_dirty: bool,
}

impl DirtyRegion {
    pub fn new(bounds: Rectangle) -> Self {
        Self {
            bounds,
            is_dirty: true,
        }
    }

    pub fn mark_dirty(&mut self) {
        self.is_dirty = true;
    }

    pub fn mark_clean(&mut self) {
        self.is_dirty = false;
    }

    pub fn is_dirty(&self) -> bool {
        self.is_dirty
    }

    /// Expand this dirty region to include another region
    pub fn expand_to_include(&mut self, other: Rectangle) {
        if !self.is_dirty {
            self.bounds = other;
            self.is_dirty = true;
        } else {
            let min_x = self.bounds.top_left.x.min(other.top_left.x);
            let min_y = self.bounds.top_left.y.min(other.top_left.y);

            let max_x = (self.bounds.top_left.x + self.bounds.size.width as i32)
                .max(other.top_left.x + other.size.width as i32);
            let max_y = (self.bounds.top_left.y + self.bounds.size.height as i32)
                .max(other.top_left.y + other.size.height as i32);

            self.bounds = Rectangle::new(
                Point::new(min_x, min_y),
                Size::new((max_x - min_x) as u32, (max_y - min_y) as u32),
            );
        }
    }
}

/// Trait for any UI element that can be drawn
pub trait Drawable {
    /// Draw the element to the display within its bounds
    fn draw<D: DrawTarget<Color = embedded_graphics::pixelcolor::Rgb565>>(
        &self,
        display: &mut D,
    ) -> Result<(), D::Error>;

    /// Get the bounds of this drawable element
    fn bounds(&self) -> Rectangle;

    /// Check if this element needs to be redrawn
    fn is_dirty(&self) -> bool;

    /// Mark this element as clean (already drawn)
    fn mark_clean(&mut self);

    /// Mark this element as dirty (needs redraw)
    fn mark_dirty(&mut self);

    /// Get the dirty region for partial updates
    fn dirty_region(&self) -> Option<DirtyRegion> {
        if self.is_dirty() {
            Some(DirtyRegion::new(self.bounds()))
        } else {
            None
        }
    }
}

/// Trait for UI elements that respond to touch events
pub trait Touchable {
    /// Check if a point is within this element's bounds
    fn contains_point(&self, point: TouchPoint) -> bool;

    /// Handle a touch event, returns result indicating if handled and any action
    fn handle_touch(&mut self, event: TouchEvent) -> TouchResult;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leading_edge_mirrors_under_rtl() {
        let container = Rectangle::new(Point::new(10, 0), Size::new(200, 50));

        assert_eq!(
            LayoutDirection::LeftToRight.leading_x(&container, 12, 40),
            22
        );
        // 10 + 200 - 12 - 40
        assert_eq!(
            LayoutDirection::RightToLeft.leading_x(&container, 12, 40),
            158
        );
    }

    #[test]
    fn test_trailing_edge_is_opposite_of_leading() {
        let container = Rectangle::new(Point::zero(), Size::new(100, 20));

        assert_eq!(LayoutDirection::LeftToRight.trailing_x(&container, 0, 24), 76);
        assert_eq!(LayoutDirection::RightToLeft.trailing_x(&container, 0, 24), 0);
    }

    #[test]
    fn test_dirty_region_expands_to_union() {
        let mut region = DirtyRegion::new(Rectangle::new(Point::new(0, 0), Size::new(10, 10)));
        region.expand_to_include(Rectangle::new(Point::new(20, 5), Size::new(10, 10)));

        assert_eq!(
            region.bounds,
            Rectangle::new(Point::new(0, 0), Size::new(30, 15))
        );
    }

    #[test]
    fn test_clean_region_is_replaced() {
        let mut region = DirtyRegion::new(Rectangle::new(Point::new(0, 0), Size::new(10, 10)));
        region.mark_clean();
        let other = Rectangle::new(Point::new(40, 40), Size::new(4, 4));
        region.expand_to_include(other);

        assert!(region.is_dirty());
        assert_eq!(region.bounds, other);
    }
}
