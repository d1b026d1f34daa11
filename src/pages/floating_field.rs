//! Sign-in style demo page with two floating-label fields
//!
//! Email vetoes submission until it contains an `@`; accepting it moves focus
//! to Password. Tapping outside both fields ends editing, tapping the header
//! goes back to the avatar page.

use crate::pages::Page;
use crate::ui::core::{
    Action, Drawable, KeyEvent, LayoutDirection, PageId, TouchEvent, TouchResult, Touchable,
};
use crate::ui::error::FieldResult;
use crate::ui::styling::Theme;
use crate::ui::{
    DISPLAY_HEIGHT_PX, DISPLAY_WIDTH_PX, FieldInput, FloatingField, SubmitOutcome,
};
use embassy_time::Duration;
use embedded_graphics::{
    Drawable as EgDrawable,
    mono_font::{MonoTextStyle, ascii::FONT_6X10},
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{PrimitiveStyle, Rectangle},
    text::{Alignment, Text},
};
use log::{debug, warn};

/// Height of the tappable header that navigates back
const HEADER_HEIGHT_PX: u32 = 30;

const MARGIN_PX: i32 = 24;

/// Vertical distance between the tops of the two fields
const FIELD_SPACING_PX: i32 = 80;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldSlot {
    Email,
    Password,
}

impl FieldSlot {
    fn next(self) -> Self {
        match self {
            FieldSlot::Email => FieldSlot::Password,
            FieldSlot::Password => FieldSlot::Email,
        }
    }
}

/// Demo page for [`FloatingField`]
pub struct FloatingFieldPage {
    bounds: Rectangle,
    theme: Theme,
    email: FloatingField,
    password: FloatingField,
    focused: Option<FieldSlot>,
    dirty: bool,
}

impl FloatingFieldPage {
    pub fn new(bounds: Rectangle, theme: Theme, direction: LayoutDirection) -> FieldResult<Self> {
        let field_bounds = |index: i32| {
            Rectangle::new(
                bounds.top_left + Point::new(MARGIN_PX, 60 + index * FIELD_SPACING_PX),
                Size::new(
                    bounds.size.width - 2 * MARGIN_PX as u32,
                    theme.floating_field.height,
                ),
            )
        };

        let mut email = FloatingField::new(field_bounds(0), "Email", direction)?
            .with_theme(&theme)
            .with_on_submit(|text| text.contains('@'));
        email.set_placeholder("you@example.com")?;

        let password = FloatingField::new(field_bounds(1), "Password", direction)?
            .with_theme(&theme)
            .with_secure_entry(true);

        Ok(Self {
            bounds,
            theme,
            email,
            password,
            focused: None,
            dirty: true,
        })
    }

    /// Full-screen page with the stock theme.
    pub fn full_screen(direction: LayoutDirection) -> FieldResult<Self> {
        let bounds = Rectangle::new(
            Point::zero(),
            Size::new(DISPLAY_WIDTH_PX as u32, DISPLAY_HEIGHT_PX as u32),
        );
        Self::new(bounds, Theme::default(), direction)
    }

    pub fn email(&self) -> &FloatingField {
        &self.email
    }

    pub fn password(&self) -> &FloatingField {
        &self.password
    }

    pub fn focused(&self) -> Option<FieldSlot> {
        self.focused
    }

    fn field_mut(&mut self, slot: FieldSlot) -> &mut FloatingField {
        match slot {
            FieldSlot::Email => &mut self.email,
            FieldSlot::Password => &mut self.password,
        }
    }

    /// Move focus to `slot`, taking it from whichever field held it.
    pub fn focus(&mut self, slot: FieldSlot) {
        if let Some(previous) = self.focused
            && previous != slot
        {
            self.field_mut(previous).blur();
        }
        self.field_mut(slot).focus();
        self.focused = Some(slot);
    }

    pub fn blur_all(&mut self) {
        if let Some(slot) = self.focused.take() {
            self.field_mut(slot).blur();
        }
    }

    /// Submit the focused field; accepting Email hands focus to Password.
    fn submit_focused(&mut self) {
        let Some(slot) = self.focused else {
            return;
        };

        match self.field_mut(slot).submit() {
            SubmitOutcome::Accepted => {
                self.focused = None;
                if slot == FieldSlot::Email {
                    self.focus(FieldSlot::Password);
                }
            }
            SubmitOutcome::Rejected => debug!("{:?} kept focus", slot),
        }
    }

    fn type_into_focused(&mut self, input: FieldInput) {
        let Some(slot) = self.focused else {
            return;
        };

        if let Err(e) = self.field_mut(slot).handle_input(input) {
            warn!("Dropped input for {:?}: {}", slot, e);
        }
    }
}

impl Page for FloatingFieldPage {
    fn id(&self) -> PageId {
        PageId::FloatingField
    }

    fn title(&self) -> &str {
        "Floating Field"
    }

    fn on_activate(&mut self) {
        self.dirty = true;
    }

    fn on_deactivate(&mut self) {
        self.blur_all();
    }

    fn handle_touch(&mut self, event: TouchEvent) -> Option<Action> {
        let TouchEvent::Press(point) = event;

        if (point.y as u32) < HEADER_HEIGHT_PX {
            return Some(Action::NavigateToPage(PageId::AvatarGroup));
        }

        for slot in [FieldSlot::Email, FieldSlot::Password] {
            match self.field_mut(slot).handle_touch(event) {
                TouchResult::Action(Action::FocusRequested) => {
                    self.focus(slot);
                    return None;
                }
                TouchResult::Action(Action::FieldCleared) => {
                    return None;
                }
                _ => {}
            }
        }

        // Tap away ends editing
        self.blur_all();
        None
    }

    /// Tab always moves focus; every other key needs a focused field.
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key {
            KeyEvent::Tab => {
                let next = self.focused.map_or(FieldSlot::Email, FieldSlot::next);
                self.focus(next);
            }
            _ if self.focused.is_none() => return false,
            KeyEvent::Escape => self.blur_all(),
            KeyEvent::Enter => self.submit_focused(),
            KeyEvent::Backspace => self.type_into_focused(FieldInput::Backspace),
            KeyEvent::Char(c) => self.type_into_focused(FieldInput::Char(c)),
        }
        true
    }

    fn update(&mut self, elapsed: Duration) {
        self.email.update(elapsed);
        self.password.update(elapsed);
    }

    fn draw_page<D: DrawTarget<Color = Rgb565>>(
        &mut self,
        display: &mut D,
    ) -> Result<(), D::Error> {
        Drawable::draw(self, display)
    }

    fn bounds(&self) -> Rectangle {
        Drawable::bounds(self)
    }

    fn is_dirty(&self) -> bool {
        Drawable::is_dirty(self)
    }

    fn mark_clean(&mut self) {
        Drawable::mark_clean(self)
    }

    fn mark_dirty(&mut self) {
        Drawable::mark_dirty(self)
    }
}

impl Drawable for FloatingFieldPage {
    fn draw<D: DrawTarget<Color = Rgb565>>(&self, display: &mut D) -> Result<(), D::Error> {
        let palette = self.theme.palette;
        EgDrawable::draw(
            &self
                .bounds
                .into_styled(PrimitiveStyle::with_fill(palette.background)),
            display,
        )?;

        EgDrawable::draw(
            &Text::with_alignment(
                "< Back",
                self.bounds.top_left + Point::new(MARGIN_PX, (HEADER_HEIGHT_PX / 2) as i32),
                MonoTextStyle::new(&FONT_6X10, palette.tint),
                Alignment::Left,
            ),
            display,
        )?;

        self.email.draw(display)?;
        self.password.draw(display)?;
        Ok(())
    }

    fn bounds(&self) -> Rectangle {
        self.bounds
    }

    fn is_dirty(&self) -> bool {
        self.dirty || self.email.is_dirty() || self.password.is_dirty()
    }

    fn mark_clean(&mut self) {
        self.dirty = false;
        self.email.mark_clean();
        self.password.mark_clean();
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::LabelState;
    use crate::ui::core::TouchPoint;

    fn page() -> FloatingFieldPage {
        FloatingFieldPage::full_screen(LayoutDirection::LeftToRight).unwrap()
    }

    fn type_str(page: &mut FloatingFieldPage, text: &str) {
        for c in text.chars() {
            page.handle_key(KeyEvent::Char(c));
        }
    }

    #[test]
    fn test_keys_without_focus_are_not_consumed() {
        let mut page = page();

        for key in [
            KeyEvent::Char('a'),
            KeyEvent::Backspace,
            KeyEvent::Enter,
            KeyEvent::Escape,
        ] {
            assert!(!page.handle_key(key));
        }
        assert_eq!(page.email().text(), "");

        assert!(page.handle_key(KeyEvent::Tab));
        assert!(page.handle_key(KeyEvent::Char('a')));
        assert_eq!(page.email().text(), "a");
    }

    #[test]
    fn test_tab_cycles_focus() {
        let mut page = page();

        page.handle_key(KeyEvent::Tab);
        assert_eq!(page.focused(), Some(FieldSlot::Email));
        assert!(page.email().is_focused());

        page.handle_key(KeyEvent::Tab);
        assert_eq!(page.focused(), Some(FieldSlot::Password));
        assert!(!page.email().is_focused());
        assert_eq!(page.email().state(), LabelState::Resting);
    }

    #[test]
    fn test_invalid_email_keeps_focus() {
        let mut page = page();
        page.focus(FieldSlot::Email);
        type_str(&mut page, "nobody");

        page.handle_key(KeyEvent::Enter);

        assert_eq!(page.focused(), Some(FieldSlot::Email));
        assert!(page.email().is_focused());
    }

    #[test]
    fn test_accepted_email_moves_to_password() {
        let mut page = page();
        page.focus(FieldSlot::Email);
        type_str(&mut page, "me@example.com");

        page.handle_key(KeyEvent::Enter);

        assert_eq!(page.focused(), Some(FieldSlot::Password));
        assert!(!page.email().is_focused());
        assert_eq!(page.email().state(), LabelState::Floating);
        assert_eq!(page.password().state(), LabelState::Floating);
    }

    #[test]
    fn test_password_submit_ends_editing() {
        let mut page = page();
        page.focus(FieldSlot::Password);
        type_str(&mut page, "hunter2");

        page.handle_key(KeyEvent::Enter);

        assert_eq!(page.focused(), None);
        assert_eq!(page.password().text(), "hunter2");
    }

    #[test]
    fn test_touch_focuses_field_and_tap_away_blurs() {
        let mut page = page();
        let inside = page.password().border_box().center();

        page.handle_touch(TouchEvent::Press(TouchPoint::new(
            inside.x as u16,
            inside.y as u16,
        )));
        assert_eq!(page.focused(), Some(FieldSlot::Password));

        page.handle_touch(TouchEvent::Press(TouchPoint::new(5, 230)));
        assert_eq!(page.focused(), None);
        assert_eq!(page.password().state(), LabelState::Resting);
    }

    #[test]
    fn test_header_navigates_back() {
        let mut page = page();
        assert_eq!(
            page.handle_touch(TouchEvent::Press(TouchPoint::new(20, 10))),
            Some(Action::NavigateToPage(PageId::AvatarGroup))
        );
    }

    #[test]
    fn test_update_settles_animation() {
        let mut page = page();
        page.focus(FieldSlot::Email);
        assert!(page.email().is_animating());

        page.update(Duration::from_millis(300));
        assert!(!page.email().is_animating());
        assert_eq!(page.email().visuals().offset_y, -25);
    }
}
