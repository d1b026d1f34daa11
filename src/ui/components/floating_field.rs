// src/ui/components/floating_field.rs
//! Text field with a label that floats above its border
//!
//! The label has two resting places. While the field is empty and unfocused
//! it sits inside the box where a placeholder would be ([`LabelState::Resting`]).
//! Focus, or any non-empty text, lifts it onto the top border as a filled pill
//! ([`LabelState::Floating`]). Every move between the two is tweened; the host
//! advances the tween from its frame loop with [`FloatingField::update`].

use core::fmt;

use alloc::boxed::Box;
use embassy_time::Duration;
use embedded_graphics::Drawable as EgDrawable;
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle, ascii::FONT_6X10};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle, Rectangle, RoundedRectangle};
use embedded_graphics::text::{Alignment, Baseline, Text, TextStyleBuilder};
use log::{debug, info};

use crate::config::FloatingFieldConfig;
use crate::ui::animation::{Lerp, Tween};
use crate::ui::components::clear_button::ClearButton;
use crate::ui::components::padded_label::{MAX_CAPTION_LEN, PaddedLabel};
use crate::ui::core::{
    Action, DirtyRegion, Drawable, LayoutDirection, TouchEvent, TouchPoint, TouchResult,
    Touchable,
};
use crate::ui::error::{FieldError, FieldResult};
use crate::ui::styling::{ColorPalette, Style, Theme};

/// Maximum text length in bytes
pub const MAX_TEXT_LEN: usize = 64;

/// Font used for typed text and the placeholder
const INPUT_FONT: &MonoFont<'static> = &FONT_6X10;

/// Glyph substituted for each character under secure entry
const SECURE_GLYPH: char = '*';

/// Where the label currently lives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelState {
    /// Inside the box, standing in for the placeholder
    Resting,
    /// Lifted onto the top border as a filled pill
    Floating,
}

/// Label properties that are tweened between the two states
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelVisuals {
    /// Vertical distance of the label centre from the box centre
    pub offset_y: i32,
    /// Distance of the label from the box's leading edge
    pub inset_x: i32,
    pub text_color: Rgb565,
    /// Opacity of the pill behind the caption, `0.0` is transparent
    pub fill: f32,
    pub corner_radius: u32,
}

impl Lerp for LabelVisuals {
    fn lerp(&self, to: &Self, t: f32) -> Self {
        Self {
            offset_y: self.offset_y.lerp(&to.offset_y, t),
            inset_x: self.inset_x.lerp(&to.inset_x, t),
            text_color: self.text_color.lerp(&to.text_color, t),
            fill: self.fill.lerp(&to.fill, t),
            corner_radius: self.corner_radius.lerp(&to.corner_radius, t),
        }
    }
}

/// Input delivered to a field by its host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldInput {
    FocusGained,
    FocusLost,
    Char(char),
    Backspace,
    /// The "return"/"done" key
    Submit,
    Clear,
}

/// Result of asking the field to accept its input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The predicate allowed it (or none was registered); the field gave up focus
    Accepted,
    /// The predicate vetoed it; focus and state are untouched
    Rejected,
}

type SubmitPredicate = Box<dyn FnMut(&str) -> bool>;

/// Labelled text input with a floating label.
///
/// The bordered box occupies the top `config.height` pixels of the bounds.
/// The floated label straddles the top border, so hosts should leave some room
/// above the bounds.
///
/// # Examples
/// ```ignore
/// let mut email = FloatingField::new(bounds, "Email", LayoutDirection::LeftToRight)?;
/// email.set_on_submit(|text| text.contains('@'));
///
/// email.focus();
/// email.insert_str("me@example.com")?;
/// if email.submit() == SubmitOutcome::Accepted {
///     password.focus();
/// }
/// ```
pub struct FloatingField {
    bounds: Rectangle,
    config: FloatingFieldConfig,
    palette: ColorPalette,
    direction: LayoutDirection,
    label: PaddedLabel,
    text: heapless::String<MAX_TEXT_LEN>,
    placeholder: heapless::String<MAX_CAPTION_LEN>,
    secure: bool,
    focused: bool,
    state: LabelState,
    visuals: Tween<LabelVisuals>,
    clear_button: ClearButton,
    on_submit: Option<SubmitPredicate>,
    dirty: bool,
}

impl fmt::Debug for FloatingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FloatingField")
            .field("label", &self.label.text())
            .field("text_len", &self.text.len())
            .field("focused", &self.focused)
            .field("state", &self.state)
            .finish()
    }
}

impl FloatingField {
    /// Create a resting, unfocused, empty field.
    ///
    /// `direction` decides once which edge is leading: the label inset is
    /// measured from it and the clear control sits on the opposite edge.
    pub fn new(bounds: Rectangle, caption: &str, direction: LayoutDirection) -> FieldResult<Self> {
        let config = FloatingFieldConfig::default();
        let palette = ColorPalette::default();
        let label = PaddedLabel::new(caption)?.with_padding(config.label_padding);

        let mut field = Self {
            bounds,
            config,
            palette,
            direction,
            label,
            text: heapless::String::new(),
            placeholder: heapless::String::new(),
            secure: false,
            focused: false,
            state: LabelState::Resting,
            visuals: Tween::settled(LabelVisuals {
                offset_y: 0,
                inset_x: 0,
                text_color: palette.tint,
                fill: 0.0,
                corner_radius: 0,
            }),
            clear_button: ClearButton::new(Rectangle::zero()).with_palette(palette),
            on_submit: None,
            dirty: true,
        };
        field.restyle();
        Ok(field)
    }

    pub fn with_config(mut self, config: FloatingFieldConfig) -> Self {
        self.config = config;
        self.label.set_padding(config.label_padding);
        self.restyle();
        self
    }

    pub fn with_palette(mut self, palette: ColorPalette) -> Self {
        self.palette = palette;
        self.clear_button = ClearButton::new(Rectangle::zero()).with_palette(palette);
        self.restyle();
        self
    }

    pub fn with_theme(self, theme: &Theme) -> Self {
        self.with_config(theme.floating_field)
            .with_palette(theme.palette)
    }

    /// Mask the displayed text, e.g. for passwords.
    pub fn with_secure_entry(mut self, secure: bool) -> Self {
        self.secure = secure;
        self.dirty = true;
        self
    }

    pub fn with_on_submit<F>(mut self, predicate: F) -> Self
    where
        F: FnMut(&str) -> bool + 'static,
    {
        self.set_on_submit(predicate);
        self
    }

    /// Register the gate consulted by [`submit`](Self::submit).
    ///
    /// The predicate sees the current text; returning `false` vetoes the
    /// submission.
    pub fn set_on_submit<F>(&mut self, predicate: F)
    where
        F: FnMut(&str) -> bool + 'static,
    {
        self.on_submit = Some(Box::new(predicate));
    }

    pub fn clear_on_submit(&mut self) {
        self.on_submit = None;
    }

    // ------------------------------------------------------------------
    // Public accessors
    // ------------------------------------------------------------------

    pub fn label_text(&self) -> &str {
        self.label.text()
    }

    pub fn set_label_text(&mut self, caption: &str) -> FieldResult<()> {
        self.label.set_text(caption)?;
        // Pill radius and position depend on the caption's size
        self.retarget();
        Ok(())
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn set_placeholder(&mut self, placeholder: &str) -> FieldResult<()> {
        let mut new_placeholder = heapless::String::new();
        new_placeholder
            .push_str(placeholder)
            .map_err(|_| FieldError::CaptionTooLong {
                max: MAX_CAPTION_LEN,
            })?;
        self.placeholder = new_placeholder;
        self.dirty = true;
        Ok(())
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn state(&self) -> LabelState {
        self.state
    }

    /// Label properties at the current point of the animation
    pub fn visuals(&self) -> LabelVisuals {
        self.visuals.value()
    }

    /// Label properties the animation is heading to
    pub fn target_visuals(&self) -> LabelVisuals {
        self.visuals.target()
    }

    pub fn is_animating(&self) -> bool {
        self.visuals.is_running()
    }

    /// The placeholder only shows while the label rests inside an empty box.
    pub fn placeholder_visible(&self) -> bool {
        self.state == LabelState::Resting && self.text.is_empty() && !self.placeholder.is_empty()
    }

    /// The floated label paints above the text and the clear control.
    pub fn label_raised(&self) -> bool {
        self.state == LabelState::Floating
    }

    pub fn clear_button_visible(&self) -> bool {
        self.clear_button.is_visible()
    }

    pub fn clear_button_frame(&self) -> Rectangle {
        self.clear_button.bounds()
    }

    pub fn label_frame(&self) -> Rectangle {
        self.label.bounds()
    }

    /// The bordered box
    pub fn border_box(&self) -> Rectangle {
        Rectangle::new(
            self.bounds.top_left,
            Size::new(self.bounds.size.width, self.config.height),
        )
    }

    /// Region of the box where text is typed
    pub fn input_area(&self) -> Rectangle {
        let inset = self.config.input_inset;
        let border = self.border_box();
        Rectangle::new(
            border.top_left + Point::new(inset as i32, inset as i32),
            Size::new(
                border.size.width.saturating_sub(2 * inset),
                border.size.height.saturating_sub(2 * inset),
            ),
        )
    }

    pub fn set_bounds(&mut self, bounds: Rectangle) {
        if self.bounds != bounds {
            self.bounds = bounds;
            self.restyle();
        }
    }

    // ------------------------------------------------------------------
    // Events
    // ------------------------------------------------------------------

    /// Route one host input to the matching handler.
    ///
    /// Only [`FieldInput::Submit`] produces an outcome.
    pub fn handle_input(&mut self, input: FieldInput) -> FieldResult<Option<SubmitOutcome>> {
        match input {
            FieldInput::FocusGained => self.focus(),
            FieldInput::FocusLost => self.blur(),
            FieldInput::Char(c) => self.insert_char(c)?,
            FieldInput::Backspace => self.delete_backward(),
            FieldInput::Submit => return Ok(Some(self.submit())),
            FieldInput::Clear => self.clear(),
        }
        Ok(None)
    }

    /// Editing began: the label floats and the clear control appears.
    pub fn focus(&mut self) {
        if !self.focused {
            debug!("Editing began in field '{}'", self.label.text());
        }
        self.focused = true;
        self.clear_button.set_visible(true);
        self.transition_to(LabelState::Floating);
    }

    /// Editing ended: the label only returns inside an empty box.
    pub fn blur(&mut self) {
        if self.focused {
            debug!("Editing ended in field '{}'", self.label.text());
        }
        self.focused = false;
        self.clear_button.set_visible(false);
        if self.text.is_empty() {
            self.transition_to(LabelState::Resting);
        } else {
            self.dirty = true;
        }
    }

    pub fn insert_char(&mut self, c: char) -> FieldResult<()> {
        self.text
            .push(c)
            .map_err(|_| FieldError::TextCapacityExceeded { max: MAX_TEXT_LEN })?;
        self.text_changed();
        Ok(())
    }

    /// Append `s`, all or nothing.
    pub fn insert_str(&mut self, s: &str) -> FieldResult<()> {
        self.text
            .push_str(s)
            .map_err(|_| FieldError::TextCapacityExceeded { max: MAX_TEXT_LEN })?;
        self.text_changed();
        Ok(())
    }

    pub fn delete_backward(&mut self) {
        if self.text.pop().is_some() {
            self.text_changed();
        }
    }

    /// Replace the whole text. Assigning an empty string is a [`clear`](Self::clear).
    pub fn set_text(&mut self, text: &str) -> FieldResult<()> {
        if text.is_empty() {
            self.clear();
            return Ok(());
        }

        let mut new_text = heapless::String::new();
        new_text
            .push_str(text)
            .map_err(|_| FieldError::TextCapacityExceeded { max: MAX_TEXT_LEN })?;
        self.text = new_text;
        self.text_changed();
        Ok(())
    }

    /// Empty the field and put the label back inside, focused or not.
    pub fn clear(&mut self) {
        self.text.clear();
        self.transition_to(LabelState::Resting);
    }

    /// Ask to accept the current input.
    ///
    /// Consults the registered predicate, accepting when there is none. On
    /// acceptance the field resigns focus.
    pub fn submit(&mut self) -> SubmitOutcome {
        info!("Field '{}' should return", self.label.text());

        let accepted = match self.on_submit.as_mut() {
            Some(predicate) => predicate(&self.text),
            None => true,
        };

        if accepted {
            self.blur();
            SubmitOutcome::Accepted
        } else {
            debug!("Submission vetoed for field '{}'", self.label.text());
            SubmitOutcome::Rejected
        }
    }

    /// Advance the label animation by `elapsed`.
    ///
    /// Returns `true` while the label is still moving.
    pub fn update(&mut self, elapsed: Duration) -> bool {
        if self.visuals.advance(elapsed) {
            self.apply_visuals();
            self.dirty = true;
        }
        self.visuals.is_running()
    }

    // ------------------------------------------------------------------
    // State machine internals
    // ------------------------------------------------------------------

    fn text_changed(&mut self) {
        if !self.text.is_empty() {
            self.transition_to(LabelState::Floating);
        } else if !self.focused {
            self.transition_to(LabelState::Resting);
        } else {
            self.dirty = true;
        }
    }

    fn transition_to(&mut self, state: LabelState) {
        if self.state != state {
            debug!(
                "Field '{}' label {:?} -> {:?}",
                self.label.text(),
                self.state,
                state
            );
            self.state = state;
        }
        self.retarget();
    }

    /// Point the tween at the current state's visuals, animating if they moved.
    fn retarget(&mut self) {
        let target = self.visuals_for(self.state);
        if self.visuals.target() != target {
            self.visuals
                .retarget(target, self.config.animation_duration());
        }
        self.apply_visuals();
        self.dirty = true;
    }

    /// Snap straight to the current state's visuals, used after restyling.
    fn restyle(&mut self) {
        self.visuals = Tween::settled(self.visuals_for(self.state));
        self.apply_visuals();
        self.dirty = true;
    }

    fn visuals_for(&self, state: LabelState) -> LabelVisuals {
        match state {
            LabelState::Resting => LabelVisuals {
                offset_y: 0,
                inset_x: self.config.resting_inset,
                text_color: self.palette.tint,
                fill: 0.0,
                corner_radius: 0,
            },
            LabelState::Floating => LabelVisuals {
                offset_y: -self.config.float_offset,
                inset_x: self.config.floating_inset,
                text_color: self.palette.text_primary,
                fill: 1.0,
                corner_radius: self.label.intrinsic_size().height / 2,
            },
        }
    }

    fn resting_alignment(&self) -> Alignment {
        if self.direction.is_rtl() {
            Alignment::Right
        } else {
            Alignment::Left
        }
    }

    /// Push the current tween value and state into the label and clear control.
    fn apply_visuals(&mut self) {
        let visuals = self.visuals.value();
        let frame = self.label_frame_for(&visuals);

        let mut style = Style::new()
            .with_foreground(visuals.text_color)
            .with_padding(self.config.label_padding);
        style = if visuals.fill > 0.0 {
            style.with_background(self.palette.background.lerp(&self.palette.surface, visuals.fill))
        } else {
            style.without_background()
        };

        self.label.set_bounds(frame);
        self.label.set_style(style);
        self.label.set_corner_radius(visuals.corner_radius);
        self.label.set_alignment(match self.state {
            LabelState::Floating => Alignment::Center,
            LabelState::Resting => self.resting_alignment(),
        });

        let input = self.input_area();
        let control = self.config.clear_control_size;
        self.clear_button.set_bounds(Rectangle::new(
            Point::new(
                self.direction.trailing_x(&input, 0, control),
                input.center().y - (control / 2) as i32,
            ),
            Size::new(control, control),
        ));
    }

    /// Where the label sits for `visuals`, anchored on the box centre
    fn label_frame_for(&self, visuals: &LabelVisuals) -> Rectangle {
        let border = self.border_box();
        let size = self.label.intrinsic_size();
        Rectangle::new(
            Point::new(
                self.direction.leading_x(&border, visuals.inset_x, size.width),
                border.center().y + visuals.offset_y - (size.height / 2) as i32,
            ),
            size,
        )
    }

    /// Input area minus the clear control while it is shown
    fn text_area(&self) -> Rectangle {
        let input = self.input_area();
        if !self.clear_button.is_visible() {
            return input;
        }

        let reserved = self.config.clear_control_size.min(input.size.width);
        let width = input.size.width - reserved;
        let x = self.direction.leading_x(&input, 0, width);
        Rectangle::new(Point::new(x, input.top_left.y), Size::new(width, input.size.height))
    }

    fn draw_text<D: DrawTarget<Color = Rgb565>>(&self, display: &mut D) -> Result<(), D::Error> {
        let area = self.text_area();
        let (anchor, alignment) = if self.direction.is_rtl() {
            (
                Point::new(area.top_left.x + area.size.width as i32 - 1, area.center().y),
                Alignment::Right,
            )
        } else {
            (Point::new(area.top_left.x, area.center().y), Alignment::Left)
        };
        let text_style = TextStyleBuilder::new()
            .alignment(alignment)
            .baseline(Baseline::Middle)
            .build();

        let mut clipped = display.clipped(&area);

        if !self.text.is_empty() {
            let mut masked = heapless::String::<MAX_TEXT_LEN>::new();
            let shown: &str = if self.secure {
                for _ in self.text.chars() {
                    // Never longer than the text, which fits MAX_TEXT_LEN
                    masked.push(SECURE_GLYPH).ok();
                }
                &masked
            } else {
                &self.text
            };
            let character_style = MonoTextStyle::new(INPUT_FONT, self.palette.text_primary);
            Text::with_text_style(shown, anchor, character_style, text_style)
                .draw(&mut clipped)?;
        } else if self.placeholder_visible() {
            let character_style = MonoTextStyle::new(INPUT_FONT, self.palette.tint);
            Text::with_text_style(&self.placeholder, anchor, character_style, text_style)
                .draw(&mut clipped)?;
        }

        if self.focused {
            let advance = (INPUT_FONT.character_size.width + INPUT_FONT.character_spacing) as i32;
            let width = self.text.chars().count() as i32 * advance;
            let caret_x = if self.direction.is_rtl() {
                anchor.x - width
            } else {
                anchor.x + width
            };
            let half = (INPUT_FONT.character_size.height / 2) as i32;
            Line::new(
                Point::new(caret_x, area.center().y - half),
                Point::new(caret_x, area.center().y + half),
            )
            .into_styled(PrimitiveStyle::with_stroke(self.palette.tint, 1))
            .draw(&mut clipped)?;
        }

        Ok(())
    }
}

impl Drawable for FloatingField {
    fn draw<D: DrawTarget<Color = Rgb565>>(&self, display: &mut D) -> Result<(), D::Error> {
        let radius = Size::new(self.config.border_radius, self.config.border_radius);
        let box_style = Style::new()
            .with_background(self.palette.surface)
            .with_border(self.palette.tint, 1);
        RoundedRectangle::with_equal_corners(self.border_box(), radius)
            .into_styled(box_style.to_primitive_style())
            .draw(display)?;

        if !self.label_raised() {
            self.label.draw(display)?;
        }

        self.draw_text(display)?;
        self.clear_button.draw(display)?;

        if self.label_raised() {
            self.label.draw(display)?;
        }

        Ok(())
    }

    fn bounds(&self) -> Rectangle {
        self.bounds
    }

    fn is_dirty(&self) -> bool {
        self.dirty || self.label.is_dirty() || self.clear_button.is_dirty()
    }

    fn mark_clean(&mut self) {
        self.dirty = false;
        self.label.mark_clean();
        self.clear_button.mark_clean();
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// The floated label reaches above the bounds, so it is folded in.
    fn dirty_region(&self) -> Option<DirtyRegion> {
        if !self.is_dirty() {
            return None;
        }
        let mut region = DirtyRegion::new(self.bounds);
        region.expand_to_include(self.label.bounds());
        region.expand_to_include(self.label_frame_for(&self.visuals.target()));
        Some(region)
    }
}

impl Touchable for FloatingField {
    fn contains_point(&self, point: TouchPoint) -> bool {
        self.border_box().contains(point.to_point())
    }

    fn handle_touch(&mut self, event: TouchEvent) -> TouchResult {
        if let TouchResult::Action(action) = self.clear_button.handle_touch(event) {
            self.clear();
            return TouchResult::Action(action);
        }

        match event {
            TouchEvent::Press(point) if self.contains_point(point) => {
                self.focus();
                TouchResult::Action(Action::FocusRequested)
            }
            _ => TouchResult::NotHandled,
        }
    }
}
