//! Avatar group demo page
//!
//! Shows three stacks built from generated monogram avatars: a large group that
//! overflows into a "+N" badge, a small group that fits, and the large group
//! again laid out right-to-left.

use crate::pages::Page;
use crate::ui::core::{Action, Drawable, KeyEvent, LayoutDirection, PageId, TouchEvent};
use crate::ui::styling::Theme;
use crate::ui::{AvatarStack, DISPLAY_HEIGHT_PX, DISPLAY_WIDTH_PX};
use embassy_time::Duration;
use embedded_graphics::{
    Drawable as EgDrawable,
    image::ImageDrawable,
    mono_font::{MonoTextStyle, ascii::FONT_6X10, ascii::FONT_7X13_BOLD},
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{PrimitiveStyle, Rectangle},
    text::{Alignment, Baseline, Text, TextStyleBuilder},
};
use log::info;

/// Members reported by the group, far more than are shown
const GROUP_SIZE: usize = 300;

const ROW_HEIGHT_PX: u32 = 50;
const MARGIN_PX: i32 = 16;

/// Initials and backdrop for the generated sample people
const SAMPLE_PEOPLE: [(&str, Rgb565); 5] = [
    ("AL", Rgb565::new(4, 20, 24)),
    ("GH", Rgb565::new(24, 12, 6)),
    ("KJ", Rgb565::new(10, 40, 8)),
    ("MH", Rgb565::new(20, 8, 22)),
    ("DR", Rgb565::new(6, 18, 14)),
];

/// Square image of coloured initials, standing in for a profile photo.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonogramAvatar {
    initials: &'static str,
    color: Rgb565,
    size: u32,
}

impl MonogramAvatar {
    pub fn new(initials: &'static str, color: Rgb565, size: u32) -> Self {
        Self {
            initials,
            color,
            size,
        }
    }
}

impl OriginDimensions for MonogramAvatar {
    fn size(&self) -> Size {
        Size::new_equal(self.size)
    }
}

impl ImageDrawable for MonogramAvatar {
    type Color = Rgb565;

    fn draw<D: DrawTarget<Color = Rgb565>>(&self, target: &mut D) -> Result<(), D::Error> {
        let area = Rectangle::new(Point::zero(), OriginDimensions::size(self));
        EgDrawable::draw(
            &area.into_styled(PrimitiveStyle::with_fill(self.color)),
            target,
        )?;

        let text_style = TextStyleBuilder::new()
            .alignment(Alignment::Center)
            .baseline(Baseline::Middle)
            .build();
        EgDrawable::draw(
            &Text::with_text_style(
                self.initials,
                area.center(),
                MonoTextStyle::new(&FONT_7X13_BOLD, Rgb565::WHITE),
                text_style,
            ),
            target,
        )?;
        Ok(())
    }

    fn draw_sub_image<D: DrawTarget<Color = Rgb565>>(
        &self,
        target: &mut D,
        area: &Rectangle,
    ) -> Result<(), D::Error> {
        let visible = Rectangle::new(Point::zero(), area.size);
        ImageDrawable::draw(
            self,
            &mut target.translated(-area.top_left).clipped(&visible),
        )
    }
}

/// The sample people as avatars of `size` pixels
fn sample_avatars(size: u32) -> impl Iterator<Item = MonogramAvatar> {
    SAMPLE_PEOPLE
        .into_iter()
        .map(move |(initials, color)| MonogramAvatar::new(initials, color, size))
}

/// Demo page for [`AvatarStack`]
pub struct AvatarGroupPage {
    bounds: Rectangle,
    theme: Theme,
    large: AvatarStack<MonogramAvatar>,
    small: AvatarStack<MonogramAvatar>,
    mirrored: AvatarStack<MonogramAvatar>,
    dirty: bool,
}

impl AvatarGroupPage {
    pub fn new(bounds: Rectangle, theme: Theme) -> Self {
        let row = |index: i32| {
            Rectangle::new(
                bounds.top_left + Point::new(MARGIN_PX, 36 + index * 70),
                Size::new(bounds.size.width - 2 * MARGIN_PX as u32, ROW_HEIGHT_PX),
            )
        };
        let size = theme.avatar_stack.avatar_size;

        let mut large = AvatarStack::new(row(0)).with_theme(&theme);
        large.update(sample_avatars(size), GROUP_SIZE);

        let mut small = AvatarStack::new(row(1)).with_theme(&theme);
        small.update(sample_avatars(size).take(3), 3);

        let mut mirrored = AvatarStack::new(row(2))
            .with_theme(&theme)
            .with_direction(LayoutDirection::RightToLeft);
        mirrored.update(sample_avatars(size), GROUP_SIZE);

        Self {
            bounds,
            theme,
            large,
            small,
            mirrored,
            dirty: true,
        }
    }

    pub fn large_stack(&self) -> &AvatarStack<MonogramAvatar> {
        &self.large
    }

    pub fn small_stack(&self) -> &AvatarStack<MonogramAvatar> {
        &self.small
    }

    pub fn mirrored_stack(&self) -> &AvatarStack<MonogramAvatar> {
        &self.mirrored
    }

    fn stacks(&self) -> [&AvatarStack<MonogramAvatar>; 3] {
        [&self.large, &self.small, &self.mirrored]
    }
}

impl Default for AvatarGroupPage {
    fn default() -> Self {
        Self::new(
            Rectangle::new(
                Point::zero(),
                Size::new(DISPLAY_WIDTH_PX as u32, DISPLAY_HEIGHT_PX as u32),
            ),
            Theme::default(),
        )
    }
}

impl Page for AvatarGroupPage {
    fn id(&self) -> PageId {
        PageId::AvatarGroup
    }

    fn title(&self) -> &str {
        "Avatar Group"
    }

    fn on_activate(&mut self) {
        info!(
            "Showing {} avatars with badge {:?}",
            self.large.rendered_count(),
            self.large.badge_label()
        );
        self.dirty = true;
    }

    fn handle_touch(&mut self, event: TouchEvent) -> Option<Action> {
        let TouchEvent::Press(_) = event;
        Some(Action::NavigateToPage(PageId::FloatingField))
    }

    fn handle_key(&mut self, _key: KeyEvent) -> bool {
        false
    }

    fn update(&mut self, _elapsed: Duration) {
        // Nothing animates on this page
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

impl Drawable for AvatarGroupPage {
    fn draw<D: DrawTarget<Color = Rgb565>>(&self, display: &mut D) -> Result<(), D::Error> {
        EgDrawable::draw(
            &self
                .bounds
                .into_styled(PrimitiveStyle::with_fill(self.theme.palette.background)),
            display,
        )?;

        let caption_style = MonoTextStyle::new(&FONT_6X10, self.theme.palette.text_primary);
        let captions = ["Group of 300", "Group of 3", "Right to left"];
        for (caption, stack) in captions.iter().zip(self.stacks()) {
            let anchor = stack.bounds().top_left - Point::new(0, 8);
            EgDrawable::draw(
                &Text::with_baseline(caption, anchor, caption_style, Baseline::Middle),
                display,
            )?;
            stack.draw(display)?;
        }

        Ok(())
    }

    fn bounds(&self) -> Rectangle {
        self.bounds
    }

    fn is_dirty(&self) -> bool {
        self.dirty || self.stacks().iter().any(|stack| stack.is_dirty())
    }

    fn mark_clean(&mut self) {
        self.dirty = false;
        self.large.mark_clean();
        self.small.mark_clean();
        self.mirrored.mark_clean();
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::mock_display::MockDisplay;

    #[test]
    fn test_large_group_overflows() {
        let page = AvatarGroupPage::default();

        assert_eq!(page.large_stack().rendered_count(), 4);
        assert_eq!(page.large_stack().badge_label(), Some("+296"));
        assert_eq!(page.mirrored_stack().badge_label(), Some("+296"));
    }

    #[test]
    fn test_small_group_has_no_badge() {
        let page = AvatarGroupPage::default();

        assert_eq!(page.small_stack().rendered_count(), 3);
        assert!(page.small_stack().badge().is_none());
    }

    #[test]
    fn test_mirrored_row_starts_at_right_edge() {
        let page = AvatarGroupPage::default();
        let first = page.mirrored_stack().avatar_frames().next().unwrap();

        // Row spans 16..304, avatars are 50 wide
        assert_eq!(first.top_left.x, 254);
    }

    #[test]
    fn test_press_navigates_to_fields() {
        let mut page = AvatarGroupPage::default();
        assert_eq!(
            page.handle_touch(TouchEvent::Press(crate::ui::core::TouchPoint::new(10, 10))),
            Some(Action::NavigateToPage(PageId::FloatingField))
        );
    }

    #[test]
    fn test_monogram_fills_its_square() {
        let avatar = MonogramAvatar::new("AB", Rgb565::BLUE, 20);
        let mut display = MockDisplay::<Rgb565>::new();
        display.set_allow_overdraw(true);

        ImageDrawable::draw(&avatar, &mut display).unwrap();

        assert_eq!(display.get_pixel(Point::new(0, 0)), Some(Rgb565::BLUE));
        assert_eq!(display.get_pixel(Point::new(19, 19)), Some(Rgb565::BLUE));
        assert_eq!(display.get_pixel(Point::new(20, 20)), None);
    }
}
