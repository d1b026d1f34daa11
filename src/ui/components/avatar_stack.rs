// src/ui/components/avatar_stack.rs
//! Overlapping avatar row with a "+N" overflow badge
//!
//! Every [`AvatarStack::update`] throws the previous avatars and badge away and
//! lays the row out again from scratch. With at most
//! [`MAX_VISIBLE_AVATARS`] elements there is nothing worth diffing.

use core::fmt::Write;

use crate::config::{AvatarStackConfig, MAX_VISIBLE_AVATARS};
use crate::ui::clip::CircleClip;
use crate::ui::core::{DirtyRegion, Drawable, LayoutDirection};
use crate::ui::styling::{ColorPalette, Style, Theme};
use embedded_graphics::Drawable as EgDrawable;
use embedded_graphics::image::{Image, ImageDrawable};
use embedded_graphics::mono_font::{MonoTextStyle, ascii::FONT_7X13_BOLD};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, Rectangle};
use embedded_graphics::text::Text;
use embedded_layout::prelude::*;
use log::debug;

/// Room for "+" followed by any `usize`
const BADGE_LABEL_LEN: usize = 24;

/// One rendered avatar: the caller's image cropped to a disc
struct Avatar<I> {
    image: I,
    frame: Rectangle,
}

/// Circular "+N" count appended after the last avatar
#[derive(Debug, Clone, PartialEq)]
pub struct OverflowBadge {
    frame: Rectangle,
    count: usize,
    label: heapless::String<BADGE_LABEL_LEN>,
}

impl OverflowBadge {
    fn new(frame: Rectangle, count: usize) -> Self {
        let mut label = heapless::String::new();
        // Cannot overflow: BADGE_LABEL_LEN fits "+" and usize::MAX
        write!(label, "+{}", count).ok();

        Self {
            frame,
            count,
            label,
        }
    }

    pub fn frame(&self) -> Rectangle {
        self.frame
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    fn draw<D: DrawTarget<Color = Rgb565>>(
        &self,
        palette: &ColorPalette,
        display: &mut D,
    ) -> Result<(), D::Error> {
        let style = Style::new()
            .with_background(palette.badge)
            .with_foreground(palette.badge_text);

        Circle::with_center(self.frame.center(), self.frame.size.width)
            .into_styled(style.to_primitive_style())
            .draw(display)?;

        let text_style = MonoTextStyle::new(&FONT_7X13_BOLD, palette.badge_text);
        Text::new(&self.label, Point::zero(), text_style)
            .align_to(&self.frame, horizontal::Center, vertical::Center)
            .draw(display)?;

        Ok(())
    }
}

/// Shingled row of circular avatars.
///
/// The first avatar sits on the leading edge of the stack's bounds and each
/// following element overlaps the previous one by `overlap` pixels. Later
/// elements are painted last, so they end up on top. Everything is vertically
/// centred on the bounds.
///
/// # Examples
/// ```ignore
/// let mut stack = AvatarStack::new(Rectangle::new(Point::new(20, 40), Size::new(280, 60)));
/// stack.update(avatars.iter().copied(), 300);
/// // 4 avatars and a "+296" badge
/// stack.draw(&mut display)?;
/// ```
pub struct AvatarStack<I> {
    bounds: Rectangle,
    config: AvatarStackConfig,
    palette: ColorPalette,
    direction: LayoutDirection,
    avatars: heapless::Vec<Avatar<I>, MAX_VISIBLE_AVATARS>,
    badge: Option<OverflowBadge>,
    dirty: bool,
}

impl<I> AvatarStack<I>
where
    I: ImageDrawable<Color = Rgb565>,
{
    /// Create an empty stack; nothing is drawn until [`update`](Self::update).
    pub fn new(bounds: Rectangle) -> Self {
        Self {
            bounds,
            config: AvatarStackConfig::default(),
            palette: ColorPalette::default(),
            direction: LayoutDirection::default(),
            avatars: heapless::Vec::new(),
            badge: None,
            dirty: true,
        }
    }

    pub fn with_config(mut self, config: AvatarStackConfig) -> Self {
        self.config = config;
        self.dirty = true;
        self
    }

    pub fn with_palette(mut self, palette: ColorPalette) -> Self {
        self.palette = palette;
        self.dirty = true;
        self
    }

    pub fn with_theme(self, theme: &Theme) -> Self {
        self.with_config(theme.avatar_stack)
            .with_palette(theme.palette)
    }

    /// Lay the row out right-to-left under a mirrored layout.
    pub fn with_direction(mut self, direction: LayoutDirection) -> Self {
        self.direction = direction;
        self.dirty = true;
        self
    }

    /// Rebuild the row from `avatars` and the full participant count.
    ///
    /// Only the first [`MAX_VISIBLE_AVATARS`] images are kept. A badge reading
    /// `+{total_count - rendered}` follows them when `total_count` exceeds
    /// the number rendered; a smaller `total_count` simply omits the badge.
    pub fn update<A>(&mut self, avatars: A, total_count: usize)
    where
        A: IntoIterator<Item = I>,
    {
        self.avatars.clear();
        self.badge = None;

        for (index, image) in avatars.into_iter().take(MAX_VISIBLE_AVATARS).enumerate() {
            let frame = self.slot_frame(index);
            // `take` keeps us within capacity
            self.avatars.push(Avatar { image, frame }).ok();
        }

        let rendered = self.avatars.len();
        let overflow = total_count.saturating_sub(rendered);
        if overflow > 0 {
            self.badge = Some(OverflowBadge::new(self.slot_frame(rendered), overflow));
        }

        debug!(
            "Avatar stack rebuilt: {} avatars, overflow {}",
            rendered, overflow
        );
        self.dirty = true;
    }

    /// Frame of the element at `index` in the row (avatars, then the badge).
    fn slot_frame(&self, index: usize) -> Rectangle {
        let size = self.config.avatar_size;
        let inset = index as i32 * self.config.stride();
        let x = self.direction.leading_x(&self.bounds, inset, size);
        let y = self.bounds.center().y - (size / 2) as i32;

        Rectangle::new(Point::new(x, y), Size::new(size, size))
    }

    pub fn rendered_count(&self) -> usize {
        self.avatars.len()
    }

    pub fn overflow_count(&self) -> usize {
        self.badge.as_ref().map_or(0, OverflowBadge::count)
    }

    pub fn badge(&self) -> Option<&OverflowBadge> {
        self.badge.as_ref()
    }

    pub fn badge_label(&self) -> Option<&str> {
        self.badge.as_ref().map(OverflowBadge::label)
    }

    pub fn badge_frame(&self) -> Option<Rectangle> {
        self.badge.as_ref().map(OverflowBadge::frame)
    }

    /// Avatar frames in paint order
    pub fn avatar_frames(&self) -> impl Iterator<Item = Rectangle> + '_ {
        self.avatars.iter().map(|avatar| avatar.frame)
    }

    pub fn set_bounds(&mut self, bounds: Rectangle) {
        if self.bounds == bounds {
            return;
        }
        self.bounds = bounds;
        for index in 0..self.avatars.len() {
            self.avatars[index].frame = self.slot_frame(index);
        }
        let badge_frame = self.slot_frame(self.avatars.len());
        if let Some(badge) = self.badge.as_mut() {
            badge.frame = badge_frame;
        }
        self.dirty = true;
    }
}

impl<I> Drawable for AvatarStack<I>
where
    I: ImageDrawable<Color = Rgb565>,
{
    fn draw<D: DrawTarget<Color = Rgb565>>(&self, display: &mut D) -> Result<(), D::Error> {
        let ring = Style::new()
            .without_background()
            .with_border(self.palette.avatar_border, self.config.border_width)
            .to_primitive_style();

        for avatar in &self.avatars {
            let disc = Circle::with_center(avatar.frame.center(), avatar.frame.size.width);

            let mut clipped = CircleClip::new(display, disc);
            Image::with_center(&avatar.image, avatar.frame.center()).draw(&mut clipped)?;

            disc.into_styled(ring).draw(display)?;
        }

        if let Some(badge) = &self.badge {
            badge.draw(&self.palette, display)?;
        }

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
    use alloc::vec::Vec;
    use embedded_graphics::image::ImageRaw;
    use embedded_graphics::mock_display::MockDisplay;
    use embedded_graphics::pixelcolor::raw::BigEndian;

    type Avatar = ImageRaw<'static, Rgb565, BigEndian>;

    /// 2x2 red image, big-endian RGB565
    static PIXELS: [u8; 8] = [0xF8, 0x00, 0xF8, 0x00, 0xF8, 0x00, 0xF8, 0x00];

    fn avatars(count: usize) -> Vec<Avatar> {
        (0..count).map(|_| ImageRaw::new(&PIXELS, 2)).collect()
    }

    fn stack() -> AvatarStack<Avatar> {
        AvatarStack::new(Rectangle::new(Point::new(0, 0), Size::new(300, 60)))
    }

    #[test]
    fn test_visible_count_and_badge_follow_totals() {
        for len in 0..7 {
            for total in 0..9 {
                let mut stack = stack();
                stack.update(avatars(len), total);

                let rendered = len.min(MAX_VISIBLE_AVATARS);
                assert_eq!(stack.rendered_count(), rendered);
                assert_eq!(stack.avatar_frames().count(), rendered);

                if total > rendered {
                    let expected = alloc::format!("+{}", total - rendered);
                    assert_eq!(stack.badge_label(), Some(expected.as_str()));
                } else {
                    assert_eq!(stack.badge_label(), None);
                }
            }
        }
    }

    #[test]
    fn test_empty_stack() {
        let mut stack = stack();
        stack.update(avatars(0), 0);

        assert_eq!(stack.rendered_count(), 0);
        assert!(stack.badge().is_none());
    }

    #[test]
    fn test_badge_alone_is_leading_anchored() {
        let mut stack = stack();
        stack.update(avatars(0), 5);

        assert_eq!(stack.rendered_count(), 0);
        assert_eq!(stack.badge_label(), Some("+5"));
        assert_eq!(
            stack.badge_frame(),
            Some(Rectangle::new(Point::new(0, 5), Size::new(50, 50)))
        );
    }

    #[test]
    fn test_six_avatars_show_four_and_plus_two() {
        let mut stack = stack();
        stack.update(avatars(6), 6);

        assert_eq!(stack.rendered_count(), 4);
        assert_eq!(stack.badge_label(), Some("+2"));
        assert_eq!(stack.overflow_count(), 2);
    }

    #[test]
    fn test_exact_count_has_no_badge() {
        let mut stack = stack();
        stack.update(avatars(3), 3);

        assert_eq!(stack.rendered_count(), 3);
        assert!(stack.badge().is_none());
    }

    #[test]
    fn test_total_below_visible_omits_badge() {
        let mut stack = stack();
        stack.update(avatars(4), 1);

        assert_eq!(stack.rendered_count(), 4);
        assert_eq!(stack.overflow_count(), 0);
    }

    #[test]
    fn test_frames_overlap_by_fixed_offset() {
        let mut stack = stack();
        stack.update(avatars(5), 300);

        let xs: Vec<i32> = stack.avatar_frames().map(|f| f.top_left.x).collect();
        assert_eq!(xs, [0, 40, 80, 120]);
        assert_eq!(stack.badge_frame().map(|f| f.top_left.x), Some(160));
        assert_eq!(stack.badge_label(), Some("+296"));

        // Shared vertical centre line
        for frame in stack.avatar_frames() {
            assert_eq!(frame.center().y, 30);
        }
        assert_eq!(stack.badge_frame().map(|f| f.center().y), Some(30));
    }

    #[test]
    fn test_mirrored_layout_starts_on_the_right() {
        let mut stack = stack().with_direction(LayoutDirection::RightToLeft);
        stack.update(avatars(2), 3);

        let xs: Vec<i32> = stack.avatar_frames().map(|f| f.top_left.x).collect();
        assert_eq!(xs, [250, 210]);
        assert_eq!(stack.badge_frame().map(|f| f.top_left.x), Some(170));
    }

    #[test]
    fn test_update_is_idempotent() {
        let mut stack = stack();
        stack.update(avatars(6), 10);
        let first: Vec<Rectangle> = stack.avatar_frames().collect();
        let first_badge = stack.badge().cloned();

        stack.update(avatars(6), 10);
        let second: Vec<Rectangle> = stack.avatar_frames().collect();

        assert_eq!(first, second);
        assert_eq!(first_badge.as_ref(), stack.badge());
    }

    #[test]
    fn test_update_discards_previous_row() {
        let mut stack = stack();
        stack.update(avatars(6), 100);
        stack.update(avatars(1), 1);

        assert_eq!(stack.rendered_count(), 1);
        assert!(stack.badge().is_none());
    }

    #[test]
    fn test_set_bounds_moves_existing_row() {
        let mut stack = stack();
        stack.update(avatars(1), 2);
        stack.set_bounds(Rectangle::new(Point::new(10, 100), Size::new(300, 60)));

        let frames: Vec<Rectangle> = stack.avatar_frames().collect();
        assert_eq!(frames[0].top_left, Point::new(10, 105));
        assert_eq!(stack.badge_frame().map(|f| f.top_left), Some(Point::new(50, 105)));
    }

    #[test]
    fn test_draws_within_first_avatar() {
        let mut stack = AvatarStack::new(Rectangle::new(Point::zero(), Size::new(64, 64)))
            .with_config(AvatarStackConfig {
                avatar_size: 20,
                overlap: 4,
                border_width: 1,
            });
        stack.update(avatars(1), 2);

        let mut display = MockDisplay::<Rgb565>::new();
        display.set_allow_overdraw(true);
        stack.draw(&mut display).unwrap();

        // Avatar centre is image red, badge centre is orange fill or text
        let avatar_center = stack.avatar_frames().next().unwrap().center();
        assert_eq!(display.get_pixel(avatar_center), Some(Rgb565::RED));
        assert!(display.get_pixel(stack.badge_frame().unwrap().top_left).is_none());
    }

    /// Solid square that fills the whole avatar disc
    #[derive(Clone, Copy)]
    struct Swatch(Rgb565);

    impl OriginDimensions for Swatch {
        fn size(&self) -> Size {
            Size::new(20, 20)
        }
    }

    impl ImageDrawable for Swatch {
        type Color = Rgb565;

        fn draw<D: DrawTarget<Color = Rgb565>>(&self, target: &mut D) -> Result<(), D::Error> {
            target.fill_solid(&self.bounding_box(), self.0)
        }

        fn draw_sub_image<D: DrawTarget<Color = Rgb565>>(
            &self,
            target: &mut D,
            area: &Rectangle,
        ) -> Result<(), D::Error> {
            target.fill_solid(&Rectangle::new(Point::zero(), area.size), self.0)
        }
    }

    #[test]
    fn test_later_elements_paint_on_top() {
        // Discs at x 0..20 and 16..36, badge at 32..52, all centred on y = 32
        let mut stack = AvatarStack::new(Rectangle::new(Point::zero(), Size::new(64, 64)))
            .with_config(AvatarStackConfig {
                avatar_size: 20,
                overlap: 4,
                border_width: 1,
            });
        stack.update([Swatch(Rgb565::RED), Swatch(Rgb565::GREEN)], 3);

        let mut display = MockDisplay::<Rgb565>::new();
        display.set_allow_overdraw(true);
        stack.draw(&mut display).unwrap();

        assert_eq!(display.get_pixel(Point::new(5, 32)), Some(Rgb565::RED));
        // Shared by both avatars: the second one wins
        assert_eq!(display.get_pixel(Point::new(18, 32)), Some(Rgb565::GREEN));
        // Shared by the last avatar and the badge: the badge wins
        assert_eq!(display.get_pixel(Point::new(34, 32)), Some(stack.palette.badge));
    }
}
