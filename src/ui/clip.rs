//! Draw-target adapter that discards pixels outside a circle.
//!
//! embedded-graphics only clips to rectangles; avatars are cropped to a disc
//! by drawing through this wrapper.

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, ContainsPoint, Rectangle};

pub struct CircleClip<'a, D> {
    parent: &'a mut D,
    circle: Circle,
}

impl<'a, D> CircleClip<'a, D>
where
    D: DrawTarget,
{
    pub fn new(parent: &'a mut D, circle: Circle) -> Self {
        Self { parent, circle }
    }
}

impl<D> Dimensions for CircleClip<'_, D>
where
    D: DrawTarget,
{
    fn bounding_box(&self) -> Rectangle {
        self.circle
            .bounding_box()
            .intersection(&self.parent.bounding_box())
    }
}

impl<D> DrawTarget for CircleClip<'_, D>
where
    D: DrawTarget,
{
    type Color = D::Color;
    type Error = D::Error;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let circle = self.circle;
        self.parent.draw_iter(
            pixels
                .into_iter()
                .filter(move |Pixel(point, _)| circle.contains(*point)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::mock_display::MockDisplay;
    use embedded_graphics::pixelcolor::BinaryColor;
    use embedded_graphics::primitives::PrimitiveStyle;

    #[test]
    fn test_corners_are_discarded() {
        let mut display = MockDisplay::<BinaryColor>::new();
        let circle = Circle::new(Point::new(0, 0), 9);

        {
            let mut clipped = CircleClip::new(&mut display, circle);
            Rectangle::new(Point::new(0, 0), Size::new(9, 9))
                .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
                .draw(&mut clipped)
                .unwrap();
        }

        assert_eq!(display.get_pixel(Point::new(0, 0)), None);
        assert_eq!(display.get_pixel(Point::new(8, 8)), None);
        assert_eq!(display.get_pixel(Point::new(4, 4)), Some(BinaryColor::On));
    }
}
