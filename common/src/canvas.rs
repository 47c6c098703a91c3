//! Rasterizing frames onto a display.
//!
//! [`Canvas`] is the seam between the compositor's draw list and whatever shows pixels.
//! Any `embedded-graphics` [`DrawTarget`] with an `Rgb888` color type is a canvas, which
//! covers the simulator window as well as `MockDisplay` in tests.
//!
//! Polygons are filled as a triangle fan from the first vertex, which is exact for the
//! convex shapes the compositor produces (needles are triangles).

use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::primitives::{Circle, PrimitiveStyle, Rectangle, Triangle};
use embedded_graphics::text::Text;

use crate::draw::{DrawPrimitive, Frame};
use crate::styles::{CENTERED, font_for};

/// Something a finished frame can be drawn onto.
pub trait Canvas {
    type Error;

    /// Draw every primitive of `frame`, in order.
    fn submit(
        &mut self,
        frame: &Frame,
    ) -> Result<(), Self::Error>;
}

impl<D> Canvas for D
where
    D: DrawTarget<Color = Rgb888>,
{
    type Error = D::Error;

    fn submit(
        &mut self,
        frame: &Frame,
    ) -> Result<(), Self::Error> {
        for primitive in frame.iter() {
            draw_primitive(self, primitive)?;
        }
        Ok(())
    }
}

fn draw_primitive<D>(
    target: &mut D,
    primitive: &DrawPrimitive,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb888>,
{
    match primitive {
        DrawPrimitive::Circle { center, radius, color } => Circle::with_center(*center, radius * 2 + 1)
            .into_styled(PrimitiveStyle::with_fill(*color))
            .draw(target),
        DrawPrimitive::Polygon { points, color } => {
            let style = PrimitiveStyle::with_fill(*color);
            if let Some((first, rest)) = points.split_first() {
                for pair in rest.windows(2) {
                    Triangle::new(*first, pair[0], pair[1]).into_styled(style).draw(target)?;
                }
            }
            Ok(())
        }
        DrawPrimitive::Rectangle { origin, size, color } => Rectangle::new(*origin, *size)
            .into_styled(PrimitiveStyle::with_fill(*color))
            .draw(target),
        DrawPrimitive::Text {
            text,
            font_size,
            bold,
            color,
            center,
        } => {
            let style = MonoTextStyle::new(font_for(*font_size, *bold), *color);
            Text::with_text_style(text, *center, style, CENTERED).draw(target).map(|_| ())
        }
    }
}
