//! Draw instructions produced by the compositor.
//!
//! A [`Frame`] is an ordered, fixed-capacity list of [`DrawPrimitive`]s. It holds no
//! references to any display, so frames can be built and inspected in tests and handed
//! to any [`Canvas`](crate::canvas::Canvas) afterwards.
//!
//! # Capacity
//!
//! A full dashboard frame needs about 60 primitives. [`FRAME_CAPACITY`] leaves headroom;
//! primitives pushed past it are counted in [`Frame::dropped`] instead of panicking.

use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::{Point, Size};
use heapless::{String, Vec};

/// Maximum primitives per frame.
pub const FRAME_CAPACITY: usize = 96;

/// Maximum vertices of a polygon.
pub const POLYGON_VERTICES: usize = 8;

/// Maximum bytes of a text primitive.
pub const TEXT_LEN: usize = 16;

/// One drawing instruction.
#[derive(Clone, PartialEq, Debug)]
pub enum DrawPrimitive {
    /// Filled circle.
    Circle {
        center: Point,
        radius: u32,
        color: Rgb888,
    },
    /// Filled convex polygon.
    Polygon {
        points: Vec<Point, POLYGON_VERTICES>,
        color: Rgb888,
    },
    /// Filled axis-aligned rectangle.
    Rectangle {
        origin: Point,
        size: Size,
        color: Rgb888,
    },
    /// Text centered on `center`.
    Text {
        text: String<TEXT_LEN>,
        font_size: u32,
        bold: bool,
        color: Rgb888,
        center: Point,
    },
}

impl DrawPrimitive {
    pub fn circle(
        center: Point,
        radius: u32,
        color: Rgb888,
    ) -> Self {
        Self::Circle { center, radius, color }
    }

    /// Polygon from a vertex slice; vertices beyond [`POLYGON_VERTICES`] are ignored.
    pub fn polygon(
        vertices: &[Point],
        color: Rgb888,
    ) -> Self {
        let mut points = Vec::new();
        for p in vertices.iter().take(POLYGON_VERTICES) {
            points.push(*p).ok();
        }
        Self::Polygon { points, color }
    }

    pub fn rectangle(
        origin: Point,
        size: Size,
        color: Rgb888,
    ) -> Self {
        Self::Rectangle { origin, size, color }
    }

    /// Text primitive; text longer than [`TEXT_LEN`] bytes is cut at a char boundary.
    pub fn text(
        text: &str,
        font_size: u32,
        bold: bool,
        color: Rgb888,
        center: Point,
    ) -> Self {
        let mut buf = String::new();
        for c in text.chars() {
            if buf.push(c).is_err() {
                break;
            }
        }
        Self::Text {
            text: buf,
            font_size,
            bold,
            color,
            center,
        }
    }
}

/// Ordered draw list for one frame.
#[derive(Clone, PartialEq, Default, Debug)]
pub struct Frame {
    primitives: Vec<DrawPrimitive, FRAME_CAPACITY>,
    dropped: u32,
}

impl Frame {
    pub const fn new() -> Self {
        Self {
            primitives: Vec::new(),
            dropped: 0,
        }
    }

    /// Append a primitive, counting it as dropped if the frame is full.
    pub fn push(
        &mut self,
        primitive: DrawPrimitive,
    ) {
        if self.primitives.push(primitive).is_err() {
            self.dropped += 1;
        }
    }

    #[inline]
    pub fn primitives(&self) -> &[DrawPrimitive] { &self.primitives }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &DrawPrimitive> { self.primitives.iter() }

    #[inline]
    pub fn len(&self) -> usize { self.primitives.len() }

    #[inline]
    pub fn is_empty(&self) -> bool { self.primitives.is_empty() }

    /// Primitives that did not fit.
    #[inline]
    pub const fn dropped(&self) -> u32 { self.dropped }
}

#[cfg(test)]
mod tests {
    use embedded_graphics::pixelcolor::RgbColor;

    use super::*;

    #[test]
    fn test_frame_keeps_order() {
        let mut frame = Frame::new();
        frame.push(DrawPrimitive::circle(Point::new(1, 1), 3, Rgb888::RED));
        frame.push(DrawPrimitive::rectangle(Point::zero(), Size::new(2, 2), Rgb888::BLUE));
        assert_eq!(frame.len(), 2);
        assert!(matches!(frame.primitives()[0], DrawPrimitive::Circle { .. }));
        assert!(matches!(frame.primitives()[1], DrawPrimitive::Rectangle { .. }));
    }

    #[test]
    fn test_frame_counts_overflow() {
        let mut frame = Frame::new();
        for _ in 0..FRAME_CAPACITY + 3 {
            frame.push(DrawPrimitive::circle(Point::zero(), 1, Rgb888::BLACK));
        }
        assert_eq!(frame.len(), FRAME_CAPACITY);
        assert_eq!(frame.dropped(), 3);
    }

    #[test]
    fn test_text_truncates() {
        let DrawPrimitive::Text { text, .. } =
            DrawPrimitive::text("a very long label text", 24, false, Rgb888::WHITE, Point::zero())
        else {
            panic!("expected text");
        };
        assert_eq!(text.as_str(), "a very long labe");
    }

    #[test]
    fn test_polygon_vertex_limit() {
        let vertices = [Point::zero(); 10];
        let DrawPrimitive::Polygon { points, .. } = DrawPrimitive::polygon(&vertices, Rgb888::RED) else {
            panic!("expected polygon");
        };
        assert_eq!(points.len(), POLYGON_VERTICES);
    }
}
