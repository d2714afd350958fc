//! Frame composition for the 128x64 monochrome display.
//!
//! A frame has two elements:
//! - an 8x8 filled cursor whose position follows the joystick
//! - a border of [`BorderThickness::pixels`] concentric 1px outlines
//!
//! Drawing works against any `DrawTarget<Color = BinaryColor>`: the SSD1306
//! buffered mode on the device, an in-memory buffer in tests.
//!
//! # Coordinate Mapping
//!
//! | Axis | ADC | Pixel |
//! |------|-----|-------|
//! | X | 0 → 4095 | 0 → `CURSOR_MAX_X` (left → right) |
//! | Y | 4095 → 0 | 0 → `CURSOR_MAX_Y` (top → bottom) |
//!
//! Y is inverted because display row 0 is at the top while pushing the
//! joystick up raises the reading. Integer division truncates.

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};

use crate::config::{ADC_MAX, CURSOR_MAX_X, CURSOR_MAX_Y, CURSOR_SIZE, DISPLAY_HEIGHT, DISPLAY_WIDTH};
use crate::sample::Sample;
use crate::state::BorderThickness;

/// Style of the cursor glyph.
const CURSOR_STYLE: PrimitiveStyle<BinaryColor> = PrimitiveStyle::with_fill(BinaryColor::On);

/// Style of each border outline.
const BORDER_STYLE: PrimitiveStyle<BinaryColor> = PrimitiveStyle::with_stroke(BinaryColor::On, 1);

/// Top-left corner of the cursor for a sample.
pub fn cursor_position(sample: Sample) -> Point {
    let adc_max = u32::from(ADC_MAX);
    let x = u32::from(sample.x) * CURSOR_MAX_X / adc_max;
    let y = u32::from(ADC_MAX - sample.y) * CURSOR_MAX_Y / adc_max;
    Point::new(x as i32, y as i32)
}

/// Everything needed to draw one frame.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct RenderFrame {
    /// Top-left corner of the cursor in display pixels.
    pub cursor: Point,
    pub border: BorderThickness,
}

impl RenderFrame {
    pub fn new(
        sample: Sample,
        border: BorderThickness,
    ) -> Self {
        Self {
            cursor: cursor_position(sample),
            border,
        }
    }

    /// Clear `target` and draw the cursor and border.
    ///
    /// Does not flush; sending the buffer to the controller is the caller's job.
    pub fn draw<D>(
        &self,
        target: &mut D,
    ) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = BinaryColor>,
    {
        target.clear(BinaryColor::Off)?;

        Rectangle::new(self.cursor, Size::new(CURSOR_SIZE, CURSOR_SIZE))
            .into_styled(CURSOR_STYLE)
            .draw(target)?;

        for inset in 0..self.border.pixels() {
            border_ring(inset).into_styled(BORDER_STYLE).draw(target)?;
        }

        Ok(())
    }
}

/// Outline inset by `inset` pixels from every display edge.
#[inline]
fn border_ring(inset: u32) -> Rectangle {
    Rectangle::new(
        Point::new(inset as i32, inset as i32),
        Size::new(DISPLAY_WIDTH - 2 * inset, DISPLAY_HEIGHT - 2 * inset),
    )
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
pub(crate) mod tests {
    use core::convert::Infallible;

    use super::*;

    const W: usize = DISPLAY_WIDTH as usize;
    const H: usize = DISPLAY_HEIGHT as usize;

    /// In-memory 128x64 monochrome framebuffer.
    pub(crate) struct TestFrame {
        pixels: [[bool; W]; H],
    }

    impl TestFrame {
        pub(crate) fn new() -> Self { Self { pixels: [[false; W]; H] } }

        pub(crate) fn filled() -> Self { Self { pixels: [[true; W]; H] } }

        pub(crate) fn is_on(
            &self,
            x: usize,
            y: usize,
        ) -> bool {
            self.pixels[y][x]
        }

        pub(crate) fn lit_count(&self) -> usize { self.pixels.iter().flatten().filter(|&&p| p).count() }
    }

    impl OriginDimensions for TestFrame {
        fn size(&self) -> Size { Size::new(DISPLAY_WIDTH, DISPLAY_HEIGHT) }
    }

    impl DrawTarget for TestFrame {
        type Color = BinaryColor;
        type Error = Infallible;

        fn draw_iter<I>(
            &mut self,
            pixels: I,
        ) -> Result<(), Self::Error>
        where
            I: IntoIterator<Item = Pixel<Self::Color>>,
        {
            for Pixel(point, color) in pixels {
                if point.x >= 0 && point.y >= 0 && (point.x as usize) < W && (point.y as usize) < H {
                    self.pixels[point.y as usize][point.x as usize] = color.is_on();
                }
            }
            Ok(())
        }
    }

    /// Lit pixels in the perimeter of ring `inset`.
    fn ring_len(inset: u32) -> usize {
        let w = (DISPLAY_WIDTH - 2 * inset) as usize;
        let h = (DISPLAY_HEIGHT - 2 * inset) as usize;
        2 * w + 2 * h - 4
    }

    #[test]
    fn test_cursor_corners() {
        assert_eq!(cursor_position(Sample::new(0, 4095)), Point::new(0, 0));
        assert_eq!(cursor_position(Sample::new(4095, 0)), Point::new(120, 56));
        assert_eq!(cursor_position(Sample::new(0, 0)), Point::new(0, 56));
        assert_eq!(cursor_position(Sample::new(4095, 4095)), Point::new(120, 0));
    }

    #[test]
    fn test_cursor_center() {
        let p = cursor_position(Sample::CENTER);
        assert_eq!(p, Point::new(60, 27));
        assert!((p.x - CURSOR_MAX_X as i32 / 2).abs() <= 1);
        assert!((p.y - CURSOR_MAX_Y as i32 / 2).abs() <= 1);
    }

    #[test]
    fn test_cursor_x_monotonic() {
        let mut prev = 0;
        for x in 0..=ADC_MAX {
            let px = cursor_position(Sample::new(x, 2048)).x;
            assert!(px >= prev, "x={x}: {px} < {prev}");
            prev = px;
        }
    }

    #[test]
    fn test_cursor_y_inverted_monotonic() {
        let mut prev = i32::MAX;
        for y in 0..=ADC_MAX {
            let py = cursor_position(Sample::new(2048, y)).y;
            assert!(py <= prev, "y={y}: {py} > {prev}");
            prev = py;
        }
    }

    #[test]
    fn test_cursor_stays_on_screen() {
        for raw in [0, 1, 2047, 2048, 4094, 4095] {
            let p = cursor_position(Sample::new(raw, raw));
            assert!(p.x >= 0 && p.x + CURSOR_SIZE as i32 <= DISPLAY_WIDTH as i32);
            assert!(p.y >= 0 && p.y + CURSOR_SIZE as i32 <= DISPLAY_HEIGHT as i32);
        }
    }

    #[test]
    fn test_draw_thin_border() {
        let mut frame = TestFrame::new();
        RenderFrame::new(Sample::CENTER, BorderThickness::Thin)
            .draw(&mut frame)
            .unwrap();

        assert!(frame.is_on(0, 0));
        assert!(frame.is_on(1, 1));
        assert!(!frame.is_on(2, 2));
        assert!(frame.is_on(127, 63));
        assert!(frame.is_on(126, 62));
        assert!(!frame.is_on(125, 61));

        let cursor = (CURSOR_SIZE * CURSOR_SIZE) as usize;
        assert_eq!(frame.lit_count(), ring_len(0) + ring_len(1) + cursor);
    }

    #[test]
    fn test_draw_thick_border() {
        let mut frame = TestFrame::new();
        RenderFrame::new(Sample::CENTER, BorderThickness::Thick)
            .draw(&mut frame)
            .unwrap();

        assert!(frame.is_on(3, 3));
        assert!(!frame.is_on(4, 4));
        assert!(frame.is_on(64, 3));
        assert!(!frame.is_on(64, 4));

        let rings: usize = (0..4).map(ring_len).sum();
        let cursor = (CURSOR_SIZE * CURSOR_SIZE) as usize;
        assert_eq!(frame.lit_count(), rings + cursor);
    }

    #[test]
    fn test_draw_cursor_square() {
        let mut frame = TestFrame::new();
        RenderFrame::new(Sample::CENTER, BorderThickness::Thin)
            .draw(&mut frame)
            .unwrap();

        for y in 27..35 {
            for x in 60..68 {
                assert!(frame.is_on(x, y), "cursor pixel ({x}, {y}) should be lit");
            }
        }
        assert!(!frame.is_on(59, 27));
        assert!(!frame.is_on(68, 27));
        assert!(!frame.is_on(60, 26));
        assert!(!frame.is_on(60, 35));
    }

    #[test]
    fn test_draw_clears_previous_frame() {
        let mut frame = TestFrame::filled();
        RenderFrame::new(Sample::CENTER, BorderThickness::Thin)
            .draw(&mut frame)
            .unwrap();

        assert!(!frame.is_on(20, 20));
        assert!(!frame.is_on(100, 50));
    }

    #[test]
    fn test_cursor_overlaps_border_in_corner() {
        let mut frame = TestFrame::new();
        RenderFrame::new(Sample::new(0, 4095), BorderThickness::Thin)
            .draw(&mut frame)
            .unwrap();

        assert!(frame.is_on(5, 5));
        assert!(frame.is_on(7, 7));
        assert!(!frame.is_on(8, 8));
    }
}
