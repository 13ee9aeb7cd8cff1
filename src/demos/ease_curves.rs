//! Easing Curves Demo
//!
//! One small square per curve races from left to right, then everything
//! holds still before the next pass. Curves are grouped in rows of ten
//! (ins, outs, in-outs) after the lone linear square.

use super::{Demo, Frame};
use crate::config::EaseConfig;
use crate::display::{PixelBuffer, Transform};
use crate::util::rotate_hue;
use geo::{ease_vec, Ease, Vec2};

const BASE_COLOR: (u8, u8, u8) = (0, 0, 255);
const ROW_SPACING: f64 = 1.2;

pub struct EaseCurves {
    config: EaseConfig,
    /// Time the current pass started (or will start, while waiting)
    pass_start: f64,
    /// Normalized progress through the current pass
    t: f64,
    width: u32,
}

impl EaseCurves {
    pub fn new(config: EaseConfig) -> Self {
        Self {
            config,
            pass_start: 0.0,
            t: 0.0,
            width: 0,
        }
    }

    /// Square color for curve `i`: the first is white, the rest are blue
    /// with the hue stepped a tenth of a turn per curve within each row
    fn square_color(i: usize) -> (u8, u8, u8) {
        if i == 0 {
            (255, 255, 255)
        } else {
            rotate_hue(BASE_COLOR, ((i - 1) % 10) as f32 / 10.0)
        }
    }
}

impl Demo for EaseCurves {
    fn update(&mut self, frame: &Frame) {
        let duration = self.config.duration.max(f64::EPSILON);
        let mut elapsed = frame.time - self.pass_start;
        if elapsed > duration + self.config.wait {
            self.pass_start = frame.time + self.config.wait;
            elapsed = 0.0;
        }
        self.t = (elapsed / duration).clamp(0.0, 1.0);
        self.width = frame.width;
    }

    fn render(&self, buffer: &mut PixelBuffer) {
        let size = self.config.size;
        let width = if self.width > 0 { self.width } else { buffer.width() };
        let mut start = Vec2::new(self.config.start_x, self.config.start_y);
        let mut end = Vec2::new(width as f64 - self.config.end_margin, self.config.start_y);
        let offset = Vec2::new(0.0, size * ROW_SPACING);

        let mut transform = Transform::identity();
        for (i, curve) in self.config.curves.iter().copied().enumerate() {
            let pos = ease_vec(start, end, self.t, Ease::as_fn(curve));
            transform.reset().scale(size, size).translate(pos.x, pos.y);
            let (r, g, b) = Self::square_color(i);
            buffer.fill_quad(&transform, r, g, b, 255);

            start += offset;
            end += offset;
            if i % 10 == 0 {
                start.y += size;
                end.y += size;
            }
        }
    }

    fn name(&self) -> &str {
        "Ease"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demos::test_frame;

    #[test]
    fn test_pass_then_hold() {
        let mut demo = EaseCurves::new(EaseConfig::default());
        demo.update(&test_frame(0.0, 0.0));
        assert_eq!(demo.t, 0.0);
        demo.update(&test_frame(2.0, 0.016));
        assert_eq!(demo.t, 0.5);
        demo.update(&test_frame(4.5, 0.016));
        assert_eq!(demo.t, 1.0);
    }

    #[test]
    fn test_restart_waits_before_moving() {
        let mut demo = EaseCurves::new(EaseConfig::default());
        demo.update(&test_frame(5.5, 0.016));
        assert_eq!(demo.t, 0.0);
        assert_eq!(demo.pass_start, 6.5);
        // Still waiting
        demo.update(&test_frame(6.0, 0.016));
        assert_eq!(demo.t, 0.0);
        demo.update(&test_frame(8.5, 0.016));
        assert_eq!(demo.t, 0.5);
    }

    #[test]
    fn test_square_colors() {
        assert_eq!(EaseCurves::square_color(0), (255, 255, 255));
        assert_eq!(EaseCurves::square_color(1), (0, 0, 255));
        assert_eq!(EaseCurves::square_color(11), (0, 0, 255));
        assert_ne!(EaseCurves::square_color(2), (0, 0, 255));
    }

    #[test]
    fn test_render_layout() {
        let mut demo = EaseCurves::new(EaseConfig::default());
        demo.update(&test_frame(0.0, 0.0));
        let mut buffer = PixelBuffer::with_size(320, 240);
        demo.render(&mut buffer);

        // Linear square at the start of the first row
        assert_eq!(buffer.get_pixel(100, 30), Some((255, 255, 255)));
        // First ease-in square sits one row plus the group gap below
        assert_eq!(buffer.get_pixel(100, 41), Some((0, 0, 255)));
        assert_eq!(buffer.get_pixel(200, 30), Some((0, 0, 0)));
    }

    #[test]
    fn test_render_at_end() {
        let mut demo = EaseCurves::new(EaseConfig::default());
        demo.update(&test_frame(4.0, 0.0));
        let mut buffer = PixelBuffer::with_size(320, 240);
        demo.render(&mut buffer);
        assert_eq!(buffer.get_pixel(300, 30), Some((255, 255, 255)));
        assert_eq!(buffer.get_pixel(100, 30), Some((0, 0, 0)));
    }
}
