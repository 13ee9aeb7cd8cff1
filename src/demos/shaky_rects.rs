//! Shake Demo
//!
//! Hover a square to shake it. One shakes at constant strength, one decays
//! its offset, one wobbles its rotation. A square turns red while shaking
//! and can only be retriggered once its shake is over.

use super::{Demo, Frame};
use crate::config::{ShakeConfig, ShakeMode};
use crate::display::{PixelBuffer, Transform};
use geo::{Rect, Shaker, Vec2};

struct ShakyRect {
    rect: Rect,
    shaker: Shaker,
    mode: ShakeMode,
    shaking: bool,
}

impl ShakyRect {
    /// Position offset and rotation at time `t`
    fn pose(&self, t: f64) -> (Vec2, f64) {
        if !self.shaking {
            return (Vec2::ZERO, 0.0);
        }
        match self.mode {
            ShakeMode::Constant => (self.shaker.shake_const(t), 0.0),
            ShakeMode::Decaying => (self.shaker.shake(t), 0.0),
            ShakeMode::Angle => (Vec2::ZERO, self.shaker.shake1(t)),
        }
    }
}

pub struct ShakyRects {
    rects: Vec<ShakyRect>,
    time: f64,
}

impl ShakyRects {
    pub fn new(config: &ShakeConfig) -> Self {
        let rects = config
            .rects
            .iter()
            .map(|c| ShakyRect {
                rect: c.rect.normalized(),
                shaker: c.shaker,
                mode: c.mode,
                shaking: false,
            })
            .collect();
        Self { rects, time: 0.0 }
    }
}

impl Demo for ShakyRects {
    fn update(&mut self, frame: &Frame) {
        self.time = frame.time;
        for r in &mut self.rects {
            let mut over = frame.time > r.shaker.end_time();
            if over && r.rect.contains_point(frame.cursor.x, frame.cursor.y) {
                r.shaker.start(frame.time);
                over = false;
            }
            r.shaking = !over;
        }
    }

    fn render(&self, buffer: &mut PixelBuffer) {
        let mut transform = Transform::identity();
        for r in &self.rects {
            let (offset, angle) = r.pose(self.time);
            let half = r.rect.size() / 2.0;
            let pos = r.rect.top_left() + offset;

            // Rotate about the rect center
            transform
                .reset()
                .scale(r.rect.w, r.rect.h)
                .translate(-half.x, -half.y)
                .rotate(angle)
                .translate(half.x, half.y)
                .translate(pos.x, pos.y);

            if r.shaking {
                buffer.fill_quad(&transform, 255, 0, 0, 255);
            } else {
                buffer.fill_quad(&transform, 255, 255, 255, 255);
            }
        }
    }

    fn name(&self) -> &str {
        "Shake"
    }
}
