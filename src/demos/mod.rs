mod ease_curves;
mod perlin_field;
mod point_clouds;
mod shaky_rects;

pub use ease_curves::EaseCurves;
pub use perlin_field::PerlinField;
pub use point_clouds::PointClouds;
pub use shaky_rects::ShakyRects;

use crate::display::PixelBuffer;
use geo::Vec2;

/// Per-frame inputs shared by every demo
#[derive(Debug, Clone, Copy)]
pub struct Frame {
    /// Seconds since the previous frame
    pub dt: f64,
    /// Seconds since startup, monotonic
    pub time: f64,
    /// Cursor in buffer coordinates
    pub cursor: Vec2,
    /// Buffer width in pixels
    pub width: u32,
}

/// Trait for all showcase demos
pub trait Demo {
    /// Advance state; only called while the demo is selected
    fn update(&mut self, frame: &Frame);

    /// Draw into a buffer that has already been cleared to black
    fn render(&self, buffer: &mut PixelBuffer);

    /// Name shown in the options overlay
    fn name(&self) -> &str;
}

#[cfg(test)]
pub(crate) fn test_frame(time: f64, dt: f64) -> Frame {
    Frame {
        dt,
        time,
        cursor: Vec2::new(-1.0, -1.0),
        width: 320,
    }
}
