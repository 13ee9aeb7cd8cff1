//! 2D geometry and animation utilities
//!
//! Vectors, rectangles, easing curves, Perlin noise, shake/jitter offsets and
//! random point generators. Everything here is plain math with no rendering
//! dependency; the `geo-examples` binary draws these each frame.

pub mod ease;
pub mod math;
pub mod perlin;
pub mod rect;
pub mod shake;
pub mod vec;
pub mod vec_gen;

pub use ease::{ease, ease_vec, Ease, EaseFn};
pub use math::{clamp, lerp, map_range};
pub use perlin::{perlin, perlin_octave, Perlin};
pub use rect::Rect;
pub use shake::Shaker;
pub use vec::Vec2;
pub use vec_gen::VecGen;
