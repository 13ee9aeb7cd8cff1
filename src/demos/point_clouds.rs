//! Random Point Clouds Demo
//!
//! Point clouds drawn from composed generators: a filled disc, an arc band
//! and a rectangular frame. Each frame one point per cloud is replaced, so
//! the clouds shimmer without changing shape.

use super::{Demo, Frame};
use crate::config::VecGenConfig;
use crate::display::{PixelBuffer, Transform};
use geo::{Rect, Vec2, VecGen};
use rand::rngs::StdRng;
use rand::Rng;

const BACKDROP: Rect = Rect::xywh(80.0, 130.0, 200.0, 70.0);
const BACKDROP_COLOR: (u8, u8, u8, u8) = (0x88, 0x88, 0xff, 0x55);
const CUTOUT: Rect = Rect::xywh(100.0, 140.0, 160.0, 50.0);

struct PointSet {
    generator: VecGen,
    points: Vec<Vec2>,
}

pub struct PointClouds {
    sets: Vec<PointSet>,
    point_size: f64,
    rng: StdRng,
}

impl PointClouds {
    pub fn new(config: &VecGenConfig, mut rng: StdRng) -> Self {
        let sets = config
            .sets
            .iter()
            .map(|set| PointSet {
                points: (0..set.count)
                    .map(|_| set.generator.generate(&mut rng))
                    .collect(),
                generator: set.generator.clone(),
            })
            .collect();
        Self {
            sets,
            point_size: config.point_size,
            rng,
        }
    }

    fn fill_rect(
        buffer: &mut PixelBuffer,
        transform: &mut Transform,
        rect: Rect,
        color: (u8, u8, u8, u8),
    ) {
        transform.reset().scale(rect.w, rect.h).translate(rect.x, rect.y);
        buffer.fill_quad(transform, color.0, color.1, color.2, color.3);
    }
}

impl Demo for PointClouds {
    fn update(&mut self, _frame: &Frame) {
        for set in &mut self.sets {
            if set.points.is_empty() {
                continue;
            }
            let i = self.rng.gen_range(0..set.points.len());
            set.points[i] = set.generator.generate(&mut self.rng);
        }
    }

    fn render(&self, buffer: &mut PixelBuffer) {
        let mut transform = Transform::identity();
        Self::fill_rect(buffer, &mut transform, BACKDROP, BACKDROP_COLOR);
        Self::fill_rect(buffer, &mut transform, CUTOUT, (0, 0, 0, 255));

        let size = self.point_size;
        let half = size / 2.0;
        for set in &self.sets {
            for p in &set.points {
                Self::fill_rect(
                    buffer,
                    &mut transform,
                    Rect::xywh(p.x - half, p.y - half, size, size),
                    (255, 255, 255, 255),
                );
            }
        }
    }

    fn name(&self) -> &str {
        "VecGen"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PointSetConfig;
    use crate::demos::test_frame;
    use rand::SeedableRng;

    fn demo(config: &VecGenConfig) -> PointClouds {
        PointClouds::new(config, StdRng::seed_from_u64(0x5eed))
    }

    #[test]
    fn test_point_counts() {
        let demo = demo(&VecGenConfig::default());
        let counts: Vec<usize> = demo.sets.iter().map(|s| s.points.len()).collect();
        assert_eq!(counts, vec![250, 150, 300]);
    }

    #[test]
    fn test_update_replaces_at_most_one_point_per_set() {
        let mut demo = demo(&VecGenConfig::default());
        let before: Vec<Vec<Vec2>> = demo.sets.iter().map(|s| s.points.clone()).collect();
        demo.update(&test_frame(0.0, 0.016));
        for (set, old) in demo.sets.iter().zip(&before) {
            assert_eq!(set.points.len(), old.len());
            let changed = set.points.iter().zip(old).filter(|(a, b)| a != b).count();
            assert!(changed <= 1);
        }
    }

    #[test]
    fn test_empty_set_is_skipped() {
        let config = VecGenConfig {
            point_size: 2.0,
            sets: vec![PointSetConfig {
                count: 0,
                generator: VecGen::circle(0.0, 10.0),
            }],
        };
        let mut demo = demo(&config);
        demo.update(&test_frame(0.0, 0.016));
        assert!(demo.sets[0].points.is_empty());
    }

    #[test]
    fn test_frame_points_stay_on_frame() {
        let demo = demo(&VecGenConfig::default());
        for p in &demo.sets[2].points {
            assert!(BACKDROP.contains_point(p.x, p.y));
            assert!(!CUTOUT.contains_point(p.x, p.y));
        }
    }

    #[test]
    fn test_render_backdrop() {
        let config = VecGenConfig {
            point_size: 2.0,
            sets: Vec::new(),
        };
        let demo = demo(&config);
        let mut buffer = PixelBuffer::with_size(320, 240);
        demo.render(&mut buffer);

        // Translucent border over black, opaque black cutout
        let (r, g, b) = buffer.get_pixel(85, 135).unwrap();
        assert!(r > 0 && r == g && b > r);
        assert_eq!(buffer.get_pixel(150, 160), Some((0, 0, 0)));
        assert_eq!(buffer.get_pixel(10, 10), Some((0, 0, 0)));
    }

    #[test]
    fn test_render_point() {
        let config = VecGenConfig {
            point_size: 2.0,
            sets: vec![PointSetConfig {
                count: 1,
                generator: VecGen::static_vec(Vec2::new(20.0, 20.0)),
            }],
        };
        let demo = demo(&config);
        let mut buffer = PixelBuffer::with_size(320, 240);
        demo.render(&mut buffer);
        for (x, y) in [(19, 19), (20, 19), (19, 20), (20, 20)] {
            assert_eq!(buffer.get_pixel(x, y), Some((255, 255, 255)));
        }
        assert_eq!(buffer.get_pixel(21, 20), Some((0, 0, 0)));
    }
}
