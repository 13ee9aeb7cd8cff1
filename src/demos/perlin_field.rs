//! Perlin Noise Demo
//!
//! Fills the whole buffer with grayscale octave noise and slides the z
//! slice forward over time, so the field drifts and morphs.

use super::{Demo, Frame};
use crate::config::PerlinConfig;
use crate::display::PixelBuffer;
use geo::Perlin;

pub struct PerlinField {
    field: Perlin,
    scale: f64,
    octaves: u32,
    persistence: f64,
    rate: f64,
    z: f64,
}

impl PerlinField {
    pub fn new(config: &PerlinConfig) -> Self {
        let field = match config.seed {
            Some(seed) => Perlin::with_seed(seed),
            None => Perlin::new(),
        };
        Self {
            field,
            scale: config.scale,
            octaves: config.octaves,
            persistence: config.persistence,
            rate: config.rate,
            z: 0.0,
        }
    }

    fn shade(&self, x: u32, y: u32) -> u8 {
        let v = self.field.octave(
            x as f64 * self.scale,
            y as f64 * self.scale,
            self.z,
            self.octaves,
            self.persistence,
        );
        (v.clamp(0.0, 1.0) * 255.0) as u8
    }
}

impl Demo for PerlinField {
    fn update(&mut self, frame: &Frame) {
        self.z += frame.dt * self.rate;
    }

    fn render(&self, buffer: &mut PixelBuffer) {
        let width = buffer.width();
        let count = (width * buffer.height()) as usize;
        for i in 0..count {
            let x = i as u32 % width;
            let y = i as u32 / width;
            buffer.set_gray(i, self.shade(x, y));
        }
    }

    fn name(&self) -> &str {
        "Perlin"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demos::test_frame;

    #[test]
    fn test_z_advances_with_time() {
        let mut demo = PerlinField::new(&PerlinConfig::default());
        demo.update(&test_frame(1.0, 1.0));
        demo.update(&test_frame(2.0, 1.0));
        assert!((demo.z - 0.6).abs() < 1e-12);
    }

    #[test]
    fn test_render_is_grayscale() {
        let demo = PerlinField::new(&PerlinConfig::default());
        let mut buffer = PixelBuffer::with_size(32, 16);
        demo.render(&mut buffer);
        for (x, y) in [(0, 0), (5, 3), (31, 15), (17, 9)] {
            let (r, g, b) = buffer.get_pixel(x, y).unwrap();
            assert_eq!(r, g);
            assert_eq!(g, b);
        }
        // Origin is a lattice point in every octave
        assert_eq!(buffer.get_pixel(0, 0), Some((127, 127, 127)));
    }

    #[test]
    fn test_seeded_field_differs() {
        let config = PerlinConfig {
            seed: Some(7),
            scale: 0.13,
            ..PerlinConfig::default()
        };
        let seeded = PerlinField::new(&config);
        let reference = PerlinField::new(&PerlinConfig {
            seed: None,
            ..config.clone()
        });
        let differs = (0..64).any(|i| seeded.shade(i, i / 2) != reference.shade(i, i / 2));
        assert!(differs);
    }
}
