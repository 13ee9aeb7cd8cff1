//! Shake/jitter offsets
//!
//! A `Shaker` turns a time value into a smooth pseudo-random offset, for
//! screen shake or hit feedback. Times are plain `f64` seconds from any
//! monotonic clock the caller chooses.

use crate::ease::Ease;
use crate::perlin::perlin;
use crate::vec::Vec2;
use serde::{Deserialize, Serialize};

// Noise rows for each axis. Off-lattice so the rows never sit on a zero plane.
const ROW_X: f64 = 0.5;
const ROW_Y: f64 = 31.5;
const ROW_ANGLE: f64 = 63.5;

fn never_started() -> f64 {
    f64::NEG_INFINITY
}

/// Time-seeded oscillating offset with optional decay
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Shaker {
    /// Shakers with the same seed and frequency move identically
    pub seed: f64,
    /// Runtime state, not part of the saved definition
    #[serde(skip, default = "never_started")]
    pub start_time: f64,
    /// Seconds the decaying shake lasts. Zero means the window is a single instant.
    pub duration: f64,
    /// Maximum offset from the rest position
    pub amplitude: f64,
    /// Noise samples per second; higher is more jittery
    pub frequency: f64,
    /// Curve driving amplitude decay over the duration. `None` decays linearly.
    pub falloff: Option<Ease>,
}

impl Shaker {
    pub fn new(amplitude: f64, frequency: f64) -> Self {
        Self {
            amplitude,
            frequency,
            ..Self::default()
        }
    }

    pub fn with_duration(mut self, duration: f64) -> Self {
        self.duration = duration.max(0.0);
        self
    }

    pub fn with_falloff(mut self, falloff: Ease) -> Self {
        self.falloff = Some(falloff);
        self
    }

    pub fn with_seed(mut self, seed: f64) -> Self {
        self.seed = seed;
        self
    }

    /// Restart the shake at time `t`
    pub fn start(&mut self, t: f64) {
        self.start_time = t;
    }

    pub fn end_time(&self) -> f64 {
        self.start_time + self.duration
    }

    /// True while `t` is inside the shake window (both ends inclusive)
    pub fn is_shaking(&self, t: f64) -> bool {
        t >= self.start_time && t <= self.end_time()
    }

    /// Fraction of the duration elapsed at `t`, in [0, 1]
    pub fn progress(&self, t: f64) -> f64 {
        if self.duration <= 0.0 {
            return 0.0;
        }
        ((t - self.start_time) / self.duration).clamp(0.0, 1.0)
    }

    /// Amplitude multiplier at `t`: 1 at the start, 0 at the end
    fn decay(&self, t: f64) -> f64 {
        let falloff = self.falloff.unwrap_or(Ease::Linear);
        1.0 - falloff.apply(self.progress(t))
    }

    /// Noise in [-1, 1] on the given row. Sampled on absolute time so that
    /// restarting the shake does not reset the motion.
    fn sample(&self, t: f64, row: f64) -> f64 {
        perlin(t * self.frequency, self.seed, row) * 2.0 - 1.0
    }

    /// Decaying 2D offset. Zero outside the shake window.
    pub fn shake(&self, t: f64) -> Vec2 {
        if !self.is_shaking(t) {
            return Vec2::ZERO;
        }
        self.shake_const(t) * self.decay(t)
    }

    /// 2D offset at full amplitude, ignoring the window and falloff
    pub fn shake_const(&self, t: f64) -> Vec2 {
        Vec2::new(self.sample(t, ROW_X), self.sample(t, ROW_Y)) * self.amplitude
    }

    /// Decaying 1D offset (e.g. an angle). Zero outside the shake window.
    pub fn shake1(&self, t: f64) -> f64 {
        if !self.is_shaking(t) {
            return 0.0;
        }
        self.shake1_const(t) * self.decay(t)
    }

    /// 1D offset at full amplitude
    pub fn shake1_const(&self, t: f64) -> f64 {
        self.sample(t, ROW_ANGLE) * self.amplitude
    }
}

impl Default for Shaker {
    fn default() -> Self {
        Self {
            seed: 0.0,
            start_time: never_started(),
            duration: 0.0,
            amplitude: 0.0,
            frequency: 0.0,
            falloff: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decaying() -> Shaker {
        Shaker::new(20.0, 20.0)
            .with_duration(2.0)
            .with_falloff(Ease::OutQuad)
    }

    #[test]
    fn test_not_shaking_until_started() {
        let shaker = decaying();
        assert!(!shaker.is_shaking(0.0));
        assert_eq!(shaker.shake(0.0), Vec2::ZERO);
        assert_eq!(shaker.shake1(0.0), 0.0);
    }

    #[test]
    fn test_window() {
        let mut shaker = decaying();
        shaker.start(10.0);
        assert_eq!(shaker.end_time(), 12.0);
        assert!(shaker.is_shaking(10.0));
        assert!(shaker.is_shaking(12.0));
        assert!(!shaker.is_shaking(9.99));
        assert!(!shaker.is_shaking(12.01));
        assert_eq!(shaker.shake(12.5), Vec2::ZERO);
    }

    #[test]
    fn test_bounded_by_amplitude() {
        let mut shaker = decaying();
        shaker.start(0.0);
        for i in 0..200 {
            let t = i as f64 * 0.01;
            let v = shaker.shake(t);
            assert!(v.x.abs() <= 20.0 && v.y.abs() <= 20.0);
            assert!(shaker.shake1(t).abs() <= 20.0);
        }
    }

    #[test]
    fn test_decays_to_rest() {
        let mut shaker = decaying();
        shaker.start(0.0);
        assert!(shaker.shake(2.0).len() < 1e-9);
        assert!(shaker.shake1(2.0).abs() < 1e-9);
        assert_eq!(shaker.progress(1.0), 0.5);
    }

    #[test]
    fn test_linear_falloff_by_default() {
        let mut shaker = Shaker::new(10.0, 10.0).with_duration(1.0);
        shaker.start(0.0);
        let t = 0.5137;
        let full = shaker.shake_const(t);
        let half = shaker.shake(t);
        assert!(half.approx_eq(full * (1.0 - t), 1e-9));
    }

    #[test]
    fn test_const_ignores_window() {
        let shaker = Shaker::new(10.0, 10.0);
        let moved = (0..50).any(|i| shaker.shake_const(i as f64 * 0.037).len() > 0.1);
        assert!(moved);
    }

    #[test]
    fn test_restarting_every_frame_still_moves() {
        let mut shaker = Shaker::new(10.0, 10.0);
        let mut samples = Vec::new();
        for i in 0..10 {
            let t = 1.0 + i as f64 / 60.0;
            shaker.start(t);
            samples.push(shaker.shake_const(t));
        }
        assert!(samples.windows(2).any(|w| w[0] != w[1]));
    }

    #[test]
    fn test_axes_decorrelated() {
        let shaker = Shaker::new(10.0, 10.0);
        let same = (0..500)
            .map(|i| shaker.shake_const(i as f64 * 0.013))
            .filter(|v| v.x == v.y)
            .count();
        assert!(same < 10, "{} samples on the diagonal", same);

        let turned = (0..500).any(|i| {
            let t = i as f64 * 0.013;
            shaker.shake1_const(t) != shaker.shake_const(t).x
        });
        assert!(turned);
    }

    #[test]
    fn test_seed_changes_motion() {
        let a = Shaker::new(10.0, 10.0).with_seed(1.25);
        let b = Shaker::new(10.0, 10.0).with_seed(7.75);
        let differs = (0..20).any(|i| {
            let t = i as f64 * 0.05;
            a.shake_const(t) != b.shake_const(t)
        });
        assert!(differs);
    }

    #[test]
    fn test_serde_skips_runtime_state() {
        let mut shaker = decaying();
        shaker.start(5.0);
        let json = serde_json::to_string(&shaker).unwrap();
        assert!(!json.contains("start_time"));
        let back: Shaker = serde_json::from_str(&json).unwrap();
        assert_eq!(back.amplitude, 20.0);
        assert_eq!(back.falloff, Some(Ease::OutQuad));
        assert!(!back.is_shaking(5.0));
    }
}
