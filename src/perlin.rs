//! Perlin Noise
//!
//! Ken Perlin's improved gradient noise in 3D, plus octave summing for
//! texture. Both return values remapped to [0.0, 1.0] so they can be used
//! directly as intensities.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Reference permutation from Perlin's paper
const PERMUTATION: [u8; 256] = [
    151, 160, 137, 91, 90, 15, 131, 13, 201, 95, 96, 53, 194, 233, 7, 225, 140, 36, 103, 30, 69,
    142, 8, 99, 37, 240, 21, 10, 23, 190, 6, 148, 247, 120, 234, 75, 0, 26, 197, 62, 94, 252, 219,
    203, 117, 35, 11, 32, 57, 177, 33, 88, 237, 149, 56, 87, 174, 20, 125, 136, 171, 168, 68, 175,
    74, 165, 71, 134, 139, 48, 27, 166, 77, 146, 158, 231, 83, 111, 229, 122, 60, 211, 133, 230,
    220, 105, 92, 41, 55, 46, 245, 40, 244, 102, 143, 54, 65, 25, 63, 161, 1, 216, 80, 73, 209, 76,
    132, 187, 208, 89, 18, 169, 200, 196, 135, 130, 116, 188, 159, 86, 164, 100, 109, 198, 173, 186,
    3, 64, 52, 217, 226, 250, 124, 123, 5, 202, 38, 147, 118, 126, 255, 82, 85, 212, 207, 206, 59,
    227, 47, 16, 58, 17, 182, 189, 28, 42, 223, 183, 170, 213, 119, 248, 152, 2, 44, 154, 163, 70,
    221, 153, 101, 155, 167, 43, 172, 9, 129, 22, 39, 253, 19, 98, 108, 110, 79, 113, 224, 232, 178,
    185, 112, 104, 218, 246, 97, 228, 251, 34, 242, 193, 238, 210, 144, 12, 191, 179, 162, 241, 81,
    51, 145, 235, 249, 14, 239, 107, 49, 192, 214, 31, 181, 199, 106, 157, 184, 84, 204, 176, 115,
    121, 50, 45, 127, 4, 150, 254, 138, 236, 205, 93, 222, 114, 67, 29, 24, 72, 243, 141, 128, 195,
    78, 66, 215, 61, 156, 180,
];

/// Repeat the table so lookups like `perm[perm[x] + y]` never wrap
const fn doubled(p: &[u8; 256]) -> [u8; 512] {
    let mut out = [0u8; 512];
    let mut i = 0;
    while i < 512 {
        out[i] = p[i & 255];
        i += 1;
    }
    out
}

static REFERENCE: Perlin = Perlin {
    perm: doubled(&PERMUTATION),
};

/// Sample reference Perlin noise at (x, y, z). Returns a value in [0.0, 1.0];
/// integer lattice points always give exactly 0.5.
pub fn perlin(x: f64, y: f64, z: f64) -> f64 {
    REFERENCE.noise(x, y, z)
}

/// Sum `octaves` layers of reference noise. Each octave doubles the frequency
/// and multiplies the amplitude by `persistence`. The sum is normalized by the
/// total amplitude, so the result stays in [0.0, 1.0].
pub fn perlin_octave(x: f64, y: f64, z: f64, octaves: u32, persistence: f64) -> f64 {
    REFERENCE.octave(x, y, z, octaves, persistence)
}

/// Quintic fade curve: 6t⁵ - 15t⁴ + 10t³
#[inline]
fn fade(t: f64) -> f64 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

#[inline]
fn lerp(t: f64, a: f64, b: f64) -> f64 {
    a + t * (b - a)
}

/// Dot product with one of 12 cube-edge gradients picked by the hash
#[inline]
fn grad(hash: u8, x: f64, y: f64, z: f64) -> f64 {
    let h = hash & 15;
    let u = if h < 8 { x } else { y };
    let v = if h < 4 {
        y
    } else if h == 12 || h == 14 {
        x
    } else {
        z
    };
    (if h & 1 == 0 { u } else { -u }) + (if h & 2 == 0 { v } else { -v })
}

/// A Perlin noise field defined by its permutation table
#[derive(Clone)]
pub struct Perlin {
    perm: [u8; 512],
}

impl Perlin {
    /// Field using the reference permutation (same as [`perlin`])
    pub fn new() -> Self {
        REFERENCE.clone()
    }

    /// Field with a permutation shuffled from `seed`. Equal seeds give equal fields.
    pub fn with_seed(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut table: Vec<u8> = (0..=255).collect();
        table.shuffle(&mut rng);

        let mut perm = [0u8; 512];
        for (i, slot) in perm.iter_mut().enumerate() {
            *slot = table[i & 255];
        }
        Self { perm }
    }

    #[inline]
    fn p(&self, i: usize) -> usize {
        self.perm[i] as usize
    }

    /// Raw gradient noise in roughly [-1, 1]
    fn raw(&self, x: f64, y: f64, z: f64) -> f64 {
        let xf = x.floor();
        let yf = y.floor();
        let zf = z.floor();
        // Wrap the unit cube coordinates into the table
        let xi = (xf as i64 & 255) as usize;
        let yi = (yf as i64 & 255) as usize;
        let zi = (zf as i64 & 255) as usize;

        let x = x - xf;
        let y = y - yf;
        let z = z - zf;
        let u = fade(x);
        let v = fade(y);
        let w = fade(z);

        // Hash the 8 cube corners
        let a = self.p(xi) + yi;
        let aa = self.p(a) + zi;
        let ab = self.p(a + 1) + zi;
        let b = self.p(xi + 1) + yi;
        let ba = self.p(b) + zi;
        let bb = self.p(b + 1) + zi;

        let perm = &self.perm;
        lerp(
            w,
            lerp(
                v,
                lerp(u, grad(perm[aa], x, y, z), grad(perm[ba], x - 1.0, y, z)),
                lerp(
                    u,
                    grad(perm[ab], x, y - 1.0, z),
                    grad(perm[bb], x - 1.0, y - 1.0, z),
                ),
            ),
            lerp(
                v,
                lerp(
                    u,
                    grad(perm[aa + 1], x, y, z - 1.0),
                    grad(perm[ba + 1], x - 1.0, y, z - 1.0),
                ),
                lerp(
                    u,
                    grad(perm[ab + 1], x, y - 1.0, z - 1.0),
                    grad(perm[bb + 1], x - 1.0, y - 1.0, z - 1.0),
                ),
            ),
        )
    }

    /// Noise at (x, y, z) in [0.0, 1.0]
    pub fn noise(&self, x: f64, y: f64, z: f64) -> f64 {
        ((self.raw(x, y, z) + 1.0) / 2.0).clamp(0.0, 1.0)
    }

    /// Octave-summed noise in [0.0, 1.0]. Zero octaves gives the midpoint 0.5.
    pub fn octave(&self, x: f64, y: f64, z: f64, octaves: u32, persistence: f64) -> f64 {
        let mut total = 0.0;
        let mut frequency = 1.0;
        let mut amplitude = 1.0;
        let mut max_value = 0.0;
        for _ in 0..octaves {
            total += self.noise(x * frequency, y * frequency, z * frequency) * amplitude;
            max_value += amplitude;
            amplitude *= persistence;
            frequency *= 2.0;
        }
        if max_value.abs() < f64::EPSILON {
            return 0.5;
        }
        (total / max_value).clamp(0.0, 1.0)
    }
}

impl Default for Perlin {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permutation_is_complete() {
        let mut seen = [false; 256];
        for &v in &PERMUTATION {
            seen[v as usize] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_lattice_points_are_midpoint() {
        for i in -3..3 {
            let v = perlin(i as f64, (i * 2) as f64, 7.0);
            assert!((v - 0.5).abs() < 1e-12);
        }
    }

    #[test]
    fn test_perlin_deterministic() {
        assert_eq!(perlin(1.3, 4.7, 0.2), perlin(1.3, 4.7, 0.2));
        assert_eq!(Perlin::new().noise(0.3, 0.6, 0.9), perlin(0.3, 0.6, 0.9));
    }

    #[test]
    fn test_perlin_range() {
        for x in 0..40 {
            for y in 0..40 {
                let v = perlin(x as f64 * 0.137, y as f64 * 0.291, 0.5);
                assert!((0.0..=1.0).contains(&v));
            }
        }
    }

    #[test]
    fn test_perlin_continuity() {
        for i in 0..200 {
            let x = i as f64 * 0.05;
            let v1 = perlin(x, 0.3, 0.7);
            let v2 = perlin(x + 0.001, 0.3, 0.7);
            assert!((v1 - v2).abs() < 0.01, "Noise discontinuity at x={}", x);
        }
    }

    #[test]
    fn test_negative_coordinates() {
        let v = perlin(-12.25, -3.5, -0.75);
        assert!((0.0..=1.0).contains(&v));
        // Wraps into the same table as positive coordinates 256 units away
        assert!((v - perlin(-12.25 + 256.0, -3.5 + 256.0, -0.75 + 256.0)).abs() < 1e-9);
    }

    #[test]
    fn test_octave_single_matches_noise() {
        assert_eq!(perlin_octave(0.42, 1.7, 3.3, 1, 0.5), perlin(0.42, 1.7, 3.3));
    }

    #[test]
    fn test_octave_range_and_zero() {
        assert_eq!(perlin_octave(1.1, 2.2, 3.3, 0, 0.5), 0.5);
        for i in 0..100 {
            let v = perlin_octave(i as f64 * 0.01 * 3.2, i as f64 * 0.017, 0.1, 5, 0.5);
            assert!((0.0..=1.0).contains(&v));
        }
    }

    #[test]
    fn test_seeded_fields() {
        let a = Perlin::with_seed(7);
        let b = Perlin::with_seed(7);
        let c = Perlin::with_seed(8);
        let p = (0.25, 0.75, 0.5);
        assert_eq!(a.noise(p.0, p.1, p.2), b.noise(p.0, p.1, p.2));
        let differs = (0..20).any(|i| {
            let x = i as f64 * 0.31 + 0.1;
            a.noise(x, p.1, p.2) != c.noise(x, p.1, p.2)
        });
        assert!(differs);
    }
}
