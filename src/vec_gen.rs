//! Random point generators
//!
//! Generators are plain data so they can be composed, cloned and loaded from
//! a config file. Call [`VecGen::generate`] with any `rand` RNG.

use crate::rect::Rect;
use crate::vec::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VecGen {
    /// Always the same vector
    Static(Vec2),
    /// Sum of two generators, typically a shape plus a static position
    Offset(Box<VecGen>, Box<VecGen>),
    /// Uniform over the annulus `min_radius..=max_radius` around the origin
    Circle { min_radius: f64, max_radius: f64 },
    /// Uniform over an annular sector; angles in radians, start to end
    Arc {
        min_radius: f64,
        max_radius: f64,
        start_angle: f64,
        end_angle: f64,
    },
    /// Uniform inside a rectangle
    Rect(Rect),
    /// Uniform over the union of rectangles, each picked in proportion to its area
    Rects(Vec<Rect>),
}

impl VecGen {
    pub fn static_vec(v: Vec2) -> Self {
        VecGen::Static(v)
    }

    pub fn offset(generator: VecGen, offset: VecGen) -> Self {
        VecGen::Offset(Box::new(generator), Box::new(offset))
    }

    pub fn circle(min_radius: f64, max_radius: f64) -> Self {
        VecGen::Circle {
            min_radius,
            max_radius,
        }
    }

    pub fn arc(min_radius: f64, max_radius: f64, start_angle: f64, end_angle: f64) -> Self {
        VecGen::Arc {
            min_radius,
            max_radius,
            start_angle,
            end_angle,
        }
    }

    pub fn rect(rect: Rect) -> Self {
        VecGen::Rect(rect)
    }

    pub fn rects(rects: Vec<Rect>) -> Self {
        VecGen::Rects(rects)
    }

    /// Draw one point
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec2 {
        match self {
            VecGen::Static(v) => *v,
            VecGen::Offset(generator, offset) => generator.generate(rng) + offset.generate(rng),
            VecGen::Circle {
                min_radius,
                max_radius,
            } => {
                let angle = rng.gen::<f64>() * std::f64::consts::TAU;
                Vec2::from_polar(area_uniform_radius(rng, *min_radius, *max_radius), angle)
            },
            VecGen::Arc {
                min_radius,
                max_radius,
                start_angle,
                end_angle,
            } => {
                let angle = start_angle + rng.gen::<f64>() * (end_angle - start_angle);
                Vec2::from_polar(area_uniform_radius(rng, *min_radius, *max_radius), angle)
            },
            VecGen::Rect(rect) => point_in_rect(rng, rect),
            VecGen::Rects(rects) => match pick_by_area(rng, rects) {
                Some(rect) => point_in_rect(rng, rect),
                None => Vec2::ZERO,
            },
        }
    }
}

/// Radius whose distribution is uniform over the annulus area rather than
/// uniform in length, so points do not bunch up near the center
fn area_uniform_radius<R: Rng + ?Sized>(rng: &mut R, min_radius: f64, max_radius: f64) -> f64 {
    let (lo, hi) = if min_radius <= max_radius {
        (min_radius.max(0.0), max_radius.max(0.0))
    } else {
        (max_radius.max(0.0), min_radius.max(0.0))
    };
    let lo2 = lo * lo;
    let hi2 = hi * hi;
    (lo2 + rng.gen::<f64>() * (hi2 - lo2)).sqrt()
}

fn point_in_rect<R: Rng + ?Sized>(rng: &mut R, rect: &Rect) -> Vec2 {
    let r = rect.normalized();
    Vec2::new(
        r.x + rng.gen::<f64>() * r.w,
        r.y + rng.gen::<f64>() * r.h,
    )
}

/// Area-weighted choice. Falls back to a uniform choice when every rect is
/// degenerate; `None` only for an empty slice.
fn pick_by_area<'a, R: Rng + ?Sized>(rng: &mut R, rects: &'a [Rect]) -> Option<&'a Rect> {
    if rects.is_empty() {
        return None;
    }
    let total: f64 = rects.iter().map(Rect::area).sum();
    if total <= 0.0 {
        return rects.get(rng.gen_range(0..rects.len()));
    }

    let mut pick = rng.gen::<f64>() * total;
    for rect in rects {
        let area = rect.area();
        if pick < area {
            return Some(rect);
        }
        pick -= area;
    }
    // Float rounding can leave `pick` just past the last rect
    rects.iter().rev().find(|r| r.area() > 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

    fn rng() -> StdRng {
        StdRng::seed_from_u64(0x5eed)
    }

    #[test]
    fn test_static_and_offset() {
        let mut rng = rng();
        let g = VecGen::offset(
            VecGen::static_vec(Vec2::new(1.0, 2.0)),
            VecGen::static_vec(Vec2::new(10.0, 20.0)),
        );
        assert_eq!(g.generate(&mut rng), Vec2::new(11.0, 22.0));
    }

    #[test]
    fn test_circle_radius_bounds() {
        let mut rng = rng();
        let center = Vec2::new(120.0, 80.0);
        let g = VecGen::offset(VecGen::circle(0.0, 40.0), VecGen::static_vec(center));
        for _ in 0..1000 {
            let p = g.generate(&mut rng);
            assert!(p.dist(center) <= 40.0 + 1e-9);
        }

        let ring = VecGen::circle(30.0, 50.0);
        for _ in 0..1000 {
            let d = ring.generate(&mut rng).len();
            assert!((30.0 - 1e-9..=50.0 + 1e-9).contains(&d));
        }
    }

    #[test]
    fn test_circle_is_area_uniform() {
        // Half the area of a disc lies outside radius r/sqrt(2)
        let mut rng = rng();
        let g = VecGen::circle(0.0, 1.0);
        let n = 20_000;
        let outside = (0..n)
            .filter(|_| g.generate(&mut rng).len() > std::f64::consts::FRAC_1_SQRT_2)
            .count();
        let ratio = outside as f64 / n as f64;
        assert!((ratio - 0.5).abs() < 0.03, "ratio {}", ratio);
    }

    #[test]
    fn test_arc_angle_bounds() {
        let mut rng = rng();
        let g = VecGen::arc(30.0, 50.0, -FRAC_PI_2, FRAC_PI_4);
        for _ in 0..1000 {
            let p = g.generate(&mut rng);
            let a = p.angle();
            assert!((-FRAC_PI_2 - 1e-9..=FRAC_PI_4 + 1e-9).contains(&a), "angle {}", a);
            assert!((30.0 - 1e-9..=50.0 + 1e-9).contains(&p.len()));
        }
    }

    #[test]
    fn test_rect_bounds() {
        let mut rng = rng();
        let r = Rect::xywh(80.0, 130.0, 200.0, 10.0);
        let g = VecGen::rect(r);
        for _ in 0..1000 {
            let p = g.generate(&mut rng);
            assert!(r.contains_point(p.x, p.y));
        }
    }

    #[test]
    fn test_rects_weighted_by_area() {
        let mut rng = rng();
        let big = Rect::xywh(0.0, 0.0, 90.0, 10.0);
        let small = Rect::xywh(100.0, 0.0, 10.0, 10.0);
        let g = VecGen::rects(vec![big, small]);
        let n = 10_000;
        let in_small = (0..n)
            .map(|_| g.generate(&mut rng))
            .filter(|p| small.contains_point(p.x, p.y))
            .count();
        let ratio = in_small as f64 / n as f64;
        assert!((ratio - 0.1).abs() < 0.02, "ratio {}", ratio);
    }

    #[test]
    fn test_rects_edge_cases() {
        let mut rng = rng();
        assert_eq!(VecGen::rects(Vec::new()).generate(&mut rng), Vec2::ZERO);

        let line = Rect::xywh(5.0, 5.0, 0.0, 10.0);
        let p = VecGen::rects(vec![line]).generate(&mut rng);
        assert_eq!(p.x, 5.0);
    }

    #[test]
    fn test_serde_round_trip_keeps_structure() {
        let g = VecGen::offset(
            VecGen::arc(30.0, 50.0, -FRAC_PI_2, FRAC_PI_4),
            VecGen::static_vec(Vec2::new(220.0, 70.0)),
        );
        let json = serde_json::to_string(&g).unwrap();
        let back: VecGen = serde_json::from_str(&json).unwrap();
        assert_eq!(g, back);
    }
}
