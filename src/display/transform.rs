//! Affine transform for placing quads
//!
//! Operations are applied in call order: `scale` then `translate` moves the
//! scaled shape, the same way a 2D "geometry matrix" is built up in most
//! immediate-mode drawing APIs.

use geo::Vec2;

/// 2x3 affine matrix `[a b tx; c d ty]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    a: f64,
    b: f64,
    c: f64,
    d: f64,
    tx: f64,
    ty: f64,
}

impl Transform {
    pub const fn identity() -> Self {
        Self {
            a: 1.0,
            b: 0.0,
            c: 0.0,
            d: 1.0,
            tx: 0.0,
            ty: 0.0,
        }
    }

    pub fn reset(&mut self) -> &mut Self {
        *self = Self::identity();
        self
    }

    pub fn scale(&mut self, sx: f64, sy: f64) -> &mut Self {
        self.a *= sx;
        self.b *= sx;
        self.tx *= sx;
        self.c *= sy;
        self.d *= sy;
        self.ty *= sy;
        self
    }

    pub fn translate(&mut self, dx: f64, dy: f64) -> &mut Self {
        self.tx += dx;
        self.ty += dy;
        self
    }

    /// Rotate about the origin by `theta` radians (clockwise on screen, since y points down)
    pub fn rotate(&mut self, theta: f64) -> &mut Self {
        let (sin, cos) = theta.sin_cos();
        let (a, b, c, d, tx, ty) = (self.a, self.b, self.c, self.d, self.tx, self.ty);
        self.a = cos * a - sin * c;
        self.b = cos * b - sin * d;
        self.tx = cos * tx - sin * ty;
        self.c = sin * a + cos * c;
        self.d = sin * b + cos * d;
        self.ty = sin * tx + cos * ty;
        self
    }

    #[inline]
    pub fn apply(&self, p: Vec2) -> Vec2 {
        Vec2::new(
            self.a * p.x + self.b * p.y + self.tx,
            self.c * p.x + self.d * p.y + self.ty,
        )
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}
