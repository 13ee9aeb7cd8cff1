//! Axis-aligned rectangles with a top-left origin and y pointing down

use crate::math::clamp;
use crate::vec::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle with a top-left origin
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub const fn xywh(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    /// Rectangle spanning two opposite corners, given in any order
    pub fn from_corners(a: Vec2, b: Vec2) -> Self {
        let x = a.x.min(b.x);
        let y = a.y.min(b.y);
        Self::xywh(x, y, (a.x - b.x).abs(), (a.y - b.y).abs())
    }

    pub fn from_center(center: Vec2, w: f64, h: f64) -> Self {
        Self::xywh(center.x - w / 2.0, center.y - h / 2.0, w, h)
    }

    /// Flip negative extents so that `w` and `h` are non-negative
    pub fn normalized(self) -> Self {
        let mut r = self;
        if r.w < 0.0 {
            r.x += r.w;
            r.w = -r.w;
        }
        if r.h < 0.0 {
            r.y += r.h;
            r.h = -r.h;
        }
        r
    }

    #[inline]
    pub fn left(&self) -> f64 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> f64 {
        self.x + self.w
    }

    #[inline]
    pub fn top(&self) -> f64 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> f64 {
        self.y + self.h
    }

    pub fn top_left(&self) -> Vec2 {
        Vec2::new(self.left(), self.top())
    }

    pub fn top_right(&self) -> Vec2 {
        Vec2::new(self.right(), self.top())
    }

    pub fn bottom_left(&self) -> Vec2 {
        Vec2::new(self.left(), self.bottom())
    }

    pub fn bottom_right(&self) -> Vec2 {
        Vec2::new(self.right(), self.bottom())
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.w, self.h)
    }

    pub fn area(&self) -> f64 {
        (self.w * self.h).abs()
    }

    /// Half-open containment: the left/top edges are inside, right/bottom are not
    pub fn contains_point(&self, x: f64, y: f64) -> bool {
        x >= self.left() && x < self.right() && y >= self.top() && y < self.bottom()
    }

    /// True if the interiors overlap (touching edges do not count)
    pub fn collides_rect(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }

    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        if !self.collides_rect(other) {
            return None;
        }
        let left = self.left().max(other.left());
        let top = self.top().max(other.top());
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        Some(Rect::xywh(left, top, right - left, bottom - top))
    }

    /// Smallest rectangle containing both
    pub fn union(&self, other: &Rect) -> Rect {
        let left = self.left().min(other.left());
        let top = self.top().min(other.top());
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());
        Rect::xywh(left, top, right - left, bottom - top)
    }

    pub fn translated(&self, offset: Vec2) -> Rect {
        Rect::xywh(self.x + offset.x, self.y + offset.y, self.w, self.h)
    }

    /// Grow by `dx`/`dy` on every side (negative shrinks), keeping the center
    pub fn inflated(&self, dx: f64, dy: f64) -> Rect {
        Rect::xywh(self.x - dx, self.y - dy, self.w + 2.0 * dx, self.h + 2.0 * dy)
    }

    pub fn with_center(&self, center: Vec2) -> Rect {
        Rect::from_center(center, self.w, self.h)
    }

    /// Nearest point inside the rectangle (edges inclusive)
    pub fn clamp_point(&self, p: Vec2) -> Vec2 {
        Vec2::new(
            clamp(p.x, self.left(), self.right()),
            clamp(p.y, self.top(), self.bottom()),
        )
    }
}
