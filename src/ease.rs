//! Easing curves
//!
//! Each curve maps normalized time in [0, 1] to progress, with `f(0) = 0`
//! and `f(1) = 1`. Elastic and back curves overshoot in between. The
//! equations are Robert Penner's.

use crate::math::clamp;
use crate::vec::Vec2;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Plain function pointer form of a curve
pub type EaseFn = fn(f64) -> f64;

/// Interpolate between `start` and `end`. `t` is clamped to [0, 1] before easing.
pub fn ease(start: f64, end: f64, t: f64, f: EaseFn) -> f64 {
    start + (end - start) * f(clamp(t, 0.0, 1.0))
}

/// Vector version of [`ease`]
pub fn ease_vec(start: Vec2, end: Vec2, t: f64, f: EaseFn) -> Vec2 {
    start + (end - start) * f(clamp(t, 0.0, 1.0))
}

// ============================================================================
// Curves
// ============================================================================

const BACK_C1: f64 = 1.70158;
const BACK_C2: f64 = BACK_C1 * 1.525;
const BACK_C3: f64 = BACK_C1 + 1.0;
const ELASTIC_C4: f64 = (2.0 * PI) / 3.0;
const ELASTIC_C5: f64 = (2.0 * PI) / 4.5;

pub fn linear(t: f64) -> f64 {
    t
}

pub fn in_quad(t: f64) -> f64 {
    t * t
}

pub fn out_quad(t: f64) -> f64 {
    1.0 - (1.0 - t) * (1.0 - t)
}

pub fn in_out_quad(t: f64) -> f64 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}

pub fn in_cubic(t: f64) -> f64 {
    t * t * t
}

pub fn out_cubic(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(3)
}

pub fn in_out_cubic(t: f64) -> f64 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

pub fn in_quart(t: f64) -> f64 {
    t.powi(4)
}

pub fn out_quart(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(4)
}

pub fn in_out_quart(t: f64) -> f64 {
    if t < 0.5 {
        8.0 * t.powi(4)
    } else {
        1.0 - (-2.0 * t + 2.0).powi(4) / 2.0
    }
}

pub fn in_quint(t: f64) -> f64 {
    t.powi(5)
}

pub fn out_quint(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(5)
}

pub fn in_out_quint(t: f64) -> f64 {
    if t < 0.5 {
        16.0 * t.powi(5)
    } else {
        1.0 - (-2.0 * t + 2.0).powi(5) / 2.0
    }
}

pub fn in_sine(t: f64) -> f64 {
    1.0 - (t * PI / 2.0).cos()
}

pub fn out_sine(t: f64) -> f64 {
    (t * PI / 2.0).sin()
}

pub fn in_out_sine(t: f64) -> f64 {
    -((PI * t).cos() - 1.0) / 2.0
}

pub fn in_circ(t: f64) -> f64 {
    1.0 - (1.0 - t * t).max(0.0).sqrt()
}

pub fn out_circ(t: f64) -> f64 {
    (1.0 - (t - 1.0).powi(2)).max(0.0).sqrt()
}

pub fn in_out_circ(t: f64) -> f64 {
    if t < 0.5 {
        (1.0 - (1.0 - (2.0 * t).powi(2)).max(0.0).sqrt()) / 2.0
    } else {
        ((1.0 - (-2.0 * t + 2.0).powi(2)).max(0.0).sqrt() + 1.0) / 2.0
    }
}

pub fn in_expo(t: f64) -> f64 {
    if t <= 0.0 {
        0.0
    } else {
        2f64.powf(10.0 * t - 10.0)
    }
}

pub fn out_expo(t: f64) -> f64 {
    if t >= 1.0 {
        1.0
    } else {
        1.0 - 2f64.powf(-10.0 * t)
    }
}

pub fn in_out_expo(t: f64) -> f64 {
    if t <= 0.0 {
        0.0
    } else if t >= 1.0 {
        1.0
    } else if t < 0.5 {
        2f64.powf(20.0 * t - 10.0) / 2.0
    } else {
        (2.0 - 2f64.powf(-20.0 * t + 10.0)) / 2.0
    }
}

pub fn in_elastic(t: f64) -> f64 {
    if t <= 0.0 {
        0.0
    } else if t >= 1.0 {
        1.0
    } else {
        -(2f64.powf(10.0 * t - 10.0)) * ((t * 10.0 - 10.75) * ELASTIC_C4).sin()
    }
}

pub fn out_elastic(t: f64) -> f64 {
    if t <= 0.0 {
        0.0
    } else if t >= 1.0 {
        1.0
    } else {
        2f64.powf(-10.0 * t) * ((t * 10.0 - 0.75) * ELASTIC_C4).sin() + 1.0
    }
}

pub fn in_out_elastic(t: f64) -> f64 {
    if t <= 0.0 {
        0.0
    } else if t >= 1.0 {
        1.0
    } else if t < 0.5 {
        -(2f64.powf(20.0 * t - 10.0) * ((20.0 * t - 11.125) * ELASTIC_C5).sin()) / 2.0
    } else {
        (2f64.powf(-20.0 * t + 10.0) * ((20.0 * t - 11.125) * ELASTIC_C5).sin()) / 2.0 + 1.0
    }
}

pub fn in_back(t: f64) -> f64 {
    BACK_C3 * t * t * t - BACK_C1 * t * t
}

pub fn out_back(t: f64) -> f64 {
    1.0 + BACK_C3 * (t - 1.0).powi(3) + BACK_C1 * (t - 1.0).powi(2)
}

pub fn in_out_back(t: f64) -> f64 {
    if t < 0.5 {
        ((2.0 * t).powi(2) * ((BACK_C2 + 1.0) * 2.0 * t - BACK_C2)) / 2.0
    } else {
        ((2.0 * t - 2.0).powi(2) * ((BACK_C2 + 1.0) * (t * 2.0 - 2.0) + BACK_C2) + 2.0) / 2.0
    }
}

pub fn in_bounce(t: f64) -> f64 {
    1.0 - out_bounce(1.0 - t)
}

pub fn out_bounce(t: f64) -> f64 {
    const N1: f64 = 7.5625;
    const D1: f64 = 2.75;

    if t < 1.0 / D1 {
        N1 * t * t
    } else if t < 2.0 / D1 {
        let t = t - 1.5 / D1;
        N1 * t * t + 0.75
    } else if t < 2.5 / D1 {
        let t = t - 2.25 / D1;
        N1 * t * t + 0.9375
    } else {
        let t = t - 2.625 / D1;
        N1 * t * t + 0.984375
    }
}

pub fn in_out_bounce(t: f64) -> f64 {
    if t < 0.5 {
        (1.0 - out_bounce(1.0 - 2.0 * t)) / 2.0
    } else {
        (1.0 + out_bounce(2.0 * t - 1.0)) / 2.0
    }
}

// ============================================================================
// Named curves
// ============================================================================

/// Serializable name for each curve, used where a curve is picked by config
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ease {
    #[default]
    Linear,
    InQuad,
    InCubic,
    InQuart,
    InQuint,
    InSine,
    InCirc,
    InExpo,
    InElastic,
    InBack,
    InBounce,
    OutQuad,
    OutCubic,
    OutQuart,
    OutQuint,
    OutSine,
    OutCirc,
    OutExpo,
    OutElastic,
    OutBack,
    OutBounce,
    InOutQuad,
    InOutCubic,
    InOutQuart,
    InOutQuint,
    InOutSine,
    InOutCirc,
    InOutExpo,
    InOutElastic,
    InOutBack,
    InOutBounce,
}

impl Ease {
    /// Every curve: linear, then all ins, all outs and all in-outs
    pub const ALL: [Ease; 31] = [
        Ease::Linear,
        Ease::InQuad,
        Ease::InCubic,
        Ease::InQuart,
        Ease::InQuint,
        Ease::InSine,
        Ease::InCirc,
        Ease::InExpo,
        Ease::InElastic,
        Ease::InBack,
        Ease::InBounce,
        Ease::OutQuad,
        Ease::OutCubic,
        Ease::OutQuart,
        Ease::OutQuint,
        Ease::OutSine,
        Ease::OutCirc,
        Ease::OutExpo,
        Ease::OutElastic,
        Ease::OutBack,
        Ease::OutBounce,
        Ease::InOutQuad,
        Ease::InOutCubic,
        Ease::InOutQuart,
        Ease::InOutQuint,
        Ease::InOutSine,
        Ease::InOutCirc,
        Ease::InOutExpo,
        Ease::InOutElastic,
        Ease::InOutBack,
        Ease::InOutBounce,
    ];

    pub fn as_fn(self) -> EaseFn {
        match self {
            Ease::Linear => linear,
            Ease::InQuad => in_quad,
            Ease::InCubic => in_cubic,
            Ease::InQuart => in_quart,
            Ease::InQuint => in_quint,
            Ease::InSine => in_sine,
            Ease::InCirc => in_circ,
            Ease::InExpo => in_expo,
            Ease::InElastic => in_elastic,
            Ease::InBack => in_back,
            Ease::InBounce => in_bounce,
            Ease::OutQuad => out_quad,
            Ease::OutCubic => out_cubic,
            Ease::OutQuart => out_quart,
            Ease::OutQuint => out_quint,
            Ease::OutSine => out_sine,
            Ease::OutCirc => out_circ,
            Ease::OutExpo => out_expo,
            Ease::OutElastic => out_elastic,
            Ease::OutBack => out_back,
            Ease::OutBounce => out_bounce,
            Ease::InOutQuad => in_out_quad,
            Ease::InOutCubic => in_out_cubic,
            Ease::InOutQuart => in_out_quart,
            Ease::InOutQuint => in_out_quint,
            Ease::InOutSine => in_out_sine,
            Ease::InOutCirc => in_out_circ,
            Ease::InOutExpo => in_out_expo,
            Ease::InOutElastic => in_out_elastic,
            Ease::InOutBack => in_out_back,
            Ease::InOutBounce => in_out_bounce,
        }
    }

    #[inline]
    pub fn apply(self, t: f64) -> f64 {
        (self.as_fn())(t)
    }

    pub fn name(self) -> &'static str {
        match self {
            Ease::Linear => "Linear",
            Ease::InQuad => "InQuad",
            Ease::InCubic => "InCubic",
            Ease::InQuart => "InQuart",
            Ease::InQuint => "InQuint",
            Ease::InSine => "InSine",
            Ease::InCirc => "InCirc",
            Ease::InExpo => "InExpo",
            Ease::InElastic => "InElastic",
            Ease::InBack => "InBack",
            Ease::InBounce => "InBounce",
            Ease::OutQuad => "OutQuad",
            Ease::OutCubic => "OutCubic",
            Ease::OutQuart => "OutQuart",
            Ease::OutQuint => "OutQuint",
            Ease::OutSine => "OutSine",
            Ease::OutCirc => "OutCirc",
            Ease::OutExpo => "OutExpo",
            Ease::OutElastic => "OutElastic",
            Ease::OutBack => "OutBack",
            Ease::OutBounce => "OutBounce",
            Ease::InOutQuad => "InOutQuad",
            Ease::InOutCubic => "InOutCubic",
            Ease::InOutQuart => "InOutQuart",
            Ease::InOutQuint => "InOutQuint",
            Ease::InOutSine => "InOutSine",
            Ease::InOutCirc => "InOutCirc",
            Ease::InOutExpo => "InOutExpo",
            Ease::InOutElastic => "InOutElastic",
            Ease::InOutBack => "InOutBack",
            Ease::InOutBounce => "InOutBounce",
        }
    }
}
