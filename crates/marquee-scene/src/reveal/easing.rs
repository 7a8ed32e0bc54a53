//! Easing for the reveal transition.
//!
//! The reveal core uses a single fixed deceleration curve,
//! `cubic-bezier(0.22, 1.0, 0.36, 1.0)`, but the evaluator is general: it
//! accepts any CSS-style bezier plus the standard keyword curves, so
//! configuration can swap the profile without touching the animator.

use serde::{Deserialize, Serialize};

/// A timing function mapping linear progress to eased progress.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EasingFunction {
    /// No easing.
    Linear,
    /// CSS `ease` — `cubic-bezier(0.25, 0.1, 0.25, 1.0)`.
    Ease,
    /// CSS `ease-out` — `cubic-bezier(0, 0, 0.58, 1)`.
    EaseOut,
    /// Custom cubic bezier control points.
    CubicBezier { x1: f32, y1: f32, x2: f32, y2: f32 },
}

impl Default for EasingFunction {
    fn default() -> Self {
        Self::reveal()
    }
}

impl EasingFunction {
    /// The reveal curve: a smooth deceleration that lands softly.
    pub fn reveal() -> Self {
        Self::CubicBezier {
            x1: 0.22,
            y1: 1.0,
            x2: 0.36,
            y2: 1.0,
        }
    }

    /// Build a bezier from `[x1, y1, x2, y2]` control points (the form the
    /// config file and the style bag carry).
    pub fn from_points(points: [f32; 4]) -> Self {
        Self::CubicBezier {
            x1: points[0].clamp(0.0, 1.0),
            y1: points[1],
            x2: points[2].clamp(0.0, 1.0),
            y2: points[3],
        }
    }

    /// Control points of this curve in `[x1, y1, x2, y2]` form.
    pub fn as_points(&self) -> [f32; 4] {
        match *self {
            Self::Linear => [0.0, 0.0, 1.0, 1.0],
            Self::Ease => [0.25, 0.1, 0.25, 1.0],
            Self::EaseOut => [0.0, 0.0, 0.58, 1.0],
            Self::CubicBezier { x1, y1, x2, y2 } => [x1, y1, x2, y2],
        }
    }

    /// Evaluate the curve at progress `t` (clamped to `0.0..=1.0`).
    pub fn evaluate(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match *self {
            Self::Linear => t,
            _ => {
                let [x1, y1, x2, y2] = self.as_points();
                cubic_bezier(x1, y1, x2, y2, t)
            }
        }
    }
}

/// Evaluate a CSS cubic-bezier at input progress `t`.
///
/// Newton–Raphson inverts the x-polynomial to find the curve parameter,
/// then the y-polynomial is sampled there.
fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, t: f32) -> f32 {
    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }

    let sample = |c1: f32, c2: f32, s: f32| -> f32 {
        let s2 = s * s;
        let mt = 1.0 - s;
        3.0 * mt * mt * s * c1 + 3.0 * mt * s2 * c2 + s2 * s
    };
    let sample_dx = |s: f32| -> f32 {
        let mt = 1.0 - s;
        3.0 * mt * mt * x1 + 6.0 * mt * s * (x2 - x1) + 3.0 * s * s * (1.0 - x2)
    };

    let mut s = t;
    for _ in 0..8 {
        let err = sample(x1, x2, s) - t;
        if err.abs() < 1e-6 {
            break;
        }
        let dx = sample_dx(s);
        if dx.abs() < 1e-6 {
            break;
        }
        s = (s - err / dx).clamp(0.0, 1.0);
    }

    sample(y1, y2, s)
}
