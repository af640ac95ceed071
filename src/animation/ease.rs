#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
/// CSS named timing functions.
pub enum Ease {
    /// `linear`
    Linear,
    /// `ease`, `cubic-bezier(0.25, 0.1, 0.25, 1)`
    Ease,
    /// `ease-in`, `cubic-bezier(0.42, 0, 1, 1)`
    EaseIn,
    /// `ease-out`, `cubic-bezier(0, 0, 0.58, 1)`
    #[default]
    EaseOut,
    /// `ease-in-out`, `cubic-bezier(0.42, 0, 0.58, 1)`
    EaseInOut,
}

impl Ease {
    /// Keyword used in CSS `animation` shorthands.
    pub fn css_keyword(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Ease => "ease",
            Self::EaseIn => "ease-in",
            Self::EaseOut => "ease-out",
            Self::EaseInOut => "ease-in-out",
        }
    }

    /// Map linear progress `t` in `[0, 1]` to eased progress.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        let (x1, y1, x2, y2) = match self {
            Self::Linear => return t,
            Self::Ease => (0.25, 0.1, 0.25, 1.0),
            Self::EaseIn => (0.42, 0.0, 1.0, 1.0),
            Self::EaseOut => (0.0, 0.0, 0.58, 1.0),
            Self::EaseInOut => (0.42, 0.0, 0.58, 1.0),
        };
        if t == 0.0 || t == 1.0 {
            return t;
        }
        // x(s) is monotonic for CSS control points in [0, 1].
        let (mut lo, mut hi) = (0.0, 1.0);
        let mut s = t;
        for _ in 0..64 {
            let x = bezier_1d(x1, x2, s);
            if (x - t).abs() < 1e-9 {
                break;
            }
            if x < t {
                lo = s;
            } else {
                hi = s;
            }
            s = (lo + hi) / 2.0;
        }
        bezier_1d(y1, y2, s)
    }
}

/// One axis of a cubic Bézier anchored at 0 and 1.
fn bezier_1d(p1: f64, p2: f64, s: f64) -> f64 {
    let u = 1.0 - s;
    3.0 * u * u * s * p1 + 3.0 * u * s * s * p2 + s * s * s
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
