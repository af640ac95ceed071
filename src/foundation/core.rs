use crate::foundation::error::{RoughError, RoughResult};

pub use kurbo::{BezPath, Point, Vec2};

/// Axis-aligned target region in surface coordinates.
///
/// Stored as origin + size, the way callers measure elements on screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Rect {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Width.
    pub w: f64,
    /// Height.
    pub h: f64,
}

impl Rect {
    /// Create a rect from origin and size.
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    /// Right edge (`x + w`).
    pub fn right(self) -> f64 {
        self.x + self.w
    }

    /// Bottom edge (`y + h`).
    pub fn bottom(self) -> f64 {
        self.y + self.h
    }

    /// Vertical center line.
    pub fn mid_y(self) -> f64 {
        self.y + self.h / 2.0
    }

    /// Convert into a corner-based `kurbo::Rect`.
    pub fn to_kurbo(self) -> kurbo::Rect {
        kurbo::Rect::new(self.x, self.y, self.right(), self.bottom())
    }

    /// Reject non-finite coordinates and negative sizes.
    pub fn validate(self) -> RoughResult<()> {
        if ![self.x, self.y, self.w, self.h].iter().all(|v| v.is_finite()) {
            return Err(RoughError::validation("rect coordinates must be finite"));
        }
        if self.w < 0.0 || self.h < 0.0 {
            return Err(RoughError::validation("rect size must be >= 0"));
        }
        Ok(())
    }
}

impl From<kurbo::Rect> for Rect {
    fn from(r: kurbo::Rect) -> Self {
        let r = r.abs();
        Self::new(r.x0, r.y0, r.width(), r.height())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
