use crate::{
    animation::{ease::Ease, schedule::AnimationPlan},
    compile::flatten::{PathGeometry, num},
    foundation::error::RoughResult,
};

/// Name of the keyframes rule that animates `stroke-dashoffset` to zero.
pub const DASH_KEYFRAMES: &str = "rough-notation-dash";

#[derive(Clone, Debug, PartialEq)]
/// Stroke-dash draw-on animation for one path.
pub struct DashAnimation {
    /// Path length; used as both initial dash offset and dash array.
    pub length: f64,
    /// When and how long the path draws.
    pub plan: AnimationPlan,
    /// Timing function.
    pub easing: Ease,
}

impl DashAnimation {
    /// CSS `animation` shorthand, e.g. `rough-notation-dash 400ms ease-out 0ms forwards`.
    pub fn css_shorthand(&self) -> String {
        format!(
            "{DASH_KEYFRAMES} {}ms {} {}ms forwards",
            num(self.plan.duration_ms),
            self.easing.css_keyword(),
            num(self.plan.delay_ms)
        )
    }

    /// Dash offset at `t_ms` on the animation clock.
    pub fn dash_offset_at(&self, t_ms: f64) -> f64 {
        self.plan.dash_offset_at(self.length, t_ms, self.easing)
    }
}

#[derive(Clone, Debug, PartialEq)]
/// Presentation of one annotation path. Paths are never filled.
pub struct PathStyle {
    /// Stroke paint (any CSS color, `currentColor` by default).
    pub stroke: String,
    /// Stroke width.
    pub stroke_width: f64,
    /// Draw-on animation, if enabled.
    pub dash: Option<DashAnimation>,
}

/// Destination for finished annotation paths.
///
/// The surface owns the created elements; the renderer only keeps the returned handles.
pub trait Surface {
    /// Reference to a created path element.
    type Handle;

    /// Create and attach a path element for `geometry`.
    fn create_path(&mut self, geometry: &PathGeometry) -> RoughResult<Self::Handle>;

    /// Apply paint and (optionally) animation to a created path.
    fn set_style(&mut self, handle: &Self::Handle, style: &PathStyle) -> RoughResult<()>;
}

#[cfg(test)]
#[path = "../../tests/unit/render/surface.rs"]
mod tests;
