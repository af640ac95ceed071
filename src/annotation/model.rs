use crate::foundation::error::{RoughError, RoughResult};

/// Total reveal time of one annotation when none is configured.
pub const DEFAULT_ANIMATION_DURATION_MS: f64 = 800.0;
/// Stroke width used when none (or zero) is configured.
pub const DEFAULT_STROKE_WIDTH: f64 = 2.0;
/// Number of sketch passes when none is configured.
pub const DEFAULT_ITERATIONS: i64 = 2;
/// Stroke paint used when no color is configured.
pub const DEFAULT_COLOR: &str = "currentColor";

/// Padding in canonical `[top, right, bottom, left]` order.
pub type FullPadding = [f64; 4];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// The kind of mark drawn over a region.
pub enum AnnotationKind {
    /// Line below the region.
    Underline,
    /// Rectangle around the region.
    Box,
    /// Ellipse around the region.
    Circle,
    /// Thick, rough marker stroke through the region.
    Highlight,
    /// Line through the vertical center.
    StrikeThrough,
    /// Two diagonals across the region.
    CrossedOff,
    /// Anything else; compiles to nothing.
    Unknown,
}

impl AnnotationKind {
    /// All drawable kinds.
    pub const ALL: [Self; 6] = [
        Self::Underline,
        Self::Box,
        Self::Circle,
        Self::Highlight,
        Self::StrikeThrough,
        Self::CrossedOff,
    ];

    /// Parse a kind name; unrecognized names map to [`AnnotationKind::Unknown`].
    pub fn parse(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "underline" => Self::Underline,
            "box" => Self::Box,
            "circle" => Self::Circle,
            "highlight" => Self::Highlight,
            "strike-through" | "strikethrough" => Self::StrikeThrough,
            "crossed-off" | "crossedoff" => Self::CrossedOff,
            _ => Self::Unknown,
        }
    }

    /// Canonical kebab-case name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Underline => "underline",
            Self::Box => "box",
            Self::Circle => "circle",
            Self::Highlight => "highlight",
            Self::StrikeThrough => "strike-through",
            Self::CrossedOff => "crossed-off",
            Self::Unknown => "unknown",
        }
    }
}

impl serde::Serialize for AnnotationKind {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> serde::Deserialize<'de> for AnnotationKind {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(Self::parse(&name))
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
/// User-facing padding: one number for all sides, or a CSS-like list of 1-4 numbers.
pub enum Padding {
    /// Same value on all four sides.
    Uniform(f64),
    /// CSS shorthand order: `[all]`, `[vertical, horizontal]`,
    /// `[top, horizontal, bottom]`, `[top, right, bottom, left]`.
    Sides(Vec<f64>),
}

impl From<f64> for Padding {
    fn from(v: f64) -> Self {
        Self::Uniform(v)
    }
}

impl From<Vec<f64>> for Padding {
    fn from(v: Vec<f64>) -> Self {
        Self::Sides(v)
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// Styling and behavior of a single annotation.
///
/// Every field but `type` is optional; the `effective_*` accessors apply the defaults.
pub struct AnnotationConfig {
    /// Annotation kind.
    #[serde(rename = "type")]
    pub kind: AnnotationKind,
    /// Stroke paint; `currentColor` when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Stroke width; absent or zero means [`DEFAULT_STROKE_WIDTH`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke_width: Option<f64>,
    /// Space between the region and the mark.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding: Option<Padding>,
    /// Whether paths draw themselves on; true when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animate: Option<bool>,
    /// Total reveal time in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animation_duration: Option<f64>,
    /// Number of sketch passes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iterations: Option<i64>,
}

impl AnnotationConfig {
    /// A config with only the kind set.
    pub fn new(kind: AnnotationKind) -> Self {
        Self {
            kind,
            color: None,
            stroke_width: None,
            padding: None,
            animate: None,
            animation_duration: None,
            iterations: None,
        }
    }

    /// Set the stroke color.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Set the stroke width.
    pub fn with_stroke_width(mut self, width: f64) -> Self {
        self.stroke_width = Some(width);
        self
    }

    /// Set the padding.
    pub fn with_padding(mut self, padding: impl Into<Padding>) -> Self {
        self.padding = Some(padding.into());
        self
    }

    /// Enable or disable the draw-on animation.
    pub fn with_animate(mut self, animate: bool) -> Self {
        self.animate = Some(animate);
        self
    }

    /// Set the total reveal time in milliseconds.
    pub fn with_animation_duration(mut self, ms: f64) -> Self {
        self.animation_duration = Some(ms);
        self
    }

    /// Set the number of sketch passes.
    pub fn with_iterations(mut self, iterations: i64) -> Self {
        self.iterations = Some(iterations);
        self
    }

    /// Parse a config from JSON.
    pub fn from_json(json: &str) -> RoughResult<Self> {
        serde_json::from_str(json).map_err(|e| RoughError::serde(e.to_string()))
    }

    /// Stroke paint to apply to every path.
    pub fn effective_color(&self) -> &str {
        self.color.as_deref().unwrap_or(DEFAULT_COLOR)
    }

    /// Configured stroke width, with zero treated as unset.
    pub fn effective_stroke_width(&self) -> f64 {
        match self.stroke_width {
            Some(w) if w != 0.0 => w,
            _ => DEFAULT_STROKE_WIDTH,
        }
    }

    /// Sketch pass count; explicit values `<= 0` are kept and draw nothing.
    pub fn effective_iterations(&self) -> i64 {
        self.iterations.unwrap_or(DEFAULT_ITERATIONS)
    }

    /// Whether the draw-on animation runs.
    pub fn animates(&self) -> bool {
        self.animate.unwrap_or(true)
    }

    /// Total reveal time; an explicit zero is honored.
    pub fn total_duration_ms(&self) -> f64 {
        self.animation_duration.unwrap_or(DEFAULT_ANIMATION_DURATION_MS)
    }

    /// Reject values the renderer cannot represent.
    pub fn validate(&self) -> RoughResult<()> {
        if let Some(w) = self.stroke_width
            && (!w.is_finite() || w < 0.0)
        {
            return Err(RoughError::validation(
                "strokeWidth must be finite and >= 0",
            ));
        }
        if let Some(d) = self.animation_duration
            && (!d.is_finite() || d < 0.0)
        {
            return Err(RoughError::validation(
                "animationDuration must be finite and >= 0",
            ));
        }
        let finite_padding = match &self.padding {
            None => true,
            Some(Padding::Uniform(v)) => v.is_finite(),
            Some(Padding::Sides(v)) => v.iter().all(|x| x.is_finite()),
        };
        if !finite_padding {
            return Err(RoughError::validation("padding values must be finite"));
        }
        if let Some(color) = &self.color
            && color.trim().is_empty()
        {
            return Err(RoughError::validation("color must be non-empty when set"));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/annotation/model.rs"]
mod tests;
