#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
/// Preset family selecting sketch parameters (not the visual stroke width).
pub enum StrokeClass {
    /// One pass per stroke.
    Single,
    /// Two overlaid passes per stroke.
    Double,
    /// Rougher single pass for marker-like strokes.
    Highlight,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Parameters consumed by a sketch generator.
pub struct SketchStyle {
    /// Upper bound on endpoint displacement.
    pub max_randomness_offset: f64,
    /// Overall jitter multiplier; zero draws clean geometry.
    pub roughness: f64,
    /// Perpendicular sag of straight strokes.
    pub bowing: f64,
    /// Pen width used by the generator for fills.
    pub stroke_width: f64,
    /// Catmull-Rom tension of curves (0 = standard).
    pub curve_tightness: f64,
    /// How closely curves follow the ideal shape (1 = exactly).
    pub curve_fitting: f64,
    /// Minimum number of points sampled around an ellipse.
    pub curve_step_count: f64,
    /// Hachure fill angle in degrees.
    pub hachure_angle: f64,
    /// Hachure line gap; negative selects the generator default.
    pub hachure_gap: f64,
    /// Fill line weight; negative selects the generator default.
    pub fill_weight: f64,
    /// Draw every stroke once instead of twice.
    pub disable_multi_stroke: bool,
    /// Same as `disable_multi_stroke`, for fills.
    pub disable_multi_stroke_fill: bool,
    /// Seed for the generator's random source.
    pub seed: u64,
}

/// Resolve the sketch parameters for a stroke class.
///
/// `seed` is copied through unchanged; every other field is a fixed preset.
pub fn resolve_style(class: StrokeClass, seed: u64) -> SketchStyle {
    SketchStyle {
        max_randomness_offset: 2.0,
        roughness: match class {
            StrokeClass::Highlight => 3.0,
            StrokeClass::Single | StrokeClass::Double => 1.5,
        },
        bowing: 1.0,
        stroke_width: 1.5,
        curve_tightness: 0.0,
        curve_fitting: 0.95,
        curve_step_count: 9.0,
        hachure_angle: -41.0,
        hachure_gap: -1.0,
        fill_weight: -1.0,
        disable_multi_stroke: class != StrokeClass::Double,
        disable_multi_stroke_fill: false,
        seed,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sketch/style.rs"]
mod tests;
