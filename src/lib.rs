//! roughmark turns "annotate this rectangle" requests into hand-drawn, self-drawing strokes.
//!
//! # Pipeline overview
//!
//! 1. **Normalize**: `AnnotationConfig` padding -> `[top, right, bottom, left]`
//! 2. **Compile**: annotation kind + region -> ordered [`StrokeRequest`]s (one strategy per kind)
//! 3. **Sketch**: each request -> [`Drawing`]s via a [`SketchGenerator`] (deterministic per seed)
//! 4. **Flatten**: drawings -> standalone [`PathGeometry`] (one per subpath, with measured length)
//! 5. **Schedule**: path lengths -> per-path [`AnimationPlan`] sharing one duration budget
//! 6. **Render**: paths + styles -> a [`Surface`] (e.g. [`SvgSurface`])
//!
//! Steps 1-5 are pure and never fail. Errors only come from input validation and surfaces.
#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod animation;
mod annotation;
mod compile;
mod foundation;
mod render;
mod sketch;

pub use animation::ease::Ease;
pub use animation::schedule::{AnimationPlan, schedule, schedule_paths};
pub use annotation::model::{
    AnnotationConfig, AnnotationKind, DEFAULT_ANIMATION_DURATION_MS, DEFAULT_COLOR,
    DEFAULT_ITERATIONS, DEFAULT_STROKE_WIDTH, FullPadding, Padding,
};
pub use annotation::padding::{DEFAULT_PADDING, normalize_padding};
pub use annotation::scene::{Scene, SceneAnnotation};
pub use compile::flatten::{LENGTH_ACCURACY, PathGeometry, flatten_drawings, measure, trace_strokes};
pub use compile::strokes::{
    HIGHLIGHT_HEIGHT_RATIO, KindStrategy, StrokeInput, StrokePlan, StrokeRequest,
    compile_strokes, strategy_for,
};
pub use foundation::core::{BezPath, Point, Rect, Vec2};
pub use foundation::error::{RoughError, RoughResult};
pub use render::annotate::{
    AnnotationGroup, PreparedAnnotation, RenderedAnnotation, prepare_annotation,
    render_annotation,
};
pub use render::surface::{DASH_KEYFRAMES, DashAnimation, PathStyle, Surface};
pub use render::svg::{SvgPathId, SvgSurface};
pub use sketch::ops::{AbstractOp, Drawing, Primitive, SketchGenerator};
pub use sketch::rough::RoughSketcher;
pub use sketch::style::{SketchStyle, StrokeClass, resolve_style};
