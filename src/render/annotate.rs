use crate::{
    animation::{
        ease::Ease,
        schedule::{AnimationPlan, schedule_paths},
    },
    annotation::{
        model::AnnotationConfig,
        padding::normalize_padding,
        scene::{Scene, SceneAnnotation},
    },
    compile::{
        flatten::{PathGeometry, trace_strokes},
        strokes::{StrokeInput, compile_strokes},
    },
    foundation::{core::Rect, error::RoughResult, math::mix_seed},
    render::surface::{DashAnimation, PathStyle, Surface},
    sketch::ops::SketchGenerator,
};

#[derive(Clone, Debug, PartialEq)]
/// Paths and styles of one annotation, ready to hand to a [`Surface`].
pub struct PreparedAnnotation {
    /// Flattened paths in draw order.
    pub paths: Vec<PathGeometry>,
    /// One style per path.
    pub styles: Vec<PathStyle>,
}

impl PreparedAnnotation {
    /// Time from the group delay until the last path finishes drawing (0 when not animated).
    pub fn duration_ms(&self) -> f64 {
        self.styles
            .iter()
            .filter_map(|s| s.dash.as_ref())
            .map(|d| d.plan.duration_ms)
            .sum()
    }

    /// Animation plans, when animated.
    pub fn plans(&self) -> Vec<AnimationPlan> {
        self.styles
            .iter()
            .filter_map(|s| s.dash.as_ref().map(|d| d.plan))
            .collect()
    }
}

#[derive(Clone, Debug)]
/// Result of drawing one annotation on a surface.
pub struct RenderedAnnotation<H> {
    /// Surface handles, one per path.
    pub handles: Vec<H>,
    /// What was drawn.
    pub prepared: PreparedAnnotation,
}

/// Compile, sketch, flatten and schedule an annotation without touching a surface.
///
/// `group_delay_ms` offsets the whole reveal; `seed` drives the sketch generator.
pub fn prepare_annotation<G: SketchGenerator + ?Sized>(
    generator: &G,
    rect: Rect,
    config: &AnnotationConfig,
    group_delay_ms: f64,
    seed: u64,
) -> PreparedAnnotation {
    let input = StrokeInput {
        rect,
        padding: normalize_padding(config.padding.as_ref()),
        iterations: config.effective_iterations(),
        stroke_width: config.effective_stroke_width(),
        seed,
    };
    let strokes = compile_strokes(config.kind, &input);
    let paths = trace_strokes(generator, &strokes.strokes);

    let plans: Vec<Option<AnimationPlan>> = if config.animates() {
        schedule_paths(&paths, config.total_duration_ms(), group_delay_ms)
            .into_iter()
            .map(Some)
            .collect()
    } else {
        vec![None; paths.len()]
    };

    let styles = paths
        .iter()
        .zip(plans)
        .map(|(path, plan)| PathStyle {
            stroke: config.effective_color().to_string(),
            stroke_width: strokes.stroke_width,
            dash: plan.map(|plan| DashAnimation {
                length: path.length,
                plan,
                easing: Ease::EaseOut,
            }),
        })
        .collect();

    PreparedAnnotation { paths, styles }
}

/// Draw one annotation onto `surface`.
///
/// Nothing is created when the annotation compiles to no strokes.
#[tracing::instrument(skip(surface, generator, config), fields(kind = config.kind.as_str()))]
pub fn render_annotation<S: Surface, G: SketchGenerator + ?Sized>(
    surface: &mut S,
    generator: &G,
    rect: Rect,
    config: &AnnotationConfig,
    group_delay_ms: f64,
    seed: u64,
) -> RoughResult<RenderedAnnotation<S::Handle>> {
    let prepared = prepare_annotation(generator, rect, config, group_delay_ms, seed);
    tracing::debug!(paths = prepared.paths.len(), "annotation prepared");

    let mut handles = Vec::with_capacity(prepared.paths.len());
    for (path, style) in prepared.paths.iter().zip(&prepared.styles) {
        let handle = surface.create_path(path)?;
        surface.set_style(&handle, style)?;
        if let Some(dash) = &style.dash {
            tracing::trace!(
                length = path.length,
                duration_ms = dash.plan.duration_ms,
                delay_ms = dash.plan.delay_ms,
                "path scheduled"
            );
        }
        handles.push(handle);
    }
    Ok(RenderedAnnotation { handles, prepared })
}

#[derive(Clone, Debug, Default)]
/// Annotations that reveal one after another.
///
/// Each annotation starts when the previous animated ones have finished drawing.
pub struct AnnotationGroup {
    seed: u64,
    entries: Vec<SceneAnnotation>,
}

impl AnnotationGroup {
    /// Empty group; per-annotation seeds derive from `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            entries: Vec::new(),
        }
    }

    /// Group holding a scene's annotations in order.
    pub fn from_scene(scene: &Scene) -> Self {
        Self {
            seed: scene.seed,
            entries: scene.annotations.clone(),
        }
    }

    /// Append an annotation with a derived seed.
    pub fn push(&mut self, rect: Rect, config: AnnotationConfig) -> &mut Self {
        self.entries.push(SceneAnnotation {
            rect,
            config,
            seed: None,
        });
        self
    }

    /// Append an annotation with an explicit seed.
    pub fn push_seeded(&mut self, rect: Rect, config: AnnotationConfig, seed: u64) -> &mut Self {
        self.entries.push(SceneAnnotation {
            rect,
            config,
            seed: Some(seed),
        });
        self
    }

    /// Number of annotations.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the group holds no annotations.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Seed used for the annotation at `index`.
    pub fn seed_for(&self, index: usize) -> u64 {
        self.entries
            .get(index)
            .and_then(|e| e.seed)
            .unwrap_or_else(|| mix_seed(self.seed, index as u64))
    }

    /// Draw every annotation in order, chaining their reveal delays.
    #[tracing::instrument(skip_all, fields(annotations = self.entries.len()))]
    pub fn render<S: Surface, G: SketchGenerator + ?Sized>(
        &self,
        surface: &mut S,
        generator: &G,
    ) -> RoughResult<Vec<RenderedAnnotation<S::Handle>>> {
        let mut delay_ms = 0.0;
        let mut out = Vec::with_capacity(self.entries.len());
        for (idx, entry) in self.entries.iter().enumerate() {
            let rendered = render_annotation(
                surface,
                generator,
                entry.rect,
                &entry.config,
                delay_ms,
                self.seed_for(idx),
            )?;
            delay_ms += rendered.prepared.duration_ms();
            out.push(rendered);
        }
        tracing::debug!(total_ms = delay_ms, "group rendered");
        Ok(out)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/annotate.rs"]
mod tests;
