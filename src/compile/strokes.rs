//! Annotation kind -> ordered stroke requests.
//!
//! Each kind is one pure strategy function with the same signature; [`strategy_for`] is the
//! dispatch table. Repeated passes over a line alternate direction by index parity so the
//! layered sketch never retraces itself exactly.

use crate::{
    annotation::model::{AnnotationKind, FullPadding},
    annotation::padding::{BOTTOM, LEFT, RIGHT, TOP},
    foundation::core::{Point, Rect},
    foundation::math::mix_seed,
    sketch::ops::Primitive,
    sketch::style::{SketchStyle, StrokeClass, resolve_style},
};

/// Fraction of the region height covered by a highlight stroke.
pub const HIGHLIGHT_HEIGHT_RATIO: f64 = 0.95;

#[derive(Clone, Copy, Debug, PartialEq)]
/// One primitive to sketch, with its preset and seed.
pub struct StrokeRequest {
    /// Shape to sketch.
    pub primitive: Primitive,
    /// Sketch preset.
    pub class: StrokeClass,
    /// Seed for this stroke; derived from the annotation seed and the stroke's position.
    pub seed: u64,
}

impl StrokeRequest {
    /// Sketch parameters for this stroke.
    pub fn style(&self) -> SketchStyle {
        resolve_style(self.class, self.seed)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
/// Everything a kind strategy needs.
pub struct StrokeInput {
    /// Target region.
    pub rect: Rect,
    /// Normalized padding.
    pub padding: FullPadding,
    /// Pass count; `<= 0` produces nothing.
    pub iterations: i64,
    /// Configured visual stroke width.
    pub stroke_width: f64,
    /// Annotation seed.
    pub seed: u64,
}

#[derive(Clone, Debug, PartialEq)]
/// Output of the geometry compiler.
pub struct StrokePlan {
    /// Strokes in draw order.
    pub strokes: Vec<StrokeRequest>,
    /// Visual stroke width to paint with (kinds may override the configured one).
    pub stroke_width: f64,
}

/// Signature shared by every kind strategy.
pub type KindStrategy = fn(&StrokeInput) -> StrokePlan;

/// Look up the strategy for a kind; `None` for [`AnnotationKind::Unknown`].
pub fn strategy_for(kind: AnnotationKind) -> Option<KindStrategy> {
    match kind {
        AnnotationKind::Underline => Some(underline),
        AnnotationKind::StrikeThrough => Some(strike_through),
        AnnotationKind::Box => Some(boxed),
        AnnotationKind::CrossedOff => Some(crossed_off),
        AnnotationKind::Circle => Some(circle),
        AnnotationKind::Highlight => Some(highlight),
        AnnotationKind::Unknown => None,
    }
}

/// Compile a kind into strokes. Unknown kinds compile to an empty plan.
pub fn compile_strokes(kind: AnnotationKind, input: &StrokeInput) -> StrokePlan {
    match strategy_for(kind) {
        Some(strategy) => strategy(input),
        None => StrokePlan {
            strokes: Vec::new(),
            stroke_width: input.stroke_width,
        },
    }
}

fn passes(iterations: i64) -> usize {
    usize::try_from(iterations).unwrap_or(0)
}

/// Even passes run `a -> b`, odd passes `b -> a`.
fn alternating(a: Point, b: Point, pass: usize) -> Primitive {
    if pass % 2 == 0 {
        Primitive::Line { from: a, to: b }
    } else {
        Primitive::Line { from: b, to: a }
    }
}

struct Builder {
    seed: u64,
    strokes: Vec<StrokeRequest>,
}

impl Builder {
    fn new(input: &StrokeInput) -> Self {
        Self {
            seed: input.seed,
            strokes: Vec::with_capacity(passes(input.iterations)),
        }
    }

    fn push(&mut self, primitive: Primitive, class: StrokeClass) {
        let seed = mix_seed(self.seed, self.strokes.len() as u64);
        self.strokes.push(StrokeRequest {
            primitive,
            class,
            seed,
        });
    }

    fn alternating_lines(&mut self, a: Point, b: Point, iterations: i64, class: StrokeClass) {
        for pass in 0..passes(iterations) {
            self.push(alternating(a, b, pass), class);
        }
    }

    fn finish(self, stroke_width: f64) -> StrokePlan {
        StrokePlan {
            strokes: self.strokes,
            stroke_width,
        }
    }
}

fn horizontal(input: &StrokeInput, y: f64, class: StrokeClass, stroke_width: f64) -> StrokePlan {
    let r = input.rect;
    let mut b = Builder::new(input);
    b.alternating_lines(
        Point::new(r.x, y),
        Point::new(r.right(), y),
        input.iterations,
        class,
    );
    b.finish(stroke_width)
}

/// Line under the region, pushed down by the bottom padding.
pub fn underline(input: &StrokeInput) -> StrokePlan {
    let y = input.rect.bottom() + input.padding[BOTTOM];
    horizontal(input, y, StrokeClass::Single, input.stroke_width)
}

/// Line through the vertical center of the region.
pub fn strike_through(input: &StrokeInput) -> StrokePlan {
    horizontal(
        input,
        input.rect.mid_y(),
        StrokeClass::Single,
        input.stroke_width,
    )
}

/// Marker stroke through the center, as thick as the region.
pub fn highlight(input: &StrokeInput) -> StrokePlan {
    horizontal(
        input,
        input.rect.mid_y(),
        StrokeClass::Highlight,
        input.rect.h * HIGHLIGHT_HEIGHT_RATIO,
    )
}

/// Padded rectangle, redrawn once per pass.
pub fn boxed(input: &StrokeInput) -> StrokePlan {
    let bounds = padded(input.rect, input.padding);
    let mut b = Builder::new(input);
    for _ in 0..passes(input.iterations) {
        b.push(Primitive::Rectangle(bounds), StrokeClass::Single);
    }
    b.finish(input.stroke_width)
}

/// Both diagonals of the unpadded region, each with its own alternating passes.
pub fn crossed_off(input: &StrokeInput) -> StrokePlan {
    let r = input.rect;
    let (x, y, x2, y2) = (r.x, r.y, r.right(), r.bottom());
    let mut b = Builder::new(input);
    b.alternating_lines(
        Point::new(x, y),
        Point::new(x2, y2),
        input.iterations,
        StrokeClass::Single,
    );
    b.alternating_lines(
        Point::new(x2, y),
        Point::new(x, y2),
        input.iterations,
        StrokeClass::Single,
    );
    b.finish(input.stroke_width)
}

/// Ellipse inscribed in the padded region.
///
/// Passes are spent in pairs on the double-stroke preset; an odd pass left over uses the single
/// preset.
pub fn circle(input: &StrokeInput) -> StrokePlan {
    let bounds = padded(input.rect, input.padding);
    let ellipse = Primitive::Ellipse {
        center: Point::new(bounds.x + bounds.w / 2.0, bounds.y + bounds.h / 2.0),
        width: bounds.w,
        height: bounds.h,
    };
    let total = passes(input.iterations);
    let doubled = total / 2;
    let single = total - doubled * 2;

    let mut b = Builder::new(input);
    for _ in 0..doubled {
        b.push(ellipse, StrokeClass::Double);
    }
    for _ in 0..single {
        b.push(ellipse, StrokeClass::Single);
    }
    b.finish(input.stroke_width)
}

fn padded(r: Rect, p: FullPadding) -> Rect {
    Rect::new(
        r.x - p[LEFT],
        r.y - p[TOP],
        r.w + p[LEFT] + p[RIGHT],
        r.h + p[TOP] + p[BOTTOM],
    )
}

#[cfg(test)]
#[path = "../../tests/unit/compile/strokes.rs"]
mod tests;
