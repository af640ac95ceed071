use crate::{
    foundation::core::{Point, Rect},
    sketch::style::SketchStyle,
};

#[derive(Clone, Copy, Debug, PartialEq)]
/// One pen instruction emitted by a sketch generator.
pub enum AbstractOp {
    /// Lift the pen and start a new subpath.
    Move(Point),
    /// Straight segment to a point.
    Line(Point),
    /// Cubic Bézier with two control points and an end point.
    Curve(Point, Point, Point),
}

#[derive(Clone, Debug, Default, PartialEq)]
/// An ordered op sequence forming one sketched shape (possibly several subpaths).
pub struct Drawing {
    /// Ops in pen order.
    pub ops: Vec<AbstractOp>,
}

impl Drawing {
    /// An empty drawing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a [`AbstractOp::Move`].
    pub fn move_to(&mut self, p: impl Into<Point>) {
        self.ops.push(AbstractOp::Move(p.into()));
    }

    /// Append a [`AbstractOp::Line`].
    pub fn line_to(&mut self, p: impl Into<Point>) {
        self.ops.push(AbstractOp::Line(p.into()));
    }

    /// Append a [`AbstractOp::Curve`].
    pub fn curve_to(&mut self, c1: impl Into<Point>, c2: impl Into<Point>, p: impl Into<Point>) {
        self.ops.push(AbstractOp::Curve(c1.into(), c2.into(), p.into()));
    }

    /// True when no ops were recorded.
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
/// Geometric shape handed to a [`SketchGenerator`].
pub enum Primitive {
    /// Segment drawn from `from` towards `to`.
    #[allow(missing_docs)]
    Line { from: Point, to: Point },
    /// Rectangle with origin and size (size may be negative with negative padding).
    Rectangle(Rect),
    /// Axis-aligned ellipse given by its center and full width/height.
    #[allow(missing_docs)]
    Ellipse {
        center: Point,
        width: f64,
        height: f64,
    },
}

/// Produces hand-drawn renditions of primitives.
///
/// Implementations must be deterministic: the same primitive and style (seed included) always
/// yield the same drawings.
pub trait SketchGenerator {
    /// Sketch a straight stroke from `from` to `to`.
    fn render_line(&self, from: Point, to: Point, style: &SketchStyle) -> Vec<Drawing>;

    /// Sketch a rectangle outline, one drawing per side.
    fn render_rect(&self, rect: Rect, style: &SketchStyle) -> Vec<Drawing>;

    /// Sketch a closed ellipse outline.
    fn render_ellipse(
        &self,
        center: Point,
        width: f64,
        height: f64,
        style: &SketchStyle,
    ) -> Vec<Drawing>;

    /// Dispatch on the primitive shape.
    fn sketch(&self, primitive: &Primitive, style: &SketchStyle) -> Vec<Drawing> {
        match *primitive {
            Primitive::Line { from, to } => self.render_line(from, to, style),
            Primitive::Rectangle(rect) => self.render_rect(rect, style),
            Primitive::Ellipse {
                center,
                width,
                height,
            } => self.render_ellipse(center, width, height, style),
        }
    }
}
