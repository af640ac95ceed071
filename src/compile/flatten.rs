use kurbo::ParamCurveArclen as _;

use crate::{
    compile::strokes::StrokeRequest,
    foundation::core::{BezPath, Point},
    sketch::ops::{AbstractOp, Drawing, SketchGenerator},
};

/// Arc length accuracy used when measuring paths.
pub const LENGTH_ACCURACY: f64 = 1e-3;

#[derive(Clone, Debug, PartialEq)]
/// A renderable, continuous stroke.
pub struct PathGeometry {
    /// SVG path data (`M`, `L` and `C` commands).
    pub d: String,
    /// The same geometry as a kurbo path.
    pub path: BezPath,
    /// Measured on-screen length.
    pub length: f64,
}

/// Split drawings into standalone paths, one per subpath, in draw order.
///
/// Every `Move` closes the running path and starts a new one. Ops that appear before the first
/// `Move` of a drawing have no start point and are dropped rather than emitted as a path of
/// their own (a bare `"L1 1"` is not valid SVG path data).
pub fn flatten_drawings<'a>(drawings: impl IntoIterator<Item = &'a Drawing>) -> Vec<PathGeometry> {
    let mut out = Vec::new();
    for drawing in drawings {
        let mut current: Option<Subpath> = None;
        for op in &drawing.ops {
            match *op {
                AbstractOp::Move(p) => {
                    if let Some(done) = current.take() {
                        done.flush_into(&mut out);
                    }
                    current = Some(Subpath::start(p));
                }
                AbstractOp::Line(p) => {
                    if let Some(sub) = current.as_mut() {
                        sub.line_to(p);
                    }
                }
                AbstractOp::Curve(c1, c2, p) => {
                    if let Some(sub) = current.as_mut() {
                        sub.curve_to(c1, c2, p);
                    }
                }
            }
        }
        if let Some(done) = current {
            done.flush_into(&mut out);
        }
    }
    out
}

/// Sketch every stroke with `generator` and flatten the result.
pub fn trace_strokes<G: SketchGenerator + ?Sized>(
    generator: &G,
    strokes: &[StrokeRequest],
) -> Vec<PathGeometry> {
    let drawings: Vec<Drawing> = strokes
        .iter()
        .flat_map(|s| generator.sketch(&s.primitive, &s.style()))
        .collect();
    flatten_drawings(&drawings)
}

/// Total arc length of a path.
pub fn measure(path: &BezPath) -> f64 {
    path.segments().map(|seg| seg.arclen(LENGTH_ACCURACY)).sum()
}

struct Subpath {
    d: String,
    path: BezPath,
    segments: usize,
}

impl Subpath {
    fn start(p: Point) -> Self {
        let mut path = BezPath::new();
        path.move_to(p);
        Self {
            d: format!("M{} {}", num(p.x), num(p.y)),
            path,
            segments: 0,
        }
    }

    fn line_to(&mut self, p: Point) {
        self.d.push_str(&format!(" L{} {}", num(p.x), num(p.y)));
        self.path.line_to(p);
        self.segments += 1;
    }

    fn curve_to(&mut self, c1: Point, c2: Point, p: Point) {
        self.d.push_str(&format!(
            " C{} {}, {} {}, {} {}",
            num(c1.x),
            num(c1.y),
            num(c2.x),
            num(c2.y),
            num(p.x),
            num(p.y)
        ));
        self.path.curve_to(c1, c2, p);
        self.segments += 1;
    }

    // A lone move still counts: it is a non-empty path string.
    fn flush_into(self, out: &mut Vec<PathGeometry>) {
        let length = if self.segments == 0 {
            0.0
        } else {
            measure(&self.path)
        };
        out.push(PathGeometry {
            d: self.d,
            path: self.path,
            length,
        });
    }
}

/// Shortest round-trip decimal, with negative zero printed as `0`.
pub(crate) fn num(v: f64) -> String {
    if v == 0.0 {
        "0".to_string()
    } else {
        format!("{v}")
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compile/flatten.rs"]
mod tests;
