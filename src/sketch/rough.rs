//! Built-in hand-drawn sketch generator.
//!
//! Straight strokes become one jittered, bowed cubic per pass. Ellipses are sampled into a ring
//! of jittered points that overshoots its start and is joined with Catmull-Rom cubics. The
//! `double` preset adds a second, calmer pass over every shape.
//!
//! All randomness comes from a SplitMix64 stream seeded by [`SketchStyle::seed`], so a given
//! primitive and style always produce the same ops.

use std::f64::consts::{PI, TAU};

use crate::{
    foundation::core::{Point, Rect},
    foundation::math::{Rng64, mix_seed},
    sketch::ops::{Drawing, SketchGenerator},
    sketch::style::SketchStyle,
};

const SALT_LINE: u64 = 1;
const SALT_RECT: u64 = 2;
const SALT_ELLIPSE: u64 = 3;

#[derive(Clone, Copy, Debug, Default)]
/// Deterministic RoughJS-style [`SketchGenerator`].
pub struct RoughSketcher;

impl RoughSketcher {
    /// Create the generator.
    pub fn new() -> Self {
        Self
    }
}

impl SketchGenerator for RoughSketcher {
    fn render_line(&self, from: Point, to: Point, style: &SketchStyle) -> Vec<Drawing> {
        let mut jitter = Jitter::new(style, SALT_LINE);
        let mut drawing = Drawing::new();
        jitter.double_line(&mut drawing, from, to);
        vec![drawing]
    }

    fn render_rect(&self, rect: Rect, style: &SketchStyle) -> Vec<Drawing> {
        let corners = [
            Point::new(rect.x, rect.y),
            Point::new(rect.right(), rect.y),
            Point::new(rect.right(), rect.bottom()),
            Point::new(rect.x, rect.bottom()),
        ];
        let mut jitter = Jitter::new(style, SALT_RECT);
        (0..4)
            .map(|i| {
                let mut side = Drawing::new();
                jitter.double_line(&mut side, corners[i], corners[(i + 1) % 4]);
                side
            })
            .collect()
    }

    fn render_ellipse(
        &self,
        center: Point,
        width: f64,
        height: f64,
        style: &SketchStyle,
    ) -> Vec<Drawing> {
        let mut jitter = Jitter::new(style, SALT_ELLIPSE);
        let params = jitter.ellipse_params(width, height);
        let mut drawing = Drawing::new();

        let overlap_range = jitter.offset(0.4, 1.0, 1.0);
        let overlap = params.increment * jitter.offset(0.1, overlap_range, 1.0);
        let ring = jitter.ellipse_points(center, &params, 1.0, overlap);
        jitter.curve(&mut drawing, &ring);

        if !style.disable_multi_stroke && style.roughness != 0.0 {
            let ring = jitter.ellipse_points(center, &params, 1.5, 0.0);
            jitter.curve(&mut drawing, &ring);
        }
        vec![drawing]
    }
}

struct EllipseParams {
    increment: f64,
    rx: f64,
    ry: f64,
}

struct Jitter<'a> {
    style: &'a SketchStyle,
    rng: Rng64,
}

impl<'a> Jitter<'a> {
    fn new(style: &'a SketchStyle, salt: u64) -> Self {
        Self {
            style,
            rng: Rng64::new(mix_seed(style.seed, salt)),
        }
    }

    fn offset(&mut self, min: f64, max: f64, gain: f64) -> f64 {
        self.style.roughness * gain * (self.rng.next_f64_01() * (max - min) + min)
    }

    /// Symmetric jitter in `[-x, x)`, scaled by roughness and `gain`.
    fn offset_sym(&mut self, x: f64, gain: f64) -> f64 {
        self.style.roughness * gain * self.rng.offset(x)
    }

    fn double_line(&mut self, out: &mut Drawing, from: Point, to: Point) {
        self.line(out, from, to, false);
        if !self.style.disable_multi_stroke {
            self.line(out, from, to, true);
        }
    }

    /// One bowed pass; `overlay` passes use half the endpoint jitter.
    fn line(&mut self, out: &mut Drawing, from: Point, to: Point, overlay: bool) {
        let length_sq = (from - to).hypot2();
        let length = length_sq.sqrt();
        let gain = if length < 200.0 {
            1.0
        } else if length > 500.0 {
            0.4
        } else {
            -0.001_666_8 * length + 1.233_334
        };

        let mut offset = self.style.max_randomness_offset;
        if offset * offset * 100.0 > length_sq {
            offset = length / 10.0;
        }
        let spread = if overlay { offset / 2.0 } else { offset };

        let diverge = 0.2 + self.rng.next_f64_01() * 0.2;
        let bow = self.style.bowing * self.style.max_randomness_offset / 200.0;
        let mid_dx = self.offset_sym(bow * (to.y - from.y), gain);
        let mid_dy = self.offset_sym(bow * (from.x - to.x), gain);

        let start = Point::new(
            from.x + self.offset_sym(spread, gain),
            from.y + self.offset_sym(spread, gain),
        );
        out.move_to(start);

        let d = to - from;
        let c1 = Point::new(
            mid_dx + from.x + d.x * diverge + self.offset_sym(spread, gain),
            mid_dy + from.y + d.y * diverge + self.offset_sym(spread, gain),
        );
        let c2 = Point::new(
            mid_dx + from.x + 2.0 * d.x * diverge + self.offset_sym(spread, gain),
            mid_dy + from.y + 2.0 * d.y * diverge + self.offset_sym(spread, gain),
        );
        let end = Point::new(
            to.x + self.offset_sym(spread, gain),
            to.y + self.offset_sym(spread, gain),
        );
        out.curve_to(c1, c2, end);
    }

    fn ellipse_params(&mut self, width: f64, height: f64) -> EllipseParams {
        let perimeter_ish =
            (TAU * (((width / 2.0).powi(2) + (height / 2.0).powi(2)) / 2.0).sqrt()).sqrt();
        let steps = self
            .style
            .curve_step_count
            .max(self.style.curve_step_count / 200f64.sqrt() * perimeter_ish)
            .ceil()
            .max(1.0);
        let increment = TAU / steps;

        let fit_randomness = 1.0 - self.style.curve_fitting;
        let mut rx = (width / 2.0).abs();
        let mut ry = (height / 2.0).abs();
        rx += self.offset_sym(rx * fit_randomness, 1.0);
        ry += self.offset_sym(ry * fit_randomness, 1.0);
        EllipseParams { increment, rx, ry }
    }

    /// Ring of points around the ellipse, padded with one lead-in and three overshoot points
    /// so the Catmull-Rom join has neighbors at both ends.
    fn ellipse_points(
        &mut self,
        c: Point,
        params: &EllipseParams,
        spread: f64,
        overlap: f64,
    ) -> Vec<Point> {
        let EllipseParams { increment, rx, ry } = *params;
        let at = |angle: f64, scale: f64| {
            Point::new(
                c.x + scale * rx * angle.cos(),
                c.y + scale * ry * angle.sin(),
            )
        };
        let mut points = Vec::new();

        if self.style.roughness == 0.0 {
            let step = increment / 4.0;
            points.push(at(-step, 1.0));
            let mut angle = 0.0;
            while angle <= TAU {
                points.push(at(angle, 1.0));
                angle += step;
            }
            points.push(at(0.0, 1.0));
            points.push(at(step, 1.0));
            return points;
        }

        let start = self.offset_sym(0.5, 1.0) - PI / 2.0;
        let mut push = |jitter: &mut Self, p: Point| {
            let dx = jitter.offset_sym(spread, 1.0);
            let dy = jitter.offset_sym(spread, 1.0);
            points.push(Point::new(p.x + dx, p.y + dy));
        };

        push(&mut *self, at(start - increment, 0.9));
        let end = TAU + start - 0.01;
        let mut angle = start;
        while angle < end {
            push(&mut *self, at(angle, 1.0));
            angle += increment;
        }
        push(&mut *self, at(start + TAU + overlap * 0.5, 1.0));
        push(&mut *self, at(start + overlap, 0.98));
        push(&mut *self, at(start + overlap * 0.5, 0.9));
        points
    }

    /// Catmull-Rom spline through `points[1..len-1]`, emitted as cubic Béziers.
    fn curve(&mut self, out: &mut Drawing, points: &[Point]) {
        match points.len() {
            0 | 1 => {}
            2 => self.double_line(out, points[0], points[1]),
            3 => {
                out.move_to(points[1]);
                out.curve_to(points[1], points[2], points[2]);
            }
            len => {
                let s = 1.0 - self.style.curve_tightness;
                out.move_to(points[1]);
                for i in 1..len - 2 {
                    let (prev, cur, next, after) =
                        (points[i - 1], points[i], points[i + 1], points[i + 2]);
                    let c1 = cur + (next - prev) * (s / 6.0);
                    let c2 = next + (cur - after) * (s / 6.0);
                    out.curve_to(c1, c2, next);
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sketch/rough.rs"]
mod tests;
