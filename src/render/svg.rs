use std::fmt::Write as _;

use crate::{
    compile::flatten::{PathGeometry, num},
    foundation::error::{RoughError, RoughResult},
    render::surface::{DASH_KEYFRAMES, PathStyle, Surface},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// Index of a path inside an [`SvgSurface`].
pub struct SvgPathId(pub usize);

#[derive(Clone, Debug)]
struct SvgPath {
    d: String,
    style: Option<PathStyle>,
}

#[derive(Clone, Debug)]
/// In-memory SVG document collecting annotation paths.
pub struct SvgSurface {
    width: f64,
    height: f64,
    paths: Vec<SvgPath>,
}

impl SvgSurface {
    /// Empty document of the given size.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            paths: Vec::new(),
        }
    }

    /// Number of paths created so far.
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// True when no paths were created.
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Time at which the last path finishes drawing.
    pub fn end_ms(&self) -> f64 {
        self.paths
            .iter()
            .filter_map(|p| p.style.as_ref()?.dash.as_ref())
            .map(|d| d.plan.end_ms())
            .fold(0.0, f64::max)
    }

    /// Animated document: dash styles plus the CSS animation that reveals every path.
    pub fn to_svg_string(&self) -> String {
        let mut out = self.open_tag();
        let _ = writeln!(
            out,
            "<style>@keyframes {DASH_KEYFRAMES} {{ to {{ stroke-dashoffset: 0; }} }}</style>"
        );
        for path in &self.paths {
            let dash = path.style.as_ref().and_then(|s| s.dash.as_ref()).map(|dash| {
                let length = num(dash.length);
                format!(
                    "stroke-dashoffset: {length}; stroke-dasharray: {length}; animation: {};",
                    dash.css_shorthand()
                )
            });
            write_path(&mut out, path, dash.as_deref());
        }
        out.push_str("</svg>\n");
        out
    }

    /// Static document frozen at `t_ms` on the animation clock.
    ///
    /// Paths that have not started are hidden behind their full dash offset; finished or
    /// unanimated paths are drawn plainly.
    pub fn snapshot_at(&self, t_ms: f64) -> String {
        let mut out = self.open_tag();
        for path in &self.paths {
            let dash = path
                .style
                .as_ref()
                .and_then(|s| s.dash.as_ref())
                .map(|dash| {
                    let offset = dash.dash_offset_at(t_ms);
                    format!(
                        "stroke-dashoffset: {}; stroke-dasharray: {};",
                        num(offset),
                        num(dash.length)
                    )
                });
            write_path(&mut out, path, dash.as_deref());
        }
        out.push_str("</svg>\n");
        out
    }

    fn open_tag(&self) -> String {
        let (w, h) = (num(self.width), num(self.height));
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n"
        )
    }

    fn path_mut(&mut self, id: SvgPathId) -> RoughResult<&mut SvgPath> {
        self.paths
            .get_mut(id.0)
            .ok_or_else(|| RoughError::render(format!("unknown svg path {}", id.0)))
    }
}

impl Surface for SvgSurface {
    type Handle = SvgPathId;

    fn create_path(&mut self, geometry: &PathGeometry) -> RoughResult<SvgPathId> {
        if geometry.d.trim().is_empty() {
            return Err(RoughError::render("path data must be non-empty"));
        }
        self.paths.push(SvgPath {
            d: geometry.d.clone(),
            style: None,
        });
        Ok(SvgPathId(self.paths.len() - 1))
    }

    fn set_style(&mut self, handle: &SvgPathId, style: &PathStyle) -> RoughResult<()> {
        self.path_mut(*handle)?.style = Some(style.clone());
        Ok(())
    }
}

fn write_path(out: &mut String, path: &SvgPath, inline_style: Option<&str>) {
    let _ = write!(out, "<path d=\"{}\" fill=\"none\"", escape_xml(&path.d));
    if let Some(style) = &path.style {
        let _ = write!(
            out,
            " stroke=\"{}\" stroke-width=\"{}\"",
            escape_xml(&style.stroke),
            num(style.stroke_width)
        );
    }
    if let Some(css) = inline_style {
        let _ = write!(out, " style=\"{}\"", escape_xml(css));
    }
    out.push_str("/>\n");
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
#[path = "../../tests/unit/render/svg.rs"]
mod tests;
