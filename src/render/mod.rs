//! Putting prepared annotations on a surface.

pub(crate) mod annotate;
pub(crate) mod surface;
pub(crate) mod svg;
