//! Annotation geometry -> stroke requests -> flat paths.

pub(crate) mod flatten;
pub(crate) mod strokes;
