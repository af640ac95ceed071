//! Annotation configuration boundary: kinds, padding, scenes.

pub(crate) mod model;
pub(crate) mod padding;
pub(crate) mod scene;
