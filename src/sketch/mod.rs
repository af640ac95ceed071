//! Sketch generator interface, style presets and the built-in generator.

pub(crate) mod ops;
pub(crate) mod rough;
pub(crate) mod style;
