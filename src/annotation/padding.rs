use crate::annotation::model::{FullPadding, Padding};

/// Padding applied when none is configured or the configured shape is unusable.
pub const DEFAULT_PADDING: FullPadding = [5.0, 5.0, 5.0, 5.0];

pub(crate) const TOP: usize = 0;
pub(crate) const RIGHT: usize = 1;
pub(crate) const BOTTOM: usize = 2;
pub(crate) const LEFT: usize = 3;

/// Expand user padding into `[top, right, bottom, left]`.
///
/// Never fails: an absent value or an empty list yields [`DEFAULT_PADDING`], and lists longer
/// than four entries use the first four.
pub fn normalize_padding(padding: Option<&Padding>) -> FullPadding {
    match padding {
        None => DEFAULT_PADDING,
        Some(Padding::Uniform(p)) => [*p; 4],
        Some(Padding::Sides(sides)) => match sides.as_slice() {
            [] => DEFAULT_PADDING,
            [a] => [*a; 4],
            [a, b] => [*a, *b, *a, *b],
            [a, b, c] => [*a, *b, *c, *b],
            [top, right, bottom, left, ..] => [*top, *right, *bottom, *left],
        },
    }
}

#[cfg(test)]
#[path = "../../tests/unit/annotation/padding.rs"]
mod tests;
