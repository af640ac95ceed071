use crate::{animation::ease::Ease, compile::flatten::PathGeometry};

#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// Timing of one path's draw-on reveal, in milliseconds.
pub struct AnimationPlan {
    /// How long the path takes to draw.
    pub duration_ms: f64,
    /// When the path starts drawing.
    pub delay_ms: f64,
}

impl AnimationPlan {
    /// Time at which the path is fully drawn.
    pub fn end_ms(&self) -> f64 {
        self.delay_ms + self.duration_ms
    }

    /// Eased reveal progress at `t_ms`: 0 before the delay, 1 from the end on.
    pub fn progress_at(&self, t_ms: f64, ease: Ease) -> f64 {
        if t_ms < self.delay_ms {
            return 0.0;
        }
        if self.duration_ms <= 0.0 || t_ms >= self.end_ms() {
            return 1.0;
        }
        ease.apply((t_ms - self.delay_ms) / self.duration_ms)
    }

    /// Dash offset for a path of `length` at `t_ms` (`length` = hidden, 0 = fully drawn).
    pub fn dash_offset_at(&self, length: f64, t_ms: f64, ease: Ease) -> f64 {
        length * (1.0 - self.progress_at(t_ms, ease))
    }
}

/// Split `total_duration_ms` across paths in proportion to their lengths.
///
/// Paths reveal strictly one after another starting at `start_delay_ms`, so the whole set
/// finishes at `start_delay_ms + total_duration_ms`. When every length is zero all durations
/// are zero.
pub fn schedule(
    lengths: &[f64],
    total_duration_ms: f64,
    start_delay_ms: f64,
) -> Vec<AnimationPlan> {
    let total_length: f64 = lengths.iter().sum();
    let mut elapsed = 0.0;
    lengths
        .iter()
        .map(|&length| {
            let duration_ms = if total_length > 0.0 {
                total_duration_ms * (length / total_length)
            } else {
                0.0
            };
            let plan = AnimationPlan {
                duration_ms,
                delay_ms: start_delay_ms + elapsed,
            };
            elapsed += duration_ms;
            plan
        })
        .collect()
}

/// [`schedule`] over flattened paths.
pub fn schedule_paths(
    paths: &[PathGeometry],
    total_duration_ms: f64,
    start_delay_ms: f64,
) -> Vec<AnimationPlan> {
    let lengths: Vec<f64> = paths.iter().map(|p| p.length).collect();
    schedule(&lengths, total_duration_ms, start_delay_ms)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/schedule.rs"]
mod tests;
