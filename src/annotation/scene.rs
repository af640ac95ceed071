use std::path::Path;

use anyhow::Context as _;

use crate::{
    annotation::model::AnnotationConfig,
    foundation::core::Rect,
    foundation::error::{RoughError, RoughResult},
};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// A drawing surface with an ordered list of annotations to draw on it.
///
/// Annotations reveal one after another in list order (see [`crate::AnnotationGroup`]).
pub struct Scene {
    /// Surface width in user units.
    pub width: f64,
    /// Surface height in user units.
    pub height: f64,
    /// Base seed; per-annotation seeds are derived from it.
    #[serde(default)]
    pub seed: u64,
    /// Annotations in reveal order.
    pub annotations: Vec<SceneAnnotation>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// One annotation placed on a [`Scene`].
pub struct SceneAnnotation {
    /// Target region.
    pub rect: Rect,
    /// Annotation config.
    pub config: AnnotationConfig,
    /// Explicit seed overriding the derived one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Scene {
    /// Parse a scene from JSON text.
    pub fn from_json(json: &str) -> RoughResult<Self> {
        let scene: Self =
            serde_json::from_str(json).map_err(|e| RoughError::serde(e.to_string()))?;
        scene.validate()?;
        Ok(scene)
    }

    /// Read and parse a scene JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> RoughResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("read scene '{}'", path.display()))?;
        Self::from_json(&json)
    }

    /// Check surface size, rects and configs.
    pub fn validate(&self) -> RoughResult<()> {
        if !self.width.is_finite() || !self.height.is_finite() {
            return Err(RoughError::validation("scene size must be finite"));
        }
        if self.width <= 0.0 || self.height <= 0.0 {
            return Err(RoughError::validation("scene size must be > 0"));
        }
        for (idx, a) in self.annotations.iter().enumerate() {
            a.rect
                .validate()
                .map_err(|e| RoughError::validation(format!("annotation {idx}: {e}")))?;
            a.config
                .validate()
                .map_err(|e| RoughError::validation(format!("annotation {idx}: {e}")))?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/annotation/scene.rs"]
mod tests;
