// THEORY:
// The `silhouette_classifier` is a coarse shape heuristic, not a person detector.
// A standing adult is roughly eight "heads" tall, and across the shoulders and
// arms roughly two to five heads wide. So we cut the region's bounding-box height
// into eight units and ask how many units wide the box is. Anything strictly
// between the lower and upper ratio bounds is called silhouette-like.
//
// The function is pure: it reads only the region's coordinates and the config.
// A region with zero height has no unit to measure against and is never
// silhouette-like.

use crate::core_modules::region::{BoundingBox, Region};

/// Ratios at or below this are too narrow for a person (poles, lines).
pub const MIN_SILHOUETTE_RATIO: f64 = 1.5;
/// Ratios at or above this are too wide for a person (blocks, crowds).
pub const MAX_SILHOUETTE_RATIO: f64 = 5.5;
/// How many equal units the region height is divided into.
pub const HEIGHT_DIVISIONS: f64 = 8.0;

/// Tunable bounds for the aspect-ratio heuristic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassifierConfig {
    pub min_ratio: f64,
    pub max_ratio: f64,
    pub height_divisions: f64,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            min_ratio: MIN_SILHOUETTE_RATIO,
            max_ratio: MAX_SILHOUETTE_RATIO,
            height_divisions: HEIGHT_DIVISIONS,
        }
    }
}

impl ClassifierConfig {
    /// Width measured in height units, or `None` when the box has no height.
    pub fn aspect_ratio(&self, bbox: &BoundingBox) -> Option<f64> {
        let width = bbox.width() as f64;
        let height = bbox.height() as f64;
        let unit = height / self.height_divisions;
        if unit <= 0.0 || !unit.is_finite() {
            return None;
        }
        Some(width / unit)
    }

    /// True iff `min_ratio < ratio < max_ratio`.
    pub fn is_silhouette_like(&self, region: &Region) -> bool {
        region
            .bounding_box()
            .and_then(|bbox| self.aspect_ratio(&bbox))
            .is_some_and(|ratio| self.min_ratio < ratio && ratio < self.max_ratio)
    }
}

/// Classifies with the default bounds.
pub fn is_silhouette_like(region: &Region) -> bool {
    ClassifierConfig::default().is_silhouette_like(region)
}
