// THEORY:
// The `pipeline` module is the top-level API of the counter. It chains the
// stages for one image into a single call:
//   file -> loader -> DarkGrid -> catalog (flood fill) -> classifier + noise
//   filter -> ImageSummary
// Each image is independent. The pipeline holds configuration only, so one
// instance can process any number of images, one after another or from many
// threads at once.

use crate::core_modules::catalog::build_catalog;
use crate::core_modules::grid::grid::DarkGrid;
use crate::core_modules::loader::loader::load_grid;
use crate::core_modules::pixel::pixel::{Channel, DEFAULT_DARK_THRESHOLD};
use crate::core_modules::region_extractor::region_extractor::ExtractionConfig;
use crate::core_modules::report::{NOISE_AREA_DIVISOR, summarize};
use crate::error::Result;
use std::path::Path;
use tracing::{debug, info};

// Re-export key data structures for the public API.
pub use crate::core_modules::region_extractor::region_extractor::BoundaryPolicy;
pub use crate::core_modules::report::ImageSummary;
pub use crate::core_modules::silhouette_classifier::ClassifierConfig;

/// Configuration for the SilhouettePipeline, allowing for tunable behavior.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineConfig {
    /// Every RGB channel must be below this for a pixel to be dark.
    pub dark_threshold: Channel,
    pub boundary_policy: BoundaryPolicy,
    /// Frame limit for a single flood fill. `None` is unbounded.
    pub stack_budget: Option<usize>,
    pub classifier: ClassifierConfig,
    /// Regions smaller than `width * height / noise_area_divisor` are noise.
    /// Zero disables the filter.
    pub noise_area_divisor: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            dark_threshold: DEFAULT_DARK_THRESHOLD,
            boundary_policy: BoundaryPolicy::Strict,
            stack_budget: None,
            classifier: ClassifierConfig::default(),
            noise_area_divisor: NOISE_AREA_DIVISOR,
        }
    }
}

impl PipelineConfig {
    fn extraction(&self) -> ExtractionConfig {
        ExtractionConfig {
            boundary: self.boundary_policy,
            stack_budget: self.stack_budget,
        }
    }
}

/// The main, top-level struct for the counter.
#[derive(Debug, Clone, Default)]
pub struct SilhouettePipeline {
    config: PipelineConfig,
}

impl SilhouettePipeline {
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Counts objects and probable people in an already thresholded grid.
    /// The grid is consumed: extraction clears it.
    pub fn process_grid(
        &self,
        name: impl Into<String>,
        mut grid: DarkGrid,
    ) -> Result<ImageSummary> {
        let name = name.into();
        let total_pixels = grid.total_pixels();

        let catalog = build_catalog(&mut grid, &self.config.extraction())?;
        debug!(name = %name, regions = catalog.len(), "built region catalog");

        let summary = summarize(
            name,
            &catalog,
            total_pixels,
            &self.config.classifier,
            self.config.noise_area_divisor,
        );
        info!(
            name = %summary.name,
            regions = summary.region_count,
            valid = summary.valid_count,
            silhouettes = summary.silhouette_count,
            "processed image"
        );
        Ok(summary)
    }

    /// Loads, thresholds and counts a single image file.
    pub fn process_file(&self, path: impl AsRef<Path>) -> Result<ImageSummary> {
        let path = path.as_ref();
        let grid = load_grid(path, self.config.dark_threshold)?;
        self.process_grid(path.display().to_string(), grid)
    }
}
