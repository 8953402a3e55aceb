// THEORY:
// This file is the main entry point for the `silhouette_counter` library crate.
// The public face of the crate is the `SilhouettePipeline` (one image at a time)
// and the `ParallelPipeline` (many images across a worker pool), together with
// their configuration and the `ImageSummary` they produce.
//
// The stages underneath live in `core_modules` and stay usable on their own:
// a `DarkGrid` can be built by hand, scanned into a `RegionCatalog`, and each
// `Region` classified, without ever touching an image file.

pub mod core_modules;
pub mod error;
pub mod parallel_pipeline;
pub mod pipeline;

pub use core_modules::catalog::{RegionCatalog, build_catalog};
pub use core_modules::grid::grid::DarkGrid;
pub use core_modules::region::{BoundingBox, Coordinate, Region};
pub use core_modules::region_extractor::region_extractor::{ExtractionConfig, extract_region};
pub use core_modules::silhouette_classifier::is_silhouette_like;
pub use error::{Result, SilhouetteError};
pub use parallel_pipeline::ParallelPipeline;
pub use pipeline::{
    BoundaryPolicy, ClassifierConfig, ImageSummary, PipelineConfig, SilhouettePipeline,
};
