pub mod catalog;
pub mod grid;
pub mod loader;
pub mod pixel;
pub mod region;
pub mod region_extractor;
pub mod report;
pub mod silhouette_classifier;
