// THEORY:
// The catalog builder turns a grid into the list of every object in it. It scans
// rows top to bottom and columns left to right, and each time it meets a pixel
// that is still dark it hands that pixel to the extractor. Because extraction
// clears everything it touches, each object is found exactly once, at its first
// pixel in scan order, and the catalog comes out in discovery order.

use crate::core_modules::grid::grid::DarkGrid;
use crate::core_modules::region::{Coordinate, Region};
use crate::core_modules::region_extractor::region_extractor::{ExtractionConfig, extract_region};
use crate::error::Result;
use tracing::debug;

/// Every region found in one image, in discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegionCatalog {
    regions: Vec<Region>,
}

impl RegionCatalog {
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    pub fn iter(&self) -> impl Iterator<Item = &Region> {
        self.regions.iter()
    }

    /// Total coordinates across all regions.
    pub fn pixel_count(&self) -> usize {
        self.regions.iter().map(Region::len).sum()
    }
}

/// Scans `grid` in row-major order and extracts every region. The grid is left
/// fully cleared.
pub fn build_catalog(grid: &mut DarkGrid, config: &ExtractionConfig) -> Result<RegionCatalog> {
    let mut regions = Vec::new();
    for row in 0..grid.height() {
        for col in 0..grid.width() {
            if !grid.is_dark(row, col) {
                continue;
            }
            let region = extract_region(grid, Coordinate::new(row, col), config)?;
            debug!(row, col, size = region.len(), "extracted region");
            regions.push(region);
        }
    }
    Ok(RegionCatalog { regions })
}
