// THEORY:
// The reporter is the last step for one image. It takes the finished catalog and
// produces two numbers:
// 1.  **Valid objects**: every region, minus the ones too small to matter. A
//     region is noise when it covers fewer pixels than a fixed fraction of the
//     image area (`total_pixels / noise_area_divisor`, integer division).
// 2.  **Probable people**: every region the classifier calls silhouette-like.
//     This tally runs over ALL regions, noise included; the two counts are
//     independent, not composed.

use crate::core_modules::catalog::RegionCatalog;
use crate::core_modules::silhouette_classifier::ClassifierConfig;
use std::fmt;

/// Regions smaller than `total_pixels / NOISE_AREA_DIVISOR` are noise.
pub const NOISE_AREA_DIVISOR: usize = 1000;

/// The per-image outcome of a counting pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSummary {
    /// Identifier of the image, usually its path.
    pub name: String,
    /// Regions found before noise filtering.
    pub region_count: usize,
    /// Regions that survived the noise filter.
    pub valid_count: usize,
    /// Regions the classifier called silhouette-like.
    pub silhouette_count: usize,
    /// `width * height` of the source grid.
    pub total_pixels: usize,
}

impl fmt::Display for ImageSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "In file {} was found BlackObject {} objects. And approximately {} people.",
            self.name, self.valid_count, self.silhouette_count
        )
    }
}

/// The minimum region size, in pixels, that is not considered noise.
pub fn noise_threshold(total_pixels: usize, noise_area_divisor: usize) -> usize {
    total_pixels.checked_div(noise_area_divisor).unwrap_or(0)
}

pub fn summarize(
    name: impl Into<String>,
    catalog: &RegionCatalog,
    total_pixels: usize,
    classifier: &ClassifierConfig,
    noise_area_divisor: usize,
) -> ImageSummary {
    let threshold = noise_threshold(total_pixels, noise_area_divisor);
    let noise = catalog.iter().filter(|r| r.len() < threshold).count();
    let silhouette_count = catalog
        .iter()
        .filter(|r| classifier.is_silhouette_like(r))
        .count();

    ImageSummary {
        name: name.into(),
        region_count: catalog.len(),
        valid_count: catalog.len() - noise,
        silhouette_count,
        total_pixels,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_modules::catalog::build_catalog;
    use crate::core_modules::grid::grid::DarkGrid;
    use crate::core_modules::region_extractor::region_extractor::ExtractionConfig;

    fn summary_of(grid: &mut DarkGrid) -> ImageSummary {
        let total = grid.total_pixels();
        let catalog = build_catalog(grid, &ExtractionConfig::default()).unwrap();
        summarize(
            "test.png",
            &catalog,
            total,
            &ClassifierConfig::default(),
            NOISE_AREA_DIVISOR,
        )
    }

    fn fill(grid: &mut DarkGrid, top: usize, left: usize, width: usize, height: usize) {
        for row in top..top + height {
            for col in left..left + width {
                grid.set_dark(row, col);
            }
        }
    }

    #[test]
    fn blank_image_reports_nothing() {
        let mut grid = DarkGrid::new(3, 3);
        let summary = summary_of(&mut grid);
        assert_eq!(summary.valid_count, 0);
        assert_eq!(summary.silhouette_count, 0);
        assert_eq!(
            summary.to_string(),
            "In file test.png was found BlackObject 0 objects. And approximately 0 people."
        );
    }

    #[test]
    fn single_pixel_in_small_image_counts_but_is_no_person() {
        let mut grid: DarkGrid = "...\n.#.\n...".parse().unwrap();
        let summary = summary_of(&mut grid);
        // 9 / 1000 == 0, so nothing is noise.
        assert_eq!(summary.region_count, 1);
        assert_eq!(summary.valid_count, 1);
        assert_eq!(summary.silhouette_count, 0);
    }

    #[test]
    fn person_shaped_rectangle_is_counted() {
        let mut grid = DarkGrid::new(20, 30);
        fill(&mut grid, 5, 5, 4, 16);
        let summary = summary_of(&mut grid);
        assert_eq!(summary.valid_count, 1);
        assert_eq!(summary.silhouette_count, 1);
    }

    #[test]
    fn square_is_an_object_but_not_a_person() {
        let mut grid = DarkGrid::new(30, 30);
        fill(&mut grid, 2, 2, 20, 20);
        let summary = summary_of(&mut grid);
        assert_eq!(summary.valid_count, 1);
        assert_eq!(summary.silhouette_count, 0);
    }

    #[test]
    fn two_large_rectangles_are_two_valid_objects() {
        let mut grid = DarkGrid::new(100, 100);
        fill(&mut grid, 10, 10, 10, 30);
        fill(&mut grid, 50, 60, 30, 10);
        let summary = summary_of(&mut grid);
        assert_eq!(summary.region_count, 2);
        assert_eq!(summary.valid_count, 2);
    }

    #[test]
    fn small_specks_are_noise_but_still_tallied_as_people() {
        // 200 x 100 image: anything under 20 pixels is noise.
        let mut grid = DarkGrid::new(200, 100);
        fill(&mut grid, 10, 10, 20, 20);
        // A 1 x 5 sliver spans 0 x 4: not a person.
        fill(&mut grid, 60, 60, 1, 5);
        // A 15 pixel speck spanning 2 x 8, ratio 2.0: noise-sized, yet person-like.
        fill(&mut grid, 70, 80, 3, 3);
        fill(&mut grid, 73, 81, 1, 6);
        let summary = summary_of(&mut grid);
        assert_eq!(summary.region_count, 3);
        assert_eq!(summary.valid_count, 1);
        assert_eq!(summary.silhouette_count, 1);
    }

    #[test]
    fn zero_divisor_disables_the_noise_filter() {
        assert_eq!(noise_threshold(10_000, 0), 0);
        assert_eq!(noise_threshold(10_000, 1000), 10);
        assert_eq!(noise_threshold(999, 1000), 0);
    }
}
