use silhouette_counter::{
    BoundaryPolicy, Coordinate, DarkGrid, ExtractionConfig, PipelineConfig, SilhouettePipeline,
    build_catalog, is_silhouette_like,
};
use std::collections::HashMap;

/// Small deterministic generator so the grids are the same on every run.
struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0 >> 33
    }
}

fn random_grid(seed: u64, width: usize, height: usize, density_percent: u64) -> DarkGrid {
    let mut rng = Lcg(seed);
    let cells = (0..width * height)
        .map(|_| rng.next() % 100 < density_percent)
        .collect();
    DarkGrid::from_cells(width, height, cells).unwrap()
}

/// Labels dark cells by union-find over 4-neighbors, independently of the flood fill.
fn reference_labels(grid: &DarkGrid) -> HashMap<Coordinate, usize> {
    let (width, height) = (grid.width(), grid.height());
    let mut parent: Vec<usize> = (0..width * height).collect();

    fn find(parent: &mut [usize], mut i: usize) -> usize {
        while parent[i] != i {
            parent[i] = parent[parent[i]];
            i = parent[i];
        }
        i
    }

    for row in 0..height {
        for col in 0..width {
            if !grid.is_dark(row, col) {
                continue;
            }
            let here = row * width + col;
            if col + 1 < width && grid.is_dark(row, col + 1) {
                let (a, b) = (find(&mut parent, here), find(&mut parent, here + 1));
                parent[a] = b;
            }
            if row + 1 < height && grid.is_dark(row + 1, col) {
                let (a, b) = (find(&mut parent, here), find(&mut parent, here + width));
                parent[a] = b;
            }
        }
    }

    let mut labels = HashMap::new();
    for row in 0..height {
        for col in 0..width {
            if grid.is_dark(row, col) {
                labels.insert(Coordinate::new(row, col), find(&mut parent, row * width + col));
            }
        }
    }
    labels
}

#[test]
fn regions_match_connected_components() {
    for seed in 0..20 {
        let original = random_grid(seed, 37, 23, 45);
        let labels = reference_labels(&original);

        let mut grid = original.clone();
        let catalog = build_catalog(&mut grid, &ExtractionConfig::default()).unwrap();

        assert_eq!(grid.dark_count(), 0);
        assert_eq!(catalog.pixel_count(), original.dark_count(), "seed {seed}");

        let mut components_seen = HashMap::new();
        for (index, region) in catalog.iter().enumerate() {
            let label = labels[&region.coords()[0]];
            assert!(
                region.iter().all(|c| labels[c] == label),
                "seed {seed}: region {index} spans two components"
            );
            assert!(
                components_seen.insert(label, index).is_none(),
                "seed {seed}: component split across regions"
            );
        }
        let distinct: std::collections::HashSet<_> = labels.values().collect();
        assert_eq!(catalog.len(), distinct.len(), "seed {seed}");
    }
}

#[test]
fn bounding_boxes_contain_their_regions() {
    for seed in 100..110 {
        let mut grid = random_grid(seed, 30, 30, 55);
        let catalog = build_catalog(&mut grid, &ExtractionConfig::default()).unwrap();
        for region in catalog.iter() {
            let bbox = region.bounding_box().unwrap();
            assert!(region.iter().all(|&c| bbox.contains(c)));
            assert!(bbox.max_row < 30 && bbox.max_col < 30);
            assert_eq!(is_silhouette_like(region), is_silhouette_like(region));
        }
    }
}

#[test]
fn edge_spill_only_adds_coordinates_just_outside_the_grid() {
    for seed in 200..210 {
        let original = random_grid(seed, 17, 13, 60);
        let mut grid = original.clone();
        let config = ExtractionConfig {
            boundary: BoundaryPolicy::EdgeSpill,
            ..Default::default()
        };
        let catalog = build_catalog(&mut grid, &config).unwrap();

        let dark_edge_cells = (0..13).filter(|&r| original.is_dark(r, 16)).count()
            + (0..17).filter(|&c| original.is_dark(12, c)).count();
        let spilled: Vec<Coordinate> = catalog
            .iter()
            .flat_map(|r| r.iter().copied())
            .filter(|c| c.row >= 13 || c.col >= 17)
            .collect();

        assert_eq!(spilled.len(), dark_edge_cells, "seed {seed}");
        assert!(spilled.iter().all(|c| c.row <= 13 && c.col <= 17));
        assert_eq!(catalog.pixel_count(), original.dark_count() + spilled.len());
    }
}

#[test]
fn edge_spill_widens_boxes_on_the_right_edge() {
    // A 1 x 4 bar in the last column. Inside the grid its box is 0 wide, so it
    // is no person. The spilled column makes it 1 wide: ratio 1 / (3 / 8) = 2.67.
    let grid: DarkGrid = "...\n..#\n..#\n..#\n..#\n...".parse().unwrap();

    let strict = SilhouettePipeline::default()
        .process_grid("bar", grid.clone())
        .unwrap();
    let spill = SilhouettePipeline::new(PipelineConfig {
        boundary_policy: BoundaryPolicy::EdgeSpill,
        ..Default::default()
    })
    .process_grid("bar", grid)
    .unwrap();

    assert_eq!((strict.valid_count, strict.silhouette_count), (1, 0));
    assert_eq!((spill.valid_count, spill.silhouette_count), (1, 1));
}

#[test]
fn blank_and_single_dot_images() {
    let blank: DarkGrid = "...\n...\n...".parse().unwrap();
    let summary = SilhouettePipeline::default().process_grid("blank", blank).unwrap();
    assert_eq!(
        summary.to_string(),
        "In file blank was found BlackObject 0 objects. And approximately 0 people."
    );

    let dot: DarkGrid = "...\n.#.\n...".parse().unwrap();
    let summary = SilhouettePipeline::default().process_grid("dot", dot).unwrap();
    assert_eq!((summary.valid_count, summary.silhouette_count), (1, 0));
}
