// THEORY:
// The `region_extractor` grows one connected region from a starting pixel. It is
// the flood-fill at the heart of the counter, and the only place the grid is
// mutated.
//
// Key architectural principles:
// 1.  **4-Connectivity**: Only left, right, up and down neighbors join a region,
//     visited in exactly that order. Diagonal contact does not merge objects.
// 2.  **Destructive Visiting**: Every pixel added to the region is cleared in the
//     grid at the same moment. The grid doubles as the visited set, so a pixel
//     can never be counted twice, and the catalog scan that follows skips it.
// 3.  **Explicit Work List**: The traversal keeps its own stack of frames
//     (pixel + next neighbor to try) instead of recursing. The resulting order
//     is the pre-order of a recursive depth-first fill, but a region of a
//     million pixels costs heap, not call stack. An optional frame budget turns
//     runaway growth into an error.
// 4.  **Boundary Policy**: By default the fill never leaves the grid. The
//     `EdgeSpill` policy reproduces the classic off-by-one bounds check, where a
//     neighbor one step past the right or bottom edge is recorded in the region
//     (and so widens its bounding box) without ever being read or cleared.

pub mod region_extractor {
    use crate::core_modules::grid::grid::DarkGrid;
    use crate::core_modules::region::{Coordinate, Region};
    use crate::error::{Result, SilhouetteError};

    /// How the fill treats neighbors that fall outside the grid.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    pub enum BoundaryPolicy {
        /// Neighbors outside `[0, height) x [0, width)` are ignored.
        #[default]
        Strict,
        /// A neighbor exactly one step past the right or bottom edge is appended
        /// to the region, but never read, cleared or expanded.
        EdgeSpill,
    }

    /// Tunables for a single extraction pass.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    pub struct ExtractionConfig {
        pub boundary: BoundaryPolicy,
        /// Maximum number of live frames on the work list. `None` means the
        /// stack may grow up to the grid's pixel count.
        pub stack_budget: Option<usize>,
    }

    /// Neighbor order as (row delta, column delta): left, right, up, down.
    const NEIGHBOR_OFFSETS: [(isize, isize); 4] = [(0, -1), (0, 1), (-1, 0), (1, 0)];

    /// One pending pixel on the work list and the index of the next neighbor to try.
    struct Frame {
        coord: Coordinate,
        next: usize,
    }

    /// Extracts the region containing `start` and clears every pixel of it in
    /// `grid`. Returns an empty region when `start` is not dark.
    pub fn extract_region(
        grid: &mut DarkGrid,
        start: Coordinate,
        config: &ExtractionConfig,
    ) -> Result<Region> {
        if !grid.is_dark(start.row, start.col) {
            return Ok(Region::default());
        }

        let mut coords: Vec<Coordinate> = Vec::new();
        let mut stack: Vec<Frame> = Vec::new();
        consume(grid, start, &mut coords, &mut stack, config)?;

        while let Some(frame) = stack.last_mut() {
            let direction = frame.next;
            frame.next += 1;
            let origin = frame.coord;

            let Some(&(d_row, d_col)) = NEIGHBOR_OFFSETS.get(direction) else {
                stack.pop();
                continue;
            };

            // Negative neighbors never exist, whatever the policy.
            let (Some(row), Some(col)) = (
                origin.row.checked_add_signed(d_row),
                origin.col.checked_add_signed(d_col),
            ) else {
                continue;
            };
            let neighbor = Coordinate::new(row, col);

            if grid.is_dark(row, col) {
                consume(grid, neighbor, &mut coords, &mut stack, config)?;
            } else if config.boundary == BoundaryPolicy::EdgeSpill && !grid.contains(row, col) {
                coords.push(neighbor);
            }
        }

        Ok(Region::new(coords))
    }

    /// Records a dark pixel, clears it, and schedules its neighbors.
    fn consume(
        grid: &mut DarkGrid,
        coord: Coordinate,
        coords: &mut Vec<Coordinate>,
        stack: &mut Vec<Frame>,
        config: &ExtractionConfig,
    ) -> Result<()> {
        if let Some(budget) = config.stack_budget {
            if stack.len() >= budget {
                return Err(SilhouetteError::StackBudgetExceeded { budget });
            }
        }
        coords.push(coord);
        grid.clear(coord.row, coord.col);
        stack.push(Frame { coord, next: 0 });
        Ok(())
    }
}
