// THEORY:
// The `DarkGrid` is the substrate of the whole counter. It is a rectangular
// matrix of booleans where `true` means "this pixel was classified as dark" by
// whatever thresholding rule produced it (see `loader`).
//
// Key architectural principles:
// 1.  **Fixed Shape**: Width and height are set once at construction. Every row
//     has the same length; ragged input is rejected rather than padded.
// 2.  **Destructive Scan**: The grid is the "visited" marker for region
//     extraction. Clearing a cell is how the extractor records that a pixel has
//     been consumed, so a pixel can never land in two regions.
// 3.  **Safe Edges**: Reads outside the grid answer "not dark" and clears outside
//     the grid do nothing. Callers never have to bounds-check before asking.

pub mod grid {
    use crate::error::{Result, SilhouetteError};

    /// A fixed-size, row-major matrix of dark/not-dark cells.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct DarkGrid {
        width: usize,
        height: usize,
        cells: Vec<bool>,
    }

    impl DarkGrid {
        /// Creates a grid with every cell set to "not dark".
        pub fn new(width: usize, height: usize) -> Self {
            Self {
                width,
                height,
                cells: vec![false; width * height],
            }
        }

        /// Builds a grid from a flat row-major buffer.
        pub fn from_cells(width: usize, height: usize, cells: Vec<bool>) -> Result<Self> {
            let expected = width * height;
            if cells.len() != expected {
                return Err(SilhouetteError::BufferSize {
                    expected,
                    found: cells.len(),
                });
            }
            Ok(Self {
                width,
                height,
                cells,
            })
        }

        /// Builds a grid from nested rows. The first row fixes the width.
        pub fn from_rows(rows: &[Vec<bool>]) -> Result<Self> {
            let height = rows.len();
            let width = rows.first().map_or(0, Vec::len);
            let mut cells = Vec::with_capacity(width * height);
            for (row, values) in rows.iter().enumerate() {
                if values.len() != width {
                    return Err(SilhouetteError::RaggedGrid {
                        row,
                        expected: width,
                        found: values.len(),
                    });
                }
                cells.extend_from_slice(values);
            }
            Ok(Self {
                width,
                height,
                cells,
            })
        }

        pub fn width(&self) -> usize {
            self.width
        }

        pub fn height(&self) -> usize {
            self.height
        }

        /// `width * height`, the image area used by the noise filter.
        pub fn total_pixels(&self) -> usize {
            self.cells.len()
        }

        pub fn contains(&self, row: usize, col: usize) -> bool {
            row < self.height && col < self.width
        }

        /// Out-of-bounds cells are never dark.
        pub fn is_dark(&self, row: usize, col: usize) -> bool {
            self.contains(row, col) && self.cells[row * self.width + col]
        }

        pub fn set_dark(&mut self, row: usize, col: usize) {
            if self.contains(row, col) {
                self.cells[row * self.width + col] = true;
            }
        }

        /// Marks a cell as consumed. A no-op outside the grid.
        pub fn clear(&mut self, row: usize, col: usize) {
            if self.contains(row, col) {
                self.cells[row * self.width + col] = false;
            }
        }

        /// The number of cells still dark.
        pub fn dark_count(&self) -> usize {
            self.cells.iter().filter(|&&dark| dark).count()
        }
    }

    /// Parses an ASCII picture where `#` is dark and anything else is not.
    /// Handy for building small grids by hand.
    impl std::str::FromStr for DarkGrid {
        type Err = SilhouetteError;

        fn from_str(s: &str) -> Result<Self> {
            let rows: Vec<Vec<bool>> = s
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(|line| line.chars().map(|c| c == '#').collect())
                .collect();
            Self::from_rows(&rows)
        }
    }
}
