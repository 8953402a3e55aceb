// THEORY:
// A `Region` is the spatial unit of the counter: one maximal, 4-connected set
// of dark pixels, stored as the ordered list of coordinates the extractor
// visited. It is a "dumb" data container. It knows how to summarize its own
// extent (the bounding box) but nothing about how it was found or what it
// looks like.
//
// Regions are created once by a single extraction pass, never modified
// afterwards, and owned by the catalog of the image they came from.

/// One grid cell, addressed as (row, column).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    pub row: usize,
    pub col: usize,
}

impl Coordinate {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// The smallest axis-aligned rectangle enclosing a region, inclusive on all sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub min_row: usize,
    pub max_row: usize,
    pub min_col: usize,
    pub max_col: usize,
}

impl BoundingBox {
    /// `max_col - min_col`. A single column has width 0.
    pub fn width(&self) -> usize {
        self.max_col - self.min_col
    }

    /// `max_row - min_row`. A single row has height 0.
    pub fn height(&self) -> usize {
        self.max_row - self.min_row
    }

    pub fn contains(&self, coord: Coordinate) -> bool {
        (self.min_row..=self.max_row).contains(&coord.row)
            && (self.min_col..=self.max_col).contains(&coord.col)
    }
}

/// An ordered sequence of coordinates belonging to one connected dark object.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Region {
    coords: Vec<Coordinate>,
}

impl Region {
    pub fn new(coords: Vec<Coordinate>) -> Self {
        Self { coords }
    }

    /// The number of coordinates, i.e. the region's area in pixels.
    pub fn len(&self) -> usize {
        self.coords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    pub fn coords(&self) -> &[Coordinate] {
        &self.coords
    }

    pub fn iter(&self) -> impl Iterator<Item = &Coordinate> {
        self.coords.iter()
    }

    /// Computed on demand; `None` for an empty region.
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        let first = self.coords.first()?;
        let mut bbox = BoundingBox {
            min_row: first.row,
            max_row: first.row,
            min_col: first.col,
            max_col: first.col,
        };
        for coord in &self.coords[1..] {
            bbox.min_row = bbox.min_row.min(coord.row);
            bbox.max_row = bbox.max_row.max(coord.row);
            bbox.min_col = bbox.min_col.min(coord.col);
            bbox.max_col = bbox.max_col.max(coord.col);
        }
        Some(bbox)
    }
}
