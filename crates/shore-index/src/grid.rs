//! The grid index proper.

use std::collections::HashMap;

use shore_common::BoundingBox;

/// A grid cell address: truncated (lon / cell_size, lat / cell_size).
pub type GridCell = (i64, i64);

fn cell_coord(value: f64, cell_size: f64) -> i64 {
    (value / cell_size) as i64
}

/// All cells spanned by a bounding box under the given cell size, as the
/// inclusive range of truncated cell coordinates between the min and max
/// corners. A degenerate (single-point) bbox still yields one cell.
pub fn cells_overlapping(bbox: &BoundingBox, cell_size: f64) -> Vec<GridCell> {
    let min_x = cell_coord(bbox.min_x, cell_size);
    let max_x = cell_coord(bbox.max_x, cell_size);
    let min_y = cell_coord(bbox.min_y, cell_size);
    let max_y = cell_coord(bbox.max_y, cell_size);

    let mut cells = Vec::with_capacity(((max_x - min_x + 1) * (max_y - min_y + 1)) as usize);
    for x in min_x..=max_x {
        for y in min_y..=max_y {
            cells.push((x, y));
        }
    }
    cells
}

/// Immutable-after-build spatial index mapping grid cells to entry indices.
///
/// The index owns no geometry: entries are `usize` indices into whatever
/// collection the bounding boxes were derived from, and the index must not
/// outlive that collection's meaning. A long polyline registers under every
/// cell its bbox overlaps, trading index size for completeness of retrieval.
#[derive(Debug)]
pub struct GridIndex {
    cell_size: f64,
    cells: HashMap<GridCell, Vec<usize>>,
    entry_count: usize,
}

impl GridIndex {
    /// Build an index from (entry index, bounding box) pairs.
    pub fn build(entries: impl IntoIterator<Item = (usize, BoundingBox)>, cell_size: f64) -> Self {
        let mut cells: HashMap<GridCell, Vec<usize>> = HashMap::new();
        let mut entry_count = 0;

        for (idx, bbox) in entries {
            entry_count += 1;
            for cell in cells_overlapping(&bbox, cell_size) {
                cells.entry(cell).or_default().push(idx);
            }
        }

        Self {
            cell_size,
            cells,
            entry_count,
        }
    }

    /// The cell size this index was built with.
    pub fn cell_size(&self) -> f64 {
        self.cell_size
    }

    /// Number of occupied grid cells.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Number of entries registered at build time.
    pub fn entry_count(&self) -> usize {
        self.entry_count
    }

    /// Candidate entries for a query bounding box: the deduplicated union of
    /// all entries registered under cells the bbox overlaps.
    ///
    /// Returned sorted ascending so downstream iteration order is
    /// deterministic. The result is a superset of the true candidates and
    /// must be refined by an exact intersection test.
    pub fn query(&self, bbox: &BoundingBox) -> Vec<usize> {
        let mut candidates = Vec::new();
        for cell in cells_overlapping(bbox, self.cell_size) {
            if let Some(entries) = self.cells.get(&cell) {
                candidates.extend_from_slice(entries);
            }
        }
        candidates.sort_unstable();
        candidates.dedup();
        candidates
    }
}
