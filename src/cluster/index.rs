//! Region queries: "which points lie within epsilon of point `i`?".
//!
//! [`LinearScan`] is the reference strategy: it tests every point against the
//! query point, O(n) per query and O(n²) per clustering run.
//!
//! [`GridIndex`] buckets 2-D [`Point`]s into square cells so a query only
//! inspects nearby cells. It returns exactly what `LinearScan` returns, in the
//! same (ascending index) order, so swapping one for the other never changes
//! a clustering result.

use std::collections::HashMap;

use crate::point::{Neighborhood, Point};

/// A neighborhood query over a fixed, indexed set of points.
pub trait RegionQuery {
    /// Number of indexed points.
    fn len(&self) -> usize;

    /// Whether the index holds no points.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Indices of all points adjacent to point `index` under `epsilon`,
    /// including `index` itself, in ascending order.
    fn region_query(&self, index: usize, epsilon: f64) -> Vec<usize>;
}

/// Brute-force region query over a borrowed slice.
#[derive(Debug, Clone, Copy)]
pub struct LinearScan<'a, P> {
    points: &'a [P],
}

impl<'a, P: Neighborhood> LinearScan<'a, P> {
    /// Wrap `points`.
    pub fn new(points: &'a [P]) -> Self {
        Self { points }
    }
}

impl<P: Neighborhood> RegionQuery for LinearScan<'_, P> {
    fn len(&self) -> usize {
        self.points.len()
    }

    fn region_query(&self, index: usize, epsilon: f64) -> Vec<usize> {
        let point = &self.points[index];
        self.points
            .iter()
            .enumerate()
            .filter(|(_, other)| point.is_in_neighborhood(other, epsilon))
            .map(|(idx, _)| idx)
            .collect()
    }
}

type Cell = (i64, i64);

/// Uniform grid over 2-D points.
///
/// Build it with the epsilon you intend to query with; cells then have side
/// `epsilon` and a query touches at most 5×5 cells. Querying with a different
/// radius stays correct, it just inspects more (or fewer) cells.
#[derive(Debug, Clone)]
pub struct GridIndex<'a> {
    points: &'a [Point],
    cell_size: f64,
    cells: HashMap<Cell, Vec<usize>>,
}

impl<'a> GridIndex<'a> {
    /// Index `points` with square cells of side `cell_size`.
    ///
    /// A non-positive or non-finite `cell_size` falls back to `1.0`.
    pub fn new(points: &'a [Point], cell_size: f64) -> Self {
        let cell_size = if cell_size.is_finite() && cell_size > 0.0 {
            cell_size
        } else {
            1.0
        };

        let mut cells: HashMap<Cell, Vec<usize>> = HashMap::new();
        for (idx, p) in points.iter().enumerate() {
            // Non-finite points are adjacent to nothing; leave them out.
            if !p.is_finite() {
                continue;
            }
            cells.entry(cell_of(p, cell_size)).or_default().push(idx);
        }

        Self {
            points,
            cell_size,
            cells,
        }
    }

    /// Side length of a grid cell.
    pub fn cell_size(&self) -> f64 {
        self.cell_size
    }

    /// Number of non-empty cells.
    pub fn occupied_cells(&self) -> usize {
        self.cells.len()
    }
}

#[inline]
fn cell_of(p: &Point, cell_size: f64) -> Cell {
    // `as` saturates, so far-out coordinates collapse into edge cells.
    (
        (p.x / cell_size).floor() as i64,
        (p.y / cell_size).floor() as i64,
    )
}

impl RegionQuery for GridIndex<'_> {
    fn len(&self) -> usize {
        self.points.len()
    }

    fn region_query(&self, index: usize, epsilon: f64) -> Vec<usize> {
        let point = &self.points[index];
        if !point.is_finite() || epsilon.is_nan() || epsilon <= 0.0 {
            return Vec::new();
        }

        // One cell of slack absorbs rounding in the cell coordinates.
        let reach = (epsilon / self.cell_size).ceil() + 1.0;
        let span = 2.0 * reach + 1.0;
        let mut out = Vec::new();

        if span * span >= self.cells.len() as f64 {
            // Large radius: walking occupied cells is cheaper than the window.
            for members in self.cells.values() {
                out.extend(
                    members
                        .iter()
                        .copied()
                        .filter(|&j| point.is_in_neighborhood(&self.points[j], epsilon)),
                );
            }
        } else {
            let reach = reach as i64;
            let (cx, cy) = cell_of(point, self.cell_size);
            for dx in -reach..=reach {
                for dy in -reach..=reach {
                    let key = (cx.saturating_add(dx), cy.saturating_add(dy));
                    let Some(members) = self.cells.get(&key) else {
                        continue;
                    };
                    out.extend(
                        members
                            .iter()
                            .copied()
                            .filter(|&j| point.is_in_neighborhood(&self.points[j], epsilon)),
                    );
                }
            }
        }

        out.sort_unstable();
        // Saturated keys can repeat a cell at the edges of the i64 range.
        out.dedup();
        out
    }
}
