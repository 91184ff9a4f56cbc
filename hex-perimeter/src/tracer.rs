use std::fmt;

use tracing::{debug, trace};

use crate::error::TracerError;
use crate::grid::{constants::SEED, Direction, HexGrid};

/// A side of a filled cell that faces outside-reachable empty space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PerimeterEdge {
    pub row: usize,
    pub col: usize,
    pub side: Direction,
}

impl fmt::Display for PerimeterEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}) side {} ({:?})",
            self.row,
            self.col,
            self.side.index(),
            self.side
        )
    }
}

/// Owns the occupancy grid and traces the exterior perimeter of its filled cells.
///
/// The perimeter is found by flood-filling the empty space from [`SEED`] and recording every
/// side of a filled cell the fill runs into. Filled cells walled in by other filled cells, and
/// the sides facing enclosed holes, are never reached and never reported.
#[derive(Debug, Clone)]
pub struct PerimeterTracer {
    grid: HexGrid,
    edges: Vec<PerimeterEdge>,
}

impl PerimeterTracer {
    pub fn new(width: usize, height: usize) -> Result<Self, TracerError> {
        Ok(Self::from_grid(HexGrid::new(width, height)?))
    }

    pub fn from_grid(grid: HexGrid) -> Self {
        Self {
            grid,
            edges: Vec::new(),
        }
    }

    /// Replaces the grid with an empty `width` x `height` one and drops the previous edges.
    pub fn set_dimensions(&mut self, width: usize, height: usize) -> Result<(), TracerError> {
        self.grid = HexGrid::new(width, height)?;
        self.edges.clear();
        debug!(width, height, "grid resized");
        Ok(())
    }

    pub fn grid(&self) -> &HexGrid {
        &self.grid
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    pub fn is_filled(&self, row: usize, col: usize) -> Result<bool, TracerError> {
        self.grid.is_filled(row, col)
    }

    pub fn set_cell(&mut self, row: usize, col: usize, filled: bool) -> Result<(), TracerError> {
        self.grid.set(row, col, filled)
    }

    pub fn toggle_cell(&mut self, row: usize, col: usize) -> Result<bool, TracerError> {
        self.grid.toggle(row, col)
    }

    /// Edges recorded by the last [`compute_perimeter`](Self::compute_perimeter) call.
    pub fn perimeter_edges(&self) -> &[PerimeterEdge] {
        &self.edges
    }

    /// Flood-fills the outside space and returns the number of perimeter edges found.
    ///
    /// Each empty cell is expanded once, and each grid adjacency is probed from its empty side
    /// only, so no edge is recorded twice. The edge list is rebuilt from scratch on every call.
    #[tracing::instrument(skip(self), fields(width = self.grid.width(), height = self.grid.height()))]
    pub fn compute_perimeter(&mut self) -> usize {
        self.edges.clear();

        let mut visited = vec![vec![false; self.grid.cols()]; self.grid.rows()];
        let mut stack = vec![SEED];

        while let Some((row, col)) = stack.pop() {
            if visited[row][col] || self.grid.filled_at(row, col) {
                continue;
            }
            visited[row][col] = true;

            for direction in Direction::ALL {
                let Some((next_row, next_col)) = self.grid.neighbor(row, col, direction) else {
                    continue;
                };

                if self.grid.filled_at(next_row, next_col) {
                    let edge = PerimeterEdge {
                        row: next_row,
                        col: next_col,
                        side: direction.opposite(),
                    };
                    trace!(%edge, "perimeter edge");
                    self.edges.push(edge);
                } else if !visited[next_row][next_col] {
                    stack.push((next_row, next_col));
                }
            }
        }

        debug!(count = self.edges.len(), "perimeter traced");
        self.edges.len()
    }
}
