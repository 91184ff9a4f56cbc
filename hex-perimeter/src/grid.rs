use std::fmt;

use itertools::Itertools;

use crate::error::TracerError;

pub mod constants {
    /// Number of sides (and neighbours) of every cell.
    pub const SIDES: usize = 6;
    /// Width of the always-empty ring around the content area.
    pub const BORDER: usize = 1;
    /// Border corner the outside flood fill starts from; always empty.
    pub const SEED: (usize, usize) = (0, 0);
    /// Text form of a filled cell.
    pub const FILLED: char = '1';
    /// Text form of an empty cell.
    pub const EMPTY: char = '0';
}

use constants::*;

/// One of the six sides of a pointy-top hex, in clockwise order starting at the right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    Right,
    BottomRight,
    BottomLeft,
    Left,
    TopLeft,
    TopRight,
}

// (dcol, drow) per direction; odd rows sit half a cell to the right of even rows.
const EVEN_ROW_OFFSETS: [(isize, isize); SIDES] = [(1, 0), (0, 1), (-1, 1), (-1, 0), (-1, -1), (0, -1)];
const ODD_ROW_OFFSETS: [(isize, isize); SIDES] = [(1, 0), (1, 1), (0, 1), (-1, 0), (0, -1), (1, -1)];

impl Direction {
    pub const ALL: [Direction; SIDES] = [
        Direction::Right,
        Direction::BottomRight,
        Direction::BottomLeft,
        Direction::Left,
        Direction::TopLeft,
        Direction::TopRight,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub const fn opposite(self) -> Self {
        Self::ALL[(self as usize + SIDES / 2) % SIDES]
    }

    /// Returns the `(dcol, drow)` step for this direction from a cell in `row`.
    pub fn offset(self, row: usize) -> (isize, isize) {
        let table = if row % 2 == 0 {
            &EVEN_ROW_OFFSETS
        } else {
            &ODD_ROW_OFFSETS
        };
        table[self.index()]
    }
}

/// Occupancy grid with a one-cell empty border ring around a `width` x `height` content area.
///
/// Cells are addressed `(row, col)` over `[0, height + 1] x [0, width + 1]`; content cells are
/// `[1, height] x [1, width]`. Only content cells can be mutated, so the border always stays empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HexGrid {
    width: usize,
    height: usize,
    cells: Vec<Vec<bool>>,
}

impl HexGrid {
    pub fn new(width: usize, height: usize) -> Result<Self, TracerError> {
        if width == 0 || height == 0 {
            return Err(TracerError::InvalidDimensions { width, height });
        }

        let invalid = || TracerError::InvalidDimensions { width, height };
        let cols = width.checked_add(2 * BORDER).ok_or_else(invalid)?;
        let rows = height.checked_add(2 * BORDER).ok_or_else(invalid)?;
        rows.checked_mul(cols).ok_or_else(invalid)?;

        Ok(Self {
            width,
            height,
            cells: vec![vec![false; cols]; rows],
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Row count including the border ring.
    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    /// Column count including the border ring.
    pub fn cols(&self) -> usize {
        self.width + 2 * BORDER
    }

    pub fn is_filled(&self, row: usize, col: usize) -> Result<bool, TracerError> {
        self.check_content(row, col)?;
        Ok(self.cells[row][col])
    }

    pub fn set(&mut self, row: usize, col: usize, filled: bool) -> Result<(), TracerError> {
        self.check_content(row, col)?;
        self.cells[row][col] = filled;
        debug_assert!(self.border_is_empty(), "border ring must stay empty");
        Ok(())
    }

    /// Flips a content cell and returns its new state.
    pub fn toggle(&mut self, row: usize, col: usize) -> Result<bool, TracerError> {
        let filled = !self.is_filled(row, col)?;
        self.set(row, col, filled)?;
        Ok(filled)
    }

    /// Unchecked read over the padded grid, border included.
    pub(crate) fn filled_at(&self, row: usize, col: usize) -> bool {
        self.cells[row][col]
    }

    /// Steps from `(row, col)` towards `direction`; `None` if that leaves the padded grid.
    pub fn neighbor(&self, row: usize, col: usize, direction: Direction) -> Option<(usize, usize)> {
        let (dcol, drow) = direction.offset(row);
        let next_row = row.checked_add_signed(drow)?;
        let next_col = col.checked_add_signed(dcol)?;

        (next_row < self.rows() && next_col < self.cols()).then_some((next_row, next_col))
    }

    pub fn filled_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (1..=self.height)
            .cartesian_product(1..=self.width)
            .filter(|&(row, col)| self.cells[row][col])
    }

    pub fn border_is_empty(&self) -> bool {
        let last_row = self.rows() - 1;
        let last_col = self.cols() - 1;

        self.cells[0].iter().chain(&self.cells[last_row]).all(|&cell| !cell)
            && self.cells.iter().all(|row| !row[0] && !row[last_col])
    }

    fn check_content(&self, row: usize, col: usize) -> Result<(), TracerError> {
        if (1..=self.height).contains(&row) && (1..=self.width).contains(&col) {
            Ok(())
        } else {
            Err(TracerError::OutOfRange {
                row,
                col,
                width: self.width,
                height: self.height,
            })
        }
    }
}

/// Writes the grid in the ingest format: a `<width> <height>` line, then one line of 0/1 per row.
impl fmt::Display for HexGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", self.width, self.height)?;
        for row in &self.cells[BORDER..=self.height] {
            let line = row[BORDER..=self.width]
                .iter()
                .map(|&filled| if filled { FILLED } else { EMPTY })
                .join(" ");
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
