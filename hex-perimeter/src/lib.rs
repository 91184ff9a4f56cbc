pub mod error;
pub mod grid;
pub mod layout;
pub mod parser;
pub mod tracer;

use miette::{Context, Result};
use tracing::info;

pub use error::{GridParseError, TracerError};
pub use grid::{Direction, HexGrid};
pub use tracer::{PerimeterEdge, PerimeterTracer};

/// Parses a grid in the text ingest format and returns its exterior perimeter edge count.
#[tracing::instrument(skip(input))]
pub fn process(input: &str) -> Result<String> {
    let grid = parser::parse_grid(input).context("Failed to parse input grid")?;
    info!(filled = grid.filled_cells().count(), "tracing perimeter");

    let mut tracer = PerimeterTracer::from_grid(grid);
    Ok(tracer.compute_perimeter().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test_log::test]
    fn test_process() -> miette::Result<()> {
        let input = include_str!("../input.txt");
        assert_eq!("14", process(input)?);
        Ok(())
    }

    #[test]
    fn test_process_enclosed_region() -> miette::Result<()> {
        let input = "\
7 7
0 0 0 0 0 0 0
0 0 0 0 0 0 0
0 0 1 1 0 0 0
0 0 1 0 1 0 0
0 0 1 1 0 0 0
0 0 0 0 0 0 0
0 0 0 0 0 0 0";
        assert_eq!("18", process(input)?);
        Ok(())
    }

    #[test]
    fn test_process_rejects_bad_input() {
        assert!(process("3 3\n1 1\n").is_err());
    }
}
