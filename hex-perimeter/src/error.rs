use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum TracerError {
    #[error("Cell ({row}, {col}) is outside the content area (rows 1..={height}, cols 1..={width})")]
    #[diagnostic(
        code(hex_perimeter::out_of_range),
        help("Content cells are 1-based; row 0, col 0 and the last row/col form the empty border ring")
    )]
    OutOfRange {
        row: usize,
        col: usize,
        width: usize,
        height: usize,
    },

    #[error("Invalid grid dimensions {width}x{height}")]
    #[diagnostic(
        code(hex_perimeter::invalid_dimensions),
        help("Width and height must both be at least 1")
    )]
    InvalidDimensions { width: usize, height: usize },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Parse(#[from] GridParseError),
}

#[derive(Debug, Error, Diagnostic)]
#[error("Failed to parse grid: {reason}")]
#[diagnostic(
    code(hex_perimeter::parse_error),
    help("Input must be a `<width> <height>` line followed by `height` rows of `width` 0/1 tokens")
)]
pub struct GridParseError {
    #[source_code]
    pub src: String,
    #[label("Parse error occurred here")]
    pub span: SourceSpan,
    pub reason: String,
}
