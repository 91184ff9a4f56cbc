use nom::{
    branch::alt,
    character::complete::{char, digit1, line_ending, multispace0, space0, space1},
    combinator::{eof, map_res, value},
    multi::separated_list1,
    sequence::separated_pair,
    IResult,
};
use nom_locate::{position, LocatedSpan};
use tracing::debug;

use crate::error::{GridParseError, TracerError};
use crate::grid::constants::{EMPTY, FILLED};
use crate::grid::HexGrid;

type Span<'a> = LocatedSpan<&'a str>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Header {
    width: usize,
    height: usize,
}

#[derive(Debug, Clone)]
struct LocatedRow<'a> {
    cells: Vec<bool>,
    position: Span<'a>,
}

/// Parses a `<width> <height>` header followed by `height` rows of `width` 0/1 tokens.
///
/// Syntax errors and row/column count mismatches come back as a [`GridParseError`] pointing at
/// the offending part of `input`.
#[tracing::instrument(skip(input), fields(len = input.len()))]
pub fn parse_grid(input: &str) -> Result<HexGrid, TracerError> {
    let (header, rows) = match parse_document(LocatedSpan::new(input)) {
        Ok((_, document)) => document,
        Err(nom::Err::Error(e)) | Err(nom::Err::Failure(e)) => {
            return Err(located_error(
                input,
                e.input.location_offset(),
                1,
                describe(e.code),
            ));
        }
        Err(nom::Err::Incomplete(_)) => {
            return Err(located_error(input, input.len(), 0, "unexpected end of input"));
        }
    };

    let Header { width, height } = header;
    debug!(width, height, rows = rows.len(), "parsed grid document");

    if width == 0 || height == 0 {
        return Err(TracerError::InvalidDimensions { width, height });
    }

    if rows.len() != height {
        let offset = rows
            .get(height)
            .map_or(input.trim_end().len(), |row| row.position.location_offset());
        return Err(located_error(
            input,
            offset,
            0,
            &format!("expected {} rows, found {}", height, rows.len()),
        ));
    }

    if let Some(row) = rows.iter().find(|row| row.cells.len() != width) {
        let offset = row.position.location_offset();
        let line_len = input[offset..].lines().next().map_or(0, str::len);
        return Err(located_error(
            input,
            offset,
            line_len,
            &format!("expected {} cells, found {}", width, row.cells.len()),
        ));
    }

    let mut grid = HexGrid::new(width, height)?;
    for (row_index, row) in rows.iter().enumerate() {
        for (col_index, &filled) in row.cells.iter().enumerate() {
            grid.set(row_index + 1, col_index + 1, filled)?;
        }
    }

    Ok(grid)
}

fn located_error(src: &str, offset: usize, len: usize, reason: &str) -> TracerError {
    GridParseError {
        src: src.to_string(),
        span: (offset, len).into(),
        reason: reason.to_string(),
    }
    .into()
}

fn describe(kind: nom::error::ErrorKind) -> &'static str {
    use nom::error::ErrorKind;

    match kind {
        ErrorKind::Digit => "expected a dimension",
        ErrorKind::MapRes => "dimension is too large",
        ErrorKind::Space => "expected whitespace between values",
        ErrorKind::CrLf => "expected a line break",
        ErrorKind::Char => "expected a 0 or 1 cell",
        ErrorKind::Eof => "unexpected trailing input",
        _ => "unexpected input",
    }
}

fn parse_dimension(input: Span) -> IResult<Span, usize> {
    map_res(digit1, |digits: Span| digits.fragment().parse::<usize>())(input)
}

fn parse_header(input: Span) -> IResult<Span, Header> {
    let (input, _) = space0(input)?;
    let (input, (width, height)) = separated_pair(parse_dimension, space1, parse_dimension)(input)?;
    let (input, _) = space0(input)?;
    Ok((input, Header { width, height }))
}

fn parse_cell(input: Span) -> IResult<Span, bool> {
    alt((value(true, char(FILLED)), value(false, char(EMPTY))))(input)
}

fn parse_row(input: Span) -> IResult<Span, LocatedRow> {
    let (input, _) = space0(input)?;
    let (input, position) = position(input)?;
    let (input, cells) = separated_list1(space1, parse_cell)(input)?;
    let (input, _) = space0(input)?;
    Ok((input, LocatedRow { cells, position }))
}

fn parse_document(input: Span) -> IResult<Span, (Header, Vec<LocatedRow>)> {
    let (input, header) = parse_header(input)?;
    let (input, _) = line_ending(input)?;
    let (input, rows) = separated_list1(line_ending, parse_row)(input)?;
    let (input, _) = multispace0(input)?;
    let (input, _) = eof(input)?;
    Ok((input, (header, rows)))
}
