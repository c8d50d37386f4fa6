use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

use crate::geometry::Point;

#[derive(Debug, Error, Diagnostic, PartialEq, Eq)]
pub enum GardenError {
    #[error("Grid is not rectangular: row {row} has {found} cells, expected {expected}")]
    #[diagnostic(
        code(garden::malformed_grid),
        help("Every row of the garden map must have the same length")
    )]
    MalformedGrid {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Point {point} is outside of the {rows}x{cols} grid")]
    #[diagnostic(code(garden::out_of_range))]
    OutOfRange { point: Point, rows: usize, cols: usize },

    #[error("Failed to parse garden map: unexpected {found:?}")]
    #[diagnostic(
        code(garden::parse_error),
        help("Input must contain only ASCII letters or digits, one row per line")
    )]
    Parse {
        #[source_code]
        src: String,
        #[label("unexpected character")]
        span: SourceSpan,
        found: char,
    },
}

pub type Result<T, E = GardenError> = std::result::Result<T, E>;
