use nom::{
    character::complete::{line_ending, satisfy},
    combinator::{all_consuming, opt},
    multi::{many1, separated_list0},
    sequence::terminated,
    IResult,
};
use nom_locate::LocatedSpan;
use tracing::debug;

use crate::error::{GardenError, Result};
use crate::grid::Grid;

pub type Span<'a> = LocatedSpan<&'a str>;

fn parse_label(input: Span) -> IResult<Span, char> {
    satisfy(|c: char| c.is_ascii_alphanumeric())(input)
}

fn parse_rows(input: Span) -> IResult<Span, Vec<Vec<char>>> {
    terminated(
        separated_list0(line_ending, many1(parse_label)),
        opt(line_ending),
    )(input)
}

/// Parses newline separated rows of labels into a grid.
pub fn parse_grid(input: &str) -> Result<Grid<char>> {
    let (_, rows) = all_consuming(parse_rows)(Span::new(input))
        .map_err(|err| parse_error(input, err))?;

    Grid::new(rows)
}

fn parse_error(src: &str, err: nom::Err<nom::error::Error<Span>>) -> GardenError {
    let offset = match &err {
        nom::Err::Error(e) | nom::Err::Failure(e) => {
            debug!(
                line = e.input.location_line(),
                column = e.input.get_column(),
                kind = ?e.code,
                "parse failed"
            );
            e.input.location_offset()
        }
        nom::Err::Incomplete(_) => src.len(),
    };
    let found = src[offset..].chars().next().unwrap_or('\0');

    GardenError::Parse {
        src: src.to_string(),
        span: (offset, found.len_utf8()).into(),
        found,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;
    use miette::SourceSpan;
    use rstest::rstest;

    #[test]
    fn test_parse_grid() -> miette::Result<()> {
        let grid = parse_grid("AB\nCD")?;
        let expected = Grid::new(vec![vec!['A', 'B'], vec!['C', 'D']])?;

        assert_eq!(expected, grid);
        assert_eq!(&'C', grid.value_at(Point::new(1, 0))?);
        Ok(())
    }

    #[rstest]
    #[case("AB\nCD\n")]
    #[case("AB\r\nCD")]
    #[case("AB\r\nCD\r\n")]
    fn test_line_endings(#[case] input: &str) -> miette::Result<()> {
        let grid = parse_grid(input)?;
        assert_eq!("AB\nCD\n", grid.to_string());
        Ok(())
    }

    #[test]
    fn test_empty_input() -> miette::Result<()> {
        let grid = parse_grid("")?;
        assert_eq!(0, grid.rows());
        Ok(())
    }

    #[test]
    fn test_digits_are_labels() -> miette::Result<()> {
        let grid = parse_grid("a1\n2B")?;
        assert_eq!(&'1', grid.value_at(Point::new(0, 1))?);
        Ok(())
    }

    #[rstest]
    #[case("AB\nC#", 4, '#')]
    #[case("A.B", 1, '.')]
    #[case("AB\n\nCD", 3, '\n')]
    fn test_unexpected_character(
        #[case] input: &str,
        #[case] offset: usize,
        #[case] found: char,
    ) {
        assert_eq!(
            Err(GardenError::Parse {
                src: input.to_string(),
                span: SourceSpan::from((offset, 1)),
                found,
            }),
            parse_grid(input)
        );
    }

    #[test]
    fn test_ragged_rows() {
        assert_eq!(
            Err(GardenError::MalformedGrid {
                row: 1,
                expected: 3,
                found: 2
            }),
            parse_grid("AAA\nBB\nCCC")
        );
    }
}
