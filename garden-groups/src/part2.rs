use miette::Context;
use tracing::{debug, info};

use crate::parser::parse_grid;
use crate::pricing::total_price_by_sides;
use crate::segment::segment;

/// Total fence price with the bulk discount, each region costing
/// `area * number of straight sides`.
#[tracing::instrument(skip(input))]
pub fn process(input: &str) -> miette::Result<String> {
    let grid = parse_grid(input).context("Failed to parse garden map")?;
    debug!(rows = grid.rows(), cols = grid.cols(), "parsed garden map");

    let regions = segment(&grid);
    info!(count = regions.len(), "segmented regions");

    let price = total_price_by_sides(&regions);
    Ok(price.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_process() -> miette::Result<()> {
        let input = "RRRRIICCFF
RRRRIICCCF
VVRRRCCFFF
VVRCCCJFFF
VVVVCJJCFE
VVIVCCJJEE
VVIIICJJEE
MIIIIIJJEE
MIIISIJEEE
MMMISSJEEE";
        assert_eq!("1206", process(input)?);
        Ok(())
    }

    #[rstest]
    #[case("AAAA\nBBCD\nBBCC\nEEEC", "80")]
    #[case("OOOOO\nOXOXO\nOOOOO\nOXOXO\nOOOOO", "436")]
    #[case("EEEEE\nEXXXX\nEEEEE\nEXXXX\nEEEEE", "236")]
    #[case("AAAAAA\nAAABBA\nAAABBA\nABBAAA\nABBAAA\nAAAAAA", "368")]
    #[case("", "0")]
    fn test_process_examples(#[case] input: &str, #[case] expected: &str) -> miette::Result<()> {
        assert_eq!(expected, process(input)?);
        Ok(())
    }

    #[test_log::test]
    fn test_process_reports_bad_character() {
        let err = process("AB\nC?").unwrap_err();
        assert_eq!("Failed to parse garden map", err.to_string());
        assert!(err
            .chain()
            .any(|cause| cause.to_string().contains("unexpected '?'")));
    }
}
