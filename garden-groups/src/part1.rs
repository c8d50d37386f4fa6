use miette::Context;
use tracing::{debug, info};

use crate::parser::parse_grid;
use crate::pricing::total_price_by_perimeter;
use crate::segment::segment;

/// Total fence price where each region costs `area * perimeter`.
#[tracing::instrument(skip(input))]
pub fn process(input: &str) -> miette::Result<String> {
    let grid = parse_grid(input).context("Failed to parse garden map")?;
    debug!(rows = grid.rows(), cols = grid.cols(), "parsed garden map");

    let regions = segment(&grid);
    info!(count = regions.len(), "segmented regions");

    let price = total_price_by_perimeter(&regions);
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
        assert_eq!("1930", process(input)?);
        Ok(())
    }

    #[rstest]
    #[case("AAAA\nBBCD\nBBCC\nEEEC", "140")]
    #[case("OOOOO\nOXOXO\nOOOOO\nOXOXO\nOOOOO", "772")]
    #[case("A", "4")]
    #[case("", "0")]
    fn test_process_examples(#[case] input: &str, #[case] expected: &str) -> miette::Result<()> {
        assert_eq!(expected, process(input)?);
        Ok(())
    }

    #[test_log::test]
    fn test_process_rejects_ragged_map() {
        assert!(process("AAA\nAA").is_err());
    }
}
