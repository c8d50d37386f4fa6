use std::collections::HashSet;

use crate::geometry::{Point, Side};

/// Maximal 4-connected set of cells sharing one label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region<T> {
    label: T,
    points: HashSet<Point>,
}

impl<T> Region<T> {
    pub fn new(label: T, points: HashSet<Point>) -> Self {
        Self { label, points }
    }

    pub fn label(&self) -> &T {
        &self.label
    }

    pub fn points(&self) -> &HashSet<Point> {
        &self.points
    }

    pub fn contains(&self, point: Point) -> bool {
        self.points.contains(&point)
    }

    pub fn area(&self) -> usize {
        self.points.len()
    }

    /// Number of unit edges not shared with another cell of this region.
    /// Grid edges count as exposed because cells outside the grid are never
    /// part of a region.
    pub fn perimeter(&self) -> usize {
        self.points
            .iter()
            .map(|point| {
                let shared = point
                    .neighbours()
                    .into_iter()
                    .filter(|n| self.points.contains(n))
                    .count();
                4 - shared
            })
            .sum()
    }

    pub fn is_free(&self, point: Point, side: Side) -> bool {
        !self.points.contains(&point.step(side))
    }

    pub fn free_sides(&self, point: Point) -> impl Iterator<Item = Side> + '_ {
        Side::ALL
            .into_iter()
            .filter(move |&side| self.is_free(point, side))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn region(points: &[(i32, i32)]) -> Region<u32> {
        Region::new(
            1234,
            points.iter().map(|&(r, c)| Point::new(r, c)).collect(),
        )
    }

    #[rstest]
    #[case(&[(1, 2)], 1, 4)]
    #[case(&[(0, 0), (0, 1), (0, 2)], 3, 8)]
    #[case(&[(0, 0), (0, 1), (1, 0), (1, 1)], 4, 8)]
    #[case(&[(0, 0), (0, 1), (1, 0)], 3, 8)]
    fn test_area_and_perimeter(
        #[case] points: &[(i32, i32)],
        #[case] area: usize,
        #[case] perimeter: usize,
    ) {
        let region = region(points);
        assert_eq!(area, region.area());
        assert_eq!(perimeter, region.perimeter());
    }

    #[test]
    fn test_empty_region() {
        let region = region(&[]);
        assert_eq!(0, region.area());
        assert_eq!(0, region.perimeter());
    }

    #[test]
    fn test_ring_perimeter_counts_hole() {
        let points: Vec<_> = (0..3)
            .flat_map(|r| (0..3).map(move |c| (r, c)))
            .filter(|&p| p != (1, 1))
            .collect();
        let region = region(&points);
        assert_eq!(8, region.area());
        assert_eq!(16, region.perimeter());
    }

    #[test]
    fn test_free_sides() {
        let region = region(&[(0, 0), (0, 1)]);
        let sides: Vec<_> = region.free_sides(Point::new(0, 0)).collect();
        assert_eq!(vec![Side::Top, Side::Bottom, Side::Left], sides);
        assert!(!region.is_free(Point::new(0, 1), Side::Left));
    }
}
