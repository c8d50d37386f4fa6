use rayon::prelude::*;

use crate::region::Region;
use crate::sides::count_sides;

/// Measurements of one region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionStats<T> {
    pub label: T,
    pub area: usize,
    pub perimeter: usize,
    pub sides: usize,
}

impl<T: Clone> RegionStats<T> {
    pub fn of(region: &Region<T>) -> Self {
        Self {
            label: region.label().clone(),
            area: region.area(),
            perimeter: region.perimeter(),
            sides: count_sides(region),
        }
    }
}

impl<T> RegionStats<T> {
    pub fn price_by_perimeter(&self) -> usize {
        self.area * self.perimeter
    }

    pub fn price_by_sides(&self) -> usize {
        self.area * self.sides
    }
}

/// Stats for every region, in the same order as `regions`.
pub fn region_stats<T: Clone + Send + Sync>(regions: &[Region<T>]) -> Vec<RegionStats<T>> {
    regions.par_iter().map(RegionStats::of).collect()
}

pub fn total_price_by_perimeter<T: Sync>(regions: &[Region<T>]) -> usize {
    regions
        .par_iter()
        .map(|region| region.area() * region.perimeter())
        .sum()
}

pub fn total_price_by_sides<T: Sync>(regions: &[Region<T>]) -> usize {
    regions
        .par_iter()
        .map(|region| region.area() * count_sides(region))
        .sum()
}
