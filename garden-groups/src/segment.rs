use std::collections::HashSet;

use tracing::{debug, trace};

use crate::geometry::Point;
use crate::grid::Grid;
use crate::region::Region;

/// Splits the grid into maximal 4-connected regions of equal labels.
///
/// Regions come out in row-major order of their top-left-most cell, and
/// every grid cell belongs to exactly one of them.
pub fn segment<T: Clone + PartialEq>(grid: &Grid<T>) -> Vec<Region<T>> {
    let mut covered = HashSet::with_capacity(grid.len());
    let mut regions = Vec::new();

    for seed in grid.points() {
        if covered.contains(&seed) {
            continue;
        }

        let Some(label) = grid.get(seed) else {
            continue;
        };
        let points = collect_connected_component(grid, seed, label);
        covered.extend(points.iter().copied());

        debug!(%seed, area = points.len(), "found region");
        regions.push(Region::new(label.clone(), points));
    }

    regions
}

fn collect_connected_component<T: PartialEq>(
    grid: &Grid<T>,
    start: Point,
    label: &T,
) -> HashSet<Point> {
    let mut component = HashSet::new();
    let mut queue = vec![start];

    while let Some(current) = queue.pop() {
        if !component.insert(current) {
            continue;
        }
        trace!(%current, "visiting");

        queue.extend(
            grid.neighbours(current)
                .filter(|n| !component.contains(n) && grid.get(*n) == Some(label)),
        );
    }

    component
}
