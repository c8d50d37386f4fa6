//! Straight-side counting for a region boundary.
//!
//! Every free unit edge of a region is a [`WallPiece`]. Pieces sharing a side
//! orientation that sit next to each other along that side's direction merge
//! into one [`Wall`], and the number of walls is the number of fence sides
//! the region needs, holes included.

use std::collections::HashSet;

use tracing::trace;

use crate::geometry::{Point, Side, Vector};
use crate::region::Region;

/// One exposed unit edge of one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WallPiece {
    pub point: Point,
    pub side: Side,
}

impl WallPiece {
    pub const fn new(point: Point, side: Side) -> Self {
        Self { point, side }
    }
}

/// A maximal straight run of wall pieces, inclusive at both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Wall {
    pub start: Point,
    pub end: Point,
    pub side: Side,
}

#[allow(clippy::len_without_is_empty)]
impl Wall {
    pub const fn new(start: Point, end: Point, side: Side) -> Self {
        Self { start, end, side }
    }

    /// Pieces from `start` to `end`, whichever way round they are.
    pub fn pieces(&self) -> WallPieces {
        WallPieces {
            next: Some(self.start),
            last: self.end,
            side: self.side,
            direction: Vector::between(self.start, self.end).signum(),
        }
    }

    pub fn len(&self) -> usize {
        let delta = Vector::between(self.start, self.end);
        delta.row.unsigned_abs().max(delta.col.unsigned_abs()) as usize + 1
    }
}

impl IntoIterator for &Wall {
    type Item = WallPiece;
    type IntoIter = WallPieces;

    fn into_iter(self) -> Self::IntoIter {
        self.pieces()
    }
}

#[derive(Debug, Clone)]
pub struct WallPieces {
    next: Option<Point>,
    last: Point,
    side: Side,
    direction: Vector,
}

impl Iterator for WallPieces {
    type Item = WallPiece;

    fn next(&mut self) -> Option<Self::Item> {
        let point = self.next?;
        self.next = if point == self.last || self.direction.is_zero() {
            None
        } else {
            Some(point + self.direction)
        };
        Some(WallPiece::new(point, self.side))
    }
}

/// Builds the free-piece pool of a region and merges it into walls.
#[derive(Debug)]
pub struct BoundaryTracer<'a, T> {
    region: &'a Region<T>,
    pool: HashSet<WallPiece>,
}

impl<'a, T> BoundaryTracer<'a, T> {
    pub fn new(region: &'a Region<T>) -> Self {
        let pool = region
            .points()
            .iter()
            .flat_map(move |&point| {
                region
                    .free_sides(point)
                    .map(move |side| WallPiece::new(point, side))
            })
            .collect();
        Self { region, pool }
    }

    /// The free-piece pool in sorted order. Its length equals the perimeter.
    pub fn pieces(&self) -> Vec<WallPiece> {
        let mut pieces: Vec<_> = self.pool.iter().copied().collect();
        pieces.sort_unstable();
        pieces
    }

    pub fn walls(&self) -> Vec<Wall> {
        self.walls_in_order(self.pieces())
    }

    /// Traces walls by picking pieces in the given order. Pieces already
    /// covered by an earlier wall are skipped, and anything `order` leaves
    /// out is picked afterwards.
    pub fn walls_in_order(&self, order: impl IntoIterator<Item = WallPiece>) -> Vec<Wall> {
        let mut pool = self.pool.clone();
        let mut order = order.into_iter();
        let mut walls = Vec::new();

        while !pool.is_empty() {
            let Some(piece) = order
                .by_ref()
                .find(|piece| pool.contains(piece))
                .or_else(|| pool.iter().min().copied())
            else {
                break;
            };

            let wall = self.wall_containing(piece);
            trace!(?wall, "traced wall");
            for covered in wall.pieces() {
                let removed = pool.remove(&covered);
                debug_assert!(removed, "{covered:?} covered by two walls");
            }
            walls.push(wall);
        }

        walls
    }

    /// The maximal wall running through `piece`.
    pub fn wall_containing(&self, piece: WallPiece) -> Wall {
        let direction = piece.side.direction();
        let start = self.extend(piece.point, piece.side, -direction);
        let end = self.extend(piece.point, piece.side, direction);
        Wall::new(start, end, piece.side)
    }

    // Last point reachable from `from` by `step` that is still in the region
    // with `side` free.
    fn extend(&self, from: Point, side: Side, step: Vector) -> Point {
        let mut last = from;
        loop {
            let next = last + step;
            if !(self.region.contains(next) && self.region.is_free(next, side)) {
                return last;
            }
            last = next;
        }
    }
}

pub fn count_sides<T>(region: &Region<T>) -> usize {
    BoundaryTracer::new(region).walls().len()
}
