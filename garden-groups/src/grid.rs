use std::fmt;

use crate::error::{GardenError, Result};
use crate::geometry::Point;

/// Read-only rectangular map of labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    cells: Vec<Vec<T>>,
    rows: usize,
    cols: usize,
}

impl<T> Grid<T> {
    pub fn new(cells: Vec<Vec<T>>) -> Result<Self> {
        let rows = cells.len();
        let cols = cells.first().map_or(0, Vec::len);

        if let Some((row, found)) = cells
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != cols)
        {
            return Err(GardenError::MalformedGrid {
                row,
                expected: cols,
                found,
            });
        }

        Ok(Self { cells, rows, cols })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn len(&self) -> usize {
        self.rows * self.cols
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, point: Point) -> bool {
        point.row >= 0
            && point.col >= 0
            && (point.row as usize) < self.rows
            && (point.col as usize) < self.cols
    }

    pub fn get(&self, point: Point) -> Option<&T> {
        if !self.contains(point) {
            return None;
        }
        self.cells
            .get(point.row as usize)
            .and_then(|row| row.get(point.col as usize))
    }

    pub fn value_at(&self, point: Point) -> Result<&T> {
        self.get(point).ok_or(GardenError::OutOfRange {
            point,
            rows: self.rows,
            cols: self.cols,
        })
    }

    /// In-range direct neighbours, right, down, left, up.
    pub fn neighbours(&self, point: Point) -> impl Iterator<Item = Point> + '_ {
        point
            .neighbours()
            .into_iter()
            .filter(move |p| self.contains(*p))
    }

    /// All cell addresses in row-major order.
    pub fn points(&self) -> impl Iterator<Item = Point> {
        let cols = self.cols as i32;
        (0..self.rows as i32).flat_map(move |row| (0..cols).map(move |col| Point::new(row, col)))
    }
}

impl fmt::Display for Grid<char> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            for cell in row {
                write!(f, "{}", cell)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
