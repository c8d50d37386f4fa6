use std::fmt;
use std::ops::{Add, Neg, Sub};

/// A grid cell address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    pub row: i32,
    pub col: i32,
}

impl Point {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Direct neighbours in right, down, left, up order. No bounds checking.
    pub fn neighbours(self) -> [Point; 4] {
        [
            self + Vector::RIGHT,
            self + Vector::DOWN,
            self + Vector::LEFT,
            self + Vector::UP,
        ]
    }

    /// The cell on the other side of `side`.
    pub fn step(self, side: Side) -> Point {
        self + side.normal()
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A displacement between two points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Vector {
    pub row: i32,
    pub col: i32,
}

impl Vector {
    pub const UP: Vector = Vector::new(-1, 0);
    pub const DOWN: Vector = Vector::new(1, 0);
    pub const LEFT: Vector = Vector::new(0, -1);
    pub const RIGHT: Vector = Vector::new(0, 1);

    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Vector between two points, `to - from`.
    pub fn between(from: Point, to: Point) -> Self {
        Self::new(to.row - from.row, to.col - from.col)
    }

    /// Unit steps per axis (each component becomes -1, 0 or 1).
    pub fn signum(self) -> Self {
        Self::new(self.row.signum(), self.col.signum())
    }

    pub fn is_zero(self) -> bool {
        self.row == 0 && self.col == 0
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Self::Output {
        Vector::new(-self.row, -self.col)
    }
}

impl Add<Vector> for Point {
    type Output = Point;

    fn add(self, rhs: Vector) -> Self::Output {
        Point::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl Sub<Vector> for Point {
    type Output = Point;

    fn sub(self, rhs: Vector) -> Self::Output {
        self + -rhs
    }
}

/// The four unit edges of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Side {
    Top,
    Bottom,
    Left,
    Right,
}

impl Side {
    pub const ALL: [Side; 4] = [Side::Top, Side::Bottom, Side::Left, Side::Right];

    /// Direction along which contiguous pieces of this side merge into one wall.
    /// Top and bottom walls run horizontally, left and right walls vertically.
    pub const fn direction(self) -> Vector {
        match self {
            Side::Top | Side::Bottom => Vector::RIGHT,
            Side::Left | Side::Right => Vector::DOWN,
        }
    }

    /// Points from a cell to the neighbour sharing this edge.
    pub const fn normal(self) -> Vector {
        match self {
            Side::Top => Vector::UP,
            Side::Bottom => Vector::DOWN,
            Side::Left => Vector::LEFT,
            Side::Right => Vector::RIGHT,
        }
    }
}
