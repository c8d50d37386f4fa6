pub mod error;
pub mod geometry;
pub mod grid;
pub mod parser;
pub mod part1;
pub mod part2;
pub mod pricing;
pub mod region;
pub mod segment;
pub mod sides;

pub use error::GardenError;
pub use geometry::{Point, Side, Vector};
pub use grid::Grid;
pub use region::Region;
