//! Axis-aligned neighbor directions on the voxel grid

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::types::IVec3;

/// Grid axis
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub fn is_vertical(self) -> bool {
        self == Axis::Y
    }

    pub fn is_horizontal(self) -> bool {
        !self.is_vertical()
    }
}

/// One of the six face neighbors of a cell.
///
/// Y is up. North is -Z, South is +Z, West is -X, East is +X.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Down,
    Up,
    North,
    South,
    West,
    East,
}

impl Direction {
    /// All directions in visiting order
    pub const ALL: [Direction; 6] = [
        Direction::Down,
        Direction::Up,
        Direction::North,
        Direction::South,
        Direction::West,
        Direction::East,
    ];

    pub const HORIZONTALS: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::West,
        Direction::East,
    ];

    /// Position in [`Direction::ALL`]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Down => Direction::Up,
            Direction::Up => Direction::Down,
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
            Direction::East => Direction::West,
        }
    }

    pub fn axis(self) -> Axis {
        match self {
            Direction::Down | Direction::Up => Axis::Y,
            Direction::North | Direction::South => Axis::Z,
            Direction::West | Direction::East => Axis::X,
        }
    }

    /// Unit step toward this neighbor
    pub fn offset(self) -> IVec3 {
        match self {
            Direction::Down => IVec3::NEG_Y,
            Direction::Up => IVec3::Y,
            Direction::North => IVec3::NEG_Z,
            Direction::South => IVec3::Z,
            Direction::West => IVec3::NEG_X,
            Direction::East => IVec3::X,
        }
    }

    /// Neighbor position of `pos` in this direction
    pub fn step(self, pos: IVec3) -> IVec3 {
        pos + self.offset()
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Down => "down",
            Direction::Up => "up",
            Direction::North => "north",
            Direction::South => "south",
            Direction::West => "west",
            Direction::East => "east",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite_is_involution() {
        for dir in Direction::ALL {
            assert_ne!(dir, dir.opposite());
            assert_eq!(dir, dir.opposite().opposite());
            assert_eq!(dir.offset() + dir.opposite().offset(), IVec3::ZERO);
        }
    }

    #[test]
    fn test_index_matches_all_order() {
        for (i, dir) in Direction::ALL.iter().enumerate() {
            assert_eq!(dir.index(), i);
        }
    }

    #[test]
    fn test_axes() {
        assert!(Direction::Up.axis().is_vertical());
        assert!(Direction::Down.axis().is_vertical());
        for dir in Direction::HORIZONTALS {
            assert!(dir.axis().is_horizontal());
        }
    }

    #[test]
    fn test_step() {
        let pos = IVec3::new(3, 4, 5);
        assert_eq!(Direction::East.step(pos), IVec3::new(4, 4, 5));
        assert_eq!(Direction::North.step(pos), IVec3::new(3, 4, 4));
        assert_eq!(Direction::Down.step(pos), IVec3::new(3, 3, 5));
    }
}
