//! Per-node branch state: thickness class and growth origin.

use serde::{Deserialize, Serialize};

use crate::branch::thickness::Thickness;
use crate::core::{Error, Result};
use crate::voxel::direction::Direction;

/// Direction a node grew from. Cacti never grow downward, so Up is not
/// representable.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    #[default]
    Down,
    North,
    South,
    West,
    East,
}

impl Origin {
    pub const ALL: [Origin; 5] = [
        Origin::Down,
        Origin::North,
        Origin::South,
        Origin::West,
        Origin::East,
    ];

    pub fn direction(self) -> Direction {
        match self {
            Origin::Down => Direction::Down,
            Origin::North => Direction::North,
            Origin::South => Direction::South,
            Origin::West => Direction::West,
            Origin::East => Direction::East,
        }
    }

    pub fn is_horizontal(self) -> bool {
        self != Origin::Down
    }

    fn code(self) -> u8 {
        self as u8
    }

    fn from_code(code: u8) -> Option<Origin> {
        Self::ALL.get(code as usize).copied()
    }
}

impl TryFrom<Direction> for Origin {
    type Error = Error;

    fn try_from(dir: Direction) -> Result<Self> {
        match dir {
            Direction::Down => Ok(Origin::Down),
            Direction::North => Ok(Origin::North),
            Direction::South => Ok(Origin::South),
            Direction::West => Ok(Origin::West),
            Direction::East => Ok(Origin::East),
            Direction::Up => Err(Error::InvalidState("origin cannot be up".into())),
        }
    }
}

impl PartialEq<Direction> for Origin {
    fn eq(&self, other: &Direction) -> bool {
        self.direction() == *other
    }
}

const THICKNESS_MASK: u8 = 0b0000_0011;
const ORIGIN_SHIFT: u8 = 2;
const ORIGIN_MASK: u8 = 0b0001_1100;

/// Stored attributes of one branch node
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BranchState {
    thickness: Thickness,
    origin: Origin,
}

impl BranchState {
    pub fn new(thickness: Thickness, origin: Origin) -> Self {
        Self { thickness, origin }
    }

    pub fn thickness(&self) -> Thickness {
        self.thickness
    }

    pub fn origin(&self) -> Origin {
        self.origin
    }

    pub fn with_thickness(self, thickness: Thickness) -> Self {
        Self { thickness, ..self }
    }

    pub fn with_origin(self, origin: Origin) -> Self {
        Self { origin, ..self }
    }

    /// Pack into one byte: bits 0-1 thickness, bits 2-4 origin
    pub fn to_bits(&self) -> u8 {
        self.thickness.code() | (self.origin.code() << ORIGIN_SHIFT)
    }

    /// Unpack a byte produced by [`BranchState::to_bits`]
    pub fn from_bits(bits: u8) -> Result<Self> {
        if bits & !(THICKNESS_MASK | ORIGIN_MASK) != 0 {
            return Err(Error::InvalidState(format!("stray bits in {:#010b}", bits)));
        }
        let thickness = Thickness::from_code(bits & THICKNESS_MASK)
            .ok_or_else(|| Error::InvalidState(format!("unknown thickness code in {:#010b}", bits)))?;
        let origin = Origin::from_code((bits & ORIGIN_MASK) >> ORIGIN_SHIFT)
            .ok_or_else(|| Error::InvalidState(format!("unknown origin code in {:#010b}", bits)))?;
        Ok(Self { thickness, origin })
    }
}
