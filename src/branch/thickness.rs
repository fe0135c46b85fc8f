//! Thickness classes and their structural radii.
//!
//! Radii are measured in sixteenths of a cell. A family supplies the trunk
//! (primary) and branch (secondary) radius; the core radius is fixed.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::{Error, Result};

/// Radius of a core segment, regardless of family
pub const CORE_RADIUS: u8 = 7;

/// Default trunk radius
pub const DEFAULT_TRUNK_RADIUS: u8 = 5;

/// Default branch radius
pub const DEFAULT_BRANCH_RADIUS: u8 = 4;

/// Ordered thickness class of a branch node
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Thickness {
    Branch,
    #[default]
    Trunk,
    Core,
}

impl Thickness {
    /// All classes, thinnest first
    pub const ALL: [Thickness; 3] = [Thickness::Branch, Thickness::Trunk, Thickness::Core];

    pub(crate) fn code(self) -> u8 {
        self as u8
    }

    pub(crate) fn from_code(code: u8) -> Option<Thickness> {
        Self::ALL.get(code as usize).copied()
    }
}

impl fmt::Display for Thickness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Thickness::Branch => "branch",
            Thickness::Trunk => "trunk",
            Thickness::Core => "core",
        })
    }
}

/// Radius table of one growth family
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FamilyThickness {
    primary: u8,
    secondary: u8,
}

impl Default for FamilyThickness {
    fn default() -> Self {
        Self {
            primary: DEFAULT_TRUNK_RADIUS,
            secondary: DEFAULT_BRANCH_RADIUS,
        }
    }
}

impl FamilyThickness {
    /// Create a radius table from the family's trunk (primary) and branch
    /// (secondary) radius. Radii must satisfy `1 <= secondary < primary < CORE_RADIUS`.
    pub fn new(primary: u8, secondary: u8) -> Result<Self> {
        if secondary == 0 || secondary >= primary || primary >= CORE_RADIUS {
            return Err(Error::Config(format!(
                "family thickness must satisfy 1 <= secondary < primary < {}, got primary={} secondary={}",
                CORE_RADIUS, primary, secondary
            )));
        }
        Ok(Self { primary, secondary })
    }

    pub fn primary(&self) -> u8 {
        self.primary
    }

    pub fn secondary(&self) -> u8 {
        self.secondary
    }

    /// Structural radius of a thickness class
    pub fn radius_of(&self, thickness: Thickness) -> u8 {
        match thickness {
            Thickness::Branch => self.secondary,
            Thickness::Trunk => self.primary,
            Thickness::Core => CORE_RADIUS,
        }
    }

    /// Thickest class whose radius does not exceed `radius`, falling back to
    /// Branch for anything thinner than a branch.
    pub fn thickness_for_radius(&self, radius: u8) -> Thickness {
        if radius >= self.radius_of(Thickness::Core) {
            Thickness::Core
        } else if radius >= self.radius_of(Thickness::Trunk) {
            Thickness::Trunk
        } else {
            Thickness::Branch
        }
    }
}
