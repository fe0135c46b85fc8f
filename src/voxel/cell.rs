//! Cell contents of the voxel grid

use crate::branch::state::BranchState;

/// Identifies a growth family (one branch block type)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FamilyId(pub u16);

/// What occupies a single grid cell
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    /// Empty space
    #[default]
    Air,
    /// A branch node of some family
    Branch { family: FamilyId, state: BranchState },
    /// Soil anchor a trunk can root into
    Rooty,
    /// Any other block, by host material id
    Solid(u8),
}

impl Cell {
    pub fn branch(family: FamilyId, state: BranchState) -> Self {
        Cell::Branch { family, state }
    }

    pub fn is_air(&self) -> bool {
        matches!(self, Cell::Air)
    }

    pub fn is_branch(&self) -> bool {
        matches!(self, Cell::Branch { .. })
    }

    pub fn is_rooty(&self) -> bool {
        matches!(self, Cell::Rooty)
    }

    /// Branch state if this is a node of `family`
    pub fn branch_of(&self, family: FamilyId) -> Option<BranchState> {
        match *self {
            Cell::Branch { family: f, state } if f == family => Some(state),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::branch::state::Origin;
    use crate::branch::thickness::Thickness;

    #[test]
    fn test_default_is_air() {
        assert!(Cell::default().is_air());
    }

    #[test]
    fn test_branch_of_checks_family() {
        let state = BranchState::new(Thickness::Core, Origin::East);
        let cell = Cell::branch(FamilyId(3), state);
        assert!(cell.is_branch());
        assert_eq!(cell.branch_of(FamilyId(3)), Some(state));
        assert_eq!(cell.branch_of(FamilyId(4)), None);
        assert_eq!(Cell::Rooty.branch_of(FamilyId(3)), None);
    }
}
