//! The cactus branch block: one family's view of branch cells.

use crate::branch::state::{BranchState, Origin};
use crate::branch::thickness::{FamilyThickness, Thickness};
use crate::core::types::IVec3;
use crate::voxel::cell::{Cell, FamilyId};
use crate::voxel::direction::Direction;
use crate::voxel::grid::Grid;

/// Branch block of one growth family
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CactusBranch {
    family: FamilyId,
    thickness: FamilyThickness,
}

impl CactusBranch {
    pub fn new(family: FamilyId, thickness: FamilyThickness) -> Self {
        Self { family, thickness }
    }

    pub fn family(&self) -> FamilyId {
        self.family
    }

    pub fn family_thickness(&self) -> &FamilyThickness {
        &self.thickness
    }

    /// State of `cell` if it is a node of this family
    pub fn state_of(&self, cell: &Cell) -> Option<BranchState> {
        cell.branch_of(self.family)
    }

    pub fn is_same_tree(&self, cell: &Cell) -> bool {
        self.state_of(cell).is_some()
    }

    pub fn cell_for(&self, state: BranchState) -> Cell {
        Cell::branch(self.family, state)
    }

    /// Structural radius of a thickness class in this family
    pub fn cactus_radius(&self, thickness: Thickness) -> u8 {
        self.thickness.radius_of(thickness)
    }

    /// Radius of `cell`, or 0 if it is not a node of this family
    pub fn radius(&self, cell: &Cell) -> u8 {
        self.state_of(cell)
            .map(|s| self.cactus_radius(s.thickness()))
            .unwrap_or(0)
    }

    /// Radius this node offers a neighbor asking to connect
    pub fn radius_for_connection(&self, cell: &Cell) -> u8 {
        self.radius(cell)
    }

    /// Default-origin state whose thickness best fits `radius`
    pub fn state_for_radius(&self, radius: u8) -> BranchState {
        BranchState::default().with_thickness(self.thickness.thickness_for_radius(radius))
    }

    /// Directionless weight a growth signal gives to entering `cell`
    pub fn probability_for_block(&self, cell: &Cell) -> u32 {
        if self.is_same_tree(cell) {
            self.radius(cell) as u32 + 2
        } else {
            0
        }
    }

    /// State for a node placed by hand at `pos` against `face` of the block
    /// it was placed on.
    pub fn state_for_placement(&self, grid: &dyn Grid, pos: IVec3, face: Direction) -> BranchState {
        let against = grid.cell(face.opposite().step(pos));
        let on_thin_branch = self
            .state_of(&against)
            .is_some_and(|s| s.thickness() == Thickness::Branch);
        let thickness = if face == Direction::Up && !on_thin_branch {
            Thickness::Trunk
        } else {
            Thickness::Branch
        };
        let origin = match face {
            Direction::Down => Origin::Down,
            other => Origin::try_from(other.opposite()).unwrap_or_default(),
        };
        BranchState::new(thickness, origin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::voxel::grid::WriteMode;
    use crate::voxel::world::World;

    fn branch() -> CactusBranch {
        CactusBranch::new(FamilyId(1), FamilyThickness::default())
    }

    #[test]
    fn test_radius_only_for_own_family() {
        let b = branch();
        let state = BranchState::new(Thickness::Core, Origin::Down);
        assert_eq!(b.radius(&b.cell_for(state)), 7);
        assert_eq!(b.radius(&Cell::branch(FamilyId(2), state)), 0);
        assert_eq!(b.radius(&Cell::Rooty), 0);
        assert_eq!(b.radius_for_connection(&b.cell_for(state.with_thickness(Thickness::Branch))), 4);
        assert_eq!(b.radius_for_connection(&Cell::Air), 0);
    }

    #[test]
    fn test_probability_for_block() {
        let b = branch();
        let trunk = b.cell_for(BranchState::new(Thickness::Trunk, Origin::Down));
        assert_eq!(b.probability_for_block(&trunk), 7);
        assert_eq!(b.probability_for_block(&Cell::Air), 0);
    }

    #[test]
    fn test_state_for_radius() {
        let b = branch();
        assert_eq!(b.state_for_radius(1).thickness(), Thickness::Branch);
        assert_eq!(b.state_for_radius(5).thickness(), Thickness::Trunk);
        assert_eq!(b.state_for_radius(9).thickness(), Thickness::Core);
        assert_eq!(b.state_for_radius(9).origin(), Origin::Down);
    }

    #[test]
    fn test_state_for_placement() {
        let b = branch();
        let mut world = World::with_loaded_region(IVec3::ZERO, IVec3::splat(4));
        let ground = IVec3::new(1, 0, 1);
        world.set_cell(ground, Cell::Solid(1), WriteMode::GROWTH);

        // On top of the ground: trunk growing from below
        let on_top = b.state_for_placement(&world, Direction::Up.step(ground), Direction::Up);
        assert_eq!(on_top, BranchState::new(Thickness::Trunk, Origin::Down));

        // Against the east face: a branch whose origin points back west
        let side = b.state_for_placement(&world, Direction::East.step(ground), Direction::East);
        assert_eq!(side, BranchState::new(Thickness::Branch, Origin::West));

        // Under the block: origin is down, never up
        let under = b.state_for_placement(&world, Direction::Down.step(ground), Direction::Down);
        assert_eq!(under.origin(), Origin::Down);

        // On top of a thin branch stays thin
        let arm = IVec3::new(3, 1, 3);
        world.set_cell(arm, b.cell_for(BranchState::new(Thickness::Branch, Origin::West)), WriteMode::GROWTH);
        let above_arm = b.state_for_placement(&world, Direction::Up.step(arm), Direction::Up);
        assert_eq!(above_arm.thickness(), Thickness::Branch);
    }
}
