//! Whole-network queries built on analysis.

use crate::branch::analyse::MapSignal;
use crate::branch::inspectors::NodeDestroyer;
use crate::branch::part::{PartTable, TreePart};
use crate::core::types::IVec3;
use crate::voxel::direction::Direction;
use crate::voxel::grid::Grid;

/// Outcome of a root search
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RootSearch {
    pub root: Option<IVec3>,
    /// First step from the starting node toward the root
    pub local_root_dir: Option<Direction>,
    /// The search hit the depth cap and broke the network
    pub overflow: bool,
}

impl RootSearch {
    pub fn is_rooted(&self) -> bool {
        self.root.is_some()
    }
}

/// Find the root anchor of the network containing `pos`
pub fn find_root(parts: &PartTable, grid: &mut dyn Grid, pos: IVec3) -> RootSearch {
    let mut signal = MapSignal::new();
    parts.analyse(grid, pos, &mut signal);
    RootSearch {
        root: signal.root,
        local_root_dir: signal.local_root_dir,
        overflow: signal.overflow,
    }
}

/// Remove the node at `pos` and everything that grew from it. Nodes between
/// it and the root are left standing. Returns the removed positions, leaves
/// first.
pub fn destroy_branch(parts: &PartTable, grid: &mut dyn Grid, pos: IVec3) -> Vec<IVec3> {
    let cell = grid.cell(pos);
    let TreePart::Branch(branch) = parts.resolve(&cell) else {
        return Vec::new();
    };

    let toward_root = find_root(parts, grid, pos).local_root_dir;
    let mut destroyer = NodeDestroyer::new(*branch);
    let mut signal = MapSignal::new().inspect(&mut destroyer);
    branch.analyse(parts, grid, pos, toward_root, &mut signal);
    drop(signal);

    let destroyed = destroyer.into_destroyed();
    log::debug!("destroyed {} nodes from {}", destroyed.len(), pos);
    destroyed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::branch::block::CactusBranch;
    use crate::branch::state::{BranchState, Origin};
    use crate::branch::thickness::{FamilyThickness, Thickness};
    use crate::voxel::cell::{Cell, FamilyId};
    use crate::voxel::grid::{DestroyMode, WriteMode};
    use crate::voxel::world::World;

    const ROOT: IVec3 = IVec3::new(2, 0, 2);
    const BASE: IVec3 = IVec3::new(2, 1, 2);
    const TOP: IVec3 = IVec3::new(2, 2, 2);
    const ARM: IVec3 = IVec3::new(1, 2, 2);
    const ARM_UP: IVec3 = IVec3::new(1, 3, 2);

    fn setup() -> (PartTable, World) {
        let branch = CactusBranch::new(FamilyId(1), FamilyThickness::default());
        let parts = PartTable::new().with(branch);
        let mut world = World::with_loaded_region(IVec3::ZERO, IVec3::splat(15));
        world.set_cell(ROOT, Cell::Rooty, WriteMode::GROWTH);
        for (pos, thickness, origin) in [
            (BASE, Thickness::Trunk, Origin::Down),
            (TOP, Thickness::Trunk, Origin::Down),
            (ARM, Thickness::Branch, Origin::East),
            (ARM_UP, Thickness::Branch, Origin::Down),
        ] {
            world.set_cell(pos, branch.cell_for(BranchState::new(thickness, origin)), WriteMode::GROWTH);
        }
        world.take_edits();
        (parts, world)
    }

    #[test]
    fn test_find_root() {
        let (parts, mut world) = setup();
        let search = find_root(&parts, &mut world, ARM_UP);
        assert!(search.is_rooted());
        assert_eq!(search.root, Some(ROOT));
        assert_eq!(search.local_root_dir, Some(Direction::Down));
        assert!(!search.overflow);

        let search = find_root(&parts, &mut world, ARM);
        assert_eq!(search.local_root_dir, Some(Direction::East));
    }

    #[test]
    fn test_find_root_detached() {
        let (parts, mut world) = setup();
        world.set_cell(ROOT, Cell::Air, WriteMode::GROWTH);
        let search = find_root(&parts, &mut world, TOP);
        assert_eq!(search, RootSearch::default());
    }

    #[test]
    fn test_destroy_arm_keeps_trunk() {
        let (parts, mut world) = setup();
        let destroyed = destroy_branch(&parts, &mut world, ARM);

        assert_eq!(destroyed, vec![ARM_UP, ARM]);
        assert!(world.cell(ARM).is_air());
        assert!(world.cell(ARM_UP).is_air());
        assert!(world.cell(TOP).is_branch());
        assert!(world.cell(BASE).is_branch());
        assert!(world.edits().iter().all(|e| e.is_destroy(DestroyMode::Harvest)));
    }

    #[test]
    fn test_destroy_from_trunk() {
        let (parts, mut world) = setup();
        let destroyed = destroy_branch(&parts, &mut world, TOP);

        assert_eq!(destroyed.len(), 3);
        assert_eq!(destroyed.last(), Some(&TOP));
        assert!(world.cell(BASE).is_branch());
        assert!(world.cell(ROOT).is_rooty());
    }

    #[test]
    fn test_destroy_non_branch() {
        let (parts, mut world) = setup();
        assert!(destroy_branch(&parts, &mut world, ROOT).is_empty());
        assert!(destroy_branch(&parts, &mut world, IVec3::new(9, 9, 9)).is_empty());
        assert!(world.edits().is_empty());
    }
}
