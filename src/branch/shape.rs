//! Collision shape of a branch node, derived purely from its connections.
//!
//! Boxes are in block-local units (the cell spans 0.0..1.0); radii are
//! sixteenths of a cell.

use crate::branch::block::CactusBranch;
use crate::branch::thickness::Thickness;
use crate::core::types::IVec3;
use crate::math::Aabb;
use crate::voxel::direction::Direction;
use crate::voxel::grid::Grid;

/// Box of the given radius pushed against the `dir` face of the cell
fn arm_box(radius: u8, dir: Direction) -> Aabb {
    let r = radius as f32 / 16.0;
    let gap = 0.5 - r;
    Aabb::centered_cube(r).translated(dir.offset().as_vec3() * gap)
}

impl CactusBranch {
    /// Boxes making up the node's collision shape; empty if `pos` is not a
    /// node of this family.
    pub fn collision_shape(&self, grid: &dyn Grid, pos: IVec3) -> Vec<Aabb> {
        let Some(state) = self.state_of(&grid.cell(pos)) else {
            return Vec::new();
        };
        let own = self.cactus_radius(state.thickness());
        let connections = self.connection_data(grid, pos);

        let mut boxes: Vec<Aabb> = connections
            .iter()
            .map(|(dir, radius)| arm_box(radius.clamp(1, own), dir))
            .collect();

        // A lone horizontal tip curls upward
        if state.thickness() == Thickness::Branch
            && connections.connected_count() == 1
            && state.origin().is_horizontal()
        {
            let radius = self.cactus_radius(Thickness::Branch).clamp(1, own);
            boxes.push(arm_box(radius, Direction::Up));
        }

        boxes.push(Aabb::centered_cube(own as f32 / 16.0));
        boxes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::branch::state::{BranchState, Origin};
    use crate::branch::thickness::FamilyThickness;
    use crate::core::types::Vec3;
    use crate::voxel::cell::{Cell, FamilyId};
    use crate::voxel::grid::WriteMode;
    use crate::voxel::world::World;

    fn setup() -> (CactusBranch, World) {
        (
            CactusBranch::new(FamilyId(0), FamilyThickness::default()),
            World::with_loaded_region(IVec3::ZERO, IVec3::splat(15)),
        )
    }

    #[test]
    fn test_not_a_branch_has_no_shape() {
        let (branch, world) = setup();
        assert!(branch.collision_shape(&world, IVec3::ONE).is_empty());
    }

    #[test]
    fn test_isolated_node_is_core_box() {
        let (branch, mut world) = setup();
        let pos = IVec3::splat(4);
        world.set_cell(pos, branch.cell_for(BranchState::new(Thickness::Core, Origin::Down)), WriteMode::GROWTH);
        let shape = branch.collision_shape(&world, pos);
        assert_eq!(shape, vec![Aabb::centered_cube(7.0 / 16.0)]);
    }

    #[test]
    fn test_arm_box_reaches_face() {
        let (branch, mut world) = setup();
        let root = IVec3::new(4, 1, 4);
        let trunk = Direction::Up.step(root);
        world.set_cell(root, Cell::Rooty, WriteMode::GROWTH);
        world.set_cell(trunk, branch.cell_for(BranchState::new(Thickness::Trunk, Origin::Down)), WriteMode::GROWTH);

        let shape = branch.collision_shape(&world, trunk);
        assert_eq!(shape.len(), 2);
        let down = shape[0];
        assert_eq!(down.min.y, 0.0);
        assert!((down.size().x - 10.0 / 16.0).abs() < 1e-6);
        assert!(shape.iter().all(|b| b.intersects(&Aabb::centered_cube(0.01))));
    }

    #[test]
    fn test_lone_horizontal_tip_gets_upward_stub() {
        let (branch, mut world) = setup();
        let trunk = IVec3::new(4, 4, 4);
        let tip = Direction::West.step(trunk);
        world.set_cell(trunk, branch.cell_for(BranchState::new(Thickness::Trunk, Origin::Down)), WriteMode::GROWTH);
        world.set_cell(tip, branch.cell_for(BranchState::new(Thickness::Branch, Origin::East)), WriteMode::GROWTH);

        let shape = branch.collision_shape(&world, tip);
        // east arm, upward stub, core
        assert_eq!(shape.len(), 3);
        assert_eq!(shape[0].max.x, 1.0);
        assert_eq!(shape[1].max.y, 1.0);
        assert_eq!(shape[2].center(), Vec3::splat(0.5));
    }
}
