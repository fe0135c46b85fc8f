//! Connectivity between a branch node and its six neighbors

use crate::branch::block::CactusBranch;
use crate::branch::state::Origin;
use crate::core::types::IVec3;
use crate::voxel::direction::Direction;
use crate::voxel::grid::Grid;

/// Connection radius toward each of the six neighbors (0 = unconnected)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Connections {
    radii: [u8; 6],
}

impl Connections {
    pub fn radius(&self, dir: Direction) -> u8 {
        self.radii[dir.index()]
    }

    pub fn set_radius(&mut self, dir: Direction, radius: u8) {
        self.radii[dir.index()] = radius;
    }

    pub fn is_connected(&self, dir: Direction) -> bool {
        self.radius(dir) > 0
    }

    pub fn connected_count(&self) -> usize {
        self.radii.iter().filter(|&&r| r > 0).count()
    }

    /// Connected directions with their radii
    pub fn iter(&self) -> impl Iterator<Item = (Direction, u8)> + '_ {
        Direction::ALL
            .into_iter()
            .map(|dir| (dir, self.radius(dir)))
            .filter(|&(_, r)| r > 0)
    }
}

impl CactusBranch {
    /// Radius of the connection between the node at `pos` and its neighbor on
    /// `side`.
    ///
    /// Two nodes of this family connect when either one's origin points at the
    /// other; the connection is as thick as the thinner of the two. A node
    /// growing from below also anchors into a rooty cell at its own radius.
    /// Unloaded cells never connect.
    pub fn side_connection_radius(&self, grid: &dyn Grid, pos: IVec3, side: Direction) -> u8 {
        let (Some(other), Some(here)) = (grid.cell_safe(side.step(pos)), grid.cell_safe(pos)) else {
            return 0;
        };
        let Some(state) = self.state_of(&here) else {
            return 0;
        };
        let other_state = self.state_of(&other);

        if let Some(other_state) = other_state {
            if other_state.origin() == side.opposite() || state.origin() == side {
                return self.cactus_radius(state.thickness()).min(self.radius_for_connection(&other));
            }
        }

        if side == Direction::Down
            && state.origin() == Origin::Down
            && (other_state.is_some() || other.is_rooty())
        {
            return self.cactus_radius(state.thickness());
        }

        0
    }

    /// Connection radii toward all six neighbors
    pub fn connection_data(&self, grid: &dyn Grid, pos: IVec3) -> Connections {
        let mut connections = Connections::default();
        for dir in Direction::ALL {
            connections.set_radius(dir, self.side_connection_radius(grid, pos, dir));
        }
        connections
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::branch::state::BranchState;
    use crate::branch::thickness::{FamilyThickness, Thickness};
    use crate::voxel::cell::{Cell, FamilyId};
    use crate::voxel::grid::WriteMode;
    use crate::voxel::world::World;

    fn setup() -> (CactusBranch, World) {
        let branch = CactusBranch::new(FamilyId(1), FamilyThickness::default());
        let world = World::with_loaded_region(IVec3::ZERO, IVec3::splat(15));
        (branch, world)
    }

    fn put(world: &mut World, branch: &CactusBranch, pos: IVec3, thickness: Thickness, origin: Origin) {
        world.set_cell(pos, branch.cell_for(BranchState::new(thickness, origin)), WriteMode::GROWTH);
    }

    #[test]
    fn test_connection_is_min_and_symmetric() {
        let (branch, mut world) = setup();
        let a = IVec3::new(4, 4, 4);
        let b = Direction::East.step(a);
        // Only b stores the pointer (b grew from a)
        put(&mut world, &branch, a, Thickness::Core, Origin::Down);
        put(&mut world, &branch, b, Thickness::Branch, Origin::West);

        assert_eq!(branch.side_connection_radius(&world, a, Direction::East), 4);
        assert_eq!(branch.side_connection_radius(&world, b, Direction::West), 4);

        // Pointer stored the other way round gives the same answer
        put(&mut world, &branch, a, Thickness::Core, Origin::East);
        put(&mut world, &branch, b, Thickness::Branch, Origin::Down);
        assert_eq!(branch.side_connection_radius(&world, a, Direction::East), 4);
        assert_eq!(branch.side_connection_radius(&world, b, Direction::West), 4);
    }

    #[test]
    fn test_adjacent_without_pointer_not_connected() {
        let (branch, mut world) = setup();
        let a = IVec3::new(4, 4, 4);
        let b = Direction::South.step(a);
        put(&mut world, &branch, a, Thickness::Trunk, Origin::Down);
        put(&mut world, &branch, b, Thickness::Trunk, Origin::Down);
        assert_eq!(branch.side_connection_radius(&world, a, Direction::South), 0);
        assert_eq!(branch.side_connection_radius(&world, b, Direction::North), 0);
    }

    #[test]
    fn test_other_family_not_connected() {
        let (branch, mut world) = setup();
        let a = IVec3::new(4, 4, 4);
        put(&mut world, &branch, a, Thickness::Trunk, Origin::Down);
        let foreign = Cell::branch(FamilyId(9), BranchState::new(Thickness::Trunk, Origin::Down));
        world.set_cell(Direction::Up.step(a), foreign, WriteMode::GROWTH);
        assert_eq!(branch.side_connection_radius(&world, a, Direction::Up), 0);
    }

    #[test]
    fn test_anchors_into_rooty_only_downward() {
        let (branch, mut world) = setup();
        let root = IVec3::new(2, 1, 2);
        let trunk = Direction::Up.step(root);
        world.set_cell(root, Cell::Rooty, WriteMode::GROWTH);
        put(&mut world, &branch, trunk, Thickness::Trunk, Origin::Down);

        assert_eq!(branch.side_connection_radius(&world, trunk, Direction::Down), 5);
        // The rooty cell reports nothing back
        assert_eq!(branch.side_connection_radius(&world, root, Direction::Up), 0);

        // A horizontal origin toward a rooty cell does not anchor
        let side_root = IVec3::new(8, 1, 8);
        let side = Direction::East.step(side_root);
        world.set_cell(side_root, Cell::Rooty, WriteMode::GROWTH);
        put(&mut world, &branch, side, Thickness::Trunk, Origin::West);
        assert_eq!(branch.side_connection_radius(&world, side, Direction::West), 0);
    }

    #[test]
    fn test_unloaded_neighbor_not_connected() {
        let (branch, mut world) = setup();
        // Bottom layer of the loaded region; below is unloaded
        let pos = IVec3::new(3, 0, 3);
        put(&mut world, &branch, pos, Thickness::Trunk, Origin::Down);
        assert_eq!(world.cell_safe(Direction::Down.step(pos)), None);
        assert_eq!(branch.side_connection_radius(&world, pos, Direction::Down), 0);
    }

    #[test]
    fn test_connection_data() {
        let (branch, mut world) = setup();
        let root = IVec3::new(5, 1, 5);
        let trunk = Direction::Up.step(root);
        let arm = Direction::North.step(trunk);
        let top = Direction::Up.step(trunk);
        world.set_cell(root, Cell::Rooty, WriteMode::GROWTH);
        put(&mut world, &branch, trunk, Thickness::Trunk, Origin::Down);
        put(&mut world, &branch, arm, Thickness::Branch, Origin::South);
        put(&mut world, &branch, top, Thickness::Trunk, Origin::Down);

        let conns = branch.connection_data(&world, trunk);
        assert_eq!(conns.connected_count(), 3);
        assert_eq!(conns.radius(Direction::Down), 5);
        assert_eq!(conns.radius(Direction::North), 4);
        assert_eq!(conns.radius(Direction::Up), 5);
        assert!(!conns.is_connected(Direction::East));
        let dirs: Vec<_> = conns.iter().map(|(d, _)| d).collect();
        assert_eq!(dirs, vec![Direction::Down, Direction::Up, Direction::North]);
    }
}
