//! Growth signals and the recursive growth walk.
//!
//! A signal enters the network at its root and is handed from node to node
//! along directions chosen by the species. When it steps into empty space a
//! new node is placed there. On the way back out every node it passed may be
//! thickened.

use crate::branch::block::CactusBranch;
use crate::branch::species::Species;
use crate::branch::state::{BranchState, Origin};
use crate::branch::thickness::Thickness;
use crate::core::types::IVec3;
use crate::voxel::cell::Cell;
use crate::voxel::direction::Direction;
use crate::voxel::grid::{DestroyMode, Grid, WriteMode};

/// Token carried through one growth attempt
pub struct GrowSignal<'a> {
    species: &'a dyn Species,
    root_pos: IVec3,
    seed: u64,
    /// Direction of the last move
    pub dir: Direction,
    delta: IVec3,
    energy: f32,
    num_steps: u32,
    num_turns: u32,
    in_trunk: bool,
    /// Whether the attempt is still (or ended) successful
    pub success: bool,
    /// Radius of the node placed at the tip, if any
    pub radius: u8,
}

impl<'a> GrowSignal<'a> {
    /// New signal leaving the root upward
    pub fn new(species: &'a dyn Species, root_pos: IVec3, energy: f32) -> Self {
        Self {
            species,
            root_pos,
            seed: 0,
            dir: Direction::Up,
            delta: IVec3::ZERO,
            energy,
            num_steps: 0,
            num_turns: 0,
            in_trunk: true,
            success: true,
            radius: 0,
        }
    }

    /// Same signal with its own random seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Seed for the random choices made along this signal's path
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn species(&self) -> &'a dyn Species {
        self.species
    }

    pub fn root_pos(&self) -> IVec3 {
        self.root_pos
    }

    /// Offset of the node currently holding the signal from the root
    pub fn delta(&self) -> IVec3 {
        self.delta
    }

    pub fn energy(&self) -> f32 {
        self.energy
    }

    pub fn num_steps(&self) -> u32 {
        self.num_steps
    }

    pub fn num_turns(&self) -> u32 {
        self.num_turns
    }

    /// Still travelling in the direction it left the root
    pub fn is_in_trunk(&self) -> bool {
        self.in_trunk
    }

    /// Advance into the next node. Returns false once the signal has run out
    /// of energy, failing it.
    pub fn step(&mut self) -> bool {
        self.num_steps += 1;
        self.delta += self.dir.offset();
        self.energy -= 1.0;
        if self.energy <= 0.0 {
            self.success = false;
        }
        self.success
    }

    /// Point the signal at `dir`. Returns whether that was a change of direction.
    pub fn do_turn(&mut self, dir: Direction) -> bool {
        if self.dir == dir {
            return false;
        }
        self.in_trunk = false;
        self.num_turns += 1;
        self.dir = dir;
        true
    }
}

impl CactusBranch {
    /// Pass a growth signal through the node at `pos`.
    pub fn grow_signal(&self, grid: &mut dyn Grid, pos: IVec3, signal: &mut GrowSignal<'_>) {
        if !signal.step() {
            return;
        }
        let species = signal.species();

        let target = species.select_new_direction(&*grid, pos, self, signal);
        signal.do_turn(target);

        let delta_pos = target.step(pos);
        match grid.cell_safe(delta_pos) {
            Some(delta_cell) if self.is_same_tree(&delta_cell) => self.grow_signal(grid, delta_pos, signal),
            Some(Cell::Air) => self.grow_into_air(grid, delta_pos, signal),
            Some(_) => {}
            None => {
                log::debug!("growth from {} stopped at unloaded {}", pos, delta_pos);
                signal.success = false;
            }
        }

        let Some(cactus) = species.cactus_growth() else {
            return;
        };
        if let Some(state) = self.state_of(&grid.cell(pos)) {
            let current = state.thickness();
            let wanted = cactus.thickness_after_growth_signal(&*grid, pos, signal, current);
            if wanted != current {
                log::trace!("{} thickens {} -> {}", pos, current, wanted);
                self.set_radius(grid, pos, self.cactus_radius(wanted), state.origin());
            }
        }
    }

    /// Place a new node at the empty `pos` the signal just stepped into.
    pub fn grow_into_air(&self, grid: &mut dyn Grid, pos: IVec3, signal: &mut GrowSignal<'_>) {
        let Ok(origin) = Origin::try_from(signal.dir.opposite()) else {
            log::debug!("downward growth into {} refused", pos);
            signal.success = false;
            return;
        };

        let thickness = match signal.species().cactus_growth() {
            Some(cactus) => {
                let first = grid.cell(origin.direction().step(pos)).is_rooty();
                cactus.thickness_for_branch_placed(&*grid, pos, first)
            }
            None => Thickness::Branch,
        };

        // A side branch may not be sandwiched against a vertical segment
        if origin.is_horizontal()
            && (self.is_same_tree(&grid.cell(Direction::Up.step(pos)))
                || self.is_same_tree(&grid.cell(Direction::Down.step(pos))))
        {
            log::debug!("side growth into {} blocked by vertical neighbor", pos);
            signal.success = false;
            return;
        }

        let cell = self.cell_for(BranchState::new(thickness, origin));
        signal.success = grid.set_cell(pos, cell, WriteMode::GROWTH);
        signal.radius = self.cactus_radius(thickness);
        log::trace!("grew {} {} from {}", thickness, pos, origin.direction());
    }

    /// Rewrite the node at `pos` with the thickness fitting `radius` and the
    /// given origin, as a deliberate restructure. Returns whether the write
    /// took effect.
    pub fn set_radius(&self, grid: &mut dyn Grid, pos: IVec3, radius: u8, origin: Origin) -> bool {
        let state = self.state_for_radius(radius).with_origin(origin);
        grid.set_cell(pos, self.cell_for(state), WriteMode::deliberate(DestroyMode::SetRadius))
    }
}
