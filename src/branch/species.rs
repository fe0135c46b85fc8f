//! Growth policies.
//!
//! A [`Species`] steers growth signals; species that also implement
//! [`CactusGrowth`] decide the thickness of new and grown nodes.
//! [`CactusSpecies`] is the stock policy driven by a [`CactusConfig`].

use crate::branch::block::CactusBranch;
use crate::branch::config::CactusConfig;
use crate::branch::growth::GrowSignal;
use crate::branch::part::grow_from_root;
use crate::branch::thickness::Thickness;
use crate::core::types::IVec3;
use crate::core::Result;
use crate::voxel::cell::FamilyId;
use crate::voxel::direction::Direction;
use crate::voxel::grid::Grid;

/// Policy steering growth signals of one species
pub trait Species {
    /// Direction the signal should take out of the node at `pos`
    fn select_new_direction(&self, grid: &dyn Grid, pos: IVec3, branch: &CactusBranch, signal: &GrowSignal<'_>) -> Direction;

    /// Energy a fresh signal starts with
    fn signal_energy(&self) -> f32;

    /// Random seed for the next signal sent into a tree of this species
    fn signal_seed(&self) -> u64 {
        0
    }

    /// Cactus-specific thickness rules, if this species has them
    fn cactus_growth(&self) -> Option<&dyn CactusGrowth> {
        None
    }
}

/// Thickness rules of cactus species
pub trait CactusGrowth {
    /// Thickness of a node about to be placed at `pos`
    fn thickness_for_branch_placed(&self, grid: &dyn Grid, pos: IVec3, is_first_placement: bool) -> Thickness;

    /// Thickness the node at `pos` should have once `signal` has returned through it
    fn thickness_after_growth_signal(&self, grid: &dyn Grid, pos: IVec3, signal: &GrowSignal<'_>, current: Thickness) -> Thickness;
}

/// Simple deterministic RNG using hash function
struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        Self { state: seed.wrapping_add(1) }
    }

    /// Seed mixing a base seed with a grid position and step count
    fn for_step(seed: u64, pos: IVec3, step: u32) -> Self {
        let h = seed
            ^ (pos.x as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15)
            ^ (pos.y as u64).wrapping_mul(0xC2B2_AE3D_27D4_EB4F)
            ^ (pos.z as u64).wrapping_mul(0x1656_67B1_9E37_79F9)
            ^ (step as u64).wrapping_mul(0x27D4_EB2F_1656_67C5);
        Self::new(h)
    }

    /// Advance state and return next u32
    fn next_u32(&mut self) -> u32 {
        // PCG-like state update
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        let mut h = (self.state >> 32) as u32;
        h = h.wrapping_mul(0x45d9f3b);
        h ^= h >> 16;
        h = h.wrapping_mul(0x45d9f3b);
        h ^= h >> 16;
        h
    }
}

/// Stock cactus species: a trunk that rises, sprouts side arms once tall
/// enough, and thickens into a core near the ground.
#[derive(Clone, Debug)]
pub struct CactusSpecies {
    branch: CactusBranch,
    config: CactusConfig,
    /// Signals sent so far
    signals: std::cell::Cell<u64>,
}

impl CactusSpecies {
    /// Create a species growing branches of `family` from a validated config
    pub fn new(family: FamilyId, config: CactusConfig) -> Result<Self> {
        config.validate()?;
        let branch = CactusBranch::new(family, config.family_thickness()?);
        Ok(Self { branch, config, signals: std::cell::Cell::new(0) })
    }

    pub fn branch(&self) -> &CactusBranch {
        &self.branch
    }

    pub fn config(&self) -> &CactusConfig {
        &self.config
    }

    /// Send one growth signal up from the rooty cell at `root_pos`
    pub fn grow(&self, grid: &mut dyn Grid, root_pos: IVec3) -> GrowSignal<'_> {
        grow_from_root(&self.branch, grid, root_pos, self)
    }

    /// Weight of sending the signal from `pos` toward `dir`
    fn direction_weight(&self, grid: &dyn Grid, pos: IVec3, branch: &CactusBranch, signal: &GrowSignal<'_>, dir: Direction) -> u32 {
        let Some(neighbor) = grid.cell_safe(dir.step(pos)) else {
            return 0;
        };
        if branch.is_same_tree(&neighbor) {
            // Follow existing structure, but only along real connections
            return if branch.side_connection_radius(grid, pos, dir) > 0 {
                branch.probability_for_block(&neighbor)
            } else {
                0
            };
        }
        if !neighbor.is_air() {
            return 0;
        }

        let height = pos.y - signal.root_pos().y;
        if dir == Direction::Up {
            return if height + 1 < self.config.max_height { self.config.up_weight } else { 0 };
        }
        let thickness = branch.state_of(&grid.cell(pos)).map(|s| s.thickness());
        let sprouts = matches!(thickness, Some(Thickness::Trunk | Thickness::Core));
        if sprouts && height >= self.config.lowest_branch_height && height < self.config.max_height {
            self.config.branch_weight
        } else {
            0
        }
    }
}

impl Species for CactusSpecies {
    /// Weighted pick over the five non-down directions, skipping the node's
    /// own origin. With nothing eligible the signal bounces back toward the
    /// node it came from and spends its energy there.
    fn select_new_direction(&self, grid: &dyn Grid, pos: IVec3, branch: &CactusBranch, signal: &GrowSignal<'_>) -> Direction {
        let origin = branch.state_of(&grid.cell(pos)).map(|s| s.origin().direction());

        let mut weights = [0u32; 6];
        for dir in Direction::ALL {
            if dir == Direction::Down || Some(dir) == origin {
                continue;
            }
            weights[dir.index()] = self.direction_weight(grid, pos, branch, signal, dir);
        }

        let total: u32 = weights.iter().sum();
        if total == 0 {
            return origin.unwrap_or(Direction::Up);
        }

        let mut pick = SimpleRng::for_step(signal.seed(), pos, signal.num_steps()).next_u32() % total;
        for dir in Direction::ALL {
            let weight = weights[dir.index()];
            if pick < weight {
                return dir;
            }
            pick -= weight;
        }
        Direction::Up
    }

    fn signal_energy(&self) -> f32 {
        self.config.signal_energy
    }

    /// Config seed mixed with a per-signal counter, so each tick can take a
    /// different path through an unchanged tree
    fn signal_seed(&self) -> u64 {
        let n = self.signals.get();
        self.signals.set(n.wrapping_add(1));
        self.config.seed.wrapping_add(n.wrapping_mul(0x9E37_79B9_7F4A_7C15))
    }

    fn cactus_growth(&self) -> Option<&dyn CactusGrowth> {
        Some(self)
    }
}

impl CactusGrowth for CactusSpecies {
    /// Trunk for the first node above the root or directly above a trunk or
    /// core node; branch everywhere else.
    fn thickness_for_branch_placed(&self, grid: &dyn Grid, pos: IVec3, is_first_placement: bool) -> Thickness {
        if is_first_placement {
            return Thickness::Trunk;
        }
        match self.branch.state_of(&grid.cell(Direction::Down.step(pos))) {
            Some(below) if below.thickness() != Thickness::Branch => Thickness::Trunk,
            _ => Thickness::Branch,
        }
    }

    fn thickness_after_growth_signal(&self, _grid: &dyn Grid, pos: IVec3, signal: &GrowSignal<'_>, current: Thickness) -> Thickness {
        let height = pos.y - signal.root_pos().y;
        if current == Thickness::Trunk
            && height < self.config.core_height
            && signal.delta().y >= self.config.core_trigger_height
        {
            Thickness::Core
        } else {
            current
        }
    }
}
