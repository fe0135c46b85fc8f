//! Resolution of cells to the tree part that handles them.

use std::collections::HashMap;

use crate::branch::analyse::MapSignal;
use crate::branch::block::CactusBranch;
use crate::branch::growth::GrowSignal;
use crate::branch::species::Species;
use crate::core::types::IVec3;
use crate::voxel::cell::{Cell, FamilyId};
use crate::voxel::direction::Direction;
use crate::voxel::grid::Grid;

/// Behavior attached to a cell during analysis
#[derive(Clone, Copy, Debug)]
pub enum TreePart<'t> {
    /// Registered branch family
    Branch(&'t CactusBranch),
    /// Root anchor
    Rooty,
    /// Anything else, including branches of unregistered families
    Null,
}

impl TreePart<'_> {
    pub fn is_branch(&self) -> bool {
        matches!(self, TreePart::Branch(_))
    }

    pub fn is_rooty(&self) -> bool {
        matches!(self, TreePart::Rooty)
    }

    /// Continue an analysis into this part
    pub fn analyse(
        &self,
        parts: &PartTable,
        grid: &mut dyn Grid,
        pos: IVec3,
        from_dir: Option<Direction>,
        signal: &mut MapSignal<'_>,
    ) {
        match self {
            TreePart::Branch(branch) => branch.analyse(parts, grid, pos, from_dir, signal),
            TreePart::Rooty => {
                let cell = grid.cell(pos);
                signal.run(cell, grid, pos, from_dir);
                signal.root = Some(pos);
                signal.found = true;
            }
            TreePart::Null => {}
        }
    }
}

/// Registered branch families
#[derive(Clone, Debug, Default)]
pub struct PartTable {
    branches: HashMap<FamilyId, CactusBranch>,
}

impl PartTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a family, replacing any earlier entry for it
    pub fn register(&mut self, branch: CactusBranch) {
        if self.branches.insert(branch.family(), branch).is_some() {
            log::debug!("replaced branch family {:?}", branch.family());
        }
    }

    pub fn with(mut self, branch: CactusBranch) -> Self {
        self.register(branch);
        self
    }

    pub fn branch(&self, family: FamilyId) -> Option<&CactusBranch> {
        self.branches.get(&family)
    }

    pub fn len(&self) -> usize {
        self.branches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.branches.is_empty()
    }

    /// Part responsible for `cell`
    pub fn resolve(&self, cell: &Cell) -> TreePart<'_> {
        match cell {
            Cell::Branch { family, .. } => self.branches.get(family).map_or(TreePart::Null, TreePart::Branch),
            Cell::Rooty => TreePart::Rooty,
            _ => TreePart::Null,
        }
    }

    /// Start an analysis at `pos`
    pub fn analyse(&self, grid: &mut dyn Grid, pos: IVec3, signal: &mut MapSignal<'_>) {
        let cell = grid.cell(pos);
        self.resolve(&cell).analyse(self, grid, pos, None, signal);
    }
}

/// Send one growth signal into the tree standing on the rooty cell at
/// `root_pos`. Fails if there is no root there, or the cell above it is
/// neither part of the tree nor empty.
pub fn grow_from_root<'a>(branch: &CactusBranch, grid: &mut dyn Grid, root_pos: IVec3, species: &'a dyn Species) -> GrowSignal<'a> {
    let mut signal = GrowSignal::new(species, root_pos, species.signal_energy()).with_seed(species.signal_seed());

    if !grid.cell(root_pos).is_rooty() {
        log::debug!("no root at {}", root_pos);
        signal.success = false;
        return signal;
    }

    let base = Direction::Up.step(root_pos);
    match grid.cell_safe(base) {
        Some(cell) if branch.is_same_tree(&cell) => branch.grow_signal(grid, base, &mut signal),
        Some(Cell::Air) => branch.grow_into_air(grid, base, &mut signal),
        _ => signal.success = false,
    }
    signal
}
