//! Stock node inspectors.

use crate::branch::analyse::NodeInspector;
use crate::branch::block::CactusBranch;
use crate::core::types::IVec3;
use crate::voxel::cell::Cell;
use crate::voxel::direction::Direction;
use crate::voxel::grid::{DestroyMode, Grid};

/// Collects the position of every branch node visited
#[derive(Clone, Debug, Default)]
pub struct NodeCollector {
    nodes: Vec<IVec3>,
}

impl NodeCollector {
    pub fn nodes(&self) -> &[IVec3] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl NodeInspector for NodeCollector {
    fn run(&mut self, cell: Cell, _grid: &mut dyn Grid, pos: IVec3, _from: Option<Direction>) {
        if cell.is_branch() {
            self.nodes.push(pos);
        }
    }
}

/// Sums the squared radius of every node of one family
#[derive(Clone, Debug)]
pub struct NodeNetVolume {
    branch: CactusBranch,
    volume: u32,
}

impl NodeNetVolume {
    pub fn new(branch: CactusBranch) -> Self {
        Self { branch, volume: 0 }
    }

    pub fn volume(&self) -> u32 {
        self.volume
    }
}

impl NodeInspector for NodeNetVolume {
    fn run(&mut self, cell: Cell, _grid: &mut dyn Grid, _pos: IVec3, _from: Option<Direction>) {
        let radius = u32::from(self.branch.radius(&cell));
        self.volume += radius * radius;
    }
}

/// Removes every node of one family once its subtree has been walked
#[derive(Clone, Debug)]
pub struct NodeDestroyer {
    branch: CactusBranch,
    cause: DestroyMode,
    destroyed: Vec<IVec3>,
}

impl NodeDestroyer {
    pub fn new(branch: CactusBranch) -> Self {
        Self::with_cause(branch, DestroyMode::Harvest)
    }

    pub fn with_cause(branch: CactusBranch, cause: DestroyMode) -> Self {
        Self { branch, cause, destroyed: Vec::new() }
    }

    /// Removed positions, leaves first
    pub fn destroyed(&self) -> &[IVec3] {
        &self.destroyed
    }

    pub fn into_destroyed(self) -> Vec<IVec3> {
        self.destroyed
    }
}

impl NodeInspector for NodeDestroyer {
    fn run(&mut self, _cell: Cell, _grid: &mut dyn Grid, _pos: IVec3, _from: Option<Direction>) {}

    fn return_run(&mut self, _cell: Cell, grid: &mut dyn Grid, pos: IVec3, _from: Option<Direction>) {
        if self.branch.is_same_tree(&grid.cell(pos)) && grid.destroy(pos, self.cause) {
            self.destroyed.push(pos);
        }
    }
}
