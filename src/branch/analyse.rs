//! Depth-bounded analysis walk over a branch network.
//!
//! The walk visits a node, then every neighbor connected to it by an origin
//! pointer, except the one it came from. Caller-supplied inspectors see each
//! node on entry and again once all of its neighbors have been walked. The
//! walk stops descending at [`MAX_ANALYSIS_DEPTH`]; a node reached past that
//! depth is destroyed, which breaks loops.

use std::ops::{Deref, DerefMut};

use crate::branch::block::CactusBranch;
use crate::branch::part::PartTable;
use crate::core::types::IVec3;
use crate::voxel::cell::Cell;
use crate::voxel::direction::Direction;
use crate::voxel::grid::{DestroyMode, Grid};

/// Deepest node visit allowed in one analysis
pub const MAX_ANALYSIS_DEPTH: u32 = 32;

/// Callback run on the nodes an analysis visits
pub trait NodeInspector {
    /// Called when the walk enters a node
    fn run(&mut self, cell: Cell, grid: &mut dyn Grid, pos: IVec3, from: Option<Direction>);

    /// Called after every neighbor of a branch node has been walked
    fn return_run(&mut self, _cell: Cell, _grid: &mut dyn Grid, _pos: IVec3, _from: Option<Direction>) {}
}

/// Token carried through one analysis
#[derive(Default)]
pub struct MapSignal<'a> {
    /// Current recursion depth
    pub depth: u32,
    /// A root anchor was reached
    pub found: bool,
    /// Position of the root anchor, once found
    pub root: Option<IVec3>,
    /// Direction out of the starting node that leads to the root
    pub local_root_dir: Option<Direction>,
    /// The depth cap was hit
    pub overflow: bool,
    inspectors: Vec<&'a mut dyn NodeInspector>,
}

impl<'a> MapSignal<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an inspector
    pub fn inspect(mut self, inspector: &'a mut dyn NodeInspector) -> Self {
        self.inspectors.push(inspector);
        self
    }

    /// Run the entry inspectors
    pub fn run(&mut self, cell: Cell, grid: &mut dyn Grid, pos: IVec3, from: Option<Direction>) {
        for inspector in &mut self.inspectors {
            inspector.run(cell, grid, pos, from);
        }
    }

    /// Run the exit inspectors
    pub fn return_run(&mut self, cell: Cell, grid: &mut dyn Grid, pos: IVec3, from: Option<Direction>) {
        for inspector in &mut self.inspectors {
            inspector.return_run(cell, grid, pos, from);
        }
    }

    fn descend(&mut self) -> Descent<'_, 'a> {
        self.depth += 1;
        Descent { signal: self }
    }
}

/// One level of depth, given back when dropped
struct Descent<'s, 'a> {
    signal: &'s mut MapSignal<'a>,
}

impl<'a> Deref for Descent<'_, 'a> {
    type Target = MapSignal<'a>;

    fn deref(&self) -> &MapSignal<'a> {
        self.signal
    }
}

impl<'a> DerefMut for Descent<'_, 'a> {
    fn deref_mut(&mut self) -> &mut MapSignal<'a> {
        self.signal
    }
}

impl Drop for Descent<'_, '_> {
    fn drop(&mut self) {
        self.signal.depth -= 1;
    }
}

impl CactusBranch {
    /// Walk the network from the node at `pos`. `from_dir` is the direction
    /// the walk arrived from, `None` for the node the analysis started at.
    pub fn analyse(
        &self,
        parts: &PartTable,
        grid: &mut dyn Grid,
        pos: IVec3,
        from_dir: Option<Direction>,
        signal: &mut MapSignal<'_>,
    ) {
        let mut signal = signal.descend();

        if signal.depth > MAX_ANALYSIS_DEPTH {
            if grid.cell(pos).is_branch() {
                log::warn!("analysis overflow at {}, destroying node", pos);
                grid.destroy(pos, DestroyMode::Overflow);
            }
            signal.overflow = true;
            return;
        }

        let cell = grid.cell(pos);
        let state = self.state_of(&cell);
        signal.run(cell, grid, pos, from_dir);

        for dir in Direction::ALL {
            if Some(dir) == from_dir {
                continue;
            }
            let delta_pos = dir.step(pos);
            let delta_cell = grid.cell(delta_pos);
            let toward_here = Some(dir.opposite());

            if self.state_of(&delta_cell).is_some_and(|s| s.origin() == dir.opposite()) {
                self.analyse(parts, grid, delta_pos, toward_here, &mut signal);
            } else if state.is_some_and(|s| s.origin() == dir) {
                parts.resolve(&delta_cell).analyse(parts, grid, delta_pos, toward_here, &mut signal);
            }

            if signal.found && signal.local_root_dir.is_none() && from_dir.is_none() {
                signal.local_root_dir = Some(dir);
            }
        }

        signal.return_run(cell, grid, pos, from_dir);
    }
}
