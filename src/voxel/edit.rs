//! Edit journal entries.
//!
//! Every write that takes effect on a [`World`](super::world::World) is
//! recorded as a delta so listeners can see what changed and why.

use crate::core::types::IVec3;
use crate::voxel::cell::Cell;
use crate::voxel::chunk::ChunkCoord;
use crate::voxel::grid::{DestroyMode, WriteMode};

/// Kind of change a delta represents
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditOp {
    /// Empty cell filled
    Place,
    /// Occupied cell rewritten
    Replace,
    /// Occupied cell emptied
    Clear,
}

/// A single applied write with metadata
#[derive(Clone, Debug, PartialEq)]
pub struct EditDelta {
    /// Sequence number, starting at 1
    pub id: u64,
    pub pos: IVec3,
    pub old: Cell,
    pub new: Cell,
    pub mode: WriteMode,
}

impl EditDelta {
    pub fn op(&self) -> EditOp {
        match (self.old.is_air(), self.new.is_air()) {
            (true, _) => EditOp::Place,
            (false, true) => EditOp::Clear,
            (false, false) => EditOp::Replace,
        }
    }

    pub fn cause(&self) -> DestroyMode {
        self.mode.cause
    }

    /// Whether this delta removed a cell for the given reason
    pub fn is_destroy(&self, cause: DestroyMode) -> bool {
        self.op() == EditOp::Clear && self.mode.cause == cause
    }

    /// Chunk the edit landed in
    pub fn chunk(&self) -> ChunkCoord {
        ChunkCoord::from_cell_pos(self.pos)
    }
}
