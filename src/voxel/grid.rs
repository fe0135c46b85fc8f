//! Grid accessor interface the branch engine reads and writes through.

use crate::core::types::IVec3;
use crate::voxel::cell::Cell;

/// Write flags forwarded to the host
pub mod flags {
    /// Neighbors should be told about the change
    pub const NOTIFY_NEIGHBORS: u8 = 1 << 0;
    /// Observers/clients should be told about the change
    pub const NOTIFY_CLIENTS: u8 = 1 << 1;
    /// Both of the above
    pub const DEFAULT: u8 = NOTIFY_NEIGHBORS | NOTIFY_CLIENTS;
}

/// Why a branch cell is being rewritten or removed. Listeners use this to
/// decide on drops and effects.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DestroyMode {
    /// Ordinary growth or decay
    #[default]
    Sloppy,
    /// Thickness rewritten deliberately
    SetRadius,
    /// Removed to break a runaway or cyclic network
    Overflow,
    /// Cut down on purpose
    Harvest,
}

/// Flags and cause attached to a single write
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct WriteMode {
    pub flags: u8,
    pub cause: DestroyMode,
}

impl WriteMode {
    /// Plain growth placement
    pub const GROWTH: WriteMode = WriteMode {
        flags: flags::NOTIFY_CLIENTS,
        cause: DestroyMode::Sloppy,
    };

    /// A deliberate structural edit tagged with its cause
    pub fn deliberate(cause: DestroyMode) -> Self {
        Self { flags: flags::DEFAULT, cause }
    }
}

/// Position-indexed access to cells.
///
/// Implementations are driven from a single thread per call; the engine never
/// locks them.
pub trait Grid {
    /// Cell at `pos`; unloaded positions read as [`Cell::Air`]
    fn cell(&self, pos: IVec3) -> Cell;

    /// Cell at `pos`, or `None` if the position is not loaded
    fn cell_safe(&self, pos: IVec3) -> Option<Cell>;

    /// Write a cell. Returns whether the write took effect.
    fn set_cell(&mut self, pos: IVec3, cell: Cell, mode: WriteMode) -> bool;

    /// Remove whatever occupies `pos`, tagged with `cause`
    fn destroy(&mut self, pos: IVec3, cause: DestroyMode) -> bool {
        self.set_cell(pos, Cell::Air, WriteMode::deliberate(cause))
    }

    fn is_air(&self, pos: IVec3) -> bool {
        self.cell(pos).is_air()
    }
}
