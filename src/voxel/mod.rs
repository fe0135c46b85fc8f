//! Voxel grid: directions, cells, chunked storage and the grid accessor

pub mod direction;
pub mod cell;
pub mod chunk;
pub mod grid;
pub mod edit;
pub mod world;

pub use direction::{Axis, Direction};
pub use cell::{Cell, FamilyId};
pub use chunk::{Chunk, ChunkCoord, CHUNK_SIZE};
pub use grid::{DestroyMode, Grid, WriteMode};
pub use edit::{EditDelta, EditOp};
pub use world::World;
