//! In-memory world made of loaded chunks

use std::collections::HashMap;

use crate::core::types::IVec3;
use crate::voxel::cell::Cell;
use crate::voxel::chunk::{Chunk, ChunkCoord};
use crate::voxel::edit::EditDelta;
use crate::voxel::grid::{Grid, WriteMode};

/// Chunked cell storage. Positions outside loaded chunks are unloaded:
/// safe reads return `None` and writes are refused.
#[derive(Clone)]
pub struct World {
    /// Map from chunk coordinates to loaded chunks
    chunks: HashMap<ChunkCoord, Chunk>,
    /// Chunk coordinates modified since the last `take_modified`
    modified_chunks: Vec<ChunkCoord>,
    /// Applied writes, oldest first
    edits: Vec<EditDelta>,
    next_edit_id: u64,
}

impl World {
    /// Create a new empty world with nothing loaded
    pub fn new() -> Self {
        Self {
            chunks: HashMap::new(),
            modified_chunks: Vec::new(),
            edits: Vec::new(),
            next_edit_id: 1,
        }
    }

    /// Create a world with every chunk overlapping the inclusive cell box loaded
    pub fn with_loaded_region(min: IVec3, max: IVec3) -> Self {
        let mut world = Self::new();
        world.load_region(min, max);
        world
    }

    /// Load an empty chunk; an already loaded chunk is kept as is
    pub fn load_chunk(&mut self, coord: ChunkCoord) {
        self.chunks.entry(coord).or_insert_with(|| Chunk::new(coord));
    }

    /// Load every chunk overlapping the inclusive cell box
    pub fn load_region(&mut self, min: IVec3, max: IVec3) {
        let lo = ChunkCoord::from_cell_pos(min.min(max));
        let hi = ChunkCoord::from_cell_pos(min.max(max));
        for x in lo.x..=hi.x {
            for y in lo.y..=hi.y {
                for z in lo.z..=hi.z {
                    self.load_chunk(ChunkCoord::new(x, y, z));
                }
            }
        }
    }

    /// Unload a chunk and return it
    pub fn unload_chunk(&mut self, coord: ChunkCoord) -> Option<Chunk> {
        self.modified_chunks.retain(|&c| c != coord);
        self.chunks.remove(&coord)
    }

    pub fn is_loaded(&self, pos: IVec3) -> bool {
        self.chunks.contains_key(&ChunkCoord::from_cell_pos(pos))
    }

    /// Get the number of loaded chunks
    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    /// Mark a chunk as modified
    pub fn mark_modified(&mut self, coord: ChunkCoord) {
        if !self.modified_chunks.contains(&coord) {
            self.modified_chunks.push(coord);
        }
        if let Some(chunk) = self.chunks.get_mut(&coord) {
            chunk.modified = true;
        }
    }

    /// Take the list of modified chunks and clear the internal list
    pub fn take_modified(&mut self) -> Vec<ChunkCoord> {
        for coord in &self.modified_chunks {
            if let Some(chunk) = self.chunks.get_mut(coord) {
                chunk.modified = false;
            }
        }
        std::mem::take(&mut self.modified_chunks)
    }

    /// Applied writes since creation or the last `take_edits`.
    ///
    /// The journal is never trimmed on its own; long-running callers drain it
    /// with `take_edits` after handling each batch.
    pub fn edits(&self) -> &[EditDelta] {
        &self.edits
    }

    pub fn take_edits(&mut self) -> Vec<EditDelta> {
        std::mem::take(&mut self.edits)
    }

    /// Positions of every branch cell in loaded chunks, bottom up
    pub fn branch_positions(&self) -> Vec<IVec3> {
        let mut out: Vec<IVec3> = self
            .chunks
            .values()
            .flat_map(|chunk| chunk.occupied_cells())
            .filter(|(_, cell)| cell.is_branch())
            .map(|(pos, _)| pos)
            .collect();
        out.sort_by_key(|p| (p.y, p.x, p.z));
        out
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

impl Grid for World {
    fn cell(&self, pos: IVec3) -> Cell {
        self.cell_safe(pos).unwrap_or_default()
    }

    fn cell_safe(&self, pos: IVec3) -> Option<Cell> {
        self.chunks
            .get(&ChunkCoord::from_cell_pos(pos))
            .map(|chunk| chunk.get(pos))
    }

    fn set_cell(&mut self, pos: IVec3, cell: Cell, mode: WriteMode) -> bool {
        let coord = ChunkCoord::from_cell_pos(pos);
        let Some(chunk) = self.chunks.get_mut(&coord) else {
            log::trace!("write to unloaded cell {} refused", pos);
            return false;
        };
        if chunk.get(pos) == cell {
            return false;
        }
        let old = chunk.set(pos, cell);

        let id = self.next_edit_id;
        self.next_edit_id += 1;
        self.edits.push(EditDelta { id, pos, old, new: cell, mode });
        self.mark_modified(coord);
        true
    }
}
