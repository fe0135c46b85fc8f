//! Chunk system for managing cubic regions of cells

use crate::core::types::IVec3;
use crate::voxel::cell::Cell;

/// Number of cells per chunk side
pub const CHUNK_SIZE: i32 = 16;

/// Number of cells in one chunk
pub const CHUNK_VOLUME: usize = (CHUNK_SIZE * CHUNK_SIZE * CHUNK_SIZE) as usize;

/// Integer coordinate identifying a chunk in the world grid
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ChunkCoord {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl ChunkCoord {
    /// Create a new chunk coordinate
    pub fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Chunk containing a cell position
    pub fn from_cell_pos(pos: IVec3) -> Self {
        Self {
            x: pos.x.div_euclid(CHUNK_SIZE),
            y: pos.y.div_euclid(CHUNK_SIZE),
            z: pos.z.div_euclid(CHUNK_SIZE),
        }
    }

    /// Cell position of this chunk's minimum corner
    pub fn cell_origin(&self) -> IVec3 {
        IVec3::new(self.x, self.y, self.z) * CHUNK_SIZE
    }
}

/// A cubic block of cells
#[derive(Clone)]
pub struct Chunk {
    /// Coordinate of this chunk in the world grid
    pub coord: ChunkCoord,
    /// Whether this chunk has been modified since last taken
    pub modified: bool,
    cells: Vec<Cell>,
}

impl Chunk {
    /// Create a new empty chunk at the given coordinate
    pub fn new(coord: ChunkCoord) -> Self {
        Self {
            coord,
            modified: false,
            cells: vec![Cell::Air; CHUNK_VOLUME],
        }
    }

    fn index(pos: IVec3) -> usize {
        let x = pos.x.rem_euclid(CHUNK_SIZE);
        let y = pos.y.rem_euclid(CHUNK_SIZE);
        let z = pos.z.rem_euclid(CHUNK_SIZE);
        (x + z * CHUNK_SIZE + y * CHUNK_SIZE * CHUNK_SIZE) as usize
    }

    /// Cell at a world position inside this chunk
    pub fn get(&self, pos: IVec3) -> Cell {
        self.cells[Self::index(pos)]
    }

    /// Replace the cell at a world position inside this chunk, returning the old one
    pub fn set(&mut self, pos: IVec3, cell: Cell) -> Cell {
        std::mem::replace(&mut self.cells[Self::index(pos)], cell)
    }

    /// Number of non-air cells
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_air()).count()
    }

    /// World positions and contents of every non-air cell
    pub fn occupied_cells(&self) -> impl Iterator<Item = (IVec3, Cell)> + '_ {
        let origin = self.coord.cell_origin();
        self.cells.iter().enumerate().filter(|(_, c)| !c.is_air()).map(move |(i, c)| {
            let i = i as i32;
            let local = IVec3::new(
                i % CHUNK_SIZE,
                i / (CHUNK_SIZE * CHUNK_SIZE),
                (i / CHUNK_SIZE) % CHUNK_SIZE,
            );
            (origin + local, *c)
        })
    }
}
