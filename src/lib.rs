//! Saguaro - cactus branch networks grown on a voxel grid

pub mod core;
pub mod math;
pub mod voxel;
pub mod branch;
