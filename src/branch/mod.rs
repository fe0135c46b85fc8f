//! Cactus branch networks.
//!
//! A network is a tree of branch cells. Each node records the direction it
//! grew from (its origin); connectivity, growth and analysis are all derived
//! from those origins plus the family's thickness table.

pub mod thickness;
pub mod state;
pub mod block;
pub mod connection;
pub mod shape;
pub mod growth;
pub mod analyse;
pub mod part;
pub mod inspectors;
pub mod network;
pub mod species;
pub mod config;

pub use thickness::{FamilyThickness, Thickness, CORE_RADIUS};
pub use state::{BranchState, Origin};
pub use block::CactusBranch;
pub use connection::Connections;
pub use growth::GrowSignal;
pub use analyse::{MapSignal, NodeInspector, MAX_ANALYSIS_DEPTH};
pub use part::{PartTable, TreePart};
pub use inspectors::{NodeCollector, NodeDestroyer, NodeNetVolume};
pub use network::{destroy_branch, find_root, RootSearch};
pub use species::{CactusGrowth, CactusSpecies, Species};
pub use config::CactusConfig;
