//! Cactus family and species configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::branch::thickness::{FamilyThickness, DEFAULT_BRANCH_RADIUS, DEFAULT_TRUNK_RADIUS};
use crate::core::{Error, Result};

/// Upper bound on signal energy; one unit of energy is one recursion level
pub const MAX_SIGNAL_ENERGY: f32 = 256.0;

/// Configuration of one cactus family and its species
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CactusConfig {
    /// Trunk radius in sixteenths of a cell
    pub primary_thickness: u8,
    /// Branch radius in sixteenths of a cell
    pub secondary_thickness: u8,
    /// Energy given to each growth signal
    pub signal_energy: f32,
    /// Weight of growing straight up into empty space
    pub up_weight: u32,
    /// Weight of sprouting a side branch into empty space
    pub branch_weight: u32,
    /// Nodes are never placed this many cells or more above the root
    pub max_height: i32,
    /// Side branches sprout only at or above this height
    pub lowest_branch_height: i32,
    /// Trunk nodes below this height may become core
    pub core_height: i32,
    /// Signal reach (height above root) that turns low trunk nodes into core
    pub core_trigger_height: i32,
    /// Seed for direction selection
    pub seed: u64,
}

impl Default for CactusConfig {
    fn default() -> Self {
        Self {
            primary_thickness: DEFAULT_TRUNK_RADIUS,
            secondary_thickness: DEFAULT_BRANCH_RADIUS,
            signal_energy: 16.0,
            up_weight: 8,
            branch_weight: 1,
            max_height: 8,
            lowest_branch_height: 3,
            core_height: 2,
            core_trigger_height: 5,
            seed: 12345,
        }
    }
}

impl CactusConfig {
    /// Radius table described by this config
    pub fn family_thickness(&self) -> Result<FamilyThickness> {
        FamilyThickness::new(self.primary_thickness, self.secondary_thickness)
    }

    /// Check every field is usable
    pub fn validate(&self) -> Result<()> {
        self.family_thickness()?;
        if !(self.signal_energy > 0.0 && self.signal_energy <= MAX_SIGNAL_ENERGY) {
            return Err(Error::Config(format!(
                "signal_energy must be in (0, {}], got {}",
                MAX_SIGNAL_ENERGY, self.signal_energy
            )));
        }
        // the first node sits one cell above the root
        if self.max_height < 2 {
            return Err(Error::Config(format!("max_height must be at least 2, got {}", self.max_height)));
        }
        if self.lowest_branch_height < 1 {
            return Err(Error::Config(format!(
                "lowest_branch_height must be at least 1, got {}",
                self.lowest_branch_height
            )));
        }
        if self.up_weight == 0 {
            return Err(Error::Config("up_weight must be positive".into()));
        }
        Ok(())
    }

    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self> {
        let config: CactusConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from file (sync)
    pub fn load_sync(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Save to file (sync)
    pub fn save_sync(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let cfg = CactusConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.family_thickness().unwrap(), FamilyThickness::default());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let cfg = CactusConfig::from_json(r#"{ "max_height": 12, "seed": 7 }"#).unwrap();
        assert_eq!(cfg.max_height, 12);
        assert_eq!(cfg.seed, 7);
        assert_eq!(cfg.primary_thickness, DEFAULT_TRUNK_RADIUS);
    }

    #[test]
    fn test_invalid_configs_rejected() {
        assert!(matches!(
            CactusConfig::from_json(r#"{ "primary_thickness": 3, "secondary_thickness": 4 }"#),
            Err(Error::Config(_))
        ));
        assert!(CactusConfig::from_json(r#"{ "signal_energy": 0.0 }"#).is_err());
        assert!(CactusConfig::from_json(r#"{ "signal_energy": 1000.0 }"#).is_err());
        assert!(CactusConfig::from_json(r#"{ "max_height": 1 }"#).is_err());
        assert!(CactusConfig::from_json("not json").is_err());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("cactus.json");
        let cfg = CactusConfig { max_height: 10, branch_weight: 3, ..Default::default() };

        cfg.save_sync(&path).unwrap();
        let loaded = CactusConfig::load_sync(&path).unwrap();
        assert_eq!(loaded, cfg);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = CactusConfig::load_sync(&dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
