//! Configuration for the blood bank
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

use crate::error::{BloodBankError, Result};
use crate::storage::{Inventory, DEFAULT_FILENAME};

/// Main configuration for a blood bank instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// Inventory file, rewritten after every mutation
    pub inventory_path: PathBuf,

    /// Stock written to a freshly created inventory file
    pub default_inventory: Inventory,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            inventory_path: PathBuf::from(DEFAULT_FILENAME),
            default_inventory: Inventory::default_stock(),
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Reject settings that cannot work
    pub fn validate(&self) -> Result<()> {
        if self.inventory_path.as_os_str().is_empty() {
            return Err(BloodBankError::Config(
                "inventory path must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the inventory file path
    pub fn inventory_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.inventory_path = path.into();
        self
    }

    /// Set the stock used to seed a missing inventory file
    pub fn default_inventory(mut self, inventory: Inventory) -> Self {
        self.config.default_inventory = inventory;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
