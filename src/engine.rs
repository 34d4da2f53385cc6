//! Engine Module
//!
//! The blood bank: one inventory, its backing file, and the operations that
//! mutate it.
//!
//! ## Responsibilities
//! - Load (or seed) the inventory on startup
//! - Validate every mutation before touching a count
//! - Persist the full inventory after each successful mutation
//!
//! A failed save never rolls back the in-memory change. The receipt carries
//! the save error instead so the caller can report it and carry on.

use std::path::Path;

use tracing::{debug, info, warn};

use crate::compat::{can_donate, compatible_donors_for, BloodType};
use crate::config::Config;
use crate::error::{BloodBankError, Result};
use crate::storage::{Inventory, InventoryFile, LoadOutcome};

/// A compatible donor type that currently has stock
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StockOption {
    pub blood_type: BloodType,
    pub units: u32,
    /// Donor type equals the recipient type
    pub exact_match: bool,
}

/// Result of a successful add
#[derive(Debug)]
pub struct AddReceipt {
    pub blood_type: BloodType,
    pub added: u32,
    /// Units on hand after the add
    pub total: u32,
    /// Set when the inventory could not be written back
    pub save_error: Option<BloodBankError>,
}

/// Result of a successful dispense
#[derive(Debug)]
pub struct DispenseReceipt {
    pub recipient: BloodType,
    pub donor: BloodType,
    pub dispensed: u32,
    /// Donor units left after the dispense
    pub remaining: u32,
    /// Set when the inventory could not be written back
    pub save_error: Option<BloodBankError>,
}

/// The blood bank inventory and its persistence
pub struct BloodBank {
    /// Bank configuration
    config: Config,

    /// Backing file, rewritten after every mutation
    file: InventoryFile,

    /// Live unit counts
    inventory: Inventory,
}

impl BloodBank {
    /// Open the bank described by `config`
    ///
    /// On startup:
    /// 1. Validate the config
    /// 2. Seed the file with the default stock if it does not exist
    /// 3. Otherwise parse it, skipping malformed rows
    /// 4. Fall back to an empty inventory if the file is unreadable
    ///    (including a directory sitting at the inventory path)
    ///
    /// Only an empty inventory path is an error; the outcome reports how
    /// the inventory was obtained.
    pub fn open(config: Config) -> Result<(Self, LoadOutcome)> {
        config.validate()?;

        let file = InventoryFile::new(&config.inventory_path);
        let (inventory, outcome) = file.load(&config.default_inventory);

        info!(
            path = %file.path().display(),
            entries = inventory.len(),
            "blood bank opened"
        );

        Ok((
            Self {
                config,
                file,
                inventory,
            },
            outcome,
        ))
    }

    /// Open the inventory file at `path`, seeding the standard stock if it
    /// is missing
    pub fn open_path(path: &Path) -> Result<(Self, LoadOutcome)> {
        Self::open(Config::builder().inventory_path(path).build())
    }

    // =========================================================================
    // Operations
    // =========================================================================

    /// Receive `count` new units of `blood_type`
    ///
    /// Rejects a zero count and any add that would overflow the counter.
    pub fn add_units(&mut self, blood_type: BloodType, count: u32) -> Result<AddReceipt> {
        if count == 0 {
            return Err(BloodBankError::NonPositiveQuantity);
        }

        let current = self.inventory.get(blood_type);
        let total = current
            .checked_add(count)
            .ok_or(BloodBankError::QuantityOverflow {
                blood_type,
                current,
                requested: count,
            })?;

        self.inventory.set(blood_type, total);
        debug!(%blood_type, added = count, total, "units received");

        Ok(AddReceipt {
            blood_type,
            added: count,
            total,
            save_error: self.persist(),
        })
    }

    /// Compatible donor types with stock on hand, in table order
    pub fn available_for(&self, recipient: BloodType) -> Vec<StockOption> {
        compatible_donors_for(recipient)
            .into_iter()
            .filter_map(|donor| {
                let units = self.inventory.get(donor);
                (units > 0).then_some(StockOption {
                    blood_type: donor,
                    units,
                    exact_match: donor == recipient,
                })
            })
            .collect()
    }

    /// Dispense `quantity` units of `donor` blood for a `recipient`
    ///
    /// Checks, in order: compatibility, donor stock, a positive quantity,
    /// and that the quantity does not exceed the stock. Only the donor
    /// count changes.
    pub fn dispense(
        &mut self,
        recipient: BloodType,
        donor: BloodType,
        quantity: u32,
    ) -> Result<DispenseReceipt> {
        if !can_donate(donor, recipient) {
            return Err(BloodBankError::IncompatibleDonor { donor, recipient });
        }

        let available = self.inventory.get(donor);
        if available == 0 {
            return Err(BloodBankError::NoStockAvailable(donor));
        }
        if quantity == 0 {
            return Err(BloodBankError::NonPositiveQuantity);
        }
        if quantity > available {
            return Err(BloodBankError::InsufficientStock {
                blood_type: donor,
                requested: quantity,
                available,
            });
        }

        let remaining = available - quantity;
        self.inventory.set(donor, remaining);
        debug!(%recipient, %donor, dispensed = quantity, remaining, "units dispensed");

        Ok(DispenseReceipt {
            recipient,
            donor,
            dispensed: quantity,
            remaining,
            save_error: self.persist(),
        })
    }

    /// Write the inventory to its file
    pub fn save(&self) -> Result<()> {
        self.file.save(&self.inventory)
    }

    /// Save after a mutation, handing back any failure
    fn persist(&self) -> Option<BloodBankError> {
        let result = self.save().err();
        if let Some(e) = &result {
            warn!(path = %self.file.path().display(), error = %e, "failed to save inventory");
        }
        result
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Current unit counts
    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Units on hand for one type
    pub fn units(&self, blood_type: BloodType) -> u32 {
        self.inventory.get(blood_type)
    }

    /// Path of the backing file
    pub fn inventory_path(&self) -> &Path {
        self.file.path()
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}
