//! Error types for the blood bank
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

use crate::compat::BloodType;

/// Result type alias using BloodBankError
pub type Result<T> = std::result::Result<T, BloodBankError>;

/// Unified error type for blood bank operations
#[derive(Debug, Error)]
pub enum BloodBankError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Validation Errors
    // -------------------------------------------------------------------------
    #[error("'{0}' is not a valid blood type")]
    InvalidBloodType(String),

    #[error("quantity must be a positive number")]
    NonPositiveQuantity,

    #[error("adding {requested} units to {current} units of {blood_type} exceeds the maximum count")]
    QuantityOverflow {
        blood_type: BloodType,
        current: u32,
        requested: u32,
    },

    // -------------------------------------------------------------------------
    // Dispense Errors
    // -------------------------------------------------------------------------
    #[error("{donor} cannot be given to a {recipient} recipient")]
    IncompatibleDonor {
        donor: BloodType,
        recipient: BloodType,
    },

    #[error("no stock available for {0}")]
    NoStockAvailable(BloodType),

    #[error("only {available} units of {blood_type} are available ({requested} requested)")]
    InsufficientStock {
        blood_type: BloodType,
        requested: u32,
        available: u32,
    },

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // -------------------------------------------------------------------------
    // Interactive Input
    // -------------------------------------------------------------------------
    #[error("input stream closed")]
    InputClosed,
}
