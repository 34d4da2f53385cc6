//! # Blood Bank
//!
//! Blood-unit inventory tracking with:
//! - Per-type unit counts that can never go negative
//! - Donor/recipient compatibility checks before dispensing
//! - Flat-file persistence rewritten after every change
//! - An interactive menu shell over stdin/stdout
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      Interactive Shell                      │
//! │          (menu loop, input validation, reprompting)         │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                         BloodBank                           │
//! │                (add units / dispense units)                 │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌───────────────┐
//!   │Compatibility│          │   Inventory   │
//!   │   (table)   │          │  (in memory)  │
//!   └─────────────┘          └───────┬───────┘
//!                                    │
//!                                    ▼
//!                            ┌───────────────┐
//!                            │ InventoryFile │
//!                            │    (.csv)     │
//!                            └───────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod compat;
pub mod storage;
pub mod engine;
pub mod shell;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{BloodBankError, Result};
pub use config::Config;
pub use compat::BloodType;
pub use engine::BloodBank;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of the blood bank
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
