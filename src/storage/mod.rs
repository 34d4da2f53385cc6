//! Storage Module
//!
//! In-memory inventory plus its flat-file persistence.
//!
//! ## Responsibilities
//! - Hold unit counts per blood type (never negative)
//! - Load the inventory file, seeding defaults on first run
//! - Rewrite the whole file after every mutation
//!
//! ## File Format
//! ```text
//! blood_type,units      <- header, columns located by name (CRLF rows)
//! O-,15                 <- one row per entry, insertion order
//! O+,25
//! ...
//! ```
//!
//! Rows with an unknown blood type or a malformed count are skipped on
//! load; everything else about the file is rewritten on save.

mod file;
mod inventory;

pub use file::{InventoryFile, LoadOutcome, DEFAULT_FILENAME, HEADER};
pub use inventory::Inventory;
