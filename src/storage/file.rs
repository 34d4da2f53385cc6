//! Inventory File
//!
//! Reads and rewrites the `blood_type,units` table.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::compat::BloodType;
use crate::error::{BloodBankError, Result};

use super::Inventory;

/// File name used when none is configured
pub const DEFAULT_FILENAME: &str = "blood_inventory.csv";

/// Header row, also the required column names
pub const HEADER: &str = "blood_type,units";

/// Rows are terminated the way spreadsheet CSV writers do
const LINE_ENDING: &str = "\r\n";

const TYPE_COLUMN: &str = "blood_type";
const UNITS_COLUMN: &str = "units";

/// How the initial inventory was obtained
#[derive(Debug)]
pub enum LoadOutcome {
    /// No file existed; it was seeded with the defaults.
    /// `save_error` is set if writing the seeded file failed.
    Created { save_error: Option<BloodBankError> },

    /// File parsed; `skipped` rows were tolerated and ignored
    Loaded { skipped: usize },

    /// File exists but could not be read; inventory starts empty
    Unreadable(BloodBankError),
}

/// Flat-file persistence for an [`Inventory`]
#[derive(Debug, Clone)]
pub struct InventoryFile {
    path: PathBuf,
}

impl InventoryFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the inventory, creating the file from `defaults` if missing
    ///
    /// Never fails: a missing file yields the defaults, an unreadable one
    /// yields an empty inventory. The outcome says which happened.
    pub fn load(&self, defaults: &Inventory) -> (Inventory, LoadOutcome) {
        if !self.path.exists() {
            info!(path = %self.path.display(), "inventory file not found, seeding defaults");
            let save_error = self.save(defaults).err();
            if let Some(e) = &save_error {
                warn!(path = %self.path.display(), error = %e, "failed to create inventory file");
            }
            return (defaults.clone(), LoadOutcome::Created { save_error });
        }

        match self.read() {
            Ok((inventory, skipped)) => {
                info!(
                    path = %self.path.display(),
                    entries = inventory.len(),
                    skipped,
                    "inventory loaded"
                );
                (inventory, LoadOutcome::Loaded { skipped })
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "inventory unreadable, starting empty");
                (Inventory::new(), LoadOutcome::Unreadable(e))
            }
        }
    }

    /// Read and parse an existing file
    ///
    /// Returns the inventory and the number of skipped rows.
    pub fn read(&self) -> Result<(Inventory, usize)> {
        let file = File::open(&self.path)?;
        parse(BufReader::new(file))
    }

    /// Rewrite the file with every entry, in insertion order
    pub fn save(&self, inventory: &Inventory) -> Result<()> {
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&self.path)?;

        let mut writer = BufWriter::new(file);
        write!(writer, "{}{}", HEADER, LINE_ENDING)?;
        for (blood_type, units) in inventory.iter() {
            write!(writer, "{},{}{}", blood_type, units, LINE_ENDING)?;
        }
        writer.flush()?;

        debug!(path = %self.path.display(), entries = inventory.len(), "inventory saved");
        Ok(())
    }
}

impl Default for InventoryFile {
    fn default() -> Self {
        Self::new(DEFAULT_FILENAME)
    }
}

// =============================================================================
// Parsing
// =============================================================================

/// Column positions found in the header row
struct Columns {
    blood_type: usize,
    units: usize,
}

impl Columns {
    fn from_header(line: &str) -> Option<Self> {
        let names: Vec<&str> = split_fields(line).collect();
        let position = |name: &str| names.iter().position(|n| *n == name);
        Some(Self {
            blood_type: position(TYPE_COLUMN)?,
            units: position(UNITS_COLUMN)?,
        })
    }
}

fn parse<R: BufRead>(reader: R) -> Result<(Inventory, usize)> {
    let mut inventory = Inventory::new();
    let mut skipped = 0;
    let mut lines = reader.lines().enumerate();

    let columns = loop {
        let Some((_, line)) = lines.next() else {
            return Ok((inventory, skipped));
        };
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let found = Columns::from_header(&line);
        if found.is_none() {
            warn!(header = %line.trim(), "inventory header lacks blood_type/units columns");
        }
        break found;
    };

    for (index, line) in lines {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        match columns.as_ref().and_then(|c| parse_record(&line, c)) {
            Some((blood_type, units)) => inventory.set(blood_type, units),
            None => {
                warn!(line = index + 1, record = %line.trim(), "skipping inventory record");
                skipped += 1;
            }
        }
    }

    Ok((inventory, skipped))
}

fn parse_record(line: &str, columns: &Columns) -> Option<(BloodType, u32)> {
    let fields: Vec<&str> = split_fields(line).collect();
    let blood_type = BloodType::parse(fields.get(columns.blood_type)?)?;
    let units = fields.get(columns.units)?.parse().ok()?;
    Some((blood_type, units))
}

/// Split a row on commas, trimming whitespace and surrounding quotes
fn split_fields(line: &str) -> impl Iterator<Item = &str> {
    line.split(',').map(|field| {
        let field = field.trim();
        field
            .strip_prefix('"')
            .and_then(|f| f.strip_suffix('"'))
            .unwrap_or(field)
            .trim()
    })
}
