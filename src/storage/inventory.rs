//! Inventory mapping
//!
//! Insertion-ordered blood type → unit count map.

use crate::compat::BloodType;

/// Unit counts keyed by blood type
///
/// Counts are `u32`, so the non-negative invariant holds by construction;
/// subtraction is only ever done after the engine has checked the stock.
/// Entries keep the order they were first inserted in, which is the order
/// rows are written back to disk. Absent types read as zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    entries: Vec<(BloodType, u32)>,
}

impl Inventory {
    /// Create an empty inventory
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed stock used when no inventory file exists yet
    pub fn default_stock() -> Self {
        use BloodType::*;

        [
            (ONeg, 15),
            (OPos, 25),
            (ANeg, 10),
            (APos, 40),
            (BNeg, 5),
            (BPos, 12),
            (AbNeg, 8),
            (AbPos, 18),
        ]
        .into_iter()
        .collect()
    }

    /// Units on hand for a type (0 when absent)
    pub fn get(&self, blood_type: BloodType) -> u32 {
        self.entries
            .iter()
            .find(|(t, _)| *t == blood_type)
            .map(|(_, units)| *units)
            .unwrap_or(0)
    }

    /// Whether the type has an entry at all (even a zero one)
    pub fn contains(&self, blood_type: BloodType) -> bool {
        self.entries.iter().any(|(t, _)| *t == blood_type)
    }

    /// Set the count for a type
    ///
    /// An existing entry keeps its position; a new one is appended.
    pub fn set(&mut self, blood_type: BloodType, units: u32) {
        match self.entries.iter_mut().find(|(t, _)| *t == blood_type) {
            Some(entry) => entry.1 = units,
            None => self.entries.push((blood_type, units)),
        }
    }

    /// Entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (BloodType, u32)> + '_ {
        self.entries.iter().copied()
    }

    /// Entries ordered by code text (`A+`, `A-`, `AB+`, ... `O-`) for display
    pub fn sorted(&self) -> Vec<(BloodType, u32)> {
        let mut sorted = self.entries.clone();
        sorted.sort_by_key(|(t, _)| t.as_str());
        sorted
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(BloodType, u32)> for Inventory {
    fn from_iter<I: IntoIterator<Item = (BloodType, u32)>>(iter: I) -> Self {
        let mut inventory = Inventory::new();
        for (blood_type, units) in iter {
            inventory.set(blood_type, units);
        }
        inventory
    }
}
