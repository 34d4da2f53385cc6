//! Blood type codes

use std::fmt;
use std::str::FromStr;

use crate::error::{BloodBankError, Result};

/// One of the 8 ABO/Rh blood types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BloodType {
    ONeg,
    OPos,
    ANeg,
    APos,
    BNeg,
    BPos,
    AbNeg,
    AbPos,
}

impl BloodType {
    /// Every blood type, in compatibility-table definition order
    pub const ALL: [BloodType; 8] = [
        BloodType::ONeg,
        BloodType::OPos,
        BloodType::ANeg,
        BloodType::APos,
        BloodType::BNeg,
        BloodType::BPos,
        BloodType::AbNeg,
        BloodType::AbPos,
    ];

    /// The code as written in the inventory file and at the prompt
    pub fn as_str(&self) -> &'static str {
        match self {
            BloodType::ONeg => "O-",
            BloodType::OPos => "O+",
            BloodType::ANeg => "A-",
            BloodType::APos => "A+",
            BloodType::BNeg => "B-",
            BloodType::BPos => "B+",
            BloodType::AbNeg => "AB-",
            BloodType::AbPos => "AB+",
        }
    }

    /// Parse a code, ignoring case and surrounding whitespace
    ///
    /// Returns `None` for anything outside the 8 codes.
    pub fn parse(input: &str) -> Option<Self> {
        let code = input.trim().to_ascii_uppercase();
        Self::ALL.into_iter().find(|t| t.as_str() == code)
    }

    /// Comma-separated list of every code, for prompts
    pub fn codes() -> String {
        Self::ALL
            .iter()
            .map(|t| t.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for BloodType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // pad() so width/alignment specifiers apply
        f.pad(self.as_str())
    }
}

impl FromStr for BloodType {
    type Err = BloodBankError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s).ok_or_else(|| BloodBankError::InvalidBloodType(s.trim().to_string()))
    }
}
