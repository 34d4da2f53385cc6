//! Static compatibility table
//!
//! Each row lists the recipients a donor type may serve. The table is a
//! compile-time constant; lookups never allocate beyond the result vector.

use super::BloodType;
use super::BloodType::*;

/// Donor → recipients, in definition order
const COMPATIBILITY: [(BloodType, &[BloodType]); 8] = [
    (ONeg, &[ONeg, OPos, ANeg, APos, BNeg, BPos, AbNeg, AbPos]),
    (OPos, &[OPos, APos, BPos, AbPos]),
    (ANeg, &[ANeg, APos, AbNeg, AbPos]),
    (APos, &[APos, AbPos]),
    (BNeg, &[BNeg, BPos, AbNeg, AbPos]),
    (BPos, &[BPos, AbPos]),
    (AbNeg, &[AbNeg, AbPos]),
    (AbPos, &[AbPos]),
];

/// Recipient types the given donor may serve
pub fn compatible_recipients_for(donor: BloodType) -> &'static [BloodType] {
    COMPATIBILITY
        .iter()
        .find(|(d, _)| *d == donor)
        .map(|(_, recipients)| *recipients)
        .unwrap_or(&[])
}

/// Whether `donor` blood may be given to a `recipient`
pub fn can_donate(donor: BloodType, recipient: BloodType) -> bool {
    compatible_recipients_for(donor).contains(&recipient)
}

/// Every donor type whose row contains `recipient`
///
/// Ordered by table definition order, not sorted.
pub fn compatible_donors_for(recipient: BloodType) -> Vec<BloodType> {
    COMPATIBILITY
        .iter()
        .filter(|(_, recipients)| recipients.contains(&recipient))
        .map(|(donor, _)| *donor)
        .collect()
}
