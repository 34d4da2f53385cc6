//! Compatibility Module
//!
//! Blood types and the donor → recipient compatibility table.
//!
//! ## Responsibilities
//! - Parse and display the 8 ABO/Rh codes
//! - Answer "who may donate to this recipient" in fixed table order
//!
//! ## Table
//! ```text
//!  donor │ O- O+ A- A+ B- B+ AB- AB+
//! ───────┼──────────────────────────
//!   O-   │ ●  ●  ●  ●  ●  ●  ●   ●     universal donor
//!   O+   │    ●     ●     ●      ●
//!   A-   │       ●  ●         ●   ●
//!   A+   │          ●             ●
//!   B-   │             ●  ●   ●   ●
//!   B+   │                ●       ●
//!   AB-  │                    ●   ●
//!   AB+  │                        ●     receives from everyone
//! ```

mod blood_type;
mod table;

pub use blood_type::BloodType;
pub use table::{can_donate, compatible_donors_for, compatible_recipients_for};
