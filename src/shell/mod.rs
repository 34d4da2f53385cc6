//! Shell Module
//!
//! Interactive menu over a [`BloodBank`](crate::engine::BloodBank).
//!
//! ## Responsibilities
//! - Validate each line of user input into a typed value
//! - Re-ask until valid where the flow allows it
//! - Route menu choices to bank operations and print the results
//!
//! Validation lives in [`input`] as pure functions, so the rules can be
//! tested without driving a session. [`Shell`] only owns the loop.

mod input;
mod session;

pub use input::{
    parse_blood_type, parse_dispense_units, parse_donor_selection, parse_menu_choice, parse_units,
    InputError, MenuChoice,
};
pub use session::Shell;
