//! Input validation
//!
//! Each function turns one line of user input into a typed value or an
//! [`InputError`] whose message is shown before re-asking.

use thiserror::Error;

use crate::compat::BloodType;
use crate::engine::StockOption;

/// A rejected line of input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Invalid choice. Please enter a number between 1 and 4.")]
    InvalidMenuChoice,

    #[error("'{0}' is not a valid blood type. Please try again.")]
    InvalidBloodType(String),

    #[error("Please enter a valid whole number for units.")]
    NotANumber,

    #[error("Units must be a positive number.")]
    NonPositive,

    #[error("Units must not exceed {}.", u32::MAX)]
    TooLarge,

    #[error("'{0}' is either incompatible or has no available stock. Try again.")]
    UnavailableDonor(String),

    #[error("Only {available} units of {blood_type} are available.")]
    ExceedsStock { blood_type: BloodType, available: u32 },
}

/// Top-level menu entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Display,
    Add,
    Dispense,
    Exit,
}

pub fn parse_menu_choice(input: &str) -> Result<MenuChoice, InputError> {
    match input.trim() {
        "1" => Ok(MenuChoice::Display),
        "2" => Ok(MenuChoice::Add),
        "3" => Ok(MenuChoice::Dispense),
        "4" => Ok(MenuChoice::Exit),
        _ => Err(InputError::InvalidMenuChoice),
    }
}

pub fn parse_blood_type(input: &str) -> Result<BloodType, InputError> {
    BloodType::parse(input)
        .ok_or_else(|| InputError::InvalidBloodType(input.trim().to_ascii_uppercase()))
}

/// A strictly positive unit count
pub fn parse_units(input: &str) -> Result<u32, InputError> {
    let n: i64 = input.trim().parse().map_err(|_| InputError::NotANumber)?;
    if n <= 0 {
        return Err(InputError::NonPositive);
    }
    u32::try_from(n).map_err(|_| InputError::TooLarge)
}

/// A positive unit count no larger than the option's stock
pub fn parse_dispense_units(input: &str, option: &StockOption) -> Result<u32, InputError> {
    let units = parse_units(input)?;
    if units > option.units {
        return Err(InputError::ExceedsStock {
            blood_type: option.blood_type,
            available: option.units,
        });
    }
    Ok(units)
}

/// One of the donor types offered for this dispense
pub fn parse_donor_selection(
    input: &str,
    options: &[StockOption],
) -> Result<StockOption, InputError> {
    BloodType::parse(input)
        .and_then(|t| options.iter().find(|o| o.blood_type == t).copied())
        .ok_or_else(|| InputError::UnavailableDonor(input.trim().to_ascii_uppercase()))
}
