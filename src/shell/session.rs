//! Interactive session
//!
//! Menu loop reading lines from any `BufRead` and writing to any `Write`,
//! so a whole session can be driven from a byte buffer.

use std::io::{BufRead, Write};

use tracing::debug;

use crate::compat::{compatible_donors_for, BloodType};
use crate::engine::BloodBank;
use crate::error::{BloodBankError, Result};
use crate::storage::LoadOutcome;

use super::input::{
    parse_blood_type, parse_dispense_units, parse_donor_selection, parse_menu_choice, parse_units,
    InputError, MenuChoice,
};

const RULE: &str = "------------------------------------------";

/// Interactive front end owning the process's single [`BloodBank`]
pub struct Shell<R, W> {
    bank: BloodBank,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(bank: BloodBank, input: R, output: W) -> Self {
        Self {
            bank,
            input,
            output,
        }
    }

    /// Print the title and how the inventory was loaded
    pub fn greet(&mut self, outcome: &LoadOutcome) -> Result<()> {
        writeln!(self.output, "\nBlood Bank Inventory & Compatibility System")?;

        let path = self.bank.inventory_path().display().to_string();
        match outcome {
            LoadOutcome::Created { save_error } => {
                writeln!(self.output, "\n- Initial Setup -")?;
                writeln!(
                    self.output,
                    "File '{}' not found. Creating it with default inventory.",
                    path
                )?;
                self.report_save(save_error.as_ref())?;
            }
            LoadOutcome::Loaded { .. } => {}
            LoadOutcome::Unreadable(e) => {
                writeln!(
                    self.output,
                    "An error occurred while reading the inventory file: {}",
                    e
                )?;
                writeln!(self.output, "Returning an empty inventory.")?;
            }
        }
        Ok(())
    }

    /// Run the menu until Exit is chosen or input ends
    pub fn run(&mut self) -> Result<()> {
        match self.menu_loop() {
            Err(BloodBankError::InputClosed) => {
                debug!("input closed, leaving menu");
                writeln!(self.output)?;
                Ok(())
            }
            other => other,
        }
    }

    fn menu_loop(&mut self) -> Result<()> {
        loop {
            writeln!(self.output, "Select an action:")?;
            writeln!(self.output, "1. Display Current Inventory")?;
            writeln!(self.output, "2. Receive New Units (Add to Stock)")?;
            writeln!(self.output, "3. Dispense Units (Check Compatibility)")?;
            writeln!(self.output, "4. Exit System")?;

            let line = self.ask("Enter your choice (1-4): ")?;
            match parse_menu_choice(&line) {
                Ok(MenuChoice::Display) => self.display_inventory()?,
                Ok(MenuChoice::Add) => self.add_units()?,
                Ok(MenuChoice::Dispense) => self.dispense()?,
                Ok(MenuChoice::Exit) => {
                    writeln!(
                        self.output,
                        "\nThank you for managing the blood bank inventory."
                    )?;
                    return Ok(());
                }
                Err(e) => writeln!(self.output, "\n{}", e)?,
            }
        }
    }

    // =========================================================================
    // Menu Actions
    // =========================================================================

    fn display_inventory(&mut self) -> Result<()> {
        writeln!(self.output, "\n- Current Blood Bank Inventory (Units) -")?;
        let inventory = self.bank.inventory();
        if inventory.is_empty() {
            writeln!(self.output, "Inventory is empty.")?;
            return Ok(());
        }

        for (blood_type, units) in inventory.sorted() {
            writeln!(self.output, "| {:<3}: {:>5} Units |", blood_type, units)?;
        }
        writeln!(self.output, "{}", RULE)?;
        Ok(())
    }

    fn add_units(&mut self) -> Result<()> {
        writeln!(self.output, "\n- RECEIVING NEW BLOOD DONATIONS -")?;

        let prompt = format!("Enter the Blood Type received ({}): ", BloodType::codes());
        let blood_type = self.ask_until(&prompt, parse_blood_type)?;

        let prompt = format!("Enter the number of units of {} received: ", blood_type);
        let count = self.ask_until(&prompt, parse_units)?;

        let receipt = match self.bank.add_units(blood_type, count) {
            Ok(receipt) => receipt,
            Err(e) => {
                writeln!(self.output, "\nError: {}", e)?;
                return Ok(());
            }
        };

        self.report_save(receipt.save_error.as_ref())?;
        writeln!(
            self.output,
            "\nSUCCESS: Added {} units of {}. Total units now: {}.",
            receipt.added, receipt.blood_type, receipt.total
        )?;
        self.display_inventory()
    }

    /// Compatibility-checked dispense
    ///
    /// An invalid recipient type returns to the menu; an invalid donor
    /// selection or quantity is re-asked.
    fn dispense(&mut self) -> Result<()> {
        if self.bank.inventory().is_empty() {
            writeln!(
                self.output,
                "Inventory is empty. Please check the inventory file content."
            )?;
            return Ok(());
        }

        let prompt = format!(
            "\nEnter the Recipient's required Blood Type ({}): ",
            BloodType::codes()
        );
        let line = self.ask(&prompt)?;
        let recipient = match parse_blood_type(&line) {
            Ok(t) => t,
            Err(e) => {
                writeln!(self.output, "\nError: {}", e)?;
                return Ok(());
            }
        };

        writeln!(
            self.output,
            "\n- Searching for Compatible Blood for Recipient Type: {} -",
            recipient
        )?;
        let donors: Vec<&str> = compatible_donors_for(recipient)
            .iter()
            .map(|t| t.as_str())
            .collect();
        writeln!(
            self.output,
            "Compatible Donor Types Required: {}",
            donors.join(", ")
        )?;
        writeln!(self.output, "{}", "-".repeat(50))?;

        let options = self.bank.available_for(recipient);
        for option in &options {
            let status = if option.exact_match {
                "EXACT MATCH"
            } else {
                "Compatible"
            };
            writeln!(
                self.output,
                "FOUND STOCK: {} ({}) - {} Units Available.",
                option.blood_type, status, option.units
            )?;
        }

        if options.is_empty() {
            writeln!(
                self.output,
                "\nNo available stock found that is compatible with {} at this time.",
                recipient
            )?;
            writeln!(self.output, "{}", "-".repeat(66))?;
            return Ok(());
        }

        writeln!(self.output, "\n- STOCK DISPENSING -")?;
        let selected = self.ask_until(
            "Enter the Blood Type to dispense (must have available stock above): ",
            |line| parse_donor_selection(line, &options),
        )?;

        let prompt = format!(
            "Enter number of units of {} to dispense (Max: {}): ",
            selected.blood_type, selected.units
        );
        let quantity = self.ask_until(&prompt, |line| parse_dispense_units(line, &selected))?;

        let receipt = match self.bank.dispense(recipient, selected.blood_type, quantity) {
            Ok(receipt) => receipt,
            Err(e) => {
                writeln!(self.output, "\nError: {}", e)?;
                return Ok(());
            }
        };

        self.report_save(receipt.save_error.as_ref())?;
        writeln!(
            self.output,
            "\nDISPENSE SUCCESS: {} units of {} have been dispensed for {} recipient.",
            receipt.dispensed, receipt.donor, receipt.recipient
        )?;
        self.display_inventory()
    }

    // =========================================================================
    // Private Helpers
    // =========================================================================

    fn report_save(&mut self, save_error: Option<&BloodBankError>) -> Result<()> {
        let path = self.bank.inventory_path().display().to_string();
        match save_error {
            None => writeln!(
                self.output,
                "\n[Inventory Updated]: Changes saved to {}.",
                path
            )?,
            Some(e) => writeln!(self.output, "\nError saving inventory to {}: {}", path, e)?,
        }
        Ok(())
    }

    /// Prompt once and read a line (without its line ending)
    fn ask(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(BloodBankError::InputClosed);
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Prompt until `validate` accepts the line
    fn ask_until<T, F>(&mut self, prompt: &str, validate: F) -> Result<T>
    where
        F: Fn(&str) -> std::result::Result<T, InputError>,
    {
        loop {
            let line = self.ask(prompt)?;
            match validate(&line) {
                Ok(value) => return Ok(value),
                Err(e) => writeln!(self.output, "Error: {}", e)?,
            }
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn bank(&self) -> &BloodBank {
        &self.bank
    }

    /// Tear down the shell, returning the bank and the output sink
    pub fn into_parts(self) -> (BloodBank, W) {
        (self.bank, self.output)
    }
}
