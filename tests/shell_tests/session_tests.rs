//! Tests for the interactive Shell
//!
//! Sessions are driven from a byte buffer and the transcript is inspected.
//!
//! These tests verify:
//! - Menu routing and invalid choice handling
//! - Add flow reprompting until input is valid
//! - Dispense flow: abort on bad recipient, no-stock exit, reprompts
//! - Load notices printed by `greet`
//! - Graceful exit when input runs out

use std::fs;

use bloodbank::shell::Shell;
use bloodbank::storage::{Inventory, InventoryFile};
use bloodbank::{BloodBank, BloodType, Config};
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

struct Session {
    _temp: TempDir,
    bank: BloodBank,
    transcript: String,
}

fn run_session_with(default_inventory: Inventory, input: &str) -> Session {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::builder()
        .inventory_path(temp_dir.path().join("blood_inventory.csv"))
        .default_inventory(default_inventory)
        .build();
    let (bank, outcome) = BloodBank::open(config).unwrap();

    let mut shell = Shell::new(bank, input.as_bytes(), Vec::new());
    shell.greet(&outcome).unwrap();
    shell.run().unwrap();

    let (bank, output) = shell.into_parts();
    Session {
        _temp: temp_dir,
        bank,
        transcript: String::from_utf8(output).unwrap(),
    }
}

fn run_session(input: &str) -> Session {
    run_session_with(Inventory::default_stock(), input)
}

fn on_disk(bank: &BloodBank) -> Inventory {
    InventoryFile::new(bank.inventory_path()).read().unwrap().0
}

// =============================================================================
// Menu Tests
// =============================================================================

#[test]
fn test_first_run_announces_setup_and_exits() {
    let session = run_session("4\n");

    assert!(session.transcript.contains("Blood Bank Inventory & Compatibility System"));
    assert!(session.transcript.contains("- Initial Setup -"));
    assert!(session.transcript.contains("Creating it with default inventory."));
    assert!(session
        .transcript
        .contains("Thank you for managing the blood bank inventory."));
}

#[test]
fn test_display_lists_sorted_inventory() {
    let session = run_session("1\n4\n");

    let rows: Vec<&str> = session
        .transcript
        .lines()
        .filter(|l| l.starts_with("| "))
        .collect();
    assert_eq!(
        rows,
        vec![
            "| A+ :    40 Units |",
            "| A- :    10 Units |",
            "| AB+:    18 Units |",
            "| AB-:     8 Units |",
            "| B+ :    12 Units |",
            "| B- :     5 Units |",
            "| O+ :    25 Units |",
            "| O- :    15 Units |",
        ]
    );
}

#[test]
fn test_display_empty_inventory() {
    let session = run_session_with(Inventory::new(), "1\n4\n");

    assert!(session.transcript.contains("Inventory is empty."));
}

#[test]
fn test_invalid_menu_choice_redisplays_menu() {
    let session = run_session("9\n\n4\n");

    assert_eq!(
        session
            .transcript
            .matches("Invalid choice. Please enter a number between 1 and 4.")
            .count(),
        2
    );
    assert_eq!(session.transcript.matches("Select an action:").count(), 3);
}

#[test]
fn test_end_of_input_leaves_menu_cleanly() {
    let session = run_session("1\n");

    assert!(!session.transcript.contains("Thank you"));
    assert_eq!(session.bank.inventory(), &Inventory::default_stock());
}

#[test]
fn test_end_of_input_mid_flow_leaves_stock_untouched() {
    let session = run_session("2\nO-\n");

    assert_eq!(session.bank.units(BloodType::ONeg), 15);
}

// =============================================================================
// Add Flow Tests
// =============================================================================

#[test]
fn test_add_reprompts_until_valid() {
    let session = run_session("2\nzz\n o- \nabc\n0\n-2\n5\n4\n");

    let t = &session.transcript;
    assert!(t.contains("'ZZ' is not a valid blood type. Please try again."));
    assert!(t.contains("Please enter a valid whole number for units."));
    assert_eq!(t.matches("Units must be a positive number.").count(), 2);
    assert!(t.contains("SUCCESS: Added 5 units of O-. Total units now: 20."));
    assert!(t.contains("[Inventory Updated]: Changes saved to"));
    assert_eq!(session.bank.units(BloodType::ONeg), 20);
    assert_eq!(on_disk(&session.bank).get(BloodType::ONeg), 20);
}

// =============================================================================
// Dispense Flow Tests
// =============================================================================

#[test]
fn test_dispense_invalid_recipient_returns_to_menu() {
    // "O-" after the bad token is read as a menu choice, not a retry
    let session = run_session("3\nXX\nO-\n4\n");

    let t = &session.transcript;
    assert!(t.contains("Error: 'XX' is not a valid blood type. Please try again."));
    assert!(t.contains("Invalid choice. Please enter a number between 1 and 4."));
    assert!(!t.contains("- Searching for Compatible Blood"));
    assert_eq!(session.bank.inventory(), &Inventory::default_stock());
}

#[test]
fn test_dispense_with_no_compatible_stock() {
    let inventory: Inventory = [(BloodType::ONeg, 0), (BloodType::APos, 9)]
        .into_iter()
        .collect();
    let session = run_session_with(inventory, "3\no-\n4\n");

    let t = &session.transcript;
    assert!(t.contains("Compatible Donor Types Required: O-"));
    assert!(t.contains("No available stock found that is compatible with O- at this time."));
    assert!(!t.contains("- STOCK DISPENSING -"));
}

#[test]
fn test_dispense_on_empty_inventory_returns_early() {
    let session = run_session_with(Inventory::new(), "3\n4\n");

    assert!(session.transcript.contains("Inventory is empty."));
    assert!(!session.transcript.contains("Recipient's required Blood Type"));
}

#[test]
fn test_dispense_lists_matches_and_reprompts() {
    let session = run_session("3\nA-\nA+\nO-\n0\nten\n10\n4\n");

    let t = &session.transcript;
    assert!(t.contains("Compatible Donor Types Required: O-, A-"));
    assert!(t.contains("FOUND STOCK: O- (Compatible) - 15 Units Available."));
    assert!(t.contains("FOUND STOCK: A- (EXACT MATCH) - 10 Units Available."));
    assert!(t.contains("'A+' is either incompatible or has no available stock. Try again."));
    assert!(t.contains("Enter number of units of O- to dispense (Max: 15): "));
    assert!(t.contains("Units must be a positive number."));
    assert!(t.contains("Please enter a valid whole number for units."));
    assert!(t.contains(
        "DISPENSE SUCCESS: 10 units of O- have been dispensed for A- recipient."
    ));

    assert_eq!(session.bank.units(BloodType::ONeg), 5);
    assert_eq!(session.bank.units(BloodType::ANeg), 10);
    assert_eq!(on_disk(&session.bank).get(BloodType::ONeg), 5);
}

#[test]
fn test_dispense_rejects_quantity_above_stock() {
    let session = run_session("3\nB+\nB-\n6\n5\n4\n");

    let t = &session.transcript;
    assert!(t.contains("Only 5 units of B- are available."));
    assert_eq!(session.bank.units(BloodType::BNeg), 0);
    assert_eq!(session.bank.units(BloodType::BPos), 12);
}

#[test]
fn test_exhausted_donor_is_no_longer_offered() {
    let session = run_session("2\nO-\n5\n3\nAB+\nO-\n20\n3\nAB+\nO-\nAB+\n1\n4\n");

    let t = &session.transcript;
    assert!(t.contains("DISPENSE SUCCESS: 20 units of O- have been dispensed for AB+ recipient."));
    assert!(t.contains("'O-' is either incompatible or has no available stock. Try again."));
    assert_eq!(session.bank.units(BloodType::ONeg), 0);
    assert_eq!(session.bank.units(BloodType::AbPos), 17);
}

// =============================================================================
// Load Notices
// =============================================================================

#[test]
fn test_unreadable_file_is_reported_and_starts_empty() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("blood_inventory.csv");
    fs::write(&path, [0xff, 0xfe, 0xfd]).unwrap();

    let (bank, outcome) = BloodBank::open_path(&path).unwrap();
    let mut shell = Shell::new(bank, "4\n".as_bytes(), Vec::new());
    shell.greet(&outcome).unwrap();
    shell.run().unwrap();

    assert!(shell.bank().inventory().is_empty());

    let (_, output) = shell.into_parts();
    let transcript = String::from_utf8(output).unwrap();
    assert!(transcript.contains("An error occurred while reading the inventory file"));
    assert!(transcript.contains("Returning an empty inventory."));
}

#[test]
fn test_directory_at_inventory_path_is_reported_and_session_continues() {
    let temp_dir = TempDir::new().unwrap();

    let (bank, outcome) = BloodBank::open_path(temp_dir.path()).unwrap();
    let mut shell = Shell::new(bank, "1
2
B+
2
4
".as_bytes(), Vec::new());
    shell.greet(&outcome).unwrap();
    shell.run().unwrap();

    assert_eq!(shell.bank().units(BloodType::BPos), 2);

    let (_, output) = shell.into_parts();
    let transcript = String::from_utf8(output).unwrap();
    assert!(transcript.contains("An error occurred while reading the inventory file"));
    assert!(transcript.contains("Returning an empty inventory."));
    assert!(transcript.contains("Inventory is empty."));
    assert!(transcript.contains("Error saving inventory to"));
    assert!(transcript.contains("SUCCESS: Added 2 units of B+. Total units now: 2."));
    assert!(transcript.contains("Thank you for managing the blood bank inventory."));
}
