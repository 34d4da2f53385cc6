//! Blood Bank Shell Binary
//!
//! Interactive inventory and compatibility menu.

use std::io;

use bloodbank::shell::Shell;
use bloodbank::storage::DEFAULT_FILENAME;
use bloodbank::{BloodBank, Config};
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

/// Blood Bank Shell
#[derive(Parser, Debug)]
#[command(name = "bloodbank")]
#[command(about = "Blood bank inventory and compatibility system")]
#[command(version)]
struct Args {
    /// Inventory file
    #[arg(short, long, default_value = DEFAULT_FILENAME)]
    file: String,
}

fn main() {
    // Logs go to stderr so they never interleave with the menu on stdout
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    tracing::info!("Blood Bank v{}", bloodbank::VERSION);
    tracing::info!("Inventory file: {}", args.file);

    let config = Config::builder().inventory_path(&args.file).build();

    let (bank, outcome) = match BloodBank::open(config) {
        Ok(opened) => opened,
        Err(e) => {
            tracing::error!("Failed to open inventory: {}", e);
            std::process::exit(1);
        }
    };

    let stdin = io::stdin();
    let mut shell = Shell::new(bank, stdin.lock(), io::stdout());

    if let Err(e) = shell.greet(&outcome).and_then(|_| shell.run()) {
        tracing::error!("Shell error: {}", e);
        std::process::exit(1);
    }
}
