//! Address book demo driver.
//!
//! A thin external consumer of the library API: builds a directory with
//! two sample contacts, prints every entry, edits a phone number, looks
//! one up and deletes a record. Output goes to stdout; diagnostics go
//! to stderr via `tracing`.

use address_book::{Config, Directory, Record, RecordError};
use anyhow::Result;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration before installing the subscriber so an invalid
    // LOG_LEVEL is reported on stderr by the default handler
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.log_level))
        .with_writer(std::io::stderr)
        .init();

    info!("Address book demo starting");

    let mut book = Directory::new();

    let mut john_record = Record::new("John")?;
    john_record.add_phone("1234567890")?;
    john_record.add_phone("5555555555")?;
    book.add_record(john_record);

    let mut jane_record = Record::new("Jane")?;
    jane_record.add_phone("9876543210")?;
    book.add_record(jane_record);

    for (name, record) in book.iter() {
        println!("{} {}", name, record);
    }

    let john = match book.find_mut("John") {
        Ok(record) => record,
        Err(e) => {
            error!("Lookup failed: {}", e);
            return Err(e.into());
        }
    };
    john.edit_phone("1234567890", "1112223333")?;

    println!("{}", john); // Contact name: John, phones: 1112223333; 5555555555

    let found_phone = john
        .find_phone("5555555555")
        .ok_or(RecordError::PhoneNotFound)?;
    println!("{}: {}", john.name(), found_phone); // John: 5555555555

    book.delete("Jane")?;

    info!("Address book demo complete");
    Ok(())
}
