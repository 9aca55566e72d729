//! # Seed Data Generator
//!
//! Populates a database with demo inventory and customers for development
//! and manual testing of the presentation layer.
//!
//! ## Usage
//! ```bash
//! # Seed the default database file
//! cargo run -p revive-db --bin seed
//!
//! # Specify database path and item count
//! cargo run -p revive-db --bin seed -- --db ./shop.db --count 60
//! ```
//!
//! The tool also exercises the full startup sequence: open/create the
//! database, apply migrations, seed the default admin account.

use std::env;

use tracing_subscriber::EnvFilter;

use revive_core::barcode;
use revive_db::{Database, DbConfig};

/// Demo stock for a recycle-and-repair storefront: (name, category,
/// condition, price in cents, stock).
const DEMO_ITEMS: &[(&str, &str, &str, i64, i64)] = &[
    ("Toaster", "Appliances", "Refurbished", 1250, 3),
    ("Kettle", "Appliances", "Refurbished", 900, 5),
    ("Stand Mixer", "Appliances", "Used - Good", 4500, 1),
    ("Walkman", "Audio", "Used - Fair", 2200, 2),
    ("Turntable", "Audio", "Restored", 8900, 1),
    ("Bookshelf Speakers", "Audio", "Used - Good", 3400, 4),
    ("Desk Lamp", "Lighting", "Refurbished", 750, 8),
    ("Floor Lamp", "Lighting", "Used - Good", 1800, 2),
    ("Mountain Bike", "Bikes", "Tuned Up", 12500, 2),
    ("City Bike", "Bikes", "Tuned Up", 9800, 3),
    ("Laptop 13\"", "Computing", "Refurbished", 24900, 2),
    ("Mechanical Keyboard", "Computing", "Used - Good", 3900, 6),
    ("CRT Monitor", "Computing", "Used - Fair", 1500, 1),
    ("Sewing Machine", "Workshop", "Serviced", 6700, 1),
    ("Power Drill", "Workshop", "Tested", 2800, 4),
    ("Vacuum Cleaner", "Appliances", "Refurbished", 3200, 3),
    ("Film Camera", "Photo", "Tested", 5600, 2),
    ("Tripod", "Photo", "Used - Good", 1400, 5),
    ("Board Game Bundle", "Misc", "Complete", 1100, 7),
    ("Record Crate", "Misc", "As-is", 600, 10),
];

/// Demo customers: (name, email).
const DEMO_CUSTOMERS: &[(&str, &str)] = &[
    ("Ada Lovelace", "ada@example.com"),
    ("Grace Hopper", "grace@example.com"),
    ("Charles Babbage", "charles@example.com"),
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut count: usize = DEMO_ITEMS.len();
    let mut db_path = String::from("./shop.db");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--count" | "-c" => {
                if i + 1 < args.len() {
                    count = args[i + 1].parse().unwrap_or(DEMO_ITEMS.len());
                    i += 1;
                }
            }
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Revive POS Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -c, --count <N>    Number of items to insert (default: all demo items)");
                println!("  -d, --db <PATH>    Database file path (default: ./shop.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("Revive POS Seed Data Generator");
    println!("==============================");
    println!("Database: {}", db_path);
    println!();

    // Connect: opens/creates the file, migrates, seeds the admin account.
    // Failure here is fatal, exactly as it is for the hosting process.
    let db = Database::new(DbConfig::new(&db_path)).await?;

    println!("✓ Connected to database");
    println!("✓ Migrations applied, admin account present");

    let existing = db.inventory().count().await?;
    if existing > 0 {
        println!("⚠ Database already has {} items", existing);
        println!("  Skipping seed to avoid duplicates.");
        println!("  Delete the database file to regenerate.");
        return Ok(());
    }

    println!();
    println!("Seeding inventory...");

    let mut inserted = 0;
    for &(name, category, condition, price_cents, stock) in DEMO_ITEMS.iter().take(count) {
        let code = barcode::generate();
        if let Err(e) = db
            .inventory()
            .insert(name, Some(category), Some(condition), price_cents, stock, &code)
            .await
        {
            eprintln!("Failed to insert {}: {}", name, e);
            continue;
        }
        inserted += 1;
    }

    println!("✓ Inserted {} items", inserted);

    println!();
    println!("Seeding customers...");

    for &(name, email) in DEMO_CUSTOMERS {
        db.customers().insert(name, Some(email), 100).await?;
    }

    println!("✓ Inserted {} customers", DEMO_CUSTOMERS.len());
    println!();
    println!("✓ Seed complete!");

    Ok(())
}
