//! Database administration tool for the subtrack API.
//!
//! Creates the application tables, or drops them all with `--drop`. Dropping
//! is destructive and cannot be undone. The server also creates missing
//! tables on startup, so this tool is only needed for explicit set-up or
//! tear-down.

use clap::Parser;
use rusqlite::Connection;

use subtrack::{drop_tables, initialize_db};

/// Create or drop the application's database tables.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to the application SQLite database.
    #[arg(long)]
    db_path: String,

    /// Drop every application table instead of creating them.
    #[arg(long)]
    drop: bool,
}

fn main() {
    tracing_subscriber::fmt().init();

    let args = Args::parse();

    let connection = Connection::open(&args.db_path).expect("Could not open the database file");

    if args.drop {
        drop_tables(&connection).expect("Could not drop the application tables");
        tracing::warn!("Dropped all application tables from {}", args.db_path);
    } else {
        initialize_db(&connection).expect("Could not create the application tables");
        tracing::info!("Created application tables in {}", args.db_path);
    }
}
