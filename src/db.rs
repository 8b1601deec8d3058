//! Database schema creation and teardown.

use rusqlite::Connection;

use crate::{Category, Company, Subscription, User, record::Record};

/// Create the table for each domain record if it does not already exist.
///
/// # Errors
/// Returns an error if there is an SQL error.
pub fn initialize(connection: &Connection) -> Result<(), rusqlite::Error> {
    Company::create_table(connection)?;
    User::create_table(connection)?;
    Category::create_table(connection)?;
    Subscription::create_table(connection)?;

    Ok(())
}

/// Drop every application table.
///
/// This is a destructive administrative action. Nothing in normal request
/// handling calls it; it is only reachable through the `init_db` binary.
///
/// # Errors
/// Returns an error if there is an SQL error.
pub fn drop_tables(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute_batch(
        "DROP TABLE IF EXISTS subscriptions;
        DROP TABLE IF EXISTS categories;
        DROP TABLE IF EXISTS users;
        DROP TABLE IF EXISTS companies;",
    )
}
