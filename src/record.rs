//! The table mapping shared by every entity.

use rusqlite::{Connection, Row, types::Value};

/// Alias for the integer type used for mapping to database IDs.
pub type DatabaseID = i64;

/// A table-shaped entity: its schema, row mapping, and payload types.
///
/// The four entities are structurally identical apart from their field sets,
/// so the persistence functions in [crate::store] and the route handlers in
/// [crate::routes] are written once against this trait and instantiated per
/// entity.
pub trait Record: Sized {
    /// The table that stores this entity.
    const TABLE: &'static str;

    /// The primary key column. Keys are store-assigned on insert and never
    /// client-supplied.
    const ID_COLUMN: &'static str;

    /// The non-key columns, in the order [Record::map_row] reads them.
    const COLUMNS: &'static [&'static str];

    /// The payload for creating a record. Required fields are present and
    /// unset optional fields are null.
    type Draft;

    /// The sparse payload for partially updating a record.
    type Patch;

    /// The record's primary key.
    fn id(&self) -> DatabaseID;

    /// Convert a database row into a record.
    ///
    /// **Note:** This function expects the row to contain [Record::ID_COLUMN]
    /// followed by [Record::COLUMNS], in order.
    ///
    /// # Errors
    /// Returns an error if a row item cannot be converted into the
    /// corresponding rust type.
    fn map_row(row: &Row) -> Result<Self, rusqlite::Error>;

    /// The values to insert for [Record::COLUMNS], in the same order.
    fn insert_values(draft: &Self::Draft) -> Vec<Value>;

    /// The column assignments the update payload explicitly supplies.
    ///
    /// Omitted fields must not appear. An empty vector means the update is a
    /// no-op.
    fn changes(patch: &Self::Patch) -> Vec<(&'static str, Value)>;

    /// Create the record's table if it does not already exist.
    ///
    /// # Errors
    /// Returns an error if there is an SQL error.
    fn create_table(connection: &Connection) -> Result<(), rusqlite::Error>;
}
