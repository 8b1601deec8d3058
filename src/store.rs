//! Generic persistence functions over [Record] types.
//!
//! Every function takes the database connection as an argument. Callers check
//! the connection out of [crate::AppState] for the duration of one request
//! and release it when the handler returns, on success or failure alike.

use rusqlite::{Connection, params_from_iter, types::Value};

use crate::{
    Error,
    record::{DatabaseID, Record},
};

/// Insert a new record and return it with its store-assigned key.
///
/// The insert is a single statement, so it either applies in full or not at
/// all.
///
/// # Errors
/// Returns [Error::ConstraintViolation] if the store rejects the write, and
/// [Error::SqlError] for any other SQL error.
pub fn create<R: Record>(draft: &R::Draft, connection: &Connection) -> Result<R, Error> {
    let columns = R::COLUMNS.join(", ");
    let placeholders = (1..=R::COLUMNS.len())
        .map(|n| format!("?{n}"))
        .collect::<Vec<_>>()
        .join(", ");
    let sql = format!(
        "INSERT INTO {} ({columns}) VALUES ({placeholders}) RETURNING {}, {columns};",
        R::TABLE,
        R::ID_COLUMN,
    );

    connection
        .prepare(&sql)?
        .query_row(params_from_iter(R::insert_values(draft)), R::map_row)
        .map_err(|error| error.into())
}

/// Retrieve a single record by its key.
///
/// # Errors
/// Returns [Error::NotFound] if no record matches `id`.
pub fn get<R: Record>(id: DatabaseID, connection: &Connection) -> Result<R, Error> {
    let sql = format!(
        "SELECT {}, {} FROM {} WHERE {} = :id;",
        R::ID_COLUMN,
        R::COLUMNS.join(", "),
        R::TABLE,
        R::ID_COLUMN,
    );

    connection
        .prepare(&sql)?
        .query_row(&[(":id", &id)], R::map_row)
        .map_err(|error| error.into())
}

/// Retrieve every record in the entity's table, in store order.
///
/// An empty table yields an empty vector, never an error.
pub fn get_all<R: Record>(connection: &Connection) -> Result<Vec<R>, Error> {
    let sql = format!(
        "SELECT {}, {} FROM {};",
        R::ID_COLUMN,
        R::COLUMNS.join(", "),
        R::TABLE,
    );

    connection
        .prepare(&sql)?
        .query_map([], |row| R::map_row(row))?
        .map(|maybe_record| maybe_record.map_err(|error| error.into()))
        .collect()
}

/// Apply the explicitly supplied fields of `patch` to the record with `id`
/// and return the updated record.
///
/// Runs as one transaction: the lookup, the write, and the re-read either all
/// happen or none do. A payload that supplies zero fields returns the record
/// unchanged without writing.
///
/// # Errors
/// Returns [Error::NotFound] if no record matches `id`, and
/// [Error::ConstraintViolation] if the store rejects the write. The
/// transaction is rolled back on any failure, so no partial field application
/// is ever visible.
pub fn update<R: Record>(
    id: DatabaseID,
    patch: &R::Patch,
    connection: &mut Connection,
) -> Result<R, Error> {
    let changes = R::changes(patch);

    let tx = connection.transaction()?;
    let record = get::<R>(id, &tx)?;

    if changes.is_empty() {
        return Ok(record);
    }

    let assignments = changes
        .iter()
        .enumerate()
        .map(|(index, (column, _))| format!("{column} = ?{}", index + 1))
        .collect::<Vec<_>>()
        .join(", ");
    let sql = format!(
        "UPDATE {} SET {assignments} WHERE {} = ?{};",
        R::TABLE,
        R::ID_COLUMN,
        changes.len() + 1,
    );

    let mut values: Vec<Value> = changes.into_iter().map(|(_, value)| value).collect();
    values.push(Value::Integer(id));
    tx.execute(&sql, params_from_iter(values))?;

    let updated = get::<R>(id, &tx)?;
    tx.commit()?;

    Ok(updated)
}

/// Delete the record with `id`.
///
/// # Errors
/// Returns [Error::NotFound] if no record matches `id`, so that callers can
/// map a missing record and a failed delete onto different responses.
pub fn delete<R: Record>(id: DatabaseID, connection: &Connection) -> Result<(), Error> {
    let sql = format!("DELETE FROM {} WHERE {} = ?1;", R::TABLE, R::ID_COLUMN);
    let rows_affected = connection.execute(&sql, [id])?;

    if rows_affected == 0 {
        return Err(Error::NotFound);
    }

    Ok(())
}
