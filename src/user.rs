//! The user record: a person who holds subscriptions.

use rusqlite::{Connection, Row, types::Value};
use serde::{Deserialize, Serialize};

use crate::{
    patch::Patch,
    record::{DatabaseID, Record},
};

/// A person who holds one or more subscriptions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct User {
    /// The user's store-assigned ID.
    #[serde(rename = "userID")]
    pub id: DatabaseID,
    /// The user's name.
    #[serde(rename = "userName")]
    pub name: String,
}

/// The payload for creating a user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUser {
    /// The user's name.
    #[serde(rename = "userName")]
    pub name: String,
}

/// The sparse payload for partially updating a user.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserPatch {
    /// The user's name. Clearing it violates the table's NOT NULL constraint.
    #[serde(rename = "userName", default)]
    pub name: Patch<String>,
}

impl Record for User {
    const TABLE: &'static str = "users";
    const ID_COLUMN: &'static str = "userID";
    const COLUMNS: &'static [&'static str] = &["userName"];

    type Draft = NewUser;
    type Patch = UserPatch;

    fn id(&self) -> DatabaseID {
        self.id
    }

    fn map_row(row: &Row) -> Result<Self, rusqlite::Error> {
        Ok(Self {
            id: row.get(0)?,
            name: row.get(1)?,
        })
    }

    fn insert_values(draft: &NewUser) -> Vec<Value> {
        vec![draft.name.clone().into()]
    }

    fn changes(patch: &UserPatch) -> Vec<(&'static str, Value)> {
        let mut changes = Vec::new();

        if let Some(value) = patch.name.to_value() {
            changes.push(("userName", value));
        }

        changes
    }

    fn create_table(connection: &Connection) -> Result<(), rusqlite::Error> {
        connection.execute(
            "CREATE TABLE IF NOT EXISTS users (
                userID INTEGER PRIMARY KEY,
                userName TEXT NOT NULL
            );",
            (),
        )?;

        Ok(())
    }
}
