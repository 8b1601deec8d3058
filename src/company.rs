//! The company record: a provider of subscription services.

use rusqlite::{Connection, Row, types::Value};
use serde::{Deserialize, Serialize};

use crate::{
    patch::Patch,
    record::{DatabaseID, Record},
};

/// A company that provides one or more subscription services.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Company {
    /// The company's store-assigned ID.
    #[serde(rename = "companyId")]
    pub id: DatabaseID,
    /// The company's name.
    #[serde(rename = "companyName")]
    pub name: String,
    /// The company's website URL.
    #[serde(rename = "companyURL")]
    pub url: Option<String>,
}

/// The payload for creating a company.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCompany {
    /// The company's name.
    #[serde(rename = "companyName")]
    pub name: String,
    /// The company's website URL.
    #[serde(rename = "companyURL", default)]
    pub url: Option<String>,
}

/// The sparse payload for partially updating a company.
///
/// A field left out of the payload keeps its stored value; a field explicitly
/// set to `null` is cleared.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CompanyPatch {
    /// The company's name. Clearing it violates the table's NOT NULL
    /// constraint.
    #[serde(rename = "companyName", default)]
    pub name: Patch<String>,
    /// The company's website URL.
    #[serde(rename = "companyURL", default)]
    pub url: Patch<String>,
}

impl Record for Company {
    const TABLE: &'static str = "companies";
    const ID_COLUMN: &'static str = "companyId";
    const COLUMNS: &'static [&'static str] = &["companyName", "companyURL"];

    type Draft = NewCompany;
    type Patch = CompanyPatch;

    fn id(&self) -> DatabaseID {
        self.id
    }

    fn map_row(row: &Row) -> Result<Self, rusqlite::Error> {
        Ok(Self {
            id: row.get(0)?,
            name: row.get(1)?,
            url: row.get(2)?,
        })
    }

    fn insert_values(draft: &NewCompany) -> Vec<Value> {
        vec![draft.name.clone().into(), draft.url.clone().into()]
    }

    fn changes(patch: &CompanyPatch) -> Vec<(&'static str, Value)> {
        let mut changes = Vec::new();

        if let Some(value) = patch.name.to_value() {
            changes.push(("companyName", value));
        }
        if let Some(value) = patch.url.to_value() {
            changes.push(("companyURL", value));
        }

        changes
    }

    fn create_table(connection: &Connection) -> Result<(), rusqlite::Error> {
        connection.execute(
            "CREATE TABLE IF NOT EXISTS companies (
                companyId INTEGER PRIMARY KEY,
                companyName TEXT NOT NULL,
                companyURL TEXT
            );",
            (),
        )?;

        Ok(())
    }
}
