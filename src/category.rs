//! The category record: a tag for grouping subscriptions.

use rusqlite::{Connection, Row, types::Value};
use serde::{Deserialize, Serialize};

use crate::{
    patch::Patch,
    record::{DatabaseID, Record},
};

/// A tag for grouping subscriptions (e.g., 'Entertainment', 'Utilities').
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Category {
    /// The category's store-assigned ID.
    #[serde(rename = "categoryID")]
    pub id: DatabaseID,
    /// The category's name.
    #[serde(rename = "categoryName")]
    pub name: Option<String>,
}

/// The payload for creating a category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCategory {
    /// The category's name.
    #[serde(rename = "categoryName", default)]
    pub name: Option<String>,
}

/// The sparse payload for partially updating a category.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CategoryPatch {
    /// The category's name.
    #[serde(rename = "categoryName", default)]
    pub name: Patch<String>,
}

impl Record for Category {
    const TABLE: &'static str = "categories";
    const ID_COLUMN: &'static str = "categoryID";
    const COLUMNS: &'static [&'static str] = &["categoryName"];

    type Draft = NewCategory;
    type Patch = CategoryPatch;

    fn id(&self) -> DatabaseID {
        self.id
    }

    fn map_row(row: &Row) -> Result<Self, rusqlite::Error> {
        Ok(Self {
            id: row.get(0)?,
            name: row.get(1)?,
        })
    }

    fn insert_values(draft: &NewCategory) -> Vec<Value> {
        vec![draft.name.clone().into()]
    }

    fn changes(patch: &CategoryPatch) -> Vec<(&'static str, Value)> {
        let mut changes = Vec::new();

        if let Some(value) = patch.name.to_value() {
            changes.push(("categoryName", value));
        }

        changes
    }

    fn create_table(connection: &Connection) -> Result<(), rusqlite::Error> {
        connection.execute(
            "CREATE TABLE IF NOT EXISTS categories (
                categoryID INTEGER PRIMARY KEY,
                categoryName TEXT
            );",
            (),
        )?;

        Ok(())
    }
}

#[cfg(test)]
mod category_tests {
    use rusqlite::Connection;

    use crate::{db::initialize, patch::Patch, store};

    use super::{Category, CategoryPatch, NewCategory};

    fn get_test_connection() -> Connection {
        let connection = Connection::open_in_memory().unwrap();
        initialize(&connection).expect("Could not create tables");
        connection
    }

    #[test]
    fn category_name_is_optional_at_creation() {
        let connection = get_test_connection();

        let category: Category =
            store::create(&NewCategory { name: None }, &connection).expect("Could not create category");

        assert!(category.id > 0);
        assert_eq!(category.name, None);
    }

    #[test]
    fn clearing_the_category_name_succeeds() {
        let mut connection = get_test_connection();
        let category: Category = store::create(
            &NewCategory {
                name: Some("Streaming".to_owned()),
            },
            &connection,
        )
        .expect("Could not create category");

        let patch = CategoryPatch { name: Patch::Clear };
        let updated: Category = store::update(category.id, &patch, &mut connection)
            .expect("Could not update category");

        assert_eq!(updated.id, category.id);
        assert_eq!(updated.name, None);
    }
}
