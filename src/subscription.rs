//! The subscription record and its price representation.
//!
//! A subscription refers to its company, user, and category by plain name
//! rather than by foreign key; the referenced records may be edited or
//! deleted without affecting the subscription.

use rusqlite::{
    Connection, Row,
    types::{FromSql, FromSqlResult, Value, ValueRef},
};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{
    patch::Patch,
    record::{DatabaseID, Record},
};

/// A subscription's price in dollars, held to exactly two decimal places.
///
/// The amount is stored as a whole number of cents, so values survive the
/// round trip through the database without floating-point drift. On the wire
/// it reads and writes a plain JSON number, rounded to the nearest cent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Price(i64);

impl Price {
    /// Create a price from a dollar amount, rounding to the nearest cent.
    pub fn from_dollars(dollars: f64) -> Self {
        Self((dollars * 100.0).round() as i64)
    }

    /// Create a price from a whole number of cents.
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// The price as a whole number of cents.
    pub const fn as_cents(self) -> i64 {
        self.0
    }

    /// The price as a dollar amount.
    pub fn as_dollars(self) -> f64 {
        self.0 as f64 / 100.0
    }
}

impl Serialize for Price {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_f64(self.as_dollars())
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        f64::deserialize(deserializer).map(Price::from_dollars)
    }
}

impl FromSql for Price {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        i64::column_result(value).map(Self)
    }
}

impl From<Price> for Value {
    fn from(price: Price) -> Self {
        Value::Integer(price.as_cents())
    }
}

/// A subscription to a company's service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Subscription {
    /// The subscription's store-assigned ID.
    #[serde(rename = "subscriptionID")]
    pub id: DatabaseID,
    /// The name of the company providing the service.
    #[serde(rename = "companyName")]
    pub company_name: String,
    /// The price per billing period.
    pub price: Price,
    /// The category the subscription belongs to.
    #[serde(rename = "subscriptionCategory")]
    pub category: Option<String>,
    /// A free-text description of the service.
    pub description: Option<String>,
    /// The name the subscription is held under.
    #[serde(rename = "userName")]
    pub user_name: Option<String>,
    /// The email address used for the subscription account.
    #[serde(rename = "emailAssociated")]
    pub email: Option<String>,
}

/// The payload for creating a subscription.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewSubscription {
    /// The name of the company providing the service.
    #[serde(rename = "companyName")]
    pub company_name: String,
    /// The price per billing period.
    pub price: Price,
    /// The category the subscription belongs to.
    #[serde(rename = "subscriptionCategory", default)]
    pub category: Option<String>,
    /// A free-text description of the service.
    #[serde(default)]
    pub description: Option<String>,
    /// The name the subscription is held under.
    #[serde(rename = "userName", default)]
    pub user_name: Option<String>,
    /// The email address used for the subscription account.
    #[serde(rename = "emailAssociated", default)]
    pub email: Option<String>,
}

/// The sparse payload for partially updating a subscription.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubscriptionPatch {
    /// The name of the company providing the service. Clearing it violates
    /// the table's NOT NULL constraint.
    #[serde(rename = "companyName", default)]
    pub company_name: Patch<String>,
    /// The price per billing period. Clearing it violates the table's
    /// NOT NULL constraint.
    #[serde(default)]
    pub price: Patch<Price>,
    /// The category the subscription belongs to.
    #[serde(rename = "subscriptionCategory", default)]
    pub category: Patch<String>,
    /// A free-text description of the service.
    #[serde(default)]
    pub description: Patch<String>,
    /// The name the subscription is held under.
    #[serde(rename = "userName", default)]
    pub user_name: Patch<String>,
    /// The email address used for the subscription account.
    #[serde(rename = "emailAssociated", default)]
    pub email: Patch<String>,
}

impl Record for Subscription {
    const TABLE: &'static str = "subscriptions";
    const ID_COLUMN: &'static str = "subscriptionID";
    const COLUMNS: &'static [&'static str] = &[
        "companyName",
        "price",
        "subscriptionCategory",
        "description",
        "userName",
        "emailAssociated",
    ];

    type Draft = NewSubscription;
    type Patch = SubscriptionPatch;

    fn id(&self) -> DatabaseID {
        self.id
    }

    fn map_row(row: &Row) -> Result<Self, rusqlite::Error> {
        Ok(Self {
            id: row.get(0)?,
            company_name: row.get(1)?,
            price: row.get(2)?,
            category: row.get(3)?,
            description: row.get(4)?,
            user_name: row.get(5)?,
            email: row.get(6)?,
        })
    }

    fn insert_values(draft: &NewSubscription) -> Vec<Value> {
        vec![
            draft.company_name.clone().into(),
            draft.price.into(),
            draft.category.clone().into(),
            draft.description.clone().into(),
            draft.user_name.clone().into(),
            draft.email.clone().into(),
        ]
    }

    fn changes(patch: &SubscriptionPatch) -> Vec<(&'static str, Value)> {
        let mut changes = Vec::new();

        if let Some(value) = patch.company_name.to_value() {
            changes.push(("companyName", value));
        }
        if let Some(value) = patch.price.to_value() {
            changes.push(("price", value));
        }
        if let Some(value) = patch.category.to_value() {
            changes.push(("subscriptionCategory", value));
        }
        if let Some(value) = patch.description.to_value() {
            changes.push(("description", value));
        }
        if let Some(value) = patch.user_name.to_value() {
            changes.push(("userName", value));
        }
        if let Some(value) = patch.email.to_value() {
            changes.push(("emailAssociated", value));
        }

        changes
    }

    fn create_table(connection: &Connection) -> Result<(), rusqlite::Error> {
        // price holds a whole number of cents.
        connection.execute(
            "CREATE TABLE IF NOT EXISTS subscriptions (
                subscriptionID INTEGER PRIMARY KEY,
                companyName TEXT NOT NULL,
                price INTEGER NOT NULL,
                subscriptionCategory TEXT,
                description TEXT,
                userName TEXT,
                emailAssociated TEXT
            );",
            (),
        )?;

        Ok(())
    }
}

#[cfg(test)]
mod price_tests {
    use serde_json::json;

    use super::Price;

    #[test]
    fn from_dollars_rounds_to_the_nearest_cent() {
        assert_eq!(Price::from_dollars(9.99).as_cents(), 999);
        assert_eq!(Price::from_dollars(9.999).as_cents(), 1000);
        assert_eq!(Price::from_dollars(0.0).as_cents(), 0);
    }

    #[test]
    fn price_serializes_as_a_dollar_amount() {
        assert_eq!(
            serde_json::to_value(Price::from_cents(999)).unwrap(),
            json!(9.99)
        );
    }

    #[test]
    fn price_deserializes_from_a_dollar_amount() {
        let price: Price = serde_json::from_value(json!(9.99)).unwrap();

        assert_eq!(price, Price::from_cents(999));
    }
}
