//! A three-state field type for sparse update payloads.

use rusqlite::types::Value;
use serde::{Deserialize, Deserializer};

/// One field of a partial-update payload.
///
/// Update payloads must distinguish a field that was left out of the JSON
/// body (keep the stored value) from a field that was explicitly set to
/// `null` (clear the stored value). A plain `Option` collapses those two
/// cases, so payload structs use this type with `#[serde(default)]` on each
/// field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Patch<T> {
    /// The field was omitted from the payload and keeps its stored value.
    Keep,
    /// The field was explicitly set to `null` and is cleared.
    Clear,
    /// The field is set to the given value.
    Set(T),
}

// A manual impl because the derive would also require `T: Default`.
impl<T> Default for Patch<T> {
    fn default() -> Self {
        Patch::Keep
    }
}

impl<T> Patch<T> {
    /// Whether the field was omitted from the payload.
    pub fn is_keep(&self) -> bool {
        matches!(self, Patch::Keep)
    }
}

impl<T> Patch<T>
where
    T: Clone + Into<Value>,
{
    /// The SQL value to write for this field, or `None` if the field keeps
    /// its stored value.
    pub fn to_value(&self) -> Option<Value> {
        match self {
            Patch::Keep => None,
            Patch::Clear => Some(Value::Null),
            Patch::Set(value) => Some(value.clone().into()),
        }
    }
}

impl<'de, T> Deserialize<'de> for Patch<T>
where
    T: Deserialize<'de>,
{
    /// Deserialize a field that is present in the payload: `null` clears,
    /// anything else sets.
    ///
    /// An omitted field never reaches this impl. `#[serde(default)]` on the
    /// payload struct produces [Patch::Keep] for it instead.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(|field| match field {
            Some(value) => Patch::Set(value),
            None => Patch::Clear,
        })
    }
}

#[cfg(test)]
mod patch_tests {
    use rusqlite::types::Value;
    use serde::Deserialize;
    use serde_json::json;

    use super::Patch;

    #[derive(Debug, Deserialize)]
    struct Payload {
        #[serde(default)]
        name: Patch<String>,
    }

    #[test]
    fn omitted_field_deserializes_to_keep() {
        let payload: Payload = serde_json::from_value(json!({})).unwrap();

        assert_eq!(payload.name, Patch::Keep);
    }

    #[test]
    fn null_field_deserializes_to_clear() {
        let payload: Payload = serde_json::from_value(json!({ "name": null })).unwrap();

        assert_eq!(payload.name, Patch::Clear);
    }

    #[test]
    fn value_field_deserializes_to_set() {
        let payload: Payload = serde_json::from_value(json!({ "name": "Acme Inc." })).unwrap();

        assert_eq!(payload.name, Patch::Set("Acme Inc.".to_owned()));
    }

    #[test]
    fn keep_produces_no_sql_value() {
        assert_eq!(Patch::<String>::Keep.to_value(), None);
    }

    #[test]
    fn clear_produces_sql_null() {
        assert_eq!(Patch::<String>::Clear.to_value(), Some(Value::Null));
    }

    #[test]
    fn set_produces_the_sql_value() {
        let patch = Patch::Set("Acme Inc.".to_owned());

        assert_eq!(patch.to_value(), Some(Value::Text("Acme Inc.".to_owned())));
    }
}
