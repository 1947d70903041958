//
// Copyright (c) 2024 Nathan Fiedler
//
use serde::{Deserialize, Deserializer, Serialize};
use std::cmp;
use std::fmt;

///
/// Employee entity.
///
/// Empty fields are treated the same as absent ones: they are never
/// serialized, neither to JSON nor to stored documents.
///
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier assigned by the service, not the store's own key.
    #[serde(
        rename = "e_id",
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "String::is_empty"
    )]
    pub id: String,
    #[serde(
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "String::is_empty"
    )]
    pub name: String,
    #[serde(
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "String::is_empty"
    )]
    pub department: String,
    #[serde(
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "String::is_empty"
    )]
    pub position: String,
}

// null is just another way of leaving a field out
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}

impl Employee {
    ///
    /// Copy every non-empty field of `partial` over the values in this
    /// record, leaving the rest untouched. Returns `true` if anything changed.
    ///
    pub fn overlay(&mut self, partial: &Employee) -> bool {
        let mut changed = false;
        for (field, value) in [
            (&mut self.id, &partial.id),
            (&mut self.name, &partial.name),
            (&mut self.department, &partial.department),
            (&mut self.position, &partial.position),
        ] {
            if !value.is_empty() && field.as_str() != value.as_str() {
                field.clone_from(value);
                changed = true;
            }
        }
        changed
    }
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Employee({})", self.id)
    }
}

impl cmp::PartialEq for Employee {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl cmp::Eq for Employee {}
