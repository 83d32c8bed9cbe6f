//! Relationship fields are stored by id.
//!
//! Some endpoints populate references (`{"_id": "...", "name": "..."}`) while
//! others return the bare id. Both collapse to the id string so every entity
//! has exactly one shape in the store.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum RawReference {
    Id(String),
    Populated {
        #[serde(rename = "_id", alias = "id")]
        id: String,
    },
}

impl From<RawReference> for String {
    fn from(raw: RawReference) -> Self {
        match raw {
            RawReference::Id(id) | RawReference::Populated { id } => id,
        }
    }
}

pub fn id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    RawReference::deserialize(deserializer).map(String::from)
}

pub fn optional_id<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    Ok(Option::<RawReference>::deserialize(deserializer)?.map(String::from))
}

pub fn ids<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    let raw = Option::<Vec<RawReference>>::deserialize(deserializer)?;
    Ok(raw
        .unwrap_or_default()
        .into_iter()
        .map(String::from)
        .collect())
}
