//! Domain DTOs for the item API.
//!
//! # Design
//! `Item` serializes with lowercase field names but deserializes through a
//! hand-written visitor that matches keys case-insensitively, because servers
//! in the wild emit `id`, `Id` and `ID` for the same field. Unknown keys are
//! skipped and missing fields fall back to their defaults.
//!
//! These types mirror the mock-server's schema but are defined independently;
//! integration tests catch any schema drift between the two crates.

use std::fmt;

use serde::de::{self, Deserializer, IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Serialize};

/// A single item as exchanged with the server.
///
/// `id` is assigned by the server and is `0` for an item that has not been
/// created yet.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct Item {
    pub id: i64,
    pub name: String,
    pub description: String,
}

/// Request payload for creating a new item. The server assigns the id, so it
/// is never sent.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewItem {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

impl NewItem {
    /// Attach a server-side id, producing the full record sent on update.
    pub fn with_id(self, id: i64) -> Item {
        Item {
            id,
            name: self.name,
            description: self.description,
        }
    }
}

impl<'de> Deserialize<'de> for Item {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(ItemVisitor)
    }
}

enum Field {
    Id,
    Name,
    Description,
    Other,
}

impl<'de> Deserialize<'de> for Field {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct FieldVisitor;

        impl Visitor<'_> for FieldVisitor {
            type Value = Field;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an item field name")
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<Field, E> {
                let field = if value.eq_ignore_ascii_case("id") {
                    Field::Id
                } else if value.eq_ignore_ascii_case("name") {
                    Field::Name
                } else if value.eq_ignore_ascii_case("description") {
                    Field::Description
                } else {
                    Field::Other
                };
                Ok(field)
            }
        }

        deserializer.deserialize_identifier(FieldVisitor)
    }
}

struct ItemVisitor;

impl<'de> Visitor<'de> for ItemVisitor {
    type Value = Item;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an item object")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Item, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut item = Item::default();
        while let Some(field) = map.next_key::<Field>()? {
            match field {
                Field::Id => item.id = map.next_value()?,
                // A null text field reads as empty.
                Field::Name => item.name = map.next_value::<Option<String>>()?.unwrap_or_default(),
                Field::Description => {
                    item.description = map.next_value::<Option<String>>()?.unwrap_or_default()
                }
                Field::Other => {
                    map.next_value::<IgnoredAny>()?;
                }
            }
        }
        Ok(item)
    }
}
