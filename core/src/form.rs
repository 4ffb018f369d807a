//! The form's three text inputs and their conversion into request payloads.

use crate::error::FormError;
use crate::types::{Item, NewItem};

/// Raw text of the id, name and description inputs.
///
/// Name and description are sent verbatim; only the id is validated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemForm {
    pub id: String,
    pub name: String,
    pub description: String,
}

impl ItemForm {
    pub fn new(id: &str, name: &str, description: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
        }
    }

    pub fn parse_id(&self) -> Result<i64, FormError> {
        self.id
            .trim()
            .parse()
            .map_err(|_| FormError::InvalidId(self.id.clone()))
    }

    pub fn to_new_item(&self) -> NewItem {
        NewItem {
            name: self.name.clone(),
            description: self.description.clone(),
        }
    }

    pub fn to_item(&self) -> Result<Item, FormError> {
        Ok(self.to_new_item().with_id(self.parse_id()?))
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
