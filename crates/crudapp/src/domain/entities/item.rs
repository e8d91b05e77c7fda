//! Item - the stored record
//!
//! Pure domain entity without infrastructure dependencies.

use uuid::Uuid;

/// Item - an id/name pair. Only `name` is mutable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: Uuid,
    pub name: String,
}

impl Item {
    /// Create a new Item with a freshly generated ID
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
        }
    }
}
