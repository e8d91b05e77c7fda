//! Item DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crudapp::Item;

/// Create Item request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateItemRequest {
    pub name: String,
}

/// Update Item request
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateItemRequest {
    pub name: String,
}

/// Item as stored, keyed by document id
#[derive(Debug, Serialize, ToSchema)]
pub struct ItemResponse {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub name: String,
}

/// Delete confirmation
#[derive(Debug, Serialize, ToSchema)]
pub struct DeleteItemResponse {
    pub message: String,
}

impl From<Item> for ItemResponse {
    fn from(item: Item) -> Self {
        Self {
            id: item.id,
            name: item.name,
        }
    }
}

impl DeleteItemResponse {
    pub fn deleted() -> Self {
        Self {
            message: "Item deleted".to_string(),
        }
    }
}
