//! Item Routes
//!
//! HTTP handlers that delegate to ItemService for business logic.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use uuid::Uuid;

use crudapp::DomainError;

use crate::models::{CreateItemRequest, DeleteItemResponse, ItemResponse, UpdateItemRequest};
use crate::AppState;

fn into_http_error(e: DomainError) -> (StatusCode, String) {
    match e {
        DomainError::NotFound { .. } => (StatusCode::NOT_FOUND, "Item not found".to_string()),
        _ => {
            tracing::error!("Item request failed: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    }
}

/// List all Items
#[utoipa::path(
    get,
    path = "/items",
    responses(
        (status = 200, description = "List of all Items", body = Vec<ItemResponse>),
        (status = 500, description = "Internal server error")
    ),
    tag = "Item"
)]
pub async fn list_items(
    State(state): State<AppState>,
) -> Result<Json<Vec<ItemResponse>>, (StatusCode, String)> {
    let items = state
        .item_service
        .list_all()
        .await
        .map_err(into_http_error)?;

    Ok(Json(items.into_iter().map(Into::into).collect()))
}

/// Create new Item
#[utoipa::path(
    post,
    path = "/items",
    request_body = CreateItemRequest,
    responses(
        (status = 200, description = "Item created successfully", body = ItemResponse),
        (status = 400, description = "Malformed JSON body"),
        (status = 422, description = "Missing name field"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Item"
)]
pub async fn create_item(
    State(state): State<AppState>,
    Json(payload): Json<CreateItemRequest>,
) -> Result<Json<ItemResponse>, (StatusCode, String)> {
    let item = state
        .item_service
        .create(payload.name)
        .await
        .map_err(into_http_error)?;

    Ok(Json(item.into()))
}

/// Update Item
#[utoipa::path(
    put,
    path = "/items/{id}",
    params(
        ("id" = Uuid, Path, description = "Item ID")
    ),
    request_body = UpdateItemRequest,
    responses(
        (status = 200, description = "Item updated successfully", body = ItemResponse),
        (status = 404, description = "Item not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Item"
)]
pub async fn update_item(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateItemRequest>,
) -> Result<Json<ItemResponse>, (StatusCode, String)> {
    tracing::info!("PUT request received for ID: {} with name: {:?}", id, payload.name);

    let item = state
        .item_service
        .update(id, payload.name)
        .await
        .map_err(into_http_error)?;

    Ok(Json(item.into()))
}

/// Delete Item
#[utoipa::path(
    delete,
    path = "/items/{id}",
    params(
        ("id" = Uuid, Path, description = "Item ID")
    ),
    responses(
        (status = 200, description = "Item deleted successfully", body = DeleteItemResponse),
        (status = 404, description = "Item not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Item"
)]
pub async fn delete_item(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<DeleteItemResponse>, (StatusCode, String)> {
    state
        .item_service
        .delete(id)
        .await
        .map_err(into_http_error)?;

    Ok(Json(DeleteItemResponse::deleted()))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/items", get(list_items).post(create_item))
        .route("/items/:id", put(update_item).delete(delete_item))
}
