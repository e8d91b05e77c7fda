//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use crate::models::{CreateItemRequest, DeleteItemResponse, ItemResponse, UpdateItemRequest};

use super::health::HealthCheck;

#[derive(OpenApi)]
#[openapi(
    paths(
        super::health::health_check,
        // Item endpoints
        super::item::list_items,
        super::item::create_item,
        super::item::update_item,
        super::item::delete_item,
    ),
    info(
        title = "crudapp API",
        version = "0.1.0",
        description = "Create, list, rename and delete named items.",
        license(name = "MIT"),
    ),
    servers(
        (url = "/", description = "Current server"),
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Item", description = "Item management"),
    ),
    components(
        schemas(
            HealthCheck,
            ItemResponse,
            CreateItemRequest,
            UpdateItemRequest,
            DeleteItemResponse,
        )
    ),
)]
pub struct ApiDoc;
