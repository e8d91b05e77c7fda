use anyhow::Context;
use sqlx::PgPool;
use std::sync::Arc;

use crudapp::ItemRepository;

mod adapters;
mod application;
mod models;
mod routes;

use adapters::PgItemRepository;
use application::ItemService;

/// Item service over whichever repository the process was started with
pub type AppItemService = ItemService<dyn ItemRepository>;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub item_service: Arc<AppItemService>,
}

#[shuttle_runtime::main]
async fn main(#[shuttle_shared_db::Postgres] pool: PgPool) -> shuttle_axum::ShuttleAxum {
    tracing::info!("📦 crudapp API initializing...");

    // Run migrations
    sqlx::migrate!()
        .run(&pool)
        .await
        .context("Failed to run database migrations")?;

    tracing::info!("✅ Database migrations completed");

    let item_repo: Arc<dyn ItemRepository> = Arc::new(PgItemRepository::new(pool));
    let state = AppState {
        item_service: Arc::new(ItemService::new(item_repo)),
    };

    let router = routes::build_router(state);

    tracing::info!("📚 Swagger UI: /swagger-ui");
    tracing::info!("✅ crudapp API ready");

    Ok(router.into())
}
