//! PostgreSQL Repository Implementations

mod item_repository;

pub use item_repository::PgItemRepository;
