//! In-memory Repository Implementations

mod item_repository;

pub use item_repository::InMemoryItemRepository;
