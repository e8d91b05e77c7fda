//! Application Layer (Use Cases)
//!
//! Orchestrates domain operations over the item repository.

mod item_service;

pub use item_service::ItemService;
