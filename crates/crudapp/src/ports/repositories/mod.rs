//! Repository Ports
//!
//! Abstract interfaces for data persistence operations.

mod item_repository;

pub use item_repository::*;
