//! crudapp Domain Library
//!
//! Core domain types and interfaces for the crudapp item store.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain/`): Pure business entities
//!   - `entities/`: Core domain models (Item)
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `repositories/`: Data access interfaces
//!
//! # Usage
//!
//! ```rust,ignore
//! use crudapp::{Item, ItemRepository};
//! ```

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{DomainError, Item};
pub use ports::ItemRepository;
