//! crudapp Data Models
//!
//! Request/response DTOs for the HTTP surface.

mod item;

pub use item::*;
