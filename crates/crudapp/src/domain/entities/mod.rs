//! Domain Entities
//!
//! - Item: a named record addressed by a store-assigned id

mod item;

pub use item::*;
